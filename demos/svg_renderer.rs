//! Renders a random triangulation, its Voronoi diagram and the Voronoi cell of a query
//! point into `images/voronoi.svg`.
use anyhow::Result;
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use svg::node::element::{Circle, Group, Line, Polygon, Rectangle};
use svg::Document;

use quad_delaunay::{DelaunayTriangulation, Point2, TriangulationConfig};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const NUM_SITES: usize = 40;

const SITE_COLOR: &str = "black";
const DELAUNAY_EDGE_COLOR: &str = "blue";
const VORONOI_VERTEX_COLOR: &str = "rgb(128, 0, 0)";
const VORONOI_EDGE_COLOR: &str = "red";
const CIRCLE_COLOR: &str = "lightgray";
const CELL_COLOR: &str = "rgb(255, 224, 192)";

fn line(from: Point2<f64>, to: Point2<f64>, color: &str) -> Line {
    Line::new()
        .set("x1", from.x)
        .set("y1", from.y)
        .set("x2", to.x)
        .set("y2", to.y)
        .set("stroke", color)
        .set("stroke-width", 1)
}

fn dot(center: Point2<f64>, radius: f64, color: &str) -> Circle {
    Circle::new()
        .set("cx", center.x)
        .set("cy", center.y)
        .set("r", radius)
        .set("fill", color)
}

fn render(triangulation: &DelaunayTriangulation<f64>, query: Point2<f64>) -> Document {
    let mut cell_layer = Group::new();
    if let Some(cell) = triangulation.voronoi_cell(query) {
        let polygon = cell.polygon();
        if cell.is_bounded() {
            let points = polygon
                .iter()
                .map(|point| format!("{},{}", point.x, point.y))
                .collect::<Vec<_>>()
                .join(" ");
            cell_layer = cell_layer.add(
                Polygon::new()
                    .set("points", points)
                    .set("fill", CELL_COLOR),
            );
        } else {
            // Unbounded cells extend to infinity, fill the whole view
            cell_layer = cell_layer.add(
                Rectangle::new()
                    .set("width", WIDTH)
                    .set("height", HEIGHT)
                    .set("fill", CELL_COLOR),
            );
        }
        cell_layer = cell_layer.add(line(query, cell.site, VORONOI_EDGE_COLOR));
    }
    cell_layer = cell_layer.add(dot(query, 3.0, VORONOI_EDGE_COLOR));

    let mut circles = Group::new().set("fill", "none").set("stroke", CIRCLE_COLOR);
    for circle in triangulation.circumcircles() {
        circles = circles.add(
            Circle::new()
                .set("cx", circle.center.x)
                .set("cy", circle.center.y)
                .set("r", circle.radius),
        );
    }

    let mut edges = Group::new();
    for [from, to] in triangulation.delaunay_edges() {
        edges = edges.add(line(from, to, DELAUNAY_EDGE_COLOR));
    }
    for [from, to] in triangulation.voronoi_edges() {
        edges = edges.add(line(from, to, VORONOI_EDGE_COLOR));
    }

    let mut points = Group::new();
    for vertex in triangulation.voronoi_vertices() {
        points = points.add(dot(vertex, 2.0, VORONOI_VERTEX_COLOR));
    }
    for site in triangulation.sites() {
        points = points.add(dot(site, 3.0, SITE_COLOR));
    }

    Document::new()
        .set("width", WIDTH)
        .set("height", HEIGHT)
        .set("viewBox", (0.0, 0.0, WIDTH, HEIGHT))
        .add(
            Rectangle::new()
                .set("width", WIDTH)
                .set("height", HEIGHT)
                .set("fill", "white"),
        )
        .add(cell_layer)
        .add(circles)
        .add(edges)
        .add(points)
}

fn main() -> Result<()> {
    let config = TriangulationConfig::default().boundary_size(4000.0);
    let mut triangulation = DelaunayTriangulation::with_config(config)?;

    let mut rng = rand::rngs::StdRng::from_seed(*b"wPYxAkIiHcEmSBAxQFoXFrpYToCe1B71");
    let x_range = Uniform::new(20.0, WIDTH - 20.0);
    let y_range = Uniform::new(20.0, HEIGHT - 20.0);
    for _ in 0..NUM_SITES {
        let site = Point2::new(x_range.sample(&mut rng), y_range.sample(&mut rng));
        triangulation.insert(site)?;
    }

    let query = Point2::new(WIDTH / 2.0, HEIGHT / 2.0);
    std::fs::create_dir_all("images")?;
    svg::save("images/voronoi.svg", &render(&triangulation, query))?;
    println!(
        "Rendered {} sites and {} Voronoi vertices to images/voronoi.svg",
        triangulation.num_sites(),
        triangulation.voronoi_vertices().len()
    );
    Ok(())
}
