#![no_main]
use libfuzzer_sys::fuzz_target;

mod fuzz_shared;
use fuzz_shared::{fuzz_triangulation, FuzzPoint};

use quad_delaunay::{validate_coordinate, InsertionError};

fuzz_target!(|data: Vec<FuzzPoint>| {
    let mut triangulation = fuzz_triangulation(100.0, 1.0e-6);
    for point in &data {
        let result = triangulation.insert(point.position());
        if validate_coordinate(point.x).is_err() || validate_coordinate(point.y).is_err() {
            assert_eq!(result, Err(InsertionError::NAN));
        } else if point.x.abs() > 20.0 || point.y.abs() > 20.0 {
            // May be outside of the bounding triangle
            continue;
        } else {
            assert!(result.is_ok());
        }
    }
    // Mesh connectivity must survive arbitrary floats, geometry is only checked
    // for exact inputs
    assert_eq!(
        triangulation.num_quad_edges(),
        3 + 3 * triangulation.num_sites()
    );
});
