#![no_main]
use libfuzzer_sys::fuzz_target;

mod fuzz_shared;
use fuzz_shared::{fuzz_triangulation, FuzzIntPoint};

use quad_delaunay::InsertionOutcome;

fuzz_target!(|data: Vec<FuzzIntPoint>| {
    let mut triangulation = fuzz_triangulation(2000.0, 1.0e-9);
    let mut inserted = Vec::new();
    for point in &data {
        let position = point.position();
        if triangulation.insert(position).unwrap() != InsertionOutcome::AlreadyPresent {
            inserted.push(position);
        }
    }
    triangulation.sanity_check();
    assert_eq!(triangulation.num_sites(), inserted.len());
    assert_eq!(triangulation.num_quad_edges(), 3 + 3 * inserted.len());
});
