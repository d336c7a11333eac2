//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use georoute_lib::{load_road_map, Point, RoadMap};

/// Path to the fixtures directory shared by integration tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the minimal North Carolina road map fixture.
#[allow(dead_code)]
pub fn fixture_graph_path() -> PathBuf {
    fixtures_dir().join("nc_minimal.graph")
}

/// Loads the North Carolina fixture road map.
#[allow(dead_code)]
pub fn fixture_road_map() -> RoadMap {
    load_road_map(&fixture_graph_path()).expect("load nc_minimal.graph fixture")
}

/// Small map used across pathfinding tests: a chain `a - b - c` plus an
/// isolated vertex `d` far away from the others.
#[allow(dead_code)]
pub struct ChainMap {
    pub map: RoadMap,
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub d: Point,
}

#[allow(dead_code)]
pub fn chain_map() -> ChainMap {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(0.0, 1.0);
    let c = Point::new(0.0, 2.0);
    let d = Point::new(5.0, 5.0);
    let map = RoadMap::from_parts(
        vec![
            ("a".to_string(), a),
            ("b".to_string(), b),
            ("c".to_string(), c),
            ("d".to_string(), d),
        ],
        &[(0, 1), (1, 2)],
    )
    .expect("construct chain map");
    ChainMap { map, a, b, c, d }
}
