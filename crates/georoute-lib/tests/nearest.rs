use georoute_lib::{nearest_point, Point, RoadMap};

mod common;
use common::{chain_map, fixture_road_map};

#[test]
fn chain_vertex_queried_by_its_own_instance_returns_a_neighbor() {
    let chain = chain_map();
    let b = &chain.map.vertices()[1];
    let nearest = nearest_point(&chain.map, b).expect("other vertices exist");
    assert!(!std::ptr::eq(nearest, b));
    assert_eq!(*nearest, chain.a);
}

#[test]
fn own_vertex_reference_is_skipped() {
    let map = fixture_road_map();
    let durham = &map.vertices()[0];
    let nearest = nearest_point(&map, durham).expect("other vertices exist");
    assert!(!std::ptr::eq(nearest, durham));
    assert_eq!(map.name_of(nearest), Some("chapelhill"));
}

#[test]
fn equal_coordinates_from_outside_match_their_twin() {
    let map = fixture_road_map();
    let query = Point::new(35.9940, -78.8986);
    let nearest = nearest_point(&map, &query).expect("vertices exist");
    assert_eq!(map.name_of(nearest), Some("durham"));
    assert_eq!(query.distance_to(nearest), 0.0);
}

#[test]
fn distance_ties_keep_load_order() {
    // Both candidates sit exactly one degree of arc from the query, so
    // whichever loaded first must win.
    let east = Point::new(0.0, 1.0);
    let north = Point::new(1.0, 0.0);
    let query = Point::new(0.0, 0.0);

    let map = RoadMap::from_parts(
        vec![("east".to_string(), east), ("north".to_string(), north)],
        &[],
    )
    .expect("construct tie map");
    let nearest = *nearest_point(&map, &query).expect("vertices exist");
    assert_eq!(nearest, east);

    let reordered = RoadMap::from_parts(
        vec![("north".to_string(), north), ("east".to_string(), east)],
        &[],
    )
    .expect("construct reordered map");
    let nearest = *nearest_point(&reordered, &query).expect("vertices exist");
    assert_eq!(nearest, north);
}

#[test]
fn empty_map_has_no_nearest_vertex() {
    let map = RoadMap::default();
    assert!(nearest_point(&map, &Point::new(0.0, 0.0)).is_none());
}

#[test]
fn lone_vertex_queried_by_itself_has_no_nearest() {
    let origin = Point::new(35.0, -80.0);
    let map = RoadMap::from_parts(vec![("lonely".to_string(), origin)], &[])
        .expect("construct single vertex map");
    let query = &map.vertices()[0];
    assert!(nearest_point(&map, query).is_none());
}

#[test]
fn campus_coordinates_resolve_to_durham() {
    let map = fixture_road_map();
    let campus = Point::new(36.0014, -78.9382);
    let nearest = nearest_point(&map, &campus).expect("vertices exist");
    assert_eq!(map.name_of(nearest), Some("durham"));
}
