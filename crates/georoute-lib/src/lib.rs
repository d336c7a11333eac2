//! GeoRoute library entry points.
//!
//! This crate exposes helpers to load a road map from its `.graph`
//! description, query the nearest vertex to an arbitrary coordinate, test
//! connectivity, and compute shortest routes by great-circle distance.
//! Consumers should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod load;
pub mod path;
pub mod point;

pub use error::{Error, Result, Section};
pub use graph::RoadMap;
pub use load::{load_road_map, read_road_map};
pub use path::{connected, nearest_point, route, route_distance};
pub use point::Point;
