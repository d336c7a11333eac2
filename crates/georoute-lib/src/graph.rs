use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::point::Point;

const SUGGESTION_LIMIT: usize = 3;
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Undirected road map over geographic points.
///
/// Vertices keep their load order; adjacency lists are deduplicated and
/// sorted, so repeated edge records collapse into a single connection.
#[derive(Debug, Clone, Default)]
pub struct RoadMap {
    vertices: Vec<Point>,
    names: Vec<String>,
    name_to_index: HashMap<String, usize>,
    index_by_point: HashMap<Point, usize>,
    adjacency: Arc<HashMap<Point, Vec<Point>>>,
    edge_count: usize,
}

impl RoadMap {
    /// Builds a road map from named vertices and index pairs.
    ///
    /// Every vertex gets an adjacency entry even when no edge touches it,
    /// so lookups distinguish "isolated" from "unknown". Names need not be
    /// unique; when several vertices share one, name lookup resolves to the
    /// most recently loaded.
    pub fn from_parts(vertices: Vec<(String, Point)>, edges: &[(usize, usize)]) -> Result<Self> {
        let mut points = Vec::with_capacity(vertices.len());
        let mut names: Vec<String> = Vec::with_capacity(vertices.len());
        let mut name_to_index = HashMap::with_capacity(vertices.len());
        let mut index_by_point: HashMap<Point, usize> = HashMap::with_capacity(vertices.len());
        let mut adjacency: HashMap<Point, Vec<Point>> = HashMap::with_capacity(vertices.len());

        for (index, (name, point)) in vertices.into_iter().enumerate() {
            if !point.lat.is_finite() || !point.lon.is_finite() {
                return Err(Error::NonFiniteCoordinate {
                    name,
                    lat: point.lat,
                    lon: point.lon,
                });
            }
            if let Some(&existing) = index_by_point.get(&point) {
                return Err(Error::DuplicateVertex {
                    first: names[existing].clone(),
                    second: name,
                    point,
                });
            }
            index_by_point.insert(point, index);
            name_to_index.insert(name.clone(), index);
            adjacency.insert(point, Vec::new());
            points.push(point);
            names.push(name);
        }

        for &(a, b) in edges {
            for index in [a, b] {
                if index >= points.len() {
                    return Err(Error::EdgeIndexOutOfRange {
                        index,
                        vertex_count: points.len(),
                    });
                }
            }
            let (from, to) = (points[a], points[b]);
            if let Some(neighbors) = adjacency.get_mut(&from) {
                neighbors.push(to);
            }
            if let Some(neighbors) = adjacency.get_mut(&to) {
                neighbors.push(from);
            }
        }

        let mut edge_count = 0;
        for (point, neighbors) in adjacency.iter_mut() {
            neighbors.sort_unstable();
            neighbors.dedup();
            // Count each undirected edge once; self-loops pair with themselves.
            edge_count += neighbors.iter().filter(|n| **n >= *point).count();
        }

        debug!(
            vertices = points.len(),
            edges = edge_count,
            "constructed road map"
        );

        Ok(Self {
            vertices: points,
            names,
            name_to_index,
            index_by_point,
            adjacency: Arc::new(adjacency),
            edge_count,
        })
    }

    /// All vertices in load order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether `point` is a registered vertex.
    pub fn contains(&self, point: &Point) -> bool {
        self.index_by_point.contains_key(point)
    }

    /// Neighbors of `point`, sorted and deduplicated.
    pub fn neighbors(&self, point: &Point) -> Result<&[Point]> {
        self.adjacency
            .get(point)
            .map(Vec::as_slice)
            .ok_or(Error::UnknownVertex { point: *point })
    }

    /// Name a vertex was registered under, if the point is known.
    pub fn name_of(&self, point: &Point) -> Option<&str> {
        self.index_by_point
            .get(point)
            .map(|&index| self.names[index].as_str())
    }

    /// Looks a vertex up by name, offering close matches on failure.
    ///
    /// When several vertices share a name, the most recently loaded wins.
    pub fn vertex_named(&self, name: &str) -> Result<&Point> {
        match self.name_to_index.get(name) {
            Some(&index) => Ok(&self.vertices[index]),
            None => Err(Error::UnknownName {
                name: name.to_string(),
                suggestions: self.fuzzy_name_matches(name, SUGGESTION_LIMIT),
            }),
        }
    }

    /// Names most similar to `name`, best first, at most `limit` entries.
    pub fn fuzzy_name_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .names
            .iter()
            .map(|candidate| {
                (
                    strsim::jaro_winkler(&needle, &candidate.to_lowercase()),
                    candidate.as_str(),
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.dedup_by(|a, b| a.1 == b.1);
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}
