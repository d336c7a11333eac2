use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::RoadMap;
use crate::point::Point;

/// Finds the vertex closest to `query` by great-circle distance.
///
/// Candidates are compared to `query` by object identity, so a reference
/// into the map's own vertex list never matches itself, while an equal
/// point constructed elsewhere can still match its coordinate twin.
/// Distance ties keep the earliest-loaded vertex.
pub fn nearest_point<'a>(map: &'a RoadMap, query: &Point) -> Option<&'a Point> {
    let mut best: Option<&Point> = None;
    let mut best_distance = f64::INFINITY;

    for vertex in map.vertices() {
        // Skip only the identical object, not coordinate twins.
        if std::ptr::eq(vertex, query) {
            continue;
        }
        let distance = query.distance_to(vertex);
        if distance < best_distance {
            best = Some(vertex);
            best_distance = distance;
        }
    }

    best
}

/// Whether a chain of edges joins `start` and `end`.
///
/// Every vertex is considered connected to itself.
pub fn connected(map: &RoadMap, start: &Point, end: &Point) -> Result<bool> {
    for point in [start, end] {
        if !map.contains(point) {
            return Err(Error::UnknownVertex { point: *point });
        }
    }
    if start == end {
        return Ok(true);
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(*start);
    queue.push_back(*start);

    while let Some(current) = queue.pop_front() {
        for neighbor in map.neighbors(&current)? {
            if !visited.insert(*neighbor) {
                continue;
            }
            if neighbor == end {
                debug!(from = %start, to = %end, "target discovered during traversal");
                return Ok(true);
            }
            queue.push_back(*neighbor);
        }
    }

    Ok(false)
}

/// Runs Dijkstra's algorithm to find the route from `start` to `end` with
/// the lowest total great-circle distance.
///
/// The result begins with `start`, ends with `end`, and joins consecutive
/// entries by an edge. Requesting a route from a point to itself is an
/// error even when a self-loop edge exists.
pub fn route(map: &RoadMap, start: &Point, end: &Point) -> Result<Vec<Point>> {
    if start == end {
        return Err(Error::TrivialRoute { point: *start });
    }
    for point in [start, end] {
        if !map.contains(point) {
            return Err(Error::UnknownVertex { point: *point });
        }
    }

    let mut distances: HashMap<Point, f64> = HashMap::new();
    let mut parents: HashMap<Point, Option<Point>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(*start, 0.0);
    parents.insert(*start, None);
    queue.push(QueueEntry::new(*start, 0.0));

    while let Some(entry) = queue.pop() {
        // An entry whose cost no longer matches the best known distance
        // was superseded while it sat in the heap.
        let current_distance = match distances.get(&entry.point) {
            Some(&best) if entry.cost.0 <= best => best,
            _ => continue,
        };

        if entry.point == *end {
            return Ok(reconstruct_path(&parents, start, end));
        }

        for neighbor in map.neighbors(&entry.point)? {
            let candidate = current_distance + entry.point.distance_to(neighbor);
            if candidate < *distances.get(neighbor).unwrap_or(&f64::INFINITY) {
                distances.insert(*neighbor, candidate);
                parents.insert(*neighbor, Some(entry.point));
                queue.push(QueueEntry::new(*neighbor, candidate));
            }
        }
    }

    Err(Error::RouteNotFound {
        start: *start,
        end: *end,
    })
}

/// Total length of `path` in miles, summed over consecutive pairs.
///
/// Empty and single-point paths have length zero.
pub fn route_distance(path: &[Point]) -> f64 {
    path.windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum()
}

fn reconstruct_path(
    parents: &HashMap<Point, Option<Point>>,
    start: &Point,
    end: &Point,
) -> Vec<Point> {
    let mut path = Vec::new();
    let mut current = Some(*end);
    while let Some(point) = current {
        path.push(point);
        if point == *start {
            break;
        }
        current = parents.get(&point).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    point: Point,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(point: Point, cost: f64) -> Self {
        Self {
            point,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.point.cmp(&self.point))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
