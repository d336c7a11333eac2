use std::fmt;

use thiserror::Error;

use crate::point::Point;

/// Convenient result alias for the GeoRoute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Portion of a `.graph` description a load error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Vertices,
    Edges,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Section::Header => "header",
            Section::Vertices => "vertex",
            Section::Edges => "edge",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Graph description ended before the declared record count was read.
    #[error("graph description truncated after {read} of {declared} {section} records")]
    Truncated {
        section: Section,
        declared: usize,
        read: usize,
    },

    /// A record could not be parsed into its expected fields.
    #[error("malformed {section} record on line {line}: {text:?}")]
    Malformed {
        section: Section,
        line: usize,
        text: String,
    },

    /// An edge record referenced a vertex index outside the declared range.
    #[error("edge references vertex index {index}, but only {vertex_count} vertices are declared")]
    EdgeIndexOutOfRange { index: usize, vertex_count: usize },

    /// Two vertex records resolved to the same coordinates.
    #[error("vertices {first:?} and {second:?} share coordinates {point}")]
    DuplicateVertex {
        first: String,
        second: String,
        point: Point,
    },

    /// A vertex record carried a non-finite latitude or longitude.
    #[error("vertex {name:?} has non-finite coordinates ({lat}, {lon})")]
    NonFiniteCoordinate { name: String, lat: f64, lon: f64 },

    /// Raised when a queried point was never registered in the road map.
    #[error("unknown vertex {point}")]
    UnknownVertex { point: Point },

    /// Raised when a vertex name could not be found in the road map.
    #[error("unknown vertex name: {name}{}", format_suggestions(.suggestions))]
    UnknownName {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a route is requested from a point to itself.
    #[error("route start and end are the same point: {point}")]
    TrivialRoute { point: Point },

    /// Raised when no route exists between two vertices.
    #[error("no route found between {start} and {end}")]
    RouteNotFound { start: Point, end: Point },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
