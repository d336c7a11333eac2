use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result, Section};
use crate::graph::RoadMap;
use crate::point::Point;

// Cap applied to the header's declared counts before reserving buffers; the
// counts are unvalidated input until the records actually arrive.
const PREALLOC_LIMIT: usize = 1 << 16;

/// Loads a road map from a `.graph` description file.
///
/// The format is line oriented: a header line with the vertex and edge
/// counts, one `name lat lon` line per vertex, then one `a b` line per
/// edge holding zero-based vertex indices.
pub fn load_road_map(path: &Path) -> Result<RoadMap> {
    debug!(path = %path.display(), "loading road map");
    let file = File::open(path)?;
    let map = read_road_map(BufReader::new(file))?;
    debug!(
        vertices = map.vertex_count(),
        edges = map.edge_count(),
        "loaded road map"
    );
    Ok(map)
}

/// Reads a road map from any buffered source in the `.graph` format.
pub fn read_road_map<R: BufRead>(reader: R) -> Result<RoadMap> {
    let mut records = Records::new(reader);

    let (line, text) = records.next_record()?.ok_or(Error::Truncated {
        section: Section::Header,
        declared: 1,
        read: 0,
    })?;
    let (vertex_count, edge_count) = parse_header(line, &text)?;

    let mut vertices = Vec::with_capacity(vertex_count.min(PREALLOC_LIMIT));
    for read in 0..vertex_count {
        let (line, text) = records.next_record()?.ok_or(Error::Truncated {
            section: Section::Vertices,
            declared: vertex_count,
            read,
        })?;
        vertices.push(parse_vertex(line, &text)?);
    }

    let mut edges = Vec::with_capacity(edge_count.min(PREALLOC_LIMIT));
    for read in 0..edge_count {
        let (line, text) = records.next_record()?.ok_or(Error::Truncated {
            section: Section::Edges,
            declared: edge_count,
            read,
        })?;
        edges.push(parse_edge(line, &text)?);
    }

    RoadMap::from_parts(vertices, &edges)
}

/// Line reader that skips blank lines and tracks 1-based line numbers.
struct Records<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Records<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_record(&mut self) -> Result<Option<(usize, String)>> {
        for line in self.lines.by_ref() {
            let text = line?;
            self.line += 1;
            if !text.trim().is_empty() {
                return Ok(Some((self.line, text)));
            }
        }
        Ok(None)
    }
}

fn malformed(section: Section, line: usize, text: &str) -> Error {
    Error::Malformed {
        section,
        line,
        text: text.trim().to_string(),
    }
}

fn parse_header(line: usize, text: &str) -> Result<(usize, usize)> {
    let mut tokens = text.split_whitespace();
    let vertices = tokens.next().and_then(|t| t.parse().ok());
    let edges = tokens.next().and_then(|t| t.parse().ok());
    match (vertices, edges) {
        (Some(vertices), Some(edges)) => Ok((vertices, edges)),
        _ => Err(malformed(Section::Header, line, text)),
    }
}

fn parse_vertex(line: usize, text: &str) -> Result<(String, Point)> {
    let mut tokens = text.split_whitespace();
    let name = tokens.next();
    let lat = tokens.next().and_then(|t| t.parse().ok());
    let lon = tokens.next().and_then(|t| t.parse().ok());
    match (name, lat, lon) {
        (Some(name), Some(lat), Some(lon)) => Ok((name.to_string(), Point::new(lat, lon))),
        _ => Err(malformed(Section::Vertices, line, text)),
    }
}

fn parse_edge(line: usize, text: &str) -> Result<(usize, usize)> {
    let mut tokens = text.split_whitespace();
    let a = tokens.next().and_then(|t| t.parse().ok());
    let b = tokens.next().and_then(|t| t.parse().ok());
    match (a, b) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(malformed(Section::Edges, line, text)),
    }
}
