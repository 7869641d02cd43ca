use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use crate::error::{Error, Result};

pub type VertexId = u64;

/// A directed `from -> to` relation, as read from one record of the edge list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: f64) -> Self {
        Self { from, to, weight }
    }

    pub fn unweighted(from: VertexId, to: VertexId) -> Self {
        Self::new(from, to, 0.0)
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((from, to): (VertexId, VertexId)) -> Self {
        Self::unweighted(from, to)
    }
}

impl From<(VertexId, VertexId, f64)> for Edge {
    fn from((from, to, weight): (VertexId, VertexId, f64)) -> Self {
        Self::new(from, to, weight)
    }
}

fn parse_vertex(line: usize, value: &str) -> Result<VertexId> {
    value.parse::<VertexId>().map_err(|_| Error::InvalidVertex {
        line,
        value: value.to_string(),
    })
}

fn parse_fields(line: usize, text: &str) -> Result<Edge> {
    let mut fields = text.split(',').map(str::trim);

    let from = match fields.next() {
        Some(s) if !s.is_empty() => parse_vertex(line, s)?,
        _ => return Err(Error::MissingField { line, field: "from" }),
    };
    let to = match fields.next() {
        Some(s) if !s.is_empty() => parse_vertex(line, s)?,
        _ => return Err(Error::MissingField { line, field: "to" }),
    };
    let weight = match fields.next() {
        Some(s) if !s.is_empty() => {
            s.parse::<f64>().map_err(|_| Error::InvalidWeight {
                line,
                value: s.to_string(),
            })?
        }
        _ => 0.0,
    };
    if fields.next().is_some() {
        return Err(Error::ExtraField { line });
    }

    Ok(Edge::new(from, to, weight))
}

/**
 *  Parses a single `from,to[,weight]` record. Returns `None` for blank lines
 *  and '#'-comments.
 */
fn parse_record(line: usize, text: &str) -> Option<Result<Edge>> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return None;
    }
    Some(parse_fields(line, text))
}

/// Reads an ordered edge list, one comma-separated record per line.
pub fn parse_edges<R: BufRead>(reader: R) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(edge) = parse_record(i + 1, &line) {
            let edge = edge?;
            debug!("edge: {} -> {} (weight: {})", edge.from, edge.to, edge.weight);
            edges.push(edge);
        }
    }

    Ok(edges)
}

pub fn read_edges<P: AsRef<Path>>(path: P) -> Result<Vec<Edge>> {
    let file = File::open(path.as_ref())?;
    debug!("Reading edges from: {}", path.as_ref().display());
    parse_edges(BufReader::new(file))
}
