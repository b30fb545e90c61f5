use std::fs::File;
use std::io::{BufRead, BufReader, Error, Result};
use std::path::Path;

use wpath::Graph;

pub struct Problem {
    pub graph: Graph,
    pub heuristic: Vec<f64>,
}

pub fn read_problem(path: &Path) -> Result<Problem> {
    parse_problem(BufReader::new(File::open(path)?))
}

/// Parses an undirected graph file.
///
/// After `#` comments and blank lines are dropped, the first line holds the node count, the
/// second line one heuristic value per node, and every remaining line an edge `a b cost`.
pub fn parse_problem(reader: impl BufRead) -> Result<Problem> {
    let mut lines = vec![];
    for line in reader.lines() {
        let line = line?;
        let content = line.split('#').next().unwrap_or("").trim();
        if !content.is_empty() {
            lines.push(content.to_owned());
        }
    }
    let mut lines = lines.into_iter();

    let node_count: usize = lines
        .next()
        .ok_or_else(|| Error::other("graph file missing node count"))?
        .parse()
        .map_err(Error::other)?;

    let heuristic = lines
        .next()
        .ok_or_else(|| Error::other("graph file missing heuristic line"))?
        .split_whitespace()
        .map(|token| token.parse::<f64>().map_err(Error::other))
        .collect::<Result<Vec<_>>>()?;

    let mut edges = vec![];
    for line in lines {
        let mut tokens = line.split_whitespace();
        let mut next_field = |field: &str| {
            tokens
                .next()
                .ok_or_else(|| Error::other(format!("edge missing field {field}")))
        };
        let a: usize = next_field("a")?.parse().map_err(Error::other)?;
        let b: usize = next_field("b")?.parse().map_err(Error::other)?;
        let cost: f64 = next_field("cost")?.parse().map_err(Error::other)?;
        edges.push((a, b, cost));
    }

    let graph = Graph::from_undirected_edges(node_count, edges).map_err(Error::other)?;
    Ok(Problem { graph, heuristic })
}
