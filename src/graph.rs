use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Undirected weighted graph stored as adjacency lists.
///
/// Vertices are identified by `0..n-1`. Each undirected edge is
/// materialized as one `(neighbor, weight)` entry on both endpoints, so
/// for every entry `(v, w)` in `u`'s list the symmetric entry `(u, w)`
/// appears in `v`'s list. Weights are plain `i64`s; negative weights are
/// accepted as-is.
#[derive(Clone, Debug)]
pub struct Graph {
    n: usize,
    m: usize,
    adjacency: Vec<Vec<(usize, i64)>>,
}

impl Graph {
    /// Creates a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Graph {
            n,
            m: 0,
            adjacency: vec![Vec::new(); n],
        }
    }

    /// Adds an undirected edge between `u` and `v` with weight `w`.
    ///
    /// Both endpoints must be in `0..n`. Parallel edges and self-loops are
    /// stored as given.
    pub fn add_edge(&mut self, u: usize, v: usize, w: i64) -> Result<()> {
        for vertex in [u, v] {
            if vertex >= self.n {
                return Err(Error::VertexOutOfRange {
                    vertex,
                    order: self.n,
                });
            }
        }
        self.adjacency[u].push((v, w));
        self.adjacency[v].push((u, w));
        self.m += 1;
        Ok(())
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.n
    }

    /// Number of undirected edges.
    pub fn size(&self) -> usize {
        self.m
    }

    /// The `(neighbor, weight)` entries of `v`.
    pub fn neighbors(&self, v: usize) -> &[(usize, i64)] {
        &self.adjacency[v]
    }

    /// Reads a graph from the line-oriented text format.
    ///
    /// The first line holds `n m`; each of the following `m` lines holds
    /// `u v w`, one undirected edge with 1-based vertex ids. Malformed
    /// lines are reported with their 1-based edge line number, before the
    /// algorithm ever runs.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let header = lines
            .next()
            .ok_or_else(|| Error::invalid_input("could not read the graph header"))??;
        let mut tokens = header.split_whitespace();
        let n: usize = parse_token(tokens.next(), "the number of vertices")?;
        let m: usize = parse_token(tokens.next(), "the number of edges")?;

        let mut graph = Graph::new(n);
        for i in 1..=m {
            let line = lines
                .next()
                .ok_or_else(|| Error::invalid_input(format!("could not read edge on line {i}")))??;
            let mut tokens = line.split_whitespace();
            let u: usize = parse_token(tokens.next(), &format!("vertex 1 on line {i}"))?;
            let v: usize = parse_token(tokens.next(), &format!("vertex 2 on line {i}"))?;
            let w: i64 = parse_token(tokens.next(), &format!("weight on line {i}"))?;
            for vertex in [u, v] {
                if vertex == 0 || vertex > n {
                    return Err(Error::invalid_input(format!(
                        "vertex {vertex} on line {i} is out of range 1..={n}"
                    )));
                }
            }
            graph.add_edge(u - 1, v - 1, w)?;
        }

        log::debug!("loaded graph with {n} vertices and {m} edges");
        Ok(graph)
    }

    /// Reads a graph from the file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

fn parse_token<T: FromStr>(token: Option<&str>, what: &str) -> Result<T> {
    let token =
        token.ok_or_else(|| Error::invalid_input(format!("could not read {what}")))?;
    token
        .parse()
        .map_err(|_| Error::invalid_input(format!("could not parse {what} from '{token}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 7).unwrap();
        graph.add_edge(1, 2, -4).unwrap();

        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 2);
        assert_eq!(graph.neighbors(0), &[(1, 7)]);
        assert_eq!(graph.neighbors(1), &[(0, 7), (2, -4)]);
        assert_eq!(graph.neighbors(2), &[(1, -4)]);
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut graph = Graph::new(2);
        assert!(matches!(
            graph.add_edge(0, 2, 1),
            Err(Error::VertexOutOfRange { vertex: 2, order: 2 })
        ));
    }

    #[test]
    fn test_from_reader() {
        let input = "5 6\n1 2 2\n1 3 3\n2 3 1\n2 4 4\n3 4 5\n4 5 6\n";
        let graph = Graph::from_reader(input.as_bytes()).unwrap();

        assert_eq!(graph.order(), 5);
        assert_eq!(graph.size(), 6);
        // Ids are shifted to 0-based and both directions are materialized.
        assert_eq!(graph.neighbors(0), &[(1, 2), (2, 3)]);
        assert_eq!(graph.neighbors(4), &[(3, 6)]);
        for u in 0..graph.order() {
            for &(v, w) in graph.neighbors(u) {
                assert!(graph.neighbors(v).contains(&(u, w)));
            }
        }
    }

    #[test]
    fn test_from_reader_negative_weights() {
        let graph = Graph::from_reader("2 1\n1 2 -9\n".as_bytes()).unwrap();
        assert_eq!(graph.neighbors(0), &[(1, -9)]);
    }

    #[test]
    fn test_from_reader_empty_input() {
        assert!(matches!(
            Graph::from_reader("".as_bytes()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_reader_bad_header() {
        assert!(matches!(
            Graph::from_reader("5\n".as_bytes()),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            Graph::from_reader("five 6\n".as_bytes()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_reader_short_edge_list() {
        let err = Graph::from_reader("3 2\n1 2 1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_from_reader_bad_edge_token() {
        let err = Graph::from_reader("2 1\n1 x 1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref msg) if msg.contains("vertex 2")));
    }

    #[test]
    fn test_from_reader_vertex_out_of_range() {
        assert!(matches!(
            Graph::from_reader("2 1\n1 3 1\n".as_bytes()),
            Err(Error::InvalidInput(_))
        ));
        // Ids are 1-based, so 0 is out of range too.
        assert!(matches!(
            Graph::from_reader("2 1\n0 1 1\n".as_bytes()),
            Err(Error::InvalidInput(_))
        ));
    }
}
