use rand::thread_rng;
use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::heap::{HeapNode, IndexedMinHeap, UNREACHED};

/// One edge of the spanning tree: `vertex` attaches to the tree through
/// `parent` at cost `weight`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstEdge {
    pub vertex: usize,
    pub parent: usize,
    pub weight: i64,
}

/// A minimum spanning tree: its total weight and its `n - 1` edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mst {
    pub total_weight: i64,
    pub edges: Vec<MstEdge>,
}

/// Computes the minimum spanning tree of an undirected graph using Prim's
/// algorithm over an indexed binary min-heap.
///
/// Every vertex is seeded into the heap: the start at weight 0 and
/// attached to itself, the rest unreached. Each of the `n` rounds extracts
/// the minimum record, adds its weight to the total, and relaxes the
/// extracted vertex's still-queued neighbors through `decrease_key`
/// whenever a strictly cheaper edge appears.
///
/// # Arguments
/// * `graph` - The undirected graph to span
/// * `start` - The vertex the tree grows from
///
/// # Returns
/// * `Ok(Mst)` - The total weight and the `(vertex, parent, weight)` edges
/// * `Err(Error)` - If `start` is out of range or the graph is not connected
///
/// # Examples
/// ```
/// use prim_mst::{minimum_spanning_tree, Graph};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4).unwrap();
/// graph.add_edge(0, 2, 2).unwrap();
/// graph.add_edge(1, 2, 1).unwrap();
///
/// let mst = minimum_spanning_tree(&graph, 0).unwrap();
/// assert_eq!(mst.total_weight, 3);
/// ```
///
/// # Complexity
/// * Time: O((V + E) log V) where V is the number of vertices and E is the number of edges
/// * Space: O(V)
///
/// # Errors
/// * `VertexOutOfRange` if `start` is not a vertex of `graph`
/// * `NotConnected` if some vertex is unreachable from `start`
pub fn minimum_spanning_tree(graph: &Graph, start: usize) -> Result<Mst> {
    let n = graph.order();
    if n == 0 {
        return Ok(Mst {
            total_weight: 0,
            edges: Vec::new(),
        });
    }
    if start >= n {
        return Err(Error::VertexOutOfRange { vertex: start, order: n });
    }

    let mut heap = IndexedMinHeap::with_capacity(n);
    for vertex in 0..n {
        let node = if vertex == start {
            HeapNode::new(vertex, Some(start), 0)
        } else {
            HeapNode::unreached(vertex)
        };
        heap.insert(node)?;
    }

    let mut total_weight: i64 = 0;
    let mut edges = Vec::with_capacity(n - 1);

    // A vertex leaves the heap exactly when it joins the tree, so the
    // position table doubles as the visited set.
    for _ in 0..n {
        let node = heap.extract_min()?;
        if node.weight == UNREACHED {
            return Err(Error::NotConnected(node.vertex));
        }
        total_weight += node.weight;
        if node.vertex != start {
            if let Some(parent) = node.tail {
                edges.push(MstEdge {
                    vertex: node.vertex,
                    parent,
                    weight: node.weight,
                });
            }
        }

        for &(neighbor, weight) in graph.neighbors(node.vertex) {
            if let Some(current) = heap.weight_of(neighbor) {
                if weight < current {
                    heap.decrease_key(neighbor, node.vertex, weight)?;
                }
            }
        }
    }

    log::debug!("spanning tree from vertex {start} weighs {total_weight}");
    Ok(Mst {
        total_weight,
        edges,
    })
}

/// Runs [`minimum_spanning_tree`] from a uniformly random start vertex.
///
/// The total weight is invariant to the choice of root; only the parent
/// pointers may differ between runs.
pub fn minimum_spanning_tree_random_start(graph: &Graph) -> Result<Mst> {
    if graph.order() == 0 {
        return minimum_spanning_tree(graph, 0);
    }
    let start = thread_rng().gen_range(0..graph.order());
    minimum_spanning_tree(graph, start)
}
