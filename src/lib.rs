pub mod error;
pub mod graph;
pub mod heap;
pub mod prim;

pub use error::{Error, Result};
pub use graph::Graph;
pub use heap::{HeapNode, IndexedMinHeap, UNREACHED};
pub use prim::{minimum_spanning_tree, minimum_spanning_tree_random_start, Mst, MstEdge};
