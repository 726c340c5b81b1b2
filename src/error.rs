use thiserror::Error;

/// Result type for all fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the heap, the Prim driver, and the graph loader.
///
/// The heap and driver variants all signal contract violations: the
/// computation cannot continue past any of them without producing an
/// undetectably wrong spanning-tree weight, so callers should treat them
/// as fatal to the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Insert was called on a heap already holding `capacity` records.
    #[error("heap capacity exceeded")]
    HeapCapacityExceeded,

    /// Extract-min was called on a heap with no live records.
    #[error("heap is empty")]
    HeapEmpty,

    /// A decrease-key or delete referenced a vertex with no live record.
    #[error("vertex {0} is not in the heap")]
    VertexNotInHeap(usize),

    /// An insert referenced a vertex that already has a live record.
    #[error("vertex {0} is already in the heap")]
    VertexInHeap(usize),

    /// A decrease-key proposed a key larger than the current one.
    #[error("key {proposed} for vertex {vertex} exceeds current key {current}")]
    KeyNotDecreased {
        vertex: usize,
        current: i64,
        proposed: i64,
    },

    /// A vertex id fell outside `0..order`.
    #[error("vertex {vertex} is out of range for a graph of {order} vertices")]
    VertexOutOfRange { vertex: usize, order: usize },

    /// A vertex was pulled from the heap while still unreached, so no
    /// spanning tree exists.
    #[error("graph is not connected: vertex {0} is unreachable")]
    NotConnected(usize),

    /// The graph text was malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The graph file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an `InvalidInput` error from anything stringy.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
