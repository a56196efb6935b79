//! Traversal engine and the analyses built on it
//!
//! Every algorithm here is generic over [`Graph`](crate::graph::Graph) and
//! allocates its search state per call.

pub mod components;
pub mod contraction;
pub mod cycles;
pub mod path;
pub mod search;

pub use components::{connected_components, connected_components_by, ConnectedComponents};
pub use contraction::contract;
pub use cycles::{has_cycle, topological_order, would_create_cycle};
pub use path::{find_path, has_path, reachable_from, shortest_path, SearchPath};
pub use search::{
    breadth_first, depth_first, search, traverse, traverse_all, NodeStatus, Search,
    SearchOutcome, Strategy, Traversal, VisitOrder,
};
