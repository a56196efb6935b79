pub mod adjacency;
pub mod algorithms;
pub mod centrality;
pub mod core;
pub mod dag;
pub mod edge;
pub mod factory;
pub mod traits;
pub mod weighted;

pub use adjacency::{AdjacencyContainer, AdjacencyMap, FastAdjacencyMap, OrderedAdjacency};
pub use centrality::{CentralityKind, CentralityMeasure, ClosenessCentrality, DegreeCentrality};
pub use core::{DirectedGraph, SimpleGraph, UndirectedGraph};
pub use dag::DirectedAcyclicGraph;
pub use edge::{Directed, Edge, EdgeKind, Undirected};
pub use factory::GraphFactory;
pub use traits::Graph;
pub use weighted::Weighted;
