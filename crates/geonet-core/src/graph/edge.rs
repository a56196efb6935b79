use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Direction policy of an edge
///
/// Supplies the equality and hashing rules for edge endpoints and tells the
/// graph engine whether an insertion has to be mirrored.
pub trait EdgeKind: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Whether `(a, b)` and `(b, a)` are distinct edges
    const DIRECTED: bool;

    /// Compare two endpoint pairs under this kind's equality
    fn same_endpoints<N: PartialEq>(a: (&N, &N), b: (&N, &N)) -> bool;

    /// Feed both endpoints into `state`, consistent with `same_endpoints`
    fn hash_endpoints<N: Hash, H: Hasher>(from: &N, to: &N, state: &mut H);
}

/// A -> B (source points to target, one-way relationship)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Directed;

/// A <-> B (bidirectional relationship)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Undirected;

impl EdgeKind for Directed {
    const DIRECTED: bool = true;

    fn same_endpoints<N: PartialEq>(a: (&N, &N), b: (&N, &N)) -> bool {
        a.0 == b.0 && a.1 == b.1
    }

    fn hash_endpoints<N: Hash, H: Hasher>(from: &N, to: &N, state: &mut H) {
        from.hash(state);
        to.hash(state);
    }
}

impl EdgeKind for Undirected {
    const DIRECTED: bool = false;

    fn same_endpoints<N: PartialEq>(a: (&N, &N), b: (&N, &N)) -> bool {
        (a.0 == b.0 && a.1 == b.1) || (a.0 == b.1 && a.1 == b.0)
    }

    fn hash_endpoints<N: Hash, H: Hasher>(from: &N, to: &N, state: &mut H) {
        // Commutative so that (a, b) and (b, a) land in the same bucket
        state.write_u64(fingerprint(from).wrapping_add(fingerprint(to)));
    }
}

fn fingerprint<N: Hash>(node: &N) -> u64 {
    let mut hasher = DefaultHasher::new();
    node.hash(&mut hasher);
    hasher.finish()
}

/// An edge between two nodes, annotated with a weight
///
/// Generic over the direction policy `K` ([`Directed`] or [`Undirected`]) and
/// the annotation type `W` (`()` for plain edges). Edges are immutable values;
/// constructing one never touches a graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge<N, K, W = ()> {
    from: N,
    to: N,
    weight: W,
    #[serde(skip)]
    kind: PhantomData<K>,
}

impl<N, K: EdgeKind> Edge<N, K> {
    /// Create a new unweighted edge
    pub fn new(from: N, to: N) -> Self {
        Self::weighted(from, to, ())
    }
}

impl<N, K: EdgeKind, W> Edge<N, K, W> {
    /// Create a new edge carrying `weight`
    pub fn weighted(from: N, to: N, weight: W) -> Self {
        Self {
            from,
            to,
            weight,
            kind: PhantomData,
        }
    }

    /// Whether edges of this type are directed
    pub fn is_directed() -> bool {
        K::DIRECTED
    }

    /// Source node
    pub fn from(&self) -> &N {
        &self.from
    }

    /// Target node
    pub fn to(&self) -> &N {
        &self.to
    }

    /// Annotation carried by this edge
    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Consume the edge, keeping only its endpoints
    pub fn into_endpoints(self) -> (N, N) {
        (self.from, self.to)
    }

    /// Consume the edge into endpoints and annotation
    pub fn into_parts(self) -> (N, N, W) {
        (self.from, self.to, self.weight)
    }

    /// Replace the annotation, keeping the endpoints
    pub fn with_weight<V>(self, weight: V) -> Edge<N, K, V> {
        Edge::weighted(self.from, self.to, weight)
    }

    /// Drop the annotation
    pub fn unweighted(&self) -> Edge<N, K>
    where
        N: Clone,
    {
        Edge::new(self.from.clone(), self.to.clone())
    }

    /// Swap the endpoints
    pub fn reversed(self) -> Self {
        Self::weighted(self.to, self.from, self.weight)
    }

    /// Check if this edge involves a given node (source or target)
    pub fn involves(&self, node: &N) -> bool
    where
        N: PartialEq,
    {
        &self.from == node || &self.to == node
    }

    /// Check if this edge connects two specific nodes (in either direction for undirected)
    pub fn connects(&self, a: &N, b: &N) -> bool
    where
        N: PartialEq,
    {
        K::same_endpoints((&self.from, &self.to), (a, b))
    }
}

impl<N: PartialEq, K: EdgeKind, W: PartialEq> PartialEq for Edge<N, K, W> {
    fn eq(&self, other: &Self) -> bool {
        K::same_endpoints((&self.from, &self.to), (&other.from, &other.to))
            && self.weight == other.weight
    }
}

impl<N: Eq, K: EdgeKind, W: Eq> Eq for Edge<N, K, W> {}

impl<N: Hash, K: EdgeKind, W: Hash> Hash for Edge<N, K, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        K::hash_endpoints(&self.from, &self.to, state);
        self.weight.hash(state);
    }
}

impl<N: fmt::Display, K: EdgeKind, W> fmt::Display for Edge<N, K, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if K::DIRECTED { "->" } else { "--" };
        write!(f, "{} {} {}", self.from, arrow, self.to)
    }
}
