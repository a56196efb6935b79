use std::collections::hash_map::{Keys, RandomState};
use std::collections::{btree_map, BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};
use std::iter::Flatten;
use std::option;

/// Storage strategy mapping every node to its set of neighbours
///
/// The container knows nothing about edge direction: the graph engine mirrors
/// insertions itself when its edge kind is undirected. Every implementation
/// must keep neighbour sets free of nodes that are not keys of the container.
pub trait AdjacencyContainer: Default + Clone {
    type Node: Clone + Eq + Hash;

    type Nodes<'a>: Iterator<Item = &'a Self::Node>
    where
        Self: 'a;

    type Neighbours<'a>: Iterator<Item = &'a Self::Node>
    where
        Self: 'a;

    /// Add a node without neighbours; returns false if it was already present
    fn add_node(&mut self, node: Self::Node) -> bool;

    fn contains_node(&self, node: &Self::Node) -> bool;

    /// Insert `to` into the neighbour set of `from`, adding both as nodes
    ///
    /// Returns false if the adjacency already existed.
    fn add_adjacency(&mut self, from: Self::Node, to: Self::Node) -> bool;

    fn remove_adjacency(&mut self, from: &Self::Node, to: &Self::Node) -> bool;

    /// Remove a node together with every adjacency that mentions it
    fn remove_node(&mut self, node: &Self::Node) -> bool;

    fn has_adjacency(&self, from: &Self::Node, to: &Self::Node) -> bool;

    /// Neighbours of `node`; empty when the node is unknown
    fn neighbours<'a>(&'a self, node: &Self::Node) -> Self::Neighbours<'a>;

    fn nodes(&self) -> Self::Nodes<'_>;

    fn node_count(&self) -> usize;

    fn clear(&mut self);
}

/// Hash-map backed adjacency container
///
/// `S` selects the hashing policy for nodes; see [`FastAdjacencyMap`] for an
/// `ahash` based variant.
#[derive(Debug, Clone)]
pub struct AdjacencyMap<N, S = RandomState> {
    map: HashMap<N, HashSet<N, S>, S>,
}

/// Adjacency map hashing nodes with `ahash`
pub type FastAdjacencyMap<N> = AdjacencyMap<N, ahash::RandomState>;

impl<N, S: Default> Default for AdjacencyMap<N, S> {
    fn default() -> Self {
        Self {
            map: HashMap::default(),
        }
    }
}

impl<N, S: Default> AdjacencyMap<N, S> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N, S> AdjacencyContainer for AdjacencyMap<N, S>
where
    N: Clone + Eq + Hash,
    S: BuildHasher + Default + Clone,
{
    type Node = N;

    type Nodes<'a>
        = Keys<'a, N, HashSet<N, S>>
    where
        Self: 'a;

    type Neighbours<'a>
        = Flatten<option::IntoIter<&'a HashSet<N, S>>>
    where
        Self: 'a;

    fn add_node(&mut self, node: N) -> bool {
        if self.map.contains_key(&node) {
            return false;
        }
        self.map.insert(node, HashSet::default());
        true
    }

    fn contains_node(&self, node: &N) -> bool {
        self.map.contains_key(node)
    }

    fn add_adjacency(&mut self, from: N, to: N) -> bool {
        self.add_node(to.clone());
        self.map.entry(from).or_default().insert(to)
    }

    fn remove_adjacency(&mut self, from: &N, to: &N) -> bool {
        self.map
            .get_mut(from)
            .is_some_and(|neighbours| neighbours.remove(to))
    }

    fn remove_node(&mut self, node: &N) -> bool {
        if self.map.remove(node).is_none() {
            return false;
        }
        // Directed in-edges are only visible from their source
        for neighbours in self.map.values_mut() {
            neighbours.remove(node);
        }
        true
    }

    fn has_adjacency(&self, from: &N, to: &N) -> bool {
        self.map
            .get(from)
            .is_some_and(|neighbours| neighbours.contains(to))
    }

    fn neighbours<'a>(&'a self, node: &N) -> Self::Neighbours<'a> {
        self.map.get(node).into_iter().flatten()
    }

    fn nodes(&self) -> Self::Nodes<'_> {
        self.map.keys()
    }

    fn node_count(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}

/// Ordered adjacency container
///
/// Iterates nodes and neighbours in ascending order, which makes traversal
/// results reproducible across runs.
#[derive(Debug, Clone)]
pub struct OrderedAdjacency<N> {
    map: BTreeMap<N, BTreeSet<N>>,
}

impl<N> Default for OrderedAdjacency<N> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<N> OrderedAdjacency<N> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N> AdjacencyContainer for OrderedAdjacency<N>
where
    N: Clone + Eq + Hash + Ord,
{
    type Node = N;

    type Nodes<'a>
        = btree_map::Keys<'a, N, BTreeSet<N>>
    where
        Self: 'a;

    type Neighbours<'a>
        = Flatten<option::IntoIter<&'a BTreeSet<N>>>
    where
        Self: 'a;

    fn add_node(&mut self, node: N) -> bool {
        if self.map.contains_key(&node) {
            return false;
        }
        self.map.insert(node, BTreeSet::new());
        true
    }

    fn contains_node(&self, node: &N) -> bool {
        self.map.contains_key(node)
    }

    fn add_adjacency(&mut self, from: N, to: N) -> bool {
        self.add_node(to.clone());
        self.map.entry(from).or_default().insert(to)
    }

    fn remove_adjacency(&mut self, from: &N, to: &N) -> bool {
        self.map
            .get_mut(from)
            .is_some_and(|neighbours| neighbours.remove(to))
    }

    fn remove_node(&mut self, node: &N) -> bool {
        if self.map.remove(node).is_none() {
            return false;
        }
        for neighbours in self.map.values_mut() {
            neighbours.remove(node);
        }
        true
    }

    fn has_adjacency(&self, from: &N, to: &N) -> bool {
        self.map
            .get(from)
            .is_some_and(|neighbours| neighbours.contains(to))
    }

    fn neighbours<'a>(&'a self, node: &N) -> Self::Neighbours<'a> {
        self.map.get(node).into_iter().flatten()
    }

    fn nodes(&self) -> Self::Nodes<'_> {
        self.map.keys()
    }

    fn node_count(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<A: AdjacencyContainer<Node = u32>>() {
        let mut adj = A::default();

        assert!(adj.add_node(1));
        assert!(!adj.add_node(1));
        assert!(adj.add_adjacency(1, 2));
        assert!(!adj.add_adjacency(1, 2));
        assert!(adj.contains_node(&2));
        assert!(adj.has_adjacency(&1, &2));
        assert!(!adj.has_adjacency(&2, &1));
        assert_eq!(adj.node_count(), 2);

        adj.add_adjacency(3, 2);
        assert!(adj.remove_node(&2));
        assert!(!adj.remove_node(&2));
        assert_eq!(adj.neighbours(&1).count(), 0);
        assert_eq!(adj.neighbours(&3).count(), 0);
        assert_eq!(adj.neighbours(&42).count(), 0);

        assert!(adj.add_adjacency(1, 3));
        assert!(adj.remove_adjacency(&1, &3));
        assert!(!adj.remove_adjacency(&1, &3));
        assert!(!adj.remove_adjacency(&7, &8));

        adj.clear();
        assert_eq!(adj.nodes().count(), 0);
    }

    #[test]
    fn test_adjacency_map_contract() {
        exercise::<AdjacencyMap<u32>>();
    }

    #[test]
    fn test_fast_adjacency_map_contract() {
        exercise::<FastAdjacencyMap<u32>>();
    }

    #[test]
    fn test_ordered_adjacency_contract() {
        exercise::<OrderedAdjacency<u32>>();
    }

    #[test]
    fn test_ordered_adjacency_iterates_in_order() {
        let mut adj = OrderedAdjacency::new();
        adj.add_adjacency(5, 3);
        adj.add_adjacency(5, 1);
        adj.add_adjacency(5, 4);

        let nodes: Vec<u32> = adj.nodes().copied().collect();
        let neighbours: Vec<u32> = adj.neighbours(&5).copied().collect();

        assert_eq!(nodes, vec![1, 3, 4, 5]);
        assert_eq!(neighbours, vec![1, 3, 4]);
    }
}
