//! Union-find (disjoint set union) used by Kruskal's algorithm.
//!
//! Elements are dense indices `0..len`. `find` compresses paths fully and
//! `union` attaches the lower-rank root beneath the higher-rank one.

/// A forest of disjoint sets with path compression and union by rank.
///
/// # Examples
/// ```
/// use mstbench_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(!sets.union(1, 0));
/// assert_eq!(sets.find(0), sets.find(1));
/// assert_eq!(sets.components(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Initialises `len` singleton sets, each element its own root with rank 0.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Number of elements tracked by the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the forest tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> usize { self.components }

    /// Returns the representative root of `node`'s set, redirecting every
    /// visited element straight to that root.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` without changes when both already share a root. On a
    /// rank tie the root of `left` becomes the parent and gains one rank.
    ///
    /// # Panics
    /// Panics when either element is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    /// Returns `true` when both elements belong to the same set.
    ///
    /// # Panics
    /// Panics when either element is out of range.
    pub fn same_set(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    #[cfg(test)]
    pub(crate) fn rank_of(&self, node: usize) -> u8 {
        self.rank[node]
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }
}
