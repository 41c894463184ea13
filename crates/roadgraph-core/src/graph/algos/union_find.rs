//! Disjoint-set forest
//!
//! Elements are dense indices `0..len`. Union by rank keeps the trees
//! shallow and `find` compresses the path it walks.

/// Disjoint-set (union-find) structure over `0..len`
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Every element starts in its own singleton set
    pub fn new(len: usize) -> Self {
        DisjointSet {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Number of disjoint sets remaining
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Representative of the set holding `element`.
    ///
    /// Returns `None` for an element outside `0..len`.
    pub fn find(&mut self, element: usize) -> Option<usize> {
        let mut root = *self.parent.get(element)?;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = element;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        Some(root)
    }

    /// Merge the sets holding `a` and `b`.
    ///
    /// Returns `false` when both are already in the same set (or either
    /// is out of range); nothing changes in that case.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (Some(root_a), Some(root_b)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] = self.rank[root_a].saturating_add(1);
            }
        }
        self.components -= 1;
        true
    }
}
