//! Union-find with path compression and union by rank, keyed by arbitrary
//! ordered values.
//!
//! Which tree root wins a union is decided by rank, which says nothing about
//! which member should name the merged set. A separate representative table
//! records the member the caller asked to keep.

use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    parent: BTreeMap<T, T>,
    rank: BTreeMap<T, u8>,
    /// Tree root -> canonical member, only when they differ.
    rep: BTreeMap<T, T>,
}

impl<T> Default for UnionFind<T> {
    fn default() -> Self {
        Self {
            parent: BTreeMap::new(),
            rank: BTreeMap::new(),
            rep: BTreeMap::new(),
        }
    }
}

impl<T: Ord + Clone> UnionFind<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tree root of `x`'s set, compressing the path. Unknown values become
    /// singleton sets.
    pub fn find(&mut self, x: &T) -> T {
        let mut root = x.clone();
        loop {
            match self.parent.get(&root) {
                Some(p) if *p != root => root = p.clone(),
                Some(_) => break,
                None => {
                    self.parent.insert(root.clone(), root.clone());
                    self.rank.insert(root.clone(), 0);
                    return root;
                }
            }
        }

        let mut node = x.clone();
        while node != root {
            let next = self.parent.insert(node.clone(), root.clone());
            match next {
                Some(next) => node = next,
                None => break,
            }
        }
        root
    }

    /// Merge the sets of `keep` and `absorb`. The merged set is named by
    /// whatever currently names `keep`'s set.
    pub fn union(&mut self, keep: &T, absorb: &T) {
        let keep_root = self.find(keep);
        let absorb_root = self.find(absorb);
        if keep_root == absorb_root {
            return;
        }

        let keep_canon = self.rep.remove(&keep_root).unwrap_or_else(|| keep_root.clone());
        self.rep.remove(&absorb_root);

        let keep_rank = self.rank.get(&keep_root).copied().unwrap_or(0);
        let absorb_rank = self.rank.get(&absorb_root).copied().unwrap_or(0);
        let new_root = if keep_rank < absorb_rank {
            self.parent.insert(keep_root, absorb_root.clone());
            absorb_root
        } else {
            if keep_rank == absorb_rank {
                self.rank.insert(keep_root.clone(), keep_rank.saturating_add(1));
            }
            self.parent.insert(absorb_root, keep_root.clone());
            keep_root
        };

        if keep_canon != new_root {
            self.rep.insert(new_root, keep_canon);
        }
    }

    /// Canonical member of `x`'s set.
    pub fn canonical(&mut self, x: &T) -> T {
        let root = self.find(x);
        self.rep.get(&root).cloned().unwrap_or(root)
    }

    /// Every value that has been seen.
    pub fn members(&self) -> impl Iterator<Item = &T> {
        self.parent.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_values_are_their_own_sets() {
        let mut uf = UnionFind::new();
        assert_eq!(uf.find(&7), 7);
        assert_eq!(uf.canonical(&7), 7);
        assert_eq!(uf.members().count(), 1);
    }

    #[test]
    fn keep_names_the_merged_set_regardless_of_rank() {
        let mut uf = UnionFind::new();
        // Build a rank-1 tree rooted at 1 so that 1 wins any later union.
        uf.union(&1, &2);
        assert_eq!(uf.canonical(&2), 1);

        // 3 is kept, but the rank-1 tree root becomes the tree root.
        uf.union(&3, &1);
        assert_eq!(uf.find(&3), 1);
        for x in [1, 2, 3] {
            assert_eq!(uf.canonical(&x), 3);
        }
    }

    #[test]
    fn chains_merge_transitively() {
        let mut uf = UnionFind::new();
        uf.union(&"b", &"a");
        uf.union(&"c", &"b");
        uf.union(&"d", &"c");
        for x in ["a", "b", "c", "d"] {
            assert_eq!(uf.canonical(&x), "d");
        }
    }

    #[test]
    fn path_compression_points_at_root() {
        let mut uf = UnionFind::new();
        uf.union(&1, &2);
        uf.union(&3, &4);
        uf.union(&1, &3);
        assert_eq!(uf.find(&4), 1);
        assert_eq!(uf.parent[&4], 1);
    }
}
