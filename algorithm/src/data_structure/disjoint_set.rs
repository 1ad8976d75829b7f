/// Union-find over the integers `0..n`, with union by rank and path compression
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>
}

impl DisjointSet {
    pub fn new(n: usize) -> DisjointSet {
        DisjointSet {
            parent: (0..n).collect(),
            rank: vec![0; n]
        }
    }

    /// Representative of the set containing `x`. Every node visited on the way up is re-attached
    /// directly to the root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b`. Returns false if they were already the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        if self.rank[ra] < self.rank[rb] {
            self.parent[ra] = rb;
        } else if self.rank[ra] > self.rank[rb] {
            self.parent[rb] = ra;
        } else {
            self.parent[rb] = ra;
            self.rank[ra] += 1;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_union_is_transitive() {
        let mut set = DisjointSet::new(6);
        assert!(set.union(0, 3));
        assert!(set.union(3, 5));
        assert!(!set.union(5, 0));
        assert!(set.union(1, 2));

        let roots = (0..6).map(|x| set.find(x)).collect::<Vec<_>>();
        assert_eq!(roots[0], roots[3]);
        assert_eq!(roots[0], roots[5]);
        assert_eq!(roots[1], roots[2]);
        assert!(roots[0] != roots[1]);
        assert!(roots[4] != roots[0] && roots[4] != roots[1]);
    }

    #[test]
    pub fn test_long_chain_is_compressed() {
        let n = 1000;
        let mut set = DisjointSet::new(n);
        for i in 1..n {
            set.union(i - 1, i);
        }

        let root = set.find(n - 1);
        for i in 0..n {
            assert_eq!(set.find(i), root);
        }
    }
}
