//! Partition events into collision clusters.
//!
//! A cluster is a connected component of the overlap graph: two events share
//! a cluster when they overlap directly, or when a chain of overlapping
//! events links them. Events in different clusters never influence each
//! other's columns or widths.
//!
//! Components are found with a disjoint-set forest. Candidate pairs are
//! visited in sweep order so the inner scan can stop as soon as a later
//! event starts at or after the current event's end.

use crate::event::Event;

/// Cluster membership for a list of events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clusters {
    /// Cluster id of each event, index-aligned with the input slice.
    pub of: Vec<usize>,
    /// Input indices of each cluster's members, in sweep order.
    pub members: Vec<Vec<usize>>,
}

impl Clusters {
    /// Number of clusters.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Group `events` into clusters.
///
/// `order` must be the sweep order of `events`: start, then end, then id.
/// Cluster ids are assigned `0, 1, ..` in order of each cluster's earliest
/// member under that ordering, so they do not depend on input order.
pub fn group(events: &[Event], order: &[usize]) -> Clusters {
    let mut sets = DisjointSet::new(events.len());

    for (pos, &i) in order.iter().enumerate() {
        for &j in &order[pos + 1..] {
            if events[j].start >= events[i].end {
                break;
            }
            if events[i].overlaps(&events[j]) {
                sets.union(i, j);
            }
        }
    }

    let mut cluster_of_root: Vec<Option<usize>> = vec![None; events.len()];
    let mut of = vec![0; events.len()];
    let mut members: Vec<Vec<usize>> = Vec::new();

    for &i in order {
        let root = sets.find(i);
        let cluster = match cluster_of_root[root] {
            Some(c) => c,
            None => {
                let c = members.len();
                cluster_of_root[root] = Some(c);
                members.push(Vec::new());
                c
            }
        };
        of[i] = cluster;
        members[cluster].push(i);
    }

    tracing::debug!(
        events = events.len(),
        clusters = members.len(),
        "grouped events into collision clusters"
    );

    Clusters { of, members }
}

/// Union-find with path halving and union by size.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::sweep_order;

    fn cluster(events: &[Event]) -> Clusters {
        group(events, &sweep_order(events))
    }

    #[test]
    fn test_empty_input() {
        let clusters = cluster(&[]);
        assert!(clusters.is_empty());
        assert!(clusters.of.is_empty());
    }

    #[test]
    fn test_single_event_is_its_own_cluster() {
        let clusters = cluster(&[Event::new("a", 0, 60)]);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters.of, vec![0]);
    }

    #[test]
    fn test_disjoint_events_get_separate_clusters() {
        let events = vec![Event::new("a", 0, 60), Event::new("b", 100, 160)];
        let clusters = cluster(&events);
        assert_eq!(clusters.len(), 2);
        assert_ne!(clusters.of[0], clusters.of[1]);
    }

    #[test]
    fn test_back_to_back_events_are_separate() {
        let events = vec![Event::new("a", 0, 60), Event::new("b", 60, 120)];
        let clusters = cluster(&events);
        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn test_transitive_chain_joins_one_cluster() {
        // a and c never overlap, but both overlap b.
        let events = vec![
            Event::new("a", 0, 60),
            Event::new("b", 50, 110),
            Event::new("c", 100, 160),
        ];
        let clusters = cluster(&events);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters.members[0], vec![0, 1, 2]);
    }

    #[test]
    fn test_long_event_bridges_later_members() {
        // The scan from "a" must not stop at "b"'s end.
        let events = vec![
            Event::new("a", 0, 300),
            Event::new("b", 10, 20),
            Event::new("c", 250, 400),
            Event::new("d", 390, 450),
        ];
        let clusters = cluster(&events);
        assert_eq!(clusters.len(), 1);
    }

    #[test]
    fn test_cluster_ids_follow_sweep_order() {
        let events = vec![
            Event::new("late", 600, 660),
            Event::new("early", 0, 60),
            Event::new("early-2", 30, 90),
        ];
        let clusters = cluster(&events);
        assert_eq!(clusters.of, vec![1, 0, 0]);
        assert_eq!(clusters.members, vec![vec![1, 2], vec![0]]);
    }

    #[test]
    fn test_cluster_ids_independent_of_input_order() {
        let forward = vec![
            Event::new("a", 0, 60),
            Event::new("b", 30, 90),
            Event::new("c", 200, 260),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let f = cluster(&forward);
        let r = cluster(&reversed);
        assert_eq!(f.of[0], r.of[2]);
        assert_eq!(f.of[1], r.of[1]);
        assert_eq!(f.of[2], r.of[0]);
    }
}
