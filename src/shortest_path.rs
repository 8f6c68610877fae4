use crate::network::Network;
use fixedbitset::FixedBitSet;

/// Least-cost route table from a single origin town.
///
/// Unreachable towns keep an infinite distance internally and are
/// reported as `None` by every accessor; a predecessor chain is never
/// fabricated for them.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    origin: usize,
    dist: Vec<f64>,
    pred: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Total length of the cheapest route to `v`, or `None` when the
    /// origin cannot reach `v`.
    pub fn distance(&self, v: usize) -> Option<f64> {
        self.dist[v].is_finite().then(|| self.dist[v])
    }

    /// The town preceding `v` on its cheapest route. `None` for the
    /// origin itself and for unreachable towns.
    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.pred[v]
    }

    /// The cheapest route to `v`, origin first. `None` when `v` is
    /// unreachable.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.dist[v].is_finite() {
            return None;
        }

        let mut chain = vec![v];
        let mut current = v;
        while let Some(p) = self.pred[current] {
            chain.push(p);
            current = p;
        }
        debug_assert_eq!(current, self.origin);

        chain.reverse();
        Some(chain)
    }
}

/// Single-source least-cost routes from `origin` (conventionally town
/// 0, the capital) to every town it can reach.
///
/// Straight Dijkstra with an O(n) minimum scan per round, O(n²)
/// total, which is fine at the intended network sizes. The scan is
/// ascending with a strict comparison, so among equally close
/// unsettled towns the lowest index is settled first, keeping results
/// deterministic.
pub fn shortest_paths(network: &Network, origin: usize) -> ShortestPaths {
    let n = network.town_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    let mut settled = FixedBitSet::with_capacity(n);

    dist[origin] = 0.0;

    for _ in 0..n {
        let mut current = None;
        let mut best = f64::INFINITY;
        for u in 0..n {
            if !settled.contains(u) && dist[u] < best {
                best = dist[u];
                current = Some(u);
            }
        }
        // Only unreachable towns left.
        let Some(current) = current else { break };
        settled.insert(current);

        for (v, road) in network.neighbors(current) {
            let candidate = dist[current] + road.length;
            if candidate < dist[v] {
                dist[v] = candidate;
                pred[v] = Some(current);
            }
        }
    }

    ShortestPaths { origin, dist, pred }
}
