use crate::network::Network;
use crate::traversal::dfs_visit;
use fixedbitset::FixedBitSet;

/// Partition of all towns into connected components.
///
/// Each component lists its towns in depth-first preorder from the
/// component's seed. Seeds are consumed from the low end of the index
/// range, so components appear ordered by their lowest-numbered town.
pub fn components(network: &Network) -> Vec<Vec<usize>> {
    partition(network, false)
}

/// Components of the sub-network left after deleting every bridge
/// road: the failure-mode picture of the network.
///
/// Ordering matches [`components`]: seeds from the low end of the
/// index range.
pub fn components_excluding_bridges(network: &Network) -> Vec<Vec<usize>> {
    partition(network, true)
}

fn partition(network: &Network, skip_bridges: bool) -> Vec<Vec<usize>> {
    let n = network.town_count();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut parts = Vec::new();

    for u in 0..n {
        if !visited.contains(u) {
            let mut component = Vec::new();
            dfs_visit(network, u, &mut visited, &mut component, skip_bridges);
            parts.push(component);
        }
    }

    parts
}
