use crate::network::Network;

/// Role a road ends up with in the depth-first forest.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoadRole {
    Unvisited,
    Tree,
    Back,
}

/// Depth-first annotations of the whole network: discovery numbers,
/// low points, tree parents, per-road roles and the cut-vertex flags
/// derived from them.
///
/// Produced by [`dfs_tree`]; [`crate::debugging::draw_dfs_tree`]
/// renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct DfsTree {
    /// Discovery order of each town.
    pub num: Vec<usize>,
    /// Lowest discovery number reachable from the town's subtree
    /// using at most one back road.
    pub low: Vec<usize>,
    /// Tree parent, `None` for component roots.
    pub parent: Vec<Option<usize>>,
    /// Role of each road, indexed by road id.
    pub roles: Vec<RoadRole>,
    /// Whether removing the town disconnects its component.
    pub is_cut: Vec<bool>,
}

/// Runs the numbering DFS over every component (roots taken in
/// ascending index order) and computes low points and cut flags.
pub fn dfs_tree(network: &Network) -> DfsTree {
    let n = network.town_count();
    let mut tree = DfsTree {
        num: vec![usize::MAX; n],
        low: vec![usize::MAX; n],
        parent: vec![None; n],
        roles: vec![RoadRole::Unvisited; network.road_count()],
        is_cut: vec![false; n],
    };
    let mut time = 0;

    for u in 0..n {
        if tree.num[u] == usize::MAX {
            dfs(network, u, None, &mut time, &mut tree);
        }
    }

    tree
}

/// Towns whose removal disconnects their component, ascending.
pub fn articulation_points(network: &Network) -> Vec<usize> {
    let tree = dfs_tree(network);
    tree.is_cut
        .iter()
        .enumerate()
        .filter_map(|(u, &cut)| cut.then_some(u))
        .collect()
}

/// Returns the low point of `u`.
///
/// Every road is given its role the first time it is scanned and
/// skipped on the second scan from the other endpoint. The parent
/// road is therefore recognized by id, not by endpoint: a second road
/// to the parent town acts as a back road, which is what a parallel
/// road means for vertex cuts.
fn dfs(
    network: &Network,
    u: usize,
    parent: Option<usize>,
    time: &mut usize,
    tree: &mut DfsTree,
) -> usize {
    tree.num[u] = *time;
    *time += 1;
    let mut low = tree.num[u];
    let mut is_potential_cut = parent.is_some();

    for &rid in network.adjacent_roads(u) {
        if tree.roles[rid] != RoadRole::Unvisited {
            continue;
        }
        let v = network.road(rid).other_end(u);

        if tree.num[v] == usize::MAX {
            tree.roles[rid] = RoadRole::Tree;
            tree.parent[v] = Some(u);
            let low_v = dfs(network, v, Some(u), time, tree);

            low = low.min(low_v);
            if low_v >= tree.num[u] && is_potential_cut {
                tree.is_cut[u] = true;
            }
            // from the second child on even a root is a cut candidate
            is_potential_cut = true;
        } else {
            // an unlabeled road to a numbered town always points at an
            // ancestor: the descendant side labels its roads first
            tree.roles[rid] = RoadRole::Back;
            low = low.min(tree.num[v]);
        }
    }

    tree.low[u] = low;
    low
}
