use crate::network::Network;
use crate::types::RoadKind;
use fixedbitset::FixedBitSet;
use std::collections::VecDeque;

/// One scanned road of a breadth-first visit.
///
/// Every road incident to a visited town is reported, including roads
/// leading back to towns that were already scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct BfsStep {
    pub from: usize,
    pub to: usize,
    pub length: f64,
    pub kind: RoadKind,
}

/// Result of [`bfs`]: the towns in visitation order and the roads
/// scanned while visiting them, in scan order.
#[derive(Debug, Clone, PartialEq)]
pub struct BfsReport {
    pub order: Vec<usize>,
    pub steps: Vec<BfsStep>,
}

/// Breadth-first visit from `start`.
///
/// A town is marked scheduled the instant it is enqueued, not when it
/// is dequeued, so a town never enters the frontier twice. Neighbors
/// are scanned in registration order. Towns unreachable from `start`
/// are silently absent from the report.
pub fn bfs(network: &Network, start: usize) -> BfsReport {
    let mut scheduled = FixedBitSet::with_capacity(network.town_count());
    let mut frontier = VecDeque::new();
    let mut report = BfsReport {
        order: Vec::new(),
        steps: Vec::new(),
    };

    scheduled.insert(start);
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        report.order.push(current);

        for (neighbor, road) in network.neighbors(current) {
            report.steps.push(BfsStep {
                from: current,
                to: neighbor,
                length: road.length,
                kind: road.kind,
            });
            if !scheduled.contains(neighbor) {
                scheduled.insert(neighbor);
                frontier.push_back(neighbor);
            }
        }
    }

    report
}

/// Towns reachable from `start`, in depth-first preorder with
/// registration-order tie-breaks.
pub fn dfs(network: &Network, start: usize) -> Vec<usize> {
    let mut visited = FixedBitSet::with_capacity(network.town_count());
    let mut order = Vec::new();
    dfs_visit(network, start, &mut visited, &mut order, false);
    order
}

/// Recursive component collection. With `skip_bridges` set the walk
/// acts as if every bridge road were deleted; this is the reachability
/// probe of the connectivity engine.
pub(crate) fn dfs_visit(
    network: &Network,
    u: usize,
    visited: &mut FixedBitSet,
    order: &mut Vec<usize>,
    skip_bridges: bool,
) {
    visited.insert(u);
    order.push(u);

    for (v, road) in network.neighbors(u) {
        if skip_bridges && road.is_bridge() {
            continue;
        }
        if !visited.contains(v) {
            dfs_visit(network, v, visited, order, skip_bridges);
        }
    }
}
