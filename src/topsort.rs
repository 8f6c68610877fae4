use crate::network::Network;
use std::collections::VecDeque;

/// Outcome of [`topsort`] on a network whose dependencies close a
/// cycle. A normal result variant, not a failure to unwind past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleDetected;

impl std::fmt::Display for CycleDetected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dependency cycle, no complete ordering exists")
    }
}

/// Dependency-respecting linearization of all towns.
///
/// Roads act directionally here: each road is a constraint that its
/// registration tail precedes its registration head. The ready-queue
/// is FIFO, seeded with the zero-in-degree towns in index order, so
/// the ordering is deterministic. Disconnected inputs are linearized
/// across all their components.
///
/// Returns [`CycleDetected`] without emitting any partial order when
/// fewer than all towns can be drained.
pub fn topsort(network: &Network) -> Result<Vec<usize>, CycleDetected> {
    let n = network.town_count();

    let mut in_degree = vec![0usize; n];
    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
    for road in network.roads() {
        in_degree[road.b] += 1;
        successors[road.a].push(road.b);
    }

    let mut ready: VecDeque<usize> = (0..n).filter(|&u| in_degree[u] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(current) = ready.pop_front() {
        order.push(current);
        for &next in &successors[current] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push_back(next);
            }
        }
    }

    if order.len() < n {
        Err(CycleDetected)
    } else {
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Dataset, RoadRecord, build_network};
    use crate::types::RoadKind;

    fn network(towns: &[&str], roads: &[(&str, &str)]) -> Network {
        build_network(Dataset {
            town_count: towns.len(),
            road_count: roads.len(),
            towns: towns.iter().map(|s| s.to_string()).collect(),
            roads: roads
                .iter()
                .map(|&(a, b)| RoadRecord::new(a, b, RoadKind::Plain, 1.0))
                .collect(),
        })
        .unwrap()
    }

    fn assert_respects_roads(g: &Network, order: &[usize]) {
        let position: Vec<usize> = {
            let mut pos = vec![0; order.len()];
            for (i, &u) in order.iter().enumerate() {
                pos[u] = i;
            }
            pos
        };
        for road in g.roads() {
            assert!(
                position[road.a] < position[road.b],
                "road {} -> {} out of order",
                road.a,
                road.b
            );
        }
    }

    #[test]
    fn test_chain() {
        let g = network(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        assert_eq!(topsort(&g).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_diamond() {
        let g = network(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        let order = topsort(&g).unwrap();
        assert_eq!(order.len(), 4);
        assert_respects_roads(&g, &order);
        // B became ready before C, FIFO keeps it that way.
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_ready_seed_is_index_order() {
        let g = network(&["A", "B", "C"], &[("C", "A")]);
        // B and C start ready; C unlocks A only after both drained.
        assert_eq!(topsort(&g).unwrap(), vec![1, 2, 0]);
    }

    #[test]
    fn test_disconnected_dag_linearizes_everything() {
        let g = network(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("D", "E")],
        );
        let order = topsort(&g).unwrap();
        assert_eq!(order.len(), 5);
        assert_respects_roads(&g, &order);
    }

    #[test]
    fn test_cycle_detected() {
        let g = network(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
        assert_eq!(topsort(&g), Err(CycleDetected));
    }

    #[test]
    fn test_cycle_in_one_component_poisons_nothing_else() {
        // The acyclic component cannot rescue the cyclic one.
        let g = network(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("C", "D"), ("D", "C")],
        );
        assert_eq!(topsort(&g), Err(CycleDetected));
    }

    #[test]
    fn test_repeat_runs_identical() {
        let g = network(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        assert_eq!(topsort(&g), topsort(&g));
    }
}
