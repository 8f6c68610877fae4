use crate::network::Network;
use radsort::sort_by_key;

const UNASSIGNED: usize = usize::MAX;

/// Minimum-cost set of roads connecting the network, as `(a, b)`
/// endpoint pairs in the order the roads were consumed.
///
/// Kruskal over the flat road list: roads are taken ascending by
/// length (equal lengths keep registration order, the sort is
/// stable), and a road is consumed only when it joins two towns that
/// are not yet in the same component. On a disconnected network the
/// roads simply run out early and the forest built so far is
/// returned, one tree per component.
pub fn minimum_spanning_tree(network: &Network) -> Vec<(usize, usize)> {
    let (picked, _) = kruskal(network);
    picked
        .into_iter()
        .map(|rid| {
            let road = network.road(rid);
            (road.a, road.b)
        })
        .collect()
}

/// Returns the consumed road ids plus the final component-label
/// array. Merging two labeled components rewrites every town that
/// carries the losing label, so the label array always reflects the
/// true partition; a merge that only records the stale label on the
/// side would never converge.
fn kruskal(network: &Network) -> (Vec<usize>, Vec<usize>) {
    let n = network.town_count();

    let mut order: Vec<usize> = (0..network.road_count()).collect();
    sort_by_key(&mut order, |&rid| network.road(rid).length);

    let mut label = vec![UNASSIGNED; n];
    let mut next_label = 0;
    let mut picked = Vec::new();

    for rid in order {
        if picked.len() + 1 >= n {
            // n - 1 roads span the whole network
            break;
        }

        let road = network.road(rid);
        let (a, b) = (road.a, road.b);
        if a == b {
            // a loop road can never join two components
            continue;
        }

        match (label[a] == UNASSIGNED, label[b] == UNASSIGNED) {
            (true, true) => {
                label[a] = next_label;
                label[b] = next_label;
                next_label += 1;
                picked.push(rid);
            }
            (true, false) => {
                label[a] = label[b];
                picked.push(rid);
            }
            (false, true) => {
                label[b] = label[a];
                picked.push(rid);
            }
            (false, false) => {
                if label[a] == label[b] {
                    // would close a cycle
                    continue;
                }
                let winner = label[a];
                let loser = label[b];
                for l in label.iter_mut() {
                    if *l == loser {
                        *l = winner;
                    }
                }
                picked.push(rid);
            }
        }
    }

    (picked, label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Dataset, RoadRecord, build_network};
    use crate::types::{RoadGraph, RoadKind, RoadLabel};
    use petgraph::visit::NodeIndexable;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn network(towns: &[&str], roads: &[(&str, &str, f64)]) -> Network {
        build_network(Dataset {
            town_count: towns.len(),
            road_count: roads.len(),
            towns: towns.iter().map(|s| s.to_string()).collect(),
            roads: roads
                .iter()
                .map(|&(a, b, length)| RoadRecord::new(a, b, RoadKind::Plain, length))
                .collect(),
        })
        .unwrap()
    }

    #[test]
    fn test_square_drops_heaviest_road() {
        let g = network(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1.0),
                ("B", "C", 2.0),
                ("C", "D", 3.0),
                ("D", "A", 4.0),
            ],
        );
        let tree = minimum_spanning_tree(&g);
        assert_eq!(tree, vec![(0, 1), (1, 2), (2, 3)]);

        let (picked, _) = kruskal(&g);
        let total: f64 = picked.iter().map(|&rid| g.road(rid).length).sum();
        assert_eq!(total, 6.0);
    }

    #[test]
    fn test_equal_lengths_keep_registration_order() {
        let g = network(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)],
        );
        assert_eq!(minimum_spanning_tree(&g), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_merge_relabels_every_town_of_the_losing_component() {
        // Two 3-town components grow first, then one road joins them.
        let g = network(
            &["A", "B", "C", "D", "E", "F"],
            &[
                ("A", "B", 1.0),
                ("B", "C", 1.0),
                ("D", "E", 1.0),
                ("E", "F", 1.0),
                ("C", "D", 5.0),
            ],
        );
        let (picked, label) = kruskal(&g);
        assert_eq!(picked.len(), 5);
        for u in 0..6 {
            assert_eq!(label[u], label[0], "town {} kept a stale label", u);
        }
    }

    #[test]
    fn test_disconnected_network_yields_a_forest() {
        let g = network(
            &["A", "B", "C", "D", "E"],
            &[("A", "B", 1.0), ("C", "D", 1.0), ("D", "E", 2.0), ("C", "E", 3.0)],
        );
        let tree = minimum_spanning_tree(&g);
        assert_eq!(tree, vec![(0, 1), (2, 3), (3, 4)]);

        let (_, label) = kruskal(&g);
        assert_eq!(label[0], label[1]);
        assert_eq!(label[2], label[3]);
        assert_eq!(label[3], label[4]);
        assert_ne!(label[0], label[2]);
    }

    #[test]
    fn test_single_town_needs_no_roads() {
        let g = network(&["A"], &[]);
        assert!(minimum_spanning_tree(&g).is_empty());
    }

    fn random_network(n: usize, m: usize, seed: u64) -> Network {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = RoadGraph::new_undirected();

        for i in 0..n {
            graph.add_node(format!("T{}", i));
            if i > 0 {
                let j = rng.random_range(0..i);
                graph.add_edge(
                    graph.from_index(i),
                    graph.from_index(j),
                    RoadLabel {
                        kind: RoadKind::Plain,
                        length: rng.random_range(1..=9) as f64,
                    },
                );
            }
        }

        for _ in n - 1..m {
            let s = rng.random_range(0..n);
            let t = rng.random_range(0..n);
            graph.add_edge(
                graph.from_index(s),
                graph.from_index(t),
                RoadLabel {
                    kind: RoadKind::Plain,
                    length: rng.random_range(1..=9) as f64,
                },
            );
        }

        Network::from_petgraph(&graph).unwrap()
    }

    /// Prim's algorithm as an independent reference for the total
    /// tree weight, which is the same for every minimum spanning
    /// tree. Integer-valued lengths keep all sums exact.
    fn prim_total(g: &Network) -> f64 {
        let n = g.town_count();
        let mut in_tree = vec![false; n];
        let mut cost = vec![f64::INFINITY; n];
        cost[0] = 0.0;
        let mut total = 0.0;

        for _ in 0..n {
            let mut u = None;
            let mut best = f64::INFINITY;
            for v in 0..n {
                if !in_tree[v] && cost[v] < best {
                    best = cost[v];
                    u = Some(v);
                }
            }
            let Some(u) = u else { break };
            in_tree[u] = true;
            total += cost[u];

            for (v, road) in g.neighbors(u) {
                if !in_tree[v] && road.length < cost[v] {
                    cost[v] = road.length;
                }
            }
        }

        total
    }

    #[test]
    fn test_random_networks_match_prim_weight() {
        for seed in 0..10 {
            let g = random_network(25, 50, seed);
            let (picked, _) = kruskal(&g);
            assert_eq!(picked.len(), g.town_count() - 1, "seed {}", seed);

            let total: f64 = picked.iter().map(|&rid| g.road(rid).length).sum();
            assert_eq!(total, prim_total(&g), "seed {}", seed);
        }
    }

    #[test]
    fn test_repeat_runs_identical() {
        let g = random_network(20, 40, 3);
        assert_eq!(minimum_spanning_tree(&g), minimum_spanning_tree(&g));
    }
}
