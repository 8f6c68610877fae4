use crate::types::{RoadGraph, RoadKind, RoadLabel};
use hashbrown::HashMap;
use petgraph::visit::EdgeRef;

/// One road of the network.
///
/// Roads are undirected; `a` and `b` only record the direction the
/// road was registered in, which is what the dependency sort keys on.
#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    pub a: usize,
    pub b: usize,
    pub kind: RoadKind,
    pub length: f64,
}

impl Road {
    /// Returns the endpoint of this road that is not `u`.
    pub fn other_end(&self, u: usize) -> usize {
        debug_assert!(u == self.a || u == self.b);
        self.a ^ self.b ^ u
    }

    pub fn is_bridge(&self) -> bool {
        self.kind == RoadKind::Bridge
    }
}

/// One road record of a dataset, still speaking town names.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadRecord {
    pub from: String,
    pub to: String,
    pub kind: RoadKind,
    pub length: f64,
}

impl RoadRecord {
    pub fn new(from: &str, to: &str, kind: RoadKind, length: f64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            kind,
            length,
        }
    }
}

/// A deserialized dataset, as handed over by the (external) reader:
/// the declared counts followed by the town names and road records.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub town_count: usize,
    pub road_count: usize,
    pub towns: Vec<String>,
    pub roads: Vec<RoadRecord>,
}

/// Construction-time validation failure. Fatal to the dataset being
/// built, harmless to everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedNetwork {
    /// A road record references a town name outside the declared set.
    UnknownTown(String),
    /// The same town name was declared twice.
    DuplicateTown(String),
    /// The declared town count does not match the names supplied.
    TownCountMismatch { declared: usize, supplied: usize },
    /// The declared road count does not match the records supplied.
    RoadCountMismatch { declared: usize, supplied: usize },
}

impl std::fmt::Display for MalformedNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedNetwork::UnknownTown(name) => {
                write!(f, "road references unknown town {:?}", name)
            }
            MalformedNetwork::DuplicateTown(name) => {
                write!(f, "town {:?} declared more than once", name)
            }
            MalformedNetwork::TownCountMismatch { declared, supplied } => {
                write!(f, "{} towns declared but {} supplied", declared, supplied)
            }
            MalformedNetwork::RoadCountMismatch { declared, supplied } => {
                write!(f, "{} roads declared but {} supplied", declared, supplied)
            }
        }
    }
}

impl std::error::Error for MalformedNetwork {}

/// The in-memory road network: a flat town arena, a flat road arena
/// and per-town adjacency lists of road ids.
///
/// Every road id appears in both endpoints' adjacency lists, in the
/// order the roads were registered. That order is load-bearing: it is
/// the tie-break of every traversal engine.
///
/// A network is built once ([`build_network`] or
/// [`Network::from_petgraph`]) and read-only afterwards; the engines
/// borrow it and return independently owned results.
#[derive(Debug, Clone)]
pub struct Network {
    towns: Vec<String>,
    roads: Vec<Road>,
    adj: Vec<Vec<usize>>,
}

impl Network {
    fn with_towns(towns: Vec<String>) -> Self {
        let n = towns.len();
        Self {
            towns,
            roads: Vec::new(),
            adj: vec![Vec::new(); n],
        }
    }

    fn add_road(&mut self, a: usize, b: usize, kind: RoadKind, length: f64) -> usize {
        debug_assert!(a < self.towns.len() && b < self.towns.len());
        debug_assert!(length >= 0.0);

        let rid = self.roads.len();
        self.roads.push(Road { a, b, kind, length });
        self.adj[a].push(rid);
        self.adj[b].push(rid);
        rid
    }

    pub fn town_count(&self) -> usize {
        self.towns.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn town_name(&self, u: usize) -> &str {
        &self.towns[u]
    }

    pub fn road(&self, rid: usize) -> &Road {
        &self.roads[rid]
    }

    /// All roads, in registration order. The spanning-tree engine
    /// sorts over this list globally, regardless of endpoints.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Ids of the roads incident to `u`, in registration order.
    pub fn adjacent_roads(&self, u: usize) -> &[usize] {
        &self.adj[u]
    }

    /// Neighbors of `u` as `(other endpoint, road)` pairs, in
    /// registration order. A town connected to `u` by two roads shows
    /// up twice.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, &Road)> {
        self.adj[u].iter().map(move |&rid| {
            let road = &self.roads[rid];
            (road.other_end(u), road)
        })
    }

    /// Builds a network from a petgraph graph whose node weights are
    /// town names. Edge iteration order becomes registration order.
    pub fn from_petgraph(graph: &RoadGraph) -> Result<Self, MalformedNetwork> {
        let towns: Vec<String> = graph.node_weights().cloned().collect();

        {
            let mut seen: HashMap<&str, usize> = HashMap::with_capacity(towns.len());
            for (i, name) in towns.iter().enumerate() {
                if seen.insert(name.as_str(), i).is_some() {
                    return Err(MalformedNetwork::DuplicateTown(name.clone()));
                }
            }
        }

        let mut network = Network::with_towns(towns);
        for e in graph.edge_references() {
            let label = e.weight();
            network.add_road(
                e.source().index(),
                e.target().index(),
                label.kind,
                label.length,
            );
        }

        Ok(network)
    }

    /// Converts back into a petgraph graph, for interop with
    /// petgraph-based tooling.
    pub fn to_petgraph(&self) -> RoadGraph {
        let mut graph = RoadGraph::new_undirected();
        let nodes: Vec<_> = self
            .towns
            .iter()
            .map(|name| graph.add_node(name.clone()))
            .collect();

        for road in &self.roads {
            graph.add_edge(
                nodes[road.a],
                nodes[road.b],
                RoadLabel {
                    kind: road.kind,
                    length: road.length,
                },
            );
        }

        graph
    }
}

/// Validates a dataset and builds the network from it.
///
/// The name-to-index map lives only inside this function; the
/// long-lived model speaks plain indices.
pub fn build_network(data: Dataset) -> Result<Network, MalformedNetwork> {
    if data.towns.len() != data.town_count {
        return Err(MalformedNetwork::TownCountMismatch {
            declared: data.town_count,
            supplied: data.towns.len(),
        });
    }
    if data.roads.len() != data.road_count {
        return Err(MalformedNetwork::RoadCountMismatch {
            declared: data.road_count,
            supplied: data.roads.len(),
        });
    }

    let mut name_map: HashMap<&str, usize> = HashMap::with_capacity(data.towns.len());
    for (i, name) in data.towns.iter().enumerate() {
        if name_map.insert(name.as_str(), i).is_some() {
            return Err(MalformedNetwork::DuplicateTown(name.clone()));
        }
    }

    let mut network = Network::with_towns(data.towns.clone());
    for record in &data.roads {
        let a = *name_map
            .get(record.from.as_str())
            .ok_or_else(|| MalformedNetwork::UnknownTown(record.from.clone()))?;
        let b = *name_map
            .get(record.to.as_str())
            .ok_or_else(|| MalformedNetwork::UnknownTown(record.to.clone()))?;
        network.add_road(a, b, record.kind, record.length);
    }

    Ok(network)
}
