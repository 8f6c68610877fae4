/// Enum representing the type of road in a network.
///
/// `Bridge` roads are the ones deleted by the failure-mode
/// connectivity analysis; every other engine treats both kinds alike.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoadKind {
    Plain,
    Bridge,
}

impl std::fmt::Display for RoadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoadKind::Plain => write!(f, "Plain"),
            RoadKind::Bridge => write!(f, "Bridge"),
        }
    }
}

/// Edge weight carried by [`RoadGraph`].
#[derive(Clone, PartialEq, Debug)]
pub struct RoadLabel {
    pub kind: RoadKind,
    pub length: f64,
}

/// Wrapper for petgraph's graph type.
///
/// Node weights are town names, edge weights are [`RoadLabel`]s.
pub type RoadGraph = petgraph::graph::UnGraph<String, RoadLabel>;
