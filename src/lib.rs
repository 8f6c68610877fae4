// #![warn(missing_docs)]

//! # roadnet
//!
//! A Rust library for analyzing road networks: towns connected by
//! weighted roads, some of them bridges.
//!
//! A [`network::Network`] is built once per dataset and stays
//! read-only; the engines answer structural and optimization queries
//! against it: breadth-first reachability with per-road reporting,
//! dependency (topological) order, single-source shortest paths,
//! minimum spanning trees, bridge-failure component analysis and cut
//! vertex detection.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph) at the API
//! boundary; all engines run on the flat index arenas owned by the
//! network itself.

pub mod articulation;
pub mod connectivity;
pub mod debugging;
pub mod network;
pub mod output;
pub mod shortest_path;
pub mod spanning_tree;
pub mod topsort;
pub mod traversal;
pub mod types;

pub use network::Network;
pub use network::build_network;
pub use types::RoadGraph;
pub use types::RoadKind;
pub use types::RoadLabel;
