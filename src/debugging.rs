use dot::{Edges, GraphWalk, Labeller, Nodes};

use crate::articulation::{DfsTree, RoadRole};
use crate::network::Network;

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    source: Node,
    target: Node,
    role: RoadRole,
}

struct Graph<'a> {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    network: &'a Network,
    tree: &'a DfsTree,
}

impl<'a> Labeller<'a, Node, Edge> for Graph<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("G").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        dot::LabelText::label(format!(
            "{}\nnum:{} low:{}\np:{}{}",
            self.network.town_name(*n),
            self.tree.num[*n],
            self.tree.low[*n],
            if self.tree.parent[*n].is_some() {
                self.tree.parent[*n].unwrap().to_string()
            } else {
                "Root".to_string()
            },
            if self.tree.is_cut[*n] { " CUT" } else { "" }
        ))
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(format!("{:?}", e.role))
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for Graph<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

/// Renders the numbering DFS of the articulation engine in DOT
/// format: every town shows its name, discovery number, low point and
/// parent, cut vertices are marked, and every road is labeled with
/// its tree/back role.
pub fn draw_dfs_tree(network: &Network, tree: &DfsTree) -> String {
    let mut graph = Graph {
        nodes: (0..network.town_count()).collect(),
        edges: Vec::new(),
        network,
        tree,
    };

    for (rid, road) in network.roads().iter().enumerate() {
        graph.edges.push(Edge {
            source: road.a,
            target: road.b,
            role: tree.roles.get(rid).cloned().unwrap_or(RoadRole::Unvisited),
        });
    }

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&graph, &mut buffer).unwrap();
    String::from_utf8(buffer.into_inner()).unwrap()
}
