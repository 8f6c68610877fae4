use crate::network::Network;

/// Returns a network in DOT format.
///
/// Towns show their names, roads their lengths.
///
/// Plain roads are solid and bridge roads are dashed.
///
/// Intended to be used with `neato`.
pub fn draw_network(network: &Network) -> String {
    let mut output = String::from("graph {\n");
    output.push_str("  mode=sgd;\n");
    output.push_str("  maxiter=1000;\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

    for u in 0..network.town_count() {
        output.push_str(&format!("  {} [label=\"{}\"];\n", u, network.town_name(u)));
    }

    for road in network.roads() {
        let style = if road.is_bridge() { "dashed" } else { "solid" };
        output.push_str(&format!(
            "  {} -- {} [style={}, label=\"{}\"];\n",
            road.a, road.b, style, road.length
        ));
    }
    output.push_str("}\n");
    output
}

/// Writes the network to a file in DOT format.
pub fn to_dot_file(network: &Network, path: &str) {
    let dot_str = draw_network(network);
    to_file(&dot_str, path);
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &str) {
    std::fs::write(path, content).expect("Rust should write to file");
}
