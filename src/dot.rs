//! Rendering of coloured graphs in the Graphviz dot language.

use std::io::{self, Write};

use crate::graph::{Colour, Graph, UNCOLOURED};

/// Spreads the colours evenly over the hue circle.
fn fill_colour(colour: Colour, palette_size: usize) -> String {
    format!("{:.3} 0.850 0.850", colour as f64 / palette_size as f64)
}

/// Writes the graph with every vertex filled in the colour
/// of its colour index. Uncoloured vertices stay unfilled.
pub fn write_dot<W: Write>(writer: &mut W, graph: &Graph, colouring: &[Colour]) -> io::Result<()> {
    let (graph_type, edge_op) = if graph.is_directed() {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };
    let palette_size = colouring
        .iter()
        .filter(|colour| **colour != UNCOLOURED)
        .max()
        .map_or(1, |max| max + 1);

    writeln!(writer, "{} colouring {{", graph_type)?;
    writeln!(writer, "    node [style=filled, fontcolor=white];")?;

    for vertex in graph.vertices() {
        match colouring.get(vertex.index) {
            Some(&colour) if colour != UNCOLOURED => writeln!(
                writer,
                "    {} [fillcolor=\"{}\"];",
                vertex.index,
                fill_colour(colour, palette_size)
            )?,
            _ => writeln!(writer, "    {} [style=\"\"];", vertex.index)?,
        }
    }

    for (start, end) in graph.rendered_edges() {
        writeln!(writer, "    {} {} {};", start, edge_op, end)?;
    }

    writeln!(writer, "}}")?;
    writer.flush()
}
