//! Representation of graphs as plain adjacency
//! lists together with the colour types used
//! by the colouring engine.

mod internal_graph;
pub use internal_graph::Graph;

pub type Colour = usize;
pub type VertexIndex = usize;

/// Marks a vertex that was not yet assigned a colour
/// during a colouring pass.
pub const UNCOLOURED: Colour = Colour::MAX;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("A graph needs at least one vertex")]
    NoVertices,
    #[error("Vertex {0} is not part of a graph with {1} vertices")]
    VertexOutOfRange(VertexIndex, usize),
}
