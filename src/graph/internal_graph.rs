use custom_debug_derive::Debug;
use itertools::Itertools;
use std::fmt;

use super::{GraphError, VertexIndex};

/// Fixed size graph stored as adjacency lists.
/// Once a single directed edge was added the graph
/// counts as directed for the rest of its life.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    #[debug(skip)]
    edge_number: usize,
    directed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub index: VertexIndex,
    pub edges_to: Vec<VertexIndex>,
}

impl Graph {
    pub fn new(n: usize) -> Result<Self, GraphError> {
        if n == 0 {
            return Err(GraphError::NoVertices);
        }

        Ok(Graph {
            vertices: (0..n).map(Vertex::new).collect(),
            edge_number: 0,
            directed: false,
        })
    }

    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn number_edges(&self) -> usize {
        self.edge_number
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    fn check_index(&self, index: VertexIndex) -> Result<(), GraphError> {
        if index < self.size() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange(index, self.size()))
        }
    }

    /// Adds an edge from `start` to `end`. Undirected edges are
    /// stored in both adjacency lists, directed ones only in the
    /// list of `start`. Neither duplicates nor self-loops are rejected.
    pub fn add_edge(
        &mut self,
        start: VertexIndex,
        end: VertexIndex,
        directed: bool,
    ) -> Result<(), GraphError> {
        self.check_index(start)?;
        self.check_index(end)?;

        self.vertices[start].add_edge(end);
        if directed {
            self.directed = true;
        } else {
            self.vertices[end].add_edge(start);
        }
        self.edge_number += 1;
        Ok(())
    }

    pub fn neighbours(&self, index: VertexIndex) -> &[VertexIndex] {
        &self.vertices[index].edges_to
    }

    /// All stored arcs in adjacency order. An undirected
    /// edge shows up once per direction.
    pub fn iterate_edges(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        self.vertices
            .iter()
            .flat_map(|vertex| vertex.edges_to.iter().map(move |end| (vertex.index, *end)))
    }

    /// Reverse adjacency index: for each vertex all vertices
    /// whose adjacency list contains it, in scan order.
    pub fn predecessors(&self) -> Vec<Vec<VertexIndex>> {
        let mut predecessors = vec![Vec::new(); self.size()];
        for (start, end) in self.iterate_edges() {
            predecessors[end].push(start);
        }
        predecessors
    }

    /// Number of distinct other vertices that share
    /// an edge in either direction with `index`.
    pub fn conflict_degree(
        &self,
        index: VertexIndex,
        predecessors: &[Vec<VertexIndex>],
    ) -> usize {
        self.neighbours(index)
            .iter()
            .chain(predecessors[index].iter())
            .filter(|other| **other != index)
            .unique()
            .count()
    }

    pub fn max_degree(&self) -> usize {
        let predecessors = self.predecessors();
        (0..self.size())
            .map(|index| self.conflict_degree(index, &predecessors))
            .max()
            .unwrap_or(0)
    }

    /// The edge set as a renderer wants to see it: every edge once.
    /// For undirected graphs `(u, v)` and `(v, u)` are the same edge.
    pub fn rendered_edges(&self) -> Vec<(VertexIndex, VertexIndex)> {
        if self.directed {
            self.iterate_edges().unique().collect()
        } else {
            self.iterate_edges()
                .map(|(start, end)| (start.min(end), start.max(end)))
                .unique()
                .collect()
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices.iter() {
            writeln!(f, "{}: [{}]", vertex.index, vertex.edges_to.iter().join(", "))?;
        }
        Ok(())
    }
}

impl Vertex {
    pub fn new(index: VertexIndex) -> Self {
        Vertex {
            index,
            edges_to: Vec::new(),
        }
    }

    pub fn add_edge(&mut self, end: VertexIndex) {
        self.edges_to.push(end);
    }
}
