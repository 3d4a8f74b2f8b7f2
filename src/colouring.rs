//! Greedy first-fit colouring of undirected graphs
//! and of the undirected shadow of directed graphs.
//!
//! Vertices are coloured once, in increasing index order,
//! with the smallest colour not used by any already coloured
//! neighbour. Vertex 0 always gets colour 0.

use itertools::Itertools;
use log::debug;

use crate::graph::{Colour, Graph, VertexIndex, UNCOLOURED};

/// Availability of colours for the vertex currently coloured.
/// Remembers which colours it blocked so that handing out a
/// colour leaves every colour available again.
struct Palette {
    blocked: Vec<bool>,
    marked: Vec<Colour>,
}

impl Palette {
    fn new(size: usize) -> Self {
        Palette {
            blocked: vec![false; size],
            marked: Vec::new(),
        }
    }

    fn block(&mut self, colour: Colour) {
        if colour == UNCOLOURED {
            return;
        }
        if let Some(blocked) = self.blocked.get_mut(colour) {
            if !*blocked {
                *blocked = true;
                self.marked.push(colour);
            }
        }
    }

    /// Smallest unblocked colour. Resets the blocks afterwards.
    fn take_first_free(&mut self) -> Colour {
        let colour = self
            .blocked
            .iter()
            .position(|blocked| !blocked)
            .unwrap_or_else(|| self.blocked.len());

        for marked in self.marked.drain(..) {
            self.blocked[marked] = false;
        }
        colour
    }
}

fn first_fit<F, I>(size: usize, mut conflicts: F) -> Vec<Colour>
where
    F: FnMut(VertexIndex) -> I,
    I: Iterator<Item = VertexIndex>,
{
    let mut colouring = vec![UNCOLOURED; size];
    let mut palette = Palette::new(size);

    if let Some(first) = colouring.first_mut() {
        *first = 0;
    }

    for vertex in 1..size {
        for other in conflicts(vertex) {
            palette.block(colouring[other]);
        }
        colouring[vertex] = palette.take_first_free();
    }

    colouring
}

pub fn greedy_colouring(graph: &Graph) -> Vec<Colour> {
    first_fit(graph.size(), |vertex| graph.neighbours(vertex).iter().copied())
}

/// Two vertices conflict if there is an edge between them in
/// either direction. Falls back to [`greedy_colouring`] for
/// graphs without any directed edge.
pub fn greedy_colouring_directed(graph: &Graph) -> Vec<Colour> {
    if !graph.is_directed() {
        return greedy_colouring(graph);
    }

    let predecessors = graph.predecessors();
    first_fit(graph.size(), |vertex| {
        graph
            .neighbours(vertex)
            .iter()
            .chain(predecessors[vertex].iter())
            .copied()
    })
}

/// Colours the graph with the variant matching its directedness.
pub fn colour_graph(graph: &Graph) -> Vec<Colour> {
    if graph.is_directed() {
        debug!("Colouring directed graph with {} vertices", graph.size());
        greedy_colouring_directed(graph)
    } else {
        debug!("Colouring undirected graph with {} vertices", graph.size());
        greedy_colouring(graph)
    }
}

pub fn colours_used(colouring: &[Colour]) -> usize {
    colouring
        .iter()
        .filter(|colour| **colour != UNCOLOURED)
        .unique()
        .count()
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ColouringError {
    #[error("Colouring has {0} entries for a graph with {1} vertices")]
    WrongLength(usize, usize),
    #[error("Vertex {0} has no colour")]
    Uncoloured(VertexIndex),
    #[error("Vertices {0} and {1} are adjacent but share a colour")]
    Conflict(VertexIndex, VertexIndex),
}

/// Checks that every vertex is coloured and that no stored
/// arc connects two distinct vertices of the same colour.
pub fn validate_colouring(graph: &Graph, colouring: &[Colour]) -> Result<(), ColouringError> {
    if colouring.len() != graph.size() {
        return Err(ColouringError::WrongLength(colouring.len(), graph.size()));
    }

    if let Some(vertex) = colouring.iter().position(|colour| *colour == UNCOLOURED) {
        return Err(ColouringError::Uncoloured(vertex));
    }

    match graph
        .iterate_edges()
        .find(|(start, end)| start != end && colouring[*start] == colouring[*end])
    {
        Some((start, end)) => Err(ColouringError::Conflict(start, end)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    fn cycle(n: usize, directed: bool) -> Result<Graph, Error> {
        let mut graph = Graph::new(n)?;
        for vertex in 0..n {
            graph.add_edge(vertex, (vertex + 1) % n, directed)?;
        }
        Ok(graph)
    }

    fn path(n: usize, directed: bool) -> Result<Graph, Error> {
        let mut graph = Graph::new(n)?;
        for vertex in 1..n {
            graph.add_edge(vertex - 1, vertex, directed)?;
        }
        Ok(graph)
    }

    /// Deterministic pseudo random graph from a linear congruential generator.
    fn scrambled(n: usize, edges: usize, seed: u64, directed: bool) -> Result<Graph, Error> {
        let mut state = seed;
        let mut next = || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as usize % n
        };

        let mut graph = Graph::new(n)?;
        for _ in 0..edges {
            let start = next();
            let end = next();
            graph.add_edge(start, end, directed)?;
        }
        Ok(graph)
    }

    fn test_graphs() -> Result<Vec<Graph>, Error> {
        let mut graphs = vec![
            cycle(5, false)?,
            cycle(6, false)?,
            cycle(5, true)?,
            path(4, false)?,
            path(5, true)?,
        ];
        for seed in 0..8 {
            graphs.push(scrambled(12, 30, seed, false)?);
            graphs.push(scrambled(12, 30, seed, true)?);
        }

        let mut complete = Graph::new(6)?;
        for (start, end) in (0..6).tuple_combinations() {
            complete.add_edge(start, end, false)?;
        }
        graphs.push(complete);
        Ok(graphs)
    }

    #[test]
    fn undirected_five_cycle() -> Result<(), Error> {
        let graph = cycle(5, false)?;
        assert_eq!(vec![0, 1, 0, 1, 2], greedy_colouring(&graph));
        Ok(())
    }

    #[test]
    fn undirected_five_cycle_with_chord() -> Result<(), Error> {
        let mut graph = cycle(5, false)?;
        graph.add_edge(1, 4, false)?;
        assert_eq!(vec![0, 1, 0, 1, 2], greedy_colouring(&graph));
        Ok(())
    }

    #[test]
    fn undirected_disconnected() -> Result<(), Error> {
        let mut graph = Graph::new(6)?;
        graph.add_edge(0, 1, false)?;
        graph.add_edge(2, 3, false)?;
        assert_eq!(vec![0, 1, 0, 1, 0, 0], greedy_colouring(&graph));
        Ok(())
    }

    #[test]
    fn even_cycle_uses_two_colours() -> Result<(), Error> {
        let graph = cycle(6, false)?;
        assert_eq!(vec![0, 1, 0, 1, 0, 1], greedy_colouring(&graph));
        Ok(())
    }

    #[test]
    fn undirected_path() -> Result<(), Error> {
        let graph = path(4, false)?;
        assert_eq!(vec![0, 1, 0, 1], greedy_colouring(&graph));
        Ok(())
    }

    #[test]
    fn single_vertex() -> Result<(), Error> {
        let mut graph = Graph::new(1)?;
        assert_eq!(vec![0], greedy_colouring(&graph));

        graph.add_edge(0, 0, true)?;
        assert_eq!(vec![0], greedy_colouring_directed(&graph));
        Ok(())
    }

    #[test]
    fn directed_chain() -> Result<(), Error> {
        // Every vertex only sees its coloured predecessor.
        let graph = path(5, true)?;
        assert_eq!(vec![0, 1, 0, 1, 0], greedy_colouring_directed(&graph));
        Ok(())
    }

    #[test]
    fn directed_cycle() -> Result<(), Error> {
        let graph = cycle(5, true)?;
        assert_eq!(vec![0, 1, 0, 1, 2], greedy_colouring_directed(&graph));
        Ok(())
    }

    #[test]
    fn directed_disconnected() -> Result<(), Error> {
        let mut graph = Graph::new(6)?;
        graph.add_edge(0, 1, true)?;
        graph.add_edge(2, 3, true)?;
        let colouring = greedy_colouring_directed(&graph);
        assert_eq!(&[0, 1], &colouring[..2]);
        assert_eq!(&[0, 1], &colouring[2..4]);
        Ok(())
    }

    #[test]
    fn directed_sees_incoming_edges() -> Result<(), Error> {
        // Edges only point to later vertices, looking at
        // outgoing edges alone misses every conflict.
        let mut graph = Graph::new(3)?;
        graph.add_edge(0, 1, true)?;
        graph.add_edge(0, 2, true)?;
        graph.add_edge(1, 2, true)?;
        assert_eq!(vec![0, 0, 0], greedy_colouring(&graph));
        assert_eq!(vec![0, 1, 2], greedy_colouring_directed(&graph));
        Ok(())
    }

    #[test]
    fn self_loops_are_harmless() -> Result<(), Error> {
        let mut graph = path(3, true)?;
        graph.add_edge(1, 1, true)?;
        graph.add_edge(2, 2, true)?;
        assert_eq!(vec![0, 1, 0], greedy_colouring_directed(&graph));

        let mut undirected = path(3, false)?;
        undirected.add_edge(2, 2, false)?;
        assert_eq!(vec![0, 1, 0], greedy_colouring(&undirected));
        Ok(())
    }

    #[test]
    fn vertex_zero_is_privileged() -> Result<(), Error> {
        let mut graph = Graph::new(3)?;
        graph.add_edge(0, 1, false)?;
        graph.add_edge(0, 2, false)?;
        graph.add_edge(1, 2, false)?;
        assert_eq!(vec![0, 1, 2], greedy_colouring(&graph));
        Ok(())
    }

    #[test]
    fn directed_delegates_without_directed_edges() -> Result<(), Error> {
        for seed in 0..8 {
            let graph = scrambled(15, 25, seed, false)?;
            assert_eq!(greedy_colouring(&graph), greedy_colouring_directed(&graph));
        }
        Ok(())
    }

    #[test]
    fn colouring_is_proper_total_and_bounded() -> Result<(), Error> {
        for graph in test_graphs()? {
            let colouring = colour_graph(&graph);
            assert_eq!(Ok(()), validate_colouring(&graph, &colouring));

            let used = colours_used(&colouring);
            assert!(used <= graph.max_degree() + 1);
            assert!(used <= graph.size());
        }
        Ok(())
    }

    #[test]
    fn colouring_is_deterministic() -> Result<(), Error> {
        for seed in 0..4 {
            let first = scrambled(20, 40, seed, true)?;
            let second = scrambled(20, 40, seed, true)?;
            assert_eq!(colour_graph(&first), colour_graph(&second));
            assert_eq!(colour_graph(&first), colour_graph(&first));
        }
        Ok(())
    }

    #[test]
    fn directed_matches_full_scan() -> Result<(), Error> {
        fn scanning_colouring(graph: &Graph) -> Vec<Colour> {
            first_fit(graph.size(), |vertex| {
                let incoming = graph
                    .vertices()
                    .iter()
                    .filter(|other| other.edges_to.contains(&vertex))
                    .map(|other| other.index);
                graph
                    .neighbours(vertex)
                    .iter()
                    .copied()
                    .chain(incoming)
                    .collect::<Vec<_>>()
                    .into_iter()
            })
        }

        for seed in 0..8 {
            let graph = scrambled(16, 35, seed, true)?;
            assert_eq!(scanning_colouring(&graph), greedy_colouring_directed(&graph));
        }
        Ok(())
    }

    #[test]
    fn palette_resets_after_each_vertex() {
        let mut palette = Palette::new(4);
        palette.block(0);
        palette.block(1);
        palette.block(UNCOLOURED);
        assert_eq!(2, palette.take_first_free());
        assert!(palette.blocked.iter().all(|blocked| !blocked));
        assert_eq!(0, palette.take_first_free());
    }

    #[test]
    fn test_validate_colouring() -> Result<(), Error> {
        let graph = cycle(4, true)?;
        assert_eq!(Ok(()), validate_colouring(&graph, &[0, 1, 0, 1]));
        assert_eq!(
            Err(ColouringError::WrongLength(3, 4)),
            validate_colouring(&graph, &[0, 1, 0])
        );
        assert_eq!(
            Err(ColouringError::Uncoloured(2)),
            validate_colouring(&graph, &[0, 1, UNCOLOURED, 1])
        );
        assert_eq!(
            Err(ColouringError::Conflict(2, 3)),
            validate_colouring(&graph, &[0, 1, 0, 0])
        );
        Ok(())
    }

    #[test]
    fn test_colours_used() {
        assert_eq!(3, colours_used(&[0, 1, 0, 1, 2]));
        assert_eq!(1, colours_used(&[0, UNCOLOURED]));
    }
}
