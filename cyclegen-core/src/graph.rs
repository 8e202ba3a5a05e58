//! The cycle graph that generated documents describe.

use std::num::NonZeroUsize;

use crate::palette::{Colour, Palette};

/// Directed edge between two one-based vertex identifiers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    /// Source vertex.
    pub from: usize,
    /// Target vertex.
    pub to: usize,
}

impl Edge {
    /// Creates an edge from `from` to `to`.
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// Cycle over vertices `1..=n` with cyclically assigned colours.
///
/// The edges are `(i, i + 1)` for `i` in `1..n` followed by the closing edge
/// `(n, 1)`, so the graph has exactly `n` edges.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use cyclegen_core::{CycleGraph, Edge, Palette};
///
/// let n = NonZeroUsize::new(3).expect("non-zero");
/// let graph = CycleGraph::new(n, Palette::default());
/// let edges: Vec<Edge> = graph.edges().collect();
/// assert_eq!(edges, [Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 1)]);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CycleGraph {
    vertex_count: NonZeroUsize,
    palette: Palette,
}

impl CycleGraph {
    /// Creates a cycle over `vertex_count` vertices coloured from `palette`.
    #[must_use]
    pub const fn new(vertex_count: NonZeroUsize, palette: Palette) -> Self {
        Self {
            vertex_count,
            palette,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count.get()
    }

    /// Returns the number of edges, which equals the vertex count.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.vertex_count.get()
    }

    /// Returns the palette used for colour assignment.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Iterates over the path edges followed by the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.vertex_count.get();
        (1..n)
            .map(|vertex| Edge::new(vertex, vertex + 1))
            .chain(std::iter::once(Edge::new(n, 1)))
    }

    /// Iterates over `(vertex, colour)` pairs in ascending vertex order.
    pub fn colouring(&self) -> impl Iterator<Item = (usize, Colour)> + '_ {
        (1..=self.vertex_count.get()).zip(self.palette.cycle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn cycle(n: usize) -> CycleGraph {
        let Some(count) = NonZeroUsize::new(n) else {
            panic!("test cycles need at least one vertex");
        };
        CycleGraph::new(count, Palette::default())
    }

    #[test]
    fn single_vertex_closes_on_itself() {
        let edges: Vec<Edge> = cycle(1).edges().collect();
        assert_eq!(edges, [Edge::new(1, 1)]);
    }

    #[rstest]
    #[case(2)]
    #[case(5)]
    #[case(999)]
    fn every_vertex_has_one_outgoing_and_one_incoming_edge(#[case] n: usize) {
        let graph = cycle(n);
        let mut outgoing = vec![0_usize; n + 1];
        let mut incoming = vec![0_usize; n + 1];
        for edge in graph.edges() {
            outgoing[edge.from] += 1;
            incoming[edge.to] += 1;
        }
        assert_eq!(graph.edges().count(), graph.edge_count());
        assert!(outgoing.iter().skip(1).all(|&count| count == 1));
        assert!(incoming.iter().skip(1).all(|&count| count == 1));
    }

    #[test]
    fn colours_cycle_from_red() {
        let colours: Vec<(usize, Colour)> = cycle(4).colouring().collect();
        assert_eq!(
            colours,
            [
                (1, Colour::Red),
                (2, Colour::Yellow),
                (3, Colour::Blue),
                (4, Colour::Red),
            ]
        );
    }
}
