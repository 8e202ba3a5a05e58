//! Proper-colouring verification for parsed graph documents.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use tracing::{debug, instrument};

use crate::{document::GraphDocument, error::ColouringError, palette::Colour};

/// Counters describing a successful verification.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ColouringReport {
    /// Vertices reached by the traversal.
    pub vertices_visited: usize,
    /// Edges whose endpoints were compared.
    pub edges_checked: usize,
}

/// Directed adjacency plus colour assignments built from a document.
///
/// # Examples
/// ```
/// use cyclegen_core::{ColouredGraph, GraphDocument, ReadLimits};
///
/// let document = GraphDocument::parse("2,2\n1,2\n2,1\n1,R\n2,Y", ReadLimits::default())?;
/// let report = ColouredGraph::from_document(&document).verify()?;
/// assert_eq!(report.edges_checked, 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ColouredGraph {
    adjacency: BTreeMap<usize, Vec<usize>>,
    colours: HashMap<usize, Colour>,
}

impl ColouredGraph {
    /// Indexes the edges and colours of `document`.
    ///
    /// A vertex listed twice keeps its last colour.
    #[must_use]
    pub fn from_document(document: &GraphDocument) -> Self {
        let mut adjacency: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for edge in document.edges() {
            adjacency.entry(edge.from).or_default().push(edge.to);
        }
        let colours = document.colours().iter().copied().collect();
        Self { adjacency, colours }
    }

    /// Returns the colour assigned to `vertex`, if any.
    #[must_use]
    pub fn colour_of(&self, vertex: usize) -> Option<Colour> {
        self.colours.get(&vertex).copied()
    }

    /// Checks that no edge joins two vertices of the same colour.
    ///
    /// Traversal is breadth-first, seeded from each unvisited vertex in
    /// ascending order, so every edge is compared and the first reported
    /// conflict is stable.
    ///
    /// # Errors
    /// Returns [`ColouringError::Uncoloured`] when an edge endpoint has no
    /// colour and [`ColouringError::ImproperColouring`] when an edge joins
    /// two vertices of the same colour.
    #[instrument(name = "colouring.verify", skip(self), fields(vertices = self.colours.len()))]
    pub fn verify(&self) -> Result<ColouringReport, ColouringError> {
        let mut report = ColouringReport::default();
        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::new();

        for &seed in self.adjacency.keys() {
            if !visited.insert(seed) {
                continue;
            }
            queue.push_back(seed);
            while let Some(current) = queue.pop_front() {
                report.vertices_visited += 1;
                let current_colour = self.require_colour(current)?;
                let Some(neighbours) = self.adjacency.get(&current) else {
                    continue;
                };
                for &next in neighbours {
                    let next_colour = self.require_colour(next)?;
                    report.edges_checked += 1;
                    if next_colour == current_colour {
                        return Err(ColouringError::ImproperColouring {
                            from: current,
                            to: next,
                            colour: current_colour,
                        });
                    }
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        debug!(
            vertices_visited = report.vertices_visited,
            edges_checked = report.edges_checked,
            "colouring is proper"
        );
        Ok(report)
    }

    fn require_colour(&self, vertex: usize) -> Result<Colour, ColouringError> {
        self.colour_of(vertex)
            .ok_or(ColouringError::Uncoloured { vertex })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::num::NonZeroUsize;

    use rstest::rstest;

    use crate::{document::ReadLimits, graph::CycleGraph, palette::Palette};

    fn verify_text(text: &str) -> Result<ColouringReport, ColouringError> {
        let document = match GraphDocument::parse(text, ReadLimits::default()) {
            Ok(document) => document,
            Err(err) => panic!("fixture must parse: {err}"),
        };
        ColouredGraph::from_document(&document).verify()
    }

    fn verify_cycle(n: usize) -> Result<ColouringReport, ColouringError> {
        let Some(count) = NonZeroUsize::new(n) else {
            panic!("test cycles need at least one vertex");
        };
        let document = GraphDocument::from_cycle(&CycleGraph::new(count, Palette::default()));
        ColouredGraph::from_document(&document).verify()
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(5)]
    #[case(6)]
    #[case(999)]
    fn cycles_not_congruent_to_one_are_proper(#[case] n: usize) {
        let report = verify_cycle(n).expect("colouring must be proper");
        assert_eq!(report.vertices_visited, n);
        assert_eq!(report.edges_checked, n);
    }

    #[rstest]
    #[case(1)]
    #[case(4)]
    #[case(7)]
    #[case(1000)]
    fn closing_edge_conflicts_when_n_is_congruent_to_one(#[case] n: usize) {
        let err = verify_cycle(n).expect_err("closing edge joins two red vertices");
        assert_eq!(
            err,
            ColouringError::ImproperColouring {
                from: n,
                to: 1,
                colour: Colour::Red,
            }
        );
    }

    #[test]
    fn missing_colour_is_reported() {
        let err = verify_text("3,2\n1,2\n2,7\n1,R\n2,Y\n3,B").expect_err("vertex 7 is uncoloured");
        assert_eq!(err, ColouringError::Uncoloured { vertex: 7 });
    }

    #[test]
    fn conflicts_in_later_components_are_found() {
        let err = verify_text("4,2\n1,2\n3,4\n1,R\n2,Y\n3,B\n4,B")
            .expect_err("second component is improper");
        assert_eq!(
            err,
            ColouringError::ImproperColouring {
                from: 3,
                to: 4,
                colour: Colour::Blue,
            }
        );
    }

    #[test]
    fn edges_into_visited_vertices_are_still_checked() {
        let err = verify_text("3,3\n1,2\n1,3\n2,3\n1,R\n2,Y\n3,Y")
            .expect_err("edge 2,3 joins two yellow vertices");
        assert!(matches!(
            err,
            ColouringError::ImproperColouring { from: 2, to: 3, .. }
        ));
    }

    #[test]
    fn graphs_without_edges_are_trivially_proper() {
        let report = verify_text("2,0\n1,R\n2,R").expect("no edges to conflict");
        assert_eq!(report, ColouringReport::default());
    }
}
