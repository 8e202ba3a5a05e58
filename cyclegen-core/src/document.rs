//! Text encoding of coloured graphs.
//!
//! A document is a header line `<vertices>,<edges>`, then one `<from>,<to>`
//! line per edge, then one `<vertex>,<colour>` line per vertex. Lines are
//! separated by `\n` and the last line has no terminator.

use std::{fmt, str::Lines};

use crate::{
    error::DocumentError,
    graph::{CycleGraph, Edge},
    palette::Colour,
};

/// Exclusive upper bound on the vertex count accepted by [`GraphDocument::parse`].
pub const DEFAULT_VERTEX_LIMIT: usize = 1001;

/// Bounds applied while reading a document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReadLimits {
    /// Header vertex counts must be strictly below this value.
    pub vertex_limit: usize,
}

impl Default for ReadLimits {
    fn default() -> Self {
        Self {
            vertex_limit: DEFAULT_VERTEX_LIMIT,
        }
    }
}

/// Coloured graph in document form.
///
/// # Examples
/// ```
/// use cyclegen_core::{GraphDocument, ReadLimits};
///
/// let text = "2,2\n1,2\n2,1\n1,R\n2,Y";
/// let document = GraphDocument::parse(text, ReadLimits::default())?;
/// assert_eq!(document.vertex_count(), 2);
/// assert_eq!(document.render(), text);
/// # Ok::<(), cyclegen_core::DocumentError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphDocument {
    vertex_count: usize,
    edges: Vec<Edge>,
    colours: Vec<(usize, Colour)>,
}

impl GraphDocument {
    /// Captures the edges and colouring of `graph`.
    #[must_use]
    pub fn from_cycle(graph: &CycleGraph) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edges: graph.edges().collect(),
            colours: graph.colouring().collect(),
        }
    }

    /// Returns the vertex count announced in the header.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of edge lines.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in document order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the `(vertex, colour)` lines in document order.
    #[must_use]
    pub fn colours(&self) -> &[(usize, Colour)] {
        &self.colours
    }

    /// Encodes the document as text.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Parses a document, enforcing `limits` on the header.
    ///
    /// Blank lines after the last vertex line are ignored; any other trailing
    /// content is rejected.
    ///
    /// # Errors
    /// Returns [`DocumentError`] describing the first malformed line.
    pub fn parse(input: &str, limits: ReadLimits) -> Result<Self, DocumentError> {
        let mut lines = NumberedLines::new(input);
        let (header_number, header) = lines.next().ok_or(DocumentError::EmptyInput)?;
        let (raw_vertices, raw_edges) =
            split_pair(header).ok_or_else(|| DocumentError::InvalidHeader {
                line: header.to_owned(),
            })?;
        let vertex_count = parse_number(raw_vertices, header_number)?;
        let edge_count = parse_number(raw_edges, header_number)?;
        check_limits(vertex_count, edge_count, limits)?;

        let mut edges = Vec::new();
        for _ in 0..edge_count {
            let (line_number, line) = lines.require("edge line")?;
            let (from, to) =
                split_pair(line).ok_or(DocumentError::MalformedEdge { line_number })?;
            edges.push(Edge::new(
                parse_number(from, line_number)?,
                parse_number(to, line_number)?,
            ));
        }

        let mut colours = Vec::new();
        for _ in 0..vertex_count {
            let (line_number, line) = lines.require("vertex line")?;
            let (vertex, colour) =
                split_pair(line).ok_or(DocumentError::MalformedVertex { line_number })?;
            let colour = colour
                .parse::<Colour>()
                .map_err(|err| DocumentError::UnknownColour {
                    line_number,
                    value: err.0,
                })?;
            colours.push((parse_number(vertex, line_number)?, colour));
        }

        if let Some((line_number, _)) = lines.find(|(_, line)| !line.trim().is_empty()) {
            return Err(DocumentError::TrailingContent { line_number });
        }

        Ok(Self {
            vertex_count,
            edges,
            colours,
        })
    }
}

impl fmt::Display for GraphDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.vertex_count, self.edges.len())?;
        for edge in &self.edges {
            write!(f, "\n{},{}", edge.from, edge.to)?;
        }
        for (vertex, colour) in &self.colours {
            write!(f, "\n{vertex},{colour}")?;
        }
        Ok(())
    }
}

struct NumberedLines<'a> {
    inner: std::iter::Enumerate<Lines<'a>>,
    last: usize,
}

impl<'a> NumberedLines<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.lines().enumerate(),
            last: 0,
        }
    }

    fn require(&mut self, expected: &'static str) -> Result<(usize, &'a str), DocumentError> {
        self.next().ok_or(DocumentError::UnexpectedEof {
            line_number: self.last + 1,
            expected,
        })
    }
}

impl<'a> Iterator for NumberedLines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, line) = self.inner.next()?;
        self.last = index + 1;
        Some((self.last, line))
    }
}

fn split_pair(line: &str) -> Option<(&str, &str)> {
    let (left, right) = line.split_once(',')?;
    if right.contains(',') {
        return None;
    }
    Some((left, right))
}

fn parse_number(raw: &str, line_number: usize) -> Result<usize, DocumentError> {
    raw.parse().map_err(|_| DocumentError::InvalidNumber {
        line_number,
        value: raw.to_owned(),
    })
}

fn check_limits(vertices: usize, edges: usize, limits: ReadLimits) -> Result<(), DocumentError> {
    if vertices >= limits.vertex_limit {
        return Err(DocumentError::TooManyVertices {
            vertices,
            limit: limits.vertex_limit,
        });
    }
    let within_square = vertices
        .checked_mul(vertices)
        .is_none_or(|square| edges <= square);
    if !within_square {
        return Err(DocumentError::TooManyEdges { edges, vertices });
    }
    Ok(())
}
