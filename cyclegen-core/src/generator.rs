//! Generator configuration and the generate-and-persist pipeline.

use std::{num::NonZeroUsize, path::Path};

use cap_std::fs::Dir;
use tracing::{Span, field, info, instrument};

use crate::{
    document::GraphDocument,
    error::GenerateError,
    graph::CycleGraph,
    output::{OutputName, open_output_dir, write_new},
    palette::Palette,
};

/// Vertex count used when none is configured.
pub const DEFAULT_VERTEX_COUNT: usize = 999;

/// Configures and constructs [`Generator`] instances.
///
/// # Examples
/// ```
/// use cyclegen_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new()
///     .with_vertex_count(5)
///     .build()
///     .expect("five vertices is a valid cycle");
/// assert_eq!(
///     generator.render(),
///     "5,5\n1,2\n2,3\n3,4\n4,5\n5,1\n1,R\n2,Y\n3,B\n4,R\n5,Y",
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GeneratorBuilder {
    vertex_count: usize,
    palette: Palette,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            palette: Palette::default(),
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex count.
    #[must_use]
    pub const fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Overrides the colour palette.
    #[must_use]
    pub const fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Returns the configured palette.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Validates the configuration and constructs a [`Generator`].
    ///
    /// # Errors
    /// Returns [`GenerateError::InvalidVertexCount`] when the vertex count is
    /// zero.
    pub fn build(self) -> Result<Generator, GenerateError> {
        let vertex_count =
            NonZeroUsize::new(self.vertex_count).ok_or(GenerateError::InvalidVertexCount {
                got: self.vertex_count,
            })?;
        Ok(Generator {
            graph: CycleGraph::new(vertex_count, self.palette),
        })
    }
}

/// Produces cycle graph documents and writes them under fresh names.
#[derive(Clone, Copy, Debug)]
pub struct Generator {
    graph: CycleGraph,
}

/// Describes a document that has been written.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GeneratedGraph {
    /// Name of the created file.
    pub name: OutputName,
    /// Number of vertices in the cycle.
    pub vertex_count: usize,
    /// Number of bytes written.
    pub bytes: usize,
}

impl Generator {
    /// Returns the graph this generator describes.
    #[must_use]
    pub const fn graph(&self) -> &CycleGraph {
        &self.graph
    }

    /// Builds the document for the configured graph.
    #[must_use]
    pub fn document(&self) -> GraphDocument {
        GraphDocument::from_cycle(&self.graph)
    }

    /// Renders the document text. The output depends only on the vertex
    /// count and palette.
    #[must_use]
    pub fn render(&self) -> String {
        self.document().render()
    }

    /// Writes the document into `dir` under a freshly drawn name.
    ///
    /// # Errors
    /// Returns [`GenerateError::FileSystem`] if the file cannot be created or
    /// written.
    pub fn generate_in(&self, dir: &Dir) -> Result<GeneratedGraph, GenerateError> {
        self.generate_named(dir, OutputName::random())
    }

    /// Writes the document into `dir` under `name`.
    ///
    /// # Errors
    /// Returns [`GenerateError::FileSystem`] if the file cannot be created or
    /// written, including when `name` already exists.
    #[instrument(
        name = "generator.generate",
        err,
        skip(self, dir, name),
        fields(vertices = self.graph.vertex_count(), name = %name, bytes = field::Empty),
    )]
    pub fn generate_named(
        &self,
        dir: &Dir,
        name: OutputName,
    ) -> Result<GeneratedGraph, GenerateError> {
        let contents = self.render();
        write_new(dir, name, &contents)?;
        Span::current().record("bytes", contents.len());
        info!(name = %name, vertices = self.graph.vertex_count(), "graph document generated");
        Ok(GeneratedGraph {
            name,
            vertex_count: self.graph.vertex_count(),
            bytes: contents.len(),
        })
    }

    /// Opens `path` and writes the document there under a fresh name.
    ///
    /// # Errors
    /// Returns [`GenerateError::FileSystem`] if the directory cannot be opened
    /// or the file cannot be created or written.
    pub fn generate_at(&self, path: &Path) -> Result<GeneratedGraph, GenerateError> {
        let dir = open_output_dir(path)?;
        self.generate_in(&dir)
    }
}

/// Generates the default 999-vertex document in `path`.
///
/// # Errors
/// Returns [`GenerateError::FileSystem`] if the directory cannot be opened or
/// the file cannot be created or written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = tempfile::TempDir::new()?;
/// let generated = cyclegen_core::generate(dir.path())?;
/// let text = std::fs::read_to_string(dir.path().join(generated.name.to_string()))?;
/// assert!(text.starts_with("999,999\n1,2\n"));
/// # Ok(())
/// # }
/// ```
pub fn generate(path: &Path) -> Result<GeneratedGraph, GenerateError> {
    GeneratorBuilder::new().build()?.generate_at(path)
}
