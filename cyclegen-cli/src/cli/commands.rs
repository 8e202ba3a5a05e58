//! Command implementations and argument parsing for the cyclegen CLI.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use cyclegen_core::{
    ColouredGraph, ColouringError, ColouringReport, DEFAULT_VERTEX_COUNT, DEFAULT_VERTEX_LIMIT,
    DocumentError, GenerateError, GeneratedGraph, GeneratorBuilder, GraphDocument, Palette,
    ReadLimits,
};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
///
/// Running without a subcommand generates the default graph in the current
/// directory.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "cyclegen",
    about = "Generate and check coloured cycle graph documents."
)]
pub struct Cli {
    /// Command to execute; defaults to `generate` with default options.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Write a coloured cycle graph document under a random UUID file name.
    Generate(GenerateCommand),
    /// Parse a graph document and verify its colouring is proper.
    Check(CheckCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct GenerateCommand {
    /// Number of vertices in the cycle.
    #[arg(
        long = "vertices",
        default_value_t = DEFAULT_VERTEX_COUNT,
        value_parser = clap::value_parser!(usize),
    )]
    pub vertices: usize,

    /// Directory the document is written to.
    #[arg(long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Assign colours from a randomly ordered palette.
    #[arg(long = "shuffle-palette")]
    pub shuffle_palette: bool,

    /// Seed for the palette shuffle.
    #[arg(long, requires = "shuffle_palette")]
    pub seed: Option<u64>,

    /// Print the path of the written document to stdout.
    #[arg(long = "print-path")]
    pub print_path: bool,
}

impl Default for GenerateCommand {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTEX_COUNT,
            output_dir: PathBuf::from("."),
            shuffle_palette: false,
            seed: None,
            print_path: false,
        }
    }
}

/// Options accepted by the `check` command.
#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct CheckCommand {
    /// Graph document to read.
    pub path: PathBuf,

    /// Exclusive upper bound on the header vertex count.
    #[arg(
        long = "max-vertices",
        default_value_t = DEFAULT_VERTEX_LIMIT,
        value_parser = clap::value_parser!(usize),
    )]
    pub vertex_limit: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading an input document failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Generation or persistence failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
    /// The input document was malformed.
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// The input document's colouring was not proper.
    #[error(transparent)]
    Colouring(#[from] ColouringError),
}

impl CliError {
    /// Stable machine-readable code of the underlying library error, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::Generate(err) => Some(err.code().as_str()),
            Self::Document(err) => Some(err.code().as_str()),
            Self::Colouring(err) => Some(err.code().as_str()),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// A document was written.
    Generated {
        /// Full path of the new file.
        path: PathBuf,
        /// Details of the written document.
        graph: GeneratedGraph,
        /// Whether the path should be echoed to stdout.
        print_path: bool,
    },
    /// A document was read and its colouring verified.
    Checked {
        /// Path that was checked.
        path: PathBuf,
        /// Vertex count from the header.
        vertices: usize,
        /// Number of edge lines.
        edges: usize,
        /// Traversal counters.
        report: ColouringReport,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation, parsing, or verification fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use cyclegen_cli::cli::{Cli, Command, ExecutionSummary, GenerateCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let cli = Cli {
///     command: Some(Command::Generate(GenerateCommand {
///         vertices: 5,
///         output_dir: dir.path().to_path_buf(),
///         ..GenerateCommand::default()
///     })),
/// };
/// let ExecutionSummary::Generated { path, .. } = run_cli(cli)? else {
///     panic!("generate must report a generated document");
/// };
/// assert!(std::fs::read_to_string(path)?.starts_with("5,5\n"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command.unwrap_or_else(|| Command::Generate(GenerateCommand::default())) {
        Command::Generate(command) => {
            span.record("command", field::display("generate"));
            run_generate(&command)
        }
        Command::Check(command) => {
            span.record("command", field::display("check"));
            run_check(&command)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(
        vertices = command.vertices,
        output_dir = %command.output_dir.display(),
        shuffled = command.shuffle_palette,
    ),
)]
pub(super) fn run_generate(command: &GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let palette = select_palette(command.shuffle_palette, command.seed);
    let generator = GeneratorBuilder::new()
        .with_vertex_count(command.vertices)
        .with_palette(palette)
        .build()?;
    let graph = generator.generate_at(&command.output_dir)?;
    let path = command.output_dir.join(graph.name.to_string());

    info!(path = %path.display(), bytes = graph.bytes, "command completed");
    Ok(ExecutionSummary::Generated {
        path,
        graph,
        print_path: command.print_path,
    })
}

pub(super) fn select_palette(shuffle: bool, seed: Option<u64>) -> Palette {
    if !shuffle {
        return Palette::default();
    }
    let mut rng = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    Palette::shuffled(&mut rng)
}

#[instrument(
    name = "cli.check",
    err,
    skip(command),
    fields(path = %command.path.display(), vertex_limit = command.vertex_limit),
)]
pub(super) fn run_check(command: &CheckCommand) -> Result<ExecutionSummary, CliError> {
    let text = read_document(&command.path)?;
    let limits = ReadLimits {
        vertex_limit: command.vertex_limit,
    };
    let document = GraphDocument::parse(&text, limits)?;
    let report = ColouredGraph::from_document(&document).verify()?;

    info!(
        vertices = document.vertex_count(),
        edges = document.edge_count(),
        "command completed"
    );
    Ok(ExecutionSummary::Checked {
        path: command.path.clone(),
        vertices: document.vertex_count(),
        edges: document.edge_count(),
        report,
    })
}

fn read_document(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders `summary` to `writer`.
///
/// Generation is silent unless the path was requested; checks print a short
/// report.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generated {
            path, print_path, ..
        } => {
            if *print_path {
                writeln!(writer, "{}", path.display())?;
            }
        }
        ExecutionSummary::Checked {
            path,
            vertices,
            edges,
            ..
        } => {
            writeln!(writer, "document: {}", path.display())?;
            writeln!(writer, "vertices: {vertices}")?;
            writeln!(writer, "edges: {edges}")?;
            writeln!(writer, "colouring: proper")?;
        }
    }
    Ok(())
}
