//! Cyclegen core library.
//!
//! Generates coloured cycle graph documents, writes them under random UUID
//! file names, and reads them back to verify the colouring is proper.

mod colouring;
mod document;
mod error;
mod generator;
mod graph;
mod output;
mod palette;

pub use crate::{
    colouring::{ColouredGraph, ColouringReport},
    document::{DEFAULT_VERTEX_LIMIT, GraphDocument, ReadLimits},
    error::{
        ColouringError, ColouringErrorCode, DocumentError, DocumentErrorCode, GenerateError,
        GenerateErrorCode,
    },
    generator::{DEFAULT_VERTEX_COUNT, GeneratedGraph, Generator, GeneratorBuilder, generate},
    graph::{CycleGraph, Edge},
    output::{OutputName, open_output_dir, write_new},
    palette::{Colour, Palette, UnknownColour},
};
