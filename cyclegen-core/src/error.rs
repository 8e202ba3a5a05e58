//! Error types for the cyclegen core library.
//!
//! Every public error enum carries a stable machine-readable code so the CLI
//! can report failures in structured logs without matching on display text.

use std::{fmt, io};

use thiserror::Error;

use crate::palette::Colour;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors raised while configuring a generator or persisting its output.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A cycle needs at least one vertex.
    #[error("vertex count must be at least 1 (got {got})")]
    InvalidVertexCount {
        /// The rejected vertex count.
        got: usize,
    },
    /// The output file could not be created or written.
    #[error("failed to write graph document `{target}`: {source}")]
    FileSystem {
        /// Output file name, or the directory when it could not be opened.
        target: String,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

define_error_codes! {
    /// Stable codes describing [`GenerateError`] variants.
    enum GenerateErrorCode for GenerateError {
        /// A cycle needs at least one vertex.
        InvalidVertexCount => InvalidVertexCount { .. } => "GENERATE_INVALID_VERTEX_COUNT",
        /// The output file could not be created or written.
        FileSystem => FileSystem { .. } => "GENERATE_FILE_SYSTEM",
    }
}

/// Errors raised while parsing a graph document.
///
/// Line numbers are one-based and refer to the physical line in the input.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DocumentError {
    /// The input contained no header line.
    #[error("graph document is empty")]
    EmptyInput,
    /// The header did not consist of exactly two comma-separated fields.
    #[error("invalid graph header `{line}`; expected `<vertices>,<edges>`")]
    InvalidHeader {
        /// Raw header text.
        line: String,
    },
    /// A field expected to hold an unsigned integer did not parse.
    #[error("line {line_number}: `{value}` is not a valid unsigned integer")]
    InvalidNumber {
        /// Line holding the bad field.
        line_number: usize,
        /// Raw field text.
        value: String,
    },
    /// The header announced more vertices than the reader accepts.
    #[error("vertex count {vertices} must be less than {limit}")]
    TooManyVertices {
        /// Vertex count from the header.
        vertices: usize,
        /// Exclusive upper bound enforced by the reader.
        limit: usize,
    },
    /// The header announced more edges than a graph of its size can hold.
    #[error("edge count {edges} must not exceed vertices squared ({vertices}^2)")]
    TooManyEdges {
        /// Edge count from the header.
        edges: usize,
        /// Vertex count from the header.
        vertices: usize,
    },
    /// An edge line did not have the `<from>,<to>` shape.
    #[error("line {line_number}: invalid edge format")]
    MalformedEdge {
        /// Offending line.
        line_number: usize,
    },
    /// A vertex line did not have the `<vertex>,<colour>` shape.
    #[error("line {line_number}: invalid vertex format")]
    MalformedVertex {
        /// Offending line.
        line_number: usize,
    },
    /// A vertex line named a colour outside the palette.
    #[error("line {line_number}: unknown colour `{value}`")]
    UnknownColour {
        /// Offending line.
        line_number: usize,
        /// Raw colour text.
        value: String,
    },
    /// The input ended before every announced line was read.
    #[error("unexpected end of input at line {line_number}; expected {expected}")]
    UnexpectedEof {
        /// Line that was expected to exist.
        line_number: usize,
        /// Kind of record that was expected.
        expected: &'static str,
    },
    /// Non-empty content followed the announced records.
    #[error("line {line_number}: unexpected trailing content")]
    TrailingContent {
        /// First trailing line.
        line_number: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DocumentError`] variants.
    enum DocumentErrorCode for DocumentError {
        /// The input contained no header line.
        EmptyInput => EmptyInput => "DOCUMENT_EMPTY",
        /// The header was malformed.
        InvalidHeader => InvalidHeader { .. } => "DOCUMENT_INVALID_HEADER",
        /// A numeric field did not parse.
        InvalidNumber => InvalidNumber { .. } => "DOCUMENT_INVALID_NUMBER",
        /// The vertex limit was exceeded.
        TooManyVertices => TooManyVertices { .. } => "DOCUMENT_TOO_MANY_VERTICES",
        /// The edge limit was exceeded.
        TooManyEdges => TooManyEdges { .. } => "DOCUMENT_TOO_MANY_EDGES",
        /// An edge line was malformed.
        MalformedEdge => MalformedEdge { .. } => "DOCUMENT_MALFORMED_EDGE",
        /// A vertex line was malformed.
        MalformedVertex => MalformedVertex { .. } => "DOCUMENT_MALFORMED_VERTEX",
        /// A colour was outside the palette.
        UnknownColour => UnknownColour { .. } => "DOCUMENT_UNKNOWN_COLOUR",
        /// The input ended early.
        UnexpectedEof => UnexpectedEof { .. } => "DOCUMENT_UNEXPECTED_EOF",
        /// Content followed the announced records.
        TrailingContent => TrailingContent { .. } => "DOCUMENT_TRAILING_CONTENT",
    }
}

/// Errors raised when a colouring fails verification.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ColouringError {
    /// An edge endpoint has no colour assignment.
    #[error("vertex {vertex} doesn't have any colour")]
    Uncoloured {
        /// Vertex without a colour line.
        vertex: usize,
    },
    /// An edge joins two vertices of the same colour.
    #[error("graph colouring isn't proper: edge {from},{to} joins two {colour} vertices")]
    ImproperColouring {
        /// Edge source.
        from: usize,
        /// Edge target.
        to: usize,
        /// Colour shared by both endpoints.
        colour: Colour,
    },
}

define_error_codes! {
    /// Stable codes describing [`ColouringError`] variants.
    enum ColouringErrorCode for ColouringError {
        /// An edge endpoint has no colour assignment.
        Uncoloured => Uncoloured { .. } => "COLOURING_UNCOLOURED_VERTEX",
        /// An edge joins two vertices of the same colour.
        ImproperColouring => ImproperColouring { .. } => "COLOURING_IMPROPER",
    }
}
