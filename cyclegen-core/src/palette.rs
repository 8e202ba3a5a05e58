//! Vertex colours and the ordered palette they are drawn from.

use std::{fmt, str::FromStr};

use rand::{Rng, seq::SliceRandom};

/// One of the three labels a vertex may carry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Colour {
    /// Written as `R`.
    Red,
    /// Written as `Y`.
    Yellow,
    /// Written as `B`.
    Blue,
}

impl Colour {
    /// Every colour in canonical palette order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Yellow, Self::Blue];

    /// Returns the single-character label used in graph documents.
    ///
    /// # Examples
    /// ```
    /// use cyclegen_core::Colour;
    ///
    /// assert_eq!(Colour::Yellow.label(), 'Y');
    /// ```
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Blue => 'B',
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raised when text does not name a palette colour.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown colour `{0}`")]
pub struct UnknownColour(pub String);

impl FromStr for Colour {
    type Err = UnknownColour;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "R" => Ok(Self::Red),
            "Y" => Ok(Self::Yellow),
            "B" => Ok(Self::Blue),
            other => Err(UnknownColour(other.to_owned())),
        }
    }
}

/// Ordered permutation of [`Colour::ALL`] assigned cyclically to vertices.
///
/// Vertex `v` (one-based) receives the colour at position `(v - 1) mod 3`.
///
/// # Examples
/// ```
/// use cyclegen_core::{Colour, Palette};
///
/// let palette = Palette::default();
/// let first: Vec<Colour> = palette.cycle().take(4).collect();
/// assert_eq!(first, [Colour::Red, Colour::Yellow, Colour::Blue, Colour::Red]);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Palette {
    order: [Colour; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            order: Colour::ALL,
        }
    }
}

impl Palette {
    /// Returns a palette with the colours in a random order.
    ///
    /// Shuffling only relabels colour classes, so whether a colouring is
    /// proper does not change.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut order = Colour::ALL;
        order.shuffle(rng);
        Self { order }
    }

    /// Returns the colours in assignment order.
    #[must_use]
    pub const fn colours(&self) -> &[Colour; 3] {
        &self.order
    }

    /// Returns an endless iterator yielding the colour of vertex 1, 2, 3, ...
    pub fn cycle(&self) -> impl Iterator<Item = Colour> + '_ {
        self.order.iter().copied().cycle()
    }
}
