//! The four card attributes.
//!
//! Every axis has exactly three values. The `Attribute` trait gives the
//! rules code a uniform way to enumerate values and to find the value
//! that completes a pair.

use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Common behaviour of the four 3-valued attribute axes.
pub trait Attribute: Copy + Eq + Hash + std::fmt::Debug + 'static {
    /// All values, in canonical order.
    const ALL: [Self; 3];

    /// Position of this value in `ALL`.
    fn index(self) -> usize;

    /// The value that makes `a`, `b` and the result all-same or all-different.
    ///
    /// ```
    /// use set_game::cards::{Attribute, Color};
    ///
    /// assert_eq!(Color::third(Color::Red, Color::Red), Color::Red);
    /// assert_eq!(Color::third(Color::Red, Color::Green), Color::Purple);
    /// ```
    #[must_use]
    fn third(a: Self, b: Self) -> Self {
        if a == b {
            a
        } else {
            // Indices 0 + 1 + 2 = 3, so the missing one is 3 - a - b.
            Self::ALL[3 - a.index() - b.index()]
        }
    }
}

/// Symbol count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Number {
    One,
    Two,
    Three,
}

impl Number {
    /// Numeric value (1, 2 or 3).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Number::One => 1,
            Number::Two => 2,
            Number::Three => 3,
        }
    }

    /// Build from a numeric value; `None` outside 1..=3.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Number::One),
            2 => Some(Number::Two),
            3 => Some(Number::Three),
            _ => None,
        }
    }
}

impl Attribute for Number {
    const ALL: [Self; 3] = [Number::One, Number::Two, Number::Three];

    fn index(self) -> usize {
        self as usize
    }
}

/// Symbol shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shape {
    Diamond,
    Squiggle,
    Oval,
}

impl Attribute for Shape {
    const ALL: [Self; 3] = [Shape::Diamond, Shape::Squiggle, Shape::Oval];

    fn index(self) -> usize {
        self as usize
    }
}

/// Symbol fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shading {
    Solid,
    Striped,
    Open,
}

impl Attribute for Shading {
    const ALL: [Self; 3] = [Shading::Solid, Shading::Striped, Shading::Open];

    fn index(self) -> usize {
        self as usize
    }
}

/// Symbol color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
}

impl Attribute for Color {
    const ALL: [Self; 3] = [Color::Red, Color::Green, Color::Purple];

    fn index(self) -> usize {
        self as usize
    }
}

/// The attribute values of a card, without identity or state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Features {
    pub number: Number,
    pub shape: Shape,
    pub shading: Shading,
    pub color: Color,
}

impl Features {
    #[must_use]
    pub const fn new(number: Number, shape: Shape, shading: Shading, color: Color) -> Self {
        Self {
            number,
            shape,
            shading,
            color,
        }
    }

    /// The unique features completing a set with `self` and `other`.
    #[must_use]
    pub fn complete(self, other: Features) -> Features {
        Features {
            number: Number::third(self.number, other.number),
            shape: Shape::third(self.shape, other.shape),
            shading: Shading::third(self.shading, other.shading),
            color: Color::third(self.color, other.color),
        }
    }

    /// Dense index in `0..81`, number-major.
    #[must_use]
    pub fn ordinal(self) -> usize {
        ((self.number.index() * 3 + self.shape.index()) * 3 + self.shading.index()) * 3
            + self.color.index()
    }
}
