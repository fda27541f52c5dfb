//! Typed records for the drawing primitives inside a package.

use fanout_core::Point;

/// Drawing layers used inside package definitions, keyed by vendor layer
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageLayer {
    /// Layer 20, board outline and milling.
    Outline,
    /// Layer 21, top silkscreen.
    Silk,
    /// Layer 51, documentation. Filled circles here stand in for round
    /// mounting holes.
    Docu,
    /// Any other layer number, carried through so callers can skip it.
    Other(u8),
}

impl PackageLayer {
    #[must_use]
    pub fn from_number(n: u8) -> Self {
        match n {
            20 => Self::Outline,
            21 => Self::Silk,
            51 => Self::Docu,
            other => Self::Other(other),
        }
    }
}

/// Through-pad outline keyword. Files that omit the attribute get round pads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadShape {
    #[default]
    Round,
    Octagon,
    Square,
}

impl PadShape {
    /// Polygon side count used when stamping this shape. Round pads are
    /// approximated by a 60-gon.
    #[must_use]
    pub fn sides(self) -> u32 {
        match self {
            Self::Round => 60,
            Self::Octagon => 8,
            Self::Square => 4,
        }
    }

    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "circle" => Some(Self::Round),
            "octagon" => Some(Self::Octagon),
            "square" => Some(Self::Square),
            _ => None,
        }
    }
}

/// One drawing element of a package. Coordinates are package-local
/// millimeters, transformed into board space at import time.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Wire {
        layer: PackageLayer,
        from: Point,
        to: Point,
    },
    /// Non-plated mechanical hole.
    Hole { at: Point, drill: f64 },
    Circle {
        at: Point,
        radius: f64,
        layer: PackageLayer,
    },
    /// Surface-mount pad, `width` across x and `height` across y.
    Smd {
        at: Point,
        width: f64,
        height: f64,
        name: String,
    },
    /// Plated through-hole pad.
    ThroughPad {
        at: Point,
        diameter: f64,
        drill: f64,
        shape: PadShape,
        name: String,
    },
}

/// A named package: its primitives in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub name: String,
    pub primitives: Vec<Primitive>,
}
