//! Pads, designators and the per-part pad collection.

use std::fmt;

use cavalier_contours::polyline::Polyline;
use thiserror::Error;

use crate::cursor::Cursor;
use crate::layer::Layer;

/// Pad name marking a terminal that carries no net.
///
/// Reserved pads still get copper and a drill, but they are skipped when
/// labelling and never take part in routing.
pub const RESERVED_NAME: &str = "RESERVED";

/// A reference like `U1` or `J3`: a family letter plus a board-wide index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Designator {
    pub family: char,
    pub index: u32,
}

impl Designator {
    #[must_use]
    pub fn new(family: char, index: u32) -> Self {
        Self { family, index }
    }
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family, self.index)
    }
}

/// Whether a pad is a real contact or a reserved terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetRole {
    Contact,
    Reserved,
}

impl NetRole {
    /// Classify a pad by its name. Anything not named [`RESERVED_NAME`] is a
    /// contact.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == RESERVED_NAME {
            Self::Reserved
        } else {
            Self::Contact
        }
    }
}

/// One placed pad: its copper outline plus the cursor it was stamped from.
///
/// The cursor points outward from the part body, so routing can pick the pad
/// up and walk away from it without re-deriving an exit direction.
#[derive(Debug, Clone)]
pub struct Pad {
    pub cursor: Cursor,
    pub outline: Polyline<f64>,
    pub name: String,
    pub owner: Designator,
    pub role: NetRole,
    pub layer: Layer,
}

impl Pad {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}.{}", self.owner, self.name)
    }
}

#[derive(Error, Debug)]
pub enum PadError {
    #[error("duplicate pad name \"{name}\" on {owner}")]
    DuplicateName { owner: Designator, name: String },
}

/// The pads of one placed part, in placement order.
#[derive(Debug, Clone)]
pub struct PadSet {
    owner: Designator,
    pads: Vec<Pad>,
}

impl PadSet {
    #[must_use]
    pub fn new(owner: Designator) -> Self {
        Self {
            owner,
            pads: Vec::new(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> Designator {
        self.owner
    }

    /// Append a pad, rejecting a contact name already taken on this part.
    /// Reserved terminals may repeat freely.
    pub fn append(&mut self, pad: Pad) -> Result<(), PadError> {
        if pad.role == NetRole::Contact && self.get(&pad.name).is_some() {
            return Err(PadError::DuplicateName {
                owner: self.owner,
                name: pad.name,
            });
        }
        self.pads.push(pad);
        Ok(())
    }

    /// Look up a contact pad by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Pad> {
        self.pads
            .iter()
            .find(|p| p.role == NetRole::Contact && p.name == name)
    }

    #[must_use]
    pub fn pads(&self) -> &[Pad] {
        &self.pads
    }

    /// The routable pads, in placement order.
    pub fn contacts(&self) -> impl Iterator<Item = &Pad> {
        self.pads.iter().filter(|p| p.role == NetRole::Contact)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }
}
