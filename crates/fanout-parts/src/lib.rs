//! Concrete parts: how footprints are placed and how their pads escape.

pub mod dual_inline;
pub mod flat_no_lead;
pub mod import;
pub mod library_part;
pub mod train;

use fanout_board::Board;
use fanout_core::{Cursor, PadError, PadSet};
use fanout_route::{River, RouteError};
use thiserror::Error;

pub use dual_inline::DualInline;
pub use flat_no_lead::FlatNoLead;
pub use import::ImportOptions;
pub use library_part::LibraryPart;

#[derive(Debug, Error)]
pub enum PartError {
    #[error("pad registration failed: {0}")]
    Pad(#[from] PadError),

    #[error("escape routing failed: {0}")]
    Route(#[from] RouteError),

    #[error("part \"{part}\" has no escape strategy")]
    NoEscapeStrategy { part: String },
}

/// A placeable part. Placement stamps the part's geometry onto the board
/// and returns the owned pad set; escape consumes that pad set and returns
/// the routed river.
pub trait Part {
    /// Designator family letter, U for ICs and J for connectors.
    fn family(&self) -> char;

    fn place(&self, anchor: Cursor, board: &mut Board) -> Result<PadSet, PartError>;

    fn escape(&self, pads: &PadSet, board: &mut Board) -> Result<River, PartError>;
}
