//! Board context: accumulates geometry as parts are placed and routed.
//!
//! Nothing here computes geometry. Parts stamp shapes and hand them over;
//! the board just files them by layer for the output writers, and hands out
//! reference designators so parts stay independent of each other.

pub mod config;

use fanout_core::{Designator, Layer, Pad, Point, Polyline};
use indexmap::IndexMap;
use tracing::debug;

pub use config::BoardConfig;

/// One drill hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drill {
    pub at: Point,
    pub diameter: f64,
}

/// Text on the silkscreen, anchored at its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub at: Point,
    pub text: String,
}

/// A committed trace: waypoints joined by straight segments.
#[derive(Debug, Clone)]
pub struct Track {
    pub layer: Layer,
    pub waypoints: Vec<Point>,
    pub width: f64,
}

/// The board being assembled. Placement and escape calls borrow it mutably;
/// geometry only accumulates, nothing is ever removed.
#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    shapes: IndexMap<Layer, Vec<Polyline<f64>>>,
    drills: Vec<Drill>,
    contacts: Vec<Pad>,
    annotations: Vec<Annotation>,
    tracks: Vec<Track>,
    counters: IndexMap<char, u32>,
}

impl Board {
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            shapes: IndexMap::new(),
            drills: Vec::new(),
            contacts: Vec::new(),
            annotations: Vec::new(),
            tracks: Vec::new(),
            counters: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Hand out the next designator in a family: U1, U2, then J1 and so on.
    pub fn allocate(&mut self, family: char) -> Designator {
        let index = self.counters.entry(family).or_insert(0);
        *index += 1;
        Designator::new(family, *index)
    }

    pub fn register_shape(&mut self, layer: Layer, shape: Polyline<f64>) {
        self.shapes.entry(layer).or_default().push(shape);
    }

    pub fn register_hole(&mut self, at: Point, diameter: f64) {
        self.drills.push(Drill { at, diameter });
    }

    /// File a pad: its copper outline goes to the pad's layer, the pad itself
    /// into the contact list for netlisting.
    pub fn register_contact(&mut self, pad: &Pad) {
        self.register_shape(pad.layer, pad.outline.clone());
        self.contacts.push(pad.clone());
    }

    pub fn register_annotation(&mut self, at: Point, text: impl Into<String>) {
        self.annotations.push(Annotation {
            at,
            text: text.into(),
        });
    }

    pub fn register_track(&mut self, track: Track) {
        debug!(
            layer = %track.layer,
            waypoints = track.waypoints.len(),
            width = track.width,
            "committed track"
        );
        self.tracks.push(track);
    }

    /// Shapes registered on one layer, in registration order.
    #[must_use]
    pub fn shapes(&self, layer: Layer) -> &[Polyline<f64>] {
        self.shapes.get(&layer).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn drills(&self) -> &[Drill] {
        &self.drills
    }

    #[must_use]
    pub fn contacts(&self) -> &[Pad] {
        &self.contacts
    }

    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanout_core::{Cursor, NetRole};

    #[test]
    fn designators_count_per_family() {
        let mut board = Board::default();
        assert_eq!(board.allocate('U').to_string(), "U1");
        assert_eq!(board.allocate('U').to_string(), "U2");
        assert_eq!(board.allocate('J').to_string(), "J1");
        assert_eq!(board.allocate('U').to_string(), "U3");
    }

    #[test]
    fn shapes_accumulate_per_layer() {
        let mut board = Board::default();
        let c = Cursor::new(0.0, 0.0);
        board.register_shape(Layer::Outline, c.stamp_rectangle(4.0, 2.0));
        board.register_shape(Layer::TopSilk, c.stamp_polygon(1.5, 60));
        board.register_shape(Layer::TopSilk, c.stamp_polygon(1.0, 8));

        assert_eq!(board.shapes(Layer::Outline).len(), 1);
        assert_eq!(board.shapes(Layer::TopSilk).len(), 2);
        assert!(board.shapes(Layer::BottomCopper).is_empty());
    }

    #[test]
    fn contacts_carry_copper_onto_their_layer() {
        let mut board = Board::default();
        let owner = board.allocate('U');
        let cursor = Cursor::new(2.0, 3.0);
        let pad = Pad {
            cursor,
            outline: cursor.stamp_polygon(0.8, 60),
            name: "1".to_string(),
            owner,
            role: NetRole::Contact,
            layer: Layer::TopCopper,
        };
        board.register_contact(&pad);

        assert_eq!(board.contacts().len(), 1);
        assert_eq!(board.shapes(Layer::TopCopper).len(), 1);
        assert_eq!(board.contacts()[0].label(), "U1.1");
    }

    #[test]
    fn holes_annotations_and_tracks_accumulate() {
        let mut board = Board::default();
        board.register_hole(Point::new(1.0, 1.0), 0.8);
        board.register_annotation(Point::new(1.0, 1.0), "1");
        board.register_track(Track {
            layer: Layer::TopCopper,
            waypoints: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            width: board.config().trace,
        });

        assert_eq!(board.drills().len(), 1);
        assert_eq!(board.drills()[0].diameter, 0.8);
        assert_eq!(board.annotations()[0].text, "1");
        assert_eq!(board.tracks().len(), 1);
    }
}
