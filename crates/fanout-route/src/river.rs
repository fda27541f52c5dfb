//! Ordered trace bundles and the pairwise interleave that builds them.

use fanout_board::{Board, Track};
use fanout_core::{Pad, Point};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::stub::TraceStub;
use crate::RouteError;

/// One pad on its way out: the pad plus the stub routed from it.
#[derive(Debug, Clone)]
pub struct Escape {
    pub pad: Pad,
    pub stub: TraceStub,
}

impl Escape {
    /// Begin an escape at the pad's cursor.
    #[must_use]
    pub fn new(pad: &Pad) -> Self {
        Self {
            pad: pad.clone(),
            stub: TraceStub::start(pad.cursor),
        }
    }
}

/// What to do when the two groups handed to [`River::interleave`] differ in
/// size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MismatchPolicy {
    /// Refuse to build the river. Dropping pads silently produces a board
    /// that looks right and routes wrong.
    #[default]
    Strict,
    /// Zip to the shorter group, warning about every dropped pad.
    Truncate,
}

/// An ordered bundle of escapes routed together. The order is the bus
/// mapping: reordering a river swaps nets between the connectors it joins.
#[derive(Debug, Clone)]
pub struct River {
    escapes: Vec<Escape>,
}

impl River {
    /// Zip two groups pairwise, a0 b0 a1 b1 and so on, preserving each
    /// group's internal order.
    pub fn interleave(
        a: Vec<Escape>,
        b: Vec<Escape>,
        policy: MismatchPolicy,
    ) -> Result<Self, RouteError> {
        if a.len() != b.len() {
            match policy {
                MismatchPolicy::Strict => {
                    return Err(RouteError::InterleaveMismatch {
                        left: a.len(),
                        right: b.len(),
                    });
                }
                MismatchPolicy::Truncate => {
                    let kept = a.len().min(b.len());
                    warn!(
                        left = a.len(),
                        right = b.len(),
                        dropped = a.len() + b.len() - 2 * kept,
                        "interleave truncated to the shorter group"
                    );
                }
            }
        }
        let escapes = a.into_iter().zip(b).flat_map(|(x, y)| [x, y]).collect();
        Ok(Self { escapes })
    }

    /// Extend stubs forward so every escape ends on one line perpendicular
    /// to the shared exit heading.
    ///
    /// # Panics
    ///
    /// Panics when the stubs do not share a heading; every group must be
    /// turned onto the same exit direction before interleaving.
    pub fn align_ends(&mut self) -> &mut Self {
        let Some(first) = self.escapes.first() else {
            return self;
        };
        let heading = first.stub.cursor().heading.rem_euclid(360.0);
        for escape in &self.escapes {
            let h = escape.stub.cursor().heading.rem_euclid(360.0);
            assert!(
                (h - heading).abs() < 1e-9,
                "river stubs must share a heading, got {h} and {heading}"
            );
        }

        let (sin, cos) = heading.to_radians().sin_cos();
        let project = |p: Point| p.x * cos + p.y * sin;
        let target = self
            .escapes
            .iter()
            .map(|e| project(e.stub.end()))
            .fold(f64::NEG_INFINITY, f64::max);
        for escape in &mut self.escapes {
            let deficit = target - project(escape.stub.end());
            if deficit > 1e-9 {
                escape.stub.forward(deficit);
            }
        }
        self
    }

    /// Commit every stub to the board as a track of the configured trace
    /// width on its pad's copper layer.
    pub fn commit(&self, board: &mut Board) {
        for escape in &self.escapes {
            board.register_track(Track {
                layer: escape.pad.layer,
                waypoints: escape.stub.waypoints().to_vec(),
                width: board.config().trace,
            });
        }
    }

    #[must_use]
    pub fn escapes(&self) -> &[Escape] {
        &self.escapes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Escape> {
        self.escapes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.escapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.escapes.is_empty()
    }
}
