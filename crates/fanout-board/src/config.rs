//! Board-wide design rules.

use fanout_core::units::mil;
use serde::{Deserialize, Serialize};

/// Design rules and dimensions shared by every placement and routing step.
/// All lengths are millimeters. Absent fields fall back to the defaults of a
/// small two layer prototyping board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Board extent, width then height.
    pub size: [f64; 2],
    /// Default trace width.
    pub trace: f64,
    /// Copper to copper clearance.
    pub space: f64,
    /// Via drill diameter.
    pub via_drill: f64,
    /// Via pad diameter.
    pub via: f64,
    /// Via to via clearance.
    pub via_space: f64,
    /// Silkscreen line width.
    pub silk: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: [24.0, 12.0],
            trace: mil(6.0),
            space: mil(10.0),
            via_drill: 0.3,
            via: 0.6,
            via_space: mil(5.0),
            silk: mil(6.0),
        }
    }
}
