//! Unit helpers. Board geometry is millimeters throughout.

/// Thousandths of an inch to millimeters.
#[must_use]
pub fn mil(v: f64) -> f64 {
    v * 0.0254
}

/// Inches to millimeters.
#[must_use]
pub fn inches(v: f64) -> f64 {
    v * 25.4
}
