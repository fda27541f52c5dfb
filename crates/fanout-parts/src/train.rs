//! Evenly spaced placement along a cursor axis.

use fanout_core::Cursor;

use crate::PartError;

/// Invoke `build` at `count` positions spaced `pitch` apart along the
/// cursor's heading. The cursor advances after each build, so the first
/// element lands at the start position and order follows the heading.
pub fn train<F>(mut cursor: Cursor, count: usize, pitch: f64, mut build: F) -> Result<(), PartError>
where
    F: FnMut(Cursor) -> Result<(), PartError>,
{
    for _ in 0..count {
        build(cursor)?;
        cursor.forward(pitch);
    }
    Ok(())
}
