//! Copper shape stamps, oriented to a cursor.

use cavalier_contours::polyline::{PlineVertex, Polyline};

use crate::cursor::Cursor;

impl Cursor {
    /// Stamp a regular polygon of circumscribed `radius` centered on the
    /// cursor, first vertex along the heading.
    ///
    /// Pad shapes use 60 sides as the round approximation, 8 for octagons and
    /// 4 for squares.
    ///
    /// # Panics
    ///
    /// Panics when `sides < 3` or `radius` is not strictly positive.
    #[must_use]
    pub fn stamp_polygon(&self, radius: f64, sides: u32) -> Polyline<f64> {
        assert!(sides >= 3, "polygon stamp needs at least 3 sides, got {sides}");
        assert!(
            radius > 0.0,
            "polygon stamp needs a positive radius, got {radius}"
        );

        let mut pl = Polyline::new_closed();
        for i in 0..sides {
            let a = (self.heading + f64::from(i) * 360.0 / f64::from(sides)).to_radians();
            pl.vertex_data.push(PlineVertex::new(
                self.position.x + radius * a.cos(),
                self.position.y + radius * a.sin(),
                0.0,
            ));
        }
        pl
    }

    /// Stamp a rectangle centered on the cursor, `w` along the heading and
    /// `h` across it.
    ///
    /// # Panics
    ///
    /// Panics when either side is not strictly positive.
    #[must_use]
    pub fn stamp_rectangle(&self, w: f64, h: f64) -> Polyline<f64> {
        assert!(
            w > 0.0 && h > 0.0,
            "rectangle stamp needs positive sides, got {w} x {h}"
        );

        let hw = w / 2.0;
        let hh = h / 2.0;
        let corners = [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)];

        let mut pl = Polyline::new_closed();
        for (dx, dy) in corners {
            let p = self.local_point(dx, dy);
            pl.vertex_data.push(PlineVertex::new(p.x, p.y, 0.0));
        }
        pl
    }
}
