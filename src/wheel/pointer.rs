//! The fixed triangle pointer above the wheel.

/// A point in canvas space (y up).
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Bounding box of a shape in canvas space (y up).
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }
}

/// Upward-facing triangle: apex at the top center, base along the bottom
/// edge resting on the rim.
///
pub struct Pointer;

impl Pointer {
    /// Closed outline of the pointer within `bounds`.
    ///
    pub fn path(bounds: Bounds) -> [Point; 4] {
        let apex = Point {
            x: bounds.mid_x(),
            y: bounds.max_y(),
        };
        [
            apex,
            Point {
                x: bounds.min_x(),
                y: bounds.min_y(),
            },
            Point {
                x: bounds.max_x(),
                y: bounds.min_y(),
            },
            apex,
        ]
    }

    /// Outline edges as line segments.
    ///
    pub fn edges(bounds: Bounds) -> impl Iterator<Item = (Point, Point)> {
        let path = Self::path(bounds);
        (0..path.len() - 1).map(move |i| (path[i], path[i + 1]))
    }

    /// Horizontal fill spans from base to apex, `rows` of them.
    ///
    pub fn fill_spans(bounds: Bounds, rows: usize) -> Vec<(Point, Point)> {
        (0..=rows)
            .map(|row| {
                let t = if rows == 0 { 0.0 } else { row as f64 / rows as f64 };
                let y = bounds.min_y() + t * bounds.height;
                let half = (1.0 - t) * bounds.width / 2.0;
                (
                    Point {
                        x: bounds.mid_x() - half,
                        y,
                    },
                    Point {
                        x: bounds.mid_x() + half,
                        y,
                    },
                )
            })
            .collect()
    }
}
