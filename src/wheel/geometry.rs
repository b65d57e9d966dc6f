//! Wheel geometry.
//!
//! Angles are in degrees and grow clockwise on screen, with 0° pointing to
//! the right (3 o'clock). Segment `i` is centered on the wheel-local angle
//! `i * SEGMENT_DEGREES`. The face is drawn so that segment 0 sits under the
//! pointer when the wheel rotation is zero.

/// Number of segments on the wheel.
///
pub const SEGMENT_COUNT: usize = 100;

/// Angular width of a single segment.
///
pub const SEGMENT_DEGREES: f64 = 360.0 / SEGMENT_COUNT as f64;

/// Screen angle at which the fixed pointer sits (12 o'clock).
///
pub const POINTER_ANGLE: f64 = 270.0;

/// Label radius as a fraction of the wedge radius.
///
pub const LABEL_RADIUS_RATIO: f64 = 100.0 / 140.0;

/// Alternating wedge fill.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Primary,
    Secondary,
}

/// One wedge of the wheel.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub index: u8,
    pub start_angle: f64,
    pub center_angle: f64,
    pub end_angle: f64,
    pub fill: Fill,
}

impl Segment {
    /// Build the segment for the given index.
    ///
    pub fn new(index: u8) -> Self {
        let center_angle = f64::from(index) * SEGMENT_DEGREES;
        Segment {
            index,
            start_angle: center_angle - SEGMENT_DEGREES / 2.0,
            center_angle,
            end_angle: center_angle + SEGMENT_DEGREES / 2.0,
            fill: if index % 2 == 0 {
                Fill::Primary
            } else {
                Fill::Secondary
            },
        }
    }

    /// Label text drawn on the wedge.
    ///
    pub fn label(&self) -> String {
        self.index.to_string()
    }
}

/// Return all wheel segments in index order.
///
pub fn segments() -> [Segment; SEGMENT_COUNT] {
    let mut segments = [Segment::new(0); SEGMENT_COUNT];
    for (index, segment) in segments.iter_mut().enumerate() {
        *segment = Segment::new(index as u8);
    }
    segments
}

/// Angle of the segment for the given number, relative to segment 0.
///
pub fn target_angle(number: u8) -> f64 {
    f64::from(number) * SEGMENT_DEGREES
}

/// Map an angle on the screen plane to a point at the given radius around
/// the origin. The returned y axis points up.
///
pub fn polar_to_point(angle: f64, radius: f64) -> (f64, f64) {
    let radians = angle.to_radians();
    (radius * radians.cos(), -radius * radians.sin())
}

/// Screen angle of a wheel-local angle once the wheel is rotated.
///
pub fn screen_angle(local_angle: f64, rotation: f64) -> f64 {
    (POINTER_ANGLE + local_angle + rotation).rem_euclid(360.0)
}

/// Position of a segment label on its bisector, for the given rotation.
///
pub fn label_position(index: u8, radius: f64, rotation: f64) -> (f64, f64) {
    let angle = screen_angle(target_angle(index), rotation);
    polar_to_point(angle, radius * LABEL_RADIUS_RATIO)
}

/// Return the segment whose center is nearest to the wheel-local angle.
///
pub fn segment_at_angle(angle: f64) -> u8 {
    let steps = (angle.rem_euclid(360.0) / SEGMENT_DEGREES).round() as usize;
    (steps % SEGMENT_COUNT) as u8
}

/// Return the segment under the pointer for the given wheel rotation.
///
pub fn segment_at_pointer(rotation: f64) -> u8 {
    segment_at_angle(-rotation)
}

/// Rotation at which `number` rests under the pointer, in [0, 360).
///
pub fn rest_angle(number: u8) -> f64 {
    (360.0 - target_angle(number)).rem_euclid(360.0)
}

/// Return the absolute rotation nearest to `from + travel` at which
/// `number` rests under the pointer.
///
pub fn settle_angle(from: f64, travel: f64, number: u8) -> f64 {
    let rest = rest_angle(number);
    let turns = ((from + travel - rest) / 360.0).round();
    rest + turns * 360.0
}

/// Number of segments to step between printed labels so that labels of
/// `label_width` cells do not overlap on a circle of `radius_cells`.
///
pub fn label_stride(radius_cells: f64, label_width: f64) -> usize {
    let circumference = 2.0 * std::f64::consts::PI * radius_cells * LABEL_RADIUS_RATIO;
    if circumference <= 0.0 {
        return SEGMENT_COUNT;
    }
    let fitting = (circumference / label_width).floor().max(1.0) as usize;
    let mut stride = SEGMENT_COUNT.div_ceil(fitting).max(1);
    // Keep the stride a divisor of the segment count so labels stay evenly spaced.
    while SEGMENT_COUNT % stride != 0 {
        stride += 1;
    }
    stride
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_segments_cover_circle() {
        let segments = segments();
        assert_eq!(segments.len(), 100);
        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(segment.index as usize, i);
            assert!((segment.end_angle - segment.start_angle - 3.6).abs() < EPSILON);
        }
        assert!((segments[99].end_angle - (360.0 - 1.8)).abs() < EPSILON);
    }

    #[test]
    fn test_segments_alternate_fill() {
        let segments = segments();
        assert_eq!(segments[0].fill, Fill::Primary);
        assert_eq!(segments[1].fill, Fill::Secondary);
        assert_eq!(segments[98].fill, Fill::Primary);
        assert_eq!(segments[99].fill, Fill::Secondary);
    }

    #[test]
    fn test_target_angle() {
        assert!((target_angle(42) - 151.2).abs() < EPSILON);
        assert!((target_angle(99) - 356.4).abs() < EPSILON);
        assert_eq!(target_angle(0), 0.0);
    }

    #[test]
    fn test_segment_at_angle_maps_back() {
        for number in 0..100u8 {
            assert_eq!(segment_at_angle(target_angle(number)), number);
            assert_eq!(segment_at_angle(target_angle(number) + 720.0), number);
            assert_eq!(segment_at_angle(target_angle(number) - 360.0), number);
        }
    }

    #[test]
    fn test_segment_at_angle_within_wedge() {
        assert_eq!(segment_at_angle(1.7), 0);
        assert_eq!(segment_at_angle(1.9), 1);
        assert_eq!(segment_at_angle(359.0), 0);
    }

    #[test]
    fn test_rest_angle_puts_number_under_pointer() {
        for number in 0..100u8 {
            assert_eq!(segment_at_pointer(rest_angle(number)), number);
        }
    }

    #[test]
    fn test_settle_angle_lands_on_number() {
        let mut from = 0.0;
        for (number, travel) in [(42u8, 2311.0), (0, 2000.5), (99, 3243.6), (7, 1803.6)] {
            let settled = settle_angle(from, travel, number);
            assert_eq!(segment_at_pointer(settled), number);
            assert!((settled - (from + travel)).abs() <= 180.0 + EPSILON);
            assert!(settled > from);
            from = settled;
        }
    }

    #[test]
    fn test_settle_angle_matches_whole_turn_travel() {
        // Whole revolutions from rest: the raw travel already lands exactly.
        let travel = 6.0 * 360.0 + (360.0 - target_angle(42));
        let settled = settle_angle(0.0, travel, 42);
        assert!((settled - travel).abs() < EPSILON);
    }

    #[test]
    fn test_label_position_on_bisector() {
        // Segment 0 sits under the pointer (straight up) at rest.
        let (x, y) = label_position(0, 140.0, 0.0);
        assert!(x.abs() < EPSILON);
        assert!((y - 100.0).abs() < EPSILON);

        // A quarter turn clockwise moves it to the right.
        let (x, y) = label_position(0, 140.0, 90.0);
        assert!((x - 100.0).abs() < EPSILON);
        assert!(y.abs() < EPSILON);
    }

    #[test]
    fn test_label_stride() {
        assert_eq!(label_stride(1000.0, 3.0), 1);
        assert_eq!(label_stride(0.0, 3.0), 100);
        let stride = label_stride(15.0, 3.0);
        assert!(stride > 1);
        assert_eq!(100 % stride, 0);
    }
}
