use crate::foundation::{
    core::{CANVAS_SIZE, CURVE_RADIUS_OFFSET, LANE_PITCH},
    error::{TrackCodeError, TrackCodeResult},
};

/// Width of one lane's boundary squares plus the gap to the next lane.
const LANE_BLOCK: f64 = 170.0;
/// Farthest a straight side line reaches past the outer distance.
const SIDE_LINE_DEPTH: f64 = 128.0;

/// Lane count plus every distance derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieceLayout {
    lanes: u32,
}

impl PieceLayout {
    /// Validate a lane count against the fixed canvas.
    pub fn new(lanes: u32) -> TrackCodeResult<Self> {
        if lanes == 0 {
            return Err(TrackCodeError::layout("lanes must be >= 1"));
        }
        let layout = Self { lanes };
        let outer = layout.straight_outer_distance();
        if outer < SIDE_LINE_DEPTH {
            return Err(TrackCodeError::layout(format!(
                "{lanes} lanes do not fit on a {CANVAS_SIZE} unit canvas (outer distance {outer} < {SIDE_LINE_DEPTH})"
            )));
        }
        Ok(layout)
    }

    /// Largest lane count [`PieceLayout::new`] accepts.
    pub fn max_lanes() -> u32 {
        ((CANVAS_SIZE - 80.0 - 2.0 * SIDE_LINE_DEPTH) / LANE_PITCH).floor() as u32
    }

    pub fn lanes(&self) -> u32 {
        self.lanes
    }

    /// Distance from the canvas edge to the outermost lane of a straight piece.
    pub fn straight_outer_distance(&self) -> f64 {
        (CANVAS_SIZE - (f64::from(self.lanes) * LANE_PITCH + 80.0)) / 2.0
    }

    /// Left edge of a lane's marks on straight and intersection pieces.
    ///
    /// Lane 0 sits at the right; each further lane moves one pitch left.
    pub fn lane_start_x(&self, lane: usize) -> f64 {
        CANVAS_SIZE - self.straight_outer_distance() - LANE_BLOCK - LANE_PITCH * lane as f64
    }

    /// Radius of the innermost lane of curve and junction pieces.
    pub fn arc_base_radius(&self) -> f64 {
        self.straight_outer_distance() + CURVE_RADIUS_OFFSET
    }

    pub fn arc_lane_radius(&self, lane: usize) -> f64 {
        self.arc_base_radius() + LANE_PITCH * lane as f64
    }
}
