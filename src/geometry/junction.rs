use std::f64::consts::PI;

use crate::{
    foundation::{
        core::{CANVAS_SIZE, Point},
        error::{TrackCodeError, TrackCodeResult},
    },
    geometry::{
        arc::{ArcLaneGeometry, SideLineFrame, build_arc_lane},
        curve::{CURVE_CENTER, CURVE_END, CURVE_START},
        layout::PieceLayout,
        primitive::ArcPrimitive,
    },
};

/// One of the two arcs a junction splits into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JunctionBranch {
    /// Bends towards the left canvas edge, like a curve piece.
    Left,
    /// Mirror image, centered on the bottom-right corner.
    Right,
}

impl JunctionBranch {
    pub const ALL: [JunctionBranch; 2] = [JunctionBranch::Left, JunctionBranch::Right];

    pub fn center(self) -> Point {
        match self {
            JunctionBranch::Left => CURVE_CENTER,
            JunctionBranch::Right => Point::new(CANVAS_SIZE, CANVAS_SIZE),
        }
    }

    /// `(start, end)` angles; lanes run clockwise from start to end.
    pub fn angles(self) -> (f64, f64) {
        match self {
            JunctionBranch::Left => (CURVE_START, CURVE_END),
            JunctionBranch::Right => (PI, PI * 1.5),
        }
    }
}

/// How the lanes of a junction are divided between its branches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JunctionSplit {
    pub left: u32,
    pub right: u32,
}

impl JunctionSplit {
    /// Default split puts `floor(lanes / 2)` lanes on the left.
    pub fn new(layout: &PieceLayout, left: Option<u32>) -> TrackCodeResult<Self> {
        let lanes = layout.lanes();
        let left = left.unwrap_or(lanes / 2);
        if left > lanes {
            return Err(TrackCodeError::layout(format!(
                "junction left lanes ({left}) exceed the piece's {lanes} lanes"
            )));
        }
        Ok(Self {
            left,
            right: lanes - left,
        })
    }

    pub fn lanes(&self, branch: JunctionBranch) -> u32 {
        match branch {
            JunctionBranch::Left => self.left,
            JunctionBranch::Right => self.right,
        }
    }
}

/// Lane `lane` of `branch`. Both branches count their radii from the same base.
pub fn build_junction_lane(
    layout: &PieceLayout,
    branch: JunctionBranch,
    lane: usize,
) -> TrackCodeResult<ArcLaneGeometry> {
    let (start, end) = branch.angles();
    build_arc_lane(
        branch.center(),
        layout.arc_lane_radius(lane),
        start,
        end,
        lane,
    )
}

/// Outline along the inner edge of both branches.
pub fn build_junction_side_lines(layout: &PieceLayout) -> TrackCodeResult<Vec<ArcPrimitive>> {
    let base = layout.arc_base_radius();
    let left = SideLineFrame {
        center: JunctionBranch::Left.center(),
        base_radius: base,
        inward: true,
        from: CURVE_END,
        to: CURVE_START,
        clockwise: false,
    };
    let right = SideLineFrame {
        center: JunctionBranch::Right.center(),
        from: PI,
        to: PI * 1.5,
        clockwise: true,
        ..left
    };

    let mut arcs = left.build()?;
    arcs.extend(right.build()?);
    Ok(arcs)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/junction.rs"]
mod tests;
