use std::f64::consts::PI;

use crate::{
    foundation::{
        core::{CANVAS_SIZE, Point},
        error::TrackCodeResult,
    },
    geometry::{
        arc::{ArcLaneGeometry, SideLineFrame, build_arc_lane},
        layout::PieceLayout,
        primitive::ArcPrimitive,
    },
};

/// Every curve lane is centered on the bottom-left canvas corner.
pub const CURVE_CENTER: Point = Point::new(0.0, CANVAS_SIZE);
pub const CURVE_START: f64 = PI * 1.5;
pub const CURVE_END: f64 = 0.0;

pub fn build_curve_lane(layout: &PieceLayout, lane: usize) -> TrackCodeResult<ArcLaneGeometry> {
    build_arc_lane(
        CURVE_CENTER,
        layout.arc_lane_radius(lane),
        CURVE_START,
        CURVE_END,
        lane,
    )
}

/// Outline of a curve piece: one frame inside the innermost lane, one outside the outermost.
pub fn build_curve_side_lines(layout: &PieceLayout) -> TrackCodeResult<Vec<ArcPrimitive>> {
    let last_lane = layout.lanes() as usize - 1;
    let inner = SideLineFrame {
        center: CURVE_CENTER,
        base_radius: layout.arc_base_radius(),
        inward: true,
        from: CURVE_END,
        to: CURVE_START,
        clockwise: false,
    };
    let outer = SideLineFrame {
        base_radius: layout.arc_lane_radius(last_lane),
        inward: false,
        ..inner
    };

    let mut arcs = inner.build()?;
    arcs.extend(outer.build()?);
    Ok(arcs)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/curve.rs"]
mod tests;
