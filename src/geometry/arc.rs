use crate::{
    encode::sequencer::ArcSlotBudget,
    foundation::{
        core::{CAP_LENGTH, FIRST_SLOT_OFFSET, Point, SLOT_SPACING},
        error::TrackCodeResult,
        math::arc_length_to_angle,
    },
    geometry::primitive::ArcPrimitive,
};

const CAP_STROKE: f64 = 80.0;
const CAP_OFFSET: f64 = 45.0;
const GUIDE_STROKE: f64 = 10.0;

/// Radius and stroke of one code ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub radius: f64,
    pub width: f64,
}

/// The code rings around one arc lane.
///
/// Location bits sit inside the guide arc, track bits outside. A transition marker is a
/// thick inner stroke plus a thin outer stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcCodeRings {
    pub transition_inner: Ring,
    pub transition_outer: Ring,
    pub track_one: Ring,
    pub track_zero: Ring,
    pub location_one: Ring,
    pub location_zero: Ring,
}

impl ArcCodeRings {
    pub fn around(radius: f64) -> Self {
        Self {
            transition_inner: Ring {
                radius: radius - 22.0,
                width: 16.0,
            },
            transition_outer: Ring {
                radius: radius + 13.0,
                width: 4.0,
            },
            track_one: Ring {
                radius: radius + 16.0,
                width: 10.0,
            },
            track_zero: Ring {
                radius: radius + 13.0,
                width: 4.0,
            },
            location_one: Ring {
                radius: radius - 16.0,
                width: 10.0,
            },
            location_zero: Ring {
                radius: radius - 13.0,
                width: 4.0,
            },
        }
    }
}

/// Code layout of one arc lane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcLaneCode {
    pub center: Point,
    pub radius: f64,
    pub rings: ArcCodeRings,
    pub first_slot_start: f64,
    pub slot_angle: f64,
    pub budget: ArcSlotBudget,
}

impl ArcLaneCode {
    /// Angular span `(start, end)` of slot `j`.
    pub fn slot_span(&self, j: usize) -> (f64, f64) {
        let start = self.first_slot_start + self.slot_angle * SLOT_SPACING * j as f64;
        (start, start + self.slot_angle)
    }

    pub fn ring_arc(&self, ring: Ring, j: usize) -> TrackCodeResult<ArcPrimitive> {
        let (start, end) = self.slot_span(j);
        ArcPrimitive::new(self.center, ring.radius, start, end, true, ring.width)
    }
}

/// End caps of one arc lane: boundary squares at both ends plus the guide arc between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcLaneCaps {
    pub squares: [ArcPrimitive; 4],
    pub guide: ArcPrimitive,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcLaneGeometry {
    pub lane: usize,
    pub code: ArcLaneCode,
    pub caps: ArcLaneCaps,
}

/// Geometry of one lane of an arc running clockwise from `start` to `end` around `center`.
pub fn build_arc_lane(
    center: Point,
    radius: f64,
    start: f64,
    end: f64,
    lane: usize,
) -> TrackCodeResult<ArcLaneGeometry> {
    let slot_angle = ArcSlotBudget::slot_angle(radius);
    let cap_angle = arc_length_to_angle(CAP_LENGTH, radius);

    let code = ArcLaneCode {
        center,
        radius,
        rings: ArcCodeRings::around(radius),
        first_slot_start: start + slot_angle * FIRST_SLOT_OFFSET,
        slot_angle,
        budget: ArcSlotBudget::for_radius(radius),
    };

    let inner = radius - CAP_OFFSET;
    let outer = radius + CAP_OFFSET;
    let caps = ArcLaneCaps {
        squares: [
            ArcPrimitive::new(center, inner, start, start + cap_angle, true, CAP_STROKE)?,
            ArcPrimitive::new(center, outer, start, start + cap_angle, true, CAP_STROKE)?,
            ArcPrimitive::new(center, inner, end, end - cap_angle, false, CAP_STROKE)?,
            ArcPrimitive::new(center, outer, end, end - cap_angle, false, CAP_STROKE)?,
        ],
        guide: ArcPrimitive::new(
            center,
            radius,
            start + cap_angle,
            end - cap_angle,
            true,
            GUIDE_STROKE,
        )?,
    };

    Ok(ArcLaneGeometry { lane, code, caps })
}

/// Mirror-able description of the outline drawn along one edge of an arc piece.
///
/// The outline follows the arc from `from` to `to` in the `clockwise` direction, on radii
/// offset from `base_radius` towards (`inward`) or away from the arc's center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SideLineFrame {
    pub center: Point,
    pub base_radius: f64,
    pub inward: bool,
    pub from: f64,
    pub to: f64,
    pub clockwise: bool,
}

impl SideLineFrame {
    pub(crate) fn build(&self) -> TrackCodeResult<Vec<ArcPrimitive>> {
        let cap = arc_length_to_angle(CAP_LENGTH, self.base_radius);
        let dir = if self.clockwise { 1.0 } else { -1.0 };
        let r = |offset: f64| {
            if self.inward {
                self.base_radius - offset
            } else {
                self.base_radius + offset
            }
        };
        let c = self.center;
        let (from, to, cw) = (self.from, self.to, self.clockwise);

        Ok(vec![
            ArcPrimitive::new(c, r(135.0), from, from + dir * cap, cw, 80.0)?,
            ArcPrimitive::new(c, r(135.0), to, to - dir * cap, !cw, 80.0)?,
            ArcPrimitive::new(c, r(70.0), from, to, cw, 23.0)?,
            ArcPrimitive::new(c, r(89.0), from + dir * cap, to - dir * cap, cw, 2.0)?,
            ArcPrimitive::new(c, r(105.0), from, to, cw, 23.0)?,
            ArcPrimitive::new(c, r(164.0), from, to, cw, 23.0)?,
            ArcPrimitive::new(c, r(183.0), from + dir * cap, to - dir * cap, cw, 2.0)?,
            ArcPrimitive::new(c, r(200.0), from, to, cw, 23.0)?,
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/arc.rs"]
mod tests;
