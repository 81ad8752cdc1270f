use crate::{
    foundation::{
        core::{CANVAS_SIZE, CODE_LENGTH, Point, ROW_PITCH, Vec2},
        error::TrackCodeResult,
    },
    geometry::{layout::PieceLayout, primitive::RectPrimitive},
};

const STANDARD_OFFSETS: [f64; 5] = [55.0, 69.0, 83.0, 97.0, 111.0];
const THIN_BAR: f64 = 4.0;
const WIDE_BAR: f64 = 10.0;
const GUIDE_LENGTH: f64 = 640.0;
const EDGE: f64 = 100.0;
/// Where the first code bar of a side starts, measured along the lane.
const CODE_NEAR: f64 = 132.0;
const CODE_FAR: f64 = CANVAS_SIZE - 202.0;

/// One entry edge of an intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntersectionSide {
    Bottom,
    Top,
    Left,
    Right,
}

impl IntersectionSide {
    /// Drawing order.
    pub const ALL: [IntersectionSide; 4] = [
        IntersectionSide::Bottom,
        IntersectionSide::Top,
        IntersectionSide::Left,
        IntersectionSide::Right,
    ];

    /// Offset between consecutive code bars. Codes start at the canvas edge and move towards
    /// the center of the piece.
    pub fn step(self) -> Vec2 {
        match self {
            IntersectionSide::Bottom => Vec2::new(0.0, -ROW_PITCH),
            IntersectionSide::Top => Vec2::new(0.0, ROW_PITCH),
            IntersectionSide::Left => Vec2::new(ROW_PITCH, 0.0),
            IntersectionSide::Right => Vec2::new(-ROW_PITCH, 0.0),
        }
    }

    /// Lanes enter top and bottom vertically, left and right horizontally.
    pub fn is_vertical(self) -> bool {
        matches!(self, IntersectionSide::Bottom | IntersectionSide::Top)
    }

    /// Rectangle `across` wide (perpendicular to the lane) and `along` long (parallel to it).
    fn oriented(self, a: f64, b: f64, across: f64, along: f64) -> TrackCodeResult<RectPrimitive> {
        // (a, b) is (x, y) for vertical sides and (y, x) otherwise.
        if self.is_vertical() {
            RectPrimitive::new(a, b, across, along)
        } else {
            RectPrimitive::new(b, a, along, across)
        }
    }
}

/// A row of five thin bars identifying the piece as an intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubCode {
    pub origin: Point,
    pub main_width: f64,
    pub side_width: f64,
    pub offsets: [f64; 5],
    pub vertical: bool,
}

impl SubCode {
    /// Bars of this row; the center bar uses `main_width`.
    pub fn bars(&self) -> TrackCodeResult<Vec<RectPrimitive>> {
        self.offsets
            .iter()
            .enumerate()
            .map(|(index, diff)| {
                let width = if index == 2 {
                    self.main_width
                } else {
                    self.side_width
                };
                if self.vertical {
                    RectPrimitive::new(self.origin.x + diff, self.origin.y, width, CODE_LENGTH)
                } else {
                    RectPrimitive::new(self.origin.x, self.origin.y + diff, CODE_LENGTH, width)
                }
            })
            .collect()
    }
}

/// Three sub-code rows plus the guide segments linking them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SideCode {
    pub inner: SubCode,
    pub middle: SubCode,
    pub outer: SubCode,
    pub links: [RectPrimitive; 2],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSideGeometry {
    pub side: IntersectionSide,
    pub squares: [RectPrimitive; 2],
    pub guide: RectPrimitive,
    pub track_one: RectPrimitive,
    pub track_zero: RectPrimitive,
    pub location: RectPrimitive,
    pub side_code: SideCode,
}

impl IntersectionSideGeometry {
    /// Track bar in code slot `slot`, counted from the canvas edge.
    pub fn track_bar(&self, slot: usize, bit: bool) -> TrackCodeResult<RectPrimitive> {
        let base = if bit { self.track_one } else { self.track_zero };
        base.translated(self.side.step() * slot as f64)
    }

    pub fn location_bar(&self, slot: usize) -> TrackCodeResult<RectPrimitive> {
        self.location.translated(self.side.step() * slot as f64)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionLaneGeometry {
    pub lane: usize,
    pub start: f64,
    pub sides: [IntersectionSideGeometry; 4],
    /// Left-to-right bar, then bottom-to-top bar.
    pub connections: [RectPrimitive; 2],
}

pub fn build_intersection_lane(
    layout: &PieceLayout,
    lane: usize,
) -> TrackCodeResult<IntersectionLaneGeometry> {
    let sv = layout.lane_start_x(lane);
    let sides = [
        build_side(IntersectionSide::Bottom, sv)?,
        build_side(IntersectionSide::Top, sv)?,
        build_side(IntersectionSide::Left, sv)?,
        build_side(IntersectionSide::Right, sv)?,
    ];
    let span = CANVAS_SIZE - 2.0 * 1120.0;
    Ok(IntersectionLaneGeometry {
        lane,
        start: sv,
        sides,
        connections: [
            RectPrimitive::new(1120.0, sv + 82.0, span, 6.0)?,
            RectPrimitive::new(sv + 79.0, 1120.0, 12.0, span)?,
        ],
    })
}

struct SideParams {
    /// Top and left sides start at coordinate 0; bottom and right are mirrored.
    near_edge: bool,
    track_one_dx: f64,
    track_zero_dx: f64,
    location_dx: f64,
    middle_main: f64,
    middle_side: f64,
    middle_offsets: [f64; 5],
}

fn side_params(side: IntersectionSide) -> SideParams {
    match side {
        IntersectionSide::Bottom => SideParams {
            near_edge: false,
            track_one_dx: 96.0,
            track_zero_dx: 99.0,
            location_dx: 67.0,
            middle_main: 14.0,
            middle_side: 12.0,
            middle_offsets: [42.0, 60.0, 78.0, 98.0, 116.0],
        },
        IntersectionSide::Top => SideParams {
            near_edge: true,
            track_one_dx: 64.0,
            track_zero_dx: 67.0,
            location_dx: 99.0,
            middle_main: 14.0,
            middle_side: 4.0,
            middle_offsets: [50.0, 64.0, 78.0, 100.0, 114.0],
        },
        IntersectionSide::Left => SideParams {
            near_edge: true,
            track_one_dx: 96.0,
            track_zero_dx: 99.0,
            location_dx: 67.0,
            middle_main: THIN_BAR,
            middle_side: THIN_BAR,
            middle_offsets: STANDARD_OFFSETS,
        },
        IntersectionSide::Right => SideParams {
            near_edge: false,
            track_one_dx: 64.0,
            track_zero_dx: 67.0,
            location_dx: 99.0,
            middle_main: THIN_BAR,
            middle_side: 12.0,
            middle_offsets: [46.0, 64.0, 83.0, 92.0, 110.0],
        },
    }
}

fn build_side(side: IntersectionSide, sv: f64) -> TrackCodeResult<IntersectionSideGeometry> {
    let p = side_params(side);
    // Position along the lane of an element starting `from_edge` units in and `len` long.
    let along = |from_edge: f64, len: f64| {
        if p.near_edge {
            from_edge
        } else {
            CANVAS_SIZE - from_edge - len
        }
    };

    let squares = [
        side.oriented(sv, along(0.0, EDGE), 80.0, EDGE)?,
        side.oriented(sv + 90.0, along(0.0, EDGE), 80.0, EDGE)?,
    ];
    let guide = side.oriented(sv + 80.0, along(EDGE, GUIDE_LENGTH), WIDE_BAR, GUIDE_LENGTH)?;
    let code_at = if p.near_edge { CODE_NEAR } else { CODE_FAR };
    let track_one = side.oriented(sv + p.track_one_dx, code_at, WIDE_BAR, CODE_LENGTH)?;
    let track_zero = side.oriented(sv + p.track_zero_dx, code_at, THIN_BAR, CODE_LENGTH)?;
    let location = side.oriented(sv + p.location_dx, code_at, THIN_BAR, CODE_LENGTH)?;

    let sub_code = |from_edge: f64, main: f64, side_w: f64, offsets: [f64; 5]| {
        let a = along(from_edge, CODE_LENGTH);
        let origin = if side.is_vertical() {
            Point::new(sv, a)
        } else {
            Point::new(a, sv)
        };
        SubCode {
            origin,
            main_width: main,
            side_width: side_w,
            offsets,
            vertical: side.is_vertical(),
        }
    };
    let side_code = SideCode {
        outer: sub_code(740.0, THIN_BAR, THIN_BAR, STANDARD_OFFSETS),
        middle: sub_code(892.0, p.middle_main, p.middle_side, p.middle_offsets),
        inner: sub_code(1044.0, THIN_BAR, THIN_BAR, STANDARD_OFFSETS),
        links: [
            side.oriented(sv + 80.0, along(816.0, CODE_LENGTH), WIDE_BAR, CODE_LENGTH)?,
            side.oriented(sv + 80.0, along(968.0, CODE_LENGTH), WIDE_BAR, CODE_LENGTH)?,
        ],
    };

    Ok(IntersectionSideGeometry {
        side,
        squares,
        guide,
        track_one,
        track_zero,
        location,
        side_code,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/intersection.rs"]
mod tests;
