use crate::{
    foundation::{
        core::{CANVAS_SIZE, CODE_BITS, CODE_LENGTH, ROW_PITCH},
        error::TrackCodeResult,
    },
    geometry::{layout::PieceLayout, primitive::RectPrimitive},
};

const SQUARE_WIDTH: f64 = 80.0;
const SQUARE_HEIGHT: f64 = 100.0;
const GUIDE_WIDTH: f64 = 10.0;
const THIN_BAR: f64 = 4.0;
const WIDE_BAR: f64 = 10.0;
const TRANSITION_BAR: f64 = 16.0;

/// One of the three code rows along a straight lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StraightRow {
    Top,
    Middle,
    Bottom,
}

impl StraightRow {
    pub const ALL: [StraightRow; 3] = [StraightRow::Top, StraightRow::Middle, StraightRow::Bottom];

    /// Location id of this row in lane 0; every lane adds three.
    pub fn location_base(self) -> u64 {
        match self {
            StraightRow::Top => 0,
            StraightRow::Middle => 1,
            StraightRow::Bottom => 2,
        }
    }

    /// Location id carried by this row of `lane`.
    pub fn location_id(self, lane: usize) -> u64 {
        self.location_base() + 3 * lane as u64
    }

    fn transition_ys(self) -> [f64; 2] {
        match self {
            StraightRow::Top => [132.0, 284.0],
            StraightRow::Middle => [
                CANVAS_SIZE - (15.0 * CODE_LENGTH + 436.0),
                15.0 * CODE_LENGTH + 360.0,
            ],
            StraightRow::Bottom => [CANVAS_SIZE - 202.0, CANVAS_SIZE - 354.0],
        }
    }

    fn code_top_y(self) -> f64 {
        match self {
            StraightRow::Top => 436.0,
            StraightRow::Middle => 1652.0,
            StraightRow::Bottom => 2868.0,
        }
    }

    fn square_y(self) -> Option<f64> {
        match self {
            StraightRow::Top => Some(0.0),
            StraightRow::Middle => None,
            StraightRow::Bottom => Some(CANVAS_SIZE - SQUARE_HEIGHT),
        }
    }
}

/// Horizontal placement of one bar style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarStyle {
    pub x: f64,
    pub width: f64,
}

/// A vertical column of seven code bars, wide for `1`, thin for `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarColumn {
    pub one: BarStyle,
    pub zero: BarStyle,
    pub top_y: f64,
}

impl BarColumn {
    /// Bar in row slot `slot` (0 at the top).
    pub fn bar(&self, slot: usize, bit: bool) -> TrackCodeResult<RectPrimitive> {
        let style = if bit { self.one } else { self.zero };
        RectPrimitive::new(
            style.x,
            self.top_y + ROW_PITCH * slot as f64,
            style.width,
            CODE_LENGTH,
        )
    }

    /// Bars for a seven-bit value: the most significant bit is drawn first, at the top.
    pub fn bars(&self, bits: &[bool]) -> TrackCodeResult<Vec<RectPrimitive>> {
        (0..CODE_BITS)
            .map(|slot| {
                let bit_index = CODE_BITS - 1 - slot;
                self.bar(slot, bits.get(bit_index).copied().unwrap_or(false))
            })
            .collect()
    }
}

/// Thin and thick bar pair announcing a code group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionMark {
    pub thin: RectPrimitive,
    pub thick: RectPrimitive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StraightRowGeometry {
    pub row: StraightRow,
    pub squares: Option<[RectPrimitive; 2]>,
    pub transitions: [TransitionMark; 2],
    pub track: BarColumn,
    pub location: BarColumn,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StraightLaneGeometry {
    pub lane: usize,
    pub start_x: f64,
    pub rows: [StraightRowGeometry; 3],
    pub follow_line: RectPrimitive,
}

/// Outline of a straight piece, shared by all lanes.
#[derive(Clone, Debug, PartialEq)]
pub struct StraightSideLines {
    pub lines: Vec<RectPrimitive>,
    pub squares: Vec<RectPrimitive>,
}

pub fn build_straight_lane(layout: &PieceLayout, lane: usize) -> TrackCodeResult<StraightLaneGeometry> {
    let x = layout.lane_start_x(lane);
    let rows = [
        build_row(StraightRow::Top, x)?,
        build_row(StraightRow::Middle, x)?,
        build_row(StraightRow::Bottom, x)?,
    ];
    Ok(StraightLaneGeometry {
        lane,
        start_x: x,
        rows,
        follow_line: RectPrimitive::new(
            x + 80.0,
            SQUARE_HEIGHT,
            GUIDE_WIDTH,
            CANVAS_SIZE - 2.0 * SQUARE_HEIGHT,
        )?,
    })
}

fn build_row(row: StraightRow, x: f64) -> TrackCodeResult<StraightRowGeometry> {
    let squares = match row.square_y() {
        Some(y) => Some([
            RectPrimitive::new(x, y, SQUARE_WIDTH, SQUARE_HEIGHT)?,
            RectPrimitive::new(x + 90.0, y, SQUARE_WIDTH, SQUARE_HEIGHT)?,
        ]),
        None => None,
    };
    let [t1, t2] = row.transition_ys();
    let mark = |y: f64| -> TrackCodeResult<TransitionMark> {
        Ok(TransitionMark {
            thin: RectPrimitive::new(x + 67.0, y, THIN_BAR, CODE_LENGTH)?,
            thick: RectPrimitive::new(x + 96.0, y, TRANSITION_BAR, CODE_LENGTH)?,
        })
    };
    Ok(StraightRowGeometry {
        row,
        squares,
        transitions: [mark(t1)?, mark(t2)?],
        track: BarColumn {
            one: BarStyle {
                x: x + 64.0,
                width: WIDE_BAR,
            },
            zero: BarStyle {
                x: x + 67.0,
                width: THIN_BAR,
            },
            top_y: row.code_top_y(),
        },
        location: BarColumn {
            one: BarStyle {
                x: x + 96.0,
                width: WIDE_BAR,
            },
            zero: BarStyle {
                x: x + 99.0,
                width: THIN_BAR,
            },
            top_y: row.code_top_y(),
        },
    })
}

pub fn build_straight_side_lines(layout: &PieceLayout) -> TrackCodeResult<StraightSideLines> {
    let first = layout.lane_start_x(0);
    let outer = layout.straight_outer_distance();

    // (inner edge x, width) pairs: right of lane 0, then left of the last lane.
    let line_pairs = [
        ((first + 154.0, 16.0), (outer, 16.0)),
        ((first + 185.0, 3.0), (outer - 18.0, 3.0)),
        ((first + 193.0, 22.0), (outer - 45.0, 22.0)),
        ((first + 238.0, 22.0), (outer - 90.0, 22.0)),
        ((first + 270.0, 3.0), (outer - 103.0, 3.0)),
        ((first + 278.0, 20.0), (outer - 128.0, 20.0)),
    ];
    let mut lines = Vec::with_capacity(line_pairs.len() * 2);
    for (right, left) in line_pairs {
        for (lx, w) in [right, left] {
            lines.push(RectPrimitive::new(
                lx,
                SQUARE_HEIGHT,
                w,
                CANVAS_SIZE - 2.0 * SQUARE_HEIGHT,
            )?);
        }
    }

    let square_xs = [
        (first + 180.0, 80.0),
        (outer - 90.0, 80.0),
        (first + 270.0, 28.0),
        (outer - 128.0, 28.0),
    ];
    let mut squares = Vec::with_capacity(square_xs.len() * 2);
    for y in [0.0, CANVAS_SIZE - SQUARE_HEIGHT] {
        for (sx, w) in square_xs {
            squares.push(RectPrimitive::new(sx, y, w, SQUARE_HEIGHT)?);
        }
    }

    Ok(StraightSideLines { lines, squares })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/straight.rs"]
mod tests;
