use kurbo::Shape as _;

use crate::foundation::{
    core::{Point, Rgba8Premul, Vec2},
    error::{TrackCodeError, TrackCodeResult},
    math::canvas_arc_sweep,
};

/// What a drawn element means to the sensor (or to the person looking at the piece).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Boundary squares and end caps of a lane.
    StartCap,
    /// The line the vehicle follows.
    GuideLine,
    /// Group start marker.
    Transition,
    /// Track id bit.
    Track,
    /// Location id bit.
    Location,
    /// Piece outline.
    SideLine,
    /// Intersection side identification code.
    SideCode,
    /// Bars joining opposite intersection sides.
    Connection,
}

/// Stroked circular arc in canvas units.
///
/// Angles follow HTML canvas conventions: radians, measured in the y-down frame, `clockwise`
/// arcs run towards increasing angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPrimitive {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub clockwise: bool,
    pub stroke_width: f64,
    pub color: Rgba8Premul,
}

impl ArcPrimitive {
    pub fn new(
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
        stroke_width: f64,
    ) -> TrackCodeResult<Self> {
        let all_finite = [
            center.x,
            center.y,
            radius,
            start_angle,
            end_angle,
            stroke_width,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(TrackCodeError::layout(format!(
                "arc has a non-finite value (center {center:?}, radius {radius}, angles {start_angle}..{end_angle})"
            )));
        }
        if radius <= 0.0 {
            return Err(TrackCodeError::layout(format!(
                "arc radius must be > 0 (got {radius})"
            )));
        }
        if stroke_width <= 0.0 {
            return Err(TrackCodeError::layout(format!(
                "arc stroke width must be > 0 (got {stroke_width})"
            )));
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
            stroke_width,
            color: Rgba8Premul::BLACK,
        })
    }

    /// Signed sweep in radians, positive when clockwise.
    pub fn sweep(&self) -> f64 {
        canvas_arc_sweep(self.start_angle, self.end_angle, self.clockwise)
    }

    pub fn to_kurbo(&self) -> kurbo::Arc {
        kurbo::Arc {
            center: self.center,
            radii: Vec2::new(self.radius, self.radius),
            start_angle: self.start_angle,
            sweep_angle: self.sweep(),
            x_rotation: 0.0,
        }
    }

    pub fn to_path(&self, tolerance: f64) -> kurbo::BezPath {
        self.to_kurbo().to_path(tolerance)
    }
}

/// Filled axis-aligned rectangle in canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectPrimitive {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> TrackCodeResult<Self> {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return Err(TrackCodeError::layout(format!(
                "rect has a non-finite value ({x}, {y}, {width}x{height})"
            )));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(TrackCodeError::layout(format!(
                "rect must have positive size (got {width}x{height} at {x},{y})"
            )));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    pub fn translated(&self, offset: Vec2) -> TrackCodeResult<Self> {
        Self::new(
            self.x + offset.x,
            self.y + offset.y,
            self.width,
            self.height,
        )
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// One drawable element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Arc(ArcPrimitive),
    Rect(RectPrimitive),
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/primitive.rs"]
mod tests;
