use std::{fmt, str::FromStr};

use crate::foundation::error::{TrackCodeError, TrackCodeResult};

pub use kurbo::{Point, Vec2};

/// Edge length of the square canvas every piece is laid out in.
pub const CANVAS_SIZE: f64 = 4292.0;
/// Default lane count of a piece.
pub const DEFAULT_LANES: u32 = 9;
/// Distance between two neighbouring lanes.
pub const LANE_PITCH: f64 = 90.0;
/// Length of one code bar (straight) or one code slot arc (curve).
pub const CODE_LENGTH: f64 = 76.0;
/// Vertical distance between two code rows of a straight piece.
pub const ROW_PITCH: f64 = 152.0;
/// Arc length of the caps at both ends of a curved lane.
pub const CAP_LENGTH: f64 = 100.0;
/// Slot pitch on an arc, in code lengths.
pub const SLOT_SPACING: f64 = 1.7;
/// Offset of the first slot from the start of an arc, in code lengths.
pub const FIRST_SLOT_OFFSET: f64 = 1.8;
/// Arc length kept free of codes at the ends of a curved lane.
pub const ARC_END_RESERVE: f64 = 190.0;
/// Radius added to the straight outer distance for curved pieces.
pub const CURVE_RADIUS_OFFSET: f64 = 85.0;
/// Bits carried by one code group.
pub const CODE_BITS: usize = 7;
/// Bits of the track id carried by each intersection side.
pub const INTERSECTION_CODE_BITS: usize = 4;

/// Kind of track piece.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Straight,
    Curve,
    Intersection,
    Junction,
}

impl PieceType {
    pub const ALL: [PieceType; 4] = [
        PieceType::Straight,
        PieceType::Curve,
        PieceType::Intersection,
        PieceType::Junction,
    ];

    /// Lowercase tag used by the editor (`"straight"`, `"curve"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            PieceType::Straight => "straight",
            PieceType::Curve => "curve",
            PieceType::Intersection => "intersection",
            PieceType::Junction => "junction",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PieceType {
    type Err = TrackCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        PieceType::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| TrackCodeError::piece_type(s))
    }
}

/// Track id in `1..=127`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct TrackId(u8);

impl TrackId {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 127;

    pub fn new(id: i64) -> TrackCodeResult<Self> {
        if id < i64::from(Self::MIN) || id > i64::from(Self::MAX) {
            return Err(TrackCodeError::InvalidTrackId(id));
        }
        Ok(Self(id as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for TrackId {
    type Error = TrackCodeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TrackId> for u8 {
    fn from(id: TrackId) -> Self {
        id.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What to render: one piece type with one track id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TrackPieceSpec {
    pub piece_type: PieceType,
    pub track_id: TrackId,
}

impl TrackPieceSpec {
    pub fn new(piece_type: PieceType, track_id: TrackId) -> Self {
        Self {
            piece_type,
            track_id,
        }
    }
}

/// Quarter-turn rotation, clockwise in screen space.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Rotation {
    #[default]
    #[serde(rename = "0deg")]
    Deg0,
    #[serde(rename = "90deg")]
    Deg90,
    #[serde(rename = "180deg")]
    Deg180,
    #[serde(rename = "270deg")]
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Next orientation when a placed piece is rotated in the editor.
    ///
    /// The editor turns pieces counter-clockwise: `0 -> 270 -> 180 -> 90 -> 0`.
    pub fn next_placement(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg0,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", self.degrees())
    }
}

impl FromStr for Rotation {
    type Err = TrackCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_suffix("deg").unwrap_or(s);
        match digits.trim().parse::<u32>() {
            Ok(0) => Ok(Rotation::Deg0),
            Ok(90) => Ok(Rotation::Deg90),
            Ok(180) => Ok(Rotation::Deg180),
            Ok(270) => Ok(Rotation::Deg270),
            _ => Err(TrackCodeError::validation(format!(
                "rotation must be one of 0deg, 90deg, 180deg, 270deg (got '{s}')"
            ))),
        }
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
