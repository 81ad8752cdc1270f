//! trackcode renders the optical code printed on toy-car track pieces.
//!
//! A piece type (straight, curve, intersection, junction) and a track id in `1..=127` go in;
//! a square image comes out. The image carries guide lines for the car to follow plus bar and
//! arc codes from which its downward sensor reads the track id and a running location id.
//!
//! - [`render`] renders one piece with default settings.
//! - [`render_piece`] / [`render_tagged`] take [`RenderSettings`] and return placement
//!   metadata alongside the image.
//! - [`render_batch`] renders a whole set, optionally on a rayon pool.
//!
//! Geometry is laid out on a fixed 4292-unit canvas and only scaled at rasterization, so the
//! code pattern is identical at every output size.
#![forbid(unsafe_code)]

mod foundation;

/// Bit patterns and the slot-by-slot code sequencer.
pub mod encode;
/// Per-lane drawing primitives of every piece type.
pub mod geometry;
/// Placement metadata and finished images.
pub mod piece;
/// Renderers, surfaces, compositing and batch rendering.
pub mod render;

pub use crate::foundation::core::{
    ARC_END_RESERVE, CANVAS_SIZE, CAP_LENGTH, CODE_BITS, CODE_LENGTH, CURVE_RADIUS_OFFSET,
    DEFAULT_LANES, FIRST_SLOT_OFFSET, INTERSECTION_CODE_BITS, LANE_PITCH, PieceType, Point,
    ROW_PITCH, Rgba8Premul, Rotation, SLOT_SPACING, TrackId, TrackPieceSpec, Vec2,
};
pub use crate::foundation::error::{TrackCodeError, TrackCodeResult};

pub use crate::encode::bits::BitSequence;
pub use crate::encode::sequencer::{ArcSlotBudget, CodeSequencer, LocationCounter, SlotDecision};
pub use crate::geometry::layout::PieceLayout;
pub use crate::geometry::primitive::{ArcPrimitive, Primitive, RectPrimitive, Role};
pub use crate::piece::meta::PieceMetadata;
pub use crate::piece::raster::RasterImage;
pub use crate::render::backend::{PieceRenderer, renderer_for};
pub use crate::render::composite::Compositor;
pub use crate::render::cpu::CpuSurface;
pub use crate::render::pipeline::{
    BatchStats, render_batch, render_batch_streaming, render_batch_with_stats,
};
pub use crate::render::session::{RenderedPiece, render, render_piece, render_tagged};
pub use crate::render::settings::{RenderSettings, RenderThreading};
pub use crate::render::surface::{DrawCall, DrawSurface, RecordingSurface};
