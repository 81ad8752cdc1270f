use crate::{
    encode::bits::BitSequence,
    foundation::{core::PieceType, error::TrackCodeResult},
    geometry::{junction::JunctionSplit, layout::PieceLayout},
    render::{
        curve::CurveRenderer, intersection::IntersectionRenderer, junction::JunctionRenderer,
        settings::RenderSettings, straight::StraightRenderer, surface::DrawSurface,
    },
};

/// Draws one piece type's code pattern onto a [`DrawSurface`].
///
/// A renderer owns its validated layout, so `draw` only fails if geometry turns out to be
/// degenerate for a particular lane.
pub trait PieceRenderer: Send + Sync {
    fn piece_type(&self) -> PieceType;

    /// Issue every draw call of the piece, in painting order.
    fn draw(&self, track: &BitSequence, surface: &mut dyn DrawSurface) -> TrackCodeResult<()>;
}

/// Create the renderer for `piece_type` under `settings`.
pub fn renderer_for(
    piece_type: PieceType,
    settings: &RenderSettings,
) -> TrackCodeResult<Box<dyn PieceRenderer>> {
    let layout = PieceLayout::new(settings.lanes)?;
    Ok(match piece_type {
        PieceType::Straight => Box::new(StraightRenderer::new(layout)),
        PieceType::Curve => Box::new(CurveRenderer::new(layout)),
        PieceType::Intersection => Box::new(IntersectionRenderer::new(layout)),
        PieceType::Junction => Box::new(JunctionRenderer::new(
            layout,
            JunctionSplit::new(&layout, settings.junction_left_lanes)?,
        )),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
