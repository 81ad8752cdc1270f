use std::sync::Arc;

use crate::{
    encode::bits::BitSequence,
    foundation::{
        core::{PieceType, TrackId, TrackPieceSpec},
        error::TrackCodeResult,
    },
    piece::{meta::PieceMetadata, raster::RasterImage},
    render::{
        backend::renderer_for, composite::Compositor, cpu::CpuSurface, settings::RenderSettings,
    },
};

/// A finished piece: placement metadata plus its image.
#[derive(Clone, Debug)]
pub struct RenderedPiece {
    pub meta: PieceMetadata,
    pub image: Arc<RasterImage>,
}

/// Render one piece with default settings.
pub fn render(piece_type: PieceType, track_id: TrackId) -> TrackCodeResult<RasterImage> {
    let piece = render_piece(
        &TrackPieceSpec::new(piece_type, track_id),
        &RenderSettings::default(),
    )?;
    Ok(Arc::unwrap_or_clone(piece.image))
}

#[tracing::instrument(skip(settings), fields(piece = %spec.piece_type, id = %spec.track_id))]
pub fn render_piece(
    spec: &TrackPieceSpec,
    settings: &RenderSettings,
) -> TrackCodeResult<RenderedPiece> {
    let image = rasterize(spec, settings)?;
    Ok(RenderedPiece {
        meta: PieceMetadata::new(spec, settings.lanes),
        image: Arc::new(image),
    })
}

/// Render from untyped inputs, e.g. a piece tag and id taken from a board file.
pub fn render_tagged(
    tag: &str,
    track_id: i64,
    settings: &RenderSettings,
) -> TrackCodeResult<RenderedPiece> {
    let spec = TrackPieceSpec::new(tag.parse()?, TrackId::new(track_id)?);
    render_piece(&spec, settings)
}

pub(crate) fn rasterize(
    spec: &TrackPieceSpec,
    settings: &RenderSettings,
) -> TrackCodeResult<RasterImage> {
    settings.validate()?;
    let renderer = renderer_for(spec.piece_type, settings)?;
    let track = BitSequence::from_track_id(spec.track_id);

    let mut surface = CpuSurface::new(settings.size_px)?;
    renderer.draw(&track, &mut surface)?;
    let layer = surface.finish();

    let image = Compositor::new(settings.output_rotation).finalize(layer)?;
    tracing::debug!(
        width = image.width,
        height = image.height,
        rotation = %settings.output_rotation,
        "piece rendered"
    );
    Ok(image)
}
