use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use rayon::prelude::*;

use crate::{
    foundation::{
        core::TrackPieceSpec,
        error::{TrackCodeError, TrackCodeResult},
    },
    piece::{meta::PieceMetadata, raster::RasterImage},
    render::{
        session::{RenderedPiece, rasterize},
        settings::{RenderSettings, RenderThreading},
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub pieces_total: u64,
    pub pieces_rendered: u64,
    pub pieces_shared: u64,
}

/// Render many pieces, in input order.
pub fn render_batch(
    specs: &[TrackPieceSpec],
    settings: &RenderSettings,
    threading: &RenderThreading,
) -> TrackCodeResult<Vec<RenderedPiece>> {
    render_batch_with_stats(specs, settings, threading).map(|(pieces, _)| pieces)
}

/// Like [`render_batch`], also reporting how much work repeated specs saved.
///
/// Each distinct piece is rasterized once; repeats share its `Arc<RasterImage>`.
pub fn render_batch_with_stats(
    specs: &[TrackPieceSpec],
    settings: &RenderSettings,
    threading: &RenderThreading,
) -> TrackCodeResult<(Vec<RenderedPiece>, BatchStats)> {
    let mut out = Vec::with_capacity(specs.len());
    let stats = render_batch_streaming(specs, settings, threading, |piece| {
        out.push(piece);
        Ok(())
    })?;
    Ok((out, stats))
}

/// Render many pieces chunk by chunk, handing each one to `sink` in input order.
///
/// At most `threading.chunk_size` new images are rasterized per chunk. Between chunks only
/// images that a later spec repeats stay cached, and each is released once its last repeat
/// has been handed out.
#[tracing::instrument(
    skip_all,
    fields(pieces = specs.len(), parallel = threading.parallel, chunk_size = threading.chunk_size)
)]
pub fn render_batch_streaming<F>(
    specs: &[TrackPieceSpec],
    settings: &RenderSettings,
    threading: &RenderThreading,
    mut sink: F,
) -> TrackCodeResult<BatchStats>
where
    F: FnMut(RenderedPiece) -> TrackCodeResult<()>,
{
    settings.validate()?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut last_use = HashMap::<TrackPieceSpec, usize>::with_capacity(specs.len());
    for (i, spec) in specs.iter().enumerate() {
        last_use.insert(*spec, i);
    }

    let mut live = HashMap::<TrackPieceSpec, Arc<RasterImage>>::new();
    let mut stats = BatchStats::default();
    let mut chunk_start = 0;
    while chunk_start < specs.len() {
        let chunk_end = (chunk_start + chunk_size).min(specs.len());
        let chunk = &specs[chunk_start..chunk_end];

        let mut seen = HashSet::<TrackPieceSpec>::with_capacity(chunk.len());
        let fresh: Vec<TrackPieceSpec> = chunk
            .iter()
            .copied()
            .filter(|spec| !live.contains_key(spec) && seen.insert(*spec))
            .collect();

        let rendered: Vec<TrackCodeResult<RasterImage>> = match &pool {
            Some(pool) => pool.install(|| {
                fresh
                    .par_iter()
                    .map(|spec| rasterize(spec, settings))
                    .collect()
            }),
            None => fresh.iter().map(|spec| rasterize(spec, settings)).collect(),
        };
        for (spec, item) in fresh.iter().zip(rendered) {
            live.insert(*spec, Arc::new(item?));
        }

        for (offset, spec) in chunk.iter().enumerate() {
            let image = live.get(spec).cloned().ok_or_else(|| {
                TrackCodeError::validation("internal error: piece missing from batch cache")
            })?;
            if last_use.get(spec) == Some(&(chunk_start + offset)) {
                live.remove(spec);
            }
            sink(RenderedPiece {
                meta: PieceMetadata::new(spec, settings.lanes),
                image,
            })?;
        }

        stats.pieces_total += chunk.len() as u64;
        stats.pieces_rendered += fresh.len() as u64;
        tracing::debug!(chunk_start, chunk_end, rendered = fresh.len(), "batch chunk done");
        chunk_start = chunk_end;
    }

    stats.pieces_shared = stats.pieces_total.saturating_sub(stats.pieces_rendered);
    tracing::debug!(?stats, "batch rendered");
    Ok(stats)
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    if chunk_size == 0 { 1 } else { chunk_size }
}

fn build_thread_pool(threads: Option<usize>) -> TrackCodeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(TrackCodeError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| TrackCodeError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
