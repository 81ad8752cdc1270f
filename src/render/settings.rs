use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::{
        core::{CANVAS_SIZE, DEFAULT_LANES, Rotation},
        error::{TrackCodeError, TrackCodeResult},
    },
    geometry::{junction::JunctionSplit, layout::PieceLayout},
};

/// How pieces are laid out and rasterized.
///
/// Every field has a default, so a settings file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Lanes per piece (per whole junction, split between its branches).
    pub lanes: u32,
    /// Edge length of the output image in pixels.
    pub size_px: u32,
    /// Lanes on a junction's left branch; `None` puts `floor(lanes / 2)` there.
    pub junction_left_lanes: Option<u32>,
    /// Rotation applied to every finished image.
    pub output_rotation: Rotation,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            lanes: DEFAULT_LANES,
            size_px: CANVAS_SIZE as u32,
            junction_left_lanes: None,
            output_rotation: Rotation::Deg90,
        }
    }
}

impl RenderSettings {
    /// Parse settings from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TrackCodeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TrackCodeError::serde(format!("parse render settings JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> TrackCodeResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| TrackCodeError::serde(format!("parse render settings JSON: {e}")))
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> TrackCodeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TrackCodeError::validation(format!(
                "open render settings '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Apply `TRACKCODE_LANES` and `TRACKCODE_SIZE_PX` when they hold a positive integer.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(lanes) = env_u32("TRACKCODE_LANES") {
            self.lanes = lanes;
        }
        if let Some(size) = env_u32("TRACKCODE_SIZE_PX") {
            self.size_px = size;
        }
        self
    }

    pub fn with_size_px(mut self, size_px: u32) -> Self {
        self.size_px = size_px;
        self
    }

    /// Check everything a render would reject, without rendering.
    pub fn validate(&self) -> TrackCodeResult<()> {
        let layout = PieceLayout::new(self.lanes)?;
        JunctionSplit::new(&layout, self.junction_left_lanes)?;
        if self.size_px == 0 || self.size_px > u32::from(u16::MAX) {
            return Err(TrackCodeError::surface(format!(
                "size_px must be in 1..={} (got {})",
                u16::MAX,
                self.size_px
            )));
        }
        Ok(())
    }
}

fn env_u32(key: &str) -> Option<u32> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
}

/// Threading and chunking for batch rendering.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    pub parallel: bool,
    /// Most new images rasterized (and held) at once; `0` behaves like `1`.
    pub chunk_size: usize,
    /// Worker threads for the parallel pool; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
