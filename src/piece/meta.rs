use crate::foundation::core::{PieceType, Rotation, TrackId, TrackPieceSpec};

/// What the board editor needs to place a rendered piece and match live readings against it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PieceMetadata {
    pub piece_type: PieceType,
    pub track_id: TrackId,
    pub lanes: u32,
    /// Orientation on the board; freshly placed pieces face 270deg.
    pub placement_rotation: Rotation,
}

impl PieceMetadata {
    pub fn new(spec: &TrackPieceSpec, lanes: u32) -> Self {
        Self {
            piece_type: spec.piece_type,
            track_id: spec.track_id,
            lanes,
            placement_rotation: Rotation::Deg270,
        }
    }

    pub fn spec(&self) -> TrackPieceSpec {
        TrackPieceSpec::new(self.piece_type, self.track_id)
    }

    /// Element id the telemetry side matches `trackPieceId` against.
    pub fn element_id(&self) -> String {
        format!("trackId{}", self.track_id)
    }

    pub fn alt_text(&self) -> String {
        format!("{} {}", self.piece_type, self.track_id)
    }

    /// File name used when a board is exported as PNGs.
    pub fn png_file_name(&self) -> String {
        format!("{}_trackId{}.png", self.piece_type, self.track_id)
    }

    /// Rotate once the way the editor's rotate button does.
    pub fn rotated(mut self) -> Self {
        self.placement_rotation = self.placement_rotation.next_placement();
        self
    }
}
