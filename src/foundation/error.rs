/// Convenience result type used across trackcode.
pub type TrackCodeResult<T> = Result<T, TrackCodeError>;

/// Error taxonomy for the renderer.
///
/// Every variant is fatal to the render call that produced it. Rendering is a pure function of
/// its inputs, so none of them is worth retrying.
#[derive(thiserror::Error, Debug)]
pub enum TrackCodeError {
    /// Unrecognized piece type tag.
    #[error("invalid piece type: {0}")]
    InvalidPieceType(String),

    /// Track id outside `[1,127]`.
    #[error("invalid track id: {0} (expected 1..=127)")]
    InvalidTrackId(i64),

    /// Geometry would produce a non-positive radius, a degenerate rectangle or a non-finite
    /// coordinate.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// The raster backing store could not be created.
    #[error("surface allocation failed: {0}")]
    SurfaceAllocation(String),

    /// Invalid settings that are not part of the geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrackCodeError {
    /// Build a [`TrackCodeError::InvalidPieceType`] value.
    pub fn piece_type(tag: impl Into<String>) -> Self {
        Self::InvalidPieceType(tag.into())
    }

    /// Build a [`TrackCodeError::InvalidLayout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::InvalidLayout(msg.into())
    }

    /// Build a [`TrackCodeError::SurfaceAllocation`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::SurfaceAllocation(msg.into())
    }

    /// Build a [`TrackCodeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TrackCodeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
