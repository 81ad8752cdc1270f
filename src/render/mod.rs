/// Piece renderer trait and renderer selection.
pub mod backend;
pub mod composite;
/// `vello_cpu` raster surface.
pub mod cpu;
pub mod curve;
pub mod intersection;
pub mod junction;
pub mod pipeline;
pub mod session;
pub mod settings;
pub mod straight;
pub mod surface;
