/// Shared lane geometry of curve and junction pieces.
pub mod arc;
pub mod curve;
pub mod intersection;
pub mod junction;
pub mod layout;
pub mod primitive;
pub mod straight;
