pub mod meta;
pub mod raster;
