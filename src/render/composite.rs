use crate::{
    foundation::{
        core::{Rgba8Premul, Rotation},
        error::{TrackCodeError, TrackCodeResult},
        math::mul_div255_u8,
    },
    piece::raster::RasterImage,
    render::cpu::PremulPixels,
};

/// Premultiplied "destination over": keeps `dst` where it is opaque and lets `bg` show
/// through the rest.
pub fn under(dst: [u8; 4], bg: [u8; 4]) -> [u8; 4] {
    let inv = 255u16 - u16::from(dst[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = dst[i].saturating_add(mul_div255_u8(u16::from(bg[i]), inv));
    }
    out
}

/// Turns a drawn layer into the finished, opaque image.
#[derive(Clone, Copy, Debug)]
pub struct Compositor {
    background: Rgba8Premul,
    rotation: Rotation,
}

impl Compositor {
    pub fn new(rotation: Rotation) -> Self {
        Self {
            background: Rgba8Premul::WHITE,
            rotation,
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Fill the background under the marks, then rotate.
    pub fn finalize(&self, layer: PremulPixels) -> TrackCodeResult<RasterImage> {
        let PremulPixels {
            width,
            height,
            mut data,
        } = layer;
        if data.len() != width as usize * height as usize * 4 {
            return Err(TrackCodeError::surface(format!(
                "layer holds {} bytes, expected {width}x{height} rgba8",
                data.len()
            )));
        }

        let bg = self.background.to_array();
        for px in data.chunks_exact_mut(4) {
            let out = under([px[0], px[1], px[2], px[3]], bg);
            px.copy_from_slice(&out);
        }

        // Opaque now, so premultiplied and straight alpha agree.
        let img = image::RgbaImage::from_raw(width, height, data)
            .ok_or_else(|| TrackCodeError::surface("layer size does not match its buffer"))?;
        let img = match self.rotation {
            Rotation::Deg0 => img,
            Rotation::Deg90 => image::imageops::rotate90(&img),
            Rotation::Deg180 => image::imageops::rotate180(&img),
            Rotation::Deg270 => image::imageops::rotate270(&img),
        };
        Ok(RasterImage::from_rgba_image(img))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
