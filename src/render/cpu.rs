use crate::{
    foundation::{
        core::CANVAS_SIZE,
        error::{TrackCodeError, TrackCodeResult},
    },
    geometry::primitive::{ArcPrimitive, RectPrimitive, Role},
    render::surface::DrawSurface,
};

/// Flattening tolerance for arcs, in output pixels.
const ARC_TOLERANCE_PX: f64 = 0.1;

/// Premultiplied RGBA8 pixels straight out of the rasterizer.
#[derive(Clone, Debug)]
pub struct PremulPixels {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

/// Raster surface backed by `vello_cpu`.
///
/// Starts fully transparent. Draw calls arrive in canvas units and are scaled to `size_px`.
pub struct CpuSurface {
    size: u16,
    scale: f64,
    ctx: vello_cpu::RenderContext,
}

impl CpuSurface {
    pub fn new(size_px: u32) -> TrackCodeResult<Self> {
        let size = u16::try_from(size_px)
            .ok()
            .filter(|&s| s > 0)
            .ok_or_else(|| {
                TrackCodeError::surface(format!(
                    "output size must be in 1..={} pixels (got {size_px})",
                    u16::MAX
                ))
            })?;
        let scale = f64::from(size) / CANVAS_SIZE;

        let mut ctx = vello_cpu::RenderContext::new(size, size);
        ctx.set_transform(vello_cpu::kurbo::Affine::scale(scale));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 255));
        Ok(Self { size, scale, ctx })
    }

    pub fn size_px(&self) -> u32 {
        u32::from(self.size)
    }

    /// Rasterize everything drawn so far.
    pub fn finish(mut self) -> PremulPixels {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.size, self.size);
        self.ctx.render_to_pixmap(&mut pixmap);
        PremulPixels {
            width: u32::from(self.size),
            height: u32::from(self.size),
            data: pixmap.data_as_u8_slice().to_vec(),
        }
    }
}

impl DrawSurface for CpuSurface {
    fn stroke_arc(&mut self, _role: Role, arc: &ArcPrimitive) {
        let path = arc.to_path(ARC_TOLERANCE_PX / self.scale);
        let c = arc.color;
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(arc.stroke_width)
                .with_caps(vello_cpu::kurbo::Cap::Butt),
        );
        self.ctx.stroke_path(&bezpath_to_cpu(&path));
    }

    fn fill_rect(&mut self, _role: Role, rect: &RectPrimitive) {
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 255));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x,
            rect.y,
            rect.x + rect.width,
            rect.y + rect.height,
        ));
    }
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
