use crate::geometry::primitive::{ArcPrimitive, Primitive, RectPrimitive, Role};

/// Target of a piece renderer's draw calls.
///
/// Renderers only ever stroke arcs and fill rectangles, always in opaque black and in canvas
/// units. Implementations decide how (and whether) to rasterize.
pub trait DrawSurface {
    fn stroke_arc(&mut self, role: Role, arc: &ArcPrimitive);
    fn fill_rect(&mut self, role: Role, rect: &RectPrimitive);
}

/// One recorded draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    pub role: Role,
    pub primitive: Primitive,
}

/// Surface that keeps every draw call in order instead of rasterizing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &DrawCall> + '_ {
        self.calls.iter().filter(move |c| c.role == role)
    }

    /// Rectangles drawn with `role`, in draw order.
    pub fn rects(&self, role: Role) -> Vec<RectPrimitive> {
        self.with_role(role)
            .filter_map(|c| match c.primitive {
                Primitive::Rect(r) => Some(r),
                Primitive::Arc(_) => None,
            })
            .collect()
    }

    /// Arcs drawn with `role`, in draw order.
    pub fn arcs(&self, role: Role) -> Vec<ArcPrimitive> {
        self.with_role(role)
            .filter_map(|c| match c.primitive {
                Primitive::Arc(a) => Some(a),
                Primitive::Rect(_) => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn stroke_arc(&mut self, role: Role, arc: &ArcPrimitive) {
        self.calls.push(DrawCall {
            role,
            primitive: Primitive::Arc(*arc),
        });
    }

    fn fill_rect(&mut self, role: Role, rect: &RectPrimitive) {
        self.calls.push(DrawCall {
            role,
            primitive: Primitive::Rect(*rect),
        });
    }
}
