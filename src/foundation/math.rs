use std::f64::consts::{PI, TAU};

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// Signed sweep of an HTML-canvas style arc from `start` to `end`.
///
/// Positive sweeps run clockwise on screen (y-down). A requested span of a full turn or more
/// draws the whole circle.
pub(crate) fn canvas_arc_sweep(start: f64, end: f64, clockwise: bool) -> f64 {
    if clockwise {
        if end - start >= TAU {
            return TAU;
        }
        (end - start).rem_euclid(TAU)
    } else {
        if start - end >= TAU {
            return -TAU;
        }
        -(start - end).rem_euclid(TAU)
    }
}

/// Angle subtended by `length` units of arc at `radius`.
///
/// Computed through the quarter circumference so slot angles round the same way on every piece.
pub(crate) fn arc_length_to_angle(length: f64, radius: f64) -> f64 {
    let quarter_circumference = radius * PI / 2.0;
    (length / quarter_circumference) * PI / 2.0
}
