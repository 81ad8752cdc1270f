use crate::foundation::core::{CODE_BITS, TrackId};

/// Fixed-width bit pattern of an identifier, least significant bit first.
///
/// Values wider than seven bits keep only their low seven bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitSequence([bool; CODE_BITS]);

impl BitSequence {
    pub fn encode(value: u64) -> Self {
        let mut bits = [false; CODE_BITS];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = (value >> i) & 1 == 1;
        }
        Self(bits)
    }

    pub fn from_track_id(id: TrackId) -> Self {
        Self::encode(u64::from(id.get()))
    }

    /// Encode a location counter through its two's-complement low bits.
    ///
    /// A counter that has not been advanced yet (`-1`) reads as all ones.
    pub fn from_location(counter: i64) -> Self {
        Self::encode(counter as u64)
    }

    /// Bit `index` (0 = least significant). Indices past the width read as `false`.
    pub fn bit(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn value(&self) -> u8 {
        self.0
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &b)| acc | (u8::from(b) << i))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/bits.rs"]
mod tests;
