use crate::{
    encode::bits::BitSequence,
    foundation::{
        core::{ARC_END_RESERVE, CODE_LENGTH, SLOT_SPACING},
        math::arc_length_to_angle,
    },
};

/// Slots per code group: one transition marker followed by seven bit slots.
pub const GROUP_LEN: usize = 8;

/// Running location id of one piece (or of one intersection side).
///
/// Starts at `-1` and only moves forward, once per transition marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocationCounter(i64);

impl LocationCounter {
    pub fn new() -> Self {
        Self(-1)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    fn advance(&mut self) {
        self.0 += 1;
    }
}

impl Default for LocationCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// What one code slot carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotDecision {
    /// Group start marker. Slots past the numbered budget are also drawn as markers.
    Transition,
    /// One location-id bit and one track-id bit, drawn on separate rings.
    Bits { location: bool, track: bool },
}

/// How many code slots fit on one arc lane, and how many of them carry numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArcSlotBudget {
    pub slot_count: usize,
    pub numbered_slots: usize,
}

impl ArcSlotBudget {
    /// Budget of a lane with the given radius.
    ///
    /// `numbered_slots` is the largest multiple of [`GROUP_LEN`] not above the fitting slot
    /// count, so every numbered group is complete.
    pub fn for_radius(radius: f64) -> Self {
        let quarter_circumference = radius * std::f64::consts::PI / 2.0;
        let fitting = (quarter_circumference - ARC_END_RESERVE) / (CODE_LENGTH * SLOT_SPACING);
        if !fitting.is_finite() || fitting <= 0.0 {
            return Self {
                slot_count: 0,
                numbered_slots: 0,
            };
        }
        let groups = (fitting / GROUP_LEN as f64).floor();
        Self {
            slot_count: fitting.floor() as usize,
            numbered_slots: groups as usize * GROUP_LEN,
        }
    }

    /// Angular width of one slot at `radius`.
    pub fn slot_angle(radius: f64) -> f64 {
        arc_length_to_angle(CODE_LENGTH, radius)
    }
}

/// Decides, slot by slot, what a lane's code carries.
#[derive(Clone, Copy, Debug)]
pub struct CodeSequencer {
    track: BitSequence,
}

impl CodeSequencer {
    pub fn new(track: BitSequence) -> Self {
        Self { track }
    }

    pub fn track_bits(&self) -> &BitSequence {
        &self.track
    }

    /// Walk one lane. The counter is shared by every lane of the piece and keeps counting
    /// across calls.
    pub fn sequence_lane(
        &self,
        budget: ArcSlotBudget,
        counter: &mut LocationCounter,
    ) -> Vec<SlotDecision> {
        let mut remaining = budget.numbered_slots;
        let mut out = Vec::with_capacity(budget.slot_count);
        for j in 0..budget.slot_count {
            let decision = if remaining > 0 {
                let pos = j % GROUP_LEN;
                if pos == 0 {
                    counter.advance();
                    SlotDecision::Transition
                } else {
                    let location = BitSequence::from_location(counter.value());
                    SlotDecision::Bits {
                        location: location.bit(pos - 1),
                        track: self.track.bit(pos - 1),
                    }
                }
            } else {
                SlotDecision::Transition
            };
            out.push(decision);
            remaining = remaining.saturating_sub(1);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sequencer.rs"]
mod tests;
