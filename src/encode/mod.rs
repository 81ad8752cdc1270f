pub mod bits;
pub mod sequencer;
