//! Sonification Module: Hearing the Logistic Map
//!
//! Each value v of a logistic trajectory becomes a short sine tone at
//!
//!   f = 440 + 880·v  Hz
//!
//! so the invariant interval [0, 1] spans A4 (440 Hz) to E6 (1320 Hz).
//! Tones are concatenated after a leading silence, each one overlapping
//! the tail of the buffer with a short linear crossfade.
//!
//! ## Buffer Layout
//!
//! ```text
//!   | silence | tone₀ | tone₁ | ... | tone_{n−1} |
//!             ^xf     ^xf     ^xf
//! ```
//!
//! Length = silence + n·(tone − crossfade) samples when the crossfade fits
//! in both segments. Playback on a device is left to the caller.

mod synth;

pub use synth::{Sonifier, ToneConfig, frequency_for, BASE_FREQUENCY_HZ, FREQUENCY_SPAN_HZ};
