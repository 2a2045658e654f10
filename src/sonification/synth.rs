//! Tone synthesis for logistic trajectories

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::systems::Trajectory;

/// Frequency of a sample value of 0 (A4)
pub const BASE_FREQUENCY_HZ: f64 = 440.0;

/// Frequency added per unit of sample value
pub const FREQUENCY_SPAN_HZ: f64 = 880.0;

/// Tone frequency for one trajectory value
#[inline]
pub fn frequency_for(value: f64) -> f64 {
    BASE_FREQUENCY_HZ + value * FREQUENCY_SPAN_HZ
}

/// Layout of the rendered buffer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Duration of each tone
    pub tone_ms: u32,
    /// Overlap between consecutive segments
    pub crossfade_ms: u32,
    /// Silence before the first tone
    pub lead_silence_ms: u32,
    /// Peak amplitude of each tone, in [0, 1]
    pub amplitude: f32,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            tone_ms: 10,
            crossfade_ms: 1,
            lead_silence_ms: 1000,
            amplitude: 0.5,
        }
    }
}

impl ToneConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(Error::Config("sample_rate must be positive".into()));
        }
        if self.tone_ms == 0 {
            return Err(Error::Config("tone_ms must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.amplitude) {
            return Err(Error::Config(format!(
                "amplitude must lie in [0, 1], got {}",
                self.amplitude
            )));
        }
        Ok(())
    }

    /// Number of samples covering `ms` milliseconds
    pub fn samples_for(&self, ms: u32) -> usize {
        (u64::from(self.sample_rate) * u64::from(ms) / 1000) as usize
    }
}

/// Renders logistic trajectories into mono PCM buffers
#[derive(Debug, Clone)]
pub struct Sonifier {
    config: ToneConfig,
    tone_len: usize,
    crossfade_len: usize,
    silence_len: usize,
}

impl Sonifier {
    pub fn new(config: ToneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ToneConfig) -> Self {
        Self {
            tone_len: config.samples_for(config.tone_ms),
            crossfade_len: config.samples_for(config.crossfade_ms),
            silence_len: config.samples_for(config.lead_silence_ms),
            config,
        }
    }

    pub fn config(&self) -> &ToneConfig {
        &self.config
    }

    /// Frequencies in trajectory order
    pub fn frequencies(&self, trajectory: &Trajectory<f64>) -> Vec<f64> {
        trajectory.iter().map(|&v| frequency_for(v)).collect()
    }

    /// Buffer length for a trajectory of `n` samples
    pub fn expected_len(&self, n: usize) -> usize {
        if n == 0 {
            return self.silence_len;
        }
        let overlap = self.crossfade_len.min(self.tone_len);
        // The first tone can only overlap what the silence provides
        let first = self.tone_len - overlap.min(self.silence_len);
        self.silence_len + first + (n - 1) * (self.tone_len - overlap)
    }

    /// Duration of a buffer in seconds
    pub fn duration_secs(&self, buffer_len: usize) -> f64 {
        buffer_len as f64 / f64::from(self.config.sample_rate)
    }

    /// Render the whole trajectory: leading silence, then one tone per value
    pub fn render(&self, trajectory: &Trajectory<f64>) -> Result<Vec<f32>> {
        let mut buffer = vec![0.0f32; self.silence_len];
        buffer.reserve(trajectory.len() * self.tone_len);

        for (index, &value) in trajectory.iter().enumerate() {
            let frequency = frequency_for(value);
            if !frequency.is_finite() {
                return Err(Error::NonFiniteSample { index });
            }
            let tone = self.tone(frequency);
            append_with_crossfade(&mut buffer, &tone, self.crossfade_len);
        }

        debug!(
            tones = trajectory.len(),
            samples = buffer.len(),
            seconds = self.duration_secs(buffer.len()),
            "trajectory sonified"
        );
        Ok(buffer)
    }

    /// Sine tone of `tone_ms`, starting at zero phase
    pub fn tone(&self, frequency: f64) -> Vec<f32> {
        let increment = TAU * frequency / f64::from(self.config.sample_rate);
        let amplitude = f64::from(self.config.amplitude);
        let mut phase = 0.0f64;

        (0..self.tone_len)
            .map(|_| {
                let sample = (amplitude * phase.sin()) as f32;
                phase = wrap_phase(phase + increment);
                sample
            })
            .collect()
    }
}

impl Default for Sonifier {
    fn default() -> Self {
        Self::build(ToneConfig::default())
    }
}

/// Append `segment`, blending its head linearly into the buffer's tail
///
/// The overlap is clipped to the shorter of the two.
fn append_with_crossfade(buffer: &mut Vec<f32>, segment: &[f32], crossfade: usize) {
    let overlap = crossfade.min(buffer.len()).min(segment.len());
    let start = buffer.len() - overlap;

    for i in 0..overlap {
        let w = (i + 1) as f32 / (overlap + 1) as f32;
        buffer[start + i] = buffer[start + i] * (1.0 - w) + segment[i] * w;
    }

    buffer.extend_from_slice(&segment[overlap..]);
}

/// Fold a phase into [0, 2π), whatever the sign of the increment
fn wrap_phase(phase: f64) -> f64 {
    phase.rem_euclid(TAU)
}
