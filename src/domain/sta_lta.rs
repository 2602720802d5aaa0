//! STA/LTA event detection over decoded velocity samples.
//!
//! The node flags seismic onsets by comparing a short-term average (STA) of
//! recent amplitude against a long-term average (LTA) of the background, with
//! a hysteresis pair of thresholds so a trigger does not chatter around the
//! detection level. This module reproduces that analysis over samples already
//! decoded from velocity frames. Averages are taken over absolute amplitudes
//! since decoded samples are signed.

use crate::domain::{PayloadError, Result};

/// Samples in the short-term window (1 s at the node's 100 Hz sampling rate).
pub const DEFAULT_STA_WINDOW: usize = 100;

/// Samples in the long-term window (10 s at 100 Hz).
pub const DEFAULT_LTA_WINDOW: usize = 1000;

/// STA/LTA ratio above which an event is declared.
pub const DEFAULT_TRIGGER_THRESHOLD: f64 = 1.0;

/// STA/LTA ratio below which a declared event is released.
pub const DEFAULT_RESET_THRESHOLD: f64 = 0.6;

/// Window and threshold configuration for the STA/LTA analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct StaLtaConfig {
    pub sta_window: usize,
    pub lta_window: usize,
    pub trigger_threshold: f64,
    pub reset_threshold: f64,
}

impl Default for StaLtaConfig {
    fn default() -> Self {
        Self {
            sta_window: DEFAULT_STA_WINDOW,
            lta_window: DEFAULT_LTA_WINDOW,
            trigger_threshold: DEFAULT_TRIGGER_THRESHOLD,
            reset_threshold: DEFAULT_RESET_THRESHOLD,
        }
    }
}

impl StaLtaConfig {
    /// Validate window and threshold relationships.
    ///
    /// The short window must be non-empty and strictly shorter than the long
    /// window; the reset threshold must sit below the trigger threshold for
    /// the hysteresis to release.
    pub fn validate(&self) -> Result<()> {
        if self.sta_window == 0 {
            return Err(PayloadError::InvalidStaLtaConfig(
                "STA window must be non-zero".to_string(),
            ));
        }
        if self.sta_window >= self.lta_window {
            return Err(PayloadError::InvalidStaLtaConfig(format!(
                "STA window {} must be shorter than LTA window {}",
                self.sta_window, self.lta_window
            )));
        }
        if self.reset_threshold >= self.trigger_threshold {
            return Err(PayloadError::InvalidStaLtaConfig(format!(
                "reset threshold {} must be below trigger threshold {}",
                self.reset_threshold, self.trigger_threshold
            )));
        }
        Ok(())
    }
}

/// Short-term and long-term averages with their ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaLtaRatio {
    pub sta: f64,
    pub lta: f64,
    pub ratio: f64,
}

fn mean_amplitude(samples: &[i16]) -> f64 {
    let sum: f64 = samples.iter().map(|s| f64::from(*s).abs()).sum();
    sum / samples.len() as f64
}

/// Compute the STA/LTA ratio over the trailing windows of a sample sequence.
///
/// Both windows end at the most recent sample, matching the node's analysis
/// of the tail of its ring buffer. Requires at least `lta_window` samples; a
/// zero long-term average means the trace is silent and no ratio exists.
pub fn sta_lta(samples: &[i16], config: &StaLtaConfig) -> Result<StaLtaRatio> {
    config.validate()?;

    if samples.len() < config.lta_window {
        return Err(PayloadError::InsufficientSamples {
            expected: config.lta_window,
            actual: samples.len(),
        });
    }

    let sta = mean_amplitude(&samples[samples.len() - config.sta_window..]);
    let lta = mean_amplitude(&samples[samples.len() - config.lta_window..]);

    if lta == 0.0 {
        return Err(PayloadError::SilentTrace);
    }

    Ok(StaLtaRatio {
        sta,
        lta,
        ratio: sta / lta,
    })
}

/// Hysteresis state machine over successive STA/LTA ratios.
///
/// Arms when the ratio crosses the trigger threshold and stays armed until
/// the ratio falls below the reset threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerState {
    trigger_threshold: f64,
    reset_threshold: f64,
    armed: bool,
}

impl TriggerState {
    pub fn new(config: &StaLtaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            trigger_threshold: config.trigger_threshold,
            reset_threshold: config.reset_threshold,
            armed: false,
        })
    }

    /// Feed the next ratio; returns whether the trigger is armed afterwards.
    pub fn update(&mut self, ratio: f64) -> bool {
        if self.armed {
            if ratio < self.reset_threshold {
                self.armed = false;
            }
        } else if ratio > self.trigger_threshold {
            self.armed = true;
        }
        self.armed
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
