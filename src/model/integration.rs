//! Integration Engine
//!
//! Scores self/time binding (Φ) under the architecture's rule and keeps an
//! append-only history of every score it has produced.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::{IntegrationParams, IntegrationStyle};
use crate::model::strategy::{strategy_for, CognitiveStrategy};
use crate::model::types::ArchitectureType;
use crate::error::Result;

/// Accumulates integration scores for one architecture.
///
/// There is no way to clear or truncate the history; start a new engine for
/// a fresh series.
#[derive(Debug)]
pub struct IntegrationEngine {
    architecture: ArchitectureType,
    params: IntegrationParams,
    strategy: Box<dyn CognitiveStrategy>,
    rng: StdRng,
    integration_history: Vec<f64>,
}

impl IntegrationEngine {
    pub fn new(architecture: ArchitectureType) -> Self {
        Self::with_rng(architecture, IntegrationParams::default(), StdRng::from_entropy())
    }

    /// Deterministic engine for reproducible series
    pub fn seeded(architecture: ArchitectureType, seed: u64) -> Self {
        Self::with_rng(architecture, IntegrationParams::default(), StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(architecture: ArchitectureType, params: IntegrationParams, rng: StdRng) -> Self {
        info!(
            "Integration engine ready: {} ({}), threshold={}",
            architecture,
            architecture.integration_style(),
            params.boundary_threshold
        );
        Self {
            architecture,
            params,
            strategy: strategy_for(architecture),
            rng,
            integration_history: Vec::new(),
        }
    }

    /// Fails with `InvalidArchitecture` for anything but NT, ASD or ADHD
    pub fn from_tag(tag: &str) -> Result<Self> {
        Ok(Self::new(tag.parse()?))
    }

    pub fn architecture(&self) -> ArchitectureType {
        self.architecture
    }

    pub fn integration_style(&self) -> IntegrationStyle {
        self.strategy.style()
    }

    pub fn params(&self) -> &IntegrationParams {
        &self.params
    }

    pub fn history(&self) -> &[f64] {
        &self.integration_history
    }

    pub fn len(&self) -> usize {
        self.integration_history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.integration_history.is_empty()
    }

    /// Integration strength in [0, 1]. The score is appended to the history
    /// before it is returned.
    ///
    /// Any input is accepted. A NaN raw score (from NaN or `inf - inf`
    /// coordinates) records as 0.0 and infinities clamp to the nearest bound,
    /// so the history always stays finite.
    pub fn compute_integration(&mut self, self_state: &[f64], time_state: &[f64]) -> f64 {
        let step = self.integration_history.len();
        let raw = self
            .strategy
            .integrate(self_state, time_state, step, &self.params, &mut self.rng);
        let phi = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) };

        if !self.params.phi_normalization && phi != raw {
            warn!(
                "{} integration step {}: raw score {} outside [0, 1], clamped to {}",
                self.architecture, step, raw, phi
            );
        }
        debug!("{} integration step {}: raw={:.4} phi={:.4}", self.architecture, step, raw, phi);

        self.integration_history.push(phi);
        phi
    }

    /// 1 - standard deviation of the history, or 1.0 with fewer than two
    /// scores. Not clamped: a widely dispersed history can go below zero.
    pub fn stability(&self) -> f64 {
        stability_of(&self.integration_history)
    }

    /// Stability over the trailing `temporal_window` scores only
    pub fn windowed_stability(&self) -> f64 {
        let start = self
            .integration_history
            .len()
            .saturating_sub(self.params.temporal_window);
        stability_of(&self.integration_history[start..])
    }
}

fn stability_of(scores: &[f64]) -> f64 {
    if scores.len() < 2 {
        return 1.0;
    }
    1.0 - population_std(scores)
}

fn population_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
