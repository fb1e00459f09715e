//! Configuration Store
//!
//! Literal constants for the three architecture profiles, the two feature
//! categories of the dimensional space, and the integration parameters.
//! Nothing here is read from disk or the environment.

use serde::{Deserialize, Serialize};

use crate::model::ArchitectureType;

/// One of the two processing axes an element can be anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Internal,
    External,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
        }
    }
}

/// How self and time bind under an architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationStyle {
    /// NT: flexible, oscillating binding
    Dynamic,
    /// ASD: locked in when aligned, weak otherwise
    Crystallized,
    /// ADHD: intense but unstable
    Collapsed,
}

impl IntegrationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dynamic => "dynamic",
            Self::Crystallized => "crystallized",
            Self::Collapsed => "collapsed",
        }
    }
}

impl std::fmt::Display for IntegrationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable per-architecture coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureProfile {
    pub self_dimension: Dimension,
    pub time_dimension: Dimension,
    pub integration_style: IntegrationStyle,
    /// 0.0 - 1.0
    pub processing_flexibility: f64,
    /// 0.0 - 1.0
    pub temporal_consistency: f64,
    /// Days
    pub planning_horizon: u32,
}

pub static NT_PROFILE: ArchitectureProfile = ArchitectureProfile {
    self_dimension: Dimension::Internal,
    time_dimension: Dimension::External,
    integration_style: IntegrationStyle::Dynamic,
    processing_flexibility: 0.8,
    temporal_consistency: 0.6,
    planning_horizon: 30,
};

pub static ASD_PROFILE: ArchitectureProfile = ArchitectureProfile {
    self_dimension: Dimension::External,
    time_dimension: Dimension::External,
    integration_style: IntegrationStyle::Crystallized,
    processing_flexibility: 0.3,
    temporal_consistency: 0.9,
    planning_horizon: 90,
};

pub static ADHD_PROFILE: ArchitectureProfile = ArchitectureProfile {
    self_dimension: Dimension::Internal,
    time_dimension: Dimension::Internal,
    integration_style: IntegrationStyle::Collapsed,
    processing_flexibility: 0.9,
    temporal_consistency: 0.2,
    planning_horizon: 1,
};

/// Profile lookup over the closed architecture set
pub fn profile_for(architecture: ArchitectureType) -> &'static ArchitectureProfile {
    match architecture {
        ArchitectureType::Nt => &NT_PROFILE,
        ArchitectureType::Asd => &ASD_PROFILE,
        ArchitectureType::Adhd => &ADHD_PROFILE,
    }
}

/// Fluid, experiential, social-emotional features
pub const INTERNAL_FEATURES: [&str; 5] = ["emotion", "social", "morality", "thought", "polarity"];

/// Structured, systematic, logical-temporal features
pub const EXTERNAL_FEATURES: [&str; 5] = ["time", "space", "number", "logic", "structure"];

/// Parameters for the integration engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationParams {
    /// Crystallized rule: distances strictly below this lock in
    pub boundary_threshold: f64,
    /// Integration scores are reported on a normalized [0, 1] scale. When
    /// false the engine still clamps, but logs each score it had to pull
    /// back into range.
    pub phi_normalization: bool,
    /// Number of trailing scores used by windowed stability
    pub temporal_window: usize,
}

impl Default for IntegrationParams {
    fn default() -> Self {
        Self {
            boundary_threshold: 0.5,
            phi_normalization: true,
            temporal_window: 100,
        }
    }
}

impl IntegrationParams {
    pub fn with_boundary_threshold(mut self, threshold: f64) -> Self {
        self.boundary_threshold = threshold;
        self
    }

    pub fn with_temporal_window(mut self, window: usize) -> Self {
        self.temporal_window = window;
        self
    }

    pub fn with_phi_normalization(mut self, normalize: bool) -> Self {
        self.phi_normalization = normalize;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lookup_is_total() {
        for arch in ArchitectureType::ALL {
            let profile = profile_for(arch);
            assert!(profile.planning_horizon > 0);
            assert!((0.0..=1.0).contains(&profile.processing_flexibility));
            assert!((0.0..=1.0).contains(&profile.temporal_consistency));
        }
    }

    #[test]
    fn test_profile_constants() {
        assert_eq!(NT_PROFILE.integration_style, IntegrationStyle::Dynamic);
        assert_eq!(ASD_PROFILE.self_dimension, Dimension::External);
        assert_eq!(ADHD_PROFILE.time_dimension, Dimension::Internal);
        assert_eq!(ADHD_PROFILE.planning_horizon, 1);
    }

    #[test]
    fn test_feature_lists_disjoint() {
        for f in INTERNAL_FEATURES {
            assert!(!EXTERNAL_FEATURES.contains(&f));
        }
    }

    #[test]
    fn test_integration_params_default() {
        let params = IntegrationParams::default();
        assert_eq!(params.boundary_threshold, 0.5);
        assert!(params.phi_normalization);
        assert_eq!(params.temporal_window, 100);

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["temporal_window"], 100);
    }

    #[test]
    fn test_integration_params_builders() {
        let params = IntegrationParams::default()
            .with_boundary_threshold(0.25)
            .with_temporal_window(10)
            .with_phi_normalization(false);
        assert_eq!(params.boundary_threshold, 0.25);
        assert_eq!(params.temporal_window, 10);
        assert!(!params.phi_normalization);
    }
}
