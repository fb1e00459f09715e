//! Cognitive Architecture
//!
//! One architecture instance: fixed self/time placement, the derived
//! integration distance, and architecture-specific information processing.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::ArchitectureProfile;
use crate::model::dimensional_space::DimensionalSpace;
use crate::model::strategy::{strategy_for, CognitiveStrategy, TransformContext};
use crate::model::types::{ArchitectureType, Position};
use crate::error::Result;

/// Observable behavioral metrics for comparing architectures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralSignature {
    pub temporal_consistency: f64,
    pub processing_flexibility: f64,
    pub planning_horizon: u32,
    /// 1 / (1 + integration_distance)
    pub self_time_integration: f64,
}

/// An immutable cognitive architecture instance.
///
/// Safe to share read-only; the stochastic parts of processing draw from a
/// caller-supplied random source.
#[derive(Debug)]
pub struct CognitiveArchitecture {
    architecture_type: ArchitectureType,
    profile: &'static ArchitectureProfile,
    self_position: Position,
    time_position: Position,
    integration_distance: f64,
    strategy: Box<dyn CognitiveStrategy>,
}

impl CognitiveArchitecture {
    pub fn new(architecture_type: ArchitectureType) -> Self {
        Self::with_space(architecture_type, &DimensionalSpace::default())
    }

    /// Build against a custom dimensional space
    pub fn with_space(architecture_type: ArchitectureType, space: &DimensionalSpace) -> Self {
        let self_position = space.position_of("self", architecture_type);
        let time_position = space.position_of("time", architecture_type);
        let integration_distance = self_position.distance(&time_position);

        debug!(
            "Initialized {} architecture: self={:?} time={:?} distance={:.4}",
            architecture_type, self_position, time_position, integration_distance
        );

        Self {
            architecture_type,
            profile: architecture_type.profile(),
            self_position,
            time_position,
            integration_distance,
            strategy: strategy_for(architecture_type),
        }
    }

    /// Fails with `InvalidArchitecture` for anything but NT, ASD or ADHD
    pub fn from_tag(tag: &str) -> Result<Self> {
        Ok(Self::new(tag.parse()?))
    }

    pub fn architecture_type(&self) -> ArchitectureType {
        self.architecture_type
    }

    pub fn profile(&self) -> &'static ArchitectureProfile {
        self.profile
    }

    pub fn self_position(&self) -> Position {
        self.self_position
    }

    pub fn time_position(&self) -> Position {
        self.time_position
    }

    pub fn integration_distance(&self) -> f64 {
        self.integration_distance
    }

    /// Process information using the thread-local random source
    pub fn process_information(&self, information: &Map<String, Value>) -> Map<String, Value> {
        self.process_information_with(information, &mut rand::thread_rng())
    }

    /// Copy `information` and add this architecture's derived fields plus
    /// `architecture_signature`.
    pub fn process_information_with(&self, information: &Map<String, Value>, rng: &mut dyn RngCore) -> Map<String, Value> {
        let mut processed = information.clone();
        let ctx = TransformContext {
            profile: self.profile,
            integration_distance: self.integration_distance,
        };
        self.strategy.transform(&mut processed, &ctx, rng);
        processed.insert(
            "architecture_signature".to_string(),
            Value::String(self.architecture_type.to_string()),
        );
        processed
    }

    pub fn behavioral_signature(&self) -> BehavioralSignature {
        BehavioralSignature {
            temporal_consistency: self.profile.temporal_consistency,
            processing_flexibility: self.profile.processing_flexibility,
            planning_horizon: self.profile.planning_horizon,
            self_time_integration: 1.0 / (1.0 + self.integration_distance),
        }
    }
}
