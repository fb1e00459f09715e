//! Cognitive Model
//!
//! Dimensional space, cognitive architectures and the integration engine.

mod types;
pub mod dimensional_space;
pub mod strategy;
pub mod architecture;
pub mod integration;
pub mod shared;

pub use types::{euclidean, ArchitectureType, Position};
pub use dimensional_space::DimensionalSpace;
pub use strategy::{strategy_for, CognitiveStrategy, CollapsedStrategy, CrystallizedStrategy, DynamicStrategy, TransformContext};
pub use architecture::{BehavioralSignature, CognitiveArchitecture};
pub use integration::IntegrationEngine;
pub use shared::SharedIntegrationEngine;
