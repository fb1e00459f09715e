//! TIDE: Temporal-Internal Dimensional Encoding
//!
//! A parameterized model of how three cognitive architectures (NT, ASD,
//! ADHD) organize internal and external processing:
//! - Dimensional space mapping cognitive elements onto two axes
//! - Cognitive architectures with architecture-specific processing
//! - Integration engine scoring self/time binding and its stability
//! - Week planning and landscape data built on the model

pub mod config;
pub mod error;
pub mod model;
pub mod planning;
pub mod landscape;

// Re-exports for convenience
pub use error::{Result, TideError};
pub use model::{
    ArchitectureType, BehavioralSignature, CognitiveArchitecture, DimensionalSpace, IntegrationEngine, Position,
    SharedIntegrationEngine,
};
pub use planning::TemporalPlanningTask;
