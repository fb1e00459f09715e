//! Core Types
//!
//! Architecture tags, 2-D positions and the distance used everywhere.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::{profile_for, ArchitectureProfile, IntegrationStyle};
use crate::error::TideError;

/// The closed set of cognitive architectures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchitectureType {
    #[serde(rename = "NT")]
    Nt,
    #[serde(rename = "ASD")]
    Asd,
    #[serde(rename = "ADHD")]
    Adhd,
}

impl ArchitectureType {
    pub const ALL: [ArchitectureType; 3] = [Self::Nt, Self::Asd, Self::Adhd];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nt => "NT",
            Self::Asd => "ASD",
            Self::Adhd => "ADHD",
        }
    }

    pub fn profile(&self) -> &'static ArchitectureProfile {
        profile_for(*self)
    }

    pub fn integration_style(&self) -> IntegrationStyle {
        self.profile().integration_style
    }
}

impl std::fmt::Display for ArchitectureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchitectureType {
    type Err = TideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NT" => Ok(Self::Nt),
            "ASD" => Ok(Self::Asd),
            "ADHD" => Ok(Self::Adhd),
            other => Err(TideError::InvalidArchitecture(other.to_string())),
        }
    }
}

/// A point in internal/external space.
///
/// Coordinates are conventionally in [0, 1] but are not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub internal: f64,
    pub external: f64,
}

impl Position {
    /// Midpoint returned for elements no table knows about
    pub const NEUTRAL: Position = Position { internal: 0.5, external: 0.5 };

    pub const fn new(internal: f64, external: f64) -> Self {
        Self { internal, external }
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.internal, self.external]
    }

    /// Euclidean distance
    pub fn distance(&self, other: &Position) -> f64 {
        euclidean(&self.to_array(), &other.to_array())
    }
}

impl From<[f64; 2]> for Position {
    fn from(v: [f64; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

/// Euclidean norm of `a - b`.
///
/// Vectors of different lengths are compared by zero-padding the shorter
/// one. There is no broadcasting: `[1.0]` against `[1.0, 2.0]` is 2.0, not
/// the 1.0 a broadcast of the single element would give. A NaN coordinate,
/// or `inf - inf`, yields NaN.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().max(b.len());
    (0..n)
        .map(|i| {
            let d = a.get(i).copied().unwrap_or(0.0) - b.get(i).copied().unwrap_or(0.0);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}
