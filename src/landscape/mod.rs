//! Landscape Data
//!
//! Numeric inputs for plotting: element placements across architectures and
//! the integration-strength surface over the internal/external plane.
//! Rendering happens elsewhere.

use rand::RngCore;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::model::{ArchitectureType, DimensionalSpace, Position};

pub const DEFAULT_ELEMENTS: [&str; 6] = ["self", "time", "emotion", "logic", "social", "structure"];

/// Grouping used to colour placements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    SelfTime,
    Internal,
    Other,
}

impl ElementCategory {
    pub fn of(element: &str) -> Self {
        match element {
            "self" | "time" => Self::SelfTime,
            "emotion" | "social" => Self::Internal,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementPlacement {
    pub architecture: ArchitectureType,
    pub element: String,
    pub category: ElementCategory,
    pub position: Position,
}

/// Placement of every element under every architecture, architecture-major
pub fn element_map(space: &DimensionalSpace, elements: &[&str]) -> Vec<ElementPlacement> {
    let elements = if elements.is_empty() { &DEFAULT_ELEMENTS[..] } else { elements };

    ArchitectureType::ALL
        .iter()
        .flat_map(|&arch| {
            elements.iter().map(move |&element| ElementPlacement {
                architecture: arch,
                element: element.to_string(),
                category: ElementCategory::of(element),
                position: space.position_of(element, arch),
            })
        })
        .collect()
}

/// Integration strength sampled on a square grid over [0, 1]²
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationSurface {
    pub architecture: ArchitectureType,
    pub axis: Vec<f64>,
    /// `strength[e][i]` for external `axis[e]`, internal `axis[i]`
    pub strength: Vec<Vec<f64>>,
}

impl IntegrationSurface {
    /// Grid point with the highest strength as (internal, external, strength)
    pub fn peak(&self) -> Option<(f64, f64, f64)> {
        let mut best: Option<(f64, f64, f64)> = None;
        for (e, row) in self.strength.iter().enumerate() {
            for (i, &z) in row.iter().enumerate() {
                if best.map_or(true, |(_, _, b)| z > b) {
                    best = Some((self.axis[i], self.axis[e], z));
                }
            }
        }
        best
    }
}

fn surface_center(architecture: ArchitectureType) -> Position {
    match architecture {
        // self internal, time external
        ArchitectureType::Nt => Position::new(0.8, 0.2),
        ArchitectureType::Asd => Position::new(0.2, 0.2),
        ArchitectureType::Adhd => Position::new(0.8, 0.8),
    }
}

/// Build the integration surface for one architecture. ADHD adds Gaussian
/// noise (std 0.2) to every grid point.
pub fn integration_surface(architecture: ArchitectureType, resolution: usize, rng: &mut dyn RngCore) -> IntegrationSurface {
    let axis: Vec<f64> = match resolution {
        0 => Vec::new(),
        1 => vec![0.0],
        n => (0..n).map(|k| k as f64 / (n - 1) as f64).collect(),
    };
    let center = surface_center(architecture);
    let noise = Normal::new(0.0, 0.2).ok().filter(|_| architecture == ArchitectureType::Adhd);

    let strength = axis
        .iter()
        .map(|&external| {
            axis.iter()
                .map(|&internal| {
                    let d2 = (internal - center.internal).powi(2) + (external - center.external).powi(2);
                    let z = (-d2).exp();
                    match &noise {
                        Some(dist) => z + dist.sample(&mut *rng),
                        None => z,
                    }
                })
                .collect()
        })
        .collect();

    IntegrationSurface { architecture, axis, strength }
}
