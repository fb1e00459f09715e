//! Dimensional Space
//!
//! Maps named cognitive elements onto the internal/external plane. Each
//! architecture has its own literal table: NT keeps self internal and time
//! external, ASD shifts both outward, ADHD pulls both inward.

use std::collections::HashMap;

use crate::config::{Dimension, EXTERNAL_FEATURES, INTERNAL_FEATURES};
use crate::model::types::{ArchitectureType, Position};
use crate::error::Result;

type ElementTable = [(&'static str, Position); 4];

static NT_ELEMENTS: ElementTable = [
    ("self", Position::new(0.8, 0.2)),
    ("time", Position::new(0.2, 0.8)),
    ("emotion", Position::new(0.9, 0.1)),
    ("logic", Position::new(0.1, 0.9)),
];

static ASD_ELEMENTS: ElementTable = [
    ("self", Position::new(0.2, 0.8)),
    ("time", Position::new(0.1, 0.9)),
    ("emotion", Position::new(0.9, 0.1)),
    ("logic", Position::new(0.0, 1.0)),
];

static ADHD_ELEMENTS: ElementTable = [
    ("self", Position::new(0.9, 0.1)),
    ("time", Position::new(0.8, 0.2)),
    ("emotion", Position::new(1.0, 0.0)),
    ("logic", Position::new(0.2, 0.8)),
];

fn builtin_table(architecture: ArchitectureType) -> &'static ElementTable {
    match architecture {
        ArchitectureType::Nt => &NT_ELEMENTS,
        ArchitectureType::Asd => &ASD_ELEMENTS,
        ArchitectureType::Adhd => &ADHD_ELEMENTS,
    }
}

/// Internal/external coordinate system for cognitive elements.
///
/// Immutable once built; extra elements are registered through
/// [`DimensionalSpace::with_element`] before the space is shared.
#[derive(Debug, Clone)]
pub struct DimensionalSpace {
    feature_vectors: HashMap<&'static str, (Dimension, Position)>,
    extra_elements: HashMap<ArchitectureType, HashMap<String, Position>>,
}

impl DimensionalSpace {
    pub fn new() -> Self {
        let mut feature_vectors = HashMap::new();
        for feature in INTERNAL_FEATURES {
            feature_vectors.insert(feature, (Dimension::Internal, Position::new(1.0, 0.0)));
        }
        for feature in EXTERNAL_FEATURES {
            feature_vectors.insert(feature, (Dimension::External, Position::new(0.0, 1.0)));
        }

        Self {
            feature_vectors,
            extra_elements: HashMap::new(),
        }
    }

    /// Register an element position for one architecture. Overrides the
    /// built-in table entry of the same name.
    pub fn with_element(mut self, architecture: ArchitectureType, element: impl Into<String>, position: Position) -> Self {
        self.extra_elements
            .entry(architecture)
            .or_default()
            .insert(element.into(), position);
        self
    }

    /// Where `element` lives under `architecture`. Unknown names map to the
    /// neutral midpoint.
    pub fn position_of(&self, element: &str, architecture: ArchitectureType) -> Position {
        if let Some(pos) = self
            .extra_elements
            .get(&architecture)
            .and_then(|elements| elements.get(element))
        {
            return *pos;
        }

        builtin_table(architecture)
            .iter()
            .find(|(name, _)| *name == element)
            .map(|(_, pos)| *pos)
            .unwrap_or(Position::NEUTRAL)
    }

    /// String-tagged variant of [`position_of`](Self::position_of).
    pub fn position_of_tag(&self, element: &str, architecture: &str) -> Result<Position> {
        let architecture = architecture.parse::<ArchitectureType>()?;
        Ok(self.position_of(element, architecture))
    }

    pub fn distance(&self, elem1: &str, elem2: &str, architecture: ArchitectureType) -> f64 {
        let pos1 = self.position_of(elem1, architecture);
        let pos2 = self.position_of(elem2, architecture);
        pos1.distance(&pos2)
    }

    pub fn distance_tag(&self, elem1: &str, elem2: &str, architecture: &str) -> Result<f64> {
        let architecture = architecture.parse::<ArchitectureType>()?;
        Ok(self.distance(elem1, elem2, architecture))
    }

    /// Unit axis vector for a named feature
    pub fn feature_vector(&self, feature: &str) -> Option<Position> {
        self.feature_vectors.get(feature).map(|(_, pos)| *pos)
    }

    pub fn feature_category(&self, feature: &str) -> Option<Dimension> {
        self.feature_vectors.get(feature).map(|(dim, _)| *dim)
    }
}

impl Default for DimensionalSpace {
    fn default() -> Self {
        Self::new()
    }
}
