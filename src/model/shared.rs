//! Shared Integration Engine
//!
//! A cloneable handle for feeding one engine from many tasks. The lock is
//! held for the whole score-and-append step, so no update to the history
//! is lost.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::integration::IntegrationEngine;
use crate::model::types::ArchitectureType;

#[derive(Debug, Clone)]
pub struct SharedIntegrationEngine {
    inner: Arc<Mutex<IntegrationEngine>>,
    architecture: ArchitectureType,
}

impl SharedIntegrationEngine {
    pub fn new(engine: IntegrationEngine) -> Self {
        let architecture = engine.architecture();
        Self {
            inner: Arc::new(Mutex::new(engine)),
            architecture,
        }
    }

    pub fn architecture(&self) -> ArchitectureType {
        self.architecture
    }

    pub async fn compute_integration(&self, self_state: &[f64], time_state: &[f64]) -> f64 {
        let mut engine = self.inner.lock().await;
        engine.compute_integration(self_state, time_state)
    }

    pub async fn stability(&self) -> f64 {
        self.inner.lock().await.stability()
    }

    pub async fn history(&self) -> Vec<f64> {
        self.inner.lock().await.history().to_vec()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}
