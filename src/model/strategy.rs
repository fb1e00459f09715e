//! Architecture Strategies
//!
//! One capability per architecture, selected once from the tag and owned by
//! the architecture or engine that uses it. `transform` augments an
//! information record; `integrate` scores self/time binding.

use rand::{Rng, RngCore};
use rand_distr::{Distribution, StandardNormal};
use serde_json::{json, Map, Value};

use crate::config::{ArchitectureProfile, IntegrationParams, IntegrationStyle};
use crate::model::types::{euclidean, ArchitectureType};

/// Fixed facts about an architecture instance a transform may read
#[derive(Debug, Clone, Copy)]
pub struct TransformContext {
    pub profile: &'static ArchitectureProfile,
    pub integration_distance: f64,
}

/// Architecture-conditioned behavior
pub trait CognitiveStrategy: Send + Sync + std::fmt::Debug {
    fn architecture(&self) -> ArchitectureType;

    /// Insert this architecture's derived fields into `info`
    fn transform(&self, info: &mut Map<String, Value>, ctx: &TransformContext, rng: &mut dyn RngCore);

    /// Raw binding strength between two state vectors. `history_len` is the
    /// number of scores recorded before this call.
    fn integrate(
        &self,
        self_state: &[f64],
        time_state: &[f64],
        history_len: usize,
        params: &IntegrationParams,
        rng: &mut dyn RngCore,
    ) -> f64;

    fn style(&self) -> IntegrationStyle {
        self.architecture().integration_style()
    }
}

/// Pick the strategy for a tag
pub fn strategy_for(architecture: ArchitectureType) -> Box<dyn CognitiveStrategy> {
    match architecture {
        ArchitectureType::Nt => Box::new(DynamicStrategy),
        ArchitectureType::Asd => Box::new(CrystallizedStrategy),
        ArchitectureType::Adhd => Box::new(CollapsedStrategy),
    }
}

fn gaussian(rng: &mut dyn RngCore, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    mean + std_dev * z
}

/// 1 / (1 + d). An undefined distance counts as infinitely far apart.
fn inverse_distance(self_state: &[f64], time_state: &[f64]) -> f64 {
    let distance = euclidean(self_state, time_state);
    if distance.is_nan() {
        return 0.0;
    }
    1.0 / (1.0 + distance)
}

// ──────────────────────────────────────────────────────────────────────────────
// NT
// ──────────────────────────────────────────────────────────────────────────────

/// NT: flexible temporal scaling, oscillating integration
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicStrategy;

impl CognitiveStrategy for DynamicStrategy {
    fn architecture(&self) -> ArchitectureType {
        ArchitectureType::Nt
    }

    fn transform(&self, info: &mut Map<String, Value>, ctx: &TransformContext, rng: &mut dyn RngCore) {
        info.insert("temporal_flexibility".to_string(), json!(gaussian(rng, 0.5, 0.2)));
        info.insert("self_adaptation".to_string(), json!(1.0 - ctx.integration_distance));
    }

    fn integrate(
        &self,
        self_state: &[f64],
        time_state: &[f64],
        history_len: usize,
        _params: &IntegrationParams,
        _rng: &mut dyn RngCore,
    ) -> f64 {
        let base = inverse_distance(self_state, time_state);
        let oscillation = 0.2 * (history_len as f64 * 0.1).sin();
        base + oscillation
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// ASD
// ──────────────────────────────────────────────────────────────────────────────

/// ASD: rigid schedules, threshold-locked integration
#[derive(Debug, Clone, Copy, Default)]
pub struct CrystallizedStrategy;

impl CrystallizedStrategy {
    const LOCKED: f64 = 0.9;
    const UNLOCKED: f64 = 0.2;

    fn rigid_schedule() -> Value {
        let steps: Vec<Value> = (0..10)
            .map(|i| json!({ "time": i, "action": format!("step_{}", i) }))
            .collect();
        Value::Array(steps)
    }
}

impl CognitiveStrategy for CrystallizedStrategy {
    fn architecture(&self) -> ArchitectureType {
        ArchitectureType::Asd
    }

    fn transform(&self, info: &mut Map<String, Value>, ctx: &TransformContext, _rng: &mut dyn RngCore) {
        info.insert(
            "temporal_structure".to_string(),
            json!({
                "schedule": Self::rigid_schedule(),
                "adherence": 0.9,
            }),
        );
        info.insert("rule_consistency".to_string(), json!(ctx.profile.temporal_consistency));
    }

    fn integrate(
        &self,
        self_state: &[f64],
        time_state: &[f64],
        _history_len: usize,
        params: &IntegrationParams,
        _rng: &mut dyn RngCore,
    ) -> f64 {
        // Equality with the threshold is weak integration.
        if euclidean(self_state, time_state) < params.boundary_threshold {
            Self::LOCKED
        } else {
            Self::UNLOCKED
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// ADHD
// ──────────────────────────────────────────────────────────────────────────────

/// ADHD: time collapsed to now, noisy integration
#[derive(Debug, Clone, Copy, Default)]
pub struct CollapsedStrategy;

impl CognitiveStrategy for CollapsedStrategy {
    fn architecture(&self) -> ArchitectureType {
        ArchitectureType::Adhd
    }

    fn transform(&self, info: &mut Map<String, Value>, _ctx: &TransformContext, rng: &mut dyn RngCore) {
        info.insert(
            "temporal_compression".to_string(),
            json!({
                "temporal_window": "now",
                "past_discount": 0.9,
                "future_discount": 0.8,
            }),
        );
        // Either no focus or hyperfocus
        let focus = if rng.gen_bool(0.5) { 0.1 } else { 0.9 };
        info.insert("intensity_focus".to_string(), json!(focus));
    }

    fn integrate(
        &self,
        self_state: &[f64],
        time_state: &[f64],
        _history_len: usize,
        _params: &IntegrationParams,
        rng: &mut dyn RngCore,
    ) -> f64 {
        inverse_distance(self_state, time_state) + gaussian(rng, 0.0, 0.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLES: usize = 4000;

    fn ctx(arch: ArchitectureType, distance: f64) -> TransformContext {
        TransformContext { profile: arch.profile(), integration_distance: distance }
    }

    fn mean_and_std(values: &[f64]) -> (f64, f64) {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        (mean, variance.sqrt())
    }

    #[test]
    fn test_strategy_for_matches_tag() {
        for arch in ArchitectureType::ALL {
            let strategy = strategy_for(arch);
            assert_eq!(strategy.architecture(), arch);
            assert_eq!(strategy.style(), arch.integration_style());
        }
    }

    #[test]
    fn test_dynamic_oscillation_phase() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = IntegrationParams::default();
        let s = DynamicStrategy;
        let at_zero = s.integrate(&[0.0, 0.0], &[0.0, 0.0], 0, &params, &mut rng);
        assert_eq!(at_zero, 1.0);
        let at_ten = s.integrate(&[0.0, 0.0], &[0.0, 0.0], 10, &params, &mut rng);
        assert!((at_ten - (1.0 + 0.2 * 1.0_f64.sin())).abs() < 1e-12);
    }

    #[test]
    fn test_crystallized_boundary_is_weak() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = IntegrationParams::default();
        let s = CrystallizedStrategy;
        assert_eq!(s.integrate(&[0.0, 0.0], &[0.5, 0.0], 0, &params, &mut rng), 0.2);
        assert_eq!(s.integrate(&[0.0, 0.0], &[0.49, 0.0], 0, &params, &mut rng), 0.9);
    }

    #[test]
    fn test_asd_transform_schedule() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut info = Map::new();
        CrystallizedStrategy.transform(&mut info, &ctx(ArchitectureType::Asd, 0.1), &mut rng);

        let schedule = info["temporal_structure"]["schedule"].as_array().unwrap();
        assert_eq!(schedule.len(), 10);
        assert_eq!(schedule[3]["action"], "step_3");
        assert_eq!(schedule[9]["time"], 9);
        assert_eq!(info["temporal_structure"]["adherence"], 0.9);
        assert_eq!(info["rule_consistency"], 0.9);
    }

    #[test]
    fn test_adhd_focus_is_bimodal() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..64 {
            let mut info = Map::new();
            CollapsedStrategy.transform(&mut info, &ctx(ArchitectureType::Adhd, 0.1), &mut rng);
            let focus = info["intensity_focus"].as_f64().unwrap();
            assert!(focus == 0.1 || focus == 0.9);
            seen_low |= focus == 0.1;
            seen_high |= focus == 0.9;
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn test_nt_temporal_flexibility_distribution() {
        let mut rng = StdRng::seed_from_u64(2718);
        let samples: Vec<f64> = (0..SAMPLES)
            .map(|_| {
                let mut info = Map::new();
                DynamicStrategy.transform(&mut info, &ctx(ArchitectureType::Nt, 0.85), &mut rng);
                info["temporal_flexibility"].as_f64().unwrap()
            })
            .collect();

        let (mean, std) = mean_and_std(&samples);
        assert!((mean - 0.5).abs() < 0.02, "mean {}", mean);
        assert!((std - 0.2).abs() < 0.02, "std {}", std);
    }

    #[test]
    fn test_collapsed_noise_distribution() {
        // Distance 1 puts the base at 0.5, well clear of the clamp edges.
        let mut rng = StdRng::seed_from_u64(3141);
        let params = IntegrationParams::default();
        let samples: Vec<f64> = (0..SAMPLES)
            .map(|step| CollapsedStrategy.integrate(&[0.0], &[1.0], step, &params, &mut rng))
            .collect();

        let (mean, std) = mean_and_std(&samples);
        assert!((mean - 0.5).abs() < 0.03, "mean {}", mean);
        assert!((std - 0.3).abs() < 0.03, "std {}", std);
    }

    #[test]
    fn test_adhd_focus_split_evenly() {
        let mut rng = StdRng::seed_from_u64(1618);
        let hyperfocus = (0..SAMPLES)
            .filter(|_| {
                let mut info = Map::new();
                CollapsedStrategy.transform(&mut info, &ctx(ArchitectureType::Adhd, 0.1), &mut rng);
                info["intensity_focus"] == 0.9
            })
            .count();

        let share = hyperfocus as f64 / SAMPLES as f64;
        assert!((0.45..=0.55).contains(&share), "hyperfocus share {}", share);
    }

    #[test]
    fn test_undefined_distance_has_zero_base() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = IntegrationParams::default();
        assert_eq!(inverse_distance(&[f64::NAN], &[0.0]), 0.0);
        assert_eq!(inverse_distance(&[f64::INFINITY], &[0.0]), 0.0);
        assert_eq!(DynamicStrategy.integrate(&[f64::INFINITY], &[f64::INFINITY], 0, &params, &mut rng), 0.0);
        assert_eq!(CrystallizedStrategy.integrate(&[f64::NAN], &[f64::NAN], 0, &params, &mut rng), 0.2);
    }

    #[test]
    fn test_nt_transform_seeded() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let mut first = Map::new();
        let mut second = Map::new();
        DynamicStrategy.transform(&mut first, &ctx(ArchitectureType::Nt, 0.25), &mut a);
        DynamicStrategy.transform(&mut second, &ctx(ArchitectureType::Nt, 0.25), &mut b);
        assert_eq!(first, second);
        assert_eq!(first["self_adaptation"], 0.75);
    }
}
