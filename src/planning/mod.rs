//! Temporal Planning
//!
//! Week planning as each architecture would do it, and a consistency score
//! over repeated weeks. ASD plans repeat exactly, NT plans are fixed but
//! marked flexible, ADHD only plans today.

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::error::Result;
use crate::model::{ArchitectureType, CognitiveArchitecture};

pub const WEEKDAYS: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

pub const DEFAULT_ACTIVITIES: [&str; 6] = ["work", "exercise", "social", "rest", "creative", "chores"];

/// Activities planned for one day (or for `TODAY`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: String,
    pub activities: Vec<String>,
}

/// Ordered day plans for one week
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub days: Vec<DayPlan>,
}

impl WeekPlan {
    pub fn get(&self, day: &str) -> Option<&[String]> {
        self.days
            .iter()
            .find(|d| d.day == day)
            .map(|d| d.activities.as_slice())
    }

    fn push(&mut self, day: &str, activities: Vec<String>) {
        self.days.push(DayPlan {
            day: day.to_string(),
            activities,
        });
    }
}

pub struct TemporalPlanningTask {
    architecture: CognitiveArchitecture,
    activities: Vec<String>,
}

impl TemporalPlanningTask {
    pub fn new(architecture_type: ArchitectureType) -> Self {
        Self {
            architecture: CognitiveArchitecture::new(architecture_type),
            activities: DEFAULT_ACTIVITIES.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn from_tag(tag: &str) -> Result<Self> {
        Ok(Self::new(tag.parse()?))
    }

    pub fn architecture(&self) -> &CognitiveArchitecture {
        &self.architecture
    }

    pub fn plan_week(&self) -> WeekPlan {
        self.plan_week_with(&mut rand::thread_rng())
    }

    pub fn plan_week_with(&self, rng: &mut dyn RngCore) -> WeekPlan {
        match self.architecture.architecture_type() {
            ArchitectureType::Nt => flexible_plan(),
            ArchitectureType::Asd => systematic_plan(),
            ArchitectureType::Adhd => self.immediate_plan(rng),
        }
    }

    /// ADHD: detailed today, vague for the rest of the week
    fn immediate_plan(&self, rng: &mut dyn RngCore) -> WeekPlan {
        let picked: Vec<&String> = self.activities.choose_multiple(rng, 3).collect();
        let label = |i: usize| picked.get(i).map(|s| s.as_str()).unwrap_or("nothing");

        let mut plan = WeekPlan::default();
        plan.push(
            "TODAY",
            vec![
                format!("NOW: {}", label(0)),
                format!("Maybe later: {}", label(1)),
                format!("If time: {}", label(2)),
            ],
        );
        for day in &WEEKDAYS[1..] {
            plan.push(day, vec!["probably something".to_string(), "will figure it out".to_string()]);
        }
        plan
    }

    pub fn evaluate_plan_consistency(&self, num_weeks: usize) -> f64 {
        self.evaluate_plan_consistency_with(num_weeks, &mut rand::thread_rng())
    }

    /// Mean similarity of weeks 1.. against week 0. Fewer than two weeks
    /// counts as fully consistent.
    pub fn evaluate_plan_consistency_with(&self, num_weeks: usize, rng: &mut dyn RngCore) -> f64 {
        if num_weeks < 2 {
            return 1.0;
        }

        let plans: Vec<WeekPlan> = (0..num_weeks).map(|_| self.plan_week_with(&mut *rng)).collect();
        let scores: Vec<f64> = plans[1..].iter().map(|p| compare_plans(&plans[0], p)).collect();
        let consistency = scores.iter().sum::<f64>() / scores.len() as f64;

        debug!(
            "{} plan consistency over {} weeks: {:.3}",
            self.architecture.architecture_type(),
            num_weeks,
            consistency
        );
        consistency
    }
}

/// NT: fixed base schedule with room for adjustment
fn flexible_plan() -> WeekPlan {
    let base: [[&str; 3]; 7] = [
        ["work", "exercise", "rest"],
        ["work", "creative", "social"],
        ["work", "chores", "rest"],
        ["work", "exercise", "creative"],
        ["work", "social", "rest"],
        ["chores", "creative", "social"],
        ["rest", "exercise", "creative"],
    ];

    let mut plan = WeekPlan::default();
    for (day, activities) in WEEKDAYS.iter().zip(base.iter()) {
        let mut list: Vec<String> = activities.iter().map(|a| a.to_string()).collect();
        list.push("*flexible time*".to_string());
        plan.push(day, list);
    }
    plan
}

/// ASD: rigid rotating schedule with fixed times
fn systematic_plan() -> WeekPlan {
    let rotation: [[&str; 4]; 3] = [
        ["9:00-work", "14:00-exercise", "18:00-rest", "20:00-creative"],
        ["9:00-work", "14:00-chores", "18:00-social", "20:00-rest"],
        ["9:00-work", "14:00-creative", "18:00-exercise", "20:00-rest"],
    ];

    let mut plan = WeekPlan::default();
    for (i, day) in WEEKDAYS.iter().enumerate() {
        let mut list: Vec<String> = rotation[i % 3].iter().map(|a| a.to_string()).collect();
        list.insert(2, "12:00-lunch break (30 min)".to_string());
        plan.push(day, list);
    }
    plan
}

/// Mean Jaccard similarity over the days both plans share
pub fn compare_plans(plan1: &WeekPlan, plan2: &WeekPlan) -> f64 {
    let mut total = 0.0;
    let mut compared = 0usize;

    for day in &plan1.days {
        let Some(other) = plan2.get(&day.day) else {
            continue;
        };
        let a: HashSet<&String> = day.activities.iter().collect();
        let b: HashSet<&String> = other.iter().collect();
        let union = a.union(&b).count();
        if union > 0 {
            total += a.intersection(&b).count() as f64 / union as f64;
            compared += 1;
        }
    }

    if compared > 0 {
        total / compared as f64
    } else {
        0.0
    }
}
