//! TIDE demo
//!
//! Walks each architecture through processing, integration and planning,
//! then feeds one shared engine from several concurrent tasks.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tide::{ArchitectureType, BehavioralSignature, CognitiveArchitecture, IntegrationEngine, SharedIntegrationEngine, TemporalPlanningTask};

// ──────────────────────────────────────────────────────────────────────────────
// CONFIGURATION
// ──────────────────────────────────────────────────────────────────────────────

/// Configuration for the demo run
struct DemoConfig {
    /// Seed for every random source in the run
    seed: u64,
    /// Integration steps per architecture
    steps: usize,
    /// Concurrent tasks sharing one engine
    workers: usize,
    /// Emit a JSON report instead of text
    json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            steps: 50,
            workers: 4,
            json: false,
        }
    }
}

impl DemoConfig {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            seed: env_parse("TIDE_SEED").unwrap_or(defaults.seed),
            steps: env_parse("TIDE_STEPS").unwrap_or(defaults.steps),
            workers: env_parse("TIDE_WORKERS").unwrap_or(defaults.workers),
            json: std::env::var("TIDE_JSON")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.json),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

// ──────────────────────────────────────────────────────────────────────────────
// REPORT
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ArchitectureReport {
    architecture: ArchitectureType,
    signature: BehavioralSignature,
    processed: Map<String, Value>,
    final_integration: f64,
    stability: f64,
    windowed_stability: f64,
    plan_consistency: f64,
}

#[derive(Serialize)]
struct SharedReport {
    architecture: ArchitectureType,
    workers: usize,
    scores: usize,
    stability: f64,
}

fn run_architecture(arch: ArchitectureType, config: &DemoConfig, index: u64) -> ArchitectureReport {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index));
    let architecture = CognitiveArchitecture::new(arch);

    let mut info = Map::new();
    info.insert("content".to_string(), json!("weekly review"));
    info.insert("temporal_context".to_string(), json!("future planning"));
    let processed = architecture.process_information_with(&info, &mut rng);

    let mut engine = IntegrationEngine::seeded(arch, config.seed.wrapping_add(index));
    let self_state = architecture.self_position().to_array();
    let time_state = architecture.time_position().to_array();
    let mut final_integration = 0.0;
    for _ in 0..config.steps {
        final_integration = engine.compute_integration(&self_state, &time_state);
    }

    let planner = TemporalPlanningTask::new(arch);
    let plan_consistency = planner.evaluate_plan_consistency_with(4, &mut rng);

    ArchitectureReport {
        architecture: arch,
        signature: architecture.behavioral_signature(),
        processed,
        final_integration,
        stability: engine.stability(),
        windowed_stability: engine.windowed_stability(),
        plan_consistency,
    }
}

async fn run_shared(arch: ArchitectureType, config: &DemoConfig) -> Result<SharedReport> {
    let architecture = CognitiveArchitecture::new(arch);
    let shared = SharedIntegrationEngine::new(IntegrationEngine::seeded(arch, config.seed));
    let self_state = architecture.self_position().to_array();
    let time_state = architecture.time_position().to_array();
    let steps = config.steps;

    let mut handles = Vec::with_capacity(config.workers);
    for _ in 0..config.workers {
        let engine = shared.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..steps {
                engine.compute_integration(&self_state, &time_state).await;
            }
        }));
    }
    for handle in handles {
        handle.await?;
    }

    Ok(SharedReport {
        architecture: arch,
        workers: config.workers,
        scores: shared.len().await,
        stability: shared.stability().await,
    })
}

fn print_report(report: &ArchitectureReport) {
    println!("\n{} Architecture", report.architecture);
    println!("{}", "-".repeat(50));
    println!("  temporal consistency:   {:.2}", report.signature.temporal_consistency);
    println!("  processing flexibility: {:.2}", report.signature.processing_flexibility);
    println!("  planning horizon:       {} days", report.signature.planning_horizon);
    println!("  self-time integration:  {:.3}", report.signature.self_time_integration);
    for (key, value) in &report.processed {
        if key != "content" && key != "temporal_context" {
            println!("  {}: {}", key, value);
        }
    }
    println!("  final Φ:                {:.3}", report.final_integration);
    println!("  stability:              {:.3} (window {:.3})", report.stability, report.windowed_stability);
    println!("  plan consistency:       {:.2}", report.plan_consistency);
}

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = DemoConfig::from_env();
    info!(
        "TIDE demo: seed={} steps={} workers={}",
        config.seed, config.steps, config.workers
    );

    let reports: Vec<ArchitectureReport> = ArchitectureType::ALL
        .iter()
        .zip(0u64..)
        .map(|(&arch, i)| run_architecture(arch, &config, i))
        .collect();

    let mut shared_reports = Vec::new();
    for arch in ArchitectureType::ALL {
        shared_reports.push(run_shared(arch, &config).await?);
    }

    if config.json {
        let out = json!({ "architectures": reports, "shared": shared_reports });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("\n{}", "═".repeat(60));
    println!("TIDE: Temporal-Internal Dimensional Encoding");
    println!("{}", "═".repeat(60));

    for report in &reports {
        print_report(report);
    }

    println!("\nShared engines");
    println!("{}", "-".repeat(50));
    for shared in &shared_reports {
        println!(
            "  {}: {} workers, {} scores, stability {:.3}",
            shared.architecture, shared.workers, shared.scores, shared.stability
        );
    }

    Ok(())
}
