use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use recruiter_ai::config::AppConfig;
use recruiter_ai::error::AppError;
use recruiter_ai::telemetry;
use recruiter_ai::workflows::conversation::{
    conversation_router, ConversationService, EvaluationResult, MemorySessionStore, Platform,
    SessionRequest, StandardCatalog, TemplateRenderer,
};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "AI Screening Orchestrator",
    about = "Run the automated candidate screening service or demo conversations from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Drive screening conversations from the command line
    Screen {
        #[command(subcommand)]
        command: ScreenCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum ScreenCommand {
    /// Simulate a full screening conversation offline
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Job identifier whose screening questions drive the conversation
    #[arg(long, default_value = "senior_python_dev")]
    job: String,
    /// Company identifier used for context replies
    #[arg(long, default_value = "tech_innovators")]
    company: String,
    /// Candidate display name for the demo transcript
    #[arg(long)]
    candidate_name: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Screen {
            command: ScreenCommand::Simulate(args),
        } => run_simulation(args),
    }
}

fn standard_service() -> Arc<ConversationService<MemorySessionStore, StandardCatalog, TemplateRenderer>>
{
    Arc::new(ConversationService::new(
        Arc::new(MemorySessionStore::default()),
        Arc::new(StandardCatalog::standard()),
        Arc::new(TemplateRenderer),
    ))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let service = standard_service();

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(conversation_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "screening orchestrator ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Scripted candidate turns used by the offline demo.
const DEMO_SCRIPT: &[&str] = &[
    "What does the role involve?",
    "I am a backend engineer. I have 7 years of experience with python, docker and aws.",
    "I've spent 5 years as a senior engineer shipping production services at scale.",
    "I designed microservices with docker and kubernetes behind an api gateway, built to be scalable.",
    "Mostly aws and gcp, with kubernetes deployment and some lambda.",
    "I could start immediately, or with 2 weeks notice.",
];

struct SimulationReport {
    exchanges: Vec<(String, String)>,
    greeting: String,
    evaluation: Option<EvaluationResult>,
    terminal: bool,
}

fn run_script(args: &SimulateArgs) -> Result<SimulationReport, AppError> {
    let service = standard_service();

    let greeting = service.create_session(SessionRequest {
        job_id: args.job.clone(),
        company_id: args.company.clone(),
        candidate_id: "demo-candidate".to_string(),
        platform: Platform::LinkedIn,
        candidate_name: args.candidate_name.clone(),
    })?;

    let session_id = greeting.session.session_id.clone();
    let mut exchanges = Vec::new();
    let mut terminal = false;
    let mut evaluation = None;

    for line in DEMO_SCRIPT {
        if terminal {
            break;
        }
        let outcome = service.handle_message(&session_id, line)?;
        terminal = outcome.terminal;
        evaluation = outcome.evaluation.clone();
        exchanges.push((line.to_string(), outcome.message));
    }

    Ok(SimulationReport {
        exchanges,
        greeting: greeting.message,
        evaluation,
        terminal,
    })
}

fn run_simulation(args: SimulateArgs) -> Result<(), AppError> {
    let report = run_script(&args)?;

    println!("Screening conversation demo ({})", args.job);
    println!("Agent: {}", report.greeting);
    for (candidate_line, agent_line) in &report.exchanges {
        println!("\nCandidate: {candidate_line}");
        println!("Agent: {agent_line}");
    }

    match &report.evaluation {
        Some(evaluation) => {
            println!("\nEvaluation");
            println!(
                "- Overall: {:.2}% ({})",
                evaluation.overall_percentage,
                evaluation.tier.label()
            );
            println!(
                "- Questions answered: {}/{}",
                evaluation.answered_count, evaluation.question_count
            );

            if evaluation.strengths.is_empty() {
                println!("- Strengths: none recorded");
            } else {
                println!("- Strengths:");
                for strength in &evaluation.strengths {
                    println!("    - {strength}");
                }
            }

            if evaluation.concerns.is_empty() {
                println!("- Concerns: none recorded");
            } else {
                println!("- Concerns:");
                for concern in &evaluation.concerns {
                    println!("    - {concern}");
                }
            }

            println!("- Recommendation: {}", evaluation.recommendation);
        }
        None => println!("\nConversation ended without an evaluation"),
    }

    if !report.terminal {
        println!("\nNote: the scripted conversation did not reach a terminal state");
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruiter_ai::workflows::conversation::SuitabilityTier;

    fn demo_args() -> SimulateArgs {
        SimulateArgs {
            job: "senior_python_dev".to_string(),
            company: "tech_innovators".to_string(),
            candidate_name: Some("Demo Candidate".to_string()),
        }
    }

    #[test]
    fn demo_script_reaches_a_high_evaluation() {
        let report = run_script(&demo_args()).expect("simulation runs");

        assert!(report.terminal);
        let evaluation = report.evaluation.expect("evaluation produced");
        assert_eq!(evaluation.answered_count, 4);
        assert_eq!(evaluation.question_count, 4);
        assert_eq!(evaluation.tier, SuitabilityTier::High);
    }

    #[test]
    fn demo_script_fails_fast_for_unknown_job() {
        let mut args = demo_args();
        args.job = "unknown_role".to_string();

        let result = run_script(&args);
        assert!(result.is_err());
    }
}
