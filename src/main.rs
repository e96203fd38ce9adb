use chrono::Utc;
use planning_alerts_digest::db::{init_db, Database, SqliteAlerts, SqliteStats};
use planning_alerts_digest::mailer::BrevoMailer;
use planning_alerts_digest::{
    Alert, ApplicationSummary, CommentSummary, DigestComposer, DigestConfig, DigestError,
    DigestResult, Dispatcher,
};
use serde::Deserialize;
use std::fs;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// What the scheduler hands us: one alert and what is new for it. When
/// sending, only `alert.id` is used; the rest comes from the database.
#[derive(Deserialize)]
struct DigestRequest {
    alert: Alert,
    #[serde(default)]
    applications: Vec<ApplicationSummary>,
    #[serde(default)]
    comments: Vec<CommentSummary>,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "planning_alerts_digest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: planning_alerts_digest <request.json>");
        std::process::exit(2);
    };

    if let Err(e) = run(&path) {
        tracing::error!(error = %e, "digest failed");
        std::process::exit(1);
    }
}

fn run(path: &str) -> DigestResult<()> {
    let cfg = DigestConfig::from_env();

    let raw = fs::read_to_string(path)
        .map_err(|e| DigestError::InvalidInput(format!("cannot read {path}: {e}")))?;
    let DigestRequest {
        alert,
        applications,
        comments,
    } = serde_json::from_str(&raw)
        .map_err(|e| DigestError::InvalidInput(format!("cannot parse {path}: {e}")))?;

    let composer = DigestComposer::new(&cfg)?;

    let Some(api_key) = cfg.brevo_api_key.clone() else {
        // Preview only: nothing is sent, nothing is counted.
        let message = composer.compose(&alert, &applications, &comments)?;
        println!("{}", serde_json::to_string_pretty(&message)?);
        return Ok(());
    };

    let db = Database::new(cfg.database_path.clone());
    init_db(&db, "sql/schema.sql")?;

    let alerts = SqliteAlerts::new(db.clone());
    let stats = SqliteStats::new(db);
    let mailer = BrevoMailer::new(api_key);

    let dispatcher = Dispatcher::new(&composer, &mailer, &stats, &alerts);
    let (_, message) =
        dispatcher.dispatch_stored(alert.id, &applications, &comments, Utc::now())?;

    info!(to = message.to(), subject = message.subject(), "done");
    Ok(())
}
