use anyhow::Context;
use prometheus::register_counter_vec;
use prometheus::CounterVec;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

lazy_static! {
    pub static ref QUIZ_QUESTIONS_CNTR: CounterVec = register_counter_vec!(
        "trivia_quiz_questions_served_total",
        "Number of questions served to quiz players",
        &["category"]
    )
    .unwrap();
    pub static ref QUESTION_MUTATIONS_CNTR: CounterVec = register_counter_vec!(
        "trivia_questions_mutations_total",
        "Number of created and deleted questions",
        &["operation"]
    )
    .unwrap();
}

/// Used when `LOG_LEVEL` is unset or blank. sqlx logs every statement at info.
const DEFAULT_DIRECTIVES: &str = "info,sqlx=warn";

fn log_filter(directives: Option<&str>) -> anyhow::Result<EnvFilter> {
    let directives = directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVES);
    EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid LOG_LEVEL directives {directives:?}"))
}

fn span_events(flag: Option<&str>) -> FmtSpan {
    match flag.map(str::trim) {
        Some(flag) if flag == "1" || flag.eq_ignore_ascii_case("true") => {
            FmtSpan::ENTER | FmtSpan::EXIT
        }
        _ => FmtSpan::NONE,
    }
}

/// Installs the global subscriber. `LOG_LEVEL` takes `EnvFilter` directives,
/// `INCLUDE_SPAN_EVENTS=true` logs span enter and exit.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = log_filter(std::env::var("LOG_LEVEL").ok().as_deref())?;
    let fmt_layer = fmt::layer()
        .with_span_events(span_events(std::env::var("INCLUDE_SPAN_EVENTS").ok().as_deref()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("Tracing subscriber already installed")
}
