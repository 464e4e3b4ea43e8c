//! Colorful console output for round events.
//!
//! Provides a `tracing` layer that formats engine events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Round and search lifecycle (start, fallback, end)
//! - **WARN**: Infeasible instances and rejected edits
//! - **DEBUG**: Restarts and accepted edits
//! - **TRACE**: Individual repair swaps

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output at `info` unless `RUST_LOG` says otherwise.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_level("info");
}

/// Initializes console output with a default level for the santa crates.
///
/// `RUST_LOG` still takes precedence. Unknown levels fall back to `info`.
pub fn init_with_level(level: &str) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        let level = level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
        if level >= LevelFilter::INFO {
            print_banner();
        }
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "santa={level},santa_engine={level},santa_cli={level}"
            ))
        });

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SantaConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{} {}",
        "santa".bright_red().bold(),
        format!("v{VERSION}").bright_white()
    );
    let _ = stderr.flush();
}

/// A tracing layer that formats santa events with colors.
///
/// Writes to stderr so command output on stdout stays machine-readable.
pub struct SantaConsoleLayer;

impl<S: Subscriber> Layer<S> for SantaConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("santa") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    feasibility: Option<String>,
    first: Option<String>,
    outcome: Option<String>,
    participants: Option<u64>,
    repeat_pairs: Option<u64>,
    restart_limit: Option<u64>,
    repair_passes: Option<u64>,
    restarts: Option<u64>,
    restart: Option<u64>,
    attempts: Option<u64>,
    swaps: Option<u64>,
    violations: Option<u64>,
    remaining_violations: Option<u64>,
    pairs: Option<u64>,
    giver: Option<u64>,
    other: Option<u64>,
    duration_ms: Option<u64>,
    round_year: Option<i64>,
    fallback: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "feasibility" => self.feasibility = Some(s),
            "first" => self.first = Some(s),
            "outcome" => self.outcome = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "participants" => self.participants = Some(value),
            "repeat_pairs" => self.repeat_pairs = Some(value),
            "restart_limit" => self.restart_limit = Some(value),
            "repair_passes" => self.repair_passes = Some(value),
            "restarts" => self.restarts = Some(value),
            "restart" => self.restart = Some(value),
            "attempts" => self.attempts = Some(value),
            "swaps" => self.swaps = Some(value),
            "violations" | "obstructions" => self.violations = Some(value),
            "remaining_violations" => self.remaining_violations = Some(value),
            "pairs" => self.pairs = Some(value),
            "giver" => self.giver = Some(value),
            "other" => self.other = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "round_year" => self.round_year = Some(value as i64),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "round_year" => self.round_year = Some(value),
            _ => self.record_u64(field, value as u64),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "fallback" {
            self.fallback = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "feasibility" => self.feasibility = Some(value.to_string()),
            "first" => self.first = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "search_start" => format_search_start(v),
        "search_end" if v.restarts.is_some() => format_search_solved(v),
        "search_end" => format_search_failed(v),
        "infeasible" => format_infeasible(v),
        "fallback" => format_fallback(v),
        "restart" => format_restart(v),
        "swap" if level == Level::TRACE => format_swap(v),
        "round_started" => format_round_started(v),
        "edit_accepted" => format_edit(v, true),
        "edit_rejected" => format_edit(v, false),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs()).bright_black().to_string()
}

fn format_search_start(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Searching │ {} participants │ {} repeat pairs │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.participants.unwrap_or(0).bright_yellow(),
        v.repeat_pairs.unwrap_or(0).bright_yellow(),
        v.feasibility.as_deref().unwrap_or("unknown").bright_magenta(),
    );
    if let Some(limit) = v.restart_limit {
        output.push_str(&format!(" │ {} restarts max", limit.bright_yellow()));
    }
    if let Some(passes) = v.repair_passes {
        output.push_str(&format!(" │ {} passes/restart", passes.bright_yellow()));
    }
    output
}

fn format_search_solved(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Assigned {} participants │ {} │ {} restarts │ {} swaps",
        format_elapsed(),
        "■".bright_cyan().bold(),
        v.participants.unwrap_or(0).white().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        v.restarts.unwrap_or(0).white(),
        v.swaps.unwrap_or(0).white(),
    );
    if v.fallback == Some(true) {
        output.push_str(&format!(" │ {}", "matching fallback".bright_magenta()));
    }
    output
}

fn format_search_failed(v: &EventVisitor) -> String {
    format!(
        "{} {} No assignment after {} attempts │ {} violations left",
        format_elapsed(),
        "✗".bright_red().bold(),
        v.attempts.unwrap_or(0).bright_yellow(),
        v.violations.unwrap_or(0).bright_red(),
    )
}

fn format_infeasible(v: &EventVisitor) -> String {
    format!(
        "{} {} {} │ {} participants │ {} obstructions",
        format_elapsed(),
        "✗".bright_red().bold(),
        "INFEASIBLE".bright_red().bold(),
        v.participants.unwrap_or(0).bright_yellow(),
        v.violations.unwrap_or(0).bright_red(),
    )
}

fn format_fallback(v: &EventVisitor) -> String {
    format!(
        "{} {} Matching fallback after {} attempts",
        format_elapsed(),
        "↻".bright_blue(),
        v.attempts.unwrap_or(0).bright_yellow(),
    )
}

fn format_restart(v: &EventVisitor) -> String {
    format!(
        "{} {} Restart {:>6} │ {} violations left │ {}",
        format_elapsed(),
        "↻".bright_black(),
        v.restart.unwrap_or(0).white(),
        v.remaining_violations.unwrap_or(0).yellow(),
        v.outcome.as_deref().unwrap_or("").bright_black(),
    )
}

fn format_swap(v: &EventVisitor) -> String {
    format!(
        "{} {} Swap {:>4} ↔ {:<4}",
        format_elapsed(),
        "·".bright_black(),
        v.giver.unwrap_or(0).bright_black(),
        v.other.unwrap_or(0).bright_black(),
    )
}

fn format_round_started(v: &EventVisitor) -> String {
    format!(
        "{} {} Round {} assigned │ {} participants",
        format_elapsed(),
        "★".bright_green().bold(),
        v.round_year.unwrap_or(0).bright_white().bold(),
        v.participants.unwrap_or(0).bright_yellow(),
    )
}

fn format_edit(v: &EventVisitor, accepted: bool) -> String {
    let year = v.round_year.unwrap_or(0);
    if accepted {
        format!(
            "{} {} Edit for {} accepted │ {} pairs",
            format_elapsed(),
            "✓".bright_green(),
            year.white().bold(),
            v.pairs.unwrap_or(0).bright_yellow(),
        )
    } else {
        format!(
            "{} {} Edit for {} rejected │ {} violations │ {}",
            format_elapsed(),
            "✗".bright_red(),
            year.white().bold(),
            v.violations.unwrap_or(0).bright_red(),
            v.first.as_deref().unwrap_or("").yellow(),
        )
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
