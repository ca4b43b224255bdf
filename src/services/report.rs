//! Presentation of cycle results. Reads pipeline output only.

use crate::services::{CycleReport, SignalLog};
use crate::types::{HistoryEntry, IndicatorKind};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{self, Write};

/// Serializable view of one cycle plus the recent history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportView<'a> {
    report: &'a CycleReport,
    history: Vec<&'a HistoryEntry>,
    signal_count: u64,
}

fn format_time(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}

/// Plain-text report.
pub fn render_text(report: &CycleReport, log: &SignalLog) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    if write_report(&mut out, report, log).is_err() {
        out.clear();
    }
    out
}

fn write_report(out: &mut String, report: &CycleReport, log: &SignalLog) -> fmt::Result {
    let overall = &report.overall;
    writeln!(
        out,
        "{} | Confidence: {} | Price: ${:.2}",
        overall.call, overall.confidence, report.price
    )?;

    let statuses: Vec<String> = report
        .signals
        .iter()
        .map(|(kind, signal)| format!("{}: {}", kind.id().to_uppercase(), signal.direction))
        .collect();
    writeln!(out, "  {}", statuses.join("  "))?;

    writeln!(out, "Reasoning:")?;
    for kind in IndicatorKind::ALL {
        writeln!(out, "  - {}: {}", kind.name(), report.signals.get(kind).reason)?;
    }

    if let Some(targets) = &report.targets {
        writeln!(
            out,
            "Target: ${:.2}  Stop: ${:.2}",
            targets.target_price, targets.stop_price
        )?;
    }

    writeln!(out, "History ({} signals):", log.total_recorded())?;
    for entry in log.entries() {
        writeln!(
            out,
            "  {} - {}  ${:.2}",
            format_time(entry.timestamp),
            entry.call,
            entry.price
        )?;
    }

    Ok(())
}

/// JSON report.
pub fn render_json(report: &CycleReport, log: &SignalLog) -> serde_json::Result<String> {
    let view = ReportView {
        report,
        history: log.entries().collect(),
        signal_count: log.total_recorded(),
    };
    serde_json::to_string_pretty(&view)
}
