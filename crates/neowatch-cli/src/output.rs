use std::io::{self, Write};

use neowatch_core::{AsteroidRecord, FeedDate, Summary, View};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

const EMPTY_VIEW_MESSAGE: &str = "No asteroids found with these criteria.";

/// Everything one invocation prints.
#[derive(Debug, Serialize)]
pub struct Report {
    pub view: View,
    pub dates: Vec<FeedDate>,
    pub days_loaded: usize,
    pub summary: Option<Summary>,
    /// `None` when only the summary was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asteroids: Option<Vec<AsteroidRecord>>,
}

pub fn render(report: &Report, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_to(&mut out, report, format, pretty)?;
    out.flush()?;
    Ok(())
}

pub fn render_to<W: Write>(
    out: &mut W,
    report: &Report,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => render_table(out, report)?,
    }

    Ok(())
}

fn render_table<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    if let (Some(first), Some(last)) = (report.dates.first(), report.dates.last()) {
        writeln!(
            out,
            "week        : {first} .. {last} ({}/{} days loaded)",
            report.days_loaded,
            report.dates.len()
        )?;
    }

    match &report.summary {
        Some(summary) => {
            writeln!(out, "total       : {}", summary.total)?;
            writeln!(out, "hazardous   : {}", summary.hazardous)?;
            writeln!(
                out,
                "largest     : {} ({} m)",
                summary.largest.name,
                format_number(summary.largest.diameter_max)
            )?;
            writeln!(
                out,
                "closest     : {} ({})",
                summary.closest.name,
                format_distance(summary.closest.distance)
            )?;
        }
        None if report.asteroids.is_none() => writeln!(out, "{EMPTY_VIEW_MESSAGE}")?,
        None => {}
    }

    let Some(asteroids) = &report.asteroids else {
        return Ok(());
    };

    writeln!(out)?;
    writeln!(out, "view        : {}", report.view)?;
    if asteroids.is_empty() {
        writeln!(out, "{EMPTY_VIEW_MESSAGE}")?;
        return Ok(());
    }

    for asteroid in asteroids {
        writeln!(out)?;
        render_card(out, asteroid)?;
    }
    Ok(())
}

fn render_card<W: Write>(out: &mut W, asteroid: &AsteroidRecord) -> io::Result<()> {
    let badge = if asteroid.hazardous {
        "HAZARDOUS"
    } else {
        "safe"
    };
    writeln!(out, "{}  [{badge}]", asteroid.name)?;
    writeln!(
        out,
        "  size     : {} - {} m",
        format_number(asteroid.diameter_min),
        format_number(asteroid.diameter_max)
    )?;
    writeln!(out, "  velocity : {} km/h", format_number(asteroid.velocity))?;
    writeln!(out, "  distance : {}", format_distance(asteroid.distance))
}

/// Rounds to a whole number and groups thousands with commas.
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Millions of km with two decimals from 1,000,000 km up, whole km below.
pub fn format_distance(km: f64) -> String {
    if km >= 1_000_000.0 {
        format!("{:.2} million km", km / 1_000_000.0)
    } else {
        format!("{} km", format_number(km))
    }
}
