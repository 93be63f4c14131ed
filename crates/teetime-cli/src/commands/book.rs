use super::portal::{self, BrowserArgs, PortalArgs};
use crate::OutputFormat;
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use teetime_browser::{BookingSession, ChromeDriver};
use teetime_core::{SelectionPolicy, TimeOfDay};

/// What the book command picked and whether it was submitted
#[derive(Debug, Serialize)]
pub struct BookingReport {
    pub date: NaiveDate,
    pub requested: TimeOfDay,
    pub policy: String,
    pub available: Vec<String>,
    pub selected: String,
    pub submitted: bool,
}

/// Options for a single booking run
#[derive(Debug, Clone, Copy)]
pub struct BookRequest {
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub policy: SelectionPolicy,
    pub dry_run: bool,
}

pub fn execute(
    portal_args: PortalArgs,
    browser: &BrowserArgs,
    request: BookRequest,
    format: OutputFormat,
) -> Result<()> {
    let config = portal_args.into_config()?;
    let runtime = portal::runtime()?;

    let report = runtime.block_on(async {
        let mut session = portal::open_session(config, browser).await?;
        let report = run(&mut session, request).await;
        portal::close_session(session).await;
        report
    })?;

    match format {
        OutputFormat::Json => output_json(&report),
        OutputFormat::Pretty => {
            output_pretty(&report);
            Ok(())
        }
    }
}

async fn run(
    session: &mut BookingSession<ChromeDriver>,
    request: BookRequest,
) -> Result<BookingReport> {
    let progress = portal::spinner(&format!("Fetching tee times for {}...", request.date));
    let available = session.fetch_available(request.date).await;
    progress.finish_and_clear();
    let available = available?;

    let selected = session
        .set_target_time(request.time, request.policy)?
        .display_text()
        .to_string();

    if request.dry_run {
        tracing::info!("Dry run: not submitting {}", selected);
    } else {
        let progress = portal::spinner(&format!("Booking {}...", selected));
        let booked = session.book().await;
        progress.finish_and_clear();
        booked?;
    }

    Ok(BookingReport {
        date: request.date,
        requested: request.time,
        policy: request.policy.to_string(),
        available,
        selected,
        submitted: !request.dry_run,
    })
}

fn output_pretty(report: &BookingReport) {
    use console::style;

    println!(
        "\n{}",
        style(format!("Tee time on {}", report.date.format("%A, %B %-d, %Y")))
            .bold()
            .cyan()
    );
    println!("  Requested:  {} ({})", report.requested, report.policy);
    println!("  Available:  {}", report.available.join(", "));

    if report.submitted {
        println!(
            "  Booked:     {}",
            style(&report.selected).green().bold()
        );
    } else {
        println!(
            "  Selected:   {} {}",
            style(&report.selected).bold(),
            style("(dry run, not submitted)").dim()
        );
    }

    println!();
}

fn output_json(report: &BookingReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
