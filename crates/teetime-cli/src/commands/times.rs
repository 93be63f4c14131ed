use super::portal::{self, BrowserArgs, PortalArgs};
use crate::OutputFormat;
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

/// Bookable tee times for one date
#[derive(Debug, Serialize)]
pub struct AvailableTimes {
    pub date: NaiveDate,
    pub times: Vec<String>,
}

pub fn execute(
    portal_args: PortalArgs,
    browser: &BrowserArgs,
    date: NaiveDate,
    format: OutputFormat,
) -> Result<()> {
    let config = portal_args.into_config()?;
    let runtime = portal::runtime()?;

    let available = runtime.block_on(async {
        let mut session = portal::open_session(config, browser).await?;

        let progress = portal::spinner(&format!("Fetching tee times for {}...", date));
        let times = session.fetch_available(date).await;
        progress.finish_and_clear();

        portal::close_session(session).await;
        anyhow::Ok(AvailableTimes { date, times: times? })
    })?;

    match format {
        OutputFormat::Json => output_json(&available),
        OutputFormat::Pretty => {
            output_pretty(&available);
            Ok(())
        }
    }
}

fn output_pretty(available: &AvailableTimes) {
    use console::style;

    println!(
        "\n{}",
        style(format!("Available tee times on {}", available.date.format("%A, %B %-d, %Y")))
            .bold()
            .cyan()
    );

    if available.times.is_empty() {
        println!("  {}", style("No bookable tee times").yellow());
    } else {
        for time in &available.times {
            println!("  {}", time);
        }
    }

    println!();
}

fn output_json(available: &AvailableTimes) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(available)?);
    Ok(())
}
