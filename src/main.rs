// Calendar Timeline
// Prints the day/week layout of an event file as JSON

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::path::{Path, PathBuf};

use calendar_timeline::models::event::CalendarEvent;
use calendar_timeline::models::geometry::EventGeometry;
use calendar_timeline::models::settings::TimelineSettings;
use calendar_timeline::services::settings::SettingsService;
use calendar_timeline::ui_egui::views::{TimelineView, ViewKind};

const USAGE: &str = "usage: calendar-timeline <events.json> [--week|--day] [YYYY-MM-DD]";

struct Args {
    events_path: PathBuf,
    kind: ViewKind,
    date: NaiveDate,
}

#[derive(Serialize)]
struct DayOutput {
    date: NaiveDate,
    entries: Vec<EventGeometry>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut events_path = None;
    let mut kind = ViewKind::Week;
    let mut date = None;

    for arg in args {
        match arg.as_str() {
            "--week" => kind = ViewKind::Week,
            "--day" => kind = ViewKind::Day,
            flag if flag.starts_with("--") => bail!("unknown option {}\n{}", flag, USAGE),
            value if events_path.is_none() => events_path = Some(PathBuf::from(value)),
            value if date.is_none() => {
                let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .with_context(|| format!("invalid date '{}'", value))?;
                date = Some(parsed);
            }
            value => bail!("unexpected argument {}\n{}", value, USAGE),
        }
    }

    let Some(events_path) = events_path else {
        bail!(USAGE);
    };

    Ok(Args {
        events_path,
        kind,
        date: date.unwrap_or_else(|| Local::now().date_naive()),
    })
}

fn load_settings() -> TimelineSettings {
    let loaded = SettingsService::from_default_location().and_then(|service| service.get());
    match loaded {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Using default timeline settings: {:#}", err);
            TimelineSettings::default()
        }
    }
}

fn load_events(path: &Path) -> Result<Vec<CalendarEvent>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    let events: Vec<CalendarEvent> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse events in {}", path.display()))?;

    for event in &events {
        if let Err(err) = event.validate() {
            log::warn!("Event {} is malformed ({}), laying out at minimum height", event.id, err);
        }
    }
    Ok(events)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args(std::env::args().skip(1))?;
    let settings = load_settings();
    let events = load_events(&args.events_path)?;
    log::info!(
        "Laying out {} events for {:?} of {}",
        events.len(),
        args.kind,
        args.date
    );

    let mut view = match args.kind {
        ViewKind::Day => TimelineView::day(args.date, settings),
        ViewKind::Week => TimelineView::week(args.date, settings),
    };
    view.set_events(events);

    let output: Vec<DayOutput> = view
        .layouts()
        .into_iter()
        .map(|layout| DayOutput {
            date: layout.date(),
            entries: layout.iter().copied().collect(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize layout")?;
    println!("{}", json);
    Ok(())
}
