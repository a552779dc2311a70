//! `epgrid schedule` command implementation.

use serde::Serialize;

use crate::config::Config;
use crate::model::{Channel, DataError, Event, GuideData, Millis};
use crate::render::TimeFormat;

#[derive(Debug, Serialize)]
struct ScheduleEntry<'a> {
    #[serde(flatten)]
    event: &'a Event,
    on_now: bool,
    recording: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    recording_status: Option<&'static str>,
}

pub async fn run(config: &Config, channel: &str, json: bool) -> anyhow::Result<()> {
    let now = super::now_millis();
    let data = super::load_data(config, now)?;
    let found = find_channel(&data, channel)?;

    let layout = config.guide.layout();
    let entries = entries(&data, found, now - layout.look_back, now + layout.look_forward, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{} ({})", found.name, found.id);
    if entries.is_empty() {
        println!("  No programmes in the guide window");
        return Ok(());
    }
    let format = TimeFormat::from_minutes(config.tui.utc_offset_minutes);
    for entry in &entries {
        println!("{}", format_entry(entry, &format));
    }

    Ok(())
}

/// Look a channel up by id, by name (case-insensitive) or by 1-based number.
fn find_channel<'a>(data: &'a GuideData, wanted: &str) -> Result<&'a Channel, DataError> {
    let channels = data.channels();
    channels
        .iter()
        .find(|c| c.id == wanted)
        .or_else(|| channels.iter().find(|c| c.name.eq_ignore_ascii_case(wanted)))
        .or_else(|| {
            wanted
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|position| data.channel(position))
        })
        .ok_or_else(|| DataError::ChannelNotFound(wanted.to_string()))
}

/// Events overlapping `[from, to)`.
fn entries<'a>(
    data: &'a GuideData,
    channel: &'a Channel,
    from: Millis,
    to: Millis,
    now: Millis,
) -> Vec<ScheduleEntry<'a>> {
    channel
        .events
        .iter()
        .filter(|event| event.end > from && event.start < to)
        .map(|event| {
            let status = data.recording(event).map(|r| r.status.label());
            ScheduleEntry {
                event,
                on_now: event.is_current(now),
                recording: status.is_some(),
                recording_status: status,
            }
        })
        .collect()
}

fn format_entry(entry: &ScheduleEntry<'_>, format: &TimeFormat) -> String {
    let event = entry.event;
    let mut line = format!(
        "{} {} {}",
        if entry.on_now { ">" } else { " " },
        format.time_frame(event.start, event.end),
        event.title
    );
    if let Some(subtitle) = &event.subtitle {
        line.push_str(": ");
        line.push_str(subtitle);
    }
    if let Some(status) = entry.recording_status {
        line.push_str(&format!("  [REC {}]", status));
    }
    line
}
