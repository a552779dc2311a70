//! `epgrid channels` command implementation.

use serde::Serialize;

use crate::config::Config;
use crate::model::{Event, GuideData, Millis};
use crate::render::TimeFormat;

#[derive(Debug, Serialize)]
struct ChannelSummary<'a> {
    number: usize,
    id: &'a str,
    name: &'a str,
    logo: Option<&'a str>,
    on_now: Option<&'a Event>,
    recording: bool,
}

pub async fn run(config: &Config, json: bool) -> anyhow::Result<()> {
    let now = super::now_millis();
    let data = super::load_data(config, now)?;
    let summaries = summarize(&data, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else if summaries.is_empty() {
        println!("No channels found");
    } else {
        let format = TimeFormat::from_minutes(config.tui.utc_offset_minutes);
        for summary in &summaries {
            println!("{}", format_line(summary, &format));
        }
    }

    Ok(())
}

fn summarize(data: &GuideData, now: Millis) -> Vec<ChannelSummary<'_>> {
    data.channels()
        .iter()
        .map(|channel| {
            let on_now = data.event_at(channel.position, now).map(|(_, event)| event);
            ChannelSummary {
                number: channel.position + 1,
                id: &channel.id,
                name: &channel.name,
                logo: channel.logo.as_deref(),
                on_now,
                recording: on_now.is_some_and(|event| data.has_recording(event)),
            }
        })
        .collect()
}

fn format_line(summary: &ChannelSummary<'_>, format: &TimeFormat) -> String {
    let now = match summary.on_now {
        Some(event) => format!(
            "{}  {}{}",
            format.time_frame(event.start, event.end),
            event.title,
            if summary.recording { "  [REC]" } else { "" }
        ),
        None => "No programme information".to_string(),
    };
    format!("{:>3}  {:<22} {}", summary.number, summary.name, now)
}
