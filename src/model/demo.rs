//! Deterministic demo schedule.
//!
//! Used when no schedule file is configured so the guide always has something
//! to show. Events are back-to-back, start on half-hour marks and cover the
//! requested window on every channel.

use super::{Channel, Event, GuideData, Millis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const HALF_HOUR: Millis = 30 * 60 * 1000;

const CHANNEL_NAMES: &[&str] = &[
    "Northern Lights",
    "Metro News 24",
    "Harbour Sports",
    "Cinema Classics",
    "Kids Zone",
    "Planet Wild",
    "Culture One",
    "Retro TV",
    "Science Now",
    "Music Box",
    "Travel Channel East",
    "Parliament Live",
];

const TITLES: &[(&str, Option<&str>)] = &[
    ("Morning Briefing", None),
    ("World Tonight", Some("Late edition")),
    ("Match of the Week", Some("Quarter final")),
    ("The Long Voyage", None),
    ("Garden Rescue", Some("Series 4, Episode 2")),
    ("Deep Blue", Some("The Abyss")),
    ("Quiz Night", None),
    ("Weather", None),
    ("Detectives", Some("The Missing Key")),
    ("Cooking with Ana", Some("Autumn soups")),
    ("Space Frontiers", None),
    ("Live at the Hall", Some("Symphony No. 5")),
];

const DESCRIPTIONS: &[&str] = &[
    "A closer look at the stories shaping the day, with reports from around the country.",
    "Highlights, interviews and analysis from the weekend's fixtures.",
    "An award-winning documentary following a year in the life of a coastal community.",
    "Classic feature presentation, restored and remastered.",
];

const DURATIONS: &[Millis] = &[HALF_HOUR, HALF_HOUR, 2 * HALF_HOUR, 3 * HALF_HOUR, 4 * HALF_HOUR];

/// Generate `channel_count` channels with events covering `[from, to)`.
pub fn generate(channel_count: usize, from: Millis, to: Millis, seed: u64) -> GuideData {
    let mut rng = StdRng::seed_from_u64(seed);
    let first_start = from - from.rem_euclid(HALF_HOUR);

    let channels = (0..channel_count)
        .map(|position| {
            let name = CHANNEL_NAMES[position % CHANNEL_NAMES.len()];
            let id = format!("ch{:02}", position + 1);

            let mut events = Vec::new();
            let mut start = first_start;
            while start < to {
                let end = start + DURATIONS[rng.random_range(0..DURATIONS.len())];
                let (title, subtitle) = TITLES[rng.random_range(0..TITLES.len())];
                let description = rng
                    .random_bool(0.7)
                    .then(|| DESCRIPTIONS[rng.random_range(0..DESCRIPTIONS.len())].to_string());
                events.push(Event {
                    channel_id: id.clone(),
                    start,
                    end,
                    title: title.to_string(),
                    subtitle: subtitle.map(str::to_string),
                    description,
                });
                start = end;
            }

            Channel {
                position,
                name: if position < CHANNEL_NAMES.len() {
                    name.to_string()
                } else {
                    format!("{} {}", name, position / CHANNEL_NAMES.len() + 1)
                },
                id,
                logo: None,
                events,
            }
        })
        .collect();

    GuideData::new(channels, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Millis = 2 * HALF_HOUR;

    #[test]
    fn test_generate_covers_window_without_gaps() {
        let from = 1_000 * HOUR + 1234;
        let to = from + 26 * HOUR;
        let data = generate(5, from, to, 7);
        assert_eq!(data.channel_count(), 5);

        for pos in 0..5 {
            let events = data.events(pos);
            assert!(events.first().unwrap().start <= from);
            assert!(events.last().unwrap().end >= to);
            for pair in events.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate(3, 0, 10 * HOUR, 42);
        let b = generate(3, 0, 10 * HOUR, 42);
        assert_eq!(a.events(2), b.events(2));
    }

    #[test]
    fn test_generate_unique_ids_beyond_name_list() {
        let data = generate(CHANNEL_NAMES.len() + 2, 0, HOUR, 1);
        let last = data.channel(CHANNEL_NAMES.len() + 1).unwrap();
        assert_eq!(last.id, format!("ch{:02}", CHANNEL_NAMES.len() + 2));
        assert!(last.name.ends_with(" 2"));
    }
}
