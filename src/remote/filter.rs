use std::{cmp::Reverse, collections::HashMap, time::Duration};

use chrono::{DateTime, Utc};

use crate::remote::Video;

/// Uploads shorter than this are Shorts and stay off the lists.
pub const MIN_VIDEO_LENGTH: Duration = Duration::from_secs(60);

/// Parses an ISO-8601 duration such as `PT4M13S` or `P1DT2H`.
/// Years and months are rejected since their length is ambiguous.
pub fn parse_duration(value: &str) -> Option<Duration> {
    let rest = value.strip_prefix('P')?;
    if rest.is_empty() {
        return None;
    }

    let mut secs = 0.0;
    let mut in_time = false;
    let mut number = String::new();
    let mut seen_component = false;

    for ch in rest.chars() {
        match ch {
            'T' if !in_time && number.is_empty() => in_time = true,
            '0'..='9' | '.' | ',' => number.push(if ch == ',' { '.' } else { ch }),
            unit => {
                let amount: f64 = number.parse().ok()?;
                number.clear();
                let scale = match (in_time, unit) {
                    (false, 'W') => 7.0 * 86_400.0,
                    (false, 'D') => 86_400.0,
                    (true, 'H') => 3_600.0,
                    (true, 'M') => 60.0,
                    (true, 'S') => 1.0,
                    _ => return None,
                };
                secs += amount * scale;
                seen_component = true;
            }
        }
    }

    if !number.is_empty() || !seen_component {
        return None;
    }
    Duration::try_from_secs_f64(secs).ok()
}

/// Drops videos known to be shorter than [`MIN_VIDEO_LENGTH`]. Videos whose
/// duration could not be resolved are kept.
pub fn drop_short_videos(videos: Vec<Video>, durations: &HashMap<String, Duration>) -> Vec<Video> {
    videos
        .into_iter()
        .filter(|video| {
            durations
                .get(&video.id)
                .is_none_or(|length| *length >= MIN_VIDEO_LENGTH)
        })
        .collect()
}

/// Sorts by publish time, newest first. Undated items go last.
pub fn newest_first<T>(items: &mut [T], published_at: impl Fn(&T) -> Option<DateTime<Utc>>) {
    items.sort_by_key(|item| Reverse(published_at(item)));
}
