use std::str::FromStr;

use chrono::Duration;
use kansou_client::{api::Time, Theme};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// Below this width the form and the list are stacked
const STACKED_LAYOUT_MAX_WIDTH: f64 = 992.;

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        chrono_tz::Tz::from_str(&get_timezone()).unwrap_or_else(|_| {
            tracing::warn!("host js timezone is not in chrono-tz database, using UTC");
            chrono_tz::UTC
        })
    };
}

pub fn local_tz() -> chrono_tz::Tz {
    LOCAL_TZ.clone()
}

/// eg. "Nov 14, 2023, 10:13 PM"
pub fn posted_on(date: &Time, tz: &chrono_tz::Tz) -> String {
    date.with_timezone(tz)
        .format("%b %-d, %Y, %I:%M %p")
        .to_string()
}

/// How long ago a comment was posted, or its day if it was more than a week ago
pub fn ago(now: &Time, date: &Time, tz: &chrono_tz::Tz) -> String {
    let elapsed = now.signed_duration_since(*date);
    if elapsed < Duration::minutes(1) {
        String::from("Just now")
    } else if elapsed < Duration::hours(1) {
        format!("{} min ago", elapsed.num_minutes())
    } else if elapsed < Duration::days(1) {
        format!("{} hr ago", elapsed.num_hours())
    } else if elapsed < Duration::weeks(1) {
        format!("{} days ago", elapsed.num_days())
    } else {
        date.with_timezone(tz).format("%b %-d").to_string()
    }
}

pub fn stars(filled: u8, out_of: u8) -> String {
    let filled = filled.min(out_of) as usize;
    "★".repeat(filled) + &"☆".repeat(out_of as usize - filled)
}

pub fn plural(n: usize, word: &str) -> String {
    match n {
        1 => format!("{n} {word}"),
        _ => format!("{n} {word}s"),
    }
}

pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn apply_theme(theme: Theme) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    match body {
        None => tracing::warn!("no document body to apply the theme to"),
        Some(body) => {
            if let Err(err) = body.class_list().toggle_with_force("dark-mode", theme.is_dark()) {
                tracing::warn!(?err, "failed applying theme");
            }
        }
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn is_stacked_layout() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| w < STACKED_LAYOUT_MAX_WIDTH)
        .unwrap_or(false)
}

pub fn scroll_into_view(elt: &web_sys::Element) {
    let mut options = web_sys::ScrollIntoViewOptions::new();
    options.behavior(web_sys::ScrollBehavior::Smooth);
    elt.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Time {
        s.parse().unwrap()
    }

    #[test]
    fn relative_dates() {
        let tz = chrono_tz::UTC;
        let now = at("2024-03-20T12:00:00Z");
        assert_eq!(ago(&now, &at("2024-03-20T11:59:30Z"), &tz), "Just now");
        assert_eq!(ago(&now, &at("2024-03-20T12:00:05Z"), &tz), "Just now");
        assert_eq!(ago(&now, &at("2024-03-20T11:15:00Z"), &tz), "45 min ago");
        assert_eq!(ago(&now, &at("2024-03-20T09:00:00Z"), &tz), "3 hr ago");
        assert_eq!(ago(&now, &at("2024-03-18T12:00:00Z"), &tz), "2 days ago");
        assert_eq!(ago(&now, &at("2024-03-01T12:00:00Z"), &tz), "Mar 1");
    }

    #[test]
    fn absolute_dates() {
        let date = at("2023-11-14T22:13:20Z");
        assert_eq!(posted_on(&date, &chrono_tz::UTC), "Nov 14, 2023, 10:13 PM");
        assert_eq!(
            posted_on(&date, &chrono_tz::Europe::Paris),
            "Nov 14, 2023, 11:13 PM"
        );
    }

    #[test]
    fn star_strings() {
        assert_eq!(stars(4, 5), "★★★★☆");
        assert_eq!(stars(0, 5), "☆☆☆☆☆");
        assert_eq!(stars(9, 5), "★★★★★");
    }

    #[test]
    fn plurals() {
        assert_eq!(plural(1, "comment"), "1 comment");
        assert_eq!(plural(0, "Like"), "0 Likes");
        assert_eq!(plural(3, "comment"), "3 comments");
    }
}
