//! Pure conversions from raw API fields to display strings.

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::{Captures, Regex};
use search_logging::search_warn;

use crate::{DisplayArticle, RawArticle};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Shown in place of a date the API sent in a form we cannot read.
pub const UNKNOWN_DATE: &str = "Unknown date";

/// Titles of landing pages that summarise a whole issue or listing.
const OVERVIEW_TITLES: &[&str] = &["Calendar", "Newsletter"];

/// Titles of site pages that are neither articles nor overviews.
const OTHER_TITLES: &[&str] = &[
    "Workshops",
    "Conference Presentations",
    "Contact Us",
    "How to Join",
    "Team Members",
    "Home",
    "Research",
    "POES",
    "Newsletter Search",
];

fn numeric_entity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"&#([0-9]{1,5});").expect("valid entity regex"))
}

fn byline_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<em>by(.*?)<").expect("valid byline regex"))
}

fn issue_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)Issue [0-9]{1,3}").expect("valid issue regex"))
}

/// Formats an ISO-8601 timestamp as `"Mon Year"`, e.g. `"Jul 2022"`.
///
/// Accepts the offset-less form WordPress uses for `date`, RFC 3339 with an
/// offset, and a bare calendar date. Anything else yields [`UNKNOWN_DATE`].
pub fn format_date(iso: &str) -> String {
    match parse_calendar_date(iso) {
        Some(date) => format!("{} {}", MONTHS[date.month0() as usize], date.year()),
        None => {
            search_warn!("Unparsable article date {:?}", iso);
            UNKNOWN_DATE.to_string()
        }
    }
}

fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(naive) = trimmed.parse::<NaiveDateTime>() {
        return Some(naive.date());
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Decodes numeric character references (`&#38;` -> `&`).
///
/// Named entities such as `&amp;` are left untouched, and so is any numeric
/// reference that does not name a Unicode scalar value.
pub fn format_title(raw: &str) -> String {
    numeric_entity_re()
        .replace_all(raw, |caps: &Captures| {
            caps[1]
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Derives the author line shown under a result.
///
/// `title` is the rendered title as received, before entity decoding.
pub fn format_author(content_html: &str, title: &str) -> String {
    if let Some(caps) = byline_re().captures(content_html) {
        return format!("by {}", caps[1].trim_start());
    }
    if issue_re().is_match(title) || OVERVIEW_TITLES.contains(&title) {
        return "Overview".to_string();
    }
    if OTHER_TITLES.contains(&title) {
        return "Other".to_string();
    }
    "Spotlight".to_string()
}

pub fn format_article(raw: &RawArticle) -> DisplayArticle {
    DisplayArticle {
        id: raw.id,
        title: format_title(&raw.title_html),
        author: format_author(&raw.content_html, &raw.title_html),
        date: format_date(&raw.date),
        link: raw.link.clone(),
    }
}

pub fn format_articles(raw: &[RawArticle]) -> Vec<DisplayArticle> {
    raw.iter().map(format_article).collect()
}
