//! Serializable views of query results and their text rendering.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use lunisolar_calendar::{LunarDate, LunarMonth};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolved output settings.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// strftime pattern for Gregorian dates.
    pub date_format: String,
}

impl OutputOptions {
    fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

/// A result that can be printed as text or JSON.
pub trait Render: Serialize {
    fn text(&self) -> String;
}

/// Renders `view` in the configured format.
pub fn render<T: Render>(view: &T, options: &OutputOptions) -> Result<String> {
    match options.format {
        OutputFormat::Text => Ok(view.text()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(view).context("failed to serialize output as JSON")
        }
    }
}

/// A lunar date paired with its Gregorian counterpart.
#[derive(Debug, Serialize)]
pub struct DatePair {
    pub solar: String,
    pub lunar: LunarView,
    #[serde(skip)]
    lunar_text: String,
}

#[derive(Debug, Serialize)]
pub struct LunarView {
    pub year: i32,
    pub leap: bool,
    pub month: u8,
    pub day: u8,
}

impl DatePair {
    pub fn new(lunar: LunarDate, solar: NaiveDate, options: &OutputOptions) -> Self {
        Self {
            solar: options.date(solar),
            lunar: LunarView {
                year: lunar.year(),
                leap: lunar.is_leap(),
                month: lunar.month(),
                day: lunar.day(),
            },
            lunar_text: lunar.to_string(),
        }
    }
}

/// Output of `to-lunar`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ToLunarView(pub DatePair);

impl Render for ToLunarView {
    fn text(&self) -> String {
        format!("{} -> {}", self.0.solar, self.0.lunar_text)
    }
}

/// Output of `to-solar`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ToSolarView(pub DatePair);

impl Render for ToSolarView {
    fn text(&self) -> String {
        format!("{} -> {}", self.0.lunar_text, self.0.solar)
    }
}

/// One lunar month.
#[derive(Debug, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u8,
    pub leap: bool,
    pub days: u8,
    pub start: String,
    pub end: String,
}

impl MonthView {
    pub fn from_month(month: LunarMonth, options: &OutputOptions) -> Self {
        Self {
            year: month.year(),
            month: month.month(),
            leap: month.is_leap(),
            days: month.days(),
            start: options.date(month.start()),
            end: options.date(month.end()),
        }
    }

    fn label(&self) -> String {
        let leap = if self.leap { "L" } else { "" };
        format!("{:04}-{leap}{:02}", self.year, self.month)
    }
}

impl Render for MonthView {
    fn text(&self) -> String {
        format!(
            "{}: {} days ({} .. {})",
            self.label(),
            self.days,
            self.start,
            self.end
        )
    }
}

/// Output of `year`.
#[derive(Debug, Serialize)]
pub struct YearView {
    pub year: i32,
    pub leap_month: Option<u8>,
    pub months_in_year: u8,
    /// `None` when the year's final month has no known end.
    pub days: Option<u16>,
    pub months: Vec<MonthView>,
}

impl Render for YearView {
    fn text(&self) -> String {
        let leap = match self.leap_month {
            Some(m) => format!("leap month {m}"),
            None => "no leap month".to_string(),
        };
        let days = match self.days {
            Some(d) => format!("{d} days"),
            None => "length unknown".to_string(),
        };
        let mut lines = vec![format!(
            "{}: {} months, {days}, {leap}",
            self.year, self.months_in_year
        )];
        lines.extend(self.months.iter().map(|m| format!("  {}", m.text())));
        if self.months.len() < usize::from(self.months_in_year) {
            lines.push("  final month: length unknown, no end marker in the table".to_string());
        }
        lines.join("\n")
    }
}
