//! Time-of-day classification of shift table cells.
//!
//! A cell carries a time text (`"06:15 - 14:00"`, or a single day-off code
//! such as `"XX"`) and an optional custom marker. Classification is a
//! first-match-wins scan over ascending start-time breakpoints; a holiday
//! marker beats everything.
//!
//! Overnight shifts (`"22:00 - 06:30"`) are classified by their start time
//! alone, like any other shift. The end time never moves a cell between
//! buckets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftCategory {
    NightEarly,
    Morning,
    Midday,
    Afternoon,
    Evening,
    DayOff,
    Holiday,
}

impl ShiftCategory {
    pub const ALL: [ShiftCategory; 7] = [
        ShiftCategory::NightEarly,
        ShiftCategory::Morning,
        ShiftCategory::Midday,
        ShiftCategory::Afternoon,
        ShiftCategory::Evening,
        ShiftCategory::DayOff,
        ShiftCategory::Holiday,
    ];

    /// Key used in the persisted color settings record.
    pub fn settings_key(self) -> &'static str {
        match self {
            Self::NightEarly => "nightEarly",
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::DayOff => "dayoff",
            Self::Holiday => "hdag",
        }
    }

    /// Class used by the static stylesheet coloring.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::NightEarly => "night-early",
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::DayOff => "day_off",
            Self::Holiday => "h-dag",
        }
    }

    /// Deep backgrounds that need white foreground text.
    pub fn needs_contrast_text(self) -> bool {
        matches!(self, Self::NightEarly | Self::Evening)
    }

    pub fn from_settings_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.settings_key() == key)
    }
}

/// Upper bound (exclusive, minutes since midnight) of each time bucket.
/// `None` is the unbounded catch-all.
pub const START_BOUNDARIES: [(Option<u32>, ShiftCategory); 5] = [
    (Some(6 * 60), ShiftCategory::NightEarly),
    (Some(8 * 60), ShiftCategory::Morning),
    (Some(12 * 60), ShiftCategory::Midday),
    (Some(17 * 60), ShiftCategory::Afternoon),
    (None, ShiftCategory::Evening),
];

/// Single-token cell texts that mean "not working".
pub const DAY_OFF_CODES: [&str; 4] = ["XX", "OO", "TT", ""];

/// One table cell as it is rendered: the raw time text and the optional
/// custom marker (`"H"` suffix for holidays).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCell {
    #[serde(default, rename = "time", skip_serializing_if = "Option::is_none")]
    pub time_text: Option<String>,
    #[serde(default, rename = "custom", skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<String>,
}

impl ShiftCell {
    pub fn new(time_text: impl Into<String>) -> Self {
        Self {
            time_text: Some(time_text.into()),
            custom_text: None,
        }
    }

    pub fn with_custom(mut self, custom: impl Into<String>) -> Self {
        self.custom_text = Some(custom.into());
        self
    }

    /// Cells without a time text are never classified, marker or not.
    pub fn category(&self) -> Option<ShiftCategory> {
        let time_text = self.time_text.as_deref()?;
        classify(time_text, self.custom_text.as_deref())
    }

    /// The time text with runs of whitespace collapsed, for display.
    pub fn display_time(&self) -> String {
        self.time_text.as_deref().map(normalize_time_text).unwrap_or_default()
    }
}

/// Parsed `"HH:MM - HH:MM"` range in minutes since midnight. The end is
/// kept for display only and may be missing when unparseable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftTime {
    pub start: u32,
    pub end: Option<u32>,
}

impl ShiftTime {
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        Some(Self {
            start: parse_clock(start)?,
            end: parse_clock(end),
        })
    }

    pub fn category(self) -> ShiftCategory {
        classify_start(self.start)
    }
}

/// Classify a cell from its time text and optional custom marker.
///
/// Returns `None` for texts that are neither a parseable range nor a known
/// day-off code.
pub fn classify(time_text: &str, custom_text: Option<&str>) -> Option<ShiftCategory> {
    if custom_text.is_some_and(|c| c.trim().ends_with('H')) {
        return Some(ShiftCategory::Holiday);
    }

    let normalized = normalize_time_text(time_text);
    let tokens: Vec<&str> = normalized.split(" - ").map(str::trim).collect();

    match tokens.as_slice() {
        [single] => DAY_OFF_CODES
            .contains(single)
            .then_some(ShiftCategory::DayOff),
        [start, end, ..] => match ShiftTime::parse(start, end) {
            Some(time) => Some(time.category()),
            None => {
                tracing::warn!(time_text = normalized.as_str(), "unparseable shift time");
                None
            }
        },
        [] => None,
    }
}

/// First bucket whose bound is strictly greater than `start`.
pub fn classify_start(start: u32) -> ShiftCategory {
    START_BOUNDARIES
        .iter()
        .find(|(bound, _)| bound.map_or(true, |max| start < max))
        .map(|(_, category)| *category)
        .unwrap_or(ShiftCategory::Evening)
}

/// `"HH:MM"` → minutes since midnight. Both parts must be plain digits.
pub fn parse_clock(text: &str) -> Option<u32> {
    let mut parts = text.trim().split(':');
    let hours = parse_digits(parts.next()?)?;
    let minutes = parse_digits(parts.next()?)?;
    hours.checked_mul(60)?.checked_add(minutes)
}

fn parse_digits(part: &str) -> Option<u32> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn normalize_time_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
