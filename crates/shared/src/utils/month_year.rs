use crate::errors::ConversionError;
use chrono::{Datelike, Months, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{fmt, str::FromStr, sync::LazyLock};

static MONTH_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])-(\d{4})$").expect("month-year pattern is valid")
});

/// A month-aligned date carried on the wire as `MM-YYYY`.
///
/// The inner date always sits on day 1 of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthYear(NaiveDate);

impl MonthYear {
    pub const FORMAT: &'static str = "%m-%Y";

    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    pub fn parse(value: &str) -> Result<Self, ConversionError> {
        let captures = MONTH_YEAR_RE
            .captures(value)
            .ok_or_else(|| ConversionError::DateFormat(value.to_string()))?;

        let month = captures[1]
            .parse::<u32>()
            .map_err(|_| ConversionError::DateFormat(value.to_string()))?;
        let year = captures[2]
            .parse::<i32>()
            .map_err(|_| ConversionError::DateFormat(value.to_string()))?;

        Self::new(year, month).ok_or_else(|| ConversionError::DateFormat(value.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Day 1 of the following calendar month.
    pub fn next_month(&self) -> NaiveDate {
        self.0
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format(Self::FORMAT).to_string()
    }
}

impl From<NaiveDate> for MonthYear {
    fn from(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for MonthYear {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MonthYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        MonthYear::parse(&raw).map_err(de::Error::custom)
    }
}
