use chrono::{Datelike, Duration, Local, NaiveDateTime, Timelike};

/// Display-only snapshot of the run's date, taken once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInfo {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub week_start_month: u32,
    pub week_start_day: u32,
    /// `2025年1月9日`, no zero padding.
    pub formatted: String,
    /// `HH:MM`, 24h.
    pub time: String,
}

impl DateInfo {
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    pub fn from_datetime(now: NaiveDateTime) -> Self {
        let week_start = now - Duration::days(6);
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
            week_start_month: week_start.month(),
            week_start_day: week_start.day(),
            formatted: format!("{}年{}月{}日", now.year(), now.month(), now.day()),
            time: format!("{:02}:{:02}", now.hour(), now.minute()),
        }
    }
}
