//! Query and result types for the scheduling services.
use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Weekday};

use shared::{CalendarConfig, DaySchedule, ShiftWeekRequest, WeekDirection, WeekView, WeekViewRequest};

/// Inputs for assembling a week view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekViewQuery {
    /// The day the user has selected
    pub selected_date: NaiveDate,
    /// Start of the window currently on screen, if any
    pub window_start: Option<NaiveDate>,
    /// Week-start convention in effect
    pub week_start: Weekday,
}

impl WeekViewQuery {
    /// Parse a wire request against the calendar configuration.
    pub fn from_request(request: &WeekViewRequest, config: &CalendarConfig) -> Result<Self> {
        let selected_date: NaiveDate = request
            .selected_date
            .parse()
            .with_context(|| format!("Invalid selected date: {}", request.selected_date))?;

        let window_start = match &request.window_start {
            Some(value) => Some(
                value
                    .parse()
                    .with_context(|| format!("Invalid window start: {}", value))?,
            ),
            None => None,
        };

        Ok(Self {
            selected_date,
            window_start,
            week_start: week_start_weekday(config)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekViewResult {
    pub view: WeekView,
}

/// Inputs for the day-schedule detail feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayScheduleQuery {
    pub day: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayScheduleResult {
    pub schedule: DaySchedule,
}

/// Inputs for a week navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWeekQuery {
    pub window_start: NaiveDate,
    pub direction: WeekDirection,
}

impl ShiftWeekQuery {
    /// Parse a wire navigation request.
    pub fn from_request(request: &ShiftWeekRequest) -> Result<Self> {
        let window_start: NaiveDate = request
            .window_start
            .parse()
            .with_context(|| format!("Invalid window start: {}", request.window_start))?;
        Ok(Self {
            window_start,
            direction: request.direction,
        })
    }
}

/// Resolve the configured week-start index to a weekday.
pub fn week_start_weekday(config: &CalendarConfig) -> Result<Weekday> {
    let weekday = match config.week_start {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        other => bail!("Invalid week start: {}. Must be between 0 and 6", other),
    };
    Ok(weekday)
}
