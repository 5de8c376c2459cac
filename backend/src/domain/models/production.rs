//! Domain model for a production booking.
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::DisplayCategory;

/// Booking status with an open tail: the remote store may introduce new
/// status strings at any time, so anything unrecognized is carried in
/// `Other` instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductionStatus {
    Confirmed,
    Completed,
    Cancelled,
    Overtime,
    Other(String),
}

impl ProductionStatus {
    /// Map this status onto the closed set of indicator categories.
    /// Total: unknown statuses classify as `Unknown`, never an error.
    pub fn display_category(&self) -> DisplayCategory {
        match self {
            ProductionStatus::Confirmed => DisplayCategory::Confirmed,
            ProductionStatus::Completed => DisplayCategory::Completed,
            ProductionStatus::Cancelled => DisplayCategory::Cancelled,
            ProductionStatus::Overtime => DisplayCategory::Overtime,
            ProductionStatus::Other(_) => DisplayCategory::Unknown,
        }
    }
}

/// A scheduled shoot with parsed dates.
///
/// `date` is the calendar day the booking sheet files the shoot under, and it
/// alone decides day-bucket placement: a shoot that runs past midnight stays
/// under its sheet date rather than being split across two days, even when
/// `start_time`'s calendar day disagrees with `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Production {
    pub id: String,
    pub name: String,
    pub venue: String,
    pub date: NaiveDate,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub status: ProductionStatus,
}

impl Production {
    /// Check the occupied interval. `end_time` must be strictly after
    /// `start_time`; violations surface at registry build time.
    pub fn validate_interval(&self) -> Result<(), ScheduleError> {
        if self.end_time <= self.start_time {
            return Err(ScheduleError::InvalidInterval {
                id: self.id.clone(),
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }
}

/// Reasons a record is refused by the registry build.
///
/// These are per-record recoverable conditions: the offending production is
/// excluded and reported while the rest of the batch still indexes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("production {id}: end time {end} is not after start time {start}")]
    InvalidInterval {
        id: String,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },
    #[error("production {id}: cannot parse {field} {value:?}")]
    UnparseableDate {
        id: String,
        field: &'static str,
        value: String,
    },
}

/// Converts between the wire DTOs and the domain model.
pub struct ProductionMapper;

impl ProductionMapper {
    /// Parse a wire production into the domain model.
    pub fn from_dto(dto: &shared::Production) -> Result<Production, ScheduleError> {
        let date = NaiveDate::parse_from_str(&dto.date, "%Y-%m-%d").map_err(|_| {
            ScheduleError::UnparseableDate {
                id: dto.id.clone(),
                field: "date",
                value: dto.date.clone(),
            }
        })?;

        let start_time = DateTime::parse_from_rfc3339(&dto.start_time).map_err(|_| {
            ScheduleError::UnparseableDate {
                id: dto.id.clone(),
                field: "start_time",
                value: dto.start_time.clone(),
            }
        })?;

        let end_time = DateTime::parse_from_rfc3339(&dto.end_time).map_err(|_| {
            ScheduleError::UnparseableDate {
                id: dto.id.clone(),
                field: "end_time",
                value: dto.end_time.clone(),
            }
        })?;

        Ok(Production {
            id: dto.id.clone(),
            name: dto.name.clone(),
            venue: dto.venue.clone(),
            date,
            start_time,
            end_time,
            status: Self::status_from_dto(dto.status.clone()),
        })
    }

    /// Render a domain production back into its wire shape.
    pub fn to_dto(production: &Production) -> shared::Production {
        shared::Production {
            id: production.id.clone(),
            name: production.name.clone(),
            venue: production.venue.clone(),
            date: production.date.to_string(),
            start_time: production.start_time.to_rfc3339(),
            end_time: production.end_time.to_rfc3339(),
            status: Self::status_to_dto(production.status.clone()),
        }
    }

    pub fn status_from_dto(status: shared::ProductionStatus) -> ProductionStatus {
        match status {
            shared::ProductionStatus::Confirmed => ProductionStatus::Confirmed,
            shared::ProductionStatus::Completed => ProductionStatus::Completed,
            shared::ProductionStatus::Cancelled => ProductionStatus::Cancelled,
            shared::ProductionStatus::Overtime => ProductionStatus::Overtime,
            shared::ProductionStatus::Other(value) => ProductionStatus::Other(value),
        }
    }

    pub fn status_to_dto(status: ProductionStatus) -> shared::ProductionStatus {
        match status {
            ProductionStatus::Confirmed => shared::ProductionStatus::Confirmed,
            ProductionStatus::Completed => shared::ProductionStatus::Completed,
            ProductionStatus::Cancelled => shared::ProductionStatus::Cancelled,
            ProductionStatus::Overtime => shared::ProductionStatus::Overtime,
            ProductionStatus::Other(value) => shared::ProductionStatus::Other(value),
        }
    }
}
