use serde::{Deserialize, Serialize};
use std::fmt;

/// A scheduled production shoot as delivered by the remote booking store.
///
/// Dates cross this boundary as strings: `date` is an ISO 8601 calendar day
/// (`YYYY-MM-DD`), `start_time` and `end_time` are RFC 3339 timestamps. The
/// backend parses these into proper date types; anything unparseable is
/// reported back in a rejection list rather than dropped silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Production {
    pub id: String,
    /// Production title shown in day schedules
    pub name: String,
    /// Studio or location the shoot occupies
    pub venue: String,
    /// Calendar day the booking sheet files this shoot under (YYYY-MM-DD).
    /// Authoritative for day placement even when `start_time` disagrees.
    pub date: String,
    /// Start of the occupied interval (RFC 3339)
    pub start_time: String,
    /// End of the occupied interval (RFC 3339) - must be after `start_time`
    pub end_time: String,
    pub status: ProductionStatus,
}

/// Booking status as reported by the remote store.
///
/// The store is free to introduce new status strings without this crate being
/// recompiled, so the enumeration is open: anything unrecognized lands in
/// `Other` and round-trips losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductionStatus {
    Confirmed,
    Completed,
    Cancelled,
    Overtime,
    /// Any status string this crate does not know about
    Other(String),
}

impl ProductionStatus {
    /// The wire string for this status
    pub fn as_str(&self) -> &str {
        match self {
            ProductionStatus::Confirmed => "confirmed",
            ProductionStatus::Completed => "completed",
            ProductionStatus::Cancelled => "cancelled",
            ProductionStatus::Overtime => "overtime",
            ProductionStatus::Other(value) => value,
        }
    }
}

impl From<String> for ProductionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "confirmed" => ProductionStatus::Confirmed,
            "completed" => ProductionStatus::Completed,
            "cancelled" => ProductionStatus::Cancelled,
            "overtime" => ProductionStatus::Overtime,
            _ => ProductionStatus::Other(value),
        }
    }
}

impl From<ProductionStatus> for String {
    fn from(status: ProductionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ProductionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status-derived classification driving the status-indicator color.
///
/// Unlike `ProductionStatus` this set is closed: every unknown status maps to
/// `Unknown`, which renders with the neutral indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCategory {
    Confirmed,
    Completed,
    Cancelled,
    Overtime,
    Unknown,
}

/// The 7 consecutive calendar days currently displayed.
///
/// Ephemeral view state: recomputed on every navigation event and replaced
/// wholesale, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekWindow {
    /// ISO date of the week-start day
    pub start: String,
    /// Always 7 consecutive ISO dates beginning at `start`
    pub days: Vec<String>,
}

/// Per-day summary used to render the indicator dots in a calendar cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOccupancy {
    /// Total productions filed under this day
    pub count: usize,
    /// Display categories for the first 3 productions in bucket order
    pub top_statuses: Vec<DisplayCategory>,
    /// Productions beyond the first 3, rendered as a "+N" marker
    pub overflow: usize,
}

/// One day cell in the week strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: String,
    pub is_selected: bool,
    pub occupancy: DayOccupancy,
}

/// A computed week view ready for the calendar strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekView {
    pub window: WeekWindow,
    /// Header title, e.g. "Jun 2 - Jun 8, 2025"
    pub title: String,
    pub cells: Vec<DayCell>,
}

/// A production row formatted for the day-schedule detail list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedProduction {
    pub id: String,
    pub name: String,
    pub venue: String,
    /// e.g. "9:00 AM - 11:00 AM"
    pub time_range: String,
    pub category: DisplayCategory,
}

/// The detail-view feed for one selected day.
///
/// An empty `productions` list is a valid state (the "no productions
/// scheduled" placeholder), distinct from any error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: String,
    /// e.g. "Wednesday, June 5, 2025"
    pub heading: String,
    pub productions: Vec<FormattedProduction>,
}

/// A production the registry refused to index, with the reason why
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedProduction {
    pub production: Production,
    pub reason: String,
}

/// Request for a week view around a selected date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekViewRequest {
    /// ISO date of the selected day
    pub selected_date: String,
    /// ISO date of the currently displayed window start, if a window is
    /// already on screen. Kept when it still contains the selection.
    pub window_start: Option<String>,
}

impl Default for WeekViewRequest {
    fn default() -> Self {
        Self {
            selected_date: chrono::Local::now().date_naive().to_string(),
            window_start: None,
        }
    }
}

/// Request to move the displayed window one week back or forward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftWeekRequest {
    pub window_start: String,
    pub direction: WeekDirection,
}

/// Week navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekDirection {
    Prev,
    Next,
}

/// Calendar behavior configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Day the week starts on: 0 = Sunday, 1 = Monday, ..., 6 = Saturday
    pub week_start: u8,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self { week_start: 0 }
    }
}

impl CalendarConfig {
    /// Get the day name for the configured week start
    pub fn week_start_name(&self) -> &'static str {
        match self.week_start {
            0 => "Sunday",
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            _ => "Invalid",
        }
    }

    /// Validate a week-start value
    pub fn is_valid_week_start(day: u8) -> bool {
        day <= 6
    }
}

/// Current date information from the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentDateResponse {
    pub month: u32,
    pub year: u32,
    pub day: u32,
    pub formatted_date: String, // e.g., "June 19, 2025"
    pub iso_date: String,       // e.g., "2025-06-19"
}

/// Staff role attached to a user profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    BookingOfficer,
    Producer,
    CameraOperator,
}

impl UserRole {
    /// Human-readable role label, e.g. "Booking Officer"
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::BookingOfficer => "Booking Officer",
            UserRole::Producer => "Producer",
            UserRole::CameraOperator => "Camera Operator",
        }
    }
}

/// Where a signed-in user lands after role selection.
///
/// Pure navigation data - the presentation layer owns the actual routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardTarget {
    BookingDashboard,
    ProducerDashboard,
    OperatorDashboard,
}

/// Registration form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_number: String,
    pub role: UserRole,
}

/// Validation result for a registration form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationValidation {
    pub is_valid: bool,
    pub errors: Vec<RegistrationError>,
}

/// Specific registration validation errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegistrationError {
    EmptyName,
    EmptyEmail,
    InvalidEmail,
    EmptyPassword,
    PasswordTooShort,
    PasswordNeedsMixedCase,
    PasswordNeedsNumber,
    PasswordMismatch,
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            RegistrationError::EmptyName => "Name is required",
            RegistrationError::EmptyEmail => "Email is required",
            RegistrationError::InvalidEmail => "Please enter a valid email address",
            RegistrationError::EmptyPassword => "Password is required",
            RegistrationError::PasswordTooShort => "Password must be at least 8 characters long",
            RegistrationError::PasswordNeedsMixedCase => {
                "Password must include both uppercase and lowercase letters"
            }
            RegistrationError::PasswordNeedsNumber => "Password must include at least one number",
            RegistrationError::PasswordMismatch => "Passwords do not match",
        };
        write!(f, "{}", message)
    }
}

/// Password strength breakdown for the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub has_min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
}
