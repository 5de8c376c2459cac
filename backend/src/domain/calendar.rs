//! Calendar domain logic for the booking tracker.
//!
//! This module contains all business logic related to week navigation,
//! date calculations, and day-level schedule assembly. The UI should only
//! handle presentation concerns, while all calendar computations and
//! business rules are handled here.
//!
//! Every operation is a pure function of its inputs: the navigator holds no
//! focus state of its own, so concurrent callers can share one service
//! value. The only clock read in the crate is `current_date`, which is kept
//! out of every window computation.
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use log::{debug, info};

use shared::{
    CurrentDateResponse, DayCell, DayOccupancy, DaySchedule, FormattedProduction, WeekDirection,
    WeekView,
};

use crate::domain::commands::schedule::{
    DayScheduleQuery, DayScheduleResult, WeekViewQuery, WeekViewResult,
};
use crate::domain::models::production::Production;
use crate::domain::production_registry::ProductionRegistry;

/// How many status indicators a day cell shows before the "+N" marker.
const MAX_DAY_INDICATORS: usize = 3;

/// The contiguous 7-day span `[start, start + 6]` currently displayed.
///
/// Never mutated in place: navigation replaces the whole window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub days: [NaiveDate; 7],
}

impl WeekWindow {
    fn from_start(start: NaiveDate) -> Self {
        let mut days = [start; 7];
        for (offset, day) in days.iter_mut().enumerate() {
            *day = start + Duration::days(offset as i64);
        }
        Self { start, days }
    }

    /// Last day of the window
    pub fn end(&self) -> NaiveDate {
        self.days[6]
    }

    /// Whether the given day falls inside this window
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end()
    }

    fn to_dto(self) -> shared::WeekWindow {
        shared::WeekWindow {
            start: self.start.to_string(),
            days: self.days.iter().map(|day| day.to_string()).collect(),
        }
    }
}

/// Calendar service that handles all week-navigation business logic
#[derive(Debug, Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// The 7 consecutive days beginning at the most recent `week_start` on
    /// or before `date`.
    ///
    /// Pure and total: the same inputs always yield the same window, for
    /// any representable date.
    pub fn week_window_for(&self, date: NaiveDate, week_start: Weekday) -> WeekWindow {
        let days_back = (date.weekday().num_days_from_sunday() + 7
            - week_start.num_days_from_sunday())
            % 7;
        WeekWindow::from_start(date - Duration::days(days_back as i64))
    }

    /// Move a window start one week back or forward.
    ///
    /// Composes cleanly: a `Next` followed by a `Prev` lands back on the
    /// original start.
    pub fn shift_week(&self, window_start: NaiveDate, direction: WeekDirection) -> NaiveDate {
        let days = match direction {
            WeekDirection::Next => 7,
            WeekDirection::Prev => -7,
        };
        window_start + Duration::days(days)
    }

    /// Resolve the window that should be on screen for a selection.
    ///
    /// A selection inside the currently displayed window keeps that window;
    /// anything outside it triggers recomputation so the selected day is
    /// visible. Out-of-window selections are never rejected.
    pub fn window_containing(
        &self,
        selected: NaiveDate,
        current_start: Option<NaiveDate>,
        week_start: Weekday,
    ) -> WeekWindow {
        if let Some(start) = current_start {
            let current = WeekWindow::from_start(start);
            if current.contains(selected) {
                return current;
            }
            debug!(
                "🗓️ CALENDAR: Selection {} left window starting {}, recomputing",
                selected, start
            );
        }
        self.week_window_for(selected, week_start)
    }

    /// Indicator summary for one day cell.
    ///
    /// At most 3 categories are reported, taken from the front of the
    /// deterministic bucket order; the rest is folded into `overflow` so the
    /// caller can render a "+N" marker.
    pub fn day_occupancy(&self, registry: &ProductionRegistry, day: NaiveDate) -> DayOccupancy {
        let bucket = registry.by_day(day);
        let top_statuses: Vec<_> = bucket
            .iter()
            .take(MAX_DAY_INDICATORS)
            .map(|production| ProductionRegistry::classify(&production.status))
            .collect();
        DayOccupancy {
            count: bucket.len(),
            overflow: bucket.len() - top_statuses.len(),
            top_statuses,
        }
    }

    /// The detail-view feed for one day: same content as the registry
    /// bucket, in the same order. An empty day yields an empty slice.
    pub fn day_schedule<'a>(
        &self,
        registry: &'a ProductionRegistry,
        day: NaiveDate,
    ) -> &'a [Production] {
        registry.by_day(day)
    }

    /// Assemble the full week view for a selection - window resolution,
    /// per-day occupancy and the header title in one pass.
    pub fn week_view(&self, registry: &ProductionRegistry, query: WeekViewQuery) -> WeekViewResult {
        info!(
            "🗓️ CALENDAR: Building week view for {} (window start: {:?})",
            query.selected_date, query.window_start
        );

        let window = self.window_containing(query.selected_date, query.window_start, query.week_start);

        let cells: Vec<DayCell> = window
            .days
            .iter()
            .map(|&day| DayCell {
                date: day.to_string(),
                is_selected: day == query.selected_date,
                occupancy: self.day_occupancy(registry, day),
            })
            .collect();

        let scheduled: usize = cells.iter().map(|cell| cell.occupancy.count).sum();
        info!(
            "🗓️ CALENDAR: Week of {} has {} productions across {} days",
            window.start,
            scheduled,
            cells.iter().filter(|cell| cell.occupancy.count > 0).count()
        );

        WeekViewResult {
            view: WeekView {
                title: self.week_title(&window),
                window: window.to_dto(),
                cells,
            },
        }
    }

    /// Assemble the day-schedule detail list for a selected day.
    pub fn day_schedule_view(
        &self,
        registry: &ProductionRegistry,
        query: DayScheduleQuery,
    ) -> DayScheduleResult {
        let productions: Vec<FormattedProduction> = self
            .day_schedule(registry, query.day)
            .iter()
            .map(|production| FormattedProduction {
                id: production.id.clone(),
                name: production.name.clone(),
                venue: production.venue.clone(),
                time_range: self.time_range(production),
                category: ProductionRegistry::classify(&production.status),
            })
            .collect();

        info!(
            "🗓️ CALENDAR: Day schedule for {} has {} productions",
            query.day,
            productions.len()
        );

        DayScheduleResult {
            schedule: DaySchedule {
                date: query.day.to_string(),
                heading: self.day_heading(query.day),
                productions,
            },
        }
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Header title for a week window, e.g. "Jun 2 - Jun 8, 2025"
    pub fn week_title(&self, window: &WeekWindow) -> String {
        format!(
            "{} - {}",
            window.start.format("%b %-d"),
            window.end().format("%b %-d, %Y")
        )
    }

    /// Detail-view heading, e.g. "Wednesday, June 5, 2025"
    pub fn day_heading(&self, date: NaiveDate) -> String {
        date.format("%A, %B %-d, %Y").to_string()
    }

    /// Occupied interval for display, e.g. "9:00 AM - 11:00 AM"
    pub fn time_range(&self, production: &Production) -> String {
        format!(
            "{} - {}",
            production.start_time.format("%-I:%M %p"),
            production.end_time.format("%-I:%M %p")
        )
    }

    /// Get current date information
    pub fn current_date(&self) -> CurrentDateResponse {
        let now = Local::now();
        let month = now.month();
        let year = now.year() as u32;
        let day = now.day();

        let formatted_date = format!("{} {}, {}", self.month_name(month), day, year);
        let iso_date = format!("{:04}-{:02}-{:02}", year, month, day);

        CurrentDateResponse {
            month,
            year,
            day,
            formatted_date,
            iso_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::production::ProductionStatus;
    use chrono::DateTime;
    use shared::DisplayCategory;

    fn date(value: &str) -> NaiveDate {
        value.parse().unwrap()
    }

    fn create_test_production(id: &str, day: &str, start: &str, status: ProductionStatus) -> Production {
        let start_time =
            DateTime::parse_from_rfc3339(&format!("{}T{}:00-04:00", day, start)).unwrap();
        Production {
            id: id.to_string(),
            name: format!("Production {}", id),
            venue: "Studio A".to_string(),
            date: date(day),
            start_time,
            end_time: start_time + Duration::hours(2),
            status,
        }
    }

    fn registry_with(productions: Vec<Production>) -> ProductionRegistry {
        let build = ProductionRegistry::build(productions);
        assert!(build.rejected.is_empty());
        build.registry
    }

    #[test]
    fn test_week_window_for_sunday_convention() {
        let service = CalendarService::new();

        // Wednesday 2024-06-05 with a Sunday week start
        let window = service.week_window_for(date("2024-06-05"), Weekday::Sun);

        assert_eq!(window.start, date("2024-06-02"));
        assert_eq!(window.end(), date("2024-06-08"));
        assert_eq!(window.days.len(), 7);
        assert!(window.contains(date("2024-06-05")));
    }

    #[test]
    fn test_week_window_for_monday_convention() {
        let service = CalendarService::new();

        let window = service.week_window_for(date("2024-06-05"), Weekday::Mon);
        assert_eq!(window.start, date("2024-06-03"));
        assert_eq!(window.end(), date("2024-06-09"));
    }

    #[test]
    fn test_week_window_for_reference_on_week_start() {
        let service = CalendarService::new();

        // 2024-06-02 is itself a Sunday: the window starts on it
        let window = service.week_window_for(date("2024-06-02"), Weekday::Sun);
        assert_eq!(window.start, date("2024-06-02"));
    }

    #[test]
    fn test_week_window_for_is_idempotent() {
        let service = CalendarService::new();

        let first = service.week_window_for(date("2024-06-05"), Weekday::Sun);
        let second = service.week_window_for(date("2024-06-05"), Weekday::Sun);
        assert_eq!(first, second);
    }

    #[test]
    fn test_week_window_days_are_consecutive() {
        let service = CalendarService::new();

        let window = service.week_window_for(date("2024-12-31"), Weekday::Sun);
        for pair in window.days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_shift_week_moves_seven_days() {
        let service = CalendarService::new();

        let start = date("2024-06-02");
        assert_eq!(
            service.shift_week(start, WeekDirection::Next),
            date("2024-06-09")
        );
        assert_eq!(
            service.shift_week(start, WeekDirection::Prev),
            date("2024-05-26")
        );
    }

    #[test]
    fn test_shift_week_is_invertible() {
        let service = CalendarService::new();

        let start = date("2024-06-02");
        let round_trip = service.shift_week(
            service.shift_week(start, WeekDirection::Next),
            WeekDirection::Prev,
        );
        assert_eq!(round_trip, start);
    }

    #[test]
    fn test_window_containing_keeps_current_window() {
        let service = CalendarService::new();

        // Selection inside the displayed window: no recomputation
        let window =
            service.window_containing(date("2024-06-07"), Some(date("2024-06-02")), Weekday::Sun);
        assert_eq!(window.start, date("2024-06-02"));
    }

    #[test]
    fn test_window_containing_recomputes_for_outside_selection() {
        let service = CalendarService::new();

        // Selection two weeks out: the new window must contain it
        let selected = date("2024-06-19");
        let window = service.window_containing(selected, Some(date("2024-06-02")), Weekday::Sun);
        assert_eq!(window.start, date("2024-06-16"));
        assert!(window.contains(selected));
    }

    #[test]
    fn test_window_containing_without_current_window() {
        let service = CalendarService::new();

        let window = service.window_containing(date("2024-06-05"), None, Weekday::Sun);
        assert_eq!(window.start, date("2024-06-02"));
    }

    #[test]
    fn test_day_occupancy_reports_overflow_beyond_three() {
        let service = CalendarService::new();
        let registry = registry_with(vec![
            create_test_production("1", "2024-06-03", "08:00", ProductionStatus::Confirmed),
            create_test_production("2", "2024-06-03", "09:00", ProductionStatus::Completed),
            create_test_production("3", "2024-06-03", "10:00", ProductionStatus::Overtime),
            create_test_production("4", "2024-06-03", "11:00", ProductionStatus::Confirmed),
            create_test_production("5", "2024-06-03", "12:00", ProductionStatus::Cancelled),
        ]);

        let occupancy = service.day_occupancy(&registry, date("2024-06-03"));
        assert_eq!(occupancy.count, 5);
        assert_eq!(occupancy.top_statuses.len(), 3);
        assert_eq!(occupancy.overflow, 2);
        assert_eq!(
            occupancy.count,
            occupancy.top_statuses.len() + occupancy.overflow
        );

        // The first 3 follow bucket order, not a random sample
        assert_eq!(
            occupancy.top_statuses,
            vec![
                DisplayCategory::Confirmed,
                DisplayCategory::Completed,
                DisplayCategory::Overtime,
            ]
        );
    }

    #[test]
    fn test_day_occupancy_for_empty_day() {
        let service = CalendarService::new();
        let registry = registry_with(Vec::new());

        let occupancy = service.day_occupancy(&registry, date("2024-06-03"));
        assert_eq!(occupancy.count, 0);
        assert!(occupancy.top_statuses.is_empty());
        assert_eq!(occupancy.overflow, 0);
    }

    #[test]
    fn test_week_view_marks_the_selected_cell() {
        let service = CalendarService::new();
        let registry = registry_with(vec![create_test_production(
            "1",
            "2024-06-05",
            "09:00",
            ProductionStatus::Confirmed,
        )]);

        let result = service.week_view(
            &registry,
            WeekViewQuery {
                selected_date: date("2024-06-05"),
                window_start: None,
                week_start: Weekday::Sun,
            },
        );

        let view = result.view;
        assert_eq!(view.cells.len(), 7);
        assert_eq!(view.window.start, "2024-06-02");
        assert_eq!(view.title, "Jun 2 - Jun 8, 2024");

        let selected: Vec<&DayCell> =
            view.cells.iter().filter(|cell| cell.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, "2024-06-05");
        assert_eq!(selected[0].occupancy.count, 1);
    }

    #[test]
    fn test_week_view_follows_out_of_window_selection() {
        let service = CalendarService::new();
        let registry = registry_with(Vec::new());

        // The displayed window is the week of June 2; selecting June 19
        // must move the window, not fail
        let result = service.week_view(
            &registry,
            WeekViewQuery {
                selected_date: date("2024-06-19"),
                window_start: Some(date("2024-06-02")),
                week_start: Weekday::Sun,
            },
        );

        assert_eq!(result.view.window.start, "2024-06-16");
        assert!(result.view.cells.iter().any(|cell| cell.is_selected));
    }

    #[test]
    fn test_day_schedule_view_formats_productions() {
        let service = CalendarService::new();
        let registry = registry_with(vec![create_test_production(
            "1",
            "2024-06-05",
            "09:00",
            ProductionStatus::Confirmed,
        )]);

        let result = service.day_schedule_view(
            &registry,
            DayScheduleQuery {
                day: date("2024-06-05"),
            },
        );

        let schedule = result.schedule;
        assert_eq!(schedule.heading, "Wednesday, June 5, 2024");
        assert_eq!(schedule.productions.len(), 1);
        assert_eq!(schedule.productions[0].time_range, "9:00 AM - 11:00 AM");
        assert_eq!(
            schedule.productions[0].category,
            DisplayCategory::Confirmed
        );
    }

    #[test]
    fn test_day_schedule_view_empty_day_is_valid() {
        let service = CalendarService::new();
        let registry = registry_with(Vec::new());

        let result = service.day_schedule_view(
            &registry,
            DayScheduleQuery {
                day: date("2024-06-05"),
            },
        );
        assert!(result.schedule.productions.is_empty());
        assert_eq!(result.schedule.date, "2024-06-05");
    }

    #[test]
    fn test_week_title_spanning_two_months() {
        let service = CalendarService::new();

        // Week of Sunday 2024-04-28 runs into May
        let window = service.week_window_for(date("2024-05-01"), Weekday::Sun);
        assert_eq!(service.week_title(&window), "Apr 28 - May 4, 2024");
    }

    #[test]
    fn test_time_range_crossing_noon() {
        let service = CalendarService::new();
        let production =
            create_test_production("1", "2024-06-05", "11:30", ProductionStatus::Confirmed);
        assert_eq!(service.time_range(&production), "11:30 AM - 1:30 PM");
    }

    #[test]
    fn test_month_name() {
        let service = CalendarService::new();

        assert_eq!(service.month_name(1), "January");
        assert_eq!(service.month_name(6), "June");
        assert_eq!(service.month_name(12), "December");
        assert_eq!(service.month_name(13), "Invalid Month");
    }
}
