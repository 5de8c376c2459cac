//! # Booking Tracker Backend
//!
//! Scheduling core for the TV production booking app: a day-keyed
//! production registry plus a week-based calendar navigator, with the
//! account-form logic the booking screens share.
//!
//! The crate is pure in-process computation over snapshots the caller
//! supplies - no storage, no network surface, no background work. Callers
//! rebuild the registry whenever the production list changes and must not
//! mutate a list while a registry built from it is still in use.

pub mod domain;

pub use domain::{CalendarService, ProductionRegistry, UserService};

/// Main backend struct that bundles the domain services
#[derive(Debug, Clone, Default)]
pub struct Backend {
    pub calendar_service: CalendarService,
    pub user_service: UserService,
}

impl Backend {
    pub fn new() -> Self {
        Self {
            calendar_service: CalendarService::new(),
            user_service: UserService::new(),
        }
    }
}
