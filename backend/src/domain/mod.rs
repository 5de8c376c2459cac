//! Domain services and models for the booking tracker.
pub mod calendar;
pub mod commands;
pub mod models;
pub mod production_registry;
pub mod user_service;

pub use calendar::CalendarService;
pub use production_registry::{DtoRegistryBuild, ProductionRegistry, RegistryBuild};
pub use user_service::UserService;
