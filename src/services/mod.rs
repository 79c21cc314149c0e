//! Business logic services

pub mod reminder_service;
pub mod report_service;
pub mod spot_service;

pub use reminder_service::ReminderService;
pub use report_service::ReportService;
pub use spot_service::SpotService;
