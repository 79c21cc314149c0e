//! Database repositories

pub mod reminder_repo;
pub mod report_repo;

pub use reminder_repo::ReminderRepository;
pub use report_repo::ReportRepository;
