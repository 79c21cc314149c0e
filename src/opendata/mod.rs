//! NYC open-data integration
//!
//! Client and record model for the city parking-regulation dataset.

pub mod client;
pub mod record;

pub use client::OpenDataClient;
pub use record::SignRecord;
