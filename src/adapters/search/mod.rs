//! Structured search adapter
//!
//! Queries the ScraperAPI Google Maps structured search around a coordinate
//! and hands back the raw listing items.

pub mod client;
pub mod models;

pub use client::SearchClient;
pub use models::SearchResponse;
