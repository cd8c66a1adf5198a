//! API Layer
//!
//! HTTP access to the CRM backend.

pub mod client;

pub use client::{fetch_dashboard, login, notify_logout, refresh_access, DashboardError};
