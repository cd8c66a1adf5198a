//! State Management
//!
//! Global reactive state and the dashboard payload types.

pub mod global;
pub mod summary;
