//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod charts;
pub mod filter_bar;
pub mod format;
pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod table_section;
pub mod toast;

pub use charts::ChartPanel;
pub use filter_bar::FilterBar;
pub use loading::{CardSkeleton, ChartSkeleton, Loading};
pub use nav::Nav;
pub use stat_card::StatCard;
pub use table_section::TableSection;
pub use toast::Toast;
