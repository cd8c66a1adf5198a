//! Stat Card Component
//!
//! Compact summary cards for the six fixed dashboard counts.

use leptos::*;

/// One summary count card.
#[component]
pub fn StatCard(
    /// Metric label, e.g. "Accounts"
    label: &'static str,
    /// Count to display
    value: u64,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="text-gray-400 text-sm">{label}</div>
            <div class="text-3xl font-bold mt-2">{value.to_string()}</div>
        </div>
    }
}

/// Highlight card for a pre-formatted KPI scalar.
#[component]
pub fn HighlightCard(
    label: &'static str,
    #[prop(into)] value: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded px-4 py-3 inline-flex items-center space-x-2">
            <span class="text-gray-400 text-xs">{label}</span>
            <span class="font-semibold">{value}</span>
        </div>
    }
}
