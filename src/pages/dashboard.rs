//! Dashboard Page
//!
//! The loader state machine plus the rendered dashboard: summary cards,
//! role-dependent detail tables behind the filter bar, and the chart panel.

use leptos::*;

use crate::api::{self, DashboardError};
use crate::auth;
use crate::components::table_section::detail_sections;
use crate::components::{CardSkeleton, ChartPanel, ChartSkeleton, FilterBar, Loading, StatCard, TableSection};
use crate::state::global::GlobalState;
use crate::state::summary::DashboardSummary;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let summary = state.summary;
    let loading = state.loading;
    let load_error = state.load_error;

    // Captures only Copy signals, so the Retry button can share it
    let load = move || {
        spawn_local(async move {
            loading.set(true);
            load_error.set(None);
            match api::fetch_dashboard().await {
                Ok(payload) => summary.set(Some(payload)),
                // 401 is the sole auth-failure discriminator: back to login
                Err(DashboardError::Unauthorized) => auth::redirect_to_login(),
                Err(DashboardError::Other(message)) => load_error.set(Some(message)),
            }
            loading.set(false);
        });
    };

    // Fetch on mount; no token means login without touching the network
    create_effect(move |_| {
        if !auth::is_authenticated() {
            auth::redirect_to_login();
            return;
        }
        load();
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your CRM at a glance"</p>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="space-y-8">
                            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4">
                                {(0..6).map(|_| view! { <CardSkeleton /> }).collect_view()}
                            </div>
                            <ChartSkeleton />
                        </div>
                    }
                    .into_view()
                } else if let Some(message) = load_error.get() {
                    view! {
                        <div class="bg-red-900/40 border border-red-700 rounded-xl p-6 space-y-4">
                            <p class="text-red-300">{message}</p>
                            <button
                                on:click=move |_| load()
                                class="px-4 py-2 bg-red-700 hover:bg-red-600 rounded-lg font-medium transition-colors"
                            >
                                "Retry"
                            </button>
                        </div>
                    }
                    .into_view()
                } else if let Some(payload) = summary.get() {
                    view! { <DashboardContent summary=payload /> }.into_view()
                } else {
                    view! { <Loading /> }.into_view()
                }
            }}
        </div>
    }
}

/// The loaded dashboard for one payload.
#[component]
fn DashboardContent(summary: DashboardSummary) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let filter = state.filter;

    let sections = store_value(detail_sections(&summary));

    view! {
        // Six fixed summary cards, rendered for every role
        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4">
            <StatCard label="Accounts" value=summary.total_accounts />
            <StatCard label="Contacts" value=summary.total_contacts />
            <StatCard label="Leads" value=summary.total_leads />
            <StatCard label="Deals" value=summary.total_deals />
            <StatCard label="Campaigns" value=summary.total_campaigns />
            <StatCard label="Tasks" value=summary.total_tasks />
        </div>

        <FilterBar />

        // Role-dependent detail sections, filtered by the applied query
        <div class="space-y-6">
            {move || {
                let query = filter.get();
                sections.with_value(|sections| {
                    sections
                        .iter()
                        .filter_map(|model| model.filtered(&query))
                        .map(|model| view! { <TableSection model=model /> })
                        .collect_view()
                })
            }}
        </div>

        <ChartPanel summary=summary.clone() />
    }
}
