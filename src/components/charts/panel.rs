//! Chart Panel Component
//!
//! The charts section: a KPI highlight strip plus the five chart cards.
//! The panel owns the slot registry; nothing chart-related lives at module
//! level.

use leptos::*;

use crate::components::charts::draw;
use crate::components::charts::model::{
    campaign_model, deal_stage_model, deal_value_model, lead_status_model, trend_model, ChartModel,
};
use crate::components::charts::registry::{ChartRegistry, ChartSlot};
use crate::components::format::format_currency;
use crate::components::stat_card::HighlightCard;
use crate::state::summary::DashboardSummary;

/// Charts section for one dashboard payload.
#[component]
pub fn ChartPanel(summary: DashboardSummary) -> impl IntoView {
    let registry = store_value(ChartRegistry::new());

    view! {
        <section class="space-y-6">
            <h2 class="text-xl font-semibold">"Analytics"</h2>

            // KPI highlight strip
            <div class="flex flex-wrap gap-3">
                <HighlightCard
                    label="Pipeline Value"
                    value=format_currency(summary.total_deal_value)
                />
                <HighlightCard
                    label="Deals Closed (7d)"
                    value=summary.recent_deals_7d.to_string()
                />
                <HighlightCard
                    label="Conversion Rate"
                    value=format!("{:.1}%", summary.conversion_rate)
                />
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                <ChartCard
                    title="Growth Trends"
                    chart_slot=ChartSlot::Trend
                    registry=registry
                    model=ChartModel::Trend(trend_model(&summary))
                />
                <ChartCard
                    title="Deals by Stage"
                    chart_slot=ChartSlot::DealStages
                    registry=registry
                    model=ChartModel::Bars(deal_stage_model(&summary))
                />
                <ChartCard
                    title="Leads by Status"
                    chart_slot=ChartSlot::LeadStatuses
                    registry=registry
                    model=ChartModel::Doughnut(lead_status_model(&summary))
                />
                <ChartCard
                    title="Deal Value by Stage"
                    chart_slot=ChartSlot::DealValue
                    registry=registry
                    model=ChartModel::Bars(deal_value_model(&summary))
                />
                <ChartCard
                    title="Campaign Performance"
                    chart_slot=ChartSlot::Campaigns
                    registry=registry
                    model=ChartModel::Combo(campaign_model(&summary))
                />
            </div>
        </section>
    }
}

/// One chart card: canvas, repaint effect, and legend.
///
/// The slot prop is named `chart_slot`: `slot` is reserved by the view
/// macro.
#[component]
fn ChartCard(
    title: &'static str,
    chart_slot: ChartSlot,
    registry: StoredValue<ChartRegistry>,
    model: ChartModel,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (warning, set_warning) = create_signal(None::<&'static str>);
    let legend = model.legend();
    let model = store_value(model);

    // Repaint once the canvas is mounted. Installing the slot first means
    // any previous rendering's handle is replaced, never stacked.
    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        match draw::context_2d(&canvas) {
            Some(ctx) => {
                registry.update_value(|r| {
                    r.install(chart_slot);
                });
                let width = canvas.width() as f64;
                let height = canvas.height() as f64;
                model.with_value(|m| draw::paint(&ctx, width, height, m));
            }
            None => {
                set_warning.set(Some("Chart unavailable: no 2D canvas context"));
            }
        }
    });

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-4">{title}</h3>

            {move || {
                warning.get().map(|message| view! {
                    <p class="text-yellow-400 text-sm mb-2">{message}</p>
                })
            }}

            <canvas node_ref=canvas_ref width="600" height="320" class="w-full rounded-lg" />

            // Legend row
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {legend
                    .into_iter()
                    .map(|(label, color)| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
