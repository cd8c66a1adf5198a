//! Chart Models
//!
//! Pure builders from the dashboard payload to drawable chart models. No
//! DOM access here: these run (and test) natively. When a source series is
//! absent or empty, builders substitute a fixed placeholder so a mounted
//! chart never renders blank.

use std::collections::HashMap;

use crate::state::summary::DashboardSummary;

/// Chart colors for different series
pub const SERIES_COLORS: [&str; 6] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

/// Canonical pipeline stage order for the stage charts.
pub const DEAL_STAGES: [&str; 6] = [
    "Prospect",
    "Qualification",
    "Proposal",
    "Negotiation",
    "Won",
    "Lost",
];

/// Canonical lead status order for the status doughnut.
pub const LEAD_STATUSES: [&str; 5] = ["New", "Contacted", "Qualified", "Converted", "Lost"];

/// Most campaigns shown in the combo chart (first entries in payload order).
pub const CAMPAIGN_CAP: usize = 5;

/// One named line series.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Multi-series line chart over ordered periods.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendModel {
    pub periods: Vec<String>,
    pub series: Vec<Series>,
    pub placeholder: bool,
}

/// Vertical bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarModel {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub color: &'static str,
    /// Axis and value labels render as currency
    pub currency: bool,
    pub placeholder: bool,
}

/// One doughnut segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

/// Doughnut chart.
#[derive(Clone, Debug, PartialEq)]
pub struct DoughnutModel {
    pub segments: Vec<Segment>,
    pub placeholder: bool,
}

/// Combo chart: one bar series and one line series over shared labels.
#[derive(Clone, Debug, PartialEq)]
pub struct ComboModel {
    pub labels: Vec<String>,
    pub bar_name: &'static str,
    pub bar_color: &'static str,
    pub bars: Vec<f64>,
    pub line_name: &'static str,
    pub line_color: &'static str,
    pub line: Vec<f64>,
    pub placeholder: bool,
}

/// A drawable chart of any shape.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartModel {
    Trend(TrendModel),
    Bars(BarModel),
    Doughnut(DoughnutModel),
    Combo(ComboModel),
}

impl ChartModel {
    /// Legend entries (label, color) for the panel to render under the
    /// canvas. Single-series bars carry no legend.
    pub fn legend(&self) -> Vec<(String, &'static str)> {
        match self {
            ChartModel::Trend(model) => model
                .series
                .iter()
                .map(|s| (s.name.to_string(), s.color))
                .collect(),
            ChartModel::Bars(_) => Vec::new(),
            ChartModel::Doughnut(model) => model
                .segments
                .iter()
                .map(|s| (s.label.clone(), s.color))
                .collect(),
            ChartModel::Combo(model) => vec![
                (model.bar_name.to_string(), model.bar_color),
                (model.line_name.to_string(), model.line_color),
            ],
        }
    }
}

/// Order a keyed series canonically: canonical labels first (matched
/// case-insensitively against payload keys, zero when absent), then any
/// unrecognized keys in alphabetical order.
fn ordered_series(map: &HashMap<String, f64>, canonical: &[&str]) -> Vec<(String, f64)> {
    let mut out: Vec<(String, f64)> = canonical
        .iter()
        .map(|label| {
            let value = map
                .iter()
                .filter(|(key, _)| key.eq_ignore_ascii_case(label))
                .map(|(_, v)| *v)
                .sum();
            (label.to_string(), value)
        })
        .collect();

    let mut extras: Vec<(String, f64)> = map
        .iter()
        .filter(|(key, _)| !canonical.iter().any(|label| key.eq_ignore_ascii_case(label)))
        .map(|(key, value)| (key.clone(), *value))
        .collect();
    extras.sort_by(|a, b| a.0.cmp(&b.0));
    out.extend(extras);

    out
}

fn to_f64_map(map: &HashMap<String, u64>) -> HashMap<String, f64> {
    map.iter().map(|(k, v)| (k.clone(), *v as f64)).collect()
}

/// Accounts/leads/deals growth over the payload's trend periods.
pub fn trend_model(summary: &DashboardSummary) -> TrendModel {
    let placeholder = summary.trends.is_empty();

    let (periods, accounts, leads, deals) = if placeholder {
        // Six zeroed periods keep the axes and legend visible
        (
            vec![String::new(); 6],
            vec![0.0; 6],
            vec![0.0; 6],
            vec![0.0; 6],
        )
    } else {
        (
            summary.trends.iter().map(|p| p.period.clone()).collect(),
            summary.trends.iter().map(|p| p.accounts as f64).collect(),
            summary.trends.iter().map(|p| p.leads as f64).collect(),
            summary.trends.iter().map(|p| p.deals as f64).collect(),
        )
    };

    TrendModel {
        periods,
        series: vec![
            Series {
                name: "Accounts",
                color: SERIES_COLORS[0],
                values: accounts,
            },
            Series {
                name: "Leads",
                color: SERIES_COLORS[1],
                values: leads,
            },
            Series {
                name: "Deals",
                color: SERIES_COLORS[2],
                values: deals,
            },
        ],
        placeholder,
    }
}

/// Deal count per pipeline stage.
pub fn deal_stage_model(summary: &DashboardSummary) -> BarModel {
    let series = ordered_series(&to_f64_map(&summary.deal_stages), &DEAL_STAGES);
    BarModel {
        labels: series.iter().map(|(label, _)| label.clone()).collect(),
        values: series.iter().map(|(_, value)| *value).collect(),
        color: SERIES_COLORS[2],
        currency: false,
        placeholder: summary.deal_stages.is_empty(),
    }
}

/// Lead count per status.
pub fn lead_status_model(summary: &DashboardSummary) -> DoughnutModel {
    let series = ordered_series(&to_f64_map(&summary.lead_statuses), &LEAD_STATUSES);
    DoughnutModel {
        segments: series
            .into_iter()
            .enumerate()
            .map(|(idx, (label, value))| Segment {
                label,
                value,
                color: SERIES_COLORS[idx % SERIES_COLORS.len()],
            })
            .collect(),
        placeholder: summary.lead_statuses.is_empty(),
    }
}

/// Deal value per pipeline stage, currency-labeled.
pub fn deal_value_model(summary: &DashboardSummary) -> BarModel {
    let series = ordered_series(&summary.deal_value_by_stage, &DEAL_STAGES);
    BarModel {
        labels: series.iter().map(|(label, _)| label.clone()).collect(),
        values: series.iter().map(|(_, value)| *value).collect(),
        color: SERIES_COLORS[3],
        currency: true,
        placeholder: summary.deal_value_by_stage.is_empty(),
    }
}

/// Campaign budget bars against a lead-count line, capped at the first
/// [`CAMPAIGN_CAP`] entries in payload order.
pub fn campaign_model(summary: &DashboardSummary) -> ComboModel {
    let placeholder = summary.campaign_performance.is_empty();

    let (labels, bars, line) = if placeholder {
        (vec!["No campaigns".to_string()], vec![0.0], vec![0.0])
    } else {
        let capped = &summary.campaign_performance
            [..summary.campaign_performance.len().min(CAMPAIGN_CAP)];
        (
            capped.iter().map(|c| c.name.clone()).collect(),
            capped.iter().map(|c| c.budget).collect(),
            capped.iter().map(|c| c.lead_count as f64).collect(),
        )
    };

    ComboModel {
        labels,
        bar_name: "Budget",
        bar_color: SERIES_COLORS[0],
        bars,
        line_name: "Leads",
        line_color: SERIES_COLORS[1],
        line,
        placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::summary::{CampaignPerformance, TrendPoint};

    #[test]
    fn test_empty_deal_stages_yield_canonical_zeros() {
        let model = deal_stage_model(&DashboardSummary::default());
        assert!(model.placeholder);
        assert_eq!(model.labels, DEAL_STAGES);
        assert_eq!(model.values, vec![0.0; 6]);
    }

    #[test]
    fn test_stage_matching_is_case_insensitive() {
        let summary = DashboardSummary {
            deal_stages: HashMap::from([("won".to_string(), 4), ("PROPOSAL".to_string(), 2)]),
            ..Default::default()
        };
        let model = deal_stage_model(&summary);
        assert!(!model.placeholder);

        let won = model.labels.iter().position(|l| l == "Won").unwrap();
        assert_eq!(model.values[won], 4.0);
        let proposal = model.labels.iter().position(|l| l == "Proposal").unwrap();
        assert_eq!(model.values[proposal], 2.0);
    }

    #[test]
    fn test_unrecognized_stages_append_alphabetically() {
        let summary = DashboardSummary {
            deal_stages: HashMap::from([
                ("Zebra".to_string(), 1),
                ("Audit".to_string(), 2),
                ("Won".to_string(), 3),
            ]),
            ..Default::default()
        };
        let model = deal_stage_model(&summary);
        assert_eq!(model.labels.len(), DEAL_STAGES.len() + 2);
        assert_eq!(model.labels[DEAL_STAGES.len()], "Audit");
        assert_eq!(model.labels[DEAL_STAGES.len() + 1], "Zebra");
    }

    #[test]
    fn test_empty_statuses_yield_canonical_doughnut() {
        let model = lead_status_model(&DashboardSummary::default());
        assert!(model.placeholder);
        let labels: Vec<_> = model.segments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, LEAD_STATUSES);
        assert!(model.segments.iter().all(|s| s.value == 0.0));
    }

    #[test]
    fn test_empty_trends_yield_six_zero_periods() {
        let model = trend_model(&DashboardSummary::default());
        assert!(model.placeholder);
        assert_eq!(model.periods.len(), 6);
        assert_eq!(model.series.len(), 3);
        assert!(model.series.iter().all(|s| s.values == vec![0.0; 6]));
    }

    #[test]
    fn test_trend_series_follow_payload_order() {
        let summary = DashboardSummary {
            trends: vec![
                TrendPoint {
                    period: "2024-01".to_string(),
                    accounts: 1,
                    leads: 5,
                    deals: 2,
                },
                TrendPoint {
                    period: "2024-02".to_string(),
                    accounts: 2,
                    leads: 8,
                    deals: 3,
                },
            ],
            ..Default::default()
        };
        let model = trend_model(&summary);
        assert_eq!(model.periods, vec!["2024-01", "2024-02"]);
        assert_eq!(model.series[1].name, "Leads");
        assert_eq!(model.series[1].values, vec![5.0, 8.0]);
    }

    #[test]
    fn test_campaigns_cap_to_first_five() {
        let summary = DashboardSummary {
            campaign_performance: (0..7)
                .map(|i| CampaignPerformance {
                    id: i,
                    name: format!("Campaign {}", i),
                    budget: 100.0 * i as f64,
                    lead_count: i,
                })
                .collect(),
            ..Default::default()
        };
        let model = campaign_model(&summary);
        assert!(!model.placeholder);
        assert_eq!(model.labels.len(), 5);
        assert_eq!(model.labels[0], "Campaign 0");
        assert_eq!(model.labels[4], "Campaign 4");
        assert_eq!(model.line, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_empty_campaigns_yield_placeholder_entry() {
        let model = campaign_model(&DashboardSummary::default());
        assert!(model.placeholder);
        assert_eq!(model.labels, vec!["No campaigns"]);
        assert_eq!(model.bars, vec![0.0]);
    }

    #[test]
    fn test_deal_value_model_is_currency() {
        let summary = DashboardSummary {
            deal_value_by_stage: HashMap::from([("Won".to_string(), 1500.0)]),
            ..Default::default()
        };
        let model = deal_value_model(&summary);
        assert!(model.currency);
        let won = model.labels.iter().position(|l| l == "Won").unwrap();
        assert_eq!(model.values[won], 1500.0);
    }

    #[test]
    fn test_legend_shapes() {
        let summary = DashboardSummary::default();
        let trend = ChartModel::Trend(trend_model(&summary));
        let labels: Vec<_> = trend.legend().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Accounts", "Leads", "Deals"]);

        assert!(ChartModel::Bars(deal_stage_model(&summary)).legend().is_empty());

        let combo = ChartModel::Combo(campaign_model(&summary));
        assert_eq!(combo.legend().len(), 2);
    }
}
