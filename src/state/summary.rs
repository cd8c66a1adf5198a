//! Dashboard Payload
//!
//! Types for the aggregated summary the API returns from `/api/dashboard/`.
//! Every field is default-tolerant: the server only includes the entity
//! lists relevant to the viewer's role, and older deployments omit the
//! chart series entirely.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// A single entity preview row: field name to raw JSON value.
///
/// The detail tables are generic over columns, so rows stay untyped here
/// and the table renderer decides how each cell is formatted.
pub type EntityRow = HashMap<String, serde_json::Value>;

/// Viewer role reported by the server.
///
/// Selects which detail sections the dashboard renders. Anything outside
/// the known set deserializes to `Unknown`, which renders no sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Superuser,
    Admin,
    Employee,
    #[default]
    Unknown,
}

impl Role {
    /// Parse a role string; unrecognized values map to `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value {
            "superuser" => Role::Superuser,
            "admin" => Role::Admin,
            "employee" => Role::Employee,
            _ => Role::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Role::parse(&value))
    }
}

/// One point of the accounts/leads/deals trend series.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TrendPoint {
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub accounts: u64,
    #[serde(default)]
    pub leads: u64,
    #[serde(default)]
    pub deals: u64,
}

/// Per-campaign performance entry (budget vs. leads generated).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CampaignPerformance {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub lead_count: u64,
}

/// The aggregated dashboard payload, fetched once per page load.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub role: Role,

    // Summary card counts
    #[serde(default)]
    pub total_accounts: u64,
    #[serde(default)]
    pub total_contacts: u64,
    #[serde(default)]
    pub total_leads: u64,
    #[serde(default)]
    pub total_deals: u64,
    #[serde(default)]
    pub total_campaigns: u64,
    #[serde(default)]
    pub total_tasks: u64,

    // Highlight scalars
    #[serde(default)]
    pub total_deal_value: f64,
    #[serde(default)]
    pub recent_deals_7d: u64,
    #[serde(default)]
    pub conversion_rate: f64,

    // Role-dependent entity previews
    #[serde(default)]
    pub recent_campaigns: Vec<EntityRow>,
    #[serde(default)]
    pub recent_leads: Vec<EntityRow>,
    #[serde(default)]
    pub recent_deals: Vec<EntityRow>,
    #[serde(default)]
    pub recent_accounts: Vec<EntityRow>,
    #[serde(default)]
    pub assigned_leads: Vec<EntityRow>,
    #[serde(default)]
    pub assigned_tasks: Vec<EntityRow>,

    // Aggregate chart series
    #[serde(default)]
    pub deal_stages: HashMap<String, u64>,
    #[serde(default)]
    pub lead_statuses: HashMap<String, u64>,
    #[serde(default)]
    pub deal_value_by_stage: HashMap<String, f64>,
    #[serde(default)]
    pub trends: Vec<TrendPoint>,
    #[serde(default)]
    pub campaign_performance: Vec<CampaignPerformance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_known_values() {
        assert_eq!(Role::parse("superuser"), Role::Superuser);
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("employee"), Role::Employee);
    }

    #[test]
    fn test_role_parse_unknown_values() {
        assert_eq!(Role::parse("manager"), Role::Unknown);
        assert_eq!(Role::parse("ADMIN"), Role::Unknown);
        assert_eq!(Role::parse(""), Role::Unknown);
    }

    #[test]
    fn test_summary_deserializes_sparse_payload() {
        let summary: DashboardSummary =
            serde_json::from_str(r#"{"role":"admin","total_accounts":3}"#).unwrap();
        assert_eq!(summary.role, Role::Admin);
        assert_eq!(summary.total_accounts, 3);
        assert_eq!(summary.total_tasks, 0);
        assert!(summary.recent_accounts.is_empty());
        assert!(summary.trends.is_empty());
    }

    #[test]
    fn test_summary_tolerates_missing_role() {
        let summary: DashboardSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary.role, Role::Unknown);
    }

    #[test]
    fn test_summary_reads_chart_series() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{
                "role": "superuser",
                "deal_stages": {"WON": 2, "LOST": 1},
                "trends": [{"period": "2024-01", "accounts": 1, "leads": 4, "deals": 2}],
                "campaign_performance": [
                    {"id": 7, "name": "Spring Push", "budget": 1200.5, "lead_count": 18}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(summary.deal_stages.get("WON"), Some(&2));
        assert_eq!(summary.trends[0].leads, 4);
        assert_eq!(summary.campaign_performance[0].name, "Spring Push");
        assert_eq!(summary.campaign_performance[0].budget, 1200.5);
    }
}
