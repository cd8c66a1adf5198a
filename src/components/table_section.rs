//! Detail Table Renderer
//!
//! Pure shaping from entity rows to a [`TableModel`], separated from the
//! [`TableSection`] component that renders one. The model builder is generic
//! over columns: which sections exist and which columns they show, in what
//! order, is decided here per role, not by the renderer.

use leptos::*;
use serde_json::Value;

use crate::components::format::{format_currency, format_date, humanize, parse_date};
use crate::state::summary::{DashboardSummary, EntityRow, Role};

/// Placeholder for absent or null cells.
const DASH: &str = "—";

/// A fully formatted table: title, humanized headers, and one row of
/// display strings per input item, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableModel {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableModel {
    /// Keep only rows with at least one cell containing `query`,
    /// case-insensitively. An empty query keeps everything; a table whose
    /// rows all filter out collapses to `None`, same as an empty input.
    pub fn filtered(&self, query: &str) -> Option<TableModel> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Some(self.clone());
        }

        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .filter(|row| row.iter().any(|cell| cell.to_lowercase().contains(&query)))
            .cloned()
            .collect();

        if rows.is_empty() {
            return None;
        }

        Some(TableModel {
            title: self.title.clone(),
            headers: self.headers.clone(),
            rows,
        })
    }
}

/// Build a table model from raw entity rows.
///
/// Returns `None` for an empty item list: absent sections render nothing,
/// not an empty-state card.
pub fn table_model(title: &str, items: &[EntityRow], columns: &[&str]) -> Option<TableModel> {
    if items.is_empty() {
        return None;
    }

    Some(TableModel {
        title: title.to_string(),
        headers: columns.iter().map(|c| humanize(c)).collect(),
        rows: items
            .iter()
            .map(|item| {
                columns
                    .iter()
                    .map(|column| format_cell(column, item.get(*column)))
                    .collect()
            })
            .collect(),
    })
}

/// The detail sections for a payload, in render order. Sections whose
/// backing list is empty are skipped; an unknown role gets none.
pub fn detail_sections(summary: &DashboardSummary) -> Vec<TableModel> {
    let mut specs: Vec<(&str, &[EntityRow], &[&str])> = Vec::new();
    match summary.role {
        Role::Superuser => {
            specs.push((
                "Recent Campaigns",
                &summary.recent_campaigns,
                &["name", "budget", "created_at"],
            ));
            specs.push((
                "Recent Leads",
                &summary.recent_leads,
                &["title", "status", "created_at"],
            ));
            specs.push((
                "Recent Deals",
                &summary.recent_deals,
                &["title", "amount", "stage", "created_at"],
            ));
        }
        Role::Admin => {
            specs.push((
                "Recent Accounts",
                &summary.recent_accounts,
                &["name", "region", "created_at"],
            ));
            specs.push((
                "Recent Leads",
                &summary.recent_leads,
                &["title", "status", "created_at"],
            ));
        }
        Role::Employee => {
            specs.push((
                "Assigned Leads",
                &summary.assigned_leads,
                &["title", "status", "created_at"],
            ));
            specs.push((
                "Your Tasks",
                &summary.assigned_tasks,
                &["title", "due_date", "completed"],
            ));
        }
        Role::Unknown => {}
    }

    specs
        .into_iter()
        .filter_map(|(title, items, columns)| table_model(title, items, columns))
        .collect()
}

/// Whether a column holds a date. The API uses both `*_date` fields and
/// Django-style `*_at` timestamps.
fn is_date_column(column: &str) -> bool {
    column.contains("date") || column.ends_with("_at")
}

/// Format one cell for display.
fn format_cell(column: &str, value: Option<&Value>) -> String {
    let value = match value {
        None | Some(Value::Null) => return DASH.to_string(),
        Some(value) => value,
    };

    if is_date_column(column) {
        // A parse failure falls back to the raw text, never "Invalid Date".
        if let Value::String(s) = value {
            return match parse_date(s) {
                Some(date) => format_date(date),
                None => s.clone(),
            };
        }
        return raw_scalar(value);
    }

    if column == "amount" || column == "budget" {
        if let Some(number) = value.as_f64() {
            return format_currency(number);
        }
        if let Value::String(s) = value {
            if let Ok(number) = s.parse::<f64>() {
                return format_currency(number);
            }
        }
        return raw_scalar(value);
    }

    if column == "completed" {
        if let Value::Bool(done) = value {
            return if *done { "✓" } else { "✗" }.to_string();
        }
        return raw_scalar(value);
    }

    raw_scalar(value)
}

/// Raw scalar display for an untyped JSON value.
fn raw_scalar(value: &Value) -> String {
    match value {
        Value::Null => DASH.to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Nested structures are not expected in preview rows
        other => other.to_string(),
    }
}

/// Render one table model as a card.
#[component]
pub fn TableSection(model: TableModel) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{model.title.clone()}</h2>
            <div class="overflow-x-auto">
                <table class="w-full text-sm">
                    <thead>
                        <tr class="text-left text-gray-400 border-b border-gray-700">
                            {model
                                .headers
                                .iter()
                                .map(|header| view! { <th class="py-2 pr-4 font-medium">{header.clone()}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {model
                            .rows
                            .iter()
                            .map(|row| {
                                view! {
                                    <tr class="border-b border-gray-700 last:border-0">
                                        {row
                                            .iter()
                                            .map(|cell| view! { <td class="py-2 pr-4">{cell.clone()}</td> })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(pairs: &[(&str, Value)]) -> EntityRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_empty_items_yield_no_model() {
        assert_eq!(table_model("Recent Leads", &[], &["title"]), None);
    }

    #[test]
    fn test_one_row_per_item_in_input_order() {
        let items = vec![
            row(&[("title", json!("First"))]),
            row(&[("title", json!("Second"))]),
            row(&[("title", json!("Third"))]),
        ];
        let model = table_model("Recent Leads", &items, &["title", "status"]).unwrap();
        assert_eq!(model.headers, vec!["Title", "Status"]);
        assert_eq!(model.rows.len(), 3);
        assert_eq!(model.rows[0], vec!["First", "—"]);
        assert_eq!(model.rows[2][0], "Third");
    }

    #[test]
    fn test_date_cells() {
        let items = vec![
            row(&[("created_at", json!("2024-01-01"))]),
            row(&[("created_at", json!("2024-01-01T09:30:00Z"))]),
            row(&[("created_at", json!("not-a-date"))]),
            row(&[("created_at", Value::Null)]),
        ];
        let model = table_model("Recent Accounts", &items, &["created_at"]).unwrap();
        assert_eq!(model.rows[0][0], "Jan 1, 2024");
        assert_eq!(model.rows[1][0], "Jan 1, 2024");
        assert_eq!(model.rows[2][0], "not-a-date");
        assert_eq!(model.rows[3][0], "—");
    }

    #[test]
    fn test_due_date_is_a_date_column() {
        let items = vec![row(&[("due_date", json!("2024-03-15"))])];
        let model = table_model("Your Tasks", &items, &["due_date"]).unwrap();
        assert_eq!(model.rows[0][0], "Mar 15, 2024");
    }

    #[test]
    fn test_currency_cells() {
        let items = vec![
            row(&[("amount", json!(1234.5)), ("budget", json!("980"))]),
            row(&[("amount", json!("n/a"))]),
        ];
        let model = table_model("Recent Deals", &items, &["amount", "budget"]).unwrap();
        assert_eq!(model.rows[0], vec!["$1,234.50", "$980.00"]);
        assert_eq!(model.rows[1], vec!["n/a", "—"]);
    }

    #[test]
    fn test_completed_glyphs() {
        let items = vec![
            row(&[("completed", json!(true))]),
            row(&[("completed", json!(false))]),
            row(&[("completed", Value::Null)]),
        ];
        let model = table_model("Your Tasks", &items, &["completed"]).unwrap();
        assert_eq!(model.rows[0][0], "✓");
        assert_eq!(model.rows[1][0], "✗");
        assert_eq!(model.rows[2][0], "—");
    }

    #[test]
    fn test_superuser_sections_in_order() {
        let summary = DashboardSummary {
            role: Role::Superuser,
            recent_campaigns: vec![row(&[("name", json!("Spring Push"))])],
            recent_leads: vec![row(&[("title", json!("Lead A"))])],
            recent_deals: vec![row(&[("title", json!("Deal A"))])],
            // Present but irrelevant to this role
            recent_accounts: vec![row(&[("name", json!("Acme"))])],
            ..Default::default()
        };
        let titles: Vec<_> = detail_sections(&summary)
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Recent Campaigns", "Recent Leads", "Recent Deals"]);
    }

    #[test]
    fn test_admin_sections_in_order() {
        let summary = DashboardSummary {
            role: Role::Admin,
            recent_accounts: vec![row(&[("name", json!("Acme"))])],
            recent_leads: vec![row(&[("title", json!("Lead A"))])],
            ..Default::default()
        };
        let titles: Vec<_> = detail_sections(&summary)
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Recent Accounts", "Recent Leads"]);
    }

    #[test]
    fn test_employee_sections_in_order() {
        let summary = DashboardSummary {
            role: Role::Employee,
            assigned_leads: vec![row(&[("title", json!("Lead A"))])],
            assigned_tasks: vec![row(&[("title", json!("Call back"))])],
            ..Default::default()
        };
        let titles: Vec<_> = detail_sections(&summary)
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Assigned Leads", "Your Tasks"]);
    }

    #[test]
    fn test_unknown_role_renders_no_sections() {
        let summary = DashboardSummary {
            role: Role::Unknown,
            recent_leads: vec![row(&[("title", json!("Lead A"))])],
            recent_accounts: vec![row(&[("name", json!("Acme"))])],
            ..Default::default()
        };
        assert!(detail_sections(&summary).is_empty());
    }

    #[test]
    fn test_empty_lists_skip_their_section() {
        let summary = DashboardSummary {
            role: Role::Admin,
            recent_leads: vec![row(&[("title", json!("Lead A"))])],
            ..Default::default()
        };
        let titles: Vec<_> = detail_sections(&summary)
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Recent Leads"]);
    }

    #[test]
    fn test_admin_example_payload() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{
                "total_accounts": 3,
                "role": "admin",
                "recent_accounts": [
                    {"name": "Acme", "region": "West", "created_at": "2024-01-01"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(summary.total_accounts, 3);

        let sections = detail_sections(&summary);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Recent Accounts");
        assert_eq!(sections[0].rows, vec![vec!["Acme", "West", "Jan 1, 2024"]]);
    }

    #[test]
    fn test_filter_is_case_insensitive_over_formatted_text() {
        let items = vec![
            row(&[("title", json!("Renewal")), ("amount", json!(1234.5))]),
            row(&[("title", json!("Upsell")), ("amount", json!(99.0))]),
        ];
        let model = table_model("Recent Deals", &items, &["title", "amount"]).unwrap();

        let hit = model.filtered("RENEW").unwrap();
        assert_eq!(hit.rows.len(), 1);
        assert_eq!(hit.rows[0][0], "Renewal");

        // Matches the formatted currency string, not the raw number
        let formatted = model.filtered("1,234").unwrap();
        assert_eq!(formatted.rows.len(), 1);
    }

    #[test]
    fn test_filter_empty_query_keeps_all_rows() {
        let items = vec![
            row(&[("title", json!("A"))]),
            row(&[("title", json!("B"))]),
        ];
        let model = table_model("Recent Leads", &items, &["title"]).unwrap();
        assert_eq!(model.filtered("").unwrap().rows.len(), 2);
        assert_eq!(model.filtered("   ").unwrap().rows.len(), 2);
    }

    #[test]
    fn test_fully_filtered_table_collapses() {
        let items = vec![row(&[("title", json!("Renewal"))])];
        let model = table_model("Recent Leads", &items, &["title"]).unwrap();
        assert_eq!(model.filtered("zzz"), None);
    }
}
