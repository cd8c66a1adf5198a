//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::state::summary::{DashboardSummary, Role};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Last successfully fetched dashboard payload
    pub summary: RwSignal<Option<DashboardSummary>>,
    /// Whether a dashboard fetch is in flight
    pub loading: RwSignal<bool>,
    /// Fatal fetch failure shown as a banner with a retry action.
    /// Kept separate from `error`, which is a transient toast.
    pub load_error: RwSignal<Option<String>>,
    /// Live filter query applied to the detail tables
    pub filter: RwSignal<String>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            summary: create_rw_signal(None),
            loading: create_rw_signal(false),
            load_error: create_rw_signal(None),
            filter: create_rw_signal(String::new()),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    /// Role reported by the last fetch; `Unknown` until data arrives.
    pub fn role(&self) -> Role {
        self.summary
            .get()
            .map(|s| s.role)
            .unwrap_or(Role::Unknown)
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults_to_unknown() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        assert_eq!(state.role(), Role::Unknown);

        runtime.dispose();
    }

    #[test]
    fn test_role_follows_summary() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        state.summary.set(Some(DashboardSummary {
            role: Role::Admin,
            ..Default::default()
        }));
        assert_eq!(state.role(), Role::Admin);

        runtime.dispose();
    }

    #[test]
    fn test_new_starts_idle() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        assert!(!state.loading.get());
        assert!(state.load_error.get().is_none());
        assert!(state.filter.get().is_empty());

        runtime.dispose();
    }
}
