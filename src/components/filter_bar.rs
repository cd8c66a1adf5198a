//! Filter Bar Component
//!
//! Text filter over the detail tables. Keystrokes are debounced into the
//! applied-filter signal so rapid typing triggers a single re-filter pass.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::state::global::GlobalState;

/// Delay before an edit is applied as the active filter.
const FILTER_DEBOUNCE_MS: u32 = 250;

/// Search input plus a clear button.
#[component]
pub fn FilterBar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let filter = state.filter;

    // What the input shows; the applied filter lags it by the debounce.
    let (draft, set_draft) = create_signal(String::new());

    // Replacing the pending timeout drops and thereby cancels it.
    let pending = store_value(None::<Timeout>);

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        set_draft.set(value.clone());

        let timeout = Timeout::new(FILTER_DEBOUNCE_MS, move || {
            filter.set(value);
        });
        pending.update_value(|slot| *slot = Some(timeout));
    };

    let on_clear = move |_| {
        pending.update_value(|slot| *slot = None);
        set_draft.set(String::new());
        filter.set(String::new());
    };

    view! {
        <div class="flex items-center space-x-2">
            <input
                type="text"
                placeholder="Filter rows..."
                prop:value=draft
                on:input=on_input
                class="flex-1 bg-gray-800 border border-gray-700 rounded-lg px-4 py-2
                       text-white placeholder-gray-500 focus:outline-none focus:border-gray-500"
            />
            <button
                on:click=on_clear
                class="px-4 py-2 rounded-lg bg-gray-700 text-gray-300 hover:bg-gray-600
                       hover:text-white transition-colors"
            >
                "Clear"
            </button>
        </div>
    }
}
