//! Login Page
//!
//! Email/password form. A successful login saves the token pair and
//! navigates to the dashboard; failures surface as an error toast and the
//! form stays usable.

use leptos::*;

use crate::api;
use crate::auth::{self, tokens};
use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    // Already signed in: straight to the dashboard
    create_effect(move |_| {
        if auth::is_authenticated() {
            auth::redirect_to(auth::DASHBOARD_PATH);
        }
    });

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = email.get();
        let password = password.get();
        set_submitting.set(true);

        let state = state_for_submit.clone();
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(pair) => {
                    tokens::save(&pair.access, &pair.refresh);
                    auth::redirect_to(auth::DASHBOARD_PATH);
                }
                Err(e) => {
                    state.show_error(&e);
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-[70vh]">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-md space-y-6">
                <div class="text-center">
                    <span class="text-4xl">"📇"</span>
                    <h1 class="text-2xl font-bold mt-2">"CRM Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Sign in to continue"</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Email"</label>
                        <input
                            type="email"
                            required
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 border border-gray-600 rounded-lg px-4 py-2
                                   text-white focus:outline-none focus:border-gray-400"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Password"</label>
                        <input
                            type="password"
                            required
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 border border-gray-600 rounded-lg px-4 py-2
                                   text-white focus:outline-none focus:border-gray-400"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors"
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
