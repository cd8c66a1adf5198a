//! Navigation Component
//!
//! Header bar with the brand and a logout button. Hidden on the login page.

use leptos::*;
use leptos_router::*;

use crate::auth;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let location = use_location();
    let on_login_page = create_memo(move |_| location.pathname.get().starts_with(auth::LOGIN_PATH));

    view! {
        {move || {
            if on_login_page.get() {
                view! {}.into_view()
            } else {
                view! {
                    <nav class="bg-gray-800 border-b border-gray-700">
                        <div class="container mx-auto px-4">
                            <div class="flex items-center justify-between h-16">
                                <A href="/" class="flex items-center space-x-3">
                                    <span class="text-2xl">"📇"</span>
                                    <span class="text-xl font-bold text-white">"CRM Dashboard"</span>
                                </A>

                                <button
                                    on:click=move |_| auth::spawn_logout()
                                    class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                >
                                    "Log Out"
                                </button>
                            </div>
                        </div>
                    </nav>
                }
                .into_view()
            }
        }}
    }
}
