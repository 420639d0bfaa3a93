//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::toast::use_toast_context;
use crate::state::session::{use_session_context, SessionState};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();
    let toasts = use_toast_context();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout(toasts);
        navigate("/login", Default::default());
    };

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/dashboard" attr:class="nav-link-clean">
                    <span class="nav-title">
                        <span class="brand-accent">"Firmware"</span>
                        <span class="brand-plain">"Store"</span>
                    </span>
                </A>
                {move || match session.state.get() {
                    SessionState::SignedIn(user) => {
                        let on_logout = on_logout.clone();
                        view! {
                            <div class="nav-session">
                                <span class="nav-user">{user.name}</span>
                                <button class="btn btn-outline" on:click=on_logout>
                                    "Logout"
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                    _ => view! {
                        <div class="nav-session">
                            <A href="/login" attr:class="nav-link-clean">"Login"</A>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </nav>
    }
}
