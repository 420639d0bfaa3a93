//! Route guard for screens that require a signed-in session.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::{use_session_context, SessionState};

/// Renders its children only for an authenticated session.
///
/// While a persisted credential is still being resolved the guard shows a
/// neutral placeholder instead of redirecting, so a valid session does not
/// bounce through the login screen on a hard reload.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session_context();

    view! {
        {move || match session.state.get() {
            SessionState::Restoring => view! {
                <div class="centered-screen">
                    <div class="card" style="max-width: 400px; text-align: center;">
                        <p class="subtitle">"Checking session..."</p>
                    </div>
                </div>
            }
            .into_any(),
            SessionState::SignedOut => view! { <Redirect path="/login"/> }.into_any(),
            SessionState::SignedIn(_) => children().into_any(),
        }}
    }
}
