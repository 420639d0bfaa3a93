//! Registration Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::toast::use_toast_context;
use crate::state::session::use_session_context;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session_context();
    let toasts = use_toast_context();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);

        let name_value = name.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if session
                .register(toasts, &name_value, &email_value, &password_value)
                .await
            {
                navigate("/dashboard", Default::default());
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="centered-screen">
            <div class="card" style="max-width: 420px; width: 100%;">
                <h1 class="card-title">"Create account"</h1>
                <p class="subtitle">"Buy and manage firmware for your devices"</p>

                <form on:submit=on_submit>
                    <div class="field">
                        <label>"Name"</label>
                        <input
                            type="text"
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Email"</label>
                        <input
                            type="email"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Password"</label>
                        <input
                            type="password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button class="btn btn-full" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <p class="subtitle" style="margin-top: 16px; text-align: center;">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
