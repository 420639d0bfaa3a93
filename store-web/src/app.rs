//! Firmware Store App - root composition
//!
//! Theme shell, toast host, session provider, and the route table.

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes, A},
    path,
};

use crate::components::{Navbar, RequireAuth, ToastHost};
use crate::components::toast::provide_toast_context;
use crate::pages::{CheckoutPage, DashboardPage, LoginPage, RegisterPage, SubscribePage};
use crate::state::session::provide_session_context;

#[component]
pub fn App() -> impl IntoView {
    let toasts = provide_toast_context();
    provide_session_context(toasts);

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <ToastHost/>
                <main class="page-container">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=|| view! { <Redirect path="/login"/> }/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/register") view=RegisterPage/>
                        <Route
                            path=path!("/dashboard")
                            view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                        />
                        <Route
                            path=path!("/checkout/:firmware_id")
                            view=|| view! { <RequireAuth><CheckoutPage/></RequireAuth> }
                        />
                        <Route
                            path=path!("/subscribe")
                            view=|| view! { <RequireAuth><SubscribePage/></RequireAuth> }
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="centered-screen">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p class="subtitle">"The page you're looking for doesn't exist."</p>
                <A href="/dashboard">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to the catalog"
                    </span>
                </A>
            </div>
        </div>
    }
}
