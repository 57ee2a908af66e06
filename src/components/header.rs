//! Site-wide navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only component that renders differently for every auth state, and
//! the place the logout control lives.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();

    let state_user = session.state();
    let username = Signal::derive(move || state_user.get().user.map(|user| user.username));
    let state_author = session.state();
    let show_dashboard = move || state_author.get().is_author();

    let session_logout = session.clone();
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            // Best-effort server teardown; local logout never waits on it.
            let client = session_logout.gateway().clone();
            leptos::task::spawn_local(async move {
                client.logout_notify().await;
            });
        }
        session_logout.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="site-header">
            <nav class="site-header__nav">
                <A href="/">"Posts"</A>
                <A href="/categories">"Categories"</A>
                <A href="/tags">"Tags"</A>
                <Show when=show_dashboard>
                    <A href="/dashboard">"Dashboard"</A>
                </Show>
            </nav>
            <div class="site-header__auth">
                <Show
                    when=move || username.get().is_some()
                    fallback=|| view! {
                        <A href="/login">"Log in"</A>
                        <A href="/register">"Register"</A>
                    }
                >
                    <span class="site-header__user">{move || username.get().unwrap_or_default()}</span>
                    <button class="site-header__logout" on:click=on_logout.clone()>
                        "Log out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
