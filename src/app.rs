//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::net::api::ApiClient;
use crate::pages::{
    categories::CategoriesPage, dashboard::DashboardPage, login::LoginPage, media::MediaPage,
    post::PostPage, posts::PostsPage, register::RegisterPage, tags::TagsPage,
};
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStorage;

/// The session store as provided through context to every page.
pub type AppSession = SessionStore<ApiClient>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single session store instance, kicks off the authoritative
/// restore, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: AppSession =
        SessionStore::new(ApiClient::browser(), Arc::new(BrowserStorage));
    provide_context(session.clone());

    // Reconcile the optimistic snapshot with the backend once at startup.
    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.restore().await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/blog-client.css"/>
        <Title text="Blog"/>

        <Router>
            <Header/>
            <main class="content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=PostsPage/>
                    <Route path=StaticSegment("posts") view=PostsPage/>
                    <Route path=(StaticSegment("posts"), ParamSegment("slug")) view=PostPage/>
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                    <Route path=StaticSegment("tags") view=TagsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("media"))
                        view=MediaPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
