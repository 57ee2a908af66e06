//! Post management dashboard for authors and admins.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route for writers. It is role-gated:
//! visitors without at least the author role are bounced to `/login`.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::pagination::Pagination;
use crate::net::types::{Post, PostStatus, UpdatePostRequest};
use crate::util::guard::{RequiredRole, install_role_redirect};

const PAGE_SIZE: u32 = 20;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    install_role_redirect(session.state(), RequiredRole::Author, navigate);

    let posts = RwSignal::new(Vec::<Post>::new());
    let page = RwSignal::new(1_u32);
    let total_pages = RwSignal::new(1_u32);
    let total_posts = RwSignal::new(0_u64);
    let error = RwSignal::new(None::<String>);
    // Bumped after every mutation to refetch the listing.
    let refresh = RwSignal::new(0_u64);

    let session_load = session.clone();
    Effect::new(move || {
        let page_value = page.get();
        refresh.track();
        let client = session_load.gateway().clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // No status filter: drafts belong in the management view.
            match client.list_posts(page_value, PAGE_SIZE, None).await {
                Ok(listing) => {
                    posts.set(listing.items);
                    total_pages.set(listing.pages.max(1));
                    total_posts.set(listing.total);
                    error.set(None);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (page_value, client);
        }
    });

    let session_toggle = session.clone();
    let on_toggle_status = Callback::new(move |(id, status): (i64, PostStatus)| {
        let next = match status {
            PostStatus::Draft => PostStatus::Published,
            PostStatus::Published => PostStatus::Draft,
        };
        let request = UpdatePostRequest {
            status: Some(next),
            ..UpdatePostRequest::default()
        };
        let client = session_toggle.gateway().clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match client.update_post(id, &request).await {
                Ok(_) => refresh.update(|n| *n += 1),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, client);
        }
    });

    let session_delete = session.clone();
    let on_delete = Callback::new(move |id: i64| {
        let client = session_delete.gateway().clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match client.delete_post(id).await {
                Ok(()) => refresh.update(|n| *n += 1),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = client;
        }
    });

    let on_select = Callback::new(move |selected: u32| page.set(selected));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <span class="dashboard-page__stats">
                    {move || format!("{} posts", total_posts.get())}
                </span>
                <A href="/dashboard/media">"Media"</A>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="dashboard-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <table class="dashboard-page__table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Status"</th>
                        <th>"Updated"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || posts.get() key=|post| (post.id, post.status) let:post>
                        <DashboardRow post=post on_toggle_status=on_toggle_status on_delete=on_delete/>
                    </For>
                </tbody>
            </table>
            <Pagination
                current=Signal::derive(move || page.get())
                total=Signal::derive(move || total_pages.get())
                on_select=on_select
            />
        </div>
    }
}

#[component]
fn DashboardRow(
    post: Post,
    on_toggle_status: Callback<(i64, PostStatus)>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = post.id;
    let status = post.status;
    let toggle_label = match status {
        PostStatus::Draft => "Publish",
        PostStatus::Published => "Unpublish",
    };

    view! {
        <tr class="dashboard-row">
            <td class="dashboard-row__title">{post.title.clone()}</td>
            <td class="dashboard-row__status">{status.as_str()}</td>
            <td class="dashboard-row__updated">
                {crate::util::time::format_date(&post.updated_at).to_owned()}
            </td>
            <td class="dashboard-row__actions">
                <button on:click=move |_| on_toggle_status.run((id, status))>
                    {toggle_label}
                </button>
                <button on:click=move |_| on_delete.run(id)>"Delete"</button>
            </td>
        </tr>
    }
}
