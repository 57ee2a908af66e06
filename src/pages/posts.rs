//! Public post list with pagination.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::pagination::Pagination;
use crate::components::post_card::PostCard;
use crate::net::types::{Post, PostStatus};

/// Posts fetched per page.
const PAGE_SIZE: u32 = 10;

#[component]
pub fn PostsPage() -> impl IntoView {
    let session = expect_context::<AppSession>();

    let posts = RwSignal::new(Vec::<Post>::new());
    let page = RwSignal::new(1_u32);
    let total_pages = RwSignal::new(1_u32);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // Refetch whenever the page changes.
    Effect::new(move || {
        let page_value = page.get();
        let client = session.gateway().clone();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match client
                .list_posts(page_value, PAGE_SIZE, Some(PostStatus::Published))
                .await
            {
                Ok(listing) => {
                    posts.set(listing.items);
                    total_pages.set(listing.pages.max(1));
                    error.set(None);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (page_value, client);
        }
    });

    let on_select = Callback::new(move |selected: u32| page.set(selected));

    view! {
        <div class="posts-page">
            <h1>"Posts"</h1>
            <Show when=move || error.get().is_some()>
                <p class="posts-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() && posts.get().is_empty() && error.get().is_none()>
                <p class="posts-page__empty">"Nothing published yet."</p>
            </Show>
            <For each=move || posts.get() key=|post| post.id let:post>
                <PostCard post=post/>
            </For>
            <Pagination
                current=Signal::derive(move || page.get())
                total=Signal::derive(move || total_pages.get())
                on_select=on_select
            />
        </div>
    }
}
