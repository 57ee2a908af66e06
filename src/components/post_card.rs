//! Card summarizing one post in list views.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Post;
use crate::util::time::format_date;

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = format!("/posts/{}", post.slug);
    let date = format_date(&post.created_at).to_owned();
    let author = post
        .author
        .as_ref()
        .map(|user| user.username.clone())
        .unwrap_or_default();
    let categories = post
        .categories
        .iter()
        .map(|category| category.name.clone())
        .collect::<Vec<_>>()
        .join(", ");
    let has_categories = !categories.is_empty();

    view! {
        <article class="post-card">
            <h2 class="post-card__title">
                <A href=href>{post.title.clone()}</A>
            </h2>
            <div class="post-card__meta">
                <span class="post-card__author">{author}</span>
                <span class="post-card__date">{date}</span>
                <Show when=move || has_categories>
                    <span class="post-card__categories">{categories.clone()}</span>
                </Show>
            </div>
        </article>
    }
}
