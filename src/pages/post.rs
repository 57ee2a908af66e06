//! Post detail page with its comment thread.
//!
//! Post content is rendered as plain text; rich rendering is a separate
//! concern for the host application.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::AppSession;
use crate::components::comment_thread::CommentThread;
use crate::net::types::{Comment, CreateCommentRequest, Post};
use crate::util::comments::{CommentNode, count_comments, thread_comments};
use crate::util::time::format_date;

#[component]
pub fn PostPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    let post = RwSignal::new(None::<Post>);
    let threads = RwSignal::new(Vec::<CommentNode>::new());
    let error = RwSignal::new(None::<String>);

    let new_comment = RwSignal::new(String::new());
    let reply_to = RwSignal::new(None::<i64>);
    let submitting = RwSignal::new(false);

    let state_auth = session.state();
    let can_comment = Signal::derive(move || state_auth.get().is_authenticated);

    // Load the post whenever the slug changes, then its comments.
    let session_load = session.clone();
    Effect::new(move || {
        let slug_value = slug();
        if slug_value.is_empty() {
            return;
        }
        let client = session_load.gateway().clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match client.post_by_slug(&slug_value).await {
                Ok(loaded) => {
                    let post_id = loaded.id;
                    post.set(Some(loaded));
                    match client.list_comments(post_id).await {
                        Ok(flat) => threads.set(thread_comments(flat)),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (slug_value, client);
        }
    });

    let on_reply = Callback::new(move |comment_id: i64| reply_to.set(Some(comment_id)));

    let session_submit = session.clone();
    let on_submit_comment = move |_| {
        if submitting.get() {
            return;
        }
        let content = new_comment.get().trim().to_owned();
        if content.is_empty() {
            return;
        }
        let Some(post_id) = post.get().map(|p| p.id) else {
            return;
        };
        let request = CreateCommentRequest {
            post_id,
            content,
            parent_id: reply_to.get(),
        };
        submitting.set(true);
        let client = session_submit.gateway().clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match client.create_comment(&request).await {
                Ok(_) => {
                    new_comment.set(String::new());
                    reply_to.set(None);
                    match client.list_comments(post_id).await {
                        Ok(flat) => threads.set(thread_comments(flat)),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, client);
        }
    };

    view! {
        <div class="post-page">
            <Show when=move || error.get().is_some()>
                <p class="post-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || post.get().is_some()>
                {move || post.get().map(|post| view! {
                    <article class="post">
                        <h1 class="post__title">{post.title.clone()}</h1>
                        <div class="post__meta">
                            <span class="post__date">{format_date(&post.created_at).to_owned()}</span>
                        </div>
                        <div class="post__content">{post.content.clone()}</div>
                    </article>
                })}
            </Show>
            <section class="post-page__comments">
                <h2>{move || format!("Comments ({})", count_comments(&threads.get()))}</h2>
                {move || {
                    let nodes = threads.get();
                    let on_reply = can_comment.get().then_some(on_reply);
                    view! { <CommentThread nodes=nodes on_reply=on_reply/> }
                }}
                <Show
                    when=move || can_comment.get()
                    fallback=|| view! {
                        <p class="post-page__login-hint">"Log in to join the discussion."</p>
                    }
                >
                    <div class="comment-form">
                        <Show when=move || reply_to.get().is_some()>
                            <p class="comment-form__replying">
                                "Replying to a comment. "
                                <button on:click=move |_| reply_to.set(None)>"Cancel"</button>
                            </p>
                        </Show>
                        <textarea
                            class="comment-form__input"
                            placeholder="Write a comment..."
                            prop:value=move || new_comment.get()
                            on:input=move |ev| new_comment.set(event_target_value(&ev))
                        />
                        <button
                            class="comment-form__submit"
                            disabled=move || submitting.get()
                            on:click=on_submit_comment.clone()
                        >
                            "Post comment"
                        </button>
                    </div>
                </Show>
            </section>
        </div>
    }
}
