//! Nested rendering of a threaded comment forest.

#[cfg(test)]
#[path = "comment_thread_test.rs"]
mod comment_thread_test;

use leptos::prelude::*;

use crate::net::types::Comment;
use crate::util::comments::CommentNode;
use crate::util::time::relative_label;

/// Display name for a comment's author; guests show as "anonymous".
fn author_name(comment: &Comment) -> String {
    comment
        .user
        .as_ref()
        .map_or_else(|| "anonymous".to_owned(), |user| user.username.clone())
}

#[component]
pub fn CommentThread(
    nodes: Vec<CommentNode>,
    /// Present only when the visitor may reply (i.e. is authenticated).
    on_reply: Option<Callback<i64>>,
) -> impl IntoView {
    view! {
        <div class="comments">
            {nodes.iter().map(|node| render_node(node, on_reply)).collect_view()}
        </div>
    }
}

fn render_node(node: &CommentNode, on_reply: Option<Callback<i64>>) -> AnyView {
    let comment_id = node.comment.id;
    let author = author_name(&node.comment);
    let when = relative_label(&node.comment.created_at);
    let body = node.comment.content.clone();
    let replies = node
        .replies
        .iter()
        .map(|reply| render_node(reply, on_reply))
        .collect_view();

    view! {
        <div class="comment">
            <div class="comment__meta">
                <span class="comment__author">{author}</span>
                <span class="comment__time">{when}</span>
            </div>
            <p class="comment__body">{body}</p>
            {on_reply.map(|on_reply| view! {
                <button class="comment__reply" on:click=move |_| on_reply.run(comment_id)>
                    "Reply"
                </button>
            })}
            <div class="comment__replies">{replies}</div>
        </div>
    }
    .into_any()
}
