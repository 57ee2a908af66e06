//! Client-side threading of flat comment lists.
//!
//! The backend returns a post's comments as one flat list ordered by
//! creation time; replies reference their parent through `parent_id`. Pages
//! nest them before rendering.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use crate::net::types::Comment;

/// A comment with its nested replies, ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentNode {
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

/// Nest a flat comment list into top-level threads.
///
/// Input order is preserved at every level. A comment whose `parent_id`
/// does not appear in the list (e.g. the parent was deleted) is promoted to
/// a top-level thread rather than dropped.
pub fn thread_comments(comments: Vec<Comment>) -> Vec<CommentNode> {
    let known: std::collections::HashSet<i64> = comments.iter().map(|c| c.id).collect();

    let mut roots: Vec<CommentNode> = Vec::new();
    for comment in comments {
        match comment.parent_id.filter(|id| known.contains(id)) {
            None => roots.push(CommentNode {
                comment,
                replies: Vec::new(),
            }),
            Some(parent_id) => {
                // Parents always precede replies in creation order, so the
                // parent node already exists somewhere in the forest.
                if !attach_reply(&mut roots, parent_id, &comment) {
                    roots.push(CommentNode {
                        comment,
                        replies: Vec::new(),
                    });
                }
            }
        }
    }
    roots
}

fn attach_reply(nodes: &mut [CommentNode], parent_id: i64, comment: &Comment) -> bool {
    for node in nodes {
        if node.comment.id == parent_id {
            node.replies.push(CommentNode {
                comment: comment.clone(),
                replies: Vec::new(),
            });
            return true;
        }
        if attach_reply(&mut node.replies, parent_id, comment) {
            return true;
        }
    }
    false
}

/// Total number of comments in a threaded forest.
pub fn count_comments(nodes: &[CommentNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + count_comments(&node.replies))
        .sum()
}
