use super::*;

fn comment(id: i64, parent_id: Option<i64>) -> Comment {
    Comment {
        id,
        post_id: 1,
        user_id: None,
        user: None,
        content: format!("comment {id}"),
        parent_id,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn flat_list_stays_flat() {
    let threads = thread_comments(vec![comment(1, None), comment(2, None)]);
    assert_eq!(threads.len(), 2);
    assert!(threads.iter().all(|node| node.replies.is_empty()));
}

#[test]
fn replies_nest_under_their_parent_in_order() {
    let threads = thread_comments(vec![
        comment(1, None),
        comment(2, Some(1)),
        comment(3, Some(1)),
        comment(4, None),
    ]);
    assert_eq!(threads.len(), 2);
    assert_eq!(threads[0].comment.id, 1);
    let reply_ids: Vec<i64> = threads[0].replies.iter().map(|n| n.comment.id).collect();
    assert_eq!(reply_ids, vec![2, 3]);
    assert_eq!(threads[1].comment.id, 4);
}

#[test]
fn nested_replies_follow_the_chain() {
    let threads = thread_comments(vec![
        comment(1, None),
        comment(2, Some(1)),
        comment(3, Some(2)),
    ]);
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].replies[0].comment.id, 2);
    assert_eq!(threads[0].replies[0].replies[0].comment.id, 3);
}

#[test]
fn orphaned_reply_is_promoted_to_top_level() {
    let threads = thread_comments(vec![comment(1, None), comment(2, Some(99))]);
    assert_eq!(threads.len(), 2);
    assert_eq!(threads[1].comment.id, 2);
}

#[test]
fn count_includes_every_nesting_level() {
    let threads = thread_comments(vec![
        comment(1, None),
        comment(2, Some(1)),
        comment(3, Some(2)),
        comment(4, None),
    ]);
    assert_eq!(count_comments(&threads), 4);
}

#[test]
fn empty_list_yields_no_threads() {
    assert!(thread_comments(Vec::new()).is_empty());
}
