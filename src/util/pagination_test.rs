use super::*;

#[test]
fn window_centers_on_the_current_page() {
    assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
}

#[test]
fn window_clamps_at_the_start() {
    assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_window(2, 10, 5), vec![1, 2, 3, 4, 5]);
}

#[test]
fn window_clamps_at_the_end() {
    assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
    assert_eq!(page_window(9, 10, 5), vec![6, 7, 8, 9, 10]);
}

#[test]
fn window_shrinks_when_fewer_pages_than_width() {
    assert_eq!(page_window(1, 3, 5), vec![1, 2, 3]);
    assert_eq!(page_window(1, 1, 5), vec![1]);
}

#[test]
fn degenerate_inputs_clamp() {
    assert!(page_window(1, 0, 5).is_empty());
    assert!(page_window(1, 10, 0).is_empty());
    assert_eq!(page_window(99, 3, 5), vec![1, 2, 3]);
}

#[test]
fn prev_next_flags() {
    assert!(!has_prev(1));
    assert!(has_prev(2));
    assert!(has_next(1, 2));
    assert!(!has_next(2, 2));
}
