//! Page-window computation for pagination controls.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Pages to render as links, centered on `current` within `1..=total`.
///
/// `width` is the maximum number of links. Degenerate inputs (zero pages,
/// out-of-range current) clamp rather than panic.
pub fn page_window(current: u32, total: u32, width: u32) -> Vec<u32> {
    if total == 0 || width == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let half = width / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = (start + width - 1).min(total);
    // Re-anchor when the window ran into the last page.
    start = end.saturating_sub(width - 1).max(1);
    (start..=end).collect()
}

/// Whether a "previous" link applies.
pub fn has_prev(current: u32) -> bool {
    current > 1
}

/// Whether a "next" link applies.
pub fn has_next(current: u32, total: u32) -> bool {
    current < total
}
