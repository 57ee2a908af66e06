//! Pagination controls driven by [`crate::util::pagination`].

use leptos::prelude::*;

use crate::util::pagination::{has_next, has_prev, page_window};

/// Number of page links rendered around the current page.
const WINDOW_WIDTH: u32 = 5;

#[component]
pub fn Pagination(
    current: Signal<u32>,
    total: Signal<u32>,
    on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <nav class="pagination">
            <Show when=move || has_prev(current.get())>
                <button
                    class="pagination__link"
                    on:click=move |_| on_select.run(current.get() - 1)
                >
                    "Prev"
                </button>
            </Show>
            <For
                each=move || page_window(current.get(), total.get(), WINDOW_WIDTH)
                key=|page| *page
                let:page
            >
                <button
                    class="pagination__link"
                    class:pagination__link--current=move || current.get() == page
                    on:click=move |_| on_select.run(page)
                >
                    {page}
                </button>
            </For>
            <Show when=move || has_next(current.get(), total.get())>
                <button
                    class="pagination__link"
                    on:click=move |_| on_select.run(current.get() + 1)
                >
                    "Next"
                </button>
            </Show>
        </nav>
    }
}
