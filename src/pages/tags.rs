//! Tag index.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::types::Tag;

#[component]
pub fn TagsPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let tags = RwSignal::new(Vec::<Tag>::new());
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let client = session.gateway().clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match client.list_tags().await {
                Ok(items) => tags.set(items),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = client;
        }
    });

    view! {
        <div class="taxonomy-page">
            <h1>"Tags"</h1>
            <Show when=move || error.get().is_some()>
                <p class="taxonomy-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <ul class="taxonomy-page__list">
                <For each=move || tags.get() key=|tag| tag.id let:tag>
                    <li class="taxonomy-page__item">{tag.name.clone()}</li>
                </For>
            </ul>
        </div>
    }
}
