//! Category index.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::types::Category;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let categories = RwSignal::new(Vec::<Category>::new());
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let client = session.gateway().clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match client.list_categories().await {
                Ok(items) => categories.set(items),
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
            <h1>"Categories"</h1>
            <Show when=move || error.get().is_some()>
                <p class="taxonomy-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <ul class="taxonomy-page__list">
                <For each=move || categories.get() key=|category| category.id let:category>
                    <li class="taxonomy-page__item">
                        <span class="taxonomy-page__name">{category.name.clone()}</span>
                        {category.description.clone().map(|description| view! {
                            <span class="taxonomy-page__description">{description}</span>
                        })}
                    </li>
                </For>
            </ul>
        </div>
    }
}
