//! Media library page: list, upload, delete.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::net::types::Media;
use crate::util::guard::{RequiredRole, install_role_redirect};

const PAGE_SIZE: u32 = 50;

#[component]
pub fn MediaPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    install_role_redirect(session.state(), RequiredRole::Author, navigate);

    let items = RwSignal::new(Vec::<Media>::new());
    let error = RwSignal::new(None::<String>);
    let refresh = RwSignal::new(0_u64);
    // Upload completion fraction in [0, 1]; None when idle.
    let progress = RwSignal::new(None::<f64>);

    let session_load = session.clone();
    Effect::new(move || {
        refresh.track();
        let client = session_load.gateway().clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match client.list_media(1, PAGE_SIZE).await {
                Ok(listing) => {
                    items.set(listing.items);
                    error.set(None);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = client;
        }
    });

    let session_upload = session.clone();
    let on_file_selected = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.item(0)) else {
                return;
            };
            input.set_value("");
            progress.set(Some(0.0));
            let client = session_upload.gateway().clone();
            leptos::task::spawn_local(async move {
                let report = |fraction: f64| progress.set(Some(fraction));
                match client.upload_media(&file, Some(&report)).await {
                    Ok(_) => refresh.update(|n| *n += 1),
                    Err(err) => error.set(Some(err.to_string())),
                }
                progress.set(None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
            let _ = &session_upload;
        }
    };

    let session_delete = session.clone();
    let on_delete = Callback::new(move |id: i64| {
        let client = session_delete.gateway().clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match client.delete_media(id).await {
                Ok(()) => refresh.update(|n| *n += 1),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = client;
        }
    });

    view! {
        <div class="media-page">
            <h1>"Media"</h1>
            <Show when=move || error.get().is_some()>
                <p class="media-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <label class="media-page__upload">
                "Upload file"
                <input type="file" on:change=on_file_selected/>
            </label>
            <Show when=move || progress.get().is_some()>
                <p class="media-page__progress">
                    {move || {
                        let fraction = progress.get().unwrap_or_default();
                        format!("Uploading... {:.0}%", fraction * 100.0)
                    }}
                </p>
            </Show>
            <ul class="media-page__list">
                <For each=move || items.get() key=|media| media.id let:media>
                    <li class="media-page__item">
                        <span class="media-page__name">{media.filename.clone()}</span>
                        <span class="media-page__type">{media.mimetype.clone()}</span>
                        <button on:click=move |_| on_delete.run(media.id)>"Delete"</button>
                    </li>
                </For>
            </ul>
        </div>
    }
}
