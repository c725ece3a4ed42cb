use std::rc::Rc;

use dioxus::html::FileData;
use dioxus::prelude::*;
use picfield_core::{exceeds_size_hint, format_size};
use picfield_io::{ImageUploadField, ObjectUrl};

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::DEBUG) {
        web_sys::console::warn_1(&format!("logger init failed: {e}").into());
    }
    dioxus::launch(app);
}

/// Root application component.
///
/// Plays the host role for [`ImageUploadField`]: owns the selected file
/// and the preview derived from it, and decides what to do with each
/// change the field reports.
fn app() -> Element {
    // --- Host-owned state ---
    let mut selected = use_signal(|| Option::<FileData>::None);
    let mut preview = use_signal(|| Option::<Rc<ObjectUrl>>::None);
    let mut generation = use_signal(|| 0u64);

    // --- Field change handler ---
    let on_change = move |file: Option<FileData>| {
        // Any read still in flight belongs to a superseded selection.
        generation += 1;
        let my_generation = *generation.peek();

        preview.set(None);
        selected.set(file.clone());

        let Some(file) = file else {
            tracing::info!("selection cleared");
            return;
        };
        tracing::info!(
            "selected {:?} ({}, {})",
            file.name(),
            file.content_type().unwrap_or_default(),
            format_size(file.size())
        );

        spawn(async move {
            let outcome = file.read_bytes().await;

            if *generation.peek() != my_generation {
                return;
            }

            let bytes = match outcome {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("failed to read {:?}: {e}", file.name());
                    return;
                }
            };
            let mime = file.content_type().unwrap_or_default();
            match ObjectUrl::from_bytes(&bytes, &mime) {
                Ok(url) => preview.set(Some(Rc::new(url))),
                Err(e) => tracing::warn!("failed to create preview for {:?}: {e}", file.name()),
            }
        });
    };

    let preview_src = preview().map(|url| url.as_str().to_owned());

    // --- Layout ---
    rsx! {
        // Tailwind CSS utilities via the browser build.
        script { src: "https://cdn.tailwindcss.com" }
        style { dangerous_inner_html: include_str!("../assets/theme.css") }

        div { class: "min-h-screen bg-[var(--bg)] text-[var(--text)] flex flex-col items-center p-6",
            div { class: "w-full max-w-md flex flex-col gap-4",
                ImageUploadField {
                    value: selected(),
                    preview: preview_src,
                    on_change: on_change,
                    label: "Cover image",
                }

                if let Some(ref file) = selected() {
                    {render_details(file)}
                }
            }
        }
    }
}

/// Render what the host knows about the selected file.
///
/// Size and type checks happen here, after the field has handed the file
/// over; the field itself enforces neither.
fn render_details(file: &FileData) -> Element {
    let name = file.name();
    let mime = file
        .content_type()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "unknown type".to_owned());
    let size = format_size(file.size());
    let too_large = exceeds_size_hint(file.size());
    let not_image = !file
        .content_type()
        .is_some_and(|m| picfield_core::is_image(&m));

    rsx! {
        div { class: "bg-[var(--surface)] rounded p-3 text-sm",
            p { class: "text-[var(--text-secondary)]", "{name}" }
            p { class: "text-[var(--muted)]", "{mime}, {size}" }
            if too_large {
                p { class: "text-[var(--text-warning)]", "Larger than 10MB" }
            }
            if not_image {
                p { class: "text-[var(--text-warning)]", "Not an image file" }
            }
        }
    }
}
