//! Labeled image-upload field with drag-and-drop, file picker, preview,
//! and removal.

use std::rc::Rc;

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdImage, LdX};
use picfield_core::view::{DROPZONE_HINT, DROPZONE_PROMPT, PREVIEW_ALT, REMOVE_LABEL};
use picfield_core::{Dropzone, FieldView, IMAGE_ACCEPT, picked};

use crate::picker;

/// Classes shared by both dropzone states.
const DROPZONE_BASE_CLASS: &str =
    "border-2 border-dashed rounded-lg p-6 text-center cursor-pointer transition-all";

/// Props for the [`ImageUploadField`] component.
#[derive(Props, Clone)]
pub struct ImageUploadFieldProps {
    /// Currently selected file. Owned by the host; not used for rendering.
    value: Option<FileData>,
    /// Renderable reference to the selected image (e.g. an object URL).
    /// Decides which view renders.
    preview: Option<String>,
    /// Called with the newly selected file, or `None` on removal.
    on_change: EventHandler<Option<FileData>>,
    /// Text shown above the control.
    label: String,
}

impl PartialEq for ImageUploadFieldProps {
    fn eq(&self, other: &Self) -> bool {
        let values_eq = match (&self.value, &other.value) {
            (Some(a), Some(b)) => {
                a.name() == b.name()
                    && a.size() == b.size()
                    && a.last_modified() == b.last_modified()
            }
            (None, None) => true,
            _ => false,
        };
        values_eq
            && self.preview == other.preview
            && self.on_change == other.on_change
            && self.label == other.label
    }
}

/// A labeled image-upload control.
///
/// Shows the host's `preview` with a removal button when there is one,
/// otherwise a dropzone. Dropped files are forwarded only when the
/// first one is an image; files chosen in the picker (opened by clicking
/// the dropzone) are forwarded whatever their type. Empty lists and
/// rejected drops are ignored without any message.
///
/// The field holds no copy of the selection: every change goes to the
/// host through `on_change`, and the host answers with new props.
#[component]
pub fn ImageUploadField(props: ImageUploadFieldProps) -> Element {
    let mut zone = use_signal(Dropzone::new);
    let mut file_input = use_signal(|| Option::<Rc<MountedData>>::None);
    let on_change = props.on_change;

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        let files = evt.files();
        let accepted = zone.write().receive_drop(&files, FileData::content_type).cloned();
        if let Some(file) = accepted {
            on_change.call(Some(file));
        } else if let Some(first) = files.first() {
            tracing::debug!(
                "ignoring dropped file {:?} with non-image type {:?}",
                first.name(),
                first.content_type()
            );
        }
    };

    let handle_files = move |evt: FormEvent| {
        let files = evt.files();
        if let Some(file) = picked(&files) {
            on_change.call(Some(file.clone()));
        }
    };

    let open_picker = move |_| {
        let input = file_input();
        if let Err(e) = picker::open(input.as_deref()) {
            tracing::warn!("could not open file picker: {e}");
        }
    };

    let view = FieldView::for_preview(props.preview.as_deref());
    let hover_class = dropzone_class(zone().is_hovering());

    rsx! {
        div {
            label { class: "block text-[var(--text-heading)] font-semibold mb-2",
                "{props.label}"
            }

            {match view {
                FieldView::Preview { src } => rsx! {
                    div { class: "relative mb-4",
                        img {
                            src: "{src}",
                            alt: PREVIEW_ALT,
                            class: "w-full h-48 object-cover rounded-lg",
                        }
                        button {
                            r#type: "button",
                            class: "absolute top-2 right-2 p-1 bg-[var(--btn-danger)] hover:bg-[var(--btn-danger-hover)] rounded-lg cursor-pointer",
                            aria_label: REMOVE_LABEL,
                            title: REMOVE_LABEL,
                            onclick: move |_| on_change.call(None),
                            Icon { width: 20, height: 20, class: "text-white", icon: LdX }
                        }
                    }
                },
                FieldView::Dropzone => rsx! {
                    div {
                        class: "{DROPZONE_BASE_CLASS} {hover_class}",
                        ondragenter: move |evt| {
                            evt.prevent_default();
                            zone.write().drag_enter();
                        },
                        ondragover: move |evt| {
                            evt.prevent_default();
                            zone.write().drag_over();
                        },
                        ondragleave: move |_| {
                            zone.write().drag_leave();
                        },
                        ondrop: handle_drop,
                        onclick: open_picker,

                        Icon {
                            width: 32,
                            height: 32,
                            class: "text-[var(--muted)] mx-auto mb-2",
                            icon: LdImage,
                        }
                        p { class: "text-[var(--text-secondary)] text-sm mb-1", "{DROPZONE_PROMPT}" }
                        p { class: "text-[var(--muted)] text-xs", "{DROPZONE_HINT}" }
                    }
                },
            }}

            input {
                r#type: "file",
                accept: IMAGE_ACCEPT,
                class: "hidden",
                onmounted: move |evt: MountedEvent| file_input.set(Some(evt.data())),
                onchange: handle_files,
            }
        }
    }
}

/// Border and background classes for the dropzone's hover state.
const fn dropzone_class(hovering: bool) -> &'static str {
    if hovering {
        "border-[var(--border-accent)] bg-[var(--surface-active)]"
    } else {
        "border-[var(--border-muted)] hover:border-[var(--border-accent)]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_highlight_follows_dropzone_state() {
        let mut zone = Dropzone::new();
        assert!(!dropzone_class(zone.is_hovering()).contains("bg-[var(--surface-active)]"));

        zone.drag_over();
        assert!(dropzone_class(zone.is_hovering()).contains("bg-[var(--surface-active)]"));

        zone.dropped();
        assert!(!dropzone_class(zone.is_hovering()).contains("bg-[var(--surface-active)]"));
    }

    #[test]
    fn hover_classes_differ() {
        assert_ne!(dropzone_class(true), dropzone_class(false));
    }

    // --- Rendered markup ---

    const LABEL: &str = "Cover image";

    fn without_preview() -> Element {
        rsx! {
            ImageUploadField {
                on_change: move |_: Option<FileData>| {},
                label: "Cover image",
            }
        }
    }

    fn with_preview() -> Element {
        rsx! {
            ImageUploadField {
                preview: Some(String::from("blob://abc")),
                on_change: move |_: Option<FileData>| {},
                label: "Cover image",
            }
        }
    }

    fn with_blank_preview() -> Element {
        rsx! {
            ImageUploadField {
                preview: Some(String::new()),
                on_change: move |_: Option<FileData>| {},
                label: "Cover image",
            }
        }
    }

    fn render(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn dropzone_renders_without_preview() {
        let html = render(without_preview);
        assert!(html.contains(DROPZONE_PROMPT), "missing prompt in {html}");
        assert!(html.contains(DROPZONE_HINT), "missing hint in {html}");
        assert!(!html.contains("alt=\"Preview\""), "preview image leaked into {html}");
        assert!(!html.contains(REMOVE_LABEL), "removal control leaked into {html}");
    }

    #[test]
    fn preview_renders_image_and_removal_only() {
        let html = render(with_preview);
        assert!(html.contains("src=\"blob://abc\""), "missing preview src in {html}");
        assert!(html.contains("alt=\"Preview\""), "missing preview alt in {html}");
        assert!(html.contains(REMOVE_LABEL), "missing removal control in {html}");
        assert!(!html.contains(DROPZONE_PROMPT), "dropzone leaked into {html}");
        assert!(!html.contains(DROPZONE_HINT), "dropzone hint leaked into {html}");
    }

    #[test]
    fn blank_preview_renders_dropzone() {
        let html = render(with_blank_preview);
        assert!(html.contains(DROPZONE_PROMPT), "missing prompt in {html}");
        assert!(!html.contains(REMOVE_LABEL), "removal control leaked into {html}");
    }

    #[test]
    fn label_and_hidden_input_render_in_both_views() {
        for root in [without_preview as fn() -> Element, with_preview] {
            let html = render(root);
            assert!(html.contains(LABEL), "missing label in {html}");
            assert!(html.contains("type=\"file\""), "missing file input in {html}");
            assert!(
                html.contains("accept=\"image/*\""),
                "missing accept filter in {html}"
            );
        }
    }

    #[test]
    fn removal_button_is_the_only_button() {
        assert_eq!(render(with_preview).matches("<button").count(), 1);
        assert_eq!(render(without_preview).matches("<button").count(), 0);
    }

    #[test]
    fn dropzone_starts_without_highlight() {
        let html = render(without_preview);
        assert!(html.contains(dropzone_class(false)), "missing idle classes in {html}");
        assert!(!html.contains(dropzone_class(true)), "highlight shown before any drag in {html}");
    }
}
