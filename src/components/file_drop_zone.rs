//! Drop zone accepting any number of files by drag-and-drop or browse.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::dom;
use crate::models::UploadedFile;

const ACCEPTED: &str = ".pdf,.csv,.xlsx,.xls,.txt,.png,.jpg,.jpeg";

#[component]
pub fn FileDropZone(
    /// Called with the files from each drop or picker selection, in order.
    on_files: Callback<Vec<UploadedFile>>,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);
    let file_input_id = "file-upload";

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        match dom::files_from_drop(&ev) {
            Ok(files) => on_files.run(files),
            Err(e) => log::warn!("Ignoring drop: {}", e),
        }
    };

    let on_input_change = move |ev: web_sys::Event| match dom::files_from_input(&ev) {
        Ok(files) => on_files.run(files),
        Err(e) => log::warn!("Ignoring file selection: {}", e),
    };

    view! {
        <div
            class="drop-zone"
            class:drop-zone-active=move || is_over.get()
            on:dragenter=move |_| set_is_over.set(true)
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                set_is_over.set(true);
            }
            on:dragleave=move |_| set_is_over.set(false)
            on:drop=on_drop
        >
            <div class="drop-zone-content">
                <IconGlyph icon=Icon::Upload class="drop-icon" />
                <h3 class="drop-main">"Drop files here or click to browse"</h3>
                <p class="drop-hint">"Supports PDF, CSV, Excel, images, and text files"</p>
                <input
                    type="file"
                    id=file_input_id
                    multiple=true
                    accept=ACCEPTED
                    style="display: none"
                    on:change=on_input_change
                />
                <label for=file_input_id class="btn btn-primary">
                    "Browse Files"
                </label>
            </div>
        </div>
    }
}
