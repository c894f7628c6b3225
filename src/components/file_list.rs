use leptos::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::models::UploadedFile;

/// Intake list with a remove button per entry. Entries are addressed by
/// position, so duplicates are removed one at a time.
#[component]
pub fn FileList(
    #[prop(into)]
    files: Signal<Vec<UploadedFile>>,
    on_remove: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || files.with(|f| !f.is_empty())>
            <div class="file-list">
                <h4>{move || format!("Uploaded Files ({})", files.with(|f| f.len()))}</h4>
                {move || {
                    files
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, file)| {
                            view! {
                                <div class="file-row" title=file.mime.clone()>
                                    <div class="file-info">
                                        <IconGlyph icon=file.kind.icon() class="text-muted" />
                                        <div>
                                            <p class="file-name">{file.name.clone()}</p>
                                            <p class="file-size">{file.size_label()}</p>
                                        </div>
                                    </div>
                                    <button
                                        class="btn btn-ghost btn-icon"
                                        title="Remove"
                                        on:click=move |_| on_remove.run(index)
                                    >
                                        <IconGlyph icon=Icon::X />
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}
