//! Browser glue shared by the pages.

use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::error::UiError;
use crate::models::UploadedFile;

fn document() -> Result<web_sys::Document, UiError> {
    web_sys::window()
        .ok_or(UiError::NoWindow)?
        .document()
        .ok_or(UiError::NoDocument)
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to_section(id: &str) -> Result<(), UiError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| UiError::ElementNotFound(id.to_string()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Metadata for every file in a `FileList`, in list order.
pub fn collect_files(list: &web_sys::FileList) -> Vec<UploadedFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| UploadedFile::new(file.name(), file.size() as u64, file.type_()))
        .collect()
}

/// Files carried by a drop event.
pub fn files_from_drop(ev: &web_sys::DragEvent) -> Result<Vec<UploadedFile>, UiError> {
    let list = ev
        .data_transfer()
        .and_then(|dt| dt.files())
        .ok_or(UiError::NoFiles)?;
    Ok(collect_files(&list))
}

/// Files chosen in an `<input type="file">`. Clears the input afterwards so
/// picking the same file again still fires `change`.
pub fn files_from_input(ev: &web_sys::Event) -> Result<Vec<UploadedFile>, UiError> {
    let input = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .ok_or(UiError::NoFiles)?;
    let files = input.files().map(|list| collect_files(&list)).ok_or(UiError::NoFiles)?;
    input.set_value("");
    Ok(files)
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
