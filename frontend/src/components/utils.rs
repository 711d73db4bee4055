use super::super::Model;
use gloo_file::{Blob, File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use web_sys::{FileList, HtmlAnchorElement};
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Click handler that swallows rapid repeat clicks, firing `action` once per
/// burst after `delay_ms` of quiet.
pub fn debounce<F>(delay_ms: u32, action: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let pending = RefCell::new(None::<Timeout>);

    Callback::from(move |_| {
        let action = action.clone();
        let mut slot = pending.borrow_mut();

        if let Some(armed) = slot.take() {
            armed.cancel();
        }
        *slot = Some(Timeout::new(delay_ms, move || action()));
    })
}

/// One recording at a time: only the first entry of a selection or drop is
/// considered. Extension validation belongs to the workflow controller.
pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

pub fn format_file_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Hands report bytes to the browser's download mechanism via a transient
/// object URL and anchor element.
pub fn save_report(bytes: &[u8], filename: &str) {
    let blob = Blob::new_with_options(bytes, Some("application/pdf"));
    let url = ObjectUrl::from(blob);

    let document = web_sys::window().unwrap().document().unwrap();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .expect("Failed to create download link.")
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().unwrap();
    body.append_child(&anchor).unwrap();
    anchor.click();
    anchor.remove();
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error) = model.workflow.visible_error() {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ &error.message }</p>
            </div>
        }
    } else {
        html! {}
    }
}

#[cfg(test)]
mod tests {
    use super::format_file_size;

    #[test]
    fn file_size_renders_in_megabytes() {
        assert_eq!(format_file_size(2_202_010), "2.10 MB");
        assert_eq!(format_file_size(1_048_576), "1.00 MB");
        assert_eq!(format_file_size(0), "0.00 MB");
    }
}
