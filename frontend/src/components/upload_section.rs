use super::super::Model;
use super::super::Msg;
use super::utils::{debounce, first_file, format_file_size};
use crate::workflow::Phase;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section">
            { render_drop_zone(model, ctx) }
            { render_submit_controls(model, ctx) }
        </div>
    }
}

fn render_drop_zone(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let chosen = input
            .files()
            .as_ref()
            .and_then(first_file)
            .map(|file| vec![file])
            .unwrap_or_default();

        input.set_value("");

        Msg::FileChosen(chosen)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id("file-input")
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept="audio/wav,.wav"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!(
                    "upload-area",
                    model.workflow.file().is_some().then_some("has-file"),
                    model.is_dragging.then_some("drag-over"),
                )}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                { render_drop_zone_content(model, ctx) }
            </div>
        </>
    }
}

fn render_drop_zone_content(model: &Model, ctx: &Context<Model>) -> Html {
    if let Some(file) = model.workflow.file() {
        let link = ctx.link();
        html! {
            <div class="selected-file">
                <i class="fa-solid fa-file-audio"></i>
                <p class="file-name">{ &file.name }</p>
                <p class="file-size">{ format_file_size(file.size) }</p>
                <button
                    class="remove-btn"
                    disabled={model.workflow.is_submitting()}
                    onclick={link.callback(|e: MouseEvent| {
                        e.stop_propagation();
                        Msg::RemoveFile
                    })}
                >
                    {"Remove Recording"}
                </button>
            </div>
        }
    } else {
        html! {
            <div class="upload-placeholder">
                <i class="fa-solid fa-cloud-arrow-up"></i>
                <p>{"Drag & drop clinical voice file here, or click to browse"}</p>
                <p class="file-types">{"Supported format: WAV"}</p>
            </div>
        }
    }
}

fn render_submit_controls(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    match model.workflow.phase() {
        Phase::FileSelected(_) => html! {
            <div class="button-container">
                <button
                    class="analyze-btn"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.callback(|_| Msg::Submit).emit(())
                    })}
                >
                    <i class="fa-solid fa-stethoscope"></i>{" Run AI Diagnostics"}
                </button>
            </div>
        },
        Phase::Submitting { .. } => html! {
            <div class="button-container">
                <button class="analyze-btn" disabled=true>
                    <i class="fa-solid fa-spinner fa-spin"></i>{" Processing Audio Features..."}
                </button>
            </div>
        },
        _ => html! {},
    }
}
