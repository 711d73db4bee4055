use super::super::Model;
use super::super::Msg;
use crate::api;
use crate::components::utils;
use crate::workflow::RequestToken;
use gloo_file::File as GlooFile;
use shared::PredictionResponse;
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn handle_files_chosen(model: &mut Model, files: Vec<GlooFile>) -> bool {
    let Some(file) = files.into_iter().next() else {
        return false;
    };

    let name = file.name();
    let size = file.size();
    if !model.workflow.select_file(&name, size, file) {
        log::warn!("Rejected candidate recording: {}", name);
    }
    true
}

pub fn handle_remove_file(model: &mut Model) -> bool {
    model.workflow.remove_file();
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    // None covers both "nothing selected" and "already in flight".
    let Some((token, file)) = model.workflow.begin_submission() else {
        return false;
    };

    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = api::submit_recording(&file.handle).await;
        link.send_message(Msg::SubmissionFinished(token, outcome));
    });
    true
}

pub fn handle_submission_finished(
    model: &mut Model,
    token: RequestToken,
    outcome: Result<PredictionResponse, String>,
) -> bool {
    let applied = model.workflow.finish_submission(token, outcome);
    if !applied {
        log::warn!("Dropping response for a superseded submission");
    }
    applied
}

pub fn handle_download_report(model: &mut Model, ctx: &Context<Model>) -> bool {
    // No successful analysis naming a report yet: nothing to download, and
    // deliberately no error either.
    let Some(report_id) = model.workflow.report_id() else {
        return false;
    };

    let report_id = report_id.to_string();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = api::fetch_report(&report_id).await;
        link.send_message(Msg::ReportFetched(report_id, outcome));
    });
    false
}

pub fn handle_report_fetched(
    model: &mut Model,
    report_id: String,
    outcome: Result<Vec<u8>, String>,
) -> bool {
    match outcome {
        Ok(bytes) => {
            utils::save_report(&bytes, &api::report_filename(&report_id));
            false
        }
        Err(message) => {
            if model.workflow.report_id() == Some(report_id.as_str()) {
                model.workflow.report_fetch_failed(message);
                true
            } else {
                log::warn!("Dropping report failure for a superseded analysis");
                false
            }
        }
    }
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            if let Some(file) = utils::first_file(&file_list) {
                ctx.link().send_message(Msg::FileChosen(vec![file]));
            }
        }
    }

    true
}
