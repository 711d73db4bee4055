use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use serde::Deserialize;
use shared::PredictionResponse;

pub const API_URL: &str = "http://localhost:8000";

pub const SERVICE_UNREACHABLE_MESSAGE: &str =
    "Unable to reach the diagnostic service. Please verify it is running and try again.";
pub const REPORT_UNAVAILABLE_MESSAGE: &str = "The clinical report could not be retrieved.";

// Error payload convention of the diagnostic service.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Maps a raw error response body to the message shown to the clinician: the
/// service's `detail` string verbatim when present, `fallback` otherwise.
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Suggested filename for a fetched report.
pub fn report_filename(report_id: &str) -> String {
    format!("Parkinsons_Report_{}.pdf", report_id)
}

/// `POST /predict` with the recording as the single `file` multipart field.
pub async fn submit_recording(file: &GlooFile) -> Result<PredictionResponse, String> {
    let form_data = web_sys::FormData::new().unwrap();
    form_data
        .append_with_blob_and_filename("file", file.as_ref(), &file.name())
        .unwrap();

    let request = Request::post(&format!("{}/predict", API_URL))
        .body(form_data)
        .expect("Failed to build request.");

    match request.send().await {
        Ok(response) if response.ok() => response
            .json::<PredictionResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e)),
        Ok(response) => {
            let body = response.text().await.unwrap_or_default();
            Err(error_message(&body, SERVICE_UNREACHABLE_MESSAGE))
        }
        Err(e) => {
            log::error!("Prediction request failed: {}", e);
            Err(SERVICE_UNREACHABLE_MESSAGE.to_string())
        }
    }
}

/// `GET /report/{report_id}`, returning the PDF bytes.
pub async fn fetch_report(report_id: &str) -> Result<Vec<u8>, String> {
    let request = Request::get(&format!("{}/report/{}", API_URL, report_id));

    match request.send().await {
        Ok(response) if response.ok() => response
            .binary()
            .await
            .map_err(|e| format!("Failed to read report payload: {}", e)),
        Ok(response) => {
            let body = response.text().await.unwrap_or_default();
            Err(error_message(&body, REPORT_UNAVAILABLE_MESSAGE))
        }
        Err(e) => {
            log::error!("Report request failed: {}", e);
            Err(SERVICE_UNREACHABLE_MESSAGE.to_string())
        }
    }
}
