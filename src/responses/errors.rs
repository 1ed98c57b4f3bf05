use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

fn status_and_message(err: &ServerError) -> (u16, String) {
    match err {
        ServerError::NotFound => (404, "Not Found".to_string()),
        ServerError::Validation(msg) => (400, (*msg).to_string()),
        ServerError::InternalError => (500, "Internal Server Error".to_string()),
    }
}

/// Convert a ServerError into the JSON error shape the API promises:
/// `{"error": "<message>"}`.
pub fn error_to_json_response(err: ServerError) -> Response {
    let (status, message) = status_and_message(&err);
    let body = serde_json::to_vec(&json!({ "error": message })).unwrap_or_default();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Convert a ServerError into a proper HTML response
pub fn error_to_html_response(err: ServerError) -> Response {
    let (status, message) = status_and_message(&err);
    html_error_response(status, &message)
}

/// Build an HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    let html = format!(
        "<!DOCTYPE html>
        <html lang=\"en\">
        <head><meta charset=\"utf-8\"><title>Error {status}</title></head>
        <body>
            <h1>Error {status}</h1>
            <p>{message}</p>
        </body>
        </html>"
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(html))
        .unwrap()
}
