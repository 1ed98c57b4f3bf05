pub mod listings;

use crate::responses::{json_response, ResultResp};
use serde_json::json;

/// Greeting shown by the connectivity-check endpoint and echoed on the
/// frontend header.
pub const WELCOME_MESSAGE: &str = "Welcome to PaLevel API!";

/// GET /api/hello
pub fn hello() -> ResultResp {
    json_response(200, &json!({ "message": WELCOME_MESSAGE }))
}
