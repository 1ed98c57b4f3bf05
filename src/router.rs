use crate::api;
use crate::errors::ServerError;
use crate::responses::error_to_json_response;
use crate::responses::html_response;
use crate::responses::ResultResp;
use crate::store::ListingStore;
use crate::templates;
use astra::Request;

/// Top-level request handler. API routes render their errors as JSON
/// here at the boundary; page routes let errors bubble up to `main`,
/// which renders the HTML error page.
pub fn handle(req: Request, store: &ListingStore) -> ResultResp {
    let is_api = req.uri().path().starts_with("/api/");

    match route(req, store) {
        Err(err) if is_api => Ok(error_to_json_response(err)),
        other => other,
    }
}

fn route(req: Request, store: &ListingStore) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/api/hello") => api::hello(),
        ("POST", "/api/listings") => api::listings::create(req, store),
        ("GET", "/api/listings") => api::listings::list(store),

        ("GET", "/") => html_response(templates::pages::home_page(&store.all())),
        ("GET", "/test") => html_response(templates::pages::test_page()),

        _ => Err(ServerError::NotFound),
    }
}
