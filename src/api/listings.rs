use crate::domain::listing::{NewListing, MISSING_FIELDS};
use crate::errors::ServerError;
use crate::responses::{json_response, ResultResp};
use crate::store::ListingStore;
use astra::Request;

/// POST /api/listings
///
/// Reads the JSON body, validates presence of all four fields, appends
/// to the store and returns the created record. A body that isn't JSON
/// at all gets the same blanket 400 as a missing field.
pub fn create(req: Request, store: &ListingStore) -> ResultResp {
    let mut body = req.into_body();

    let new_listing: NewListing = serde_json::from_reader(body.reader())
        .map_err(|_| ServerError::Validation(MISSING_FIELDS))?;

    let draft = new_listing.validate()?;
    let listing = store.append(draft);

    json_response(201, &listing)
}

/// GET /api/listings
///
/// The full collection in creation order. An empty store is a valid,
/// non-error response.
pub fn list(store: &ListingStore) -> ResultResp {
    json_response(200, &store.all())
}
