use crate::errors::ServerError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error message shared by every validation failure. The API reports
/// one blanket message rather than per-field detail.
pub const MISSING_FIELDS: &str = "All fields are required.";

/// One advertised room/property. `id` is assigned by the store;
/// everything else comes from the landlord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub price: Price,
    pub contact: String,
}

/// Prices arrive off the wire as either a JSON string or a JSON number
/// and are stored exactly as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Text(String),
    Number(serde_json::Number),
}

impl Price {
    /// A price is blank only when it is an empty/whitespace string.
    /// Numbers are never blank: zero is a legitimate price.
    fn is_blank(&self) -> bool {
        match self {
            Price::Text(s) => s.trim().is_empty(),
            Price::Number(_) => false,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Text(s) => write!(f, "{s}"),
            Price::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Deserialization target for the creation request. Every field is
/// optional at this stage so that absent and null both land as `None`
/// and get one uniform rejection path.
#[derive(Debug, Deserialize)]
pub struct NewListing {
    pub name: Option<String>,
    pub location: Option<String>,
    pub price: Option<Price>,
    pub contact: Option<String>,
}

/// A creation request that passed validation. Field for field what the
/// store needs to mint a `Listing`.
#[derive(Debug)]
pub struct ListingDraft {
    pub name: String,
    pub location: String,
    pub price: Price,
    pub contact: String,
}

impl NewListing {
    /// Rejects the request unless all four fields are present and
    /// non-blank. Whitespace-only text counts as missing.
    pub fn validate(self) -> Result<ListingDraft, ServerError> {
        let name = required_text(self.name)?;
        let location = required_text(self.location)?;
        let contact = required_text(self.contact)?;

        let price = match self.price {
            Some(p) if !p.is_blank() => p,
            _ => return Err(ServerError::Validation(MISSING_FIELDS)),
        };

        Ok(ListingDraft {
            name,
            location,
            price,
            contact,
        })
    }
}

fn required_text(field: Option<String>) -> Result<String, ServerError> {
    match field {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ServerError::Validation(MISSING_FIELDS)),
    }
}
