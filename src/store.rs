use crate::domain::listing::{Listing, ListingDraft};
use chrono::Utc;
use std::sync::{Arc, Mutex};

/// In-memory, process-lifetime store of every listing, in creation
/// order. The handle is cheap to clone; clones share the same
/// collection, so the server closure and the routes can each hold one.
#[derive(Clone)]
pub struct ListingStore {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    listings: Vec<Listing>,
    next_id: i64,
}

impl ListingStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                listings: Vec::new(),
                // Seeded from the clock so ids keep the epoch-millis value
                // range, then incremented per append so rapid creations
                // can't collide within the same millisecond.
                next_id: Utc::now().timestamp_millis(),
            })),
        }
    }

    /// Mints the next id, appends, and returns the created listing.
    pub fn append(&self, draft: ListingDraft) -> Listing {
        let mut inner = self.inner.lock().unwrap();

        let id = inner.next_id;
        inner.next_id += 1;

        let listing = Listing {
            id,
            name: draft.name,
            location: draft.location,
            price: draft.price,
            contact: draft.contact,
        };
        inner.listings.push(listing.clone());
        listing
    }

    /// Snapshot of the full collection, insertion order preserved.
    pub fn all(&self) -> Vec<Listing> {
        self.inner.lock().unwrap().listings.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::new()
    }
}
