#![deny(clippy::all, clippy::pedantic)]

use serde::Serialize;

use crate::client::{ApiClient, PendingRequest};

const COLLECTION: &str = "brands";

/// `/brands`. Writes are unauthenticated on the practice service.
#[derive(Clone, Copy, Debug)]
pub struct BrandsController<'a> {
    client: &'a ApiClient,
}

impl<'a> BrandsController<'a> {
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /brands`: array of `{_id, name}`.
    pub fn list(self) -> PendingRequest {
        self.client.get(COLLECTION)
    }

    /// `GET /brands/{id}`. An unknown id answers 404 `{"error": "Brand not found."}`.
    pub fn get(self, id: &str) -> PendingRequest {
        self.client.get(&format!("{COLLECTION}/{id}"))
    }

    pub fn create<T: Serialize + ?Sized>(self, body: &T) -> PendingRequest {
        self.client.post(COLLECTION).json(body)
    }

    /// `PUT /brands/{id}` with a full or partial field mapping.
    pub fn update<T: Serialize + ?Sized>(self, id: &str, body: &T) -> PendingRequest {
        self.client.put(&format!("{COLLECTION}/{id}")).json(body)
    }

    pub fn delete(self, id: &str) -> PendingRequest {
        self.client.delete(&format!("{COLLECTION}/{id}"))
    }
}
