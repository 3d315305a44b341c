#![deny(clippy::all, clippy::pedantic)]

use serde::Serialize;

use crate::client::{ApiClient, PendingRequest};

const COLLECTION: &str = "categories";

/// `/categories`. Create, update and delete need a bearer token from
/// [`AdminController::login`](super::AdminController::login); attach it with
/// [`PendingRequest::bearer`].
#[derive(Clone, Copy, Debug)]
pub struct CategoriesController<'a> {
    client: &'a ApiClient,
}

impl<'a> CategoriesController<'a> {
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn list(self) -> PendingRequest {
        self.client.get(COLLECTION)
    }

    pub fn get(self, id: &str) -> PendingRequest {
        self.client.get(&format!("{COLLECTION}/{id}"))
    }

    pub fn create<T: Serialize + ?Sized>(self, body: &T) -> PendingRequest {
        self.client.post(COLLECTION).json(body)
    }

    pub fn update<T: Serialize + ?Sized>(self, id: &str, body: &T) -> PendingRequest {
        self.client.put(&format!("{COLLECTION}/{id}")).json(body)
    }

    pub fn delete(self, id: &str) -> PendingRequest {
        self.client.delete(&format!("{COLLECTION}/{id}"))
    }
}
