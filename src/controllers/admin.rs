#![deny(clippy::all, clippy::pedantic)]

use storefront_api_types::LoginRequest;

use crate::client::{ApiClient, PendingRequest};

#[derive(Clone, Copy, Debug)]
pub struct AdminController<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminController<'a> {
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /admin/login`; a 200 carries `{"token": "..."}`.
    pub fn login(self, credentials: &LoginRequest) -> PendingRequest {
        self.client.post("admin/login").json(credentials)
    }
}
