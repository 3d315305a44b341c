#![deny(clippy::all, clippy::pedantic)]

//! One wrapper per remote resource.
//!
//! Wrappers borrow an [`ApiClient`] and map each method onto exactly one
//! request. They return the [`PendingRequest`](crate::client::PendingRequest)
//! unresolved so callers can still attach a bearer token or extra headers.

pub mod admin;
pub mod brands;
pub mod categories;
pub mod uploads;

pub use admin::AdminController;
pub use brands::BrandsController;
pub use categories::CategoriesController;
pub use uploads::UploadController;

use crate::client::ApiClient;

impl ApiClient {
    #[must_use]
    pub fn brands(&self) -> BrandsController<'_> {
        BrandsController::new(self)
    }

    #[must_use]
    pub fn categories(&self) -> CategoriesController<'_> {
        CategoriesController::new(self)
    }

    #[must_use]
    pub fn uploads(&self) -> UploadController<'_> {
        UploadController::new(self)
    }

    #[must_use]
    pub fn admin(&self) -> AdminController<'_> {
        AdminController::new(self)
    }
}
