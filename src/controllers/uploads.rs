#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use crate::client::{ApiClient, PendingRequest};

pub const SINGLE_FIELD: &str = "single";
pub const MULTIPLE_FIELD: &str = "multiple";

#[derive(Clone, Copy, Debug)]
pub struct UploadController<'a> {
    client: &'a ApiClient,
}

impl<'a> UploadController<'a> {
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /upload/single` with the file under the `single` field.
    pub fn single(self, file: impl Into<PathBuf>) -> PendingRequest {
        self.client.post("upload/single").attach(SINGLE_FIELD, file)
    }

    /// `POST /upload/multiple`. Every file goes under the `multiple` field in
    /// iteration order; the response array follows that order.
    pub fn multiple<I, P>(self, files: I) -> PendingRequest
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        files.into_iter().fold(
            self.client.post("upload/multiple"),
            |req, file| req.attach(MULTIPLE_FIELD, file),
        )
    }
}
