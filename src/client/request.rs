#![deny(clippy::all, clippy::pedantic)]

use std::ffi::OsStr;
use std::fmt::Display;
use std::future::IntoFuture;
use std::path::PathBuf;
use std::time::Instant;

use futures::future::BoxFuture;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use tracing::debug;

use super::{ApiResponse, ClientError};

#[derive(Debug)]
struct Attachment {
    field: String,
    path: PathBuf,
}

/// A request that has been built but not sent.
///
/// Headers, query parameters, a JSON body or file attachments can still be
/// added. Awaiting the handle (or calling [`PendingRequest::send`]) issues the
/// request once; a 4xx/5xx status is returned as an [`ApiResponse`].
#[must_use = "a request is only sent when awaited"]
#[derive(Debug)]
pub struct PendingRequest {
    method: Method,
    url: String,
    builder: Result<RequestBuilder, ClientError>,
    attachments: Vec<Attachment>,
}

impl PendingRequest {
    pub(crate) fn new(
        method: Method,
        url: String,
        builder: Result<RequestBuilder, ClientError>,
    ) -> Self {
        Self {
            method,
            url,
            builder,
            attachments: Vec::new(),
        }
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn map(mut self, f: impl FnOnce(RequestBuilder) -> RequestBuilder) -> Self {
        self.builder = self.builder.map(f);
        self
    }

    /// Attach `Authorization: Bearer <token>`.
    pub fn bearer(self, token: impl Display) -> Self {
        self.map(|req| req.bearer_auth(token))
    }

    pub fn header(self, name: &str, value: &str) -> Self {
        self.map(|req| req.header(name, value))
    }

    pub fn query<T: Serialize + ?Sized>(self, query: &T) -> Self {
        self.map(|req| req.query(query))
    }

    pub fn json<T: Serialize + ?Sized>(self, body: &T) -> Self {
        self.map(|req| req.json(body))
    }

    /// Add `path` as a multipart file part named `field`. Parts are sent in
    /// the order they were attached; the file is read at send time.
    pub fn attach(mut self, field: &str, path: impl Into<PathBuf>) -> Self {
        self.attachments.push(Attachment {
            field: field.to_string(),
            path: path.into(),
        });
        self
    }

    /// Issue the request and read the whole response body.
    ///
    /// # Errors
    ///
    /// Fails on an unresolvable URL, an unreadable attachment, or a transport
    /// error. Error statuses are not errors.
    pub async fn send(self) -> Result<ApiResponse, ClientError> {
        let Self {
            method,
            url,
            builder,
            attachments,
        } = self;

        let mut builder = builder?;
        let attachment_count = attachments.len();
        if !attachments.is_empty() {
            builder = builder.multipart(multipart_form(attachments).await?);
        }

        debug!(%method, %url, attachments = attachment_count, "sending request");
        let started = Instant::now();
        let response = ApiResponse::read(builder.send().await?).await?;
        debug!(
            %method,
            %url,
            status = response.status_code(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "received response"
        );

        Ok(response)
    }
}

impl IntoFuture for PendingRequest {
    type Output = Result<ApiResponse, ClientError>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.send())
    }
}

async fn multipart_form(attachments: Vec<Attachment>) -> Result<Form, ClientError> {
    let mut form = Form::new();
    for Attachment { field, path } in attachments {
        let data = tokio::fs::read(&path)
            .await
            .map_err(|source| ClientError::Attachment {
                path: path.display().to_string(),
                source,
            })?;
        let file_name = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or("upload.bin")
            .to_string();
        let mime = mime_guess::from_path(&path).first_or_octet_stream();
        let part = Part::bytes(data)
            .file_name(file_name)
            .mime_str(mime.as_ref())?;
        form = form.part(field, part);
    }
    Ok(form)
}
