//! Blocking client for the AllSpice Hub REST API

use dr_core::error::{Error, Result};
use dr_core::review::{Attachment, Comment, ReviewApi, ReviewRef};
use dr_core::types::{AttachmentId, CommentId};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Request body for creating or editing a comment
#[derive(Serialize)]
struct CommentPayload<'a> {
    body: &'a str,
}

/// Client for one AllSpice Hub instance, authenticated with an access token
pub struct HubClient {
    http: Client,
    base_url: String,
}

impl HubClient {
    /// Build a client for the Hub at `base_url` using token authentication.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("token {token}"))
            .map_err(|e| Error::Transport(format!("invalid auth token: {e}")))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path)
    }

    fn comments_url(&self, review: &ReviewRef) -> String {
        self.url(&format!(
            "repos/{}/{}/issues/{}/comments",
            review.owner, review.repo, review.number
        ))
    }

    fn comment_url(&self, review: &ReviewRef, id: CommentId) -> String {
        self.url(&format!(
            "repos/{}/{}/issues/comments/{id}",
            review.owner, review.repo
        ))
    }

    fn assets_url(&self, review: &ReviewRef, id: CommentId) -> String {
        format!("{}/assets", self.comment_url(review, id))
    }

    /// Turn a non-success response into [`Error::Api`].
    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        Self::check(response)?
            .json()
            .map_err(|e| Error::Transport(format!("invalid response body: {e}")))
    }
}

impl ReviewApi for HubClient {
    fn list_comments(&self, review: &ReviewRef) -> Result<Vec<Comment>> {
        let url = self.comments_url(review);
        debug!("GET {url}");
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::json(response)
    }

    fn create_comment(&self, review: &ReviewRef, body: &str) -> Result<Comment> {
        let url = self.comments_url(review);
        debug!("POST {url}");
        let response = self
            .http
            .post(&url)
            .json(&CommentPayload { body })
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::json(response)
    }

    fn update_comment(&self, review: &ReviewRef, id: CommentId, body: &str) -> Result<Comment> {
        let url = self.comment_url(review, id);
        debug!("PATCH {url}");
        let response = self
            .http
            .patch(&url)
            .json(&CommentPayload { body })
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::json(response)
    }

    fn list_attachments(&self, review: &ReviewRef, id: CommentId) -> Result<Vec<Attachment>> {
        let url = self.assets_url(review, id);
        debug!("GET {url}");
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::json(response)
    }

    fn delete_attachment(
        &self,
        review: &ReviewRef,
        id: CommentId,
        attachment: AttachmentId,
    ) -> Result<()> {
        let url = format!("{}/{attachment}", self.assets_url(review, id));
        debug!("DELETE {url}");
        let response = self
            .http
            .delete(&url)
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::check(response)?;
        Ok(())
    }

    fn create_attachment(
        &self,
        review: &ReviewRef,
        id: CommentId,
        name: &str,
        content: Vec<u8>,
    ) -> Result<Attachment> {
        let url = self.assets_url(review, id);
        debug!("POST {url}");
        let part = Part::bytes(content).file_name(name.to_string());
        let form = Form::new().part("attachment", part);
        let response = self
            .http
            .post(&url)
            .query(&[("name", name)])
            .multipart(form)
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::json(response)
    }
}
