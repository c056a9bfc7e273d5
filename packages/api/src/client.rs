use reqwest::{Response, StatusCode};
use session::SessionStore;

use crate::error::ApiError;
use crate::models::{LoginRequest, Note, NotePayload, RegisterRequest, TokenResponse};

/// Client for the notes REST API.
///
/// Cheap to clone (the inner `reqwest::Client` is an `Arc`); the web frontend
/// shares one instance through context. The bearer token is passed per call
/// rather than held here, keeping the session store the single owner of it.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

/// Map a response to our failure taxonomy: 401 is split out so callers can
/// invalidate the session, every other non-2xx collapses to its status code.
fn check(resp: Response) -> Result<Response, ApiError> {
    match resp.status() {
        status if status.is_success() => Ok(resp),
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        status => Err(ApiError::Status(status)),
    }
}

impl ApiClient {
    /// Create a client for the API at `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Register a new account. Returns the bearer token for the new session.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let resp = self
            .http
            .post(self.url("/register"))
            .json(&RegisterRequest {
                username,
                email,
                password,
            })
            .send()
            .await?;
        let body: TokenResponse = check(resp)?.json().await?;
        Ok(body.access_token)
    }

    /// Log in with existing credentials. Returns the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let resp = self
            .http
            .post(self.url("/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let body: TokenResponse = check(resp)?.json().await?;
        Ok(body.access_token)
    }

    /// Ask the server to revoke the session. Fire-and-forget: the response
    /// status and body are ignored, only transport failures are reported.
    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.http
            .post(self.url("/logout"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(())
    }

    /// Fetch all notes owned by the session, in server order.
    pub async fn list_notes(&self, token: &str) -> Result<Vec<Note>, ApiError> {
        let resp = self
            .http
            .get(self.url("/notes/"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(check(resp)?.json().await?)
    }

    /// Create a note and return the server's copy (with its assigned id).
    pub async fn create_note(
        &self,
        token: &str,
        title: &str,
        description: &str,
    ) -> Result<Note, ApiError> {
        let resp = self
            .http
            .post(self.url("/notes/"))
            .bearer_auth(token)
            .json(&NotePayload { title, description })
            .send()
            .await?;
        Ok(check(resp)?.json().await?)
    }

    /// Replace a note's title and description. The response body is ignored;
    /// callers patch their cached copy on success instead.
    pub async fn update_note(
        &self,
        token: &str,
        id: &str,
        title: &str,
        description: &str,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/notes/{id}")))
            .bearer_auth(token)
            .json(&NotePayload { title, description })
            .send()
            .await?;
        check(resp)?;
        Ok(())
    }

    /// Delete a note.
    pub async fn delete_note(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/notes/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        check(resp)?;
        Ok(())
    }
}

/// End the session: best-effort server-side revocation, then clear the local
/// store. The store is cleared even when the request fails, so the user is
/// always logged out locally (optimistic logout).
pub async fn sign_out(client: &ApiClient, store: &dyn SessionStore) {
    if let Some(token) = store.get() {
        if let Err(err) = client.logout(&token).await {
            tracing::warn!("logout request failed: {err}");
        }
    }
    store.clear();
}
