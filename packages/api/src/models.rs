//! Wire types for the notes backend.
//!
//! [`Note`] is what the server returns; the request payloads deliberately
//! carry less. Ownership is derived server-side from the bearer token, so
//! create/update payloads send only `title` and `description` and never an
//! owner field.

use serde::{Deserialize, Serialize};

/// A note as returned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Server-assigned opaque id.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Owner as recorded by the server. Informational only on the client.
    #[serde(default)]
    pub user_id: String,
}

/// Body of `POST /register`.
#[derive(Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /login`.
#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /notes/` and `PUT /notes/{id}`.
#[derive(Serialize)]
pub(crate) struct NotePayload<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

/// Response of `POST /register` and `POST /login`.
#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}
