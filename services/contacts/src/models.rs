//! Row and form models for the contact pages

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered contact
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub firstname: String,
    pub secondname: String,
    pub lastname: String,
    pub phone: String,
}

/// Raw payload of the submission form; absent fields read as empty
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub secondname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub phone: String,
}

/// Sanitized field set written by the submission page
#[derive(Debug, Clone)]
pub struct NewUser {
    pub firstname: String,
    pub secondname: String,
    pub lastname: String,
    pub phone: String,
}

/// Field set written by the records-page update path
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub firstname: String,
    pub secondname: String,
    pub lastname: String,
    pub phone: String,
}

/// A records-page POST; the `update`/`delete` marker fields select the
/// action, update taking precedence when both are present
#[derive(Debug, Clone, Deserialize)]
pub struct RecordsForm {
    pub update: Option<String>,
    pub delete: Option<String>,
    pub id: Option<i32>,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub secondname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub phone: String,
}
