//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON (`_id`, camelCase counters) so the
//! serde derives stay lossless; the client never assigns identity.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. Anything the backend sends that is not `admin` is a plain user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    #[serde(other)]
    #[serde(skip_serializing)]
    Unknown,
}

impl Role {
    /// Human-readable label used in the profile view and sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::User | Role::Unknown => "User",
        }
    }
}

/// An authenticated user as returned by `/auth/me`, `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// First letter of the display name for the avatar badge.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map_or('U', |c| c.to_ascii_uppercase())
    }
}

/// Login/register response payload: the user plus a fresh bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    #[serde(flatten)]
    pub user: User,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A hospital listing as owned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub city: String,
    pub image: String,
    #[serde(default)]
    pub speciality: Vec<String>,
    pub rating: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub number_of_doctors: Option<u32>,
    #[serde(default)]
    pub number_of_departments: Option<u32>,
}

/// Full representation sent on create/update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalInput {
    pub name: String,
    pub city: String,
    pub image: String,
    pub speciality: Vec<String>,
    pub rating: u8,
    pub description: String,
    pub images: Vec<String>,
    pub number_of_doctors: u32,
    pub number_of_departments: u32,
}

impl From<&Hospital> for HospitalInput {
    fn from(hospital: &Hospital) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rating = hospital.rating.round().clamp(1.0, 5.0) as u8;
        Self {
            name: hospital.name.clone(),
            city: hospital.city.clone(),
            image: hospital.image.clone(),
            speciality: hospital.speciality.clone(),
            rating,
            description: hospital.description.clone().unwrap_or_default(),
            images: hospital.images.clone(),
            number_of_doctors: hospital.number_of_doctors.unwrap_or(0),
            number_of_departments: hospital.number_of_departments.unwrap_or(0),
        }
    }
}

/// Body of `POST /hospitals/details`, sent after a successful update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalDetailsInput {
    pub id: String,
    pub description: String,
    pub images: Vec<String>,
    pub number_of_doctors: u32,
    pub number_of_departments: u32,
}

impl HospitalDetailsInput {
    pub fn new(id: &str, input: &HospitalInput) -> Self {
        Self {
            id: id.to_owned(),
            description: input.description.clone(),
            images: input.images.clone(),
            number_of_doctors: input.number_of_doctors,
            number_of_departments: input.number_of_departments,
        }
    }
}

/// Uniform response wrapper: `{ success, data?, error? }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
