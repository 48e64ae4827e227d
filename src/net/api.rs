//! REST API helpers for communicating with the hospital backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Network` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`; transport failures become
//! `Network`, envelopes are decoded by `net::error::decode_envelope`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthPayload, Credentials, Hospital, HospitalDetailsInput, HospitalInput, RegisterRequest, User};
use crate::config::ApiConfig;

pub const AUTH_ME_PATH: &str = "/auth/me";
pub const AUTH_REGISTER_PATH: &str = "/auth/register";
pub const AUTH_LOGIN_PATH: &str = "/auth/login";
pub const HOSPITALS_PATH: &str = "/hospitals";
pub const HOSPITAL_CREATE_PATH: &str = "/hospitals/create";
pub const HOSPITAL_UPDATE_PATH: &str = "/hospitals/update";
pub const HOSPITAL_DETAILS_PATH: &str = "/hospitals/details";
pub const HOSPITAL_DELETE_PATH: &str = "/hospitals/delete";

/// Backend calls the session store depends on.
///
/// Implemented by `HttpApi` in the app; tests substitute a scripted fake.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `GET /auth/me` with the stored bearer token.
    async fn current_user(&self, token: &str) -> Result<User, ApiError>;
    /// `POST /auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthPayload, ApiError>;
    /// `POST /auth/login`.
    async fn login(&self, credentials: &Credentials) -> Result<AuthPayload, ApiError>;
}

/// `gloo-net` backed client for the REST backend.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpApi {
    config: ApiConfig,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Query pairs for `GET /hospitals`. Blank values are omitted so an empty
/// city means "list everything".
#[cfg(any(test, feature = "hydrate"))]
fn hospital_query<'a>(city: Option<&'a str>, id: Option<&'a str>) -> Vec<(&'static str, &'a str)> {
    [("city", city), ("id", id)]
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value?.trim();
            (!value.is_empty()).then_some((key, value))
        })
        .collect()
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}

#[cfg(feature = "hydrate")]
async fn finish<T: serde::de::DeserializeOwned>(
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<T, ApiError> {
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    super::error::decode_envelope(status, &body)
}

#[cfg(feature = "hydrate")]
async fn finish_ack(sent: Result<gloo_net::http::Response, gloo_net::Error>) -> Result<(), ApiError> {
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    super::error::decode_ack(status, &body)
}

#[cfg(feature = "hydrate")]
fn encode_failed(e: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("request encoding failed: {e}"))
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// List hospitals, optionally filtered by city (`GET /hospitals?city=`).
    pub async fn list_hospitals(&self, city: Option<&str>) -> Result<Vec<Hospital>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let sent = gloo_net::http::Request::get(&self.config.url(HOSPITALS_PATH))
                .query(hospital_query(city, None))
                .send()
                .await;
            finish(sent).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = city;
            unavailable()
        }
    }

    /// Fetch one hospital (`GET /hospitals?id=`).
    pub async fn fetch_hospital(&self, id: &str) -> Result<Hospital, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let sent = gloo_net::http::Request::get(&self.config.url(HOSPITALS_PATH))
                .query(hospital_query(None, Some(id)))
                .send()
                .await;
            finish(sent).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            unavailable()
        }
    }

    /// Create a hospital (`POST /hospitals/create`).
    pub async fn create_hospital(&self, token: &str, input: &HospitalInput) -> Result<Hospital, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.config.url(HOSPITAL_CREATE_PATH))
                .header("Authorization", &bearer(token))
                .json(input)
                .map_err(encode_failed)?;
            finish(request.send().await).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, input);
            unavailable()
        }
    }

    /// Update a hospital's core fields (`PUT /hospitals/update?id=`).
    pub async fn update_hospital(&self, token: &str, id: &str, input: &HospitalInput) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::put(&self.config.url(HOSPITAL_UPDATE_PATH))
                .query([("id", id)])
                .header("Authorization", &bearer(token))
                .json(input)
                .map_err(encode_failed)?;
            finish_ack(request.send().await).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id, input);
            unavailable()
        }
    }

    /// Update the descriptive details block (`POST /hospitals/details`).
    pub async fn update_hospital_details(&self, token: &str, details: &HospitalDetailsInput) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.config.url(HOSPITAL_DETAILS_PATH))
                .header("Authorization", &bearer(token))
                .json(details)
                .map_err(encode_failed)?;
            finish_ack(request.send().await).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, details);
            unavailable()
        }
    }

    /// Delete a hospital (`DELETE /hospitals/delete?id=`).
    pub async fn delete_hospital(&self, token: &str, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::delete(&self.config.url(HOSPITAL_DELETE_PATH))
                .query([("id", id)])
                .header("Authorization", &bearer(token))
                .json(&serde_json::json!({ "id": id }))
                .map_err(encode_failed)?;
            finish_ack(request.send().await).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
            unavailable()
        }
    }
}

impl AuthApi for HttpApi {
    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let sent = gloo_net::http::Request::get(&self.config.url(AUTH_ME_PATH))
                .header("Authorization", &bearer(token))
                .send()
                .await;
            finish(sent).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            unavailable()
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthPayload, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.config.url(AUTH_REGISTER_PATH))
                .json(request)
                .map_err(encode_failed)?;
            finish(request.send().await).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            unavailable()
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthPayload, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.config.url(AUTH_LOGIN_PATH))
                .json(credentials)
                .map_err(encode_failed)?;
            finish(request.send().await).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            unavailable()
        }
    }
}
