//! HTTP client for the user backend
//!
//! One `reqwest::Client` is built at startup and shared by every tool call.
//! Response bodies are handed back as raw JSON so records reach the caller
//! exactly as the backend rendered them.

use crate::error::{BackendError, ConfigError};
use crate::users::models::NewUser;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base: Url,
}

impl BackendClient {
    /// Builds a client for the backend at `base`, with an optional per-request timeout.
    pub fn new(base: Url, timeout: Option<Duration>) -> Result<Self, ConfigError> {
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidBackendUrl(base.to_string()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `<base>/users` or `<base>/users/<id>`, with the id as one encoded segment.
    fn users_url(&self, id: Option<&str>) -> Result<Url, BackendError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| BackendError::Url(self.base.to_string()))?;
            segments.pop_if_empty().push("users");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// `GET /users/:id`. A 404 is reported as `Ok(None)`.
    pub async fn get_user(&self, id: &str) -> Result<Option<Value>, BackendError> {
        let url = self.users_url(Some(id))?;
        debug!(%url, "GET user");
        let response = self.http.get(url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(BackendError::Status(status.as_u16())),
        }
    }

    /// `GET /users`
    pub async fn list_users(&self) -> Result<Value, BackendError> {
        let url = self.users_url(None)?;
        debug!(%url, "GET users");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    /// `POST /users`. Any non-2xx answer is a `CreateRejected`.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<Value, BackendError> {
        let url = self.users_url(None)?;
        debug!(%url, "POST user");
        let response = self.http.post(url).json(new_user).send().await?;

        if !response.status().is_success() {
            debug!(status = response.status().as_u16(), "Backend rejected user");
            return Err(BackendError::CreateRejected);
        }
        Ok(response.json().await?)
    }

    /// `DELETE /users/:id`. Returns `false` when the backend answers 404.
    pub async fn delete_user(&self, id: &str) -> Result<bool, BackendError> {
        let url = self.users_url(Some(id))?;
        debug!(%url, "DELETE user");
        let response = self.http.delete(url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => Err(BackendError::Status(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> BackendClient {
        BackendClient::new(base.parse().unwrap(), None).unwrap()
    }

    #[test]
    fn builds_user_urls_from_base() {
        let c = client("http://backend:3000");
        assert_eq!(
            c.users_url(None).unwrap().as_str(),
            "http://backend:3000/users"
        );
        assert_eq!(
            c.users_url(Some("42")).unwrap().as_str(),
            "http://backend:3000/users/42"
        );
    }

    #[test]
    fn keeps_base_path_prefix() {
        let c = client("http://localhost:8080/api/");
        assert_eq!(
            c.users_url(Some("1")).unwrap().as_str(),
            "http://localhost:8080/api/users/1"
        );
    }

    #[test]
    fn encodes_id_as_single_segment() {
        let c = client("http://backend:3000");
        assert_eq!(
            c.users_url(Some("a/b")).unwrap().as_str(),
            "http://backend:3000/users/a%2Fb"
        );
    }

    #[test]
    fn rejects_non_base_urls() {
        let url: Url = "mailto:ops@example.com".parse().unwrap();
        assert!(matches!(
            BackendClient::new(url, None),
            Err(ConfigError::InvalidBackendUrl(_))
        ));
    }
}
