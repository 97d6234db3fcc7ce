// This file is part of the terraform-provider-partnercentersell project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Deserialize;
use time::{Duration, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::debug;

use super::ApiError;

pub const DEFAULT_IAM_ENDPOINT: &str = "https://iam.cloud.ibm.com";

const APIKEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Tokens are refreshed this long before they expire
const REFRESH_MARGIN: Duration = Duration::seconds(60);

#[derive(Clone)]
pub enum Credentials {
    /// API key exchanged for short-lived IAM access tokens
    ApiKey(String),
    /// Bearer token used as is
    Token(String),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ApiKey(_) => f.write_str("ApiKey(***)"),
            Credentials::Token(_) => f.write_str("Token(***)"),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    /// Unix timestamp of the expiration
    expiration: Option<i64>,
    /// Lifetime in seconds, used when `expiration` is missing
    expires_in: Option<i64>,
}

struct AccessToken {
    value: String,
    expires_at: OffsetDateTime,
}

impl AccessToken {
    fn is_fresh(&self) -> bool {
        OffsetDateTime::now_utc() + REFRESH_MARGIN < self.expires_at
    }
}

pub struct IamAuthenticator {
    http: reqwest::Client,
    token_url: String,
    credentials: Credentials,
    cached: Mutex<Option<AccessToken>>,
}

impl std::fmt::Debug for IamAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamAuthenticator")
            .field("token_url", &self.token_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl IamAuthenticator {
    pub fn new(http: reqwest::Client, iam_endpoint: &str, credentials: Credentials) -> Self {
        Self {
            http,
            token_url: format!("{}/identity/token", iam_endpoint.trim_end_matches('/')),
            credentials,
            cached: Mutex::new(None),
        }
    }

    /// Bearer token to authenticate a request
    pub async fn bearer(&self) -> Result<String, ApiError> {
        let apikey = match &self.credentials {
            Credentials::Token(token) => return Ok(token.clone()),
            Credentials::ApiKey(apikey) => apikey,
        };

        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref().filter(|token| token.is_fresh()) {
            return Ok(token.value.clone());
        }

        let token = self.exchange(apikey).await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    async fn exchange(&self, apikey: &str) -> Result<AccessToken, ApiError> {
        debug!(url = %self.token_url, "requesting IAM access token");
        let response = self
            .http
            .post(&self.token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[("grant_type", APIKEY_GRANT_TYPE), ("apikey", apikey)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Authentication(format!(
                "IAM token request returned {status}: {body}"
            )));
        }

        let token: TokenResponse = serde_json::from_slice(&response.bytes().await?)?;
        let now = OffsetDateTime::now_utc();
        let expires_at = match (token.expiration, token.expires_in) {
            (Some(expiration), _) => OffsetDateTime::from_unix_timestamp(expiration)
                .map_err(|err| ApiError::Authentication(err.to_string()))?,
            (None, Some(expires_in)) => now + Duration::seconds(expires_in),
            (None, None) => now,
        };

        Ok(AccessToken {
            value: token.access_token,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn token_body(expires_in: i64) -> serde_json::Value {
        json!({
            "access_token": "access",
            "token_type": "Bearer",
            "expires_in": expires_in,
            "expiration": OffsetDateTime::now_utc().unix_timestamp() + expires_in,
        })
    }

    #[tokio::test]
    async fn static_token_is_used_as_is() {
        let auth = IamAuthenticator::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1",
            Credentials::Token("static".to_owned()),
        );
        assert_eq!(auth.bearer().await.unwrap(), "static");
    }

    #[tokio::test]
    async fn api_key_is_exchanged_once_while_fresh() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/identity/token"))
            .and(body_string_contains("apikey=secret"))
            .and(body_string_contains("grant-type%3Aapikey"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body(3600)))
            .expect(1)
            .mount(&server)
            .await;

        let auth = IamAuthenticator::new(
            reqwest::Client::new(),
            &server.uri(),
            Credentials::ApiKey("secret".to_owned()),
        );
        assert_eq!(auth.bearer().await.unwrap(), "access");
        assert_eq!(auth.bearer().await.unwrap(), "access");
    }

    #[tokio::test]
    async fn expiring_tokens_are_refreshed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/identity/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body(30)))
            .expect(2)
            .mount(&server)
            .await;

        let auth = IamAuthenticator::new(
            reqwest::Client::new(),
            &server.uri(),
            Credentials::ApiKey("secret".to_owned()),
        );
        auth.bearer().await.unwrap();
        auth.bearer().await.unwrap();
    }

    #[tokio::test]
    async fn rejected_api_key_is_an_authentication_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/identity/token"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid apikey"))
            .mount(&server)
            .await;

        let auth = IamAuthenticator::new(
            reqwest::Client::new(),
            &server.uri(),
            Credentials::ApiKey("bad".to_owned()),
        );
        let err = auth.bearer().await.unwrap_err();
        assert!(matches!(err, ApiError::Authentication(_)));
        assert!(err.to_string().contains("invalid apikey"));
    }

    #[test]
    fn credentials_are_redacted() {
        let debug = format!("{:?}", Credentials::ApiKey("secret".to_owned()));
        assert!(!debug.contains("secret"));
    }
}
