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

use std::sync::Arc;

use reqwest::{header, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::patch::Body;

mod iam;

pub use iam::{Credentials, IamAuthenticator, DEFAULT_IAM_ENDPOINT};

pub const DEFAULT_ENDPOINT: &str = "https://product-lifecycle.cloud.ibm.com/openapi/v1";

const MERGE_PATCH: &str = "application/merge-patch+json";

/// Client shared by the provider and its resources, set once configured
pub type ClientHandle = Arc<OnceCell<Arc<PartnerCenterSellClient>>>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{method} {path} returned {status}: {message}")]
    Status {
        method: Method,
        path: String,
        status: StatusCode,
        message: String,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("authentication failed: {0}")]
    Authentication(String),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Error document returned by IBM Cloud services
#[derive(Debug, Default, Deserialize)]
struct ErrorDocument {
    #[serde(default)]
    errors: Vec<ErrorItem>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    code: Option<String>,
    message: Option<String>,
}

impl ErrorDocument {
    fn message(self) -> Option<String> {
        self.errors
            .into_iter()
            .find_map(|item| match (item.code, item.message) {
                (Some(code), Some(message)) => Some(format!("{message} ({code})")),
                (None, Some(message)) => Some(message),
                _ => None,
            })
            .or(self.message)
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub iam_endpoint: String,
    pub credentials: Credentials,
    pub env: Option<String>,
}

/// REST client of the Partner Center Sell API
#[derive(Debug)]
pub struct PartnerCenterSellClient {
    http: reqwest::Client,
    endpoint: String,
    env: Option<String>,
    auth: IamAuthenticator,
}

impl PartnerCenterSellClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        let auth = IamAuthenticator::new(http.clone(), &config.iam_endpoint, config.credentials);

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_owned(),
            env: config.env,
            auth,
        })
    }

    /// Environment sent with a request: the resource's own, or the provider default
    pub fn env<'a>(&'a self, env: Option<&'a str>) -> Option<&'a str> {
        env.filter(|env| !env.is_empty())
            .or(self.env.as_deref())
    }

    fn request(&self, method: Method, path: &str, env: Option<&str>) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, format!("{}{path}", self.endpoint))
            .header(header::ACCEPT, "application/json");
        if let Some(env) = self.env(env) {
            request = request.query(&[("env", env)]);
        }
        request
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let token = self.auth.bearer().await?;
        debug!(%method, path, "calling Partner Center Sell API");

        let response = request.bearer_auth(token).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorDocument>(&body)
            .ok()
            .and_then(ErrorDocument::message)
            .unwrap_or(body);
        debug!(%method, path, %status, error = %message, "Partner Center Sell API error");

        Err(ApiError::Status {
            method,
            path: path.to_owned(),
            status,
            message,
        })
    }

    async fn decode<M: DeserializeOwned>(response: Response) -> Result<M, ApiError> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn create<B, M>(&self, path: &str, env: Option<&str>, body: &B) -> Result<M, ApiError>
    where
        B: Serialize + ?Sized,
        M: DeserializeOwned,
    {
        let request = self.request(Method::POST, path, env).json(body);
        Self::decode(self.send(Method::POST, path, request).await?).await
    }

    pub async fn get<M: DeserializeOwned>(&self, path: &str, env: Option<&str>) -> Result<M, ApiError> {
        let request = self.request(Method::GET, path, env);
        Self::decode(self.send(Method::GET, path, request).await?).await
    }

    pub async fn patch<M: DeserializeOwned>(
        &self,
        path: &str,
        env: Option<&str>,
        patch: &Body,
    ) -> Result<M, ApiError> {
        let request = self
            .request(Method::PATCH, path, env)
            .header(header::CONTENT_TYPE, MERGE_PATCH)
            .body(serde_json::to_vec(patch)?);
        Self::decode(self.send(Method::PATCH, path, request).await?).await
    }

    pub async fn delete(&self, path: &str, env: Option<&str>) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, path, env);
        self.send(Method::DELETE, path, request).await?;
        Ok(())
    }
}
