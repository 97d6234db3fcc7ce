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

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tf_provider::value::Value;
use tf_provider::schema::{Block, Description, Schema};
use tf_provider::{map, AttributePath, Diagnostics};
use url::Url;

use crate::client::{ClientConfig, Credentials, DEFAULT_ENDPOINT, DEFAULT_IAM_ENDPOINT};
use crate::convert::string;
use crate::schema::{sensitive_string, string as string_attr, Optional};
use crate::utils::{WithSchema, WithValidate};
use crate::validate::{self, check};

const API_KEY_VARS: [&str; 2] = ["IC_API_KEY", "IBMCLOUD_API_KEY"];
const IAM_TOKEN_VAR: &str = "IC_IAM_TOKEN";
const ENDPOINT_VAR: &str = "IBMCLOUD_PARTNER_CENTER_SELL_API_ENDPOINT";
const IAM_ENDPOINT_VAR: &str = "IBMCLOUD_IAM_API_ENDPOINT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No credentials: set `ibmcloud_api_key` or `iam_token`, or one of the IC_API_KEY, IBMCLOUD_API_KEY or IC_IAM_TOKEN environment variables")]
    MissingCredentials,
    #[error("`{attribute}` is not a valid http(s) URL: {value:?} ({reason})")]
    InvalidEndpoint {
        attribute: &'static str,
        value: String,
        reason: String,
    },
}

/// Provider block
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub ibmcloud_api_key: Value<String>,
    pub iam_token: Value<String>,
    pub endpoint: Value<String>,
    pub iam_endpoint: Value<String>,
    pub env: Value<String>,
}

impl WithSchema for ProviderConfig {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                description: Description::plain("IBM Cloud Partner Center Sell onboarding"),
                attributes: map! {
                    "ibmcloud_api_key" => sensitive_string(
                        Optional,
                        "IBM Cloud API key, exchanged for IAM access tokens (env: IC_API_KEY or IBMCLOUD_API_KEY)",
                    ),
                    "iam_token" => sensitive_string(
                        Optional,
                        "IAM bearer token used instead of an API key (env: IC_IAM_TOKEN)",
                    ),
                    "endpoint" => string_attr(
                        Optional,
                        "Partner Center Sell API endpoint (env: IBMCLOUD_PARTNER_CENTER_SELL_API_ENDPOINT)",
                    ),
                    "iam_endpoint" => string_attr(
                        Optional,
                        "IAM endpoint used for the API key exchange (env: IBMCLOUD_IAM_API_ENDPOINT)",
                    ),
                    "env" => string_attr(
                        Optional,
                        "Default environment of the resources that do not set their own",
                    ),
                },
                ..Default::default()
            },
        }
    }
}

impl WithValidate for ProviderConfig {
    fn validate(&self, diags: &mut Diagnostics) {
        for (attribute, value) in [("endpoint", &self.endpoint), ("iam_endpoint", &self.iam_endpoint)] {
            if let Value::Value(value) = value {
                if let Err(err) = parse_endpoint(attribute, value) {
                    diags.error("Invalid provider endpoint", err.to_string(), AttributePath::new(attribute));
                }
            }
        }
        check(diags, AttributePath::new("env"), &self.env, validate::env());
    }
}

impl ProviderConfig {
    /// Merge the provider block with the environment
    ///
    /// Attributes set in the block take precedence over environment variables.
    pub fn resolve<F>(&self, lookup: F) -> Result<ClientConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let credentials = if let Some(token) = string(&self.iam_token) {
            Credentials::Token(token)
        } else if let Some(apikey) = string(&self.ibmcloud_api_key)
            .or_else(|| API_KEY_VARS.iter().find_map(|&name| lookup(name)))
        {
            Credentials::ApiKey(apikey)
        } else if let Some(token) = lookup(IAM_TOKEN_VAR) {
            Credentials::Token(token)
        } else {
            return Err(ConfigError::MissingCredentials);
        };

        let endpoint = string(&self.endpoint)
            .or_else(|| lookup(ENDPOINT_VAR))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
        let iam_endpoint = string(&self.iam_endpoint)
            .or_else(|| lookup(IAM_ENDPOINT_VAR))
            .unwrap_or_else(|| DEFAULT_IAM_ENDPOINT.to_owned());
        parse_endpoint("endpoint", &endpoint)?;
        parse_endpoint("iam_endpoint", &iam_endpoint)?;

        Ok(ClientConfig {
            endpoint,
            iam_endpoint,
            credentials,
            env: string(&self.env),
        })
    }
}

fn parse_endpoint(attribute: &'static str, value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        attribute,
        value: value.to_owned(),
        reason,
    };
    let url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(format!("unsupported scheme {scheme:?}"))),
    }
}
