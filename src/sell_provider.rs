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

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use tf_provider::schema::Schema;
use tf_provider::value::ValueEmpty;
use tf_provider::{map, Diagnostics, Provider};

use crate::{
    broker::ResourceBroker,
    catalog::{CatalogDeployment, CatalogPlan, CatalogProduct},
    client::{ClientHandle, PartnerCenterSellClient},
    config::ProviderConfig,
    iam::IamRegistration,
    onboarding::SellResource,
    utils::{WithSchema, WithValidate},
};

#[derive(Debug, Default, Clone)]
pub struct PartnerCenterSellProvider {
    client: ClientHandle,
}

#[async_trait]
impl Provider for PartnerCenterSellProvider {
    type Config<'a> = ProviderConfig;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(ProviderConfig::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::Config<'a>) -> Option<()> {
        config.validate(diags);

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn configure<'a>(
        &self,
        diags: &mut Diagnostics,
        terraform_version: String,
        config: Self::Config<'a>,
    ) -> Option<()> {
        let client_config = match config.resolve(|name| std::env::var(name).ok()) {
            Ok(client_config) => client_config,
            Err(err) => {
                diags.root_error("Invalid provider configuration", err.to_string());
                return None;
            }
        };
        info!(
            %terraform_version,
            endpoint = %client_config.endpoint,
            env = client_config.env.as_deref().unwrap_or_default(),
            "configuring Partner Center Sell provider"
        );

        let client = match PartnerCenterSellClient::new(client_config) {
            Ok(client) => client,
            Err(err) => {
                diags.root_error("Failed to initialize the Partner Center Sell client", err.to_string());
                return None;
            }
        };

        if self.client.set(Arc::new(client)).is_err() {
            diags.root_warning(
                "Provider configured twice",
                "The provider has already been configured; the first configuration is kept.",
            );
        }
        Some(())
    }

    fn get_resources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn tf_provider::DynamicResource>>> {
        Some(map! {
            "catalog_product"    => SellResource::<CatalogProduct>::new(self.client.clone()),
            "catalog_plan"       => SellResource::<CatalogPlan>::new(self.client.clone()),
            "catalog_deployment" => SellResource::<CatalogDeployment>::new(self.client.clone()),
            "iam_registration"   => SellResource::<IamRegistration>::new(self.client.clone()),
            "resource_broker"    => SellResource::<ResourceBroker>::new(self.client.clone()),
        })
    }

    fn get_data_sources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn tf_provider::DynamicDataSource>>> {
        Some(HashMap::new())
    }
}

#[cfg(test)]
mod tests {
    use tf_provider::value::Value;

    use super::*;

    #[test]
    fn every_resource_is_registered() {
        let provider = PartnerCenterSellProvider::default();
        let mut diags = Diagnostics::default();
        let mut names = provider
            .get_resources(&mut diags)
            .unwrap()
            .into_keys()
            .collect::<Vec<_>>();
        names.sort();
        assert_eq!(
            names,
            [
                "catalog_deployment",
                "catalog_plan",
                "catalog_product",
                "iam_registration",
                "resource_broker",
            ]
        );
    }

    #[tokio::test]
    async fn configure_shares_the_client_with_resources() {
        let provider = PartnerCenterSellProvider::default();
        let mut diags = Diagnostics::default();
        let config = ProviderConfig {
            iam_token: Value::Value("token".to_owned()),
            ..Default::default()
        };

        assert!(provider
            .configure(&mut diags, "1.9.0".to_owned(), config.clone())
            .await
            .is_some());
        assert!(provider.client.initialized());
        assert!(diags.warnings.is_empty());

        provider
            .configure(&mut diags, "1.9.0".to_owned(), config)
            .await;
        assert_eq!(diags.warnings.len(), 1);
    }

    #[tokio::test]
    async fn invalid_endpoints_fail_validation() {
        let provider = PartnerCenterSellProvider::default();
        let mut diags = Diagnostics::default();
        let config = ProviderConfig {
            endpoint: Value::Value("product-lifecycle".to_owned()),
            ..Default::default()
        };
        assert!(provider.validate(&mut diags, config).await.is_none());
    }
}
