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
use tf_provider::value::Value;
use tf_provider::schema::{Block, Description, Schema};
use tf_provider::{map, AttributePath, Diagnostics};

use crate::convert::{
    known, nested, nested_value, refreshed_strings, settle, string, string_value, strings,
    unsettle, value, Mirror, StringList,
};
use crate::onboarding::{fill, replace_if_changed, Onboarding};
use crate::schema::{boolean, single, string as string_attr, Attributes, Computed, Optional, Required};
use crate::utils::{join_id, path_part, split_id, IdError, WithSchema, WithValidate};
use crate::validate::{self, check};

use super::shapes::{
    MetadataUi, MetadataUiModel, ObjectProvider, ObjectProviderModel, OverviewUi,
    OverviewUiModel, ServiceMetadata, ServiceMetadataModel,
};
use super::{check_entry, entry_attributes};

const KINDS: &[&str] = &["deployment"];
const ID_PARTS: [&str; 4] = [
    "product_id",
    "catalog_product_id",
    "catalog_plan_id",
    "catalog_deployment_id",
];

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDeploymentState {
    pub id: Value<String>,
    pub product_id: Value<String>,
    pub catalog_product_id: Value<String>,
    pub catalog_plan_id: Value<String>,
    pub env: Value<String>,
    pub object_id: Value<String>,
    pub name: Value<String>,
    pub active: Value<bool>,
    pub disabled: Value<bool>,
    pub kind: Value<String>,
    pub overview_ui: Value<OverviewUi>,
    pub tags: StringList,
    pub object_provider: Value<ObjectProvider>,
    pub metadata: Value<DeploymentMetadata>,
    pub url: Value<String>,
    pub catalog_deployment_id: Value<String>,
}

/// Global catalog deployment, as sent and returned by the service
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDeploymentModel {
    pub id: Option<String>,
    pub object_id: Option<String>,
    pub name: Option<String>,
    pub active: Option<bool>,
    pub disabled: Option<bool>,
    pub kind: Option<String>,
    pub overview_ui: Option<OverviewUiModel>,
    pub tags: Option<Vec<String>>,
    pub object_provider: Option<ObjectProviderModel>,
    pub metadata: Option<DeploymentMetadataModel>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentMetadata {
    pub rc_compatible: Value<bool>,
    pub ui: Value<MetadataUi>,
    pub service: Value<ServiceMetadata>,
    pub deployment: Value<DeploymentDetails>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentMetadataModel {
    pub rc_compatible: Option<bool>,
    pub ui: Option<MetadataUiModel>,
    pub service: Option<ServiceMetadataModel>,
    pub deployment: Option<DeploymentDetailsModel>,
}

impl Mirror for DeploymentMetadata {
    type Model = DeploymentMetadataModel;

    fn to_model(&self) -> DeploymentMetadataModel {
        DeploymentMetadataModel {
            rc_compatible: known(&self.rc_compatible),
            ui: nested(&self.ui),
            service: nested(&self.service),
            deployment: nested(&self.deployment),
        }
    }

    fn from_model(model: &DeploymentMetadataModel) -> Self {
        Self {
            rc_compatible: value(&model.rc_compatible),
            ui: nested_value(&model.ui),
            service: nested_value(&model.service),
            deployment: nested_value(&model.deployment),
        }
    }
}

/// Where the deployment runs and which broker provisions it
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentDetails {
    pub broker: Value<DeploymentBroker>,
    pub location: Value<String>,
    pub location_url: Value<String>,
    pub target_crn: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentDetailsModel {
    pub broker: Option<DeploymentBrokerModel>,
    pub location: Option<String>,
    pub location_url: Option<String>,
    pub target_crn: Option<String>,
}

impl Mirror for DeploymentDetails {
    type Model = DeploymentDetailsModel;

    fn to_model(&self) -> DeploymentDetailsModel {
        DeploymentDetailsModel {
            broker: nested(&self.broker),
            location: string(&self.location),
            location_url: string(&self.location_url),
            target_crn: string(&self.target_crn),
        }
    }

    fn from_model(model: &DeploymentDetailsModel) -> Self {
        Self {
            broker: nested_value(&model.broker),
            location: string_value(&model.location),
            location_url: string_value(&model.location_url),
            target_crn: string_value(&model.target_crn),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentBroker {
    pub name: Value<String>,
    pub guid: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentBrokerModel {
    pub name: Option<String>,
    pub guid: Option<String>,
}

impl Mirror for DeploymentBroker {
    type Model = DeploymentBrokerModel;

    fn to_model(&self) -> DeploymentBrokerModel {
        DeploymentBrokerModel {
            name: string(&self.name),
            guid: string(&self.guid),
        }
    }

    fn from_model(model: &DeploymentBrokerModel) -> Self {
        Self {
            name: string_value(&model.name),
            guid: string_value(&model.guid),
        }
    }
}

impl WithSchema for CatalogDeploymentState {
    fn schema() -> Schema {
        let mut attributes = entry_attributes("deployment");
        let extra: Attributes = map! {
            "product_id" => string_attr(Required, "The unique ID of the product."),
            "catalog_product_id" => string_attr(Required, "The unique ID of this global catalog product."),
            "catalog_plan_id" => string_attr(Required, "The unique ID of this global catalog plan."),
            "metadata" => single(Optional, "Global catalog deployment metadata.", map! {
                "rc_compatible" => boolean(
                    Optional,
                    "Whether the object is compatible with the resource controller service.",
                ),
                "ui" => single(Optional, "The UI metadata of this service.", MetadataUi::attributes()),
                "service" => single(
                    Optional,
                    "The global catalog metadata of the service.",
                    ServiceMetadata::attributes(),
                ),
                "deployment" => single(Optional, "The global catalog metadata of the deployment.", map! {
                    "broker" => single(Optional, "The broker associated with the deployment.", map! {
                        "name" => string_attr(Optional, "The name of the resource broker."),
                        "guid" => string_attr(Optional, "Crn or guid of the resource broker."),
                    }),
                    "location" => string_attr(Optional, "The global catalog deployment location."),
                    "location_url" => string_attr(Optional, "The global catalog deployment URL of location."),
                    "target_crn" => string_attr(Optional, "Region crn."),
                }),
            }),
            "catalog_deployment_id" => string_attr(Computed, "The ID of a global catalog object."),
        };
        attributes.extend(extra);

        Schema {
            version: 1,
            block: Block {
                description: Description::plain(
                    "Global catalog deployment of a Partner Center Sell plan",
                ),
                attributes,
                ..Default::default()
            },
        }
    }
}

impl WithValidate for CatalogDeploymentState {
    fn validate(&self, diags: &mut Diagnostics) {
        check(diags, AttributePath::new("product_id"), &self.product_id, validate::product_id());
        check(
            diags,
            AttributePath::new("catalog_product_id"),
            &self.catalog_product_id,
            validate::catalog_id(),
        );
        check(
            diags,
            AttributePath::new("catalog_plan_id"),
            &self.catalog_plan_id,
            validate::catalog_id(),
        );
        check_entry(
            diags,
            &self.env,
            (&self.name, validate::lowercase_name()),
            (&self.kind, KINDS),
        );
    }
}

#[derive(Debug, Default, Clone)]
pub struct CatalogDeployment;

impl Onboarding for CatalogDeployment {
    const NAME: &'static str = "partnercentersell_catalog_deployment";
    const ENTITY: &'static str = "CatalogDeployment";
    const PATCHABLE: &'static [&'static str] = &[
        "active",
        "disabled",
        "overview_ui",
        "tags",
        "object_provider",
        "metadata",
    ];

    type State = CatalogDeploymentState;
    type Model = CatalogDeploymentModel;

    fn id(state: &CatalogDeploymentState) -> &Value<String> {
        &state.id
    }

    fn id_mut(state: &mut CatalogDeploymentState) -> &mut Value<String> {
        &mut state.id
    }

    fn env(state: &CatalogDeploymentState) -> &Value<String> {
        &state.env
    }

    fn collection(state: &CatalogDeploymentState) -> Result<String, IdError> {
        let product_id = path_part(&state.product_id, "product_id")?;
        let catalog_product_id = path_part(&state.catalog_product_id, "catalog_product_id")?;
        let catalog_plan_id = path_part(&state.catalog_plan_id, "catalog_plan_id")?;
        Ok(format!(
            "/products/{product_id}/catalog_products/{catalog_product_id}/catalog_plans/{catalog_plan_id}/catalog_deployments"
        ))
    }

    fn location(id: &str) -> Result<String, IdError> {
        let [product_id, catalog_product_id, catalog_plan_id, catalog_deployment_id] =
            split_id(id, ID_PARTS)?;
        Ok(format!(
            "/products/{product_id}/catalog_products/{catalog_product_id}/catalog_plans/{catalog_plan_id}/catalog_deployments/{catalog_deployment_id}"
        ))
    }

    fn resource_id(
        state: &CatalogDeploymentState,
        created: &CatalogDeploymentModel,
    ) -> Option<String> {
        Some(join_id([
            path_part(&state.product_id, "product_id").ok()?,
            path_part(&state.catalog_product_id, "catalog_product_id").ok()?,
            path_part(&state.catalog_plan_id, "catalog_plan_id").ok()?,
            created.id.as_deref()?,
        ]))
    }

    fn to_model(state: &CatalogDeploymentState) -> CatalogDeploymentModel {
        CatalogDeploymentModel {
            object_id: string(&state.object_id),
            name: string(&state.name),
            active: known(&state.active),
            disabled: known(&state.disabled),
            kind: string(&state.kind),
            overview_ui: nested(&state.overview_ui),
            tags: strings(&state.tags),
            object_provider: nested(&state.object_provider),
            metadata: nested(&state.metadata),
            ..Default::default()
        }
    }

    fn refresh(state: &mut CatalogDeploymentState, model: &CatalogDeploymentModel) {
        if let Value::Value(id) = &state.id {
            if let Ok([product_id, catalog_product_id, catalog_plan_id, _]) = split_id(id, ID_PARTS) {
                state.product_id = Value::Value(product_id.to_owned());
                state.catalog_product_id = Value::Value(catalog_product_id.to_owned());
                state.catalog_plan_id = Value::Value(catalog_plan_id.to_owned());
            }
        }
        state.object_id = string_value(&model.object_id);
        state.name = string_value(&model.name);
        state.active = value(&model.active);
        state.disabled = value(&model.disabled);
        state.kind = string_value(&model.kind);
        state.overview_ui = nested_value(&model.overview_ui);
        state.tags = refreshed_strings(&state.tags, &model.tags);
        state.object_provider = nested_value(&model.object_provider);
        state.metadata = nested_value(&model.metadata);
        state.url = string_value(&model.url);
        state.catalog_deployment_id = string_value(&model.id);
    }

    fn plan_computed(state: &mut CatalogDeploymentState) {
        unsettle(&mut state.object_id);
        state.url = Value::Unknown;
        state.catalog_deployment_id = Value::Unknown;
    }

    fn apply(state: &mut CatalogDeploymentState, model: Option<&CatalogDeploymentModel>) {
        if let Some(model) = model {
            fill(&mut state.object_id, string_value(&model.object_id));
            fill(&mut state.url, string_value(&model.url));
            fill(&mut state.catalog_deployment_id, string_value(&model.id));
        }
        settle(&mut state.object_id);
        settle(&mut state.url);
        settle(&mut state.catalog_deployment_id);
    }

    fn replace_paths(
        prior: &CatalogDeploymentState,
        planned: &CatalogDeploymentState,
    ) -> Vec<AttributePath> {
        let mut paths = Vec::new();
        replace_if_changed(&mut paths, "product_id", &prior.product_id, &planned.product_id);
        replace_if_changed(
            &mut paths,
            "catalog_product_id",
            &prior.catalog_product_id,
            &planned.catalog_product_id,
        );
        replace_if_changed(
            &mut paths,
            "catalog_plan_id",
            &prior.catalog_plan_id,
            &planned.catalog_plan_id,
        );
        replace_if_changed(&mut paths, "object_id", &prior.object_id, &planned.object_id);
        replace_if_changed(&mut paths, "name", &prior.name, &planned.name);
        replace_if_changed(&mut paths, "kind", &prior.kind, &planned.kind);
        paths
    }

    fn import(id: &str) -> Result<CatalogDeploymentState, IdError> {
        let [product_id, catalog_product_id, catalog_plan_id, catalog_deployment_id] =
            split_id(id, ID_PARTS)?;
        Ok(CatalogDeploymentState {
            id: Value::Value(id.to_owned()),
            product_id: Value::Value(product_id.to_owned()),
            catalog_product_id: Value::Value(catalog_product_id.to_owned()),
            catalog_plan_id: Value::Value(catalog_plan_id.to_owned()),
            catalog_deployment_id: Value::Value(catalog_deployment_id.to_owned()),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tf_provider::Resource;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::catalog::tests::PRODUCT_ID;
    use crate::client::{tests::client_for, ClientHandle};
    use crate::onboarding::SellResource;

    fn known(value: &str) -> Value<String> {
        Value::Value(value.to_owned())
    }

    fn deployed() -> CatalogDeploymentState {
        CatalogDeploymentState {
            id: known(&format!("{PRODUCT_ID}/cp-1/plan-1/dep-1")),
            product_id: known(PRODUCT_ID),
            catalog_product_id: known("cp-1"),
            catalog_plan_id: known("plan-1"),
            env: known("stage"),
            object_id: known("obj-dep"),
            name: known("eu-de"),
            active: Value::Value(true),
            disabled: Value::Value(false),
            kind: known("deployment"),
            tags: Value::Value(vec![known("eu-de")]),
            object_provider: Value::Value(ObjectProvider {
                name: known("IBM"),
                email: known("name.name@ibm.com"),
            }),
            metadata: Value::Value(DeploymentMetadata {
                deployment: Value::Value(DeploymentDetails {
                    broker: Value::Value(DeploymentBroker {
                        name: known("broker"),
                        guid: known("crn:v1:broker"),
                    }),
                    location: known("eu-de"),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            url: known("https://catalog/dep-1"),
            catalog_deployment_id: known("dep-1"),
            ..Default::default()
        }
    }

    async fn resource_for(server: &MockServer) -> SellResource<CatalogDeployment> {
        let handle = ClientHandle::default();
        handle.set(Arc::new(client_for(server, None))).unwrap();
        SellResource::new(handle)
    }

    #[test]
    fn location_uses_all_four_parts() {
        assert_eq!(
            CatalogDeployment::location(&format!("{PRODUCT_ID}/cp-1/plan-1/dep-1")).unwrap(),
            format!(
                "/products/{PRODUCT_ID}/catalog_products/cp-1/catalog_plans/plan-1/catalog_deployments/dep-1"
            )
        );
        assert!(matches!(
            CatalogDeployment::location(&format!("{PRODUCT_ID}/cp-1//dep-1")),
            Err(IdError::EmptyPart {
                name: "catalog_plan_id",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn broker_change_patches_the_metadata() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(
                format!(
                    "/products/{PRODUCT_ID}/catalog_products/cp-1/catalog_plans/plan-1/catalog_deployments/dep-1"
                )
                .as_str(),
            ))
            .and(query_param("env", "stage"))
            .and(body_json(json!({
                "metadata": {
                    "deployment": {
                        "broker": {"name": "broker", "guid": null},
                        "location": "eu-de",
                    },
                },
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "dep-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let prior = deployed();
        let mut planned = deployed();
        if let Value::Value(metadata) = &mut planned.metadata {
            if let Value::Value(deployment) = &mut metadata.deployment {
                deployment.broker = Value::Value(DeploymentBroker {
                    name: known("broker"),
                    guid: Value::Null,
                });
            }
        }

        let resource = resource_for(&server).await;
        let mut diags = Diagnostics::default();
        let (state, _) = resource
            .update(
                &mut diags,
                prior,
                planned.clone(),
                planned.clone(),
                Default::default(),
                Default::default(),
            )
            .await
            .unwrap();
        assert!(diags.errors.is_empty());
        assert_eq!(state, planned);
    }

    #[tokio::test]
    async fn read_restores_parent_ids_after_import() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(
                format!(
                    "/products/{PRODUCT_ID}/catalog_products/cp-1/catalog_plans/plan-1/catalog_deployments/dep-1"
                )
                .as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "dep-1",
                "object_id": "obj-dep",
                "name": "eu-de",
                "active": true,
                "disabled": false,
                "kind": "deployment",
                "tags": ["eu-de"],
                "object_provider": {"name": "IBM", "email": "name.name@ibm.com"},
                "metadata": {
                    "rc_compatible": null,
                    "deployment": {
                        "broker": {"name": "broker", "guid": "crn:v1:broker"},
                        "location": "eu-de",
                        "location_url": "",
                    },
                },
                "url": "https://catalog/dep-1",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let imported =
            CatalogDeployment::import(&format!("{PRODUCT_ID}/cp-1/plan-1/dep-1")).unwrap();
        let resource = resource_for(&server).await;
        let mut diags = Diagnostics::default();
        let (state, _) = resource
            .read(&mut diags, imported, Default::default(), Default::default())
            .await
            .unwrap();

        assert_eq!(
            state,
            CatalogDeploymentState {
                env: Value::Null,
                ..deployed()
            }
        );
    }

    #[test]
    fn deployment_names_are_lowercase() {
        let mut diags = Diagnostics::default();
        CatalogDeploymentState {
            name: known("EU-DE"),
            ..deployed()
        }
        .validate(&mut diags);
        assert_eq!(diags.errors.len(), 1);
    }
}
