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

//! Resource broker registered to provision the instances of a product.

use serde::{Deserialize, Serialize};
use tf_provider::value::Value;
use tf_provider::schema::{Block, Description, Schema};
use tf_provider::{map, AttributePath, Diagnostics};

use crate::convert::{
    known, nested_value, settle, string, string_value, unsettle, value, Mirror,
};
use crate::onboarding::{fill, Onboarding};
use crate::schema::{
    boolean, sensitive_string, single, string as string_attr, Computed, Optional, OptionalComputed,
    Required,
};
use crate::utils::{split_id, IdError, WithSchema, WithValidate};
use crate::validate::{self, check, Rule};

const AUTH_SCHEMES: &[&str] = &["bearer", "bearer-crn"];
const BROKER_TYPES: &[&str] = &["provision_through", "provision_behind"];
const STATES: &[&str] = &["active", "removed"];

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceBrokerState {
    pub id: Value<String>,
    pub env: Value<String>,
    pub auth_username: Value<String>,
    pub auth_password: Value<String>,
    pub auth_scheme: Value<String>,
    pub resource_group_crn: Value<String>,
    pub state: Value<String>,
    pub broker_url: Value<String>,
    pub allow_context_updates: Value<bool>,
    pub catalog_type: Value<String>,
    pub r#type: Value<String>,
    pub name: Value<String>,
    pub region: Value<String>,
    pub account_id: Value<String>,
    pub crn: Value<String>,
    pub guid: Value<String>,
    pub url: Value<String>,
    pub created_at: Value<String>,
    pub updated_at: Value<String>,
    pub created_by: Value<BrokerUser>,
    pub updated_by: Value<BrokerUser>,
}

/// Resource broker, as sent and returned by the service
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceBrokerModel {
    pub id: Option<String>,
    pub auth_username: Option<String>,
    pub auth_password: Option<String>,
    pub auth_scheme: Option<String>,
    pub resource_group_crn: Option<String>,
    pub state: Option<String>,
    pub broker_url: Option<String>,
    pub allow_context_updates: Option<bool>,
    pub catalog_type: Option<String>,
    pub r#type: Option<String>,
    pub name: Option<String>,
    pub region: Option<String>,
    pub account_id: Option<String>,
    pub crn: Option<String>,
    pub guid: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub created_by: Option<BrokerUserModel>,
    pub updated_by: Option<BrokerUserModel>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerUser {
    pub user_id: Value<String>,
    pub user_name: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerUserModel {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
}

impl Mirror for BrokerUser {
    type Model = BrokerUserModel;

    fn to_model(&self) -> BrokerUserModel {
        BrokerUserModel {
            user_id: string(&self.user_id),
            user_name: string(&self.user_name),
        }
    }

    fn from_model(model: &BrokerUserModel) -> Self {
        Self {
            user_id: string_value(&model.user_id),
            user_name: string_value(&model.user_name),
        }
    }
}

fn user(description: &str) -> tf_provider::schema::Attribute {
    single(Computed, description, map! {
        "user_id" => string_attr(Computed, "The ID of the user."),
        "user_name" => string_attr(Computed, "The name of the user."),
    })
}

impl WithSchema for ResourceBrokerState {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                description: Description::plain("Resource broker of Partner Center Sell products"),
                attributes: map! {
                    "id" => string_attr(Computed, "The ID of the broker."),
                    "env" => string_attr(Optional, "The environment to fetch this object from."),
                    "auth_username" => string_attr(Optional, "The authentication username to reach the broker."),
                    "auth_password" => sensitive_string(Optional, "The authentication password to reach the broker."),
                    "auth_scheme" => string_attr(Required, "The supported authentication scheme for the broker."),
                    "resource_group_crn" => string_attr(Optional, "The cloud resource name of the resource group."),
                    "state" => string_attr(OptionalComputed, "The state of the broker."),
                    "broker_url" => string_attr(Required, "The URL associated with the broker application."),
                    "allow_context_updates" => boolean(
                        Optional,
                        "Whether the resource controller will call the broker for any context changes to the instance. Currently, the only context related change is an instance name update.",
                    ),
                    "catalog_type" => string_attr(
                        Optional,
                        "To enable the provisioning of your broker, set this parameter value to `service`.",
                    ),
                    "type" => string_attr(
                        Required,
                        "The type of the provisioning model.",
                    ),
                    "name" => string_attr(Required, "The name of the broker."),
                    "region" => string_attr(Optional, "The region where the pricing plan is available."),
                    "account_id" => string_attr(Computed, "The ID of the account in which you manage the broker."),
                    "crn" => string_attr(Computed, "The cloud resource name (CRN) of the broker."),
                    "guid" => string_attr(Computed, "The globally unique identifier of the broker."),
                    "url" => string_attr(Computed, "The URL associated with the broker."),
                    "created_at" => string_attr(Computed, "The time when the service broker was created."),
                    "updated_at" => string_attr(Computed, "The time when the service broker was updated."),
                    "created_by" => user("The details of the user who created this broker."),
                    "updated_by" => user("The details of the user who updated this broker."),
                },
                ..Default::default()
            },
        }
    }
}

impl WithValidate for ResourceBrokerState {
    fn validate(&self, diags: &mut Diagnostics) {
        check(diags, AttributePath::new("env"), &self.env, validate::env());
        check(
            diags,
            AttributePath::new("auth_scheme"),
            &self.auth_scheme,
            Rule::OneOf(AUTH_SCHEMES),
        );
        check(diags, AttributePath::new("state"), &self.state, Rule::OneOf(STATES));
        check(diags, AttributePath::new("type"), &self.r#type, Rule::OneOf(BROKER_TYPES));
    }
}

#[derive(Debug, Default, Clone)]
pub struct ResourceBroker;

impl Onboarding for ResourceBroker {
    const NAME: &'static str = "partnercentersell_resource_broker";
    const ENTITY: &'static str = "ResourceBroker";
    const PATCHABLE: &'static [&'static str] = &[
        "auth_username",
        "auth_password",
        "auth_scheme",
        "resource_group_crn",
        "state",
        "broker_url",
        "allow_context_updates",
        "catalog_type",
        "type",
        "name",
        "region",
    ];

    type State = ResourceBrokerState;
    type Model = ResourceBrokerModel;

    fn id(state: &ResourceBrokerState) -> &Value<String> {
        &state.id
    }

    fn id_mut(state: &mut ResourceBrokerState) -> &mut Value<String> {
        &mut state.id
    }

    fn env(state: &ResourceBrokerState) -> &Value<String> {
        &state.env
    }

    fn collection(_state: &ResourceBrokerState) -> Result<String, IdError> {
        Ok("/brokers".to_owned())
    }

    fn location(id: &str) -> Result<String, IdError> {
        let [broker_id] = split_id(id, ["broker_id"])?;
        Ok(format!("/brokers/{broker_id}"))
    }

    fn resource_id(_state: &ResourceBrokerState, created: &ResourceBrokerModel) -> Option<String> {
        created.id.clone().filter(|id| !id.is_empty())
    }

    fn to_model(state: &ResourceBrokerState) -> ResourceBrokerModel {
        ResourceBrokerModel {
            auth_username: string(&state.auth_username),
            auth_password: string(&state.auth_password),
            auth_scheme: string(&state.auth_scheme),
            resource_group_crn: string(&state.resource_group_crn),
            state: string(&state.state),
            broker_url: string(&state.broker_url),
            allow_context_updates: known(&state.allow_context_updates),
            catalog_type: string(&state.catalog_type),
            r#type: string(&state.r#type),
            name: string(&state.name),
            region: string(&state.region),
            ..Default::default()
        }
    }

    fn refresh(state: &mut ResourceBrokerState, model: &ResourceBrokerModel) {
        state.auth_username = string_value(&model.auth_username);
        if model.auth_password.as_deref().is_some_and(|password| !password.is_empty()) {
            state.auth_password = string_value(&model.auth_password);
        }
        state.auth_scheme = string_value(&model.auth_scheme);
        state.resource_group_crn = string_value(&model.resource_group_crn);
        state.state = string_value(&model.state);
        state.broker_url = string_value(&model.broker_url);
        state.allow_context_updates = value(&model.allow_context_updates);
        state.catalog_type = string_value(&model.catalog_type);
        state.r#type = string_value(&model.r#type);
        state.name = string_value(&model.name);
        state.region = string_value(&model.region);
        state.account_id = string_value(&model.account_id);
        state.crn = string_value(&model.crn);
        state.guid = string_value(&model.guid);
        state.url = string_value(&model.url);
        state.created_at = string_value(&model.created_at);
        state.updated_at = string_value(&model.updated_at);
        state.created_by = nested_value(&model.created_by);
        state.updated_by = nested_value(&model.updated_by);
    }

    fn plan_computed(state: &mut ResourceBrokerState) {
        unsettle(&mut state.state);
        state.account_id = Value::Unknown;
        state.crn = Value::Unknown;
        state.guid = Value::Unknown;
        state.url = Value::Unknown;
        state.created_at = Value::Unknown;
        state.updated_at = Value::Unknown;
        state.created_by = Value::Unknown;
        state.updated_by = Value::Unknown;
    }

    fn plan_changed(state: &mut ResourceBrokerState) {
        state.updated_at = Value::Unknown;
        state.updated_by = Value::Unknown;
    }

    fn apply(state: &mut ResourceBrokerState, model: Option<&ResourceBrokerModel>) {
        if let Some(model) = model {
            fill(&mut state.state, string_value(&model.state));
            fill(&mut state.account_id, string_value(&model.account_id));
            fill(&mut state.crn, string_value(&model.crn));
            fill(&mut state.guid, string_value(&model.guid));
            fill(&mut state.url, string_value(&model.url));
            fill(&mut state.created_at, string_value(&model.created_at));
            fill(&mut state.updated_at, string_value(&model.updated_at));
            fill(&mut state.created_by, nested_value(&model.created_by));
            fill(&mut state.updated_by, nested_value(&model.updated_by));
        }
        settle(&mut state.state);
        settle(&mut state.account_id);
        settle(&mut state.crn);
        settle(&mut state.guid);
        settle(&mut state.url);
        settle(&mut state.created_at);
        settle(&mut state.updated_at);
        settle(&mut state.created_by);
        settle(&mut state.updated_by);
    }

    fn replace_paths(_prior: &ResourceBrokerState, _planned: &ResourceBrokerState) -> Vec<AttributePath> {
        Vec::new()
    }

    fn import(id: &str) -> Result<ResourceBrokerState, IdError> {
        split_id(id, ["broker_id"])?;
        Ok(ResourceBrokerState {
            id: Value::Value(id.to_owned()),
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
    use crate::client::{tests::client_for, ClientHandle};
    use crate::onboarding::SellResource;

    fn known(value: &str) -> Value<String> {
        Value::Value(value.to_owned())
    }

    fn configured() -> ResourceBrokerState {
        ResourceBrokerState {
            auth_username: known("apikey"),
            auth_password: known("s3cr3t"),
            auth_scheme: known("bearer"),
            broker_url: known("https://broker.example.com"),
            allow_context_updates: Value::Value(false),
            catalog_type: known("service"),
            r#type: known("provision_through"),
            name: known("my-broker"),
            region: known("global"),
            ..Default::default()
        }
    }

    fn created_response() -> serde_json::Value {
        json!({
            "id": "b1",
            "auth_username": "apikey",
            "auth_scheme": "bearer",
            "state": "active",
            "broker_url": "https://broker.example.com",
            "allow_context_updates": false,
            "catalog_type": "service",
            "type": "provision_through",
            "name": "my-broker",
            "region": "global",
            "account_id": "acc",
            "crn": "crn:v1:broker:b1",
            "guid": "guid-b1",
            "url": "https://brokers/b1",
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z",
            "created_by": {"user_id": "IBMid-1", "user_name": "owner"},
            "updated_by": {"user_id": "IBMid-1", "user_name": "owner"},
        })
    }

    async fn resource_for(server: &MockServer, env: Option<&str>) -> SellResource<ResourceBroker> {
        let handle = ClientHandle::default();
        handle.set(Arc::new(client_for(server, env))).unwrap();
        SellResource::new(handle)
    }

    #[tokio::test]
    async fn create_registers_the_broker() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/brokers"))
            .and(query_param("env", "stage"))
            .and(body_json(json!({
                "auth_username": "apikey",
                "auth_password": "s3cr3t",
                "auth_scheme": "bearer",
                "broker_url": "https://broker.example.com",
                "allow_context_updates": false,
                "catalog_type": "service",
                "type": "provision_through",
                "name": "my-broker",
                "region": "global",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(created_response()))
            .expect(1)
            .mount(&server)
            .await;

        let resource = resource_for(&server, Some("stage")).await;
        let mut diags = Diagnostics::default();
        let (planned, _) = resource
            .plan_create(&mut diags, configured(), configured(), Default::default())
            .await
            .unwrap();
        let (state, _) = resource
            .create(
                &mut diags,
                planned.clone(),
                planned,
                Default::default(),
                Default::default(),
            )
            .await
            .unwrap();

        assert!(diags.errors.is_empty());
        assert_eq!(state.id, known("b1"));
        assert_eq!(state.crn, known("crn:v1:broker:b1"));
        assert_eq!(
            state.created_by,
            Value::Value(BrokerUser {
                user_id: known("IBMid-1"),
                user_name: known("owner"),
            })
        );
        assert_eq!(state.state, known("active"));
    }

    #[tokio::test]
    async fn read_keeps_the_password() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/brokers/b1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(created_response()))
            .expect(1)
            .mount(&server)
            .await;

        let resource = resource_for(&server, None).await;
        let mut diags = Diagnostics::default();
        let prior = ResourceBrokerState {
            id: known("b1"),
            ..configured()
        };
        let (state, _) = resource
            .read(&mut diags, prior, Default::default(), Default::default())
            .await
            .unwrap();

        assert_eq!(state.auth_password, known("s3cr3t"));
        assert_eq!(state.state, known("active"));
        assert_eq!(state.guid, known("guid-b1"));
    }

    #[tokio::test]
    async fn deleted_broker_is_removed_from_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/brokers/b1"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{"code": "not_found", "message": "Broker not found"}],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resource = resource_for(&server, None).await;
        let mut diags = Diagnostics::default();
        let state = ResourceBrokerState {
            id: known("b1"),
            ..configured()
        };
        assert!(resource
            .read(&mut diags, state, Default::default(), Default::default())
            .await
            .is_none());
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn enumerations_are_validated() {
        let mut diags = Diagnostics::default();
        ResourceBrokerState {
            auth_scheme: known("basic"),
            state: known("pending"),
            r#type: known("provision"),
            ..configured()
        }
        .validate(&mut diags);
        assert_eq!(diags.errors.len(), 3);

        let mut diags = Diagnostics::default();
        configured().validate(&mut diags);
        assert!(diags.errors.is_empty());
    }

    #[tokio::test]
    async fn update_refreshes_the_modification_stamp() {
        let server = MockServer::start().await;
        let mut updated = created_response();
        updated["updated_at"] = json!("2024-06-01T08:00:00Z");
        updated["updated_by"] = json!({"user_id": "IBMid-2", "user_name": "operator"});
        Mock::given(method("PATCH"))
            .and(path("/brokers/b1"))
            .and(body_json(json!({"region": "us-south"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(updated))
            .expect(1)
            .mount(&server)
            .await;

        let resource = resource_for(&server, None).await;
        let mut diags = Diagnostics::default();
        let prior = ResourceBrokerState {
            id: known("b1"),
            updated_at: known("2024-05-01T10:00:00Z"),
            updated_by: Value::Value(BrokerUser {
                user_id: known("IBMid-1"),
                user_name: known("owner"),
            }),
            ..configured()
        };

        let (unchanged, _, _) = resource
            .plan_update(
                &mut diags,
                prior.clone(),
                prior.clone(),
                prior.clone(),
                Default::default(),
                Default::default(),
            )
            .await
            .unwrap();
        assert_eq!(unchanged.updated_at, known("2024-05-01T10:00:00Z"));

        let proposed = ResourceBrokerState {
            region: known("us-south"),
            ..prior.clone()
        };
        let (planned, _, replace) = resource
            .plan_update(
                &mut diags,
                prior.clone(),
                proposed.clone(),
                proposed.clone(),
                Default::default(),
                Default::default(),
            )
            .await
            .unwrap();
        assert!(replace.is_empty());
        assert!(planned.updated_at.is_unknown());
        assert!(planned.updated_by.is_unknown());

        let (state, _) = resource
            .update(
                &mut diags,
                prior,
                planned,
                proposed,
                Default::default(),
                Default::default(),
            )
            .await
            .unwrap();
        assert!(diags.errors.is_empty());
        assert_eq!(state.updated_at, known("2024-06-01T08:00:00Z"));
        assert_eq!(
            state.updated_by,
            Value::Value(BrokerUser {
                user_id: known("IBMid-2"),
                user_name: known("operator"),
            })
        );
        assert_eq!(state.created_at, Value::Null);
    }

    #[test]
    fn imported_ids_must_be_path_segments() {
        assert!(ResourceBroker::import("b1").is_ok());
        assert!(matches!(
            ResourceBroker::import("b1?env=prod"),
            Err(IdError::InvalidPart { name: "broker_id", .. })
        ));
    }

    #[test]
    fn password_changes_are_patched() {
        let prior = crate::patch::to_body(&ResourceBroker::to_model(&configured())).unwrap();
        let planned = crate::patch::to_body(&ResourceBroker::to_model(&ResourceBrokerState {
            auth_password: known("rotated"),
            ..configured()
        }))
        .unwrap();
        assert_eq!(
            serde_json::Value::Object(crate::patch::merge_patch(
                &prior,
                &planned,
                ResourceBroker::PATCHABLE
            )),
            json!({"auth_password": "rotated"})
        );
    }
}
