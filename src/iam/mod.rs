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

//! IAM registration of a product: the actions, roles and attributes its
//! access policies can refer to.

use serde::{Deserialize, Serialize};
use tf_provider::value::{Value, ValueList};
use tf_provider::schema::{Block, Description, Schema};
use tf_provider::{map, AttributePath, Diagnostics};

use crate::convert::{
    known, nested, nested_list, nested_list_value, nested_value, refreshed_strings, string,
    string_value, strings, value, StringList,
};
use crate::onboarding::{replace_if_changed, Onboarding};
use crate::schema::{
    boolean, list, single, string as string_attr, string_list, Computed, Optional, Required,
};
use crate::utils::{join_id, path_part, split_id, IdError, WithSchema, WithValidate};
use crate::validate::{self, check, Rule};

mod shapes;

use shapes::{
    translated, Action, ActionModel, AnonymousAccess, AnonymousAccessModel, AuthorizationSubject,
    AuthorizationSubjectModel, KeyValue, KeyValueModel, SupportedAttribute,
    SupportedAttributeModel, SupportedNetwork, SupportedNetworkModel, SupportedRole,
    SupportedRoleModel, Translated, TranslatedModel,
};

const SERVICE_TYPES: &[&str] = &["platform_service", "service"];
const ID_PARTS: [&str; 2] = ["product_id", "name"];

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct IamRegistrationState {
    pub id: Value<String>,
    pub product_id: Value<String>,
    pub env: Value<String>,
    pub name: Value<String>,
    pub enabled: Value<bool>,
    pub service_type: Value<String>,
    pub actions: ValueList<Value<Action>>,
    pub additional_policy_scopes: StringList,
    pub display_name: Value<Translated>,
    pub parent_ids: StringList,
    pub resource_hierarchy_attribute: Value<KeyValue>,
    pub supported_anonymous_accesses: ValueList<Value<AnonymousAccess>>,
    pub supported_attributes: ValueList<Value<SupportedAttribute>>,
    pub supported_authorization_subjects: ValueList<Value<AuthorizationSubject>>,
    pub supported_roles: ValueList<Value<SupportedRole>>,
    pub supported_network: Value<SupportedNetwork>,
}

/// IAM service registration, as sent and returned by the service
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct IamRegistrationModel {
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub service_type: Option<String>,
    pub actions: Option<Vec<ActionModel>>,
    pub additional_policy_scopes: Option<Vec<String>>,
    pub display_name: Option<TranslatedModel>,
    pub parent_ids: Option<Vec<String>>,
    pub resource_hierarchy_attribute: Option<KeyValueModel>,
    pub supported_anonymous_accesses: Option<Vec<AnonymousAccessModel>>,
    pub supported_attributes: Option<Vec<SupportedAttributeModel>>,
    pub supported_authorization_subjects: Option<Vec<AuthorizationSubjectModel>>,
    pub supported_roles: Option<Vec<SupportedRoleModel>>,
    pub supported_network: Option<SupportedNetworkModel>,
}

impl WithSchema for IamRegistrationState {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                description: Description::plain("IAM registration of a Partner Center Sell product"),
                attributes: map! {
                    "id" => string_attr(Computed, "The unique identifier of the resource."),
                    "product_id" => string_attr(Required, "The unique ID of the product."),
                    "env" => string_attr(Optional, "The environment to fetch this object from."),
                    "name" => string_attr(
                        Required,
                        "The IAM registration name, which must be the programmatic name of the product.",
                    ),
                    "enabled" => boolean(Optional, "Whether the service is enabled or disabled for IAM."),
                    "service_type" => string_attr(Optional, "The type of the service."),
                    "actions" => list(Optional, "The product access management action.", Action::attributes()),
                    "additional_policy_scopes" => string_list(Optional, "List of additional policy scopes."),
                    "display_name" => translated("The display name of the object."),
                    "parent_ids" => string_list(
                        Optional,
                        "The list of parent IDs for product access management.",
                    ),
                    "resource_hierarchy_attribute" => single(
                        Optional,
                        "The resource hierarchy key-value pair for composite services.",
                        KeyValue::attributes("The resource hierarchy key.", "The resource hierarchy value."),
                    ),
                    "supported_anonymous_accesses" => list(
                        Optional,
                        "The list of supported anonymous accesses.",
                        AnonymousAccess::attributes(),
                    ),
                    "supported_attributes" => list(
                        Optional,
                        "The list of supported attributes.",
                        SupportedAttribute::attributes(),
                    ),
                    "supported_authorization_subjects" => list(
                        Optional,
                        "The list of supported authorization subjects.",
                        AuthorizationSubject::attributes(),
                    ),
                    "supported_roles" => list(
                        Optional,
                        "The list of roles that you can use to assign access.",
                        SupportedRole::attributes(),
                    ),
                    "supported_network" => single(
                        Optional,
                        "The registration of set of endpoint types that are supported by your service in the `networkType` environment attribute. This constrains the context-based restriction rules specific to the service such that they describe access restrictions on only this set of endpoints.",
                        SupportedNetwork::attributes(),
                    ),
                },
                ..Default::default()
            },
        }
    }
}

impl WithValidate for IamRegistrationState {
    fn validate(&self, diags: &mut Diagnostics) {
        check(diags, AttributePath::new("product_id"), &self.product_id, validate::product_id());
        check(diags, AttributePath::new("env"), &self.env, validate::env());
        check(diags, AttributePath::new("name"), &self.name, validate::name());
        check(
            diags,
            AttributePath::new("service_type"),
            &self.service_type,
            Rule::OneOf(SERVICE_TYPES),
        );
    }
}

#[derive(Debug, Default, Clone)]
pub struct IamRegistration;

impl Onboarding for IamRegistration {
    const NAME: &'static str = "partnercentersell_iam_registration";
    const ENTITY: &'static str = "IamRegistration";
    const PATCHABLE: &'static [&'static str] = &[
        "enabled",
        "service_type",
        "actions",
        "additional_policy_scopes",
        "display_name",
        "parent_ids",
        "resource_hierarchy_attribute",
        "supported_anonymous_accesses",
        "supported_attributes",
        "supported_authorization_subjects",
        "supported_roles",
        "supported_network",
    ];

    type State = IamRegistrationState;
    type Model = IamRegistrationModel;

    fn id(state: &IamRegistrationState) -> &Value<String> {
        &state.id
    }

    fn id_mut(state: &mut IamRegistrationState) -> &mut Value<String> {
        &mut state.id
    }

    fn env(state: &IamRegistrationState) -> &Value<String> {
        &state.env
    }

    fn collection(state: &IamRegistrationState) -> Result<String, IdError> {
        let product_id = path_part(&state.product_id, "product_id")?;
        Ok(format!("/products/{product_id}/iam_registration"))
    }

    fn location(id: &str) -> Result<String, IdError> {
        let [product_id, name] = split_id(id, ID_PARTS)?;
        Ok(format!("/products/{product_id}/iam_registration/{name}"))
    }

    fn resource_id(state: &IamRegistrationState, created: &IamRegistrationModel) -> Option<String> {
        let product_id = path_part(&state.product_id, "product_id").ok()?;
        let name = match created.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => path_part(&state.name, "name").ok()?,
        };
        Some(join_id([product_id, name]))
    }

    fn to_model(state: &IamRegistrationState) -> IamRegistrationModel {
        IamRegistrationModel {
            name: string(&state.name),
            enabled: known(&state.enabled),
            service_type: string(&state.service_type),
            actions: nested_list(&state.actions),
            additional_policy_scopes: strings(&state.additional_policy_scopes),
            display_name: nested(&state.display_name),
            parent_ids: strings(&state.parent_ids),
            resource_hierarchy_attribute: nested(&state.resource_hierarchy_attribute),
            supported_anonymous_accesses: nested_list(&state.supported_anonymous_accesses),
            supported_attributes: nested_list(&state.supported_attributes),
            supported_authorization_subjects: nested_list(&state.supported_authorization_subjects),
            supported_roles: nested_list(&state.supported_roles),
            supported_network: nested(&state.supported_network),
        }
    }

    fn refresh(state: &mut IamRegistrationState, model: &IamRegistrationModel) {
        if let Value::Value(id) = &state.id {
            if let Ok([product_id, name]) = split_id(id, ID_PARTS) {
                state.product_id = Value::Value(product_id.to_owned());
                state.name = Value::Value(name.to_owned());
            }
        }
        if model.name.as_deref().is_some_and(|name| !name.is_empty()) {
            state.name = string_value(&model.name);
        }
        state.enabled = value(&model.enabled);
        state.service_type = string_value(&model.service_type);
        state.actions = nested_list_value(&model.actions);
        state.additional_policy_scopes =
            refreshed_strings(&state.additional_policy_scopes, &model.additional_policy_scopes);
        state.display_name = nested_value(&model.display_name);
        state.parent_ids = refreshed_strings(&state.parent_ids, &model.parent_ids);
        state.resource_hierarchy_attribute = nested_value(&model.resource_hierarchy_attribute);
        state.supported_anonymous_accesses = nested_list_value(&model.supported_anonymous_accesses);
        state.supported_attributes = nested_list_value(&model.supported_attributes);
        state.supported_authorization_subjects =
            nested_list_value(&model.supported_authorization_subjects);
        state.supported_roles = nested_list_value(&model.supported_roles);
        state.supported_network = nested_value(&model.supported_network);
    }

    fn plan_computed(_state: &mut IamRegistrationState) {}

    fn apply(_state: &mut IamRegistrationState, _model: Option<&IamRegistrationModel>) {}

    fn replace_paths(prior: &IamRegistrationState, planned: &IamRegistrationState) -> Vec<AttributePath> {
        let mut paths = Vec::new();
        replace_if_changed(&mut paths, "product_id", &prior.product_id, &planned.product_id);
        replace_if_changed(&mut paths, "name", &prior.name, &planned.name);
        paths
    }

    fn import(id: &str) -> Result<IamRegistrationState, IdError> {
        let [product_id, name] = split_id(id, ID_PARTS)?;
        Ok(IamRegistrationState {
            id: Value::Value(id.to_owned()),
            product_id: Value::Value(product_id.to_owned()),
            name: Value::Value(name.to_owned()),
            ..Default::default()
        })
    }
}
