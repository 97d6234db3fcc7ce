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

//! Nested blocks of an IAM registration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tf_provider::map;
use tf_provider::schema::Attribute;
use tf_provider::value::{Value, ValueList};

use crate::convert::{
    known, nested, nested_list, nested_list_value, nested_value, string, string_map, string_value,
    strings, strings_value, value, Mirror, StringList, StringMap,
};
use crate::schema::{
    boolean, list, single, string as string_attr, string_list, string_map as map_attr, Attributes,
    Optional, Required,
};

/// String translated in the languages supported by the IAM console
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translated {
    pub default: Value<String>,
    pub en: Value<String>,
    pub de: Value<String>,
    pub es: Value<String>,
    pub fr: Value<String>,
    pub it: Value<String>,
    pub ja: Value<String>,
    pub ko: Value<String>,
    pub pt_br: Value<String>,
    pub zh_tw: Value<String>,
    pub zh_cn: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatedModel {
    pub default: Option<String>,
    pub en: Option<String>,
    pub de: Option<String>,
    pub es: Option<String>,
    pub fr: Option<String>,
    pub it: Option<String>,
    pub ja: Option<String>,
    pub ko: Option<String>,
    pub pt_br: Option<String>,
    pub zh_tw: Option<String>,
    pub zh_cn: Option<String>,
}

impl Mirror for Translated {
    type Model = TranslatedModel;

    fn to_model(&self) -> TranslatedModel {
        TranslatedModel {
            default: string(&self.default),
            en: string(&self.en),
            de: string(&self.de),
            es: string(&self.es),
            fr: string(&self.fr),
            it: string(&self.it),
            ja: string(&self.ja),
            ko: string(&self.ko),
            pt_br: string(&self.pt_br),
            zh_tw: string(&self.zh_tw),
            zh_cn: string(&self.zh_cn),
        }
    }

    fn from_model(model: &TranslatedModel) -> Self {
        Self {
            default: string_value(&model.default),
            en: string_value(&model.en),
            de: string_value(&model.de),
            es: string_value(&model.es),
            fr: string_value(&model.fr),
            it: string_value(&model.it),
            ja: string_value(&model.ja),
            ko: string_value(&model.ko),
            pt_br: string_value(&model.pt_br),
            zh_tw: string_value(&model.zh_tw),
            zh_cn: string_value(&model.zh_cn),
        }
    }
}

/// Translated string attribute
pub(crate) fn translated(description: &str) -> Attribute {
    single(Optional, description, map! {
        "default" => string_attr(Optional, "The fallback string for the description object."),
        "en" => string_attr(Optional, "English."),
        "de" => string_attr(Optional, "German."),
        "es" => string_attr(Optional, "Spanish."),
        "fr" => string_attr(Optional, "French."),
        "it" => string_attr(Optional, "Italian."),
        "ja" => string_attr(Optional, "Japanese."),
        "ko" => string_attr(Optional, "Korean."),
        "pt_br" => string_attr(Optional, "Portuguese (Brazil)."),
        "zh_tw" => string_attr(Optional, "Traditional Chinese."),
        "zh_cn" => string_attr(Optional, "Simplified Chinese."),
    })
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenOption {
    pub hidden: Value<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenOptionModel {
    pub hidden: Option<bool>,
}

impl Mirror for HiddenOption {
    type Model = HiddenOptionModel;

    fn to_model(&self) -> HiddenOptionModel {
        HiddenOptionModel {
            hidden: known(&self.hidden),
        }
    }

    fn from_model(model: &HiddenOptionModel) -> Self {
        Self {
            hidden: value(&model.hidden),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: Value<String>,
    pub value: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValueModel {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Mirror for KeyValue {
    type Model = KeyValueModel;

    fn to_model(&self) -> KeyValueModel {
        KeyValueModel {
            key: string(&self.key),
            value: string(&self.value),
        }
    }

    fn from_model(model: &KeyValueModel) -> Self {
        Self {
            key: string_value(&model.key),
            value: string_value(&model.value),
        }
    }
}

impl KeyValue {
    pub(crate) fn attributes(key: &str, value: &str) -> Attributes {
        map! {
            "key" => string_attr(Optional, key),
            "value" => string_attr(Optional, value),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: Value<String>,
    pub roles: StringList,
    pub description: Value<Translated>,
    pub display_name: Value<Translated>,
    pub options: Value<HiddenOption>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionModel {
    pub id: Option<String>,
    pub roles: Option<Vec<String>>,
    pub description: Option<TranslatedModel>,
    pub display_name: Option<TranslatedModel>,
    pub options: Option<HiddenOptionModel>,
}

impl Mirror for Action {
    type Model = ActionModel;

    fn to_model(&self) -> ActionModel {
        ActionModel {
            id: string(&self.id),
            roles: strings(&self.roles),
            description: nested(&self.description),
            display_name: nested(&self.display_name),
            options: nested(&self.options),
        }
    }

    fn from_model(model: &ActionModel) -> Self {
        Self {
            id: string_value(&model.id),
            roles: strings_value(&model.roles),
            description: nested_value(&model.description),
            display_name: nested_value(&model.display_name),
            options: nested_value(&model.options),
        }
    }
}

impl Action {
    pub(crate) fn attributes() -> Attributes {
        map! {
            "id" => string_attr(Optional, "The unique identifier for the action."),
            "roles" => string_list(Optional, "The list of roles for the action."),
            "description" => translated("The description for the object."),
            "display_name" => translated("The display name of the object."),
            "options" => single(Optional, "Extra options.", map! {
                "hidden" => boolean(Optional, "Optional opt-in if action is hidden from customers."),
            }),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousAccess {
    pub attributes: Value<AnonymousAccessAttributes>,
    pub roles: StringList,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousAccessModel {
    pub attributes: Option<AnonymousAccessAttributesModel>,
    pub roles: Option<Vec<String>>,
}

impl Mirror for AnonymousAccess {
    type Model = AnonymousAccessModel;

    fn to_model(&self) -> AnonymousAccessModel {
        AnonymousAccessModel {
            attributes: nested(&self.attributes),
            roles: strings(&self.roles),
        }
    }

    fn from_model(model: &AnonymousAccessModel) -> Self {
        Self {
            attributes: nested_value(&model.attributes),
            roles: strings_value(&model.roles),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousAccessAttributes {
    pub account_id: Value<String>,
    pub service_name: Value<String>,
    pub additional_properties: StringMap,
}

/// On the wire, the additional properties sit next to the named ones
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousAccessAttributesModel {
    pub account_id: Option<String>,
    pub service_name: Option<String>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, String>,
}

impl Mirror for AnonymousAccessAttributes {
    type Model = AnonymousAccessAttributesModel;

    fn to_model(&self) -> AnonymousAccessAttributesModel {
        AnonymousAccessAttributesModel {
            account_id: string(&self.account_id),
            service_name: string(&self.service_name),
            additional_properties: string_map(&self.additional_properties).unwrap_or_default(),
        }
    }

    fn from_model(model: &AnonymousAccessAttributesModel) -> Self {
        Self {
            account_id: string_value(&model.account_id),
            service_name: string_value(&model.service_name),
            additional_properties: Value::Value(
                model
                    .additional_properties
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::Value(v.clone())))
                    .collect(),
            ),
        }
    }
}

impl AnonymousAccess {
    pub(crate) fn attributes() -> Attributes {
        map! {
            "attributes" => single(Optional, "The attributes for anonymous accesses.", map! {
                "account_id" => string_attr(Required, "An account id."),
                "service_name" => string_attr(Required, "The name of the service."),
                "additional_properties" => map_attr(
                    Required,
                    "Additional properties the key must come from supported attributes.",
                ),
            }),
            "roles" => string_list(Optional, "The roles of supported anonymous accesses."),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportedAttribute {
    pub key: Value<String>,
    pub options: Value<AttributeOptions>,
    pub display_name: Value<Translated>,
    pub description: Value<Translated>,
    pub ui: Value<AttributeUi>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportedAttributeModel {
    pub key: Option<String>,
    pub options: Option<AttributeOptionsModel>,
    pub display_name: Option<TranslatedModel>,
    pub description: Option<TranslatedModel>,
    pub ui: Option<AttributeUiModel>,
}

impl Mirror for SupportedAttribute {
    type Model = SupportedAttributeModel;

    fn to_model(&self) -> SupportedAttributeModel {
        SupportedAttributeModel {
            key: string(&self.key),
            options: nested(&self.options),
            display_name: nested(&self.display_name),
            description: nested(&self.description),
            ui: nested(&self.ui),
        }
    }

    fn from_model(model: &SupportedAttributeModel) -> Self {
        Self {
            key: string_value(&model.key),
            options: nested_value(&model.options),
            display_name: nested_value(&model.display_name),
            description: nested_value(&model.description),
            ui: nested_value(&model.ui),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeOptions {
    pub operators: StringList,
    pub hidden: Value<bool>,
    pub supported_patterns: StringList,
    pub policy_types: StringList,
    pub is_empty_value_supported: Value<bool>,
    pub is_string_exists_false_value_supported: Value<bool>,
    pub key: Value<String>,
    pub resource_hierarchy: Value<ResourceHierarchy>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeOptionsModel {
    pub operators: Option<Vec<String>>,
    pub hidden: Option<bool>,
    pub supported_patterns: Option<Vec<String>>,
    pub policy_types: Option<Vec<String>>,
    pub is_empty_value_supported: Option<bool>,
    pub is_string_exists_false_value_supported: Option<bool>,
    pub key: Option<String>,
    pub resource_hierarchy: Option<ResourceHierarchyModel>,
}

impl Mirror for AttributeOptions {
    type Model = AttributeOptionsModel;

    fn to_model(&self) -> AttributeOptionsModel {
        AttributeOptionsModel {
            operators: strings(&self.operators),
            hidden: known(&self.hidden),
            supported_patterns: strings(&self.supported_patterns),
            policy_types: strings(&self.policy_types),
            is_empty_value_supported: known(&self.is_empty_value_supported),
            is_string_exists_false_value_supported: known(
                &self.is_string_exists_false_value_supported,
            ),
            key: string(&self.key),
            resource_hierarchy: nested(&self.resource_hierarchy),
        }
    }

    fn from_model(model: &AttributeOptionsModel) -> Self {
        Self {
            operators: strings_value(&model.operators),
            hidden: value(&model.hidden),
            supported_patterns: strings_value(&model.supported_patterns),
            policy_types: strings_value(&model.policy_types),
            is_empty_value_supported: value(&model.is_empty_value_supported),
            is_string_exists_false_value_supported: value(
                &model.is_string_exists_false_value_supported,
            ),
            key: string_value(&model.key),
            resource_hierarchy: nested_value(&model.resource_hierarchy),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceHierarchy {
    pub key: Value<KeyValue>,
    pub value: Value<HierarchyValue>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceHierarchyModel {
    pub key: Option<KeyValueModel>,
    pub value: Option<HierarchyValueModel>,
}

impl Mirror for ResourceHierarchy {
    type Model = ResourceHierarchyModel;

    fn to_model(&self) -> ResourceHierarchyModel {
        ResourceHierarchyModel {
            key: nested(&self.key),
            value: nested(&self.value),
        }
    }

    fn from_model(model: &ResourceHierarchyModel) -> Self {
        Self {
            key: nested_value(&model.key),
            value: nested_value(&model.value),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyValue {
    pub key: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyValueModel {
    pub key: Option<String>,
}

impl Mirror for HierarchyValue {
    type Model = HierarchyValueModel;

    fn to_model(&self) -> HierarchyValueModel {
        HierarchyValueModel {
            key: string(&self.key),
        }
    }

    fn from_model(model: &HierarchyValueModel) -> Self {
        Self {
            key: string_value(&model.key),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeUi {
    pub input_type: Value<String>,
    pub input_details: Value<InputDetails>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeUiModel {
    pub input_type: Option<String>,
    pub input_details: Option<InputDetailsModel>,
}

impl Mirror for AttributeUi {
    type Model = AttributeUiModel;

    fn to_model(&self) -> AttributeUiModel {
        AttributeUiModel {
            input_type: string(&self.input_type),
            input_details: nested(&self.input_details),
        }
    }

    fn from_model(model: &AttributeUiModel) -> Self {
        Self {
            input_type: string_value(&model.input_type),
            input_details: nested_value(&model.input_details),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDetails {
    pub r#type: Value<String>,
    pub values: ValueList<Value<InputValue>>,
    pub gst: Value<GstQuery>,
    pub url: Value<InputUrl>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDetailsModel {
    pub r#type: Option<String>,
    pub values: Option<Vec<InputValueModel>>,
    pub gst: Option<GstQueryModel>,
    pub url: Option<InputUrlModel>,
}

impl Mirror for InputDetails {
    type Model = InputDetailsModel;

    fn to_model(&self) -> InputDetailsModel {
        InputDetailsModel {
            r#type: string(&self.r#type),
            values: nested_list(&self.values),
            gst: nested(&self.gst),
            url: nested(&self.url),
        }
    }

    fn from_model(model: &InputDetailsModel) -> Self {
        Self {
            r#type: string_value(&model.r#type),
            values: nested_list_value(&model.values),
            gst: nested_value(&model.gst),
            url: nested_value(&model.url),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputValue {
    pub value: Value<String>,
    pub display_name: Value<Translated>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputValueModel {
    pub value: Option<String>,
    pub display_name: Option<TranslatedModel>,
}

impl Mirror for InputValue {
    type Model = InputValueModel;

    fn to_model(&self) -> InputValueModel {
        InputValueModel {
            value: string(&self.value),
            display_name: nested(&self.display_name),
        }
    }

    fn from_model(model: &InputValueModel) -> Self {
        Self {
            value: string_value(&model.value),
            display_name: nested_value(&model.display_name),
        }
    }
}

/// Global search query feeding the input options
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstQuery {
    pub query: Value<String>,
    pub value_property_name: Value<String>,
    pub label_property_name: Value<String>,
    pub input_option_label: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstQueryModel {
    pub query: Option<String>,
    pub value_property_name: Option<String>,
    pub label_property_name: Option<String>,
    pub input_option_label: Option<String>,
}

impl Mirror for GstQuery {
    type Model = GstQueryModel;

    fn to_model(&self) -> GstQueryModel {
        GstQueryModel {
            query: string(&self.query),
            value_property_name: string(&self.value_property_name),
            label_property_name: string(&self.label_property_name),
            input_option_label: string(&self.input_option_label),
        }
    }

    fn from_model(model: &GstQueryModel) -> Self {
        Self {
            query: string_value(&model.query),
            value_property_name: string_value(&model.value_property_name),
            label_property_name: string_value(&model.label_property_name),
            input_option_label: string_value(&model.input_option_label),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputUrl {
    pub url_endpoint: Value<String>,
    pub input_option_label: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputUrlModel {
    pub url_endpoint: Option<String>,
    pub input_option_label: Option<String>,
}

impl Mirror for InputUrl {
    type Model = InputUrlModel;

    fn to_model(&self) -> InputUrlModel {
        InputUrlModel {
            url_endpoint: string(&self.url_endpoint),
            input_option_label: string(&self.input_option_label),
        }
    }

    fn from_model(model: &InputUrlModel) -> Self {
        Self {
            url_endpoint: string_value(&model.url_endpoint),
            input_option_label: string_value(&model.input_option_label),
        }
    }
}

impl SupportedAttribute {
    pub(crate) fn attributes() -> Attributes {
        map! {
            "key" => string_attr(Optional, "The supported attribute key."),
            "options" => single(Optional, "The list of support attribute options.", map! {
                "operators" => string_list(Optional, "The supported attribute operator."),
                "hidden" => boolean(
                    Optional,
                    "Optional opt-in if attribute is hidden from customers (customer can still use it if they found out themselves).",
                ),
                "supported_patterns" => string_list(Optional, "The list of supported patterns."),
                "policy_types" => string_list(Optional, "The list of policy types."),
                "is_empty_value_supported" => boolean(Optional, "Indicate whether the empty value is supported."),
                "is_string_exists_false_value_supported" => boolean(
                    Optional,
                    "Indicate whether the false value is supported for stringExists operator.",
                ),
                "key" => string_attr(Optional, "The name of attribute."),
                "resource_hierarchy" => single(Optional, "Resource hierarchy options for composite services.", map! {
                    "key" => single(Optional, "Hierarchy description key.", KeyValue::attributes("Key.", "Value.")),
                    "value" => single(Optional, "Hierarchy description value.", map! {
                        "key" => string_attr(Optional, "Key."),
                    }),
                }),
            }),
            "display_name" => translated("The display name of the object."),
            "description" => translated("The description for the object."),
            "ui" => single(Optional, "The user interface.", map! {
                "input_type" => string_attr(Optional, "The type of the input."),
                "input_details" => single(Optional, "The details of the input.", map! {
                    "type" => string_attr(Optional, "They type of the input details."),
                    "values" => list(Optional, "The provided values of input details.", map! {
                        "value" => string_attr(Optional, "The values of input details."),
                        "display_name" => translated("The display name of the object."),
                    }),
                    "gst" => single(Optional, "Required if type is gst.", map! {
                        "query" => string_attr(Optional, "The query to use."),
                        "value_property_name" => string_attr(Optional, "The value of the property name."),
                        "label_property_name" => string_attr(
                            Optional,
                            "One of labelPropertyName or inputOptionLabel is required.",
                        ),
                        "input_option_label" => string_attr(Optional, "The label for option input."),
                    }),
                    "url" => single(Optional, "The URL data for user interface.", map! {
                        "url_endpoint" => string_attr(Optional, "The URL of the user interface interface."),
                        "input_option_label" => string_attr(Optional, "The label options for the user interface URL."),
                    }),
                }),
            }),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationSubject {
    pub attributes: Value<AuthorizationSubjectAttributes>,
    pub roles: StringList,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationSubjectModel {
    pub attributes: Option<AuthorizationSubjectAttributesModel>,
    pub roles: Option<Vec<String>>,
}

impl Mirror for AuthorizationSubject {
    type Model = AuthorizationSubjectModel;

    fn to_model(&self) -> AuthorizationSubjectModel {
        AuthorizationSubjectModel {
            attributes: nested(&self.attributes),
            roles: strings(&self.roles),
        }
    }

    fn from_model(model: &AuthorizationSubjectModel) -> Self {
        Self {
            attributes: nested_value(&model.attributes),
            roles: strings_value(&model.roles),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationSubjectAttributes {
    pub service_name: Value<String>,
    pub resource_type: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationSubjectAttributesModel {
    pub service_name: Option<String>,
    pub resource_type: Option<String>,
}

impl Mirror for AuthorizationSubjectAttributes {
    type Model = AuthorizationSubjectAttributesModel;

    fn to_model(&self) -> AuthorizationSubjectAttributesModel {
        AuthorizationSubjectAttributesModel {
            service_name: string(&self.service_name),
            resource_type: string(&self.resource_type),
        }
    }

    fn from_model(model: &AuthorizationSubjectAttributesModel) -> Self {
        Self {
            service_name: string_value(&model.service_name),
            resource_type: string_value(&model.resource_type),
        }
    }
}

impl AuthorizationSubject {
    pub(crate) fn attributes() -> Attributes {
        map! {
            "attributes" => single(
                Optional,
                "The list of supported authorization subject properties.",
                map! {
                    "service_name" => string_attr(Optional, "The name of the service."),
                    "resource_type" => string_attr(Optional, "The type of the service."),
                },
            ),
            "roles" => string_list(Optional, "The list of roles for authorization."),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportedRole {
    pub id: Value<String>,
    pub description: Value<Translated>,
    pub display_name: Value<Translated>,
    pub options: Value<RoleOptions>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportedRoleModel {
    pub id: Option<String>,
    pub description: Option<TranslatedModel>,
    pub display_name: Option<TranslatedModel>,
    pub options: Option<RoleOptionsModel>,
}

impl Mirror for SupportedRole {
    type Model = SupportedRoleModel;

    fn to_model(&self) -> SupportedRoleModel {
        SupportedRoleModel {
            id: string(&self.id),
            description: nested(&self.description),
            display_name: nested(&self.display_name),
            options: nested(&self.options),
        }
    }

    fn from_model(model: &SupportedRoleModel) -> Self {
        Self {
            id: string_value(&model.id),
            description: nested_value(&model.description),
            display_name: nested_value(&model.display_name),
            options: nested_value(&model.options),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleOptions {
    pub access_policy: Value<bool>,
    pub policy_type: StringList,
    pub account_type: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleOptionsModel {
    pub access_policy: Option<bool>,
    pub policy_type: Option<Vec<String>>,
    pub account_type: Option<String>,
}

impl Mirror for RoleOptions {
    type Model = RoleOptionsModel;

    fn to_model(&self) -> RoleOptionsModel {
        RoleOptionsModel {
            access_policy: known(&self.access_policy),
            policy_type: strings(&self.policy_type),
            account_type: string(&self.account_type),
        }
    }

    fn from_model(model: &RoleOptionsModel) -> Self {
        Self {
            access_policy: value(&model.access_policy),
            policy_type: strings_value(&model.policy_type),
            account_type: string_value(&model.account_type),
        }
    }
}

impl SupportedRole {
    pub(crate) fn attributes() -> Attributes {
        map! {
            "id" => string_attr(Optional, "The value belonging to the key."),
            "description" => translated("The description for the object."),
            "display_name" => translated("The display name of the object."),
            "options" => single(Optional, "The supported role options.", map! {
                "access_policy" => boolean(Required, "Optional opt-in to require access control on the role."),
                "policy_type" => string_list(
                    Optional,
                    "Optional opt-in to require checking policy type when applying the role.",
                ),
                "account_type" => string_attr(
                    Optional,
                    "Optional opt-in to require checking account type when applying the role.",
                ),
            }),
        }
    }
}

/// Endpoint types the service accepts in context-based restrictions
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportedNetwork {
    pub environment_attributes: ValueList<Value<EnvironmentAttribute>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportedNetworkModel {
    pub environment_attributes: Option<Vec<EnvironmentAttributeModel>>,
}

impl Mirror for SupportedNetwork {
    type Model = SupportedNetworkModel;

    fn to_model(&self) -> SupportedNetworkModel {
        SupportedNetworkModel {
            environment_attributes: nested_list(&self.environment_attributes),
        }
    }

    fn from_model(model: &SupportedNetworkModel) -> Self {
        Self {
            environment_attributes: nested_list_value(&model.environment_attributes),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentAttribute {
    pub key: Value<String>,
    pub values: StringList,
    pub options: Value<HiddenOption>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentAttributeModel {
    pub key: Option<String>,
    pub values: Option<Vec<String>>,
    pub options: Option<HiddenOptionModel>,
}

impl Mirror for EnvironmentAttribute {
    type Model = EnvironmentAttributeModel;

    fn to_model(&self) -> EnvironmentAttributeModel {
        EnvironmentAttributeModel {
            key: string(&self.key),
            values: strings(&self.values),
            options: nested(&self.options),
        }
    }

    fn from_model(model: &EnvironmentAttributeModel) -> Self {
        Self {
            key: string_value(&model.key),
            values: strings_value(&model.values),
            options: nested_value(&model.options),
        }
    }
}

impl SupportedNetwork {
    pub(crate) fn attributes() -> Attributes {
        map! {
            "environment_attributes" => list(Optional, "The environment attribute for support.", map! {
                "key" => string_attr(Optional, "The name of the key."),
                "values" => string_list(Optional, "The list of values that belong to the key."),
                "options" => single(Optional, "The list of options for supported networks.", map! {
                    "hidden" => boolean(Optional, "Whether the attribute is hidden or not."),
                }),
            }),
        }
    }
}
