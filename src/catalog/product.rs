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

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tf_provider::value::{Value, ValueList};
use tf_provider::schema::{Block, Description, Schema};
use tf_provider::{map, AttributePath, Diagnostics};

use crate::convert::{
    known, nested, nested_list, nested_list_value, nested_value, refreshed_strings, settle,
    string, string_map, string_map_value, string_value, strings, strings_value, unsettle, value,
    Mirror, StringList, StringMap,
};
use crate::onboarding::{fill, replace_if_changed, Onboarding};
use crate::schema::{
    boolean, list, number, single, string as string_attr, string_list, string_map as map_attr,
    Attributes, Computed, Optional, Required,
};
use crate::utils::{join_id, path_part, split_id, IdError, WithSchema, WithValidate};
use crate::validate::{self, check};

use super::shapes::{
    MetadataUi, MetadataUiModel, ObjectProvider, ObjectProviderModel, OverviewUi,
    OverviewUiModel, ServiceMetadata, ServiceMetadataModel,
};
use super::{check_entry, entry_attributes};

const KINDS: &[&str] = &["composite", "platform_service", "service"];
const ID_PARTS: [&str; 2] = ["product_id", "catalog_product_id"];

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProductState {
    pub id: Value<String>,
    pub product_id: Value<String>,
    pub env: Value<String>,
    pub object_id: Value<String>,
    pub name: Value<String>,
    pub active: Value<bool>,
    pub disabled: Value<bool>,
    pub kind: Value<String>,
    pub overview_ui: Value<OverviewUi>,
    pub tags: StringList,
    pub images: Value<Images>,
    pub object_provider: Value<ObjectProvider>,
    pub metadata: Value<ProductMetadata>,
    pub url: Value<String>,
    pub catalog_product_id: Value<String>,
}

/// Global catalog product, as sent and returned by the service
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProductModel {
    pub id: Option<String>,
    pub object_id: Option<String>,
    pub name: Option<String>,
    pub active: Option<bool>,
    pub disabled: Option<bool>,
    pub kind: Option<String>,
    pub overview_ui: Option<OverviewUiModel>,
    pub tags: Option<Vec<String>>,
    pub images: Option<ImagesModel>,
    pub object_provider: Option<ObjectProviderModel>,
    pub metadata: Option<ProductMetadataModel>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Images {
    pub image: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagesModel {
    pub image: Option<String>,
}

impl Mirror for Images {
    type Model = ImagesModel;

    fn to_model(&self) -> ImagesModel {
        ImagesModel {
            image: string(&self.image),
        }
    }

    fn from_model(model: &ImagesModel) -> Self {
        Self {
            image: string_value(&model.image),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMetadata {
    pub rc_compatible: Value<bool>,
    pub ui: Value<MetadataUi>,
    pub service: Value<ServiceMetadata>,
    pub other: Value<ProductOther>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMetadataModel {
    pub rc_compatible: Option<bool>,
    pub ui: Option<MetadataUiModel>,
    pub service: Option<ServiceMetadataModel>,
    pub other: Option<ProductOtherModel>,
}

impl Mirror for ProductMetadata {
    type Model = ProductMetadataModel;

    fn to_model(&self) -> ProductMetadataModel {
        ProductMetadataModel {
            rc_compatible: known(&self.rc_compatible),
            ui: nested(&self.ui),
            service: nested(&self.service),
            other: nested(&self.other),
        }
    }

    fn from_model(model: &ProductMetadataModel) -> Self {
        Self {
            rc_compatible: value(&model.rc_compatible),
            ui: nested_value(&model.ui),
            service: nested_value(&model.service),
            other: nested_value(&model.other),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOther {
    pub pc: Value<PcMetadata>,
    pub composite: Value<Composite>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOtherModel {
    #[serde(rename = "PC", alias = "pc")]
    pub pc: Option<PcMetadataModel>,
    pub composite: Option<CompositeModel>,
}

impl Mirror for ProductOther {
    type Model = ProductOtherModel;

    fn to_model(&self) -> ProductOtherModel {
        ProductOtherModel {
            pc: nested(&self.pc),
            composite: nested(&self.composite),
        }
    }

    fn from_model(model: &ProductOtherModel) -> Self {
        Self {
            pc: nested_value(&model.pc),
            composite: nested_value(&model.composite),
        }
    }
}

/// Metadata owned by Partner Center Sell
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcMetadata {
    pub support: Value<Support>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcMetadataModel {
    pub support: Option<SupportModel>,
}

impl Mirror for PcMetadata {
    type Model = PcMetadataModel;

    fn to_model(&self) -> PcMetadataModel {
        PcMetadataModel {
            support: nested(&self.support),
        }
    }

    fn from_model(model: &PcMetadataModel) -> Self {
        Self {
            support: nested_value(&model.support),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Support {
    pub url: Value<String>,
    pub status_url: Value<String>,
    pub locations: StringList,
    pub languages: StringList,
    pub process: Value<String>,
    pub process_i18n: StringMap,
    pub support_type: Value<String>,
    pub support_escalation: Value<SupportEscalation>,
    pub support_details: ValueList<Value<SupportDetail>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportModel {
    pub url: Option<String>,
    pub status_url: Option<String>,
    pub locations: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub process: Option<String>,
    pub process_i18n: Option<BTreeMap<String, String>>,
    pub support_type: Option<String>,
    pub support_escalation: Option<SupportEscalationModel>,
    pub support_details: Option<Vec<SupportDetailModel>>,
}

impl Mirror for Support {
    type Model = SupportModel;

    fn to_model(&self) -> SupportModel {
        SupportModel {
            url: string(&self.url),
            status_url: string(&self.status_url),
            locations: strings(&self.locations),
            languages: strings(&self.languages),
            process: string(&self.process),
            process_i18n: string_map(&self.process_i18n),
            support_type: string(&self.support_type),
            support_escalation: nested(&self.support_escalation),
            support_details: nested_list(&self.support_details),
        }
    }

    fn from_model(model: &SupportModel) -> Self {
        Self {
            url: string_value(&model.url),
            status_url: string_value(&model.status_url),
            locations: strings_value(&model.locations),
            languages: strings_value(&model.languages),
            process: string_value(&model.process),
            process_i18n: string_map_value(&model.process_i18n),
            support_type: string_value(&model.support_type),
            support_escalation: nested_value(&model.support_escalation),
            support_details: nested_list_value(&model.support_details),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportEscalation {
    pub contact: Value<String>,
    pub escalation_wait_time: Value<TimeInterval>,
    pub response_wait_time: Value<TimeInterval>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportEscalationModel {
    pub contact: Option<String>,
    pub escalation_wait_time: Option<TimeIntervalModel>,
    pub response_wait_time: Option<TimeIntervalModel>,
}

impl Mirror for SupportEscalation {
    type Model = SupportEscalationModel;

    fn to_model(&self) -> SupportEscalationModel {
        SupportEscalationModel {
            contact: string(&self.contact),
            escalation_wait_time: nested(&self.escalation_wait_time),
            response_wait_time: nested(&self.response_wait_time),
        }
    }

    fn from_model(model: &SupportEscalationModel) -> Self {
        Self {
            contact: string_value(&model.contact),
            escalation_wait_time: nested_value(&model.escalation_wait_time),
            response_wait_time: nested_value(&model.response_wait_time),
        }
    }
}

/// Duration expressed as a number of units
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub value: Value<f64>,
    pub r#type: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeIntervalModel {
    pub value: Option<f64>,
    pub r#type: Option<String>,
}

impl Mirror for TimeInterval {
    type Model = TimeIntervalModel;

    fn to_model(&self) -> TimeIntervalModel {
        TimeIntervalModel {
            value: known(&self.value),
            r#type: string(&self.r#type),
        }
    }

    fn from_model(model: &TimeIntervalModel) -> Self {
        Self {
            value: value(&model.value),
            r#type: string_value(&model.r#type),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportDetail {
    pub r#type: Value<String>,
    pub contact: Value<String>,
    pub response_wait_time: Value<TimeInterval>,
    pub availability: Value<Availability>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportDetailModel {
    pub r#type: Option<String>,
    pub contact: Option<String>,
    pub response_wait_time: Option<TimeIntervalModel>,
    pub availability: Option<AvailabilityModel>,
}

impl Mirror for SupportDetail {
    type Model = SupportDetailModel;

    fn to_model(&self) -> SupportDetailModel {
        SupportDetailModel {
            r#type: string(&self.r#type),
            contact: string(&self.contact),
            response_wait_time: nested(&self.response_wait_time),
            availability: nested(&self.availability),
        }
    }

    fn from_model(model: &SupportDetailModel) -> Self {
        Self {
            r#type: string_value(&model.r#type),
            contact: string_value(&model.contact),
            response_wait_time: nested_value(&model.response_wait_time),
            availability: nested_value(&model.availability),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub times: ValueList<Value<AvailabilityTime>>,
    pub timezone: Value<String>,
    pub always_available: Value<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityModel {
    pub times: Option<Vec<AvailabilityTimeModel>>,
    pub timezone: Option<String>,
    pub always_available: Option<bool>,
}

impl Mirror for Availability {
    type Model = AvailabilityModel;

    fn to_model(&self) -> AvailabilityModel {
        AvailabilityModel {
            times: nested_list(&self.times),
            timezone: string(&self.timezone),
            always_available: known(&self.always_available),
        }
    }

    fn from_model(model: &AvailabilityModel) -> Self {
        Self {
            times: nested_list_value(&model.times),
            timezone: string_value(&model.timezone),
            always_available: value(&model.always_available),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityTime {
    pub day: Value<f64>,
    pub start_time: Value<String>,
    pub end_time: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityTimeModel {
    pub day: Option<f64>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl Mirror for AvailabilityTime {
    type Model = AvailabilityTimeModel;

    fn to_model(&self) -> AvailabilityTimeModel {
        AvailabilityTimeModel {
            day: known(&self.day),
            start_time: string(&self.start_time),
            end_time: string(&self.end_time),
        }
    }

    fn from_model(model: &AvailabilityTimeModel) -> Self {
        Self {
            day: value(&model.day),
            start_time: string_value(&model.start_time),
            end_time: string_value(&model.end_time),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composite {
    pub composite_kind: Value<String>,
    pub composite_tag: Value<String>,
    pub children: ValueList<Value<CompositeChild>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeModel {
    pub composite_kind: Option<String>,
    pub composite_tag: Option<String>,
    pub children: Option<Vec<CompositeChildModel>>,
}

impl Mirror for Composite {
    type Model = CompositeModel;

    fn to_model(&self) -> CompositeModel {
        CompositeModel {
            composite_kind: string(&self.composite_kind),
            composite_tag: string(&self.composite_tag),
            children: nested_list(&self.children),
        }
    }

    fn from_model(model: &CompositeModel) -> Self {
        Self {
            composite_kind: string_value(&model.composite_kind),
            composite_tag: string_value(&model.composite_tag),
            children: nested_list_value(&model.children),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeChild {
    pub kind: Value<String>,
    pub name: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeChildModel {
    pub kind: Option<String>,
    pub name: Option<String>,
}

impl Mirror for CompositeChild {
    type Model = CompositeChildModel;

    fn to_model(&self) -> CompositeChildModel {
        CompositeChildModel {
            kind: string(&self.kind),
            name: string(&self.name),
        }
    }

    fn from_model(model: &CompositeChildModel) -> Self {
        Self {
            kind: string_value(&model.kind),
            name: string_value(&model.name),
        }
    }
}

fn time_interval(description: &str) -> tf_provider::schema::Attribute {
    single(Optional, description, map! {
        "value" => number(Optional, "The number of time units."),
        "type" => string_attr(Optional, "The unit of the time."),
    })
}

fn support_attributes() -> Attributes {
    map! {
        "url" => string_attr(Optional, "The support site URL where the support for your service is available."),
        "status_url" => string_attr(Optional, "The URL where the status of your service is available."),
        "locations" => string_list(
            Optional,
            "The countries in which your support is available. Provide a list of country codes.",
        ),
        "languages" => string_list(Optional, "The languages in which support is available."),
        "process" => string_attr(Optional, "The description of your support process."),
        "process_i18n" => map_attr(Optional, "The description of your support process in translation."),
        "support_type" => string_attr(Optional, "The type of support provided."),
        "support_escalation" => single(Optional, "The details of the support escalation process.", map! {
            "contact" => string_attr(Optional, "The support contact information of the escalation team."),
            "escalation_wait_time" => time_interval("The time interval of providing support in units and values."),
            "response_wait_time" => time_interval("The time interval of providing support in units and values."),
        }),
        "support_details" => list(Optional, "The support options for the service.", map! {
            "type" => string_attr(Optional, "The type of support for this support channel."),
            "contact" => string_attr(Optional, "The contact information for this support channel."),
            "response_wait_time" => time_interval("The time interval of providing support in units and values."),
            "availability" => single(
                Optional,
                "The time period during which support is available for the service.",
                map! {
                    "times" => list(Optional, "The support hours available for the service.", map! {
                        "day" => number(
                            Optional,
                            "The number of days in a week when support is available for the service.",
                        ),
                        "start_time" => string_attr(Optional, "The time in the day when support starts for the service."),
                        "end_time" => string_attr(Optional, "The time in the day when support ends for the service."),
                    }),
                    "timezone" => string_attr(
                        Optional,
                        "The timezones in which support is available. Only relevant if `always_available` is set to false.",
                    ),
                    "always_available" => boolean(Optional, "Whether the support for the service is always available."),
                },
            ),
        }),
    }
}

impl WithSchema for CatalogProductState {
    fn schema() -> Schema {
        let mut attributes = entry_attributes("product");
        let extra: Attributes = map! {
            "product_id" => string_attr(Required, "The unique ID of the product."),
            "catalog_product_id" => string_attr(Computed, "The ID of a global catalog object."),
            "images" => single(
                Optional,
                "Images from the global catalog entry that help illustrate the service.",
                map! {
                    "image" => string_attr(Optional, "The URL for your product logo."),
                },
            ),
            "metadata" => single(Optional, "The global catalog service metadata object.", map! {
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
                "other" => single(
                    Optional,
                    "The additional metadata of the service in global catalog.",
                    map! {
                        "pc" => single(
                            Optional,
                            "The metadata of the service owned and managed by Partner Center - Sell.",
                            map! {
                                "support" => single(
                                    Optional,
                                    "The support metadata of the service.",
                                    support_attributes(),
                                ),
                            },
                        ),
                        "composite" => single(
                            Optional,
                            "Optional metadata of the service defining it as a composite.",
                            map! {
                                "composite_kind" => string_attr(Optional, "The type of the composite service."),
                                "composite_tag" => string_attr(
                                    Optional,
                                    "The tag used for the composite parent and its children.",
                                ),
                                "children" => list(Optional, "The children of the composite service.", map! {
                                    "kind" => string_attr(Optional, "The type of the composite child."),
                                    "name" => string_attr(Optional, "The name of the composite child."),
                                }),
                            },
                        ),
                    },
                ),
            }),
        };
        attributes.extend(extra);

        Schema {
            version: 1,
            block: Block {
                description: Description::plain("Global catalog product of a Partner Center Sell product"),
                attributes,
                ..Default::default()
            },
        }
    }
}

impl WithValidate for CatalogProductState {
    fn validate(&self, diags: &mut Diagnostics) {
        check(diags, AttributePath::new("product_id"), &self.product_id, validate::product_id());
        check_entry(
            diags,
            &self.env,
            (&self.name, validate::lowercase_name()),
            (&self.kind, KINDS),
        );
    }
}

#[derive(Debug, Default, Clone)]
pub struct CatalogProduct;

impl Onboarding for CatalogProduct {
    const NAME: &'static str = "partnercentersell_catalog_product";
    const ENTITY: &'static str = "CatalogProduct";
    const PATCHABLE: &'static [&'static str] = &[
        "active",
        "disabled",
        "overview_ui",
        "tags",
        "images",
        "object_provider",
        "metadata",
    ];

    type State = CatalogProductState;
    type Model = CatalogProductModel;

    fn id(state: &CatalogProductState) -> &Value<String> {
        &state.id
    }

    fn id_mut(state: &mut CatalogProductState) -> &mut Value<String> {
        &mut state.id
    }

    fn env(state: &CatalogProductState) -> &Value<String> {
        &state.env
    }

    fn collection(state: &CatalogProductState) -> Result<String, IdError> {
        let product_id = path_part(&state.product_id, "product_id")?;
        Ok(format!("/products/{product_id}/catalog_products"))
    }

    fn location(id: &str) -> Result<String, IdError> {
        let [product_id, catalog_product_id] = split_id(id, ID_PARTS)?;
        Ok(format!("/products/{product_id}/catalog_products/{catalog_product_id}"))
    }

    fn resource_id(state: &CatalogProductState, created: &CatalogProductModel) -> Option<String> {
        let product_id = path_part(&state.product_id, "product_id").ok()?;
        Some(join_id([product_id, created.id.as_deref()?]))
    }

    fn to_model(state: &CatalogProductState) -> CatalogProductModel {
        CatalogProductModel {
            id: None,
            object_id: string(&state.object_id),
            name: string(&state.name),
            active: known(&state.active),
            disabled: known(&state.disabled),
            kind: string(&state.kind),
            overview_ui: nested(&state.overview_ui),
            tags: strings(&state.tags),
            images: nested(&state.images),
            object_provider: nested(&state.object_provider),
            metadata: nested(&state.metadata),
            url: None,
        }
    }

    fn refresh(state: &mut CatalogProductState, model: &CatalogProductModel) {
        if let Value::Value(id) = &state.id {
            if let Ok([product_id, _]) = split_id(id, ID_PARTS) {
                state.product_id = Value::Value(product_id.to_owned());
            }
        }
        state.object_id = string_value(&model.object_id);
        state.name = string_value(&model.name);
        state.active = value(&model.active);
        state.disabled = value(&model.disabled);
        state.kind = string_value(&model.kind);
        state.overview_ui = nested_value(&model.overview_ui);
        state.tags = refreshed_strings(&state.tags, &model.tags);
        state.images = nested_value(&model.images);
        state.object_provider = nested_value(&model.object_provider);
        state.metadata = nested_value(&model.metadata);
        state.url = string_value(&model.url);
        state.catalog_product_id = string_value(&model.id);
    }

    fn plan_computed(state: &mut CatalogProductState) {
        unsettle(&mut state.object_id);
        state.url = Value::Unknown;
        state.catalog_product_id = Value::Unknown;
    }

    fn apply(state: &mut CatalogProductState, model: Option<&CatalogProductModel>) {
        if let Some(model) = model {
            fill(&mut state.object_id, string_value(&model.object_id));
            fill(&mut state.url, string_value(&model.url));
            fill(&mut state.catalog_product_id, string_value(&model.id));
        }
        settle(&mut state.object_id);
        settle(&mut state.url);
        settle(&mut state.catalog_product_id);
    }

    fn replace_paths(prior: &CatalogProductState, planned: &CatalogProductState) -> Vec<AttributePath> {
        let mut paths = Vec::new();
        replace_if_changed(&mut paths, "product_id", &prior.product_id, &planned.product_id);
        replace_if_changed(&mut paths, "object_id", &prior.object_id, &planned.object_id);
        replace_if_changed(&mut paths, "name", &prior.name, &planned.name);
        replace_if_changed(&mut paths, "kind", &prior.kind, &planned.kind);
        paths
    }

    fn import(id: &str) -> Result<CatalogProductState, IdError> {
        let [product_id, catalog_product_id] = split_id(id, ID_PARTS)?;
        Ok(CatalogProductState {
            id: Value::Value(id.to_owned()),
            product_id: Value::Value(product_id.to_owned()),
            catalog_product_id: Value::Value(catalog_product_id.to_owned()),
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

    fn configured() -> CatalogProductState {
        CatalogProductState {
            product_id: known(PRODUCT_ID),
            env: known("current"),
            name: known("my-product"),
            active: Value::Value(true),
            disabled: Value::Value(false),
            kind: known("service"),
            tags: Value::Value(vec![known("tag")]),
            object_provider: Value::Value(ObjectProvider {
                name: known("IBM"),
                email: known("name.name@ibm.com"),
            }),
            metadata: Value::Value(ProductMetadata {
                other: Value::Value(ProductOther {
                    pc: Value::Value(PcMetadata {
                        support: Value::Value(Support {
                            support_escalation: Value::Value(SupportEscalation {
                                contact: known("escalation@ibm.com"),
                                escalation_wait_time: Value::Value(TimeInterval {
                                    value: Value::Value(1.0),
                                    r#type: known("hour"),
                                }),
                                ..Default::default()
                            }),
                            ..Default::default()
                        }),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    async fn resource_for(server: &MockServer) -> SellResource<CatalogProduct> {
        let handle = ClientHandle::default();
        handle.set(Arc::new(client_for(server, None))).unwrap();
        SellResource::new(handle)
    }

    #[test]
    fn create_body_follows_the_wire_format() {
        assert_eq!(
            serde_json::Value::Object(
                crate::patch::to_body(&CatalogProduct::to_model(&configured())).unwrap()
            ),
            json!({
                "name": "my-product",
                "active": true,
                "disabled": false,
                "kind": "service",
                "tags": ["tag"],
                "object_provider": {"name": "IBM", "email": "name.name@ibm.com"},
                "metadata": {"other": {"PC": {"support": {"support_escalation": {
                    "contact": "escalation@ibm.com",
                    "escalation_wait_time": {"value": 1.0, "type": "hour"},
                }}}}},
            })
        );
    }

    #[test]
    fn invalid_attributes_are_reported() {
        let mut diags = Diagnostics::default();
        CatalogProductState {
            product_id: known("product"),
            name: known("My Product"),
            kind: known("plan"),
            ..configured()
        }
        .validate(&mut diags);
        assert_eq!(diags.errors.len(), 3);

        let mut diags = Diagnostics::default();
        configured().validate(&mut diags);
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn non_patchable_changes_force_replacement() {
        let prior = configured();
        let planned = CatalogProductState {
            kind: known("composite"),
            active: Value::Value(false),
            ..configured()
        };
        assert_eq!(CatalogProduct::replace_paths(&prior, &planned).len(), 1);
    }

    #[tokio::test]
    async fn create_then_read() {
        let server = MockServer::start().await;
        let collection = format!("/products/{PRODUCT_ID}/catalog_products");
        Mock::given(method("POST"))
            .and(path(collection.as_str()))
            .and(query_param("env", "current"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "cp-1",
                "object_id": "obj-1",
                "name": "my-product",
                "url": "https://catalog/cp-1",
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("{collection}/cp-1").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "cp-1",
                "object_id": "obj-1",
                "name": "my-product",
                "active": true,
                "disabled": false,
                "kind": "service",
                "tags": ["tag"],
                "object_provider": {"name": "IBM", "email": "name.name@ibm.com"},
                "url": "https://catalog/cp-1",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resource = resource_for(&server).await;
        let mut diags = Diagnostics::default();
        let (planned, _) = resource
            .plan_create(&mut diags, configured(), configured(), Default::default())
            .await
            .unwrap();
        assert!(planned.object_id.is_unknown());

        let (created, _) = resource
            .create(
                &mut diags,
                planned.clone(),
                planned,
                Default::default(),
                Default::default(),
            )
            .await
            .unwrap();
        assert_eq!(created.id, known(&format!("{PRODUCT_ID}/cp-1")));
        assert_eq!(created.catalog_product_id, known("cp-1"));
        assert_eq!(created.object_id, known("obj-1"));
        assert_eq!(created.url, known("https://catalog/cp-1"));

        let (read, _) = resource
            .read(&mut diags, created.clone(), Default::default(), Default::default())
            .await
            .unwrap();
        assert!(diags.errors.is_empty());
        assert_eq!(read.metadata, Value::Null);
        assert_eq!(
            read,
            CatalogProductState {
                metadata: Value::Null,
                ..created
            }
        );
    }

    #[tokio::test]
    async fn metadata_removal_is_patched_as_null() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(format!("/products/{PRODUCT_ID}/catalog_products/cp-1").as_str()))
            .and(body_json(json!({"active": false, "metadata": null})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "cp-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let prior = CatalogProductState {
            id: known(&format!("{PRODUCT_ID}/cp-1")),
            catalog_product_id: known("cp-1"),
            url: known("https://catalog/cp-1"),
            ..configured()
        };
        let planned = CatalogProductState {
            active: Value::Value(false),
            metadata: Value::Null,
            ..prior.clone()
        };

        let resource = resource_for(&server).await;
        let mut diags = Diagnostics::default();
        let (updated, _) = resource
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
        assert_eq!(updated, planned);
    }

    #[test]
    fn import_sets_path_attributes() {
        let state = CatalogProduct::import(&format!("{PRODUCT_ID}/cp-1")).unwrap();
        assert_eq!(state.product_id, known(PRODUCT_ID));
        assert_eq!(state.catalog_product_id, known("cp-1"));
        assert!(CatalogProduct::import(PRODUCT_ID).is_err());
    }
}
