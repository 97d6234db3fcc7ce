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
use tf_provider::schema::Attribute;
use tf_provider::value::Value;
use tf_provider::schema::{Block, Description, Schema};
use tf_provider::{map, AttributePath, Diagnostics};

use crate::convert::{
    known, nested, nested_value, refreshed_strings, settle, string, string_value, strings,
    strings_value, unsettle, value, Mirror, StringList,
};
use crate::onboarding::{fill, replace_if_changed, Onboarding};
use crate::schema::{
    boolean, single, string as string_attr, string_list, Attributes, Computed, Optional, Required,
};
use crate::utils::{join_id, path_part, split_id, IdError, WithSchema, WithValidate};
use crate::validate::{self, check};

use super::shapes::{
    MetadataUi, MetadataUiModel, ObjectProvider, ObjectProviderModel, OverviewUi,
    OverviewUiModel, ServiceMetadata,
};
use super::{check_entry, entry_attributes};

const KINDS: &[&str] = &["plan"];
const ID_PARTS: [&str; 3] = ["product_id", "catalog_product_id", "catalog_plan_id"];

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPlanState {
    pub id: Value<String>,
    pub product_id: Value<String>,
    pub catalog_product_id: Value<String>,
    pub env: Value<String>,
    pub object_id: Value<String>,
    pub name: Value<String>,
    pub active: Value<bool>,
    pub disabled: Value<bool>,
    pub kind: Value<String>,
    pub overview_ui: Value<OverviewUi>,
    pub tags: StringList,
    pub pricing_tags: StringList,
    pub object_provider: Value<ObjectProvider>,
    pub metadata: Value<PlanMetadata>,
    pub geo_tags: StringList,
    pub url: Value<String>,
    pub catalog_plan_id: Value<String>,
}

/// Global catalog plan, as sent and returned by the service
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPlanModel {
    pub id: Option<String>,
    pub object_id: Option<String>,
    pub name: Option<String>,
    pub active: Option<bool>,
    pub disabled: Option<bool>,
    pub kind: Option<String>,
    pub overview_ui: Option<OverviewUiModel>,
    pub tags: Option<Vec<String>>,
    pub pricing_tags: Option<Vec<String>>,
    pub object_provider: Option<ObjectProviderModel>,
    pub metadata: Option<PlanMetadataModel>,
    pub geo_tags: Option<Vec<String>>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub rc_compatible: Value<bool>,
    pub ui: Value<MetadataUi>,
    pub service: Value<PlanService>,
    pub pricing: Value<Pricing>,
    pub plan: Value<PlanSettings>,
    pub other: Value<PlanOther>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMetadataModel {
    pub rc_compatible: Option<bool>,
    pub ui: Option<MetadataUiModel>,
    pub service: Option<PlanServiceModel>,
    pub pricing: Option<PricingModel>,
    pub plan: Option<PlanSettingsModel>,
    pub other: Option<PlanOtherModel>,
}

impl Mirror for PlanMetadata {
    type Model = PlanMetadataModel;

    fn to_model(&self) -> PlanMetadataModel {
        PlanMetadataModel {
            rc_compatible: known(&self.rc_compatible),
            ui: nested(&self.ui),
            service: nested(&self.service),
            pricing: nested(&self.pricing),
            plan: nested(&self.plan),
            other: nested(&self.other),
        }
    }

    fn from_model(model: &PlanMetadataModel) -> Self {
        Self {
            rc_compatible: value(&model.rc_compatible),
            ui: nested_value(&model.ui),
            service: nested_value(&model.service),
            pricing: nested_value(&model.pricing),
            plan: nested_value(&model.plan),
            other: nested_value(&model.other),
        }
    }
}

/// Service metadata of a plan, with the API key flag set by the service
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanService {
    pub rc_provisionable: Value<bool>,
    pub iam_compatible: Value<bool>,
    pub bindable: Value<bool>,
    pub plan_updateable: Value<bool>,
    pub service_key_supported: Value<bool>,
    pub unique_api_key: Value<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanServiceModel {
    pub rc_provisionable: Option<bool>,
    pub iam_compatible: Option<bool>,
    pub bindable: Option<bool>,
    pub plan_updateable: Option<bool>,
    pub service_key_supported: Option<bool>,
    pub unique_api_key: Option<bool>,
}

impl Mirror for PlanService {
    type Model = PlanServiceModel;

    fn to_model(&self) -> PlanServiceModel {
        PlanServiceModel {
            rc_provisionable: known(&self.rc_provisionable),
            iam_compatible: known(&self.iam_compatible),
            bindable: known(&self.bindable),
            plan_updateable: known(&self.plan_updateable),
            service_key_supported: known(&self.service_key_supported),
            unique_api_key: None,
        }
    }

    fn from_model(model: &PlanServiceModel) -> Self {
        Self {
            rc_provisionable: value(&model.rc_provisionable),
            iam_compatible: value(&model.iam_compatible),
            bindable: value(&model.bindable),
            plan_updateable: value(&model.plan_updateable),
            service_key_supported: value(&model.service_key_supported),
            unique_api_key: value(&model.unique_api_key),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub r#type: Value<String>,
    pub origin: Value<String>,
    pub sales_avenue: StringList,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingModel {
    pub r#type: Option<String>,
    pub origin: Option<String>,
    pub sales_avenue: Option<Vec<String>>,
}

impl Mirror for Pricing {
    type Model = PricingModel;

    fn to_model(&self) -> PricingModel {
        PricingModel {
            r#type: string(&self.r#type),
            origin: string(&self.origin),
            sales_avenue: strings(&self.sales_avenue),
        }
    }

    fn from_model(model: &PricingModel) -> Self {
        Self {
            r#type: string_value(&model.r#type),
            origin: string_value(&model.origin),
            sales_avenue: strings_value(&model.sales_avenue),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSettings {
    pub allow_internal_users: Value<bool>,
    pub bindable: Value<bool>,
    pub provision_type: Value<String>,
    pub reservable: Value<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSettingsModel {
    pub allow_internal_users: Option<bool>,
    pub bindable: Option<bool>,
    pub provision_type: Option<String>,
    pub reservable: Option<bool>,
}

impl Mirror for PlanSettings {
    type Model = PlanSettingsModel;

    fn to_model(&self) -> PlanSettingsModel {
        PlanSettingsModel {
            allow_internal_users: known(&self.allow_internal_users),
            bindable: None,
            provision_type: string(&self.provision_type),
            reservable: known(&self.reservable),
        }
    }

    fn from_model(model: &PlanSettingsModel) -> Self {
        Self {
            allow_internal_users: value(&model.allow_internal_users),
            bindable: value(&model.bindable),
            provision_type: string_value(&model.provision_type),
            reservable: value(&model.reservable),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOther {
    pub resource_controller: Value<ResourceController>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOtherModel {
    pub resource_controller: Option<ResourceControllerModel>,
}

impl Mirror for PlanOther {
    type Model = PlanOtherModel;

    fn to_model(&self) -> PlanOtherModel {
        PlanOtherModel {
            resource_controller: nested(&self.resource_controller),
        }
    }

    fn from_model(model: &PlanOtherModel) -> Self {
        Self {
            resource_controller: nested_value(&model.resource_controller),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceController {
    pub subscription_provider_id: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceControllerModel {
    pub subscription_provider_id: Option<String>,
}

impl Mirror for ResourceController {
    type Model = ResourceControllerModel;

    fn to_model(&self) -> ResourceControllerModel {
        ResourceControllerModel {
            subscription_provider_id: string(&self.subscription_provider_id),
        }
    }

    fn from_model(model: &ResourceControllerModel) -> Self {
        Self {
            subscription_provider_id: string_value(&model.subscription_provider_id),
        }
    }
}

/// Server-side flags nested in the metadata
fn nested_flags(
    metadata: &mut Value<PlanMetadata>,
) -> (Option<&mut Value<bool>>, Option<&mut Value<bool>>) {
    let Value::Value(metadata) = metadata else {
        return (None, None);
    };
    let unique_api_key = match &mut metadata.service {
        Value::Value(service) => Some(&mut service.unique_api_key),
        _ => None,
    };
    let bindable = match &mut metadata.plan {
        Value::Value(plan) => Some(&mut plan.bindable),
        _ => None,
    };
    (unique_api_key, bindable)
}

fn sensitive_flag(description: &str) -> Attribute {
    Attribute {
        sensitive: true,
        ..boolean(Computed, description)
    }
}

impl WithSchema for CatalogPlanState {
    fn schema() -> Schema {
        let mut service = ServiceMetadata::attributes();
        service.insert(
            "unique_api_key".to_owned(),
            sensitive_flag("Indicates whether the deployment uses a unique API key or not."),
        );

        let mut attributes = entry_attributes("plan");
        let extra: Attributes = map! {
            "product_id" => string_attr(Required, "The unique ID of the product."),
            "catalog_product_id" => string_attr(Required, "The unique ID of this global catalog product."),
            "pricing_tags" => string_list(
                Optional,
                "A list of tags that carry information about the pricing information of your product.",
            ),
            "metadata" => single(Optional, "Global catalog plan metadata.", map! {
                "rc_compatible" => boolean(
                    Optional,
                    "Whether the object is compatible with the resource controller service.",
                ),
                "ui" => single(Optional, "The UI metadata of this service.", MetadataUi::attributes()),
                "service" => single(Optional, "The global catalog metadata of the service.", service),
                "pricing" => single(Optional, "The pricing metadata of this object.", map! {
                    "type" => string_attr(Optional, "The type of the pricing plan."),
                    "origin" => string_attr(
                        Optional,
                        "The source of the pricing information: global_catalog or pricing_catalog.",
                    ),
                    "sales_avenue" => string_list(
                        Optional,
                        "Currently only available for MCSP subscription plans. Shows how the customer can purchase the plan.",
                    ),
                }),
                "plan" => single(Optional, "Metadata controlling Plan related settings.", map! {
                    "allow_internal_users" => boolean(Optional, "Controls if IBMers are allowed to provision this plan."),
                    "bindable" => boolean(Computed, "Deprecated. Controls the Connections tab on the Resource Details page."),
                    "provision_type" => string_attr(
                        Optional,
                        "SaaS services that integrate with MCSP for provisioning and metering should select `mcsp`. If the subscription is captured as a resource subscription, but SSM/MCSP is not involved, select `ibm_cloud`. Otherwise, select `legacy` if the subscription is only captured as a billable subscription, and there's no resource subscription involved.",
                    ),
                    "reservable" => boolean(Optional, "This field is not available for free and lite plans."),
                }),
                "other" => single(Optional, "Global catalog plan metadata other field.", map! {
                    "resource_controller" => single(Optional, "The resource controller metadata.", map! {
                        "subscription_provider_id" => string_attr(
                            Optional,
                            "The broker ID for the plan. Only needed if the service is MCSP.",
                        ),
                    }),
                }),
            }),
            "geo_tags" => string_list(Computed, "The geographical tags of the plan."),
            "catalog_plan_id" => string_attr(Computed, "The ID of a global catalog object."),
        };
        attributes.extend(extra);

        Schema {
            version: 1,
            block: Block {
                description: Description::plain("Global catalog plan of a Partner Center Sell product"),
                attributes,
                ..Default::default()
            },
        }
    }
}

impl WithValidate for CatalogPlanState {
    fn validate(&self, diags: &mut Diagnostics) {
        check(diags, AttributePath::new("product_id"), &self.product_id, validate::product_id());
        check(
            diags,
            AttributePath::new("catalog_product_id"),
            &self.catalog_product_id,
            validate::catalog_id(),
        );
        check_entry(diags, &self.env, (&self.name, validate::name()), (&self.kind, KINDS));
    }
}

#[derive(Debug, Default, Clone)]
pub struct CatalogPlan;

impl Onboarding for CatalogPlan {
    const NAME: &'static str = "partnercentersell_catalog_plan";
    const ENTITY: &'static str = "CatalogPlan";
    const PATCHABLE: &'static [&'static str] = &[
        "active",
        "disabled",
        "overview_ui",
        "tags",
        "pricing_tags",
        "object_provider",
        "metadata",
    ];

    type State = CatalogPlanState;
    type Model = CatalogPlanModel;

    fn id(state: &CatalogPlanState) -> &Value<String> {
        &state.id
    }

    fn id_mut(state: &mut CatalogPlanState) -> &mut Value<String> {
        &mut state.id
    }

    fn env(state: &CatalogPlanState) -> &Value<String> {
        &state.env
    }

    fn collection(state: &CatalogPlanState) -> Result<String, IdError> {
        let product_id = path_part(&state.product_id, "product_id")?;
        let catalog_product_id = path_part(&state.catalog_product_id, "catalog_product_id")?;
        Ok(format!(
            "/products/{product_id}/catalog_products/{catalog_product_id}/catalog_plans"
        ))
    }

    fn location(id: &str) -> Result<String, IdError> {
        let [product_id, catalog_product_id, catalog_plan_id] = split_id(id, ID_PARTS)?;
        Ok(format!(
            "/products/{product_id}/catalog_products/{catalog_product_id}/catalog_plans/{catalog_plan_id}"
        ))
    }

    fn resource_id(state: &CatalogPlanState, created: &CatalogPlanModel) -> Option<String> {
        let product_id = path_part(&state.product_id, "product_id").ok()?;
        let catalog_product_id = path_part(&state.catalog_product_id, "catalog_product_id").ok()?;
        Some(join_id([product_id, catalog_product_id, created.id.as_deref()?]))
    }

    fn to_model(state: &CatalogPlanState) -> CatalogPlanModel {
        CatalogPlanModel {
            object_id: string(&state.object_id),
            name: string(&state.name),
            active: known(&state.active),
            disabled: known(&state.disabled),
            kind: string(&state.kind),
            overview_ui: nested(&state.overview_ui),
            tags: strings(&state.tags),
            pricing_tags: strings(&state.pricing_tags),
            object_provider: nested(&state.object_provider),
            metadata: nested(&state.metadata),
            ..Default::default()
        }
    }

    fn refresh(state: &mut CatalogPlanState, model: &CatalogPlanModel) {
        if let Value::Value(id) = &state.id {
            if let Ok([product_id, catalog_product_id, _]) = split_id(id, ID_PARTS) {
                state.product_id = Value::Value(product_id.to_owned());
                state.catalog_product_id = Value::Value(catalog_product_id.to_owned());
            }
        }
        state.object_id = string_value(&model.object_id);
        state.name = string_value(&model.name);
        state.active = value(&model.active);
        state.disabled = value(&model.disabled);
        state.kind = string_value(&model.kind);
        state.overview_ui = nested_value(&model.overview_ui);
        state.tags = refreshed_strings(&state.tags, &model.tags);
        state.pricing_tags = refreshed_strings(&state.pricing_tags, &model.pricing_tags);
        state.object_provider = nested_value(&model.object_provider);
        state.metadata = nested_value(&model.metadata);
        state.geo_tags = strings_value(&model.geo_tags);
        state.url = string_value(&model.url);
        state.catalog_plan_id = string_value(&model.id);
    }

    fn plan_computed(state: &mut CatalogPlanState) {
        unsettle(&mut state.object_id);
        state.geo_tags = Value::Unknown;
        state.url = Value::Unknown;
        state.catalog_plan_id = Value::Unknown;

        let (unique_api_key, bindable) = nested_flags(&mut state.metadata);
        if let Some(unique_api_key) = unique_api_key {
            *unique_api_key = Value::Unknown;
        }
        if let Some(bindable) = bindable {
            *bindable = Value::Unknown;
        }
    }

    fn apply(state: &mut CatalogPlanState, model: Option<&CatalogPlanModel>) {
        if let Some(model) = model {
            fill(&mut state.object_id, string_value(&model.object_id));
            fill(&mut state.geo_tags, strings_value(&model.geo_tags));
            fill(&mut state.url, string_value(&model.url));
            fill(&mut state.catalog_plan_id, string_value(&model.id));

            let metadata = model.metadata.as_ref();
            let service = metadata.and_then(|metadata| metadata.service.as_ref());
            let plan = metadata.and_then(|metadata| metadata.plan.as_ref());
            let (unique_api_key, bindable) = nested_flags(&mut state.metadata);
            if let Some(unique_api_key) = unique_api_key {
                fill(unique_api_key, value(&service.and_then(|service| service.unique_api_key)));
            }
            if let Some(bindable) = bindable {
                fill(bindable, value(&plan.and_then(|plan| plan.bindable)));
            }
        }

        settle(&mut state.object_id);
        settle(&mut state.geo_tags);
        settle(&mut state.url);
        settle(&mut state.catalog_plan_id);
        let (unique_api_key, bindable) = nested_flags(&mut state.metadata);
        if let Some(unique_api_key) = unique_api_key {
            settle(unique_api_key);
        }
        if let Some(bindable) = bindable {
            settle(bindable);
        }
    }

    fn replace_paths(prior: &CatalogPlanState, planned: &CatalogPlanState) -> Vec<AttributePath> {
        let mut paths = Vec::new();
        replace_if_changed(&mut paths, "product_id", &prior.product_id, &planned.product_id);
        replace_if_changed(
            &mut paths,
            "catalog_product_id",
            &prior.catalog_product_id,
            &planned.catalog_product_id,
        );
        replace_if_changed(&mut paths, "object_id", &prior.object_id, &planned.object_id);
        replace_if_changed(&mut paths, "name", &prior.name, &planned.name);
        replace_if_changed(&mut paths, "kind", &prior.kind, &planned.kind);
        paths
    }

    fn import(id: &str) -> Result<CatalogPlanState, IdError> {
        let [product_id, catalog_product_id, catalog_plan_id] = split_id(id, ID_PARTS)?;
        Ok(CatalogPlanState {
            id: Value::Value(id.to_owned()),
            product_id: Value::Value(product_id.to_owned()),
            catalog_product_id: Value::Value(catalog_product_id.to_owned()),
            catalog_plan_id: Value::Value(catalog_plan_id.to_owned()),
            ..Default::default()
        })
    }
}
