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

//! Global catalog entries: products, their plans and the plans' deployments.

use tf_provider::{map, value::Value, AttributePath, Diagnostics};

use crate::schema::{
    boolean, single, string, string_list, Attributes, Computed, Optional, OptionalComputed,
    Required,
};
use crate::validate::{self, check, Rule};

use shapes::{ObjectProvider, OverviewUi};

mod deployment;
mod plan;
mod product;
pub(crate) mod shapes;

pub use deployment::CatalogDeployment;
pub use plan::CatalogPlan;
pub use product::CatalogProduct;

/// Attributes shared by every catalog entry
///
/// `entity` names the entry in the descriptions.
pub(crate) fn entry_attributes(entity: &str) -> Attributes {
    map! {
        "id" => string(Computed, "The unique identifier of the resource."),
        "env" => string(Optional, "The environment to fetch this object from."),
        "object_id" => string(OptionalComputed, "The desired ID of the global catalog object."),
        "name" => string(Required, &format!("The programmatic name of this {entity}.")),
        "active" => boolean(Required, "Whether the service is active."),
        "disabled" => boolean(
            Required,
            "Determines the global visibility for the catalog entry, and its children. If it is not enabled, all plans are disabled.",
        ),
        "kind" => string(Required, "The kind of the global catalog object."),
        "overview_ui" => single(
            Optional,
            "The object that contains the service details from the Overview page in global catalog.",
            OverviewUi::attributes(),
        ),
        "tags" => string_list(
            Required,
            &format!("A list of tags that carry information about your {entity}. These tags can be used to find your {entity} in the catalog."),
        ),
        "object_provider" => single(
            Required,
            &format!("The provider or owner of the {entity}."),
            ObjectProvider::attributes(),
        ),
        "url" => string(Computed, &format!("The global catalog URL of your {entity}.")),
    }
}

/// Validators shared by every catalog entry
pub(crate) fn check_entry(
    diags: &mut Diagnostics,
    env: &Value<String>,
    name: (&Value<String>, Rule),
    kind: (&Value<String>, &'static [&'static str]),
) {
    check(diags, AttributePath::new("env"), env, validate::env());
    check(diags, AttributePath::new("name"), name.0, name.1);
    check(diags, AttributePath::new("kind"), kind.0, Rule::OneOf(kind.1));
}

#[cfg(test)]
pub(crate) mod tests {
    pub(crate) const PRODUCT_ID: &str =
        "f6f5a6e06e9c4c0da1b3a7b0d09e3b1a:o:5c3a1b1e-2f3d-4d5e-8f9a-0b1c2d3e4f5a";

    #[test]
    fn entry_attributes_cover_the_common_fields() {
        let attributes = super::entry_attributes("product");
        for name in [
            "id",
            "env",
            "object_id",
            "name",
            "active",
            "disabled",
            "kind",
            "overview_ui",
            "tags",
            "object_provider",
            "url",
        ] {
            assert!(attributes.contains_key(name), "missing {name}");
        }
    }
}
