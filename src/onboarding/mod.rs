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

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};
use tf_provider::{value::Value, AttributePath};

use crate::utils::{IdError, WithSchema, WithValidate};

mod resource;

pub(crate) use resource::SellResource;

/// A Partner Center Sell entity managed as a Terraform resource
///
/// Implementors describe how the Terraform state maps onto the REST entity;
/// [`SellResource`] drives the calls.
pub(crate) trait Onboarding: Debug + Default + Send + Sync + 'static {
    /// Terraform type name, used in diagnostics
    const NAME: &'static str;
    /// REST entity name, used in error summaries
    const ENTITY: &'static str;
    /// Top-level body fields that can be sent in a merge patch
    const PATCHABLE: &'static [&'static str];

    type State: WithSchema
        + WithValidate
        + Serialize
        + DeserializeOwned
        + Default
        + Clone
        + Debug
        + Send
        + Sync;
    type Model: Serialize + DeserializeOwned + Debug + Send + Sync;

    fn id(state: &Self::State) -> &Value<String>;
    fn id_mut(state: &mut Self::State) -> &mut Value<String>;
    fn env(state: &Self::State) -> &Value<String>;

    /// Path where new entities are created
    fn collection(state: &Self::State) -> Result<String, IdError>;
    /// Path of the entity identified by a composite id
    fn location(id: &str) -> Result<String, IdError>;
    /// Composite id of a freshly created entity
    fn resource_id(state: &Self::State, created: &Self::Model) -> Option<String>;

    /// Request body of the state
    fn to_model(state: &Self::State) -> Self::Model;
    /// Mirror a fetched entity into the state
    fn refresh(state: &mut Self::State, model: &Self::Model);

    /// Mark the attributes computed by the service unknown
    fn plan_computed(state: &mut Self::State);
    /// Fill the computed attributes left unknown by the plan
    ///
    /// Whatever is still unknown afterwards must be settled to null.
    fn apply(state: &mut Self::State, model: Option<&Self::Model>);

    /// Mark the attributes the service recomputes on every update unknown
    fn plan_changed(_state: &mut Self::State) {}

    /// Attributes whose change requires a new entity
    fn replace_paths(prior: &Self::State, planned: &Self::State) -> Vec<AttributePath>;

    /// State holding the path parameters of an imported id
    fn import(id: &str) -> Result<Self::State, IdError>;
}

/// Record `name` as requiring replacement when it changed
pub(crate) fn replace_if_changed<T: PartialEq>(
    paths: &mut Vec<AttributePath>,
    name: &'static str,
    prior: &Value<T>,
    planned: &Value<T>,
) {
    if prior != planned {
        paths.push(AttributePath::new(name));
    }
}

/// Set a planned-unknown attribute from the service response
pub(crate) fn fill<T>(target: &mut Value<T>, source: Value<T>) {
    if target.is_unknown() {
        *target = source;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_changed_attributes_are_replaced() {
        let mut paths = Vec::new();
        replace_if_changed(
            &mut paths,
            "name",
            &Value::Value("a".to_owned()),
            &Value::Value("a".to_owned()),
        );
        assert!(paths.is_empty());

        replace_if_changed(
            &mut paths,
            "kind",
            &Value::Value("service".to_owned()),
            &Value::Unknown,
        );
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn fill_keeps_known_values() {
        let mut known = Value::Value("prior".to_owned());
        fill(&mut known, Value::Value("response".to_owned()));
        assert_eq!(known, Value::Value("prior".to_owned()));

        let mut unknown = Value::Unknown;
        fill(&mut unknown, Value::Value("response".to_owned()));
        assert_eq!(unknown, Value::Value("response".to_owned()));
    }
}
