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

//! Conversions between Terraform values and the REST payloads.
//!
//! Going to the wire, null, unknown and empty strings are all treated as unset.
//! Coming back, unset fields as well as empty strings and collections become
//! null.

use std::collections::BTreeMap;

use tf_provider::value::{Value, ValueList};

pub(crate) type StringMap = Value<BTreeMap<String, Value<String>>>;
pub(crate) type StringList = ValueList<Value<String>>;

/// A state block with a REST counterpart
pub(crate) trait Mirror: Sized {
    type Model;

    fn to_model(&self) -> Self::Model;
    fn from_model(model: &Self::Model) -> Self;
}

pub(crate) fn known<T: Clone>(value: &Value<T>) -> Option<T> {
    match value {
        Value::Value(value) => Some(value.clone()),
        _ => None,
    }
}

pub(crate) fn string(value: &Value<String>) -> Option<String> {
    match value {
        Value::Value(value) if !value.is_empty() => Some(value.clone()),
        _ => None,
    }
}

pub(crate) fn strings(value: &StringList) -> Option<Vec<String>> {
    match value {
        Value::Value(items) => Some(items.iter().filter_map(known).collect()),
        _ => None,
    }
}

pub(crate) fn string_map(value: &StringMap) -> Option<BTreeMap<String, String>> {
    match value {
        Value::Value(items) => Some(
            items
                .iter()
                .filter_map(|(k, v)| Some((k.clone(), known(v)?)))
                .collect(),
        ),
        _ => None,
    }
}

pub(crate) fn nested<S: Mirror>(value: &Value<S>) -> Option<S::Model> {
    match value {
        Value::Value(block) => Some(block.to_model()),
        _ => None,
    }
}

pub(crate) fn nested_list<S: Mirror>(value: &ValueList<Value<S>>) -> Option<Vec<S::Model>> {
    match value {
        Value::Value(items) => Some(
            items
                .iter()
                .filter_map(|item| match item {
                    Value::Value(block) => Some(block.to_model()),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    }
}

pub(crate) fn value<T: Clone>(model: &Option<T>) -> Value<T> {
    match model {
        Some(value) => Value::Value(value.clone()),
        None => Value::Null,
    }
}

pub(crate) fn string_value(model: &Option<String>) -> Value<String> {
    match model {
        Some(value) if !value.is_empty() => Value::Value(value.clone()),
        _ => Value::Null,
    }
}

pub(crate) fn strings_value(model: &Option<Vec<String>>) -> StringList {
    match model {
        Some(items) if !items.is_empty() => {
            Value::Value(items.iter().cloned().map(Value::Value).collect())
        }
        _ => Value::Null,
    }
}

/// Read a top-level list, keeping an empty list the state already had
///
/// The service may return the empty list or leave the field out.
pub(crate) fn refreshed_strings(prior: &StringList, model: &Option<Vec<String>>) -> StringList {
    match (prior, model) {
        (Value::Value(prior), None) if prior.is_empty() => Value::Value(Vec::new()),
        (Value::Value(prior), Some(items)) if prior.is_empty() && items.is_empty() => {
            Value::Value(Vec::new())
        }
        _ => strings_value(model),
    }
}

pub(crate) fn string_map_value(model: &Option<BTreeMap<String, String>>) -> StringMap {
    match model {
        Some(items) if !items.is_empty() => Value::Value(
            items
                .iter()
                .map(|(k, v)| (k.clone(), Value::Value(v.clone())))
                .collect(),
        ),
        _ => Value::Null,
    }
}

pub(crate) fn nested_value<S: Mirror>(model: &Option<S::Model>) -> Value<S> {
    match model {
        Some(model) => Value::Value(S::from_model(model)),
        None => Value::Null,
    }
}

pub(crate) fn nested_list_value<S: Mirror>(model: &Option<Vec<S::Model>>) -> ValueList<Value<S>> {
    match model {
        Some(items) if !items.is_empty() => Value::Value(
            items
                .iter()
                .map(|model| Value::Value(S::from_model(model)))
                .collect(),
        ),
        _ => Value::Null,
    }
}

/// Replace an unknown value by null
///
/// Applied values must be fully known, but the service may omit computed fields.
pub(crate) fn settle<T>(value: &mut Value<T>) {
    if value.is_unknown() {
        *value = Value::Null;
    }
}

/// Mark a null value unknown so that it can be computed by the service
pub(crate) fn unsettle<T>(value: &mut Value<T>) {
    if value.is_null() {
        *value = Value::Unknown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_values_are_not_sent() {
        assert_eq!(string(&Value::Null), None);
        assert_eq!(string(&Value::Unknown), None);
        assert_eq!(string(&Value::Value(String::new())), None);
        assert_eq!(string(&Value::Value("x".into())), Some("x".to_owned()));
        assert_eq!(known::<bool>(&Value::Value(false)), Some(false));
    }

    #[test]
    fn lists_skip_unknown_items() {
        let list: StringList = Value::Value(vec![
            Value::Value("a".into()),
            Value::Unknown,
            Value::Value("b".into()),
        ]);
        assert_eq!(strings(&list), Some(vec!["a".to_owned(), "b".to_owned()]));
        assert_eq!(strings(&Value::Null), None);
    }

    #[test]
    fn maps_round_trip() {
        let model = Some(BTreeMap::from([("fr".to_owned(), "bonjour".to_owned())]));
        let state = string_map_value(&model);
        assert_eq!(string_map(&state), model);
        assert_eq!(string_map_value(&None), Value::Null);
    }

    #[test]
    fn empty_values_are_read_as_null() {
        assert_eq!(string_value(&Some(String::new())), Value::Null);
        assert_eq!(string_value(&None), Value::Null);
        assert_eq!(strings_value(&Some(Vec::new())), Value::Null);
        assert_eq!(string_map_value(&Some(BTreeMap::new())), Value::Null);
    }

    #[test]
    fn configured_empty_lists_are_kept() {
        let empty: StringList = Value::Value(Vec::new());
        assert_eq!(refreshed_strings(&empty, &Some(Vec::new())), empty);
        assert_eq!(refreshed_strings(&Value::Null, &Some(Vec::new())), Value::Null);
        assert_eq!(refreshed_strings(&Value::Null, &None), Value::Null);
    }

    #[test]
    fn configured_empty_lists_survive_omitted_fields() {
        let empty: StringList = Value::Value(Vec::new());
        assert_eq!(refreshed_strings(&empty, &None), empty);
        assert_eq!(
            refreshed_strings(&empty, &Some(vec!["a".to_owned()])),
            Value::Value(vec![Value::Value("a".to_owned())])
        );
    }

    #[test]
    fn settle_and_unsettle() {
        let mut v: Value<String> = Value::Unknown;
        settle(&mut v);
        assert!(v.is_null());
        unsettle(&mut v);
        assert!(v.is_unknown());
        let mut v = Value::Value(true);
        unsettle(&mut v);
        assert_eq!(v, Value::Value(true));
    }
}
