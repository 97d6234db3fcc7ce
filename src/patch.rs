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

//! Merge-patch reconciliation.
//!
//! A field the user removed must be sent as an explicit `null` for the service
//! to clear it, while a field that was never set must be left out of the patch.

use serde::Serialize;
use serde_json::{Map, Value};

pub type Body = Map<String, Value>;

/// Serialize a payload into a JSON object without its null fields
pub fn to_body<T: Serialize>(payload: &T) -> serde_json::Result<Body> {
    match prune(serde_json::to_value(payload)?) {
        Value::Object(body) => Ok(body),
        Value::Null => Ok(Body::new()),
        other => Err(serde::ser::Error::custom(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

fn prune(value: Value) -> Value {
    match value {
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, prune(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(prune).collect()),
        other => other,
    }
}

/// Compute the merge patch turning `prior` into `planned`
///
/// Only the `patchable` top-level fields are considered, and only when they
/// changed. A changed object is sent whole, with explicit nulls for the keys
/// that disappeared from it.
pub fn merge_patch(prior: &Body, planned: &Body, patchable: &[&str]) -> Body {
    let mut patch = Body::new();

    for &field in patchable {
        match (prior.get(field), planned.get(field)) {
            (None, None) => (),
            (Some(_), None) => {
                patch.insert(field.to_owned(), Value::Null);
            }
            (before, Some(after)) => {
                if before != Some(after) {
                    patch.insert(field.to_owned(), with_removals(before, after));
                }
            }
        }
    }

    patch
}

fn with_removals(prior: Option<&Value>, planned: &Value) -> Value {
    match (prior, planned) {
        (Some(Value::Object(before)), Value::Object(after)) => {
            let mut merged = after.clone();
            for (key, old) in before {
                match after.get(key) {
                    None => {
                        merged.insert(key.clone(), Value::Null);
                    }
                    Some(new) => {
                        merged.insert(key.clone(), with_removals(Some(old), new));
                    }
                }
            }
            Value::Object(merged)
        }
        _ => planned.clone(),
    }
}
