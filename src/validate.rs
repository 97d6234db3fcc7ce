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

use lazy_static::lazy_static;
use regex::Regex;
use tf_provider::{value::Value, AttributePath, Diagnostics};

lazy_static! {
    pub(crate) static ref PRODUCT_ID: Regex = Regex::new(
        r"^[a-zA-Z0-9]{32}:o:[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$"
    )
    .unwrap();
    pub(crate) static ref CATALOG_ID: Regex = Regex::new(r"^[a-zA-Z\-_\d]+$").unwrap();
    pub(crate) static ref ENV: Regex = Regex::new(r"^[a-z]+$").unwrap();
    pub(crate) static ref LOWERCASE_NAME: Regex = Regex::new(r"^[a-z0-9\-.]+$").unwrap();
    pub(crate) static ref NAME: Regex = Regex::new(r"^[a-zA-Z0-9\-.]+$").unwrap();
    pub(crate) static ref ID_PART: Regex = Regex::new(r"^[a-zA-Z0-9\-_.:~]+$").unwrap();
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Rule {
    Regex(&'static Regex),
    RegexLen(&'static Regex, usize, usize),
    OneOf(&'static [&'static str]),
}

pub(crate) fn product_id() -> Rule {
    Rule::RegexLen(&*PRODUCT_ID, 71, 71)
}

pub(crate) fn catalog_id() -> Rule {
    Rule::RegexLen(&*CATALOG_ID, 2, 128)
}

pub(crate) fn env() -> Rule {
    Rule::RegexLen(&*ENV, 1, 64)
}

pub(crate) fn lowercase_name() -> Rule {
    Rule::Regex(&*LOWERCASE_NAME)
}

pub(crate) fn name() -> Rule {
    Rule::Regex(&*NAME)
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), String> {
        match *self {
            Rule::Regex(regex) => {
                if regex.is_match(value) {
                    Ok(())
                } else {
                    Err(format!(
                        "{value:?} must match the regular expression {}",
                        regex.as_str()
                    ))
                }
            }
            Rule::RegexLen(regex, min, max) => {
                let len = value.chars().count();
                if len < min || len > max {
                    Err(format!(
                        "the length of {value:?} must be between {min} and {max}, got {len}"
                    ))
                } else {
                    Rule::Regex(regex).check(value)
                }
            }
            Rule::OneOf(allowed) => {
                if allowed.contains(&value) {
                    Ok(())
                } else {
                    Err(format!(
                        "{value:?} must be one of: {}",
                        allowed.join(", ")
                    ))
                }
            }
        }
    }
}

/// Check a string attribute against a rule
///
/// Null and unknown values are accepted: requiredness is enforced by Terraform
/// and unknown values are checked again once known.
pub(crate) fn check(diags: &mut Diagnostics, attr_path: AttributePath, value: &Value<String>, rule: Rule) {
    if let Value::Value(value) = value {
        if let Err(detail) = rule.check(value) {
            diags.error("Invalid attribute value", detail, attr_path);
        }
    }
}
