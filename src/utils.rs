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

use std::cell::RefCell;

use thiserror::Error;

use tf_provider::schema::Schema;
use tf_provider::{value::Value, Diagnostics};

use crate::validate::ID_PART;

pub(crate) trait WithSchema {
    fn schema() -> Schema;
}

pub(crate) trait WithValidate {
    fn validate(&self, diags: &mut Diagnostics);
}

/// Separator between the path parameters of a composite resource id
pub(crate) const ID_SEPARATOR: &str = "/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("The given id {id:?} does not contain {expected} parts separated by \"/\": expected {format}")]
    PartCount {
        id: String,
        expected: usize,
        format: String,
    },
    #[error("The given id {id:?} has an empty `{name}` part")]
    EmptyPart { id: String, name: &'static str },
    #[error("The `{name}` attribute must be known to build the resource path")]
    UnknownPart { name: &'static str },
    #[error("The `{name}` part {part:?} may only contain letters, digits and `-_.:~`")]
    InvalidPart { part: String, name: &'static str },
}

/// Reject path parameters that would alter the request URL
fn check_part<'a>(part: &'a str, name: &'static str) -> Result<&'a str, IdError> {
    if ID_PART.is_match(part) {
        Ok(part)
    } else {
        Err(IdError::InvalidPart {
            part: part.to_owned(),
            name,
        })
    }
}

/// Path parameter taken from a state attribute
pub(crate) fn path_part<'a>(
    value: &'a Value<String>,
    name: &'static str,
) -> Result<&'a str, IdError> {
    match value {
        Value::Value(part) if !part.is_empty() => check_part(part, name),
        _ => Err(IdError::UnknownPart { name }),
    }
}

/// Split a composite id into its named parts
///
/// The id must contain exactly one non-empty part per name, each usable as
/// a URL path segment.
pub(crate) fn split_id<'a, const N: usize>(
    id: &'a str,
    names: [&'static str; N],
) -> Result<[&'a str; N], IdError> {
    let parts = id.split(ID_SEPARATOR).collect::<Vec<_>>();
    let parts: [&str; N] = parts.try_into().map_err(|_| IdError::PartCount {
        id: id.to_owned(),
        expected: N,
        format: names.iter().join_with(ID_SEPARATOR).to_string(),
    })?;

    for (part, name) in parts.iter().zip(names) {
        if part.is_empty() {
            return Err(IdError::EmptyPart {
                id: id.to_owned(),
                name,
            });
        }
        check_part(part, name)?;
    }
    Ok(parts)
}

/// Build a composite id from its parts
pub(crate) fn join_id<I>(parts: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    parts.into_iter().join_with(ID_SEPARATOR).to_string()
}

pub struct DisplayJoiner<'a, T, I>
where
    T: Iterator<Item = I>,
    I: std::fmt::Display,
{
    iter: RefCell<T>,
    sep: &'a str,
}

pub trait DisplayJoinable {
    type Joiner<'a>;
    fn join_with(self, sep: &str) -> Self::Joiner<'_>;
}

impl<T, I> DisplayJoinable for T
where
    T: Iterator<Item = I>,
    I: std::fmt::Display,
{
    type Joiner<'a> = DisplayJoiner<'a, T, I>;

    fn join_with(self, sep: &str) -> Self::Joiner<'_> {
        DisplayJoiner {
            iter: RefCell::new(self),
            sep,
        }
    }
}

impl<'a, T, I> std::fmt::Display for DisplayJoiner<'a, T, I>
where
    T: Iterator<Item = I>,
    I: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sep = "";
        let mut iter = self.iter.try_borrow_mut().or(Err(std::fmt::Error))?;
        for elt in iter.by_ref() {
            f.write_str(sep)?;
            f.write_fmt(format_args!("{elt}"))?;
            sep = self.sep;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_and_split_are_symmetric() {
        let id = join_id(["product", "catalog-product", "plan"]);
        assert_eq!(id, "product/catalog-product/plan");

        let [product, catalog_product, plan] = split_id(
            &id,
            ["product_id", "catalog_product_id", "catalog_plan_id"],
        )
        .unwrap();
        assert_eq!(product, "product");
        assert_eq!(catalog_product, "catalog-product");
        assert_eq!(plan, "plan");
    }

    #[test]
    fn split_rejects_wrong_part_count() {
        let err = split_id("only-one", ["product_id", "name"]).unwrap_err();
        assert_eq!(
            err,
            IdError::PartCount {
                id: "only-one".to_owned(),
                expected: 2,
                format: "product_id/name".to_owned(),
            }
        );

        assert!(split_id("a/b/c", ["product_id", "name"]).is_err());
    }

    #[test]
    fn split_rejects_empty_part() {
        let err = split_id("product/", ["product_id", "name"]).unwrap_err();
        assert_eq!(
            err,
            IdError::EmptyPart {
                id: "product/".to_owned(),
                name: "name",
            }
        );
    }

    #[test]
    fn split_rejects_parts_altering_the_url() {
        let err = split_id("product/plan?env=prod", ["product_id", "catalog_plan_id"]).unwrap_err();
        assert_eq!(
            err,
            IdError::InvalidPart {
                part: "plan?env=prod".to_owned(),
                name: "catalog_plan_id",
            }
        );
        assert!(split_id("product/plan#x", ["product_id", "catalog_plan_id"]).is_err());
        assert!(split_id("product/%2e%2e", ["product_id", "catalog_plan_id"]).is_err());
        assert!(split_id(
            "f6f5a6e06e9c4c0da1b3a7b0d09e3b1a:o:5c3a1b1e-2f3d-4d5e-8f9a-0b1c2d3e4f5a/my_plan.v1",
            ["product_id", "catalog_plan_id"],
        )
        .is_ok());
    }

    #[test]
    fn path_parts_must_be_known() {
        assert_eq!(path_part(&Value::Value("p".to_owned()), "product_id"), Ok("p"));
        assert_eq!(
            path_part(&Value::Unknown, "product_id"),
            Err(IdError::UnknownPart { name: "product_id" })
        );
        assert!(path_part(&Value::Value(String::new()), "product_id").is_err());
        assert!(path_part(&Value::Value("p?q".to_owned()), "product_id").is_err());
    }

    #[test]
    fn joiner_handles_empty_iterators() {
        let empty: [&str; 0] = [];
        assert_eq!(join_id(empty), "");
    }
}
