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

use std::collections::HashMap;

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType, Description};

pub(crate) type Attributes = HashMap<String, Attribute>;

pub(crate) use AttributeConstraint::{Computed, Optional, OptionalComputed, Required};

pub(crate) fn attribute(
    attr_type: AttributeType,
    constraint: AttributeConstraint,
    description: &str,
) -> Attribute {
    Attribute {
        attr_type,
        description: Description::plain(description),
        constraint,
        sensitive: false,
        deprecated: false,
    }
}

pub(crate) fn string(constraint: AttributeConstraint, description: &str) -> Attribute {
    attribute(AttributeType::String, constraint, description)
}

pub(crate) fn sensitive_string(constraint: AttributeConstraint, description: &str) -> Attribute {
    Attribute {
        sensitive: true,
        ..string(constraint, description)
    }
}

pub(crate) fn boolean(constraint: AttributeConstraint, description: &str) -> Attribute {
    attribute(AttributeType::Bool, constraint, description)
}

pub(crate) fn number(constraint: AttributeConstraint, description: &str) -> Attribute {
    attribute(AttributeType::Number, constraint, description)
}

pub(crate) fn string_list(constraint: AttributeConstraint, description: &str) -> Attribute {
    attribute(
        AttributeType::List(Box::new(AttributeType::String)),
        constraint,
        description,
    )
}

pub(crate) fn string_map(constraint: AttributeConstraint, description: &str) -> Attribute {
    attribute(
        AttributeType::Map(Box::new(AttributeType::String)),
        constraint,
        description,
    )
}

/// Nested object attribute
pub(crate) fn single(
    constraint: AttributeConstraint,
    description: &str,
    attributes: Attributes,
) -> Attribute {
    attribute(
        AttributeType::AttributeSingle(attributes),
        constraint,
        description,
    )
}

/// Nested list of objects attribute
pub(crate) fn list(
    constraint: AttributeConstraint,
    description: &str,
    attributes: Attributes,
) -> Attribute {
    attribute(AttributeType::AttributeList(attributes), constraint, description)
}
