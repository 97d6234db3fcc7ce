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

use std::fmt::Display;

use tf_provider::Diagnostics;
use thiserror::Error;
use tracing::debug;

/// Error raised by a resource operation, tagged with where it happened
///
/// `resource`, `operation` and the optional `step` form the discriminator
/// that ends up in both the debug log and the Terraform diagnostic.
#[derive(Debug, Error)]
#[error("{summary}")]
pub struct TerraformError {
    pub resource: &'static str,
    pub operation: &'static str,
    pub step: Option<String>,
    pub summary: String,
    pub cause: Option<anyhow::Error>,
}

impl TerraformError {
    pub fn new(
        source: impl Into<anyhow::Error>,
        summary: impl Display,
        resource: &'static str,
        operation: &'static str,
    ) -> Self {
        Self {
            resource,
            operation,
            step: None,
            summary: summary.to_string(),
            cause: Some(source.into()),
        }
    }

    pub fn discriminated(
        source: impl Into<anyhow::Error>,
        resource: &'static str,
        operation: &'static str,
        step: impl Display,
    ) -> Self {
        let source = source.into();
        Self {
            resource,
            operation,
            step: Some(step.to_string()),
            summary: source.to_string(),
            cause: Some(source),
        }
    }

    /// Error not caused by another one
    pub fn message(
        summary: impl Display,
        resource: &'static str,
        operation: &'static str,
        step: impl Display,
    ) -> Self {
        Self {
            resource,
            operation,
            step: Some(step.to_string()),
            summary: summary.to_string(),
            cause: None,
        }
    }

    pub fn detail(&self) -> String {
        let mut detail = format!(
            "resource: {}\noperation: {}",
            self.resource, self.operation
        );
        if let Some(step) = &self.step {
            detail.push_str("\nstep: ");
            detail.push_str(step);
        }
        if let Some(cause) = &self.cause {
            detail.push_str("\ncause: ");
            detail.push_str(&format!("{cause:#}"));
        }
        detail
    }

    pub fn report(self, diags: &mut Diagnostics) {
        debug!(
            resource = self.resource,
            operation = self.operation,
            step = self.step.as_deref().unwrap_or_default(),
            "{}\n{}",
            self.summary,
            self.detail()
        );
        let detail = self.detail();
        diags.root_error(self.summary, detail);
    }
}
