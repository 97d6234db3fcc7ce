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

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use tf_provider::value::{Value, ValueEmpty};
use tf_provider::{schema::Schema, AttributePath, Diagnostics, Resource};

use crate::client::{ApiError, ClientHandle, PartnerCenterSellClient};
use crate::error::TerraformError;
use crate::patch::{merge_patch, to_body};
use crate::utils::{WithSchema, WithValidate};

use super::Onboarding;

#[derive(Debug, Default)]
pub(crate) struct SellResource<T: Onboarding> {
    client: ClientHandle,
    entity: PhantomData<fn() -> T>,
}

impl<T: Onboarding> SellResource<T> {
    pub(crate) fn new(client: ClientHandle) -> Self {
        Self {
            client,
            entity: PhantomData,
        }
    }

    fn client(&self, operation: &'static str) -> Result<Arc<PartnerCenterSellClient>, TerraformError> {
        self.client.get().cloned().ok_or_else(|| {
            TerraformError::message(
                "The provider has not been configured",
                T::NAME,
                operation,
                "initialize-client",
            )
        })
    }

    fn location(state: &T::State, operation: &'static str) -> Result<String, TerraformError> {
        let Value::Value(id) = T::id(state) else {
            return Err(TerraformError::message(
                "The resource id is not known",
                T::NAME,
                operation,
                "sep-id-parts",
            ));
        };
        T::location(id)
            .map_err(|err| TerraformError::discriminated(err, T::NAME, operation, "sep-id-parts"))
    }

    /// Whether moving from `prior` to `planned` sends a patch
    ///
    /// Bodies that cannot be marshalled count as a change; the update reports the error.
    fn patches(prior: &T::State, planned: &T::State) -> bool {
        match (to_body(&T::to_model(prior)), to_body(&T::to_model(planned))) {
            (Ok(prior), Ok(planned)) => !merge_patch(&prior, &planned, T::PATCHABLE).is_empty(),
            _ => true,
        }
    }

    fn failed(err: ApiError, verb: &str, operation: &'static str) -> TerraformError {
        let summary = format!("{verb}{} failed: {err}", T::ENTITY);
        TerraformError::new(err, summary, T::NAME, operation)
    }

    async fn fetch(&self, mut state: T::State) -> Result<Option<T::State>, TerraformError> {
        let client = self.client("read")?;
        let path = Self::location(&state, "read")?;

        match client.get::<T::Model>(&path, env(T::env(&state))).await {
            Ok(model) => {
                T::refresh(&mut state, &model);
                Ok(Some(state))
            }
            Err(err) if err.is_not_found() => {
                warn!(resource = T::NAME, %path, "entity not found, removing it from state");
                Ok(None)
            }
            Err(err) => Err(Self::failed(err, "Get", "read")),
        }
    }

    async fn insert(&self, planned: T::State) -> Result<T::State, TerraformError> {
        let client = self.client("create")?;
        let path = T::collection(&planned)
            .map_err(|err| TerraformError::discriminated(err, T::NAME, "create", "build-path"))?;
        let body = to_body(&T::to_model(&planned))
            .map_err(|err| TerraformError::discriminated(err, T::NAME, "create", "marshal-body"))?;

        let created: T::Model = client
            .create(&path, env(T::env(&planned)), &body)
            .await
            .map_err(|err| Self::failed(err, "Create", "create"))?;

        let id = T::resource_id(&planned, &created).ok_or_else(|| {
            TerraformError::message(
                "The service response does not identify the created entity",
                T::NAME,
                "create",
                "set-id",
            )
        })?;

        let mut state = planned;
        *T::id_mut(&mut state) = Value::Value(id);
        T::apply(&mut state, Some(&created));
        Ok(state)
    }

    async fn modify(&self, prior: T::State, planned: T::State) -> Result<T::State, TerraformError> {
        let client = self.client("update")?;
        let path = Self::location(&prior, "update")?;

        let marshal = |state: &T::State| {
            to_body(&T::to_model(state))
                .map_err(|err| TerraformError::discriminated(err, T::NAME, "update", "marshal-body"))
        };
        let patch = merge_patch(&marshal(&prior)?, &marshal(&planned)?, T::PATCHABLE);

        let mut state = planned;
        if patch.is_empty() {
            debug!(resource = T::NAME, %path, "no patchable change");
            T::apply(&mut state, None);
            return Ok(state);
        }

        let updated: T::Model = client
            .patch(&path, env(T::env(&state)), &patch)
            .await
            .map_err(|err| Self::failed(err, "Update", "update"))?;
        T::apply(&mut state, Some(&updated));
        Ok(state)
    }

    async fn remove(&self, state: T::State) -> Result<(), TerraformError> {
        let client = self.client("delete")?;
        let path = Self::location(&state, "delete")?;

        match client.delete(&path, env(T::env(&state))).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_not_found() => {
                warn!(resource = T::NAME, %path, "entity already deleted");
                Ok(())
            }
            Err(err) => Err(Self::failed(err, "Delete", "delete")),
        }
    }
}

fn env(value: &Value<String>) -> Option<&str> {
    match value {
        Value::Value(env) => Some(env.as_str()),
        _ => None,
    }
}

#[async_trait]
impl<T: Onboarding> Resource for SellResource<T> {
    type State<'a> = T::State;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(T::State::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        config.validate(diags);

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        match self.fetch(state).await {
            Ok(state) => Some((state?, private_state)),
            Err(err) => {
                err.report(diags);
                None
            }
        }
    }

    async fn plan_create<'a>(
        &self,
        _diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = proposed_state;
        *T::id_mut(&mut state) = Value::Unknown;
        T::plan_computed(&mut state);

        Some((state, Default::default()))
    }

    async fn plan_update<'a>(
        &self,
        _diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(
        Self::State<'a>,
        Self::PrivateState<'a>,
        Vec<AttributePath>,
    )> {
        let trigger_replace = T::replace_paths(&prior_state, &proposed_state);

        let mut state = proposed_state;
        if trigger_replace.is_empty() && Self::patches(&prior_state, &state) {
            T::plan_changed(&mut state);
        }

        Some((state, prior_private_state, trigger_replace))
    }

    async fn plan_destroy<'a>(
        &self,
        _diags: &mut Diagnostics,
        _prior_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::PrivateState<'a>> {
        Some(prior_private_state)
    }

    async fn create<'a>(
        &self,
        diags: &mut Diagnostics,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        match self.insert(planned_state).await {
            Ok(state) => Some((state, planned_private_state)),
            Err(err) => {
                err.report(diags);
                None
            }
        }
    }

    async fn update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        match self.modify(prior_state, planned_state).await {
            Ok(state) => Some((state, planned_private_state)),
            Err(err) => {
                err.report(diags);
                None
            }
        }
    }

    async fn destroy<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        _planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<()> {
        match self.remove(state).await {
            Ok(()) => Some(()),
            Err(err) => {
                err.report(diags);
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        match T::import(&id) {
            Ok(state) => Some((state, Default::default())),
            Err(err) => {
                TerraformError::discriminated(err, T::NAME, "import", "sep-id-parts").report(diags);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use tf_provider::schema::Block;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::tests::client_for;
    use crate::convert::{string, string_value};
    use crate::onboarding::{fill, replace_if_changed};
    use crate::utils::{split_id, IdError};

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    struct WidgetState {
        id: Value<String>,
        env: Value<String>,
        name: Value<String>,
        color: Value<String>,
        url: Value<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct WidgetModel {
        id: Option<String>,
        name: Option<String>,
        color: Option<String>,
        url: Option<String>,
    }

    impl WithSchema for WidgetState {
        fn schema() -> Schema {
            Schema {
                version: 1,
                block: Block::default(),
            }
        }
    }

    impl WithValidate for WidgetState {
        fn validate(&self, _diags: &mut Diagnostics) {}
    }

    #[derive(Debug, Default)]
    struct Widget;

    impl Onboarding for Widget {
        const NAME: &'static str = "partnercentersell_widget";
        const ENTITY: &'static str = "Widget";
        const PATCHABLE: &'static [&'static str] = &["color"];

        type State = WidgetState;
        type Model = WidgetModel;

        fn id(state: &WidgetState) -> &Value<String> {
            &state.id
        }
        fn id_mut(state: &mut WidgetState) -> &mut Value<String> {
            &mut state.id
        }
        fn env(state: &WidgetState) -> &Value<String> {
            &state.env
        }
        fn collection(_state: &WidgetState) -> Result<String, IdError> {
            Ok("/widgets".to_owned())
        }
        fn location(id: &str) -> Result<String, IdError> {
            let [widget_id] = split_id(id, ["widget_id"])?;
            Ok(format!("/widgets/{widget_id}"))
        }
        fn resource_id(_state: &WidgetState, created: &WidgetModel) -> Option<String> {
            created.id.clone()
        }
        fn to_model(state: &WidgetState) -> WidgetModel {
            WidgetModel {
                id: None,
                name: string(&state.name),
                color: string(&state.color),
                url: None,
            }
        }
        fn refresh(state: &mut WidgetState, model: &WidgetModel) {
            state.name = string_value(&model.name);
            state.color = string_value(&model.color);
            state.url = string_value(&model.url);
        }
        fn plan_computed(state: &mut WidgetState) {
            state.url = Value::Unknown;
        }
        fn apply(state: &mut WidgetState, model: Option<&WidgetModel>) {
            if let Some(model) = model {
                fill(&mut state.url, string_value(&model.url));
            }
            crate::convert::settle(&mut state.url);
        }
        fn replace_paths(prior: &WidgetState, planned: &WidgetState) -> Vec<AttributePath> {
            let mut paths = Vec::new();
            replace_if_changed(&mut paths, "name", &prior.name, &planned.name);
            paths
        }
        fn import(id: &str) -> Result<WidgetState, IdError> {
            split_id(id, ["widget_id"])?;
            Ok(WidgetState {
                id: Value::Value(id.to_owned()),
                ..Default::default()
            })
        }
    }

    fn known(value: &str) -> Value<String> {
        Value::Value(value.to_owned())
    }

    fn widget(id: Value<String>, color: Value<String>) -> WidgetState {
        WidgetState {
            id,
            env: Value::Null,
            name: known("w"),
            color,
            url: known("https://w1"),
        }
    }

    async fn resource_for(server: &MockServer) -> SellResource<Widget> {
        let handle = ClientHandle::default();
        handle.set(Arc::new(client_for(server, None))).unwrap();
        SellResource::new(handle)
    }

    #[tokio::test]
    async fn create_fills_computed_attributes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/widgets"))
            .and(body_json(json!({"name": "w", "color": "red"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "w1",
                "name": "w",
                "color": "red",
                "url": "https://w1",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resource = resource_for(&server).await;
        let mut diags = Diagnostics::default();
        let proposed = widget(Value::Null, known("red"));
        let proposed = WidgetState {
            url: Value::Null,
            ..proposed
        };

        let (planned, _) = resource
            .plan_create(&mut diags, proposed.clone(), proposed, Default::default())
            .await
            .unwrap();
        assert!(planned.id.is_unknown());
        assert!(planned.url.is_unknown());

        let (state, _) = resource
            .create(
                &mut diags,
                planned.clone(),
                planned,
                Default::default(),
                Default::default(),
            )
            .await
            .unwrap();
        assert!(diags.errors.is_empty());
        assert_eq!(state, widget(known("w1"), known("red")));
    }

    #[tokio::test]
    async fn read_of_missing_entity_clears_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widgets/w1"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let resource = resource_for(&server).await;
        let mut diags = Diagnostics::default();
        let read = resource
            .read(
                &mut diags,
                widget(known("w1"), known("red")),
                Default::default(),
                Default::default(),
            )
            .await;
        assert!(read.is_none());
        assert!(diags.errors.is_empty());
    }

    #[tokio::test]
    async fn read_mirrors_the_entity() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widgets/w1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "w1",
                "name": "w",
                "color": "",
                "url": "https://w1",
            })))
            .mount(&server)
            .await;

        let resource = resource_for(&server).await;
        let mut diags = Diagnostics::default();
        let (state, _) = resource
            .read(
                &mut diags,
                widget(known("w1"), known("red")),
                Default::default(),
                Default::default(),
            )
            .await
            .unwrap();
        assert_eq!(state, widget(known("w1"), Value::Null));
    }

    #[tokio::test]
    async fn read_failures_are_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widgets/w1"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "errors": [{"code": "forbidden", "message": "Not allowed"}],
            })))
            .mount(&server)
            .await;

        let resource = resource_for(&server).await;
        let mut diags = Diagnostics::default();
        let read = resource
            .read(
                &mut diags,
                widget(known("w1"), known("red")),
                Default::default(),
                Default::default(),
            )
            .await;
        assert!(read.is_none());
        assert_eq!(diags.errors.len(), 1);
    }

    #[tokio::test]
    async fn update_sends_removed_fields_as_null() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/widgets/w1"))
            .and(body_json(json!({"color": null})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "w1",
                "name": "w",
                "url": "https://w1",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resource = resource_for(&server).await;
        let mut diags = Diagnostics::default();
        let prior = widget(known("w1"), known("red"));
        let planned = widget(known("w1"), Value::Null);

        let (state, _) = resource
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
        assert_eq!(state, planned);
    }

    #[tokio::test]
    async fn update_without_patchable_change_skips_the_call() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let resource = resource_for(&server).await;
        let mut diags = Diagnostics::default();
        let state = widget(known("w1"), known("red"));
        let planned = WidgetState {
            env: known("stage"),
            ..state.clone()
        };

        let updated = resource
            .update(
                &mut diags,
                state,
                planned.clone(),
                planned.clone(),
                Default::default(),
                Default::default(),
            )
            .await
            .unwrap();
        assert_eq!(updated.0, planned);
    }

    #[tokio::test]
    async fn non_patchable_changes_require_replacement() {
        let server = MockServer::start().await;
        let resource = resource_for(&server).await;
        let mut diags = Diagnostics::default();
        let prior = widget(known("w1"), known("red"));
        let proposed = WidgetState {
            name: known("renamed"),
            ..prior.clone()
        };

        let (_, _, replace) = resource
            .plan_update(
                &mut diags,
                prior,
                proposed.clone(),
                proposed,
                Default::default(),
                Default::default(),
            )
            .await
            .unwrap();
        assert_eq!(replace.len(), 1);
    }

    #[tokio::test]
    async fn destroy_tolerates_missing_entity() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/widgets/w1"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let resource = resource_for(&server).await;
        let mut diags = Diagnostics::default();
        let destroyed = resource
            .destroy(
                &mut diags,
                widget(known("w1"), known("red")),
                Default::default(),
                Default::default(),
            )
            .await;
        assert_eq!(destroyed, Some(()));
    }

    #[tokio::test]
    async fn unconfigured_provider_is_reported() {
        let resource = SellResource::<Widget>::new(ClientHandle::default());
        let mut diags = Diagnostics::default();
        let state = widget(known("w1"), known("red"));
        let destroyed = resource
            .destroy(&mut diags, state, Default::default(), Default::default())
            .await;
        assert_eq!(destroyed, None);
        assert_eq!(diags.errors.len(), 1);
    }

    #[tokio::test]
    async fn import_parses_the_id() {
        let resource = SellResource::<Widget>::new(ClientHandle::default());
        let mut diags = Diagnostics::default();

        let (state, _) = resource.import(&mut diags, "w1".to_owned()).await.unwrap();
        assert_eq!(state.id, known("w1"));

        assert!(resource
            .import(&mut diags, "w1/extra".to_owned())
            .await
            .is_none());
        assert_eq!(diags.errors.len(), 1);
    }
}
