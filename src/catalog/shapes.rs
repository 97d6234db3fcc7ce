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

//! Blocks shared by the catalog products, plans and deployments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tf_provider::map;
use tf_provider::value::{Value, ValueList};

use crate::convert::{
    known, nested, nested_list, nested_list_value, nested_value, string, string_map,
    string_map_value, string_value, value, Mirror, StringMap,
};
use crate::schema::{boolean, list, number, single, string as string_attr, string_map as map_attr, Attributes, Optional, Required};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewUi {
    pub en: Value<OverviewUiContent>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewUiModel {
    pub en: Option<OverviewUiContentModel>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewUiContent {
    pub display_name: Value<String>,
    pub description: Value<String>,
    pub long_description: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewUiContentModel {
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
}

impl OverviewUi {
    pub(crate) fn attributes() -> Attributes {
        map! {
            "en" => single(
                Optional,
                "Translated details about the service, for example, display name, short description, and long description.",
                map! {
                    "display_name" => string_attr(Optional, "The display name of the product."),
                    "description" => string_attr(
                        Optional,
                        "The short description of the product that is displayed in your catalog entry.",
                    ),
                    "long_description" => string_attr(
                        Optional,
                        "The detailed description of your product that is displayed at the beginning of your product page in the catalog.",
                    ),
                },
            ),
        }
    }
}

impl Mirror for OverviewUi {
    type Model = OverviewUiModel;

    fn to_model(&self) -> OverviewUiModel {
        OverviewUiModel {
            en: nested(&self.en),
        }
    }

    fn from_model(model: &OverviewUiModel) -> Self {
        Self {
            en: nested_value(&model.en),
        }
    }
}

impl Mirror for OverviewUiContent {
    type Model = OverviewUiContentModel;

    fn to_model(&self) -> OverviewUiContentModel {
        OverviewUiContentModel {
            display_name: string(&self.display_name),
            description: string(&self.description),
            long_description: string(&self.long_description),
        }
    }

    fn from_model(model: &OverviewUiContentModel) -> Self {
        Self {
            display_name: string_value(&model.display_name),
            description: string_value(&model.description),
            long_description: string_value(&model.long_description),
        }
    }
}

/// Owner of a catalog entry
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProvider {
    pub name: Value<String>,
    pub email: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProviderModel {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ObjectProvider {
    pub(crate) fn attributes() -> Attributes {
        map! {
            "name" => string_attr(Optional, "The name of the provider."),
            "email" => string_attr(Optional, "The email address of the provider."),
        }
    }
}

impl Mirror for ObjectProvider {
    type Model = ObjectProviderModel;

    fn to_model(&self) -> ObjectProviderModel {
        ObjectProviderModel {
            name: string(&self.name),
            email: string(&self.email),
        }
    }

    fn from_model(model: &ObjectProviderModel) -> Self {
        Self {
            name: string_value(&model.name),
            email: string_value(&model.email),
        }
    }
}

/// UI metadata of a catalog entry
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataUi {
    pub strings: Value<UiStrings>,
    pub urls: Value<UiUrls>,
    pub hidden: Value<bool>,
    pub side_by_side_index: Value<f64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataUiModel {
    pub strings: Option<UiStringsModel>,
    pub urls: Option<UiUrlsModel>,
    pub hidden: Option<bool>,
    pub side_by_side_index: Option<f64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiStrings {
    pub en: Value<UiStringsContent>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiStringsModel {
    pub en: Option<UiStringsContentModel>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiStringsContent {
    pub bullets: ValueList<Value<Bullet>>,
    pub media: ValueList<Value<MediaItem>>,
    pub navigation_items: ValueList<Value<NavigationItem>>,
    pub embeddable_dashboard: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiStringsContentModel {
    pub bullets: Option<Vec<BulletModel>>,
    pub media: Option<Vec<MediaItemModel>>,
    pub navigation_items: Option<Vec<NavigationItemModel>>,
    pub embeddable_dashboard: Option<String>,
}

/// Highlighted feature
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub description: Value<String>,
    pub description_i18n: StringMap,
    pub title: Value<String>,
    pub title_i18n: StringMap,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletModel {
    pub description: Option<String>,
    pub description_i18n: Option<BTreeMap<String, String>>,
    pub title: Option<String>,
    pub title_i18n: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub caption: Value<String>,
    pub caption_i18n: StringMap,
    pub thumbnail: Value<String>,
    pub r#type: Value<String>,
    pub url: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItemModel {
    pub caption: Option<String>,
    pub caption_i18n: Option<BTreeMap<String, String>>,
    pub thumbnail: Option<String>,
    pub r#type: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: Value<String>,
    pub url: Value<String>,
    pub label: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItemModel {
    pub id: Option<String>,
    pub url: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiUrls {
    pub doc_url: Value<String>,
    pub apidocs_url: Value<String>,
    pub terms_url: Value<String>,
    pub instructions_url: Value<String>,
    pub catalog_details_url: Value<String>,
    pub custom_create_page_url: Value<String>,
    pub dashboard: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiUrlsModel {
    pub doc_url: Option<String>,
    pub apidocs_url: Option<String>,
    pub terms_url: Option<String>,
    pub instructions_url: Option<String>,
    pub catalog_details_url: Option<String>,
    pub custom_create_page_url: Option<String>,
    pub dashboard: Option<String>,
}

impl MetadataUi {
    pub(crate) fn attributes() -> Attributes {
        map! {
            "strings" => single(Optional, "The data strings.", map! {
                "en" => single(
                    Optional,
                    "Translated content of additional information about the service.",
                    UiStringsContent::attributes(),
                ),
            }),
            "urls" => single(Optional, "Metadata with URLs related to a service.", UiUrls::attributes()),
            "hidden" => boolean(Optional, "Whether the object is hidden from the consumption catalog."),
            "side_by_side_index" => number(
                Optional,
                "When the objects are listed side-by-side, this value controls the ordering.",
            ),
        }
    }
}

impl UiStringsContent {
    fn attributes() -> Attributes {
        map! {
            "bullets" => list(
                Optional,
                "The list of features that highlights your product's attributes and benefits for users.",
                map! {
                    "description" => string_attr(Optional, "The description about the features of the product."),
                    "description_i18n" => map_attr(
                        Optional,
                        "The description about the features of the product in translation.",
                    ),
                    "title" => string_attr(Optional, "The descriptive title for the feature."),
                    "title_i18n" => map_attr(Optional, "The descriptive title for the feature in translation."),
                },
            ),
            "media" => list(Optional, "The list of supporting media for this product.", map! {
                "caption" => string_attr(
                    Required,
                    "Provide a descriptive caption that indicates what the media illustrates.",
                ),
                "caption_i18n" => map_attr(Optional, "The brief explanation for your images and videos in translation."),
                "thumbnail" => string_attr(Optional, "The reduced-size version of your images and videos."),
                "type" => string_attr(Required, "The type of the media."),
                "url" => string_attr(Required, "The URL that links to the media that shows off the product."),
            }),
            "navigation_items" => list(Optional, "List of custom navigation panel.", map! {
                "id" => string_attr(Optional, "Id of custom navigation panel."),
                "url" => string_attr(Optional, "Url for custom navigation panel."),
                "label" => string_attr(Optional, "Label of custom navigation panel."),
            }),
            "embeddable_dashboard" => string_attr(
                Optional,
                "On a service kind record this controls if your service has a custom dashboard or Resource Detail page.",
            ),
        }
    }
}

impl UiUrls {
    fn attributes() -> Attributes {
        map! {
            "doc_url" => string_attr(Optional, "The URL for your product's documentation."),
            "apidocs_url" => string_attr(Optional, "The URL for your product's API documentation."),
            "terms_url" => string_attr(Optional, "The URL for your product's end user license agreement."),
            "instructions_url" => string_attr(
                Optional,
                "Controls the Getting Started tab on the Resource Details page.",
            ),
            "catalog_details_url" => string_attr(
                Optional,
                "Controls the Provisioning page URL, if set the assumption is that this URL is the provisioning URL for your service.",
            ),
            "custom_create_page_url" => string_attr(
                Optional,
                "Controls the Provisioning page URL, if set the assumption is that this URL is the provisioning URL for your service.",
            ),
            "dashboard" => string_attr(
                Optional,
                "Controls if your service has a custom dashboard or Resource Detail page.",
            ),
        }
    }
}

impl Mirror for MetadataUi {
    type Model = MetadataUiModel;

    fn to_model(&self) -> MetadataUiModel {
        MetadataUiModel {
            strings: nested(&self.strings),
            urls: nested(&self.urls),
            hidden: known(&self.hidden),
            side_by_side_index: known(&self.side_by_side_index),
        }
    }

    fn from_model(model: &MetadataUiModel) -> Self {
        Self {
            strings: nested_value(&model.strings),
            urls: nested_value(&model.urls),
            hidden: value(&model.hidden),
            side_by_side_index: value(&model.side_by_side_index),
        }
    }
}

impl Mirror for UiStrings {
    type Model = UiStringsModel;

    fn to_model(&self) -> UiStringsModel {
        UiStringsModel {
            en: nested(&self.en),
        }
    }

    fn from_model(model: &UiStringsModel) -> Self {
        Self {
            en: nested_value(&model.en),
        }
    }
}

impl Mirror for UiStringsContent {
    type Model = UiStringsContentModel;

    fn to_model(&self) -> UiStringsContentModel {
        UiStringsContentModel {
            bullets: nested_list(&self.bullets),
            media: nested_list(&self.media),
            navigation_items: nested_list(&self.navigation_items),
            embeddable_dashboard: string(&self.embeddable_dashboard),
        }
    }

    fn from_model(model: &UiStringsContentModel) -> Self {
        Self {
            bullets: nested_list_value(&model.bullets),
            media: nested_list_value(&model.media),
            navigation_items: nested_list_value(&model.navigation_items),
            embeddable_dashboard: string_value(&model.embeddable_dashboard),
        }
    }
}

impl Mirror for Bullet {
    type Model = BulletModel;

    fn to_model(&self) -> BulletModel {
        BulletModel {
            description: string(&self.description),
            description_i18n: string_map(&self.description_i18n),
            title: string(&self.title),
            title_i18n: string_map(&self.title_i18n),
        }
    }

    fn from_model(model: &BulletModel) -> Self {
        Self {
            description: string_value(&model.description),
            description_i18n: string_map_value(&model.description_i18n),
            title: string_value(&model.title),
            title_i18n: string_map_value(&model.title_i18n),
        }
    }
}

impl Mirror for MediaItem {
    type Model = MediaItemModel;

    fn to_model(&self) -> MediaItemModel {
        MediaItemModel {
            caption: string(&self.caption),
            caption_i18n: string_map(&self.caption_i18n),
            thumbnail: string(&self.thumbnail),
            r#type: string(&self.r#type),
            url: string(&self.url),
        }
    }

    fn from_model(model: &MediaItemModel) -> Self {
        Self {
            caption: string_value(&model.caption),
            caption_i18n: string_map_value(&model.caption_i18n),
            thumbnail: string_value(&model.thumbnail),
            r#type: string_value(&model.r#type),
            url: string_value(&model.url),
        }
    }
}

impl Mirror for NavigationItem {
    type Model = NavigationItemModel;

    fn to_model(&self) -> NavigationItemModel {
        NavigationItemModel {
            id: string(&self.id),
            url: string(&self.url),
            label: string(&self.label),
        }
    }

    fn from_model(model: &NavigationItemModel) -> Self {
        Self {
            id: string_value(&model.id),
            url: string_value(&model.url),
            label: string_value(&model.label),
        }
    }
}

impl Mirror for UiUrls {
    type Model = UiUrlsModel;

    fn to_model(&self) -> UiUrlsModel {
        UiUrlsModel {
            doc_url: string(&self.doc_url),
            apidocs_url: string(&self.apidocs_url),
            terms_url: string(&self.terms_url),
            instructions_url: string(&self.instructions_url),
            catalog_details_url: string(&self.catalog_details_url),
            custom_create_page_url: string(&self.custom_create_page_url),
            dashboard: string(&self.dashboard),
        }
    }

    fn from_model(model: &UiUrlsModel) -> Self {
        Self {
            doc_url: string_value(&model.doc_url),
            apidocs_url: string_value(&model.apidocs_url),
            terms_url: string_value(&model.terms_url),
            instructions_url: string_value(&model.instructions_url),
            catalog_details_url: string_value(&model.catalog_details_url),
            custom_create_page_url: string_value(&model.custom_create_page_url),
            dashboard: string_value(&model.dashboard),
        }
    }
}

/// Resource controller capabilities of a catalog entry
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceMetadata {
    pub rc_provisionable: Value<bool>,
    pub iam_compatible: Value<bool>,
    pub bindable: Value<bool>,
    pub plan_updateable: Value<bool>,
    pub service_key_supported: Value<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceMetadataModel {
    pub rc_provisionable: Option<bool>,
    pub iam_compatible: Option<bool>,
    pub bindable: Option<bool>,
    pub plan_updateable: Option<bool>,
    pub service_key_supported: Option<bool>,
}

impl ServiceMetadata {
    pub(crate) fn attributes() -> Attributes {
        map! {
            "rc_provisionable" => boolean(
                Optional,
                "Whether the service is provisionable by the resource controller service.",
            ),
            "iam_compatible" => boolean(Optional, "Whether the service is compatible with the IAM service."),
            "bindable" => boolean(Optional, "Deprecated. Controls the Connections tab on the Resource Details page."),
            "plan_updateable" => boolean(
                Optional,
                "Indicates plan update support and controls the Plan tab on the Resource Details page.",
            ),
            "service_key_supported" => boolean(
                Optional,
                "Indicates service credentials support and controls the Service Credential tab on Resource Details page.",
            ),
        }
    }
}

impl Mirror for ServiceMetadata {
    type Model = ServiceMetadataModel;

    fn to_model(&self) -> ServiceMetadataModel {
        ServiceMetadataModel {
            rc_provisionable: known(&self.rc_provisionable),
            iam_compatible: known(&self.iam_compatible),
            bindable: known(&self.bindable),
            plan_updateable: known(&self.plan_updateable),
            service_key_supported: known(&self.service_key_supported),
        }
    }

    fn from_model(model: &ServiceMetadataModel) -> Self {
        Self {
            rc_provisionable: value(&model.rc_provisionable),
            iam_compatible: value(&model.iam_compatible),
            bindable: value(&model.bindable),
            plan_updateable: value(&model.plan_updateable),
            service_key_supported: value(&model.service_key_supported),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::patch::to_body;

    #[test]
    fn ui_strings_keep_their_wire_names() {
        let ui = MetadataUi {
            strings: Value::Value(UiStrings {
                en: Value::Value(UiStringsContent {
                    media: Value::Value(vec![Value::Value(MediaItem {
                        caption: Value::Value("Dashboard".to_owned()),
                        r#type: Value::Value("image".to_owned()),
                        url: Value::Value("https://example.com/dashboard.png".to_owned()),
                        ..Default::default()
                    })]),
                    ..Default::default()
                }),
            }),
            hidden: Value::Value(false),
            ..Default::default()
        };

        assert_eq!(
            serde_json::Value::Object(to_body(&ui.to_model()).unwrap()),
            json!({
                "strings": {"en": {"media": [{
                    "caption": "Dashboard",
                    "type": "image",
                    "url": "https://example.com/dashboard.png",
                }]}},
                "hidden": false,
            })
        );
    }

    #[test]
    fn read_back_drops_empty_content() {
        let model: MetadataUiModel = serde_json::from_value(json!({
            "strings": {"en": {"bullets": [], "embeddable_dashboard": ""}},
            "urls": {"doc_url": "https://docs"},
            "side_by_side_index": 2.0,
        }))
        .unwrap();

        let ui = MetadataUi::from_model(&model);
        assert_eq!(
            ui.strings,
            Value::Value(UiStrings {
                en: Value::Value(UiStringsContent::default()),
            })
        );
        assert_eq!(
            ui.urls,
            Value::Value(UiUrls {
                doc_url: Value::Value("https://docs".to_owned()),
                ..Default::default()
            })
        );
        assert_eq!(ui.side_by_side_index, Value::Value(2.0));
        assert_eq!(ui.hidden, Value::Null);
    }
}
