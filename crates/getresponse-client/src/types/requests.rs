/*
[INPUT]:  GetResponse request payload schema and serde requirements
[OUTPUT]: Typed request bodies for campaign, contact, custom field and from-field writes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new write endpoints are added
*/

use serde::{Deserialize, Serialize};

use super::enums::{CustomFieldType, OptinType};

/// Per-channel confirmation settings of a campaign (`optinTypes`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptinTypes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<OptinType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<OptinType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<OptinType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webform: Option<OptinType>,
}

impl OptinTypes {
    /// Settings for the email, import and webform channels; `api` is left
    /// to the account default.
    pub fn new(email: OptinType, import: OptinType, webform: OptinType) -> Self {
        Self {
            email: Some(email),
            api: None,
            import: Some(import),
            webform: Some(webform),
        }
    }

    pub fn with_api(mut self, api: OptinType) -> Self {
        self.api = Some(api);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optin_types: Option<OptinTypes>,
}

impl NewCampaign {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language_code: None,
            is_default: None,
            optin_types: None,
        }
    }

    pub fn language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = Some(code.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optin_types: Option<OptinTypes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistUpdate {
    pub masks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignReference {
    pub campaign_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldValue {
    pub custom_field_id: String,
    pub value: Vec<String>,
}

impl CustomFieldValue {
    pub fn new<I, S>(custom_field_id: impl Into<String>, value: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            custom_field_id: custom_field_id.into(),
            value: value.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub email: String,
    pub campaign: CampaignReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_cycle: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
}

impl NewContact {
    pub fn new(email: impl Into<String>, campaign_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            campaign: CampaignReference {
                campaign_id: campaign_id.into(),
            },
            name: None,
            day_of_cycle: None,
            ip_address: None,
            custom_field_values: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn day_of_cycle(mut self, day: u32) -> Self {
        self.day_of_cycle = Some(day);
        self
    }

    pub fn ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }

    pub fn custom_field(mut self, value: CustomFieldValue) -> Self {
        self.custom_field_values
            .get_or_insert_with(Vec::new)
            .push(value);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<CampaignReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_cycle: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
}

/// Body of `POST /contacts/{id}/custom-fields`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCustomFields {
    pub custom_field_values: Vec<CustomFieldValue>,
}

impl ContactCustomFields {
    pub fn new(values: Vec<CustomFieldValue>) -> Self {
        Self {
            custom_field_values: values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: CustomFieldType,
    pub hidden: bool,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldUpdate {
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFromField {
    pub name: String,
    pub email: String,
}
