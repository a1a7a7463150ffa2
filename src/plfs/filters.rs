//! Filter vocabulary for the MoSPI data tool.
//!
//! Every code here is an opaque string contract with the remote service;
//! nothing in this crate interprets them beyond passing them through.

use serde::Serialize;
use serde_json::Value;

/// Dataset name the dashboard queries.
pub const DATASET: &str = "PLFS";

/// Filter set for one data-tool invocation.
///
/// Multi-valued dimensions are comma-joined code lists, exactly as the
/// remote expects them. `None` fields are omitted from the request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlfsFilters {
    pub indicator_code: String,
    pub frequency_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_status_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub religion_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_category_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broad_industry_work_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broad_status_employment_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_section_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nic_group_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nco_division_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_type_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_size_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarter_code: Option<String>,
}

impl PlfsFilters {
    /// Build the argument object for the data tool, attaching pagination
    /// and output format.
    pub fn to_tool_arguments(&self, limit: u32, page: u32) -> Value {
        let mut filters = serde_json::to_value(self)
            .expect("filters are plain strings and always serialize");
        let map = filters
            .as_object_mut()
            .expect("filters serialize to an object");
        map.insert("limit".to_string(), Value::String(limit.to_string()));
        map.insert("page".to_string(), Value::String(page.to_string()));
        map.insert("Format".to_string(), Value::String("JSON".to_string()));

        serde_json::json!({ "dataset": DATASET, "filters": filters })
    }
}
