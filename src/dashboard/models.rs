//! View models consumed by the dashboard's presentation layer.
//!
//! Plain value structures with no identity beyond their natural keys;
//! serialized as camelCase to match the dashboard's JSON contract.

use serde::{Deserialize, Serialize};

/// Country-level headline metrics for the latest period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalSummary {
    pub unemployment_rate: f64,
    pub lfpr: f64,
    pub wpr: f64,
    pub male_lfpr: f64,
    pub female_lfpr: f64,
    #[serde(rename = "urbanUR")]
    pub urban_ur: f64,
    #[serde(rename = "ruralUR")]
    pub rural_ur: f64,
    /// Unemployment rate for the 15-29 age band.
    #[serde(rename = "youthUR")]
    pub youth_ur: f64,
    /// Not derivable from the rate indicators; always 0.
    pub total_labour_force: f64,
    pub period: String,
}

/// One row of the per-state employment table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateEmploymentData {
    pub state_code: String,
    pub state_name: String,
    pub unemployment_rate: f64,
    pub lfpr: f64,
    pub wpr: f64,
    pub male_lfpr: f64,
    pub female_lfpr: f64,
    pub urban_unemployment_rate: f64,
    pub rural_unemployment_rate: f64,
}

/// One row of the age-band table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroupData {
    pub age_group: String,
    pub unemployment_rate: f64,
    pub lfpr: f64,
    pub male_unemployment_rate: f64,
    pub female_unemployment_rate: f64,
}

/// Worker share of one industry sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorData {
    pub sector: String,
    pub percentage: f64,
    pub male_percentage: f64,
    pub female_percentage: f64,
    pub urban_percentage: f64,
    pub rural_percentage: f64,
}

/// Headline metrics for one annual period of the multi-year trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendData {
    pub period: String,
    /// Starting calendar year of the period, for sorting.
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarter: Option<u8>,
    pub unemployment_rate: f64,
    pub lfpr: f64,
    pub wpr: f64,
    #[serde(rename = "urbanUR")]
    pub urban_ur: f64,
    #[serde(rename = "ruralUR")]
    pub rural_ur: f64,
}

/// The full aggregate payload served to the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub national_summary: NationalSummary,
    pub state_data: Vec<StateEmploymentData>,
    pub age_group_data: Vec<AgeGroupData>,
    pub sector_data: Vec<SectorData>,
    pub trend_data: Vec<TrendData>,
}
