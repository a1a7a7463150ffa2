//! Raw PLFS survey records and criteria matching.
//!
//! Records come back from the MoSPI data tool as flat rows with string-typed
//! dimension fields. Coverage is sparse for some dimension crossings, so
//! value extraction degrades to 0 instead of failing.

use serde::{Deserialize, Serialize};

/// One row of PLFS survey data as returned by the remote data tool.
///
/// Field spellings mirror the remote payload, which mixes naming styles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlfsRecord {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub indicator: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub sector: String,
    #[serde(rename = "AgeGroup", default)]
    pub age_group: String,
    #[serde(default)]
    pub weekly_status: String,
    #[serde(default)]
    pub religion: String,
    #[serde(rename = "socialGroup", default)]
    pub social_group: String,
    #[serde(rename = "General_Education", default)]
    pub general_education: String,
    #[serde(default)]
    pub quarter: String,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub unit: String,

    // Present only for worker-distribution queries (indicator 4)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broad_industry_work: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broad_status_employment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nic_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nco_division: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise_size: Option<String>,
}

impl PlfsRecord {
    /// The record's numeric value, parsed defensively.
    pub fn numeric_value(&self) -> f64 {
        parse_value(&self.value)
    }
}

/// Parse a PLFS value string into a number.
///
/// The dataset uses placeholders like "N/A" or "--" where a crossing has no
/// coverage; these normalize to 0 rather than erroring.
pub fn parse_value(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Extract the numeric value of an optional record lookup, defaulting to 0.
pub fn value_or_zero(record: Option<&PlfsRecord>) -> f64 {
    record.map(PlfsRecord::numeric_value).unwrap_or(0.0)
}

/// Exact-equality match criteria over record dimension fields.
///
/// Only the fields that have been set participate in matching. Built with
/// the `with_*` methods so call sites read like the filter they express.
#[derive(Debug, Clone, Default)]
pub struct RecordCriteria {
    state: Option<String>,
    gender: Option<String>,
    sector: Option<String>,
    age_group: Option<String>,
    year: Option<String>,
    quarter: Option<String>,
    nic_group: Option<String>,
}

impl RecordCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn with_age_group(mut self, age_group: impl Into<String>) -> Self {
        self.age_group = Some(age_group.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_quarter(mut self, quarter: impl Into<String>) -> Self {
        self.quarter = Some(quarter.into());
        self
    }

    pub fn with_nic_group(mut self, nic_group: impl Into<String>) -> Self {
        self.nic_group = Some(nic_group.into());
        self
    }

    /// True when every set field equals the record's field of the same name.
    pub fn matches(&self, record: &PlfsRecord) -> bool {
        fn check(criterion: &Option<String>, field: &str) -> bool {
            criterion.as_deref().map_or(true, |c| c == field)
        }

        check(&self.state, &record.state)
            && check(&self.gender, &record.gender)
            && check(&self.sector, &record.sector)
            && check(&self.age_group, &record.age_group)
            && check(&self.year, &record.year)
            && check(&self.quarter, &record.quarter)
            && check(
                &self.nic_group,
                record.nic_group.as_deref().unwrap_or(""),
            )
    }
}

/// First record matching the criteria, in input order.
pub fn find_record<'a>(records: &'a [PlfsRecord], criteria: &RecordCriteria) -> Option<&'a PlfsRecord> {
    records.iter().find(|r| criteria.matches(r))
}

/// All records matching the criteria, preserving input order.
pub fn filter_records<'a>(records: &'a [PlfsRecord], criteria: &RecordCriteria) -> Vec<&'a PlfsRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

/// Page metadata attached to a data-tool response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub page: u32,
    #[serde(rename = "totalRecords", default)]
    pub total_records: u32,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
    #[serde(rename = "recordPerPage", default)]
    pub record_per_page: u32,
}

/// Envelope of a data-tool response.
#[derive(Debug, Clone, Deserialize)]
pub struct PlfsDataResponse {
    #[serde(default)]
    pub data: Vec<PlfsRecord>,
    /// Absent when the remote returns an unpaginated result set.
    #[serde(default)]
    pub meta_data: Option<PageMeta>,
    #[serde(default)]
    pub msg: Option<String>,
    /// Three-state success flag: the remote omits it on success sometimes
    /// and sets it to `false` on failure. Only an explicit `false` is
    /// treated as failure; absent is treated as success because the true
    /// contract of the field is not documented.
    #[serde(rename = "statusCode", default)]
    pub status_code: Option<bool>,
}

impl PlfsDataResponse {
    pub fn is_failure(&self) -> bool {
        self.status_code == Some(false)
    }
}
