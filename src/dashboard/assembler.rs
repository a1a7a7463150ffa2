//! Dashboard data assembly.
//!
//! Composes filtered queries against the PLFS dataset into the five
//! aggregate views, with per-aggregate caching. The sub-queries inside one
//! aggregate are awaited together; the five aggregates themselves run
//! strictly sequentially so one assembly pass never races competing
//! session workflows into the remote's rate limiter. That costs latency on
//! purpose.

use super::models::{
    AgeGroupData, DashboardData, NationalSummary, SectorData, StateEmploymentData, TrendData,
};
use crate::cache::{build_key, McpCache};
use crate::mcp::PlfsSource;
use crate::plfs::codes::{
    period_start_year, StateInfo, AGE_15_PLUS, AGE_15_PLUS_AND_YOUTH, AGE_ALL_BANDS, AGE_BANDS,
    ALL_STATES, ALL_YEARS, EDUCATION_ALL, FREQUENCY_ANNUAL, GENDER_ALL, GENDER_PERSON,
    INDICATOR_LFPR, INDICATOR_UR, INDICATOR_WORKER_DISTRIBUTION, INDICATOR_WPR, LABEL_AGE_15_PLUS,
    LABEL_AGE_YOUTH, LABEL_ALL_INDIA, LABEL_GENDER_FEMALE, LABEL_GENDER_MALE, LABEL_GENDER_PERSON,
    LABEL_QUARTER_ALL, LABEL_SECTOR_COMBINED, LABEL_SECTOR_RURAL, LABEL_SECTOR_URBAN, LATEST_YEAR,
    NIC_GROUP_CODES, NIC_SECTOR_GROUPS, RELIGION_ALL, SECTOR_ALL, SECTOR_COMBINED,
    SOCIAL_CATEGORY_ALL, STATE_ALL_INDIA, STATE_MAP, STATE_NAMES, WEEKLY_STATUS_ALL, YEARS,
};
use crate::plfs::{find_record, value_or_zero, PlfsFilters, PlfsRecord, RecordCriteria};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Assembles the five dashboard aggregates from a PLFS record source.
///
/// Owns its cache; construct one per process (or per test) rather than
/// sharing global state.
pub struct DashboardAssembler {
    source: Arc<dyn PlfsSource>,
    cache: McpCache,
}

impl DashboardAssembler {
    pub fn new(source: Arc<dyn PlfsSource>) -> Self {
        Self {
            source,
            cache: McpCache::new(),
        }
    }

    /// Drop all cached aggregates, forcing the next assembly to hit the
    /// remote.
    pub fn invalidate_cache(&self) {
        self.cache.clear();
    }

    /// Fetch all five aggregates, strictly in sequence.
    pub async fn fetch_all(&self) -> Result<DashboardData> {
        let national_summary = self.fetch_national_summary().await?;
        let state_data = self.fetch_state_data().await?;
        let age_group_data = self.fetch_age_group_data().await?;
        let sector_data = self.fetch_sector_data().await?;
        let trend_data = self.fetch_trend_data().await?;

        Ok(DashboardData {
            national_summary,
            state_data,
            age_group_data,
            sector_data,
            trend_data,
        })
    }

    /// National headline metrics for the latest period.
    pub async fn fetch_national_summary(&self) -> Result<NationalSummary> {
        let cache_key = build_key(&[Some("nationalSummary"), Some(LATEST_YEAR)]);
        if let Some(cached) = self.cache.get::<NationalSummary>(&cache_key) {
            debug!("national summary served from cache");
            return Ok(cached);
        }

        let base = national_base_filters();
        let ur_filters = PlfsFilters {
            indicator_code: INDICATOR_UR.to_string(),
            gender_code: Some(GENDER_PERSON.to_string()),
            sector_code: Some(SECTOR_ALL.to_string()),
            age_code: Some(AGE_15_PLUS_AND_YOUTH.to_string()),
            ..base.clone()
        };
        let lfpr_filters = PlfsFilters {
            indicator_code: INDICATOR_LFPR.to_string(),
            gender_code: Some(GENDER_ALL.to_string()),
            sector_code: Some(SECTOR_COMBINED.to_string()),
            age_code: Some(AGE_15_PLUS.to_string()),
            ..base.clone()
        };
        let wpr_filters = PlfsFilters {
            indicator_code: INDICATOR_WPR.to_string(),
            gender_code: Some(GENDER_PERSON.to_string()),
            sector_code: Some(SECTOR_COMBINED.to_string()),
            age_code: Some(AGE_15_PLUS.to_string()),
            ..base
        };

        let (ur_records, lfpr_records, wpr_records) = tokio::try_join!(
            self.source.fetch_all_records(&ur_filters),
            self.source.fetch_all_records(&lfpr_filters),
            self.source.fetch_all_records(&wpr_filters),
        )
        .context("fetching national summary indicators")?;

        let summary = national_summary_from_records(&ur_records, &lfpr_records, &wpr_records);

        self.cache.set(&cache_key, &summary);
        Ok(summary)
    }

    /// Per-state employment table for the latest period.
    pub async fn fetch_state_data(&self) -> Result<Vec<StateEmploymentData>> {
        let cache_key = build_key(&[Some("stateData"), Some(LATEST_YEAR)]);
        if let Some(cached) = self.cache.get::<Vec<StateEmploymentData>>(&cache_key) {
            debug!("state data served from cache");
            return Ok(cached);
        }

        let base = PlfsFilters {
            state_code: Some(ALL_STATES.to_string()),
            age_code: Some(AGE_15_PLUS.to_string()),
            ..latest_year_filters()
        };

        let ur_filters = PlfsFilters {
            indicator_code: INDICATOR_UR.to_string(),
            gender_code: Some(GENDER_ALL.to_string()),
            sector_code: Some(SECTOR_ALL.to_string()),
            ..base.clone()
        };
        let lfpr_filters = PlfsFilters {
            indicator_code: INDICATOR_LFPR.to_string(),
            gender_code: Some(GENDER_ALL.to_string()),
            sector_code: Some(SECTOR_COMBINED.to_string()),
            ..base.clone()
        };
        let wpr_filters = PlfsFilters {
            indicator_code: INDICATOR_WPR.to_string(),
            gender_code: Some(GENDER_PERSON.to_string()),
            sector_code: Some(SECTOR_COMBINED.to_string()),
            ..base
        };

        let (ur_records, lfpr_records, wpr_records) = tokio::try_join!(
            self.source.fetch_all_records(&ur_filters),
            self.source.fetch_all_records(&lfpr_filters),
            self.source.fetch_all_records(&wpr_filters),
        )
        .context("fetching state-level indicators")?;

        let result = state_data_from_records(&ur_records, &lfpr_records, &wpr_records);
        info!("assembled state table with {} states", result.len());

        self.cache.set(&cache_key, &result);
        Ok(result)
    }

    /// Unemployment and participation by age band.
    pub async fn fetch_age_group_data(&self) -> Result<Vec<AgeGroupData>> {
        let cache_key = build_key(&[Some("ageGroupData"), Some(LATEST_YEAR)]);
        if let Some(cached) = self.cache.get::<Vec<AgeGroupData>>(&cache_key) {
            debug!("age group data served from cache");
            return Ok(cached);
        }

        let base = PlfsFilters {
            state_code: Some(STATE_ALL_INDIA.to_string()),
            sector_code: Some(SECTOR_COMBINED.to_string()),
            age_code: Some(AGE_ALL_BANDS.to_string()),
            ..latest_year_filters()
        };

        let ur_filters = PlfsFilters {
            indicator_code: INDICATOR_UR.to_string(),
            gender_code: Some(GENDER_ALL.to_string()),
            ..base.clone()
        };
        let lfpr_filters = PlfsFilters {
            indicator_code: INDICATOR_LFPR.to_string(),
            gender_code: Some(GENDER_PERSON.to_string()),
            ..base
        };

        let (ur_records, lfpr_records) = tokio::try_join!(
            self.source.fetch_all_records(&ur_filters),
            self.source.fetch_all_records(&lfpr_filters),
        )
        .context("fetching age band indicators")?;

        let result = age_group_data_from_records(&ur_records, &lfpr_records);

        self.cache.set(&cache_key, &result);
        Ok(result)
    }

    /// Worker distribution across NIC industry groupings.
    pub async fn fetch_sector_data(&self) -> Result<Vec<SectorData>> {
        let cache_key = build_key(&[Some("sectorData"), Some(LATEST_YEAR)]);
        if let Some(cached) = self.cache.get::<Vec<SectorData>>(&cache_key) {
            debug!("sector data served from cache");
            return Ok(cached);
        }

        let filters = PlfsFilters {
            indicator_code: INDICATOR_WORKER_DISTRIBUTION.to_string(),
            frequency_code: FREQUENCY_ANNUAL.to_string(),
            year: Some(LATEST_YEAR.to_string()),
            state_code: Some(STATE_ALL_INDIA.to_string()),
            gender_code: Some(GENDER_ALL.to_string()),
            sector_code: Some(SECTOR_ALL.to_string()),
            age_code: Some(AGE_15_PLUS.to_string()),
            weekly_status_code: Some(WEEKLY_STATUS_ALL.to_string()),
            nic_group_code: Some(NIC_GROUP_CODES.to_string()),
            ..Default::default()
        };

        let records = self
            .source
            .fetch_all_records(&filters)
            .await
            .context("fetching worker distribution")?;

        let result = sector_data_from_records(&records);

        self.cache.set(&cache_key, &result);
        Ok(result)
    }

    /// Headline metrics across all historical periods.
    pub async fn fetch_trend_data(&self) -> Result<Vec<TrendData>> {
        let cache_key = build_key(&[Some("trendData"), None]);
        if let Some(cached) = self.cache.get::<Vec<TrendData>>(&cache_key) {
            debug!("trend data served from cache");
            return Ok(cached);
        }

        let base = PlfsFilters {
            year: Some(ALL_YEARS.to_string()),
            state_code: Some(STATE_ALL_INDIA.to_string()),
            gender_code: Some(GENDER_PERSON.to_string()),
            age_code: Some(AGE_15_PLUS.to_string()),
            ..latest_year_filters()
        };

        let ur_filters = PlfsFilters {
            indicator_code: INDICATOR_UR.to_string(),
            sector_code: Some(SECTOR_ALL.to_string()),
            ..base.clone()
        };
        let lfpr_filters = PlfsFilters {
            indicator_code: INDICATOR_LFPR.to_string(),
            sector_code: Some(SECTOR_COMBINED.to_string()),
            ..base.clone()
        };
        let wpr_filters = PlfsFilters {
            indicator_code: INDICATOR_WPR.to_string(),
            sector_code: Some(SECTOR_COMBINED.to_string()),
            ..base
        };

        let (ur_records, lfpr_records, wpr_records) = tokio::try_join!(
            self.source.fetch_all_records(&ur_filters),
            self.source.fetch_all_records(&lfpr_filters),
            self.source.fetch_all_records(&wpr_filters),
        )
        .context("fetching trend indicators")?;

        let result = trend_data_from_records(&ur_records, &lfpr_records, &wpr_records);

        self.cache.set(&cache_key, &result);
        Ok(result)
    }
}

/// Filters shared by every latest-period indicator query.
fn latest_year_filters() -> PlfsFilters {
    PlfsFilters {
        frequency_code: FREQUENCY_ANNUAL.to_string(),
        year: Some(LATEST_YEAR.to_string()),
        weekly_status_code: Some(WEEKLY_STATUS_ALL.to_string()),
        education_code: Some(EDUCATION_ALL.to_string()),
        religion_code: Some(RELIGION_ALL.to_string()),
        social_category_code: Some(SOCIAL_CATEGORY_ALL.to_string()),
        ..Default::default()
    }
}

fn national_base_filters() -> PlfsFilters {
    PlfsFilters {
        state_code: Some(STATE_ALL_INDIA.to_string()),
        ..latest_year_filters()
    }
}

/// Shape the national summary out of the three indicator record sets.
///
/// Missing rows degrade to 0; the aggregate never fails on shape.
pub fn national_summary_from_records(
    ur_records: &[PlfsRecord],
    lfpr_records: &[PlfsRecord],
    wpr_records: &[PlfsRecord],
) -> NationalSummary {
    let india = || RecordCriteria::new().with_state(LABEL_ALL_INDIA);

    let ur_all = find_record(
        ur_records,
        &india()
            .with_sector(LABEL_SECTOR_COMBINED)
            .with_age_group(LABEL_AGE_15_PLUS),
    );
    let ur_urban = find_record(
        ur_records,
        &india()
            .with_sector(LABEL_SECTOR_URBAN)
            .with_age_group(LABEL_AGE_15_PLUS),
    );
    let ur_rural = find_record(
        ur_records,
        &india()
            .with_sector(LABEL_SECTOR_RURAL)
            .with_age_group(LABEL_AGE_15_PLUS),
    );
    let ur_youth = find_record(
        ur_records,
        &india()
            .with_sector(LABEL_SECTOR_COMBINED)
            .with_age_group(LABEL_AGE_YOUTH),
    );

    let lfpr_person = find_record(lfpr_records, &india().with_gender(LABEL_GENDER_PERSON));
    let lfpr_male = find_record(lfpr_records, &india().with_gender(LABEL_GENDER_MALE));
    let lfpr_female = find_record(lfpr_records, &india().with_gender(LABEL_GENDER_FEMALE));
    let wpr_person = find_record(wpr_records, &india().with_gender(LABEL_GENDER_PERSON));

    NationalSummary {
        unemployment_rate: value_or_zero(ur_all),
        lfpr: value_or_zero(lfpr_person),
        wpr: value_or_zero(wpr_person),
        male_lfpr: value_or_zero(lfpr_male),
        female_lfpr: value_or_zero(lfpr_female),
        urban_ur: value_or_zero(ur_urban),
        rural_ur: value_or_zero(ur_rural),
        youth_ur: value_or_zero(ur_youth),
        total_labour_force: 0.0,
        period: LATEST_YEAR.to_string(),
    }
}

/// Shape the per-state table.
///
/// A state is omitted when MoSPI reports it under a name the mapping table
/// does not know, or when its combined unemployment-rate row is absent
/// (absence is "unsupported", distinct from a zero value).
pub fn state_data_from_records(
    ur_records: &[PlfsRecord],
    lfpr_records: &[PlfsRecord],
    wpr_records: &[PlfsRecord],
) -> Vec<StateEmploymentData> {
    let mut result = Vec::new();

    for state_name in STATE_NAMES {
        let mapping: &StateInfo = match STATE_MAP.get(state_name) {
            Some(mapping) => mapping,
            None => continue,
        };

        let in_state = || RecordCriteria::new().with_state(state_name);

        let ur_combined = find_record(
            ur_records,
            &in_state()
                .with_gender(LABEL_GENDER_PERSON)
                .with_sector(LABEL_SECTOR_COMBINED),
        );

        // No combined UR row means the state has no usable coverage.
        let ur_combined = match ur_combined {
            Some(record) => record,
            None => continue,
        };

        let ur_urban = find_record(
            ur_records,
            &in_state()
                .with_gender(LABEL_GENDER_PERSON)
                .with_sector(LABEL_SECTOR_URBAN),
        );
        let ur_rural = find_record(
            ur_records,
            &in_state()
                .with_gender(LABEL_GENDER_PERSON)
                .with_sector(LABEL_SECTOR_RURAL),
        );
        let lfpr_male = find_record(lfpr_records, &in_state().with_gender(LABEL_GENDER_MALE));
        let lfpr_female = find_record(lfpr_records, &in_state().with_gender(LABEL_GENDER_FEMALE));
        let lfpr_person = find_record(lfpr_records, &in_state().with_gender(LABEL_GENDER_PERSON));
        let wpr_person = find_record(wpr_records, &in_state().with_gender(LABEL_GENDER_PERSON));

        result.push(StateEmploymentData {
            state_code: mapping.code.to_string(),
            state_name: mapping.name.to_string(),
            unemployment_rate: ur_combined.numeric_value(),
            lfpr: value_or_zero(lfpr_person),
            wpr: value_or_zero(wpr_person),
            male_lfpr: value_or_zero(lfpr_male),
            female_lfpr: value_or_zero(lfpr_female),
            urban_unemployment_rate: value_or_zero(ur_urban),
            rural_unemployment_rate: value_or_zero(ur_rural),
        });
    }

    result
}

/// Shape the age-band table, one row per configured band.
pub fn age_group_data_from_records(
    ur_records: &[PlfsRecord],
    lfpr_records: &[PlfsRecord],
) -> Vec<AgeGroupData> {
    let mut result = Vec::new();

    for (label, mospi_label) in AGE_BANDS {
        let in_band = || {
            RecordCriteria::new()
                .with_state(LABEL_ALL_INDIA)
                .with_age_group(mospi_label)
        };

        let ur_person = find_record(ur_records, &in_band().with_gender(LABEL_GENDER_PERSON));
        let ur_male = find_record(ur_records, &in_band().with_gender(LABEL_GENDER_MALE));
        let ur_female = find_record(ur_records, &in_band().with_gender(LABEL_GENDER_FEMALE));
        let lfpr = find_record(lfpr_records, &in_band());

        result.push(AgeGroupData {
            age_group: label.to_string(),
            unemployment_rate: value_or_zero(ur_person),
            lfpr: value_or_zero(lfpr),
            male_unemployment_rate: value_or_zero(ur_male),
            female_unemployment_rate: value_or_zero(ur_female),
        });
    }

    result
}

/// Shape the sector distribution.
///
/// A sector whose overall percentage resolves to exactly 0 is treated as
/// "not reported" and skipped; remaining rows sort by descending share.
pub fn sector_data_from_records(records: &[PlfsRecord]) -> Vec<SectorData> {
    let mut result = Vec::new();

    for (nic_group, sector) in NIC_SECTOR_GROUPS {
        let in_group = || {
            RecordCriteria::new()
                .with_state(LABEL_ALL_INDIA)
                .with_nic_group(nic_group)
        };

        let person_all = find_record(
            records,
            &in_group()
                .with_gender(LABEL_GENDER_PERSON)
                .with_sector(LABEL_SECTOR_COMBINED),
        );

        let percentage = value_or_zero(person_all);
        if percentage == 0.0 {
            continue;
        }

        let male_all = find_record(
            records,
            &in_group()
                .with_gender(LABEL_GENDER_MALE)
                .with_sector(LABEL_SECTOR_COMBINED),
        );
        let female_all = find_record(
            records,
            &in_group()
                .with_gender(LABEL_GENDER_FEMALE)
                .with_sector(LABEL_SECTOR_COMBINED),
        );
        let person_urban = find_record(
            records,
            &in_group()
                .with_gender(LABEL_GENDER_PERSON)
                .with_sector(LABEL_SECTOR_URBAN),
        );
        let person_rural = find_record(
            records,
            &in_group()
                .with_gender(LABEL_GENDER_PERSON)
                .with_sector(LABEL_SECTOR_RURAL),
        );

        result.push(SectorData {
            sector: sector.to_string(),
            percentage,
            male_percentage: value_or_zero(male_all),
            female_percentage: value_or_zero(female_all),
            urban_percentage: value_or_zero(person_urban),
            rural_percentage: value_or_zero(person_rural),
        });
    }

    result.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    result
}

/// Shape the multi-year trend, one row per period, oldest first.
pub fn trend_data_from_records(
    ur_records: &[PlfsRecord],
    lfpr_records: &[PlfsRecord],
    wpr_records: &[PlfsRecord],
) -> Vec<TrendData> {
    let mut result = Vec::new();

    for year in YEARS {
        let whole_year = || {
            RecordCriteria::new()
                .with_state(LABEL_ALL_INDIA)
                .with_year(year)
                .with_quarter(LABEL_QUARTER_ALL)
        };

        let ur_all = find_record(ur_records, &whole_year().with_sector(LABEL_SECTOR_COMBINED));
        let ur_urban = find_record(ur_records, &whole_year().with_sector(LABEL_SECTOR_URBAN));
        let ur_rural = find_record(ur_records, &whole_year().with_sector(LABEL_SECTOR_RURAL));
        let lfpr = find_record(lfpr_records, &whole_year());
        let wpr = find_record(wpr_records, &whole_year());

        result.push(TrendData {
            period: year.to_string(),
            year: period_start_year(year),
            quarter: None,
            unemployment_rate: value_or_zero(ur_all),
            lfpr: value_or_zero(lfpr),
            wpr: value_or_zero(wpr),
            urban_ur: value_or_zero(ur_urban),
            rural_ur: value_or_zero(ur_rural),
        });
    }

    result.sort_by_key(|t| t.year);
    result
}
