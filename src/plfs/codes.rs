//! Dimension code tables for the MoSPI PLFS dataset.
//!
//! These tables are data, not logic: they mirror the remote service's code
//! vocabulary and the dashboard's stable state codes. If MoSPI revises its
//! code tables only this module changes.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Latest annual period available in the dataset.
pub const LATEST_YEAR: &str = "2023-24";

/// All annual periods, oldest first, comma-joined for trend queries.
pub const ALL_YEARS: &str = "2017-18,2018-19,2019-20,2020-21,2021-22,2022-23,2023-24";

/// `ALL_YEARS` split into individual periods, oldest first.
pub const YEARS: [&str; 7] = [
    "2017-18", "2018-19", "2019-20", "2020-21", "2021-22", "2022-23", "2023-24",
];

/// All MoSPI state codes (1-38) for the combined state-level query.
pub const ALL_STATES: &str =
    "1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19,20,21,22,23,24,25,26,27,28,29,30,31,32,33,34,35,36,37,38";

/// The All India pseudo-state code.
pub const STATE_ALL_INDIA: &str = "99";

// Indicator codes
pub const INDICATOR_LFPR: &str = "1";
pub const INDICATOR_WPR: &str = "2";
pub const INDICATOR_UR: &str = "3";
pub const INDICATOR_WORKER_DISTRIBUTION: &str = "4";

/// Annual frequency.
pub const FREQUENCY_ANNUAL: &str = "1";

// Gender codes: 1=male, 2=female, 3=person
pub const GENDER_MALE: &str = "1";
pub const GENDER_FEMALE: &str = "2";
pub const GENDER_PERSON: &str = "3";
pub const GENDER_ALL: &str = "1,2,3";

// Sector codes: 1=rural, 2=urban, 3=rural+urban
pub const SECTOR_COMBINED: &str = "3";
pub const SECTOR_ALL: &str = "1,2,3";

// Age codes: 1=15+, 2=15-29, 3=15-59, 4=all ages
pub const AGE_15_PLUS: &str = "1";
pub const AGE_15_PLUS_AND_YOUTH: &str = "1,2";
pub const AGE_ALL_BANDS: &str = "1,2,3,4";

// Remaining "all" buckets used by every query
pub const WEEKLY_STATUS_ALL: &str = "1";
pub const EDUCATION_ALL: &str = "10";
pub const RELIGION_ALL: &str = "1";
pub const SOCIAL_CATEGORY_ALL: &str = "1";

// Free-text labels the remote attaches to records
pub const LABEL_ALL_INDIA: &str = "All India";
pub const LABEL_SECTOR_COMBINED: &str = "rural + urban";
pub const LABEL_SECTOR_URBAN: &str = "urban";
pub const LABEL_SECTOR_RURAL: &str = "rural";
pub const LABEL_GENDER_PERSON: &str = "person";
pub const LABEL_GENDER_MALE: &str = "male";
pub const LABEL_GENDER_FEMALE: &str = "female";
pub const LABEL_AGE_15_PLUS: &str = "15 years and above";
pub const LABEL_AGE_YOUTH: &str = "15-29 years";
pub const LABEL_QUARTER_ALL: &str = "all";

/// A dashboard state identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateInfo {
    /// Dashboard-stable 2-letter code.
    pub code: &'static str,
    /// Canonical display name.
    pub name: &'static str,
}

lazy_static! {
    /// MoSPI free-text state name -> dashboard identity.
    ///
    /// States/territories MoSPI reports under names not listed here are
    /// silently excluded from state-level output.
    pub static ref STATE_MAP: HashMap<&'static str, StateInfo> = {
        let entries: [(&str, &str, &str); 38] = [
            ("Andhra Pradesh", "AP", "Andhra Pradesh"),
            ("Arunachal Pradesh", "AR", "Arunachal Pradesh"),
            ("Assam", "AS", "Assam"),
            ("Bihar", "BR", "Bihar"),
            ("Chhattisgarh", "CT", "Chhattisgarh"),
            ("Delhi", "DL", "Delhi"),
            ("Goa", "GA", "Goa"),
            ("Gujarat", "GJ", "Gujarat"),
            ("Haryana", "HR", "Haryana"),
            ("Himachal Pradesh", "HP", "Himachal Pradesh"),
            ("Jammu & Kashmir", "JK", "Jammu & Kashmir"),
            ("Jharkhand", "JH", "Jharkhand"),
            ("Karnataka", "KA", "Karnataka"),
            ("Kerala", "KL", "Kerala"),
            ("Madhya Pradesh", "MP", "Madhya Pradesh"),
            ("Maharashtra", "MH", "Maharashtra"),
            ("Manipur", "MN", "Manipur"),
            ("Meghalaya", "ML", "Meghalaya"),
            ("Mizoram", "MZ", "Mizoram"),
            ("Nagaland", "NL", "Nagaland"),
            ("Odisha", "OR", "Odisha"),
            ("Punjab", "PB", "Punjab"),
            ("Rajasthan", "RJ", "Rajasthan"),
            ("Sikkim", "SK", "Sikkim"),
            ("Tamil Nadu", "TN", "Tamil Nadu"),
            ("Telangana", "TG", "Telangana"),
            ("Tripura", "TR", "Tripura"),
            ("Uttarakhand", "UT", "Uttarakhand"),
            ("Uttar Pradesh", "UP", "Uttar Pradesh"),
            ("West Bengal", "WB", "West Bengal"),
            ("Andaman & Nicobar Islands", "AN", "Andaman & Nicobar"),
            ("Chandigarh", "CH", "Chandigarh"),
            ("Dadra & Nagar Haveli", "DN", "Dadra & Nagar Haveli"),
            ("Daman & Diu", "DD", "Daman & Diu"),
            ("Lakshadweep", "LD", "Lakshadweep"),
            ("Puducherry", "PY", "Puducherry"),
            ("Ladakh", "LA", "Ladakh"),
            (
                "Dadra & Nagar Haveli & Daman & Diu",
                "DN",
                "Dadra & Nagar Haveli & Daman & Diu",
            ),
        ];
        entries
            .iter()
            .map(|(mospi_name, code, name)| (*mospi_name, StateInfo { code, name }))
            .collect()
    };
}

/// MoSPI state names in a stable iteration order (table order above is lost
/// in the map, so state output iterates this list).
pub const STATE_NAMES: [&str; 38] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Delhi",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jammu & Kashmir",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttarakhand",
    "Uttar Pradesh",
    "West Bengal",
    "Andaman & Nicobar Islands",
    "Chandigarh",
    "Dadra & Nagar Haveli",
    "Daman & Diu",
    "Lakshadweep",
    "Puducherry",
    "Ladakh",
    "Dadra & Nagar Haveli & Daman & Diu",
];

/// Age bands the dashboard reports, dashboard label + MoSPI record label.
pub const AGE_BANDS: [(&str, &str); 3] = [
    ("15-29", "15-29 years"),
    ("15-59", "15-59 years"),
    ("15+", "15 years and above"),
];

/// NIC group codes requested for the sector-distribution query.
pub const NIC_GROUP_CODES: &str = "4,5,6,7,8,10,11,12,13";

/// MoSPI NIC group label -> dashboard sector name.
///
/// Labels are reproduced verbatim from the dataset, typos included.
pub const NIC_SECTOR_GROUPS: [(&str, &str); 9] = [
    ("01-03 (agriculture)", "Agriculture"),
    ("10-33 (manufacturing)", "Manufacturing"),
    ("41-43 (construction)", "Construction"),
    ("45-47 (trade)", "Trade & Commerce"),
    ("49-53( transport)", "Transport & Storage"),
    ("55-56 (accommodation & food services", "Accommodation & Food"),
    ("58-99 (other services)", "Other Services"),
    ("05-09 (mining & quarrying)", "Mining & Quarrying"),
    ("35-39 (electricity and water supply)", "Utilities"),
];

/// Starting calendar year of a fiscal-style period, e.g. "2023-24" -> 2023.
///
/// Unparsable periods sort to year 0 rather than erroring.
pub fn period_start_year(period: &str) -> i32 {
    period
        .split('-')
        .next()
        .and_then(|y| y.parse().ok())
        .unwrap_or(0)
}
