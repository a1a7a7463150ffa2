pub mod codes;
mod filters;
mod records;

pub use filters::{PlfsFilters, DATASET};
pub use records::{
    filter_records, find_record, parse_value, value_or_zero, PageMeta, PlfsDataResponse,
    PlfsRecord, RecordCriteria,
};
