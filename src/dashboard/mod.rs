mod assembler;
mod models;

pub use assembler::{
    age_group_data_from_records, national_summary_from_records, sector_data_from_records,
    state_data_from_records, trend_data_from_records, DashboardAssembler,
};
pub use models::{
    AgeGroupData, DashboardData, NationalSummary, SectorData, StateEmploymentData, TrendData,
};
