pub mod query;
pub mod subject_area;
pub mod tariff;
