//! CSV import of appliance lists and export of energy breakdowns.

pub mod export;
pub mod import;
