//! Export of fleet evaluations

pub mod excel;

pub use excel::export_to_excel;
