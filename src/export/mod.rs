// src/export/mod.rs

mod excel_date;
pub(crate) mod fs_utils;
pub mod grouping;
mod json_csv;
pub mod logic;
pub mod model;
mod xlsx;

pub use grouping::{DateGroup, group_by_date};
pub use logic::ExportLogic;
pub use model::ExportTable;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}
