//! Unified application error type.
//! All modules (data, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Dataset reading / parsing
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid duration in column {column}: '{value}'")]
    InvalidDuration { column: String, value: String },

    #[error("Invalid number in column {column}: '{value}'")]
    InvalidNumber { column: String, value: String },

    // ---------------------------
    // Analysis errors
    // ---------------------------
    #[error("No data for driver {0}")]
    NoDataForDriver(String),

    #[error("Driver {driver} has no values in column {column}")]
    IncompleteLapData { driver: String, column: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
