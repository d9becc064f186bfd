use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    /// IO error.
    #[error("io error: {0}")]
    IO(#[from] io::Error),
    #[error("invalid json config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid yaml config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Config file extension is neither yaml nor json.
    #[error("unsupported config file: {}", .0.display())]
    UnsupportedConfig(PathBuf),
    #[error("unknown operation: {0}")]
    InvalidOp(String),
}

pub type Result<T> = std::result::Result<T, GenError>;
