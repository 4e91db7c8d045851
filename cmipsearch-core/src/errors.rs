use thiserror::Error;

/// Error type for registry lookups and catalog loading.
#[derive(Error, Debug)]
pub enum CmipError {
    #[error("Unknown CMIP6 model: {0}")]
    UnknownModel(String),
    #[error("Unknown CMIP6 experiment: {0}")]
    UnknownExperiment(String),
    #[error("The {0} list is empty")]
    EmptyRegistry(String),
    #[error("Duplicate entry '{name}' in the {registry} list")]
    DuplicateEntry { registry: String, name: String },
    #[error("Could not read catalog from TOML: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
    #[error("Could not write catalog as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type for `Result<T, CmipError>`.
pub type CmipResult<T> = Result<T, CmipError>;
