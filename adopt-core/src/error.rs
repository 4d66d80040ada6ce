use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to parse roster JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("roster contains no records")]
    Empty,
}

#[derive(Debug, Error, PartialEq)]
pub enum HolderError {
    #[error("no dog with identifier '{0}'")]
    UnknownDog(String),
}
