#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read {source_name}: {reason}")]
    InputRead { source_name: String, reason: String },

    #[error("{source_name} is above the limit of {limit} bytes")]
    InputTooLarge { source_name: String, limit: usize },

    #[error("{0} is not valid UTF-8 text")]
    NotText(String),

    #[error("Config {path}: {reason}")]
    Config { path: String, reason: String },
}
