use thiserror::Error;

pub type Result<T> = std::result::Result<T, SafetyError>;

#[derive(Error, Debug)]
pub enum SafetyError {
    #[error("Manifest error in {file}: {message}")]
    Manifest { file: String, message: String },

    #[error("No manifest adapter recognizes file: {0}")]
    NoAdapter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SafetyError {
    pub fn exit_code(&self) -> i32 {
        2
    }
}
