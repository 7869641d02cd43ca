use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: missing '{field}' field")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: unexpected field after 'weight'")]
    ExtraField { line: usize },

    #[error("line {line}: invalid vertex id '{value}'")]
    InvalidVertex { line: usize, value: String },

    #[error("line {line}: invalid weight '{value}'")]
    InvalidWeight { line: usize, value: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}
