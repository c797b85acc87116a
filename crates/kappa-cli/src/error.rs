use derive_more::From;
use orion_error::{ErrorCode, StructError, UvsReason};

#[derive(Debug, Clone, PartialEq, thiserror::Error, From)]
pub enum CliReason {
    #[error("input error")]
    Input,
    #[error("log parse error")]
    Parse,
    #[error("configuration error")]
    Config,
    #[error("output error")]
    Output,
    #[error("{0}")]
    Uvs(UvsReason),
}

impl ErrorCode for CliReason {
    fn error_code(&self) -> i32 {
        match self {
            Self::Input => 3001,
            Self::Parse => 3002,
            Self::Config => 3003,
            Self::Output => 3004,
            Self::Uvs(u) => u.error_code(),
        }
    }
}

pub type CliError = StructError<CliReason>;
pub type CliResult<T> = Result<T, CliError>;
