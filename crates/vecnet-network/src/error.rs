use vecnet_path::GrammarError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error("invalid vector network: {message}")]
    InvalidNetwork { message: String },
}
