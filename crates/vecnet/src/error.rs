use crate::scene::SceneError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid geometry input: {message}")]
    InvalidGeometryInput { message: String },

    #[error(transparent)]
    Network(#[from] vecnet_network::Error),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("import options JSON error: {0}")]
    Options(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidGeometryInput {
            message: message.into(),
        }
    }
}
