pub type ScenecastResult<T> = Result<T, ScenecastError>;

#[derive(thiserror::Error, Debug)]
pub enum ScenecastError {
    #[error("document error: {0}")]
    Document(String),

    #[error("frame id '{0}' does not match any element id")]
    MissingFrame(String),

    #[error("frame '{frame}' has zero width or height")]
    ZeroDimension { frame: String },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScenecastError {
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    pub fn missing_frame(id: impl Into<String>) -> Self {
        Self::MissingFrame(id.into())
    }

    pub fn zero_dimension(frame: impl Into<String>) -> Self {
        Self::ZeroDimension {
            frame: frame.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
