use thiserror::Error;

/// Kind of failure a status carries
///
/// `InvalidArgument` is raised by constructors and `Corruption` by config
/// parsing. The rest are for producers written outside this crate to report
/// why their sequence ended early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    InvalidArgument,
    Corruption,
    Incomplete,
    Aborted,
    Custom,
}

/// Failure reported by a producer or rejected by a constructor.
///
/// The library never inspects a status it forwards: every stage and terminal
/// algorithm hands it back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code:?}: {message}")]
pub struct Status {
    code: Code,
    message: String,
}

impl Status {
    pub fn new(code: Code, msg: impl Into<String>) -> Self {
        Status {
            code,
            message: msg.into(),
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Status::new(Code::InvalidArgument, msg)
    }

    pub fn corruption(msg: impl Into<String>) -> Self {
        Status::new(Code::Corruption, msg)
    }

    pub fn incomplete(msg: impl Into<String>) -> Self {
        Status::new(Code::Incomplete, msg)
    }

    pub fn aborted(msg: impl Into<String>) -> Self {
        Status::new(Code::Aborted, msg)
    }

    pub fn custom(msg: impl Into<String>) -> Self {
        Status::new(Code::Custom, msg)
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.code == Code::InvalidArgument
    }

    pub fn is_corruption(&self) -> bool {
        self.code == Code::Corruption
    }

    pub fn is_incomplete(&self) -> bool {
        self.code == Code::Incomplete
    }

    pub fn is_aborted(&self) -> bool {
        self.code == Code::Aborted
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for Status {
    fn from(err: serde_json::Error) -> Self {
        Status::corruption(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Status>;
