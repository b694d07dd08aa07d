use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmokeError {
	#[error(transparent)]
	Transport(#[from] reqwest::Error),
	#[error("response body is not valid JSON: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("unexpected response format: {0}")]
	Shape(String),
	#[error("invalid configuration: {0}")]
	Config(String),
}

/// Which side of the contract broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
	/// Bad flags or settings; nothing was sent.
	Config,
	Shape,
	Transport,
}

impl SmokeError {
	pub fn kind(&self) -> FailureKind {
		match self {
			SmokeError::Transport(_) | SmokeError::Parse(_) => FailureKind::Transport,
			SmokeError::Shape(_) => FailureKind::Shape,
			SmokeError::Config(_) => FailureKind::Config,
		}
	}

	/// Message without the variant prefix, for callers that print their own heading.
	pub fn reason(&self) -> String {
		match self {
			SmokeError::Shape(reason) | SmokeError::Config(reason) => reason.clone(),
			other => other.to_string(),
		}
	}
}

impl FailureKind {
	/// 1 stays free for anyhow errors; 2 matches clap's own usage errors.
	pub fn exit_code(&self) -> i32 {
		match self {
			FailureKind::Config => 2,
			FailureKind::Shape => 3,
			FailureKind::Transport => 4,
		}
	}
}

pub type SmokeResult<T> = Result<T, SmokeError>;
