use std::time::Duration;

use crate::dates::DateLocale;
use crate::errors::{SmokeError, SmokeResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 5;
pub const MAX_LIMIT: u32 = 1000;
pub const EVENTS_PATH: &str = "/mobile/events";

#[derive(Debug, Clone, PartialEq)]
pub struct SmokeConfig {
	pub base_url: String,
	pub page: u32,
	pub limit: u32,
	pub locale: DateLocale,
	/// `None` waits on the request for as long as the transport does.
	pub timeout: Option<Duration>,
	/// Exit non-zero when a run fails.
	pub strict: bool,
}

impl Default for SmokeConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.into(),
			page: DEFAULT_PAGE,
			limit: DEFAULT_LIMIT,
			locale: DateLocale::default(),
			timeout: None,
			strict: false,
		}
	}
}

impl SmokeConfig {
	pub fn with_base_url(base_url: impl Into<String>) -> Self {
		Self { base_url: base_url.into(), ..Default::default() }
	}

	pub fn validate(self) -> SmokeResult<Self> {
		let base_url = self.base_url.trim().trim_end_matches('/').to_string();
		if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
			return Err(SmokeError::Config(format!("base url must start with http:// or https://, got '{}'", self.base_url)));
		}
		if self.page == 0 { return Err(SmokeError::Config("page must be at least 1".into())); }
		if self.limit == 0 || self.limit > MAX_LIMIT {
			return Err(SmokeError::Config(format!("limit must be between 1 and {}", MAX_LIMIT)));
		}
		Ok(Self { base_url, ..self })
	}

	pub fn events_url(&self) -> String {
		format!("{}{}", self.base_url.trim_end_matches('/'), EVENTS_PATH)
	}

	pub fn paginated_events_url(&self, page: u32, limit: u32) -> String {
		format!("{}?page={}&limit={}", self.events_url(), page, limit)
	}
}
