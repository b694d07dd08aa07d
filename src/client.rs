use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::config::SmokeConfig;
use crate::errors::{SmokeError, SmokeResult};
use crate::models::FetchedBody;

pub struct EventsClient {
	client: reqwest::Client,
	config: SmokeConfig,
}

impl EventsClient {
	pub fn new(config: SmokeConfig) -> SmokeResult<Self> {
		let mut default_headers = HeaderMap::new();
		default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
		let mut builder = reqwest::Client::builder()
			.user_agent(concat!("events-smoke/", env!("CARGO_PKG_VERSION")))
			.default_headers(default_headers);
		if let Some(timeout) = config.timeout { builder = builder.timeout(timeout); }
		let client = builder.build().map_err(SmokeError::Transport)?;
		Ok(Self { client, config })
	}

	pub fn config(&self) -> &SmokeConfig {
		&self.config
	}

	pub async fn fetch_events(&self) -> SmokeResult<FetchedBody> {
		self.get_json(self.config.events_url()).await
	}

	pub async fn fetch_events_page(&self, page: u32, limit: u32) -> SmokeResult<FetchedBody> {
		self.get_json(self.config.paginated_events_url(page, limit)).await
	}

	/// Non-2xx statuses are not errors here; the envelope decides.
	async fn get_json(&self, url: String) -> SmokeResult<FetchedBody> {
		tracing::debug!(%url, "sending request");
		let resp = self.client.get(&url).send().await.map_err(|e| {
			tracing::debug!(%url, error = %e, "request failed");
			SmokeError::Transport(e)
		})?;
		let status = resp.status().as_u16();
		tracing::info!(%url, status, "response received");
		let text = resp.text().await?;
		let body: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
			tracing::debug!(%url, status, error = %e, "body is not JSON");
			SmokeError::Parse(e)
		})?;
		Ok(FetchedBody { url, status, body })
	}
}
