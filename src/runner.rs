use crate::client::EventsClient;
use crate::errors::{FailureKind, SmokeError};
use crate::models::{Envelope, FetchedBody};
use crate::report::{event_line, pagination_lines, Report, UNDEFINED};

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
	Ok(Envelope),
	Shape(String),
	Transport(String),
}

impl Outcome {
	pub fn failure(&self) -> Option<FailureKind> {
		match self {
			Outcome::Ok(_) => None,
			Outcome::Shape(_) => Some(FailureKind::Shape),
			Outcome::Transport(_) => Some(FailureKind::Transport),
		}
	}

	fn from_error(err: &SmokeError) -> Self {
		match err.kind() {
			FailureKind::Transport => Outcome::Transport(err.to_string()),
			// config errors are raised before a runner exists
			FailureKind::Shape | FailureKind::Config => Outcome::Shape(err.reason()),
		}
	}
}

#[derive(Debug, Clone)]
pub struct RunSummary {
	pub status: Option<u16>,
	pub outcome: Outcome,
	pub report: Report,
}

impl RunSummary {
	pub fn is_ok(&self) -> bool {
		self.outcome.failure().is_none()
	}

	/// Process exit status; non-strict runs always exit 0.
	pub fn exit_code(&self, strict: bool) -> i32 {
		match self.outcome.failure() {
			Some(kind) if strict => kind.exit_code(),
			_ => 0,
		}
	}
}

/// Plain list fetch: status, pretty body, then a confirmation with the event count.
pub async fn run_basic(client: &EventsClient) -> RunSummary {
	let mut report = Report::new();
	let url = client.config().events_url();
	report.out(format!("Testing events endpoint: GET {}", url));
	let fetched = match client.fetch_events().await {
		Ok(f) => f,
		Err(e) => {
			report.err(format!("Error testing API: {}", e));
			report.out(format!("Make sure the admin backend is running at {}", client.config().base_url));
			return RunSummary { status: None, outcome: Outcome::from_error(&e), report };
		}
	};
	report.out(format!("Status: {}", fetched.status));
	report.out("Response:");
	report.out(fetched.pretty_body());
	let outcome = match Envelope::from_body(&fetched.body) {
		Ok(env) if env.is_ok() => {
			report.out("API is working correctly");
			report.out(format!("Found {} events", env.event_count()));
			Outcome::Ok(env)
		}
		Ok(env) => {
			report.out("Warning: unexpected response format");
			Outcome::Shape(shape_reason(&env))
		}
		Err(e) => {
			report.out(format!("Warning: unexpected response format ({})", e.reason()));
			Outcome::from_error(&e)
		}
	};
	finish(fetched, outcome, report)
}

/// Paginated fetch rendering each pagination field and one line per event.
pub async fn run_paginated(client: &EventsClient, page: u32, limit: u32) -> RunSummary {
	let mut report = Report::new();
	let locale = client.config().locale;
	let url = client.config().paginated_events_url(page, limit);
	report.out(format!("Testing paginated events: GET {}", url));
	let fetched = match client.fetch_events_page(page, limit).await {
		Ok(f) => f,
		Err(e) => {
			report.err(format!("Error testing paginated API: {}", e));
			return RunSummary { status: None, outcome: Outcome::from_error(&e), report };
		}
	};
	report.out(format!("Status: {}", fetched.status));
	let env = match Envelope::from_body(&fetched.body) {
		Ok(env) => env,
		Err(e) => {
			report.err(format!("Warning: unexpected response format ({})", e.reason()));
			let outcome = Outcome::from_error(&e);
			return finish(fetched, outcome, report);
		}
	};
	if !env.success {
		report.err(format!("API error: {}", env.error_message().as_deref().unwrap_or(UNDEFINED)));
		let outcome = Outcome::Shape(shape_reason(&env));
		return finish(fetched, outcome, report);
	}
	report.out("Pagination:");
	for line in pagination_lines(env.pagination().as_ref()) { report.out(line); }
	let events = env.events();
	if events.is_empty() {
		report.out("No events returned");
	} else {
		report.out(format!("Events ({}):", events.len()));
		for (i, event) in events.iter().enumerate() { report.out(event_line(i + 1, event, locale)); }
	}
	finish(fetched, Outcome::Ok(env), report)
}

fn finish(fetched: FetchedBody, outcome: Outcome, report: Report) -> RunSummary {
	if let Some(kind) = outcome.failure() {
		tracing::debug!(url = %fetched.url, status = fetched.status, ?kind, "smoke check failed");
	}
	RunSummary { status: Some(fetched.status), outcome, report }
}

fn shape_reason(env: &Envelope) -> String {
	match (env.error_message(), env.success) {
		(Some(err), _) => err,
		(None, false) => "success flag is false".into(),
		(None, true) => "data is missing".into(),
	}
}
