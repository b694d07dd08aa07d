use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{SmokeConfig, DEFAULT_BASE_URL, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::errors::SmokeResult;

/// `events_smoke` command line.
#[derive(Parser, Debug)]
#[command(name = "events_smoke")]
#[command(about = "Smoke test for the mobile events endpoint", long_about = None)]
pub struct SmokeCli {
	#[command(flatten)]
	pub config: ConfigArgs,
	#[command(subcommand)]
	pub command: Option<SmokeCommand>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmokeCommand {
	/// GET /mobile/events and report the event count
	List,
	/// GET /mobile/events?page=&limit= and render each event
	Page,
	/// Run `list` then `page`
	All,
}

/// Options shared by every entry point, accepted before or after the subcommand.
/// Flags win over env vars, env vars over `.env`.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
	#[arg(long, global = true, env = "EVENTS_SMOKE_BASE_URL", default_value = DEFAULT_BASE_URL)]
	pub base: String,
	#[arg(long, global = true, env = "EVENTS_SMOKE_PAGE", default_value_t = DEFAULT_PAGE)]
	pub page: u32,
	#[arg(long, global = true, env = "EVENTS_SMOKE_LIMIT", default_value_t = DEFAULT_LIMIT)]
	pub limit: u32,
	/// Locale used for event dates (en-US, en-GB, fr-FR, de-DE, iso)
	#[arg(long, global = true, env = "EVENTS_SMOKE_LOCALE", default_value = "en-US")]
	pub locale: String,
	/// Give up on the request after this many milliseconds
	#[arg(long, global = true, env = "EVENTS_SMOKE_TIMEOUT_MS")]
	pub timeout_ms: Option<u64>,
	/// Exit non-zero when a check fails
	#[arg(long, global = true, env = "EVENTS_SMOKE_STRICT")]
	pub strict: bool,
}

impl ConfigArgs {
	pub fn into_config(self) -> SmokeResult<SmokeConfig> {
		SmokeConfig {
			base_url: self.base,
			page: self.page,
			limit: self.limit,
			locale: self.locale.parse()?,
			timeout: self.timeout_ms.map(Duration::from_millis),
			strict: self.strict,
		}
		.validate()
	}
}

/// Logs go to stderr so stdout carries only the report.
pub fn init_tracing() {
	let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::new(env_filter))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.try_init()
		.ok();
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dates::DateLocale;

	#[derive(Parser, Debug)]
	struct TestOpts {
		#[command(flatten)]
		config: ConfigArgs,
	}

	#[test]
	fn flags_build_a_validated_config() {
		let opts = TestOpts::try_parse_from([
			"events_smoke", "--base", "http://10.0.0.5:8080/api/", "--page", "2", "--limit", "10",
			"--locale", "de-DE", "--timeout-ms", "1500", "--strict",
		]).unwrap();
		let cfg = opts.config.into_config().unwrap();
		assert_eq!(cfg.base_url, "http://10.0.0.5:8080/api");
		assert_eq!((cfg.page, cfg.limit), (2, 10));
		assert_eq!(cfg.locale, DateLocale::DeDe);
		assert_eq!(cfg.timeout, Some(Duration::from_millis(1500)));
		assert!(cfg.strict);
	}

	#[test]
	fn shared_flags_are_accepted_after_the_subcommand() {
		let cli = SmokeCli::try_parse_from(["events_smoke", "page", "--page", "2", "--limit", "10"]).unwrap();
		assert_eq!(cli.command, Some(SmokeCommand::Page));
		assert_eq!((cli.config.page, cli.config.limit), (2, 10));

		let cli = SmokeCli::try_parse_from(["events_smoke", "--strict", "list", "--base", "http://127.0.0.1:9/api"]).unwrap();
		assert_eq!(cli.command, Some(SmokeCommand::List));
		assert!(cli.config.strict);
		assert_eq!(cli.config.base, "http://127.0.0.1:9/api");
	}

	#[test]
	fn no_subcommand_parses() {
		let cli = SmokeCli::try_parse_from(["events_smoke"]).unwrap();
		assert_eq!(cli.command, None);
	}

	#[test]
	fn unknown_locale_is_rejected() {
		let opts = TestOpts::try_parse_from(["events_smoke", "--base", "http://localhost:3000/api", "--locale", "tlh"]).unwrap();
		assert!(opts.config.into_config().is_err());
	}
}
