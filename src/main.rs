use clap::Parser;
use dotenvy::dotenv;

use events_smoke::cli::{init_tracing, SmokeCli, SmokeCommand};
use events_smoke::{run_basic, run_paginated, EventsClient, RunSummary};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	// .env must be loaded before clap reads env fallbacks
	dotenv().ok();
	init_tracing();

	let cli = SmokeCli::parse();
	let config = match cli.config.into_config() {
		Ok(config) => config,
		Err(e) => {
			eprintln!("error: {}", e);
			std::process::exit(e.kind().exit_code());
		}
	};
	let (strict, page, limit) = (config.strict, config.page, config.limit);
	let client = EventsClient::new(config)?;

	let mut exit_code = 0;
	let mut report = |summary: RunSummary| -> anyhow::Result<()> {
		summary.report.emit()?;
		exit_code = exit_code.max(summary.exit_code(strict));
		Ok(())
	};
	match cli.command.unwrap_or(SmokeCommand::All) {
		SmokeCommand::List => report(run_basic(&client).await)?,
		SmokeCommand::Page => report(run_paginated(&client, page, limit).await)?,
		SmokeCommand::All => {
			report(run_basic(&client).await)?;
			println!();
			report(run_paginated(&client, page, limit).await)?;
		}
	}
	if exit_code != 0 {
		std::process::exit(exit_code);
	}
	Ok(())
}
