use clap::Parser;
use dotenvy::dotenv;

use events_smoke::cli::{init_tracing, ConfigArgs};
use events_smoke::{run_basic, run_paginated, EventsClient};

#[derive(Parser, Debug)]
#[command(name = "events_ci_smoke")]
#[command(about = "CI smoke test for the mobile events endpoint; always strict", long_about = None)]
struct Opts {
	#[command(flatten)]
	config: ConfigArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	dotenv().ok();
	init_tracing();
	let opts = Opts::parse();
	let mut config = match opts.config.into_config() {
		Ok(config) => config,
		Err(e) => {
			eprintln!("error: {}", e);
			std::process::exit(e.kind().exit_code());
		}
	};
	config.strict = true;
	let (page, limit) = (config.page, config.limit);
	let client = EventsClient::new(config)?;

	println!("[1/2] GET /mobile/events");
	let summary = run_basic(&client).await;
	summary.report.emit()?;
	if !summary.is_ok() { std::process::exit(summary.exit_code(true)); }

	println!("[2/2] GET /mobile/events?page={}&limit={}", page, limit);
	let summary = run_paginated(&client, page, limit).await;
	summary.report.emit()?;
	if !summary.is_ok() { std::process::exit(summary.exit_code(true)); }

	println!("OK");
	Ok(())
}
