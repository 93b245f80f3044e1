#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "decant", about = "Decode JSON documents against typed shapes")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the value tree of a JSON document.
	Inspect {
		path: PathBuf,
		/// Subtree to inspect, e.g. `items[0].name`.
		#[arg(long)]
		at: Option<String>,
		#[arg(long)]
		json: bool,
	},
	/// Decode a JSON document against a shape such as `[u8]` or `{string?}`.
	Decode {
		path: PathBuf,
		#[arg(long = "as")]
		shape: String,
		/// Subtree to decode, e.g. `items[0].name`.
		#[arg(long)]
		at: Option<String>,
		#[arg(long)]
		max_depth: Option<u32>,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Inspect { path, at, json } => cmd::inspect::run(path, at, json),
		Commands::Decode {
			path,
			shape,
			at,
			max_depth,
			json,
		} => cmd::decode::run(cmd::decode::DecodeArgs {
			path,
			shape,
			at,
			max_depth,
			json,
		}),
	}
}

fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
