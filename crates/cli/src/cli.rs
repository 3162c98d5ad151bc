use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vista")]
#[command(about = "Entity facet router")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Build every entity's facet and print the container outlines
	Render {
		/// Entity manifest (TOML)
		#[arg(short, long, value_name = "PATH")]
		manifest: PathBuf,

		/// Initial navigation fragment, e.g. `user-facet=details&user-pkey=admin`
		#[arg(short, long, default_value = "")]
		fragment: String,

		/// Only attach these entities (all when omitted)
		#[arg(short, long = "entity", value_name = "NAME")]
		entities: Vec<String>,

		/// Activate a link by identifier after the initial build; repeatable
		#[arg(short, long, value_name = "LINK")]
		activate: Vec<String>,
	},
	/// Parse and validate a manifest, then list its entities
	Check {
		/// Entity manifest (TOML)
		#[arg(value_name = "PATH")]
		manifest: PathBuf,
	},
}
