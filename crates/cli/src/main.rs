//! Vista command line driver.
//!
//! Loads an entity manifest, builds a session with text renderers and prints
//! each container's outline after every navigation step.

mod cli;
mod outline;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;
use vista_entity::Registry;
use vista_facet::Session;
use vista_nav::Fragment;

use crate::cli::{Cli, Command};
use crate::outline::Outline;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if cli.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.with_writer(std::io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	match cli.command {
		Command::Render {
			manifest,
			fragment,
			entities,
			activate,
		} => render(&manifest, &fragment, &entities, &activate),
		Command::Check { manifest } => check(&manifest),
	}
}

fn load(manifest: &Path) -> anyhow::Result<Registry> {
	Registry::from_manifest_path(manifest).with_context(|| format!("loading {}", manifest.display()))
}

fn render(manifest: &Path, fragment: &str, entities: &[String], activate: &[String]) -> anyhow::Result<()> {
	let registry = Arc::new(load(manifest)?);
	let names: Vec<String> = if entities.is_empty() {
		registry.entities().map(|meta| meta.name.clone()).collect()
	} else {
		entities.to_vec()
	};

	let mut session = Session::with_fragment(Arc::clone(&registry), Outline::renderers(Arc::clone(&registry)), Fragment::parse(fragment));
	for name in &names {
		session.attach(name)?;
	}
	session.pump();
	print(&session);

	for id in activate {
		let Some(entity) = session
			.containers()
			.find(|container| container.link(id).is_some())
			.map(|container| container.entity().to_string())
		else {
			bail!("no container has a link `{id}`");
		};
		session.activate_link(&entity, id)?;
		let rebuilds = session.pump();
		tracing::info!(link = %id, entity = %entity, rebuilt = rebuilds.len(), "Activated link");
		print(&session);
	}
	Ok(())
}

fn print(session: &Session) {
	println!("#{}", session.nav().fragment());
	for container in session.containers() {
		print!("{container}");
	}
	println!();
}

fn check(manifest: &Path) -> anyhow::Result<()> {
	let registry = load(manifest)?;
	for meta in registry.entities() {
		println!(
			"{} ({}), primary key {}, related: {}",
			meta.name,
			meta.label,
			meta.primary_key,
			meta.related().join(", ")
		);
	}
	Ok(())
}
