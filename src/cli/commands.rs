use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::errors::{CatalogError, CatalogResult};

pub fn execute_command(cli: &Cli) -> CatalogResult<()> {
    let settings = Settings::load()?;
    match &cli.command {
        Some(Commands::Load { file }) => _load(file, &settings),
        Some(Commands::List { file }) => _list(file.as_deref(), &settings),
        Some(Commands::Show { number, file }) => _show(number, file.as_deref(), &settings),
        Some(Commands::Config) => _config(&settings),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// Resolve the catalog source: explicit argument wins, configured
/// default second, otherwise a usage error.
fn resolve_file(file: Option<&Path>, settings: &Settings) -> CatalogResult<PathBuf> {
    file.map(Path::to_path_buf)
        .or_else(|| settings.catalog_file.clone())
        .ok_or_else(|| CatalogError::Config {
            message: "no catalog file given and no catalog_file configured".to_string(),
        })
}

fn load_catalog(file: Option<&Path>, settings: &Settings) -> CatalogResult<Catalog> {
    let path = resolve_file(file, settings)?;
    debug!("loading catalog from {:?}", path);
    let mut catalog = Catalog::new();
    catalog.load_file(&path, settings.delimiter_char()?)?;
    Ok(catalog)
}

#[instrument(skip(settings))]
fn _load(file: &Path, settings: &Settings) -> CatalogResult<()> {
    let mut catalog = Catalog::new();
    let count = catalog.load_file(file, settings.delimiter_char()?)?;
    output::success(&format!(
        "{} course records loaded from {}",
        count,
        file.display()
    ));
    Ok(())
}

#[instrument(skip(settings))]
fn _list(file: Option<&Path>, settings: &Settings) -> CatalogResult<()> {
    let catalog = load_catalog(file, settings)?;
    if catalog.is_empty() {
        output::detail("The course catalog is empty.");
        return Ok(());
    }
    for course in catalog.list() {
        output::info(&course);
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _show(number: &str, file: Option<&Path>, settings: &Settings) -> CatalogResult<()> {
    let catalog = load_catalog(file, settings)?;
    match catalog.lookup(number) {
        Some(course) => {
            output::info(&course);
            let prerequisites = if course.prerequisites.is_empty() {
                "None".to_string()
            } else {
                course.prerequisites.iter().join(", ")
            };
            output::info(&format!("Prerequisites: {}", prerequisites));
            Ok(())
        }
        None => {
            output::error(&format!("course not found: {}", number));
            process::exit(1);
        }
    }
}

#[instrument(skip(settings))]
fn _config(settings: &Settings) -> CatalogResult<()> {
    output::header("Configuration");
    match global_config_path() {
        Some(path) => output::detail(&format!("global config: {}", path.display())),
        None => output::detail("global config: <unavailable>"),
    }
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _completion(shell: Shell) -> CatalogResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
