use std::io::Read;
use std::path::PathBuf;

use clap::Subcommand;
use numberplay_core::module::{parse_response, ModuleStore};

use super::Cache;

#[derive(Subcommand)]
pub enum ModuleAction {
    /// List saved modules
    List,
    /// Show one module as JSON
    Show { id: String },
    /// Import a generator response from a file (stdin if omitted)
    Import { file: Option<PathBuf> },
    /// Delete a module
    Remove { id: String },
}

pub fn run(cache: &Cache, action: ModuleAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = ModuleStore::new(cache);
    match action {
        ModuleAction::List => {
            let modules = store.all();
            if modules.is_empty() {
                println!("No saved modules.");
                return Ok(());
            }
            for module in modules {
                println!(
                    "{}  {} ({}, {}, {} problems)",
                    module.id,
                    module.title,
                    module.kind,
                    module.difficulty,
                    module.problems.len()
                );
            }
        }
        ModuleAction::Show { id } => match store.find(&id) {
            Some(module) => println!("{}", serde_json::to_string_pretty(&module)?),
            None => return Err(format!("no module with id '{id}'").into()),
        },
        ModuleAction::Import { file } => {
            let response = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let module = parse_response(&response)?;
            store.save(&module)?;
            println!("Saved module '{}' ({}).", module.title, module.id);
        }
        ModuleAction::Remove { id } => {
            if store.remove(&id)? {
                println!("Removed module '{id}'.");
            } else {
                return Err(format!("no module with id '{id}'").into());
            }
        }
    }
    Ok(())
}
