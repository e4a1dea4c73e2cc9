use clap::Subcommand;
use numberplay_core::storage::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a value by dot-separated key (e.g. numberline.max)
    Get { key: String },
    /// Set a value by dot-separated key
    Set { key: String, value: String },
    /// Show the full configuration
    Show,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_or_default();
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown config key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
