use clap::Subcommand;
use tabatax_core::AppConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the full configuration as TOML
    Show,
    /// List every key with its current value
    List,
    /// Get a value by dot key (e.g. timing.workDuration)
    Get { key: String },
    /// Set a value by dot key
    Set { key: String, value: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let cfg = AppConfig::load()?;
            print!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigAction::List => {
            let cfg = AppConfig::load()?;
            for key in AppConfig::KEYS {
                println!("{key} = {}", cfg.get(key).unwrap_or_default());
            }
        }
        ConfigAction::Get { key } => {
            let cfg = AppConfig::load()?;
            match cfg.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown config key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut cfg = AppConfig::load()?;
            cfg.set(&key, &value)?;
            println!("{key} = {}", cfg.get(&key).unwrap_or_default());
        }
    }
    Ok(())
}
