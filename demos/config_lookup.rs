//! Demonstrates resolving configuration settings that may or may not be set.
//!
//! Each setting is looked up in an environment-like map, then transformed,
//! validated and given a fallback through `Optional`'s chainable operations.
//!
//! Run with: cargo run --example config_lookup

use optional_value::{Optional, OptionalError};
use std::collections::HashMap;
use std::fmt;

fn main() -> Result<(), ConfigError> {
    let mut env = HashMap::new();
    env.insert("APP_NAME", " inventory ".to_string());
    env.insert("APP_PORT", "8080".to_string());
    env.insert("APP_WORKERS", "0".to_string());

    let source = Source { env };

    // Present value, trimmed
    let name = source
        .lookup("APP_NAME")
        .map(Some(|s: String| Some(s.trim().to_string())))?;
    println!("Name: {}", name);

    // Parsed, with a parse failure surfacing as empty
    let port = source
        .lookup("APP_PORT")
        .flat_map(Some(|s: String| Some(Optional::of_nullable(s.parse::<u16>().ok()))))?;
    println!("Port: {}", port);

    // Present but rejected by validation, so the default applies
    let workers = source
        .lookup("APP_WORKERS")
        .map(Some(|s: String| s.parse::<u32>().ok()))?
        .filter(Some(|n: &u32| *n > 0))?
        .or_else_get(Some(|| Some(4)))?;
    println!("Workers: {:?}", workers);

    // Missing entirely, with a secondary source to fall back on
    let region = source
        .lookup("APP_REGION")
        .or(Some(|| Some(source.lookup("DEFAULT_REGION"))))?;
    println!("Region: {}", region);

    // Reacting to presence without unwrapping
    region.if_present_or_else(
        Some(|r: &String| println!("Deploying to {}", r)),
        Some(|| println!("No region configured, deploying locally")),
    )?;

    // Required setting: report a domain error when it is missing
    match source
        .lookup("APP_SECRET")
        .or_else_throw(Some(|| Some(ConfigError::Missing("APP_SECRET"))))
    {
        Ok(_) => println!("Secret loaded"),
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}

struct Source {
    env: HashMap<&'static str, String>,
}

impl Source {
    fn lookup(&self, key: &str) -> Optional<String> {
        Optional::of_nullable(self.env.get(key).cloned())
    }
}

#[derive(Debug)]
enum ConfigError {
    Missing(&'static str),
    Optional(OptionalError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "Required setting {} is missing", key),
            ConfigError::Optional(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<OptionalError> for ConfigError {
    fn from(err: OptionalError) -> Self {
        ConfigError::Optional(err)
    }
}
