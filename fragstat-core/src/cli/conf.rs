use crate::conf::{FragstatConfig, load_config};
use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a configuration file and exit
    Check {
        /// Path to config file
        path: PathBuf,
    },

    /// Print resolved configuration as JSON
    Dump {
        /// Path to config file (defaults are printed when omitted)
        path: Option<PathBuf>,
    },
}

pub fn run(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(&path),
        ConfigCmd::Dump { path } => dump(path.as_deref()),
    }
}

pub fn check(path: &Path) -> Result<()> {
    let cfg = load_config(path)?;

    println!("✔ Config loaded successfully");
    println!("✔ queue capacity: {}", cfg.pipeline.queue_capacity);
    println!(
        "✔ output: {:?} (ranking {})",
        cfg.output.format,
        if cfg.output.ranking { "on" } else { "off" }
    );

    Ok(())
}

pub fn dump(path: Option<&Path>) -> Result<()> {
    let cfg = match path {
        Some(path) => load_config(path)?,
        None => FragstatConfig::default(),
    };

    dump_json(&cfg)
}

fn dump_json<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}
