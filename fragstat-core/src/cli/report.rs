use crate::analytics::{analyze_file, render};
use crate::conf::{FragstatConfig, OutputFormat, load_config};
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the game server log
    pub path: PathBuf,

    /// Path to a fragstat TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Lines buffered between reader and segmenter (overrides the config file)
    #[arg(long)]
    pub queue_capacity: Option<usize>,

    /// Leave the ranking block out of text output
    #[arg(long)]
    pub no_ranking: bool,
}

impl ReportArgs {
    /// Defaults for everything but the log path.
    pub fn for_path(path: PathBuf) -> Self {
        Self {
            path,
            config: None,
            format: None,
            queue_capacity: None,
            no_ranking: false,
        }
    }
}

pub fn run(args: ReportArgs) -> Result<()> {
    let cfg = resolve_config(&args)?;

    let analysis = analyze_file(&args.path, &cfg.pipeline)?;
    let rendered = render(&analysis.report, &cfg.output).context("failed to render report")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendered.as_bytes())?;
    out.flush()?;

    Ok(())
}

/// Config file (or defaults) with command line overrides applied on top.
pub fn resolve_config(args: &ReportArgs) -> Result<FragstatConfig> {
    let mut cfg = match &args.config {
        Some(path) => load_config(path)?,
        None => FragstatConfig::default(),
    };

    if let Some(format) = args.format {
        cfg.output.format = format;
    }
    if let Some(capacity) = args.queue_capacity {
        cfg.pipeline.queue_capacity = capacity;
    }
    if args.no_ranking {
        cfg.output.ranking = false;
    }

    cfg.validate()?;
    Ok(cfg)
}
