use anyhow::{Context, Result};
use luascope_core::ScanConfig;
use std::{env, path::PathBuf};
use tracing::info;

/// Matches per scan before giving up on a pathological buffer
const DEFAULT_MAX_STEPS: usize = 1_000_000;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let project_root = if let Some(cwd) = cwd {
        PathBuf::from(cwd)
    } else {
        env::current_dir().context("Failed to get current directory")?
    };

    let config_path = project_root.join(".luascope.json");
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let config = ScanConfig {
        max_steps: Some(DEFAULT_MAX_STEPS),
        ..ScanConfig::default()
    };
    config
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    info!("Wrote {}", config_path.display());
    println!("✅ Created config: {}", config_path.display());

    Ok(())
}
