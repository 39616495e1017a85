use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_mangen::Man;

use webhook_notify::cli::{SendCli, TestCli};

fn main() -> Result<()> {
    let out_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| ".".to_string()));

    for cmd in [SendCli::command(), TestCli::command()] {
        let path = out_dir.join(format!("{}.1", cmd.get_name()));
        let mut file = File::create(&path)
            .with_context(|| format!("Creating man page {}", path.display()))?;
        Man::new(cmd).render(&mut file)
            .with_context(|| format!("Rendering man page {}", path.display()))?;
        eprintln!("Generated man page at {}", path.display());
    }
    Ok(())
}
