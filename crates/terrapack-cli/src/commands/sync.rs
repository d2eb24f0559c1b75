//! `terrapack sync` - stage, commit, and push generated assets.
//!
//! A convenience wrapper around `git`, independent of the build pipeline: it
//! takes nothing from a build and reports only success or failure.

use std::process::{Command, ExitCode};

use anyhow::{bail, Context, Result};

/// Run the git sync sequence.
pub fn run(message: Option<&str>) -> Result<ExitCode> {
    let message = match message {
        Some(m) => m.to_string(),
        None => {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M");
            format!("Automated terrapack asset sync - {}", timestamp)
        }
    };

    git(&["add", "-A"])?;
    git(&["commit", "-m", &message])?;
    git(&["push"])?;

    println!("Synced: {}", message);
    Ok(ExitCode::SUCCESS)
}

fn git(args: &[&str]) -> Result<()> {
    let status = Command::new("git")
        .args(args)
        .status()
        .with_context(|| format!("failed to run 'git {}'", args.join(" ")))?;
    if !status.success() {
        bail!("'git {}' exited with {}", args.join(" "), status);
    }
    Ok(())
}
