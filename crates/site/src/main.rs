// SPDX-FileCopyrightText: 2024 Filip Krawczyk
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use sitekit::BuildParams;

use site::overrides;

#[derive(Parser)]
#[command(author, version, about = "Build Filip Krawczyk's personal site", long_about = None)]
#[command(name = "site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the site into the output directory
    Build(BuildArgs),
    /// Validate the config and content without writing anything
    Check(CheckArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// Site configuration file
    #[arg(long, default_value = "site.yaml")]
    config: PathBuf,

    /// Markdown content directory
    #[arg(long, default_value = "content")]
    content: PathBuf,

    /// Static asset directory, copied into the output verbatim
    #[arg(long = "static", default_value = "static")]
    static_dir: PathBuf,

    /// Output directory
    #[arg(long, default_value = "public")]
    out: PathBuf,
}

#[derive(Args)]
struct CheckArgs {
    /// Site configuration file
    #[arg(long, default_value = "site.yaml")]
    config: PathBuf,

    /// Markdown content directory
    #[arg(long, default_value = "content")]
    content: PathBuf,
}

impl BuildArgs {
    fn params(&self) -> BuildParams {
        BuildParams {
            config: self.config.clone(),
            content: self.content.clone(),
            static_dir: Some(self.static_dir.clone()),
            out: self.out.clone(),
        }
    }
}

fn build_command(args: &BuildArgs) -> Result<()> {
    let report = sitekit::build(&args.params(), &overrides::overrides())?;
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
    println!(
        "wrote {} pages, {} posts, {} assets to {}",
        report.pages,
        report.posts,
        report.assets,
        args.out.display()
    );
    Ok(())
}

fn check_command(args: &CheckArgs) -> Result<()> {
    let report = sitekit::check(&args.config, &args.content)?;
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
    if report.warnings.is_empty() {
        println!("ok: {} pages, {} posts", report.pages, report.posts);
        Ok(())
    } else {
        Err(anyhow!("check found {} warning(s)", report.warnings.len()))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Build(args) => build_command(args),
        Commands::Check(args) => check_command(args),
    }
}
