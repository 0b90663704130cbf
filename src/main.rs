//! dzlink - resolve site URLs and placeholder tags from the command line.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use dzlink::config::SiteConfig;
use dzlink::{debug, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = match SiteConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            logger::status_error(&format!("failed to load {}", cli.config.display()), &e.to_string());
            std::process::exit(1);
        }
    };

    let mut site = config.site_context();
    if let Some(root) = &cli.root {
        site.url = root.clone();
    }
    debug!("config"; "site root `{}`", site.root());

    let request = cli.request();
    let output = match &cli.command {
        Commands::Render { args } => cli::render::render(args, &site, request.as_ref())?,
        Commands::Requires { names, pretty } => cli::render::requires(&config, names, *pretty)?,
        _ => cli::resolve::run(&cli, &site).unwrap_or_default(),
    };

    // Rendered files usually carry their own trailing newline
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
    Ok(())
}
