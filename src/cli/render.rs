//! Phase-two commands: `render` and `requires`.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use dzlink::config::SiteConfig;
use dzlink::render::{RenderContext, substitute};
use dzlink::{RequestContext, SiteContext, debug, log};

use super::RenderArgs;

/// Substitute markers in the input, using whatever context the flags give.
pub fn render(
    args: &RenderArgs,
    site: &SiteContext,
    request: Option<&RequestContext>,
) -> Result<String> {
    let input = read_input(args.input.as_deref())?;

    let mut ctx = RenderContext::new(site);
    if let Some(request) = request {
        ctx = ctx.with_request(request);
    }
    if let Some(path) = &args.request_path {
        ctx = ctx.with_request_path(path);
    }
    if let Some(path) = &args.parent_path {
        ctx = ctx.with_parent_path(path);
    }
    if let Some(name) = &args.username {
        ctx = ctx.with_username(name);
    }

    Ok(substitute(&input, &ctx))
}

/// Read a file, or stdin for `-` or no path.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!("render"; "reading {}", path.display());
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Compose the named packages into JSON `{"libs": [...], "styles": [...]}`.
pub fn requires(config: &SiteConfig, names: &[String], pretty: bool) -> Result<String> {
    let registry = config.registry()?;
    let parts = registry.requires(names)?;
    log!("package"; "{} libs, {} styles", parts.libs().len(), parts.styles().len());

    let json = if pretty {
        serde_json::to_string_pretty(&parts)?
    } else {
        serde_json::to_string(&parts)?
    };
    Ok(json)
}
