//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use dzlink::Scalar;
use std::path::PathBuf;

/// Resolve site URLs, render placeholder tags and compose packages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: dz.toml)
    #[arg(short = 'C', long, global = true, default_value = "dz.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the site root prefix (`[site] url`)
    #[arg(long, global = true)]
    pub root: Option<String>,

    /// Current route, e.g. `myapp/mypage`
    #[arg(long, global = true)]
    pub route: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve a site-relative URL
    #[command(visible_alias = "u")]
    Url {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Resolve an absolute URL
    #[command(visible_alias = "a")]
    Abs {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Render a placeholder tag
    #[command(visible_alias = "t")]
    Tag {
        /// Tag name
        name: String,

        /// Positional tag arguments
        #[arg(value_parser = parse_scalar)]
        args: Vec<Scalar>,

        /// Keyword argument (repeatable)
        #[arg(short, long = "kwarg", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        kwargs: Vec<(String, Scalar)>,
    },

    /// Render an anchor to a resolved URL
    #[command(visible_alias = "l")]
    Link {
        /// Link text; also the target when no ARGS are given
        label: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Render a contact anchor
    #[command(visible_alias = "m")]
    Mail {
        /// Contact name; also the target when no ARGS are given
        name: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Resolve an item URL under the current route
    #[command(visible_alias = "i")]
    Item {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Substitute placeholder markers in a file (or stdin)
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Compose the scripts and stylesheets of the named packages
    #[command(visible_alias = "p")]
    Requires {
        /// Package names
        #[arg(required = true)]
        names: Vec<String>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

/// Path arguments and query parameters shared by resolving commands.
#[derive(clap::Args, Debug, Clone)]
pub struct TargetArgs {
    /// Path segments; all-digit segments are integers
    #[arg(value_parser = parse_scalar)]
    pub args: Vec<Scalar>,

    /// Query parameter (repeatable)
    #[arg(short, long = "query", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub query: Vec<(String, Scalar)>,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Input file; omit or use `-` to read stdin
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Value for `<dz:request_path>` (default: derived from --route)
    #[arg(long)]
    pub request_path: Option<String>,

    /// Value for `<dz:parent_path>` (default: parent of the request path)
    #[arg(long)]
    pub parent_path: Option<String>,

    /// Value for `<dz:username>`
    #[arg(short, long)]
    pub username: Option<String>,
}

fn parse_scalar(s: &str) -> Result<Scalar, String> {
    Ok(Scalar::from_token(s))
}

/// Parse `key=value`; the value follows command-line scalar rules.
fn parse_key_value(s: &str) -> Result<(String, Scalar), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    Ok((key.to_string(), Scalar::from_token(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("age=15").unwrap(),
            ("age".to_string(), Scalar::Int(15))
        );
        assert_eq!(
            parse_key_value("q=a=b").unwrap(),
            ("q".to_string(), Scalar::from("a=b"))
        );
        assert_eq!(
            parse_key_value("q=").unwrap(),
            ("q".to_string(), Scalar::from(""))
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=1").is_err());
    }

    #[test]
    fn test_cli_parses_url_command() {
        let cli = Cli::try_parse_from(["dzlink", "url", "/user", "1234", "-q", "q=test one"]).unwrap();
        let Commands::Url { target } = cli.command else {
            panic!("expected url command");
        };
        assert_eq!(target.args, [Scalar::from("/user"), Scalar::Int(1234)]);
        assert_eq!(target.query, [("q".to_string(), Scalar::from("test one"))]);
        assert_eq!(cli.config, PathBuf::from("dz.toml"));
    }

    #[test]
    fn test_cli_global_flags_after_command() {
        let cli = Cli::try_parse_from(["dzlink", "item", "7", "--route", "shop/items", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.route.as_deref(), Some("shop/items"));
    }

    #[test]
    fn test_cli_requires_needs_names() {
        assert!(Cli::try_parse_from(["dzlink", "requires"]).is_err());
    }
}
