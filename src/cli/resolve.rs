//! Resolution commands: `url`, `abs`, `tag`, `link`, `mail`, `item`.

use dzlink::{QueryParams, RequestContext, Resolver, SiteContext, tag_for};

use super::{Cli, Commands};

/// Run a resolving command and return the text to print.
///
/// Returns `None` for commands handled elsewhere.
pub fn run(cli: &Cli, site: &SiteContext) -> Option<String> {
    let request = cli.request();
    let resolver = resolver(site, request.as_ref());

    let out = match &cli.command {
        Commands::Url { target } => resolver.url_for(&target.args, &target.params()),
        Commands::Abs { target } => resolver.abs_url_for(&target.args, &target.params()),
        Commands::Item { target } => resolver.url_for_item(&target.args, &target.params()),
        Commands::Link { label, target } => {
            resolver.link_to(label, &target.args, &target.params())
        }
        Commands::Mail { name, target } => resolver.mail_to(name, &target.args, &target.params()),
        Commands::Tag { name, args, kwargs } => {
            let kwargs: QueryParams = kwargs.iter().cloned().collect();
            tag_for(name, args, &kwargs)
        }
        Commands::Render { .. } | Commands::Requires { .. } => return None,
    };
    Some(out)
}

fn resolver<'a>(site: &'a SiteContext, request: Option<&'a RequestContext>) -> Resolver<'a> {
    let resolver = Resolver::new(site);
    match request {
        Some(request) => resolver.with_request(request),
        None => resolver,
    }
}
