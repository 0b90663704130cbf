//! Command-line interface module.

mod args;
pub mod render;
pub mod resolve;

pub use args::{Cli, Commands, RenderArgs, TargetArgs};

use dzlink::{QueryParams, RequestContext};

impl TargetArgs {
    pub fn params(&self) -> QueryParams {
        self.query.iter().cloned().collect()
    }
}

impl Cli {
    /// The `--route` request, if one was given.
    pub fn request(&self) -> Option<RequestContext> {
        self.route.as_deref().map(RequestContext::from_path)
    }
}
