use crate::prelude::*;
use clap::Parser;
use std::process::ExitCode;

mod error;
mod identify;
mod plant_id;
mod prelude;
mod server;
mod wiki;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Identify plants from photos and look up how to care for them"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Clone, clap::Args)]
pub struct Global {
    /// Plant.id API key
    #[clap(long, env = "PLANT_ID_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Plant.id identification endpoint
    #[clap(
        long,
        env = "PLANT_ID_API_URL",
        global = true,
        default_value = plant_id::PLANT_ID_API_URL
    )]
    plant_id_url: String,

    /// Base URL that article slugs are appended to
    #[clap(
        long,
        env = "PLANTLY_WIKI_BASE_URL",
        global = true,
        default_value = wiki::WIKI_BASE_URL
    )]
    wiki_base_url: String,

    /// Whether to display additional information.
    #[clap(long, env = "PLANTLY_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

// Keeps the API key out of debug output.
impl std::fmt::Debug for Global {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Global")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("plant_id_url", &self.plant_id_url)
            .field("wiki_base_url", &self.wiki_base_url)
            .field("verbose", &self.verbose)
            .finish()
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the /predict endpoint over HTTP
    Serve(crate::server::ServeOptions),

    /// Identify a plant from a local image file
    Identify(crate::identify::IdentifyOptions),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global)
            .await
            .map(|()| ExitCode::SUCCESS),
        SubCommands::Identify(options) => crate::identify::run(options, app.global).await,
    }
}
