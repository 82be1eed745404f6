use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use plantly_core::identify::{build_identification, IdentificationOutput};
use plantly_core::plant_id::top_suggestion;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::{plant_id, wiki};

#[derive(Debug, clap::Args, Clone)]
pub struct IdentifyOptions {
    /// Path to the image to identify
    #[clap(env = "PLANTLY_IMAGE")]
    pub image: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// The identification pipeline shared by the HTTP handler and the CLI
#[derive(Clone)]
pub struct Pipeline {
    client: reqwest::Client,
    api_key: String,
    plant_id_url: String,
    wiki_base_url: String,
}

impl Pipeline {
    pub fn new(
        api_key: impl Into<String>,
        plant_id_url: impl Into<String>,
        wiki_base_url: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("plantly/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            plant_id_url: plant_id_url.into(),
            wiki_base_url: wiki_base_url.into(),
        })
    }

    pub fn from_global(global: &crate::Global) -> Result<Self> {
        let api_key = global
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| eyre!("A Plant.id API key is required (--api-key or PLANT_ID_API_KEY)"))?;

        Self::new(api_key, &global.plant_id_url, &global.wiki_base_url)
    }

    /// Identify the plant in `image` and attach care notes for the top match
    pub async fn identify(&self, image: &[u8]) -> Result<IdentificationOutput, Error> {
        let response =
            plant_id::classify(&self.client, &self.plant_id_url, &self.api_key, image).await?;
        let suggestion = top_suggestion(&response)?;

        log::info!("Identified {}", suggestion.plant_name);

        let care =
            wiki::fetch_care_notes(&self.client, &self.wiki_base_url, &suggestion.plant_name).await;

        Ok(build_identification(&suggestion, care))
    }
}

pub async fn run(options: IdentifyOptions, global: crate::Global) -> Result<ExitCode> {
    let pipeline = Pipeline::from_global(&global)?;

    if global.verbose {
        eprintln!("Reading image: {}", options.image.display());
    }

    let image = tokio::fs::read(&options.image)
        .await
        .with_context(|| f!("Failed to read {}", options.image.display()))?;

    let result = pipeline.identify(&image).await;

    if options.json {
        // Failures are reported once, as JSON on stdout, plus the exit code.
        let (json, succeeded) = format_result_json(&result)?;
        println!("{}", json);
        return Ok(if succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    match result {
        Ok(output) => {
            output_formatted(&output);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Err(eyre!(err)),
    }
}

/// Build the JSON printed by `identify --json` and whether it is a success
fn format_result_json(result: &Result<IdentificationOutput, Error>) -> Result<(String, bool)> {
    match result {
        Ok(output) => Ok((serde_json::to_string_pretty(output)?, true)),
        Err(err) => Ok((serde_json::to_string_pretty(&err.to_output())?, false)),
    }
}

fn output_formatted(output: &IdentificationOutput) {
    println!("\n{}", output.plant_name.bright_green().bold());

    if !output.common_names.is_empty() {
        println!(
            "{}: {}",
            "Common names".green(),
            output.common_names.join(", ").bright_white()
        );
    }

    if !output.wiki_url.is_empty() {
        println!("{}: {}", "Wikipedia".green(), output.wiki_url.cyan().underline());
    }

    println!("\n{}", output.description);

    println!("\n{}", "Care tips".bright_yellow().bold());
    for tip in &output.care_tips {
        println!("  - {}", tip);
    }
    println!();
}
