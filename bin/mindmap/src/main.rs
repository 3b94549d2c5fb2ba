pub mod api;
pub mod cli;
pub mod http;
pub mod logging;
pub mod model;
pub mod opts;

use anyhow::Result;
use mindmap_core::{IdeaRequest, generate_ideas};

use crate::cli::{Cli, Commands, Parser};
use crate::model::IdeasResponse;

fn main() -> Result<()> {
    // .env is optional
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::init_tracer()?;

    match cli.subcommand {
        Commands::Http { http, llm } => {
            let runtime = Cli::create_runtime(cli.worker_threads)?;
            runtime.block_on(async move { http::run(http, llm).await })
        }
        Commands::Ideas {
            input,
            expand,
            limit,
            llm,
        } => {
            let runtime = Cli::create_runtime(cli.worker_threads)?;
            runtime.block_on(async move {
                let client = llm.client()?;
                let ideas = generate_ideas(&client, &IdeaRequest::new(input, expand, limit)).await?;
                println!("{}", serde_json::to_string_pretty(&IdeasResponse { ideas })?);
                Ok(())
            })
        }
    }
}
