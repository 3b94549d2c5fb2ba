pub use clap::{self, Parser};

use crate::opts::{HttpOpts, LlmOpts};

#[derive(Parser, Debug)]
#[clap(
    name = "mindmap",
    version,
    about,
    rename_all = "kebab-case",
    rename_all_env = "screaming-snake"
)]
pub struct Cli {
    /// Tokio worker threads (optional override)
    #[arg(long, env = "MINDMAP_WORKER_THREADS", global = true)]
    pub worker_threads: Option<usize>,

    /// Subcommands
    #[clap(subcommand)]
    pub subcommand: Commands,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the HTTP server
    Http {
        #[clap(flatten)]
        http: HttpOpts,

        #[clap(flatten)]
        llm: LlmOpts,
    },
    /// Generate ideas once and print them as JSON
    Ideas {
        /// Topic, or the label of the node to expand
        input: String,

        /// Treat the input as an existing node to break down
        #[arg(long)]
        expand: bool,

        /// Number of ideas to ask for
        #[arg(long, default_value_t = mindmap_core::model::DEFAULT_IDEA_LIMIT)]
        limit: usize,

        #[clap(flatten)]
        llm: LlmOpts,
    },
}

impl Cli {
    pub fn create_runtime(
        worker_threads: Option<usize>,
    ) -> anyhow::Result<tokio::runtime::Runtime> {
        let mut builder = tokio::runtime::Builder::new_multi_thread();
        if let Some(n) = worker_threads {
            builder.worker_threads(n);
        }
        builder.enable_all().build().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ideas_subcommand() {
        let cli = Cli::parse_from([
            "mindmap",
            "ideas",
            "Rust",
            "--expand",
            "--limit",
            "5",
            "--openai-api-key",
            "sk-test",
        ]);
        match cli.subcommand {
            Commands::Ideas {
                input,
                expand,
                limit,
                llm,
            } => {
                assert_eq!(input, "Rust");
                assert!(expand);
                assert_eq!(limit, 5);
                assert_eq!(llm.openai_api_key, "sk-test");
                assert_eq!(llm.model, "gpt-4");
            }
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }
}
