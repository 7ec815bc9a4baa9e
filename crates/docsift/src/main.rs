mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so results on stdout stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = commands::Context::new(cli.corpus.as_deref(), cli.config.as_deref());

    match cli.command {
        Commands::Search { query, json, limit } => {
            commands::search::run(&ctx, &query.join(" "), json, limit)
        }
        Commands::Tokenize { text, json } => commands::tokenize::run(&ctx, &text.join(" "), json),
        Commands::Show { id, json } => commands::show::run(&ctx, &id, json),
        Commands::List => commands::list::run(&ctx),
        Commands::Chat => commands::chat::run(&ctx),
        Commands::Version => commands::version::run(),
    }
}
