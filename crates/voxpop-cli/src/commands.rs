use anyhow::Result;

use voxpop_types::FeedbackDraft;

use super::args::{Cli, Commands};
use super::handlers;
use crate::config;

pub async fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        handlers::guidance::handle();
        return Ok(());
    };

    let format = cli.format;
    let base_url = config::resolve_base_url(cli.base_url.as_deref())?;

    match command {
        Commands::List { criteria, limit } => {
            handlers::list::handle(&base_url, criteria.resolve(), limit, format).await
        }

        Commands::Submit {
            name,
            email,
            message,
            category,
            rating,
        } => {
            let draft = FeedbackDraft {
                name,
                email,
                category,
                message,
                rating,
            };
            handlers::submit::handle(&base_url, draft, format).await
        }

        Commands::Delete { id } => handlers::delete::handle(&base_url, &id, format).await,

        Commands::Stats { criteria } => {
            handlers::stats::handle(&base_url, criteria.resolve(), format).await
        }

        Commands::Export { criteria, output } => {
            handlers::export::handle(&base_url, criteria.resolve(), output, format).await
        }

        Commands::Categories => handlers::categories::handle(&base_url, format).await,
    }
}
