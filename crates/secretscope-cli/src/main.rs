use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod report;

use args::{AwsCommand, Cli, Command, ConsumersCommand, ListActualArgs};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Aws(AwsCommand::Consumers(ConsumersCommand::ListActual(args))) => {
            list_actual(args).await
        }
    }
}

async fn list_actual(args: ListActualArgs) -> eyre::Result<()> {
    report::announce(&args.secret_id, args.days_back);

    let events = secretscope_cloudtrail::collect_secret_events(
        args.region.as_deref(),
        args.profile.as_deref(),
        args.days_back,
    )
    .await?;

    let mut consumers = secretscope_engine::actual_consumers(&events, &args.secret_id);
    secretscope_engine::sort_consumers(&mut consumers);

    report::render(&consumers);
    Ok(())
}
