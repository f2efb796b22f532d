use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "secretscope")]
#[command(about = "Attribute access to vault secrets from audit logs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze secrets stored in AWS Secrets Manager
    #[command(subcommand)]
    Aws(AwsCommand),
}

#[derive(Subcommand)]
pub enum AwsCommand {
    /// Identify the consumers of a secret
    #[command(subcommand)]
    Consumers(ConsumersCommand),
}

#[derive(Subcommand)]
pub enum ConsumersCommand {
    /// List identities that actually read the secret, from CloudTrail
    /// read events in the query window
    ListActual(ListActualArgs),
}

#[derive(Args)]
pub struct ListActualArgs {
    /// AWS secret ID: bare name or full ARN (required)
    #[arg(short, long)]
    pub secret_id: String,

    /// AWS region of the secret (profile default region when omitted)
    #[arg(short, long)]
    pub region: Option<String>,

    /// AWS profile to use (active profile when omitted)
    #[arg(short, long)]
    pub profile: Option<String>,

    /// How many days back to query CloudTrail for events
    #[arg(short, long, default_value_t = 14)]
    pub days_back: u32,
}
