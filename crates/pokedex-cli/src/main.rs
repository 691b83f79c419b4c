//! CLI entry point.

use clap::Parser;

use pokedex_cli::{Cli, Commands, handlers, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads POKEDEX_*
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve(args) => handlers::serve::execute(args).await?,
        Commands::Seed(args) => handlers::seed::execute(args).await?,
        Commands::Paths => handlers::paths::execute()?,
    }

    Ok(())
}
