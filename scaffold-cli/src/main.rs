use anyhow::Result;
use clap::Parser;
use scaffold_cli::{Cli, Commands, commands, serve};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run_serve(args).await,
        Commands::Agents => commands::list_agents(&mut std::io::stdout().lock()),
        Commands::Call { app, tool, args } => {
            let result = commands::call_tool(&app, &tool, args.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
    }
}
