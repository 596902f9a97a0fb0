use loan_api::ApiClient;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Show(args) => commands::show::handle(&args, client, flags).await,
        Commands::Browse(args) => commands::browse::handle(&args, client, flags).await,
        Commands::Export(args) => commands::export::handle(&args, client, flags).await,
        Commands::Find(args) => commands::find::handle(&args, client, flags).await,
    }
}
