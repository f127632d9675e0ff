use clap::Parser;

use demodeck::cli::{Cli, Commands};
use demodeck::commands;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let folder = commands::resolve_folder(cli.folder)?;

    match cli.command {
        Commands::Scan => commands::folder_cmds::scan_cmd(&folder, cli.json),
        Commands::Compress { demo } => {
            commands::compress_cmds::compress_cmd(&folder, &demo, cli.json).await
        }
        Commands::Extract { archive } => {
            commands::ingest_cmds::extract_cmd(&folder, &archive, cli.json)
        }
        Commands::Ingest { files } => commands::ingest_cmds::ingest_cmd(&folder, &files, cli.json),
        Commands::Rename { file, new_name } => {
            commands::file_cmds::rename_cmd(&folder, &file, &new_name, cli.json)
        }
        Commands::Delete { file } => commands::file_cmds::delete_cmd(&folder, &file, cli.json),
        Commands::Share { file } => commands::file_cmds::share_cmd(&folder, &file, cli.json),
    }
}
