use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod init;

#[derive(Parser)]
#[command(about = "scouting report web service")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    Listen,
    Init,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Init) => {
            init::apply()?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
