use blog_server::BlogServer;

use crate::cli::Cli;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    tracing::info!(port = config.port, capacity = config.capacity, "starting blog server");

    let server = BlogServer::new(config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}
