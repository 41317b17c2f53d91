use anyhow::Context;
use clap::Parser;

use stockroom_cli::{Cli, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    stockroom_observability::init(cli.log_format);

    tracing::info!(
        restock_threshold = cli.restock_threshold,
        output = ?cli.output,
        "starting inventory session"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(cli.inventory_config(), cli.output, stdin.lock(), stdout.lock());

    session
        .run()
        .context("terminal input/output failed; leaving the command loop")?;

    tracing::info!(items = session.store().len(), "session finished");
    Ok(())
}
