use std::io;

use anyhow::Context;

use drinkstock_cli::{CliConfig, Menu, Presenter};
use drinkstock_inventory::InventoryService;

fn main() -> anyhow::Result<()> {
    drinkstock_observability::init();

    let config = CliConfig::from_env();
    tracing::info!(session_mode = %config.session_mode, "starting drink inventory session");

    let mut presenter = Presenter::new(InventoryService::new());
    let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock(), config.session_mode);

    let end = menu
        .run(&mut presenter)
        .context("drink inventory session failed")?;

    tracing::info!(
        ?end,
        drinks = presenter.service().len(),
        events = presenter.service().history().len(),
        "session ended"
    );
    Ok(())
}
