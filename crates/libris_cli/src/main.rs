//! Interactive book catalog binary.
//!
//! # Responsibility
//! - Wire logging, catalog and terminal view together.
//! - Keep process exit clean: code 0 on exit option or end of input.

use eyre::{eyre, Context, Result};
use libris_core::{default_log_level, init_logging, CatalogService, MemoryBookRepository};
use log::info;

mod app;
mod input;
mod view;

use app::App;
use view::TerminalView;

fn main() -> Result<()> {
    init_logging(default_log_level()).map_err(|err| eyre!(err))?;
    info!("event=cli_start module=main status=ok");

    let view = TerminalView::new().context("failed to initialize terminal input")?;
    let catalog = CatalogService::new(MemoryBookRepository::new());

    App::new(catalog, view).run();

    Ok(())
}
