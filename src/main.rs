use clap::Parser;
use color_eyre::Result;
use journali::{app::App, cli::Cli, logging, ui::UI, JournalStore};
use log::info;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Kept alive until exit so buffered log lines get flushed.
    let _logger = match &cli.log_dir {
        Some(dir) => Some(logging::init_logging(&cli.log_level, dir)?),
        None => None,
    };

    let mut store = JournalStore::new();
    cli.apply_query(&mut store);
    let mut app = App::new(store);

    let mut ui = UI::new()?;
    ui.run(&mut app)?;
    drop(ui);

    info!("event=app_exit entries={}", app.store().len());
    Ok(())
}
