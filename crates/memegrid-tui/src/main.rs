use anyhow::Result;
use memegrid_core::settings::Settings;
mod logging;
mod terminal;
mod ui;
use ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing();

    let settings = Settings::new();
    let mut tui = terminal::init()?;
    let mut app = App::new(settings);

    let result = app.run(&mut tui).await;

    terminal::restore(&mut tui)?;

    result
}
