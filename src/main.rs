use maker_facilitator::app::App;
use maker_facilitator::config::MakerConfig;
use maker_facilitator::util::log;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = MakerConfig::load()?;
    log::init_logger(&config.log_dir)?;
    log::init_tracing(&config.log_dir)?;

    let app = App::new(&config).await?;
    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
