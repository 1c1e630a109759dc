use fitvids::{
    config::SearchConfig,
    ui::app::App,
    util::{hook::set_panic_hook, log::initialize_logging},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    setup()?;

    let config = SearchConfig::from_env()?;
    let mut app = App::new(&config)?;
    app.run().await
}

fn setup() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    set_panic_hook();
    initialize_logging()
}
