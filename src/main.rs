use anyhow::{Context, Result};
use std::sync::Arc;
use todolist::cli::{self, Command};
use todolist::config::Config;
use todolist::notifier::HttpNotifier;
use todolist::ui::{self, AppComponent};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => {
            print!("{}", cli::USAGE);
            return Ok(());
        }
        Command::GenerateConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        Command::Run { config: Some(path) } => Config::load_from_file(path)?,
        Command::Run { config: None } => Config::load()?,
    };

    todolist::logger::init(&config.logging)?;

    let notifier = HttpNotifier::from_config(&config.notify).context("Failed to set up notifier")?;
    log::info!("Notifying {} on every added todo", notifier.endpoint());

    let app = AppComponent::new(Arc::new(notifier), config.notify.ignore_stale_failures);
    ui::run_app(app).await?;

    log::info!("Exiting");
    Ok(())
}
