mod app;
mod config;
mod constants;
mod handlers;
mod logger;
mod types;
mod ui;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use app::App;
use handlers::InputHandler;

#[tokio::main]
async fn main() -> Result<()> {
    config::load_dotenv();
    logger::init_logging();

    let config = config::AppConfig::from_env()?;
    let app = App::new(config)?;

    ui::print_welcome(app.backend_configured());
    app.render();
    ui::show_prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if InputHandler::handle_line(&app, &line).await? {
            break;
        }
        ui::show_prompt();
    }

    ui::print_goodbye();
    Ok(())
}
