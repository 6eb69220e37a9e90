use std::error::Error;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use persona_forge::adapter::IdentityAdapter;
use persona_forge::config::Settings;
use persona_forge::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let client = settings.build_client()?;
    let adapter = IdentityAdapter::new(Arc::new(client));

    let routes = server::routes(adapter);

    info!(port = settings.port, "starting persona-forge");
    warp::serve(routes).run(([0, 0, 0, 0], settings.port)).await;

    Ok(())
}
