use actix_web::HttpServer;
use checkin_backend::config::Settings;
use checkin_backend::error::StartupError;
use checkin_backend::infrastructure::db::{create_pool, SqlxSchemaBootstrapper};
use checkin_backend::lifecycle::startup;
use checkin_backend::observability::init_tracing;
use checkin_backend::{build_app, AppContext};
use tracing::{error, info};

#[actix_web::main]
async fn main() {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("failed to resolve configuration: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(settings).await {
        error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(settings: Settings) -> Result<(), StartupError> {
    init_tracing(&settings)?;

    info!(
        "Launching {}, version: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let ctx = AppContext::new(settings);
    startup::log_resolved_settings(&ctx.settings, &ctx.cors);

    let settings = ctx.settings.clone();
    let pool = create_pool(&settings)?;
    let schema = SqlxSchemaBootstrapper::new(pool.clone(), settings.migrations_dir.clone());
    startup::prepare(&settings, &schema).await?;

    let bind_address = (settings.host.clone(), settings.port);
    let ctx = ctx.with_db_pool(pool);

    HttpServer::new(move || build_app(ctx.clone()))
        .bind(bind_address)?
        .run()
        .await?;

    info!("Shutdown complete");
    Ok(())
}
