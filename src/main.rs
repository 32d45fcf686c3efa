use tracing::error;
use tracing_subscriber::EnvFilter;

use roster_importer::application::ImportRosterUseCase;
use roster_importer::domain::roster::ImportConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(env).try_init();

    let config = ImportConfig::from_env();
    println!("creating new {}...", config.db_path);

    let use_case = match ImportRosterUseCase::new(config) {
        Ok(use_case) => use_case,
        Err(err) => {
            error!(error = %err, "invalid import configuration");
            std::process::exit(1);
        }
    };

    match use_case.run().await {
        Ok(summary) => {
            println!(
                "done ({} inserted, {} skipped of {} read)",
                summary.rows_inserted, summary.rows_skipped, summary.rows_read
            );
        }
        Err(err) => {
            error!(error = %err, "import failed");
            std::process::exit(1);
        }
    }
}
