mod bootstrap;

use anyhow::{Context, Result};
use dashboard_core::settings::Settings;
use dashboard_runtime::context::DashboardContext;
use dashboard_runtime::report;
use dashboard_runtime::session::DashboardSession;
use dashboard_ui::app::App;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, bootstrap::log_destination(&settings))?;

    tracing::info!("Bike Sharing Dashboard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "View: {}, Theme: {}, Chart scope: {}",
        settings.view,
        settings.theme,
        settings.chart_scope
    );

    let data_dir = bootstrap::discover_data_dir(&settings)?;
    let (hourly_path, daily_path) = settings.data_files_in(&data_dir);

    let context = DashboardContext::load(&hourly_path, &daily_path)
        .with_context(|| format!("failed to load dataset from {}", data_dir.display()))?
        .with_monthly_year(settings.year);

    let session = DashboardSession::new(
        context,
        settings.start,
        settings.end,
        settings.chart_scope(),
    );

    if settings.is_report() {
        let output = match settings.format.as_str() {
            "json" => report::to_json(session.view())?,
            _ => report::to_text(session.view()),
        };
        println!("{output}");
        return Ok(());
    }

    // Raw mode turns Ctrl+C into a key event, which the app handles itself.
    App::new(&settings.theme, session).run().await?;
    tracing::info!("dashboard closed");

    Ok(())
}
