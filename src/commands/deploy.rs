//! Deploy command entry point

use std::sync::Arc;

use anyhow::Result;

use evpn_deploy::application::{BatchRequest, BatchRunner, DeployUseCase};
use evpn_deploy::config::{self, ConfigWarning};
use evpn_deploy::domain::ports::DeployEventSink;
use evpn_deploy::infrastructure::{
    FsDocumentRepository, JsonEventSink, SshConnector, ThreadDelay, YamlInventoryRepository,
};
use evpn_deploy::presentation::Cli;

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::error::format_config_warning;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint_bold, Tone};
use crate::ui::views::summary::render_summary;

/// Run a batch and return the process exit code.
///
/// `Err` is reserved for problems that stop the run before any switch is
/// touched.
pub fn cmd_deploy(cli: &Cli) -> Result<i32> {
    let loaded = config::resolve(cli.settings.as_deref(), &cli.inventory_dir())?;
    let settings = loaded.settings;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &settings.output);

    if let Some(source) = &loaded.source {
        tracing::debug!(settings = %source.display(), "loaded settings");
    }
    report_warnings(&loaded.warnings, &ui);

    let (inventory, warnings) = YamlInventoryRepository::new().load(&cli.inventory)?;
    report_warnings(&warnings, &ui);
    tracing::debug!(switches = inventory.len(), "loaded inventory");

    let documents = FsDocumentRepository::new(cli.resolved_config_dir())?;

    let events: Arc<dyn DeployEventSink> = if cli.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(&ui))
    };

    if cli.dry_run && !cli.json {
        println!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            paint_bold(
                "DRY RUN: no switch will be contacted",
                Tone::Warning,
                ui.color
            )
        );
    }

    let connector = SshConnector::from_settings(&settings);
    let deploy = DeployUseCase::new(connector, ThreadDelay, settings).with_events(events.clone());
    let runner = BatchRunner::new(deploy, documents).with_events(events);

    let mut request = BatchRequest::new().with_dry_run(cli.dry_run);
    if let Some(names) = &cli.switches {
        request = request.with_selection(names.clone());
    }

    let report = runner.run(&inventory, &request);

    if !cli.json {
        print!("\n{}", render_summary(&report, ui.color, ui.unicode));
    }

    Ok(report.exit_code())
}

fn report_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        if ui.json {
            tracing::warn!(
                file = %warning.file.display(),
                key = %warning.key,
                "unknown key"
            );
        } else {
            eprint!("{}", format_config_warning(warning, ui.color, ui.unicode));
        }
    }
}
