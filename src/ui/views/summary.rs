//! Batch summary block

use evpn_deploy::application::BatchReport;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, paint_bold, Tone};
use crate::ui::theme;

pub fn render_summary(report: &BatchReport, supports_color: bool, supports_unicode: bool) -> String {
    let rule = theme::rule(supports_unicode);
    let mut out = format!(
        "{rule}\n{}\n{rule}\n",
        paint_bold("Deployment Summary", Tone::Info, supports_color)
    );

    for outcome in &report.outcomes {
        let (icon, tone) = if outcome.succeeded {
            (Icon::Success, Tone::Success)
        } else {
            (Icon::Error, Tone::Error)
        };
        out.push_str(&format!(
            "{}: {} {}\n",
            outcome.target,
            icon.colored(supports_color, supports_unicode),
            paint(outcome.status_label(), tone, supports_color)
        ));
    }

    for name in &report.skipped {
        out.push_str(&format!(
            "{}: {} {}\n",
            name,
            Icon::Warning.colored(supports_color, supports_unicode),
            paint("SKIPPED (not in inventory)", Tone::Warning, supports_color)
        ));
    }

    out.push_str(&format!(
        "\n{} succeeded, {} failed, {} skipped\n",
        report.succeeded(),
        report.failed(),
        report.skipped.len()
    ));

    let verdict = if report.exit_code() == 0 {
        format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            paint_bold(
                "All deployments completed successfully!",
                Tone::Success,
                supports_color
            )
        )
    } else {
        format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            paint_bold(
                "Some deployments failed. Check the output above for details.",
                Tone::Error,
                supports_color
            )
        )
    };
    out.push_str(&verdict);
    out.push('\n');
    out
}
