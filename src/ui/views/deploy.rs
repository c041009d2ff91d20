//! Per-target progress lines

use std::path::Path;

use evpn_deploy::domain::value_objects::{Severity, Step, StepResult};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, paint_bold, Tone};
use crate::ui::theme;

pub fn render_target_header(
    target: &str,
    host: &str,
    port: u16,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let rule = theme::rule(supports_unicode);
    let endpoint = if port == 22 {
        host.to_string()
    } else {
        format!("{host}:{port}")
    };
    format!(
        "\n{rule}\n{} {}\n{rule}\n",
        Icon::Switch.colored(supports_color, supports_unicode),
        paint_bold(
            &format!("Deploying to {target} ({endpoint})"),
            Tone::Info,
            supports_color
        ),
    )
}

pub fn render_step(result: &StepResult, supports_color: bool, supports_unicode: bool) -> String {
    if result.succeeded {
        return format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            result.message
        );
    }

    let (icon, tone) = match result.severity {
        Severity::Soft => (Icon::Warning, Tone::Warning),
        Severity::Hard => (Icon::Error, Tone::Error),
    };
    format!(
        "{} {} {}\n",
        icon.colored(supports_color, supports_unicode),
        paint(&format!("Failed to {}:", result.step), tone, supports_color),
        result.message
    )
}

pub fn render_warning(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        paint(message, Tone::Warning, supports_color)
    )
}

pub fn render_wait(step: Step, seconds: u64, supports_color: bool, supports_unicode: bool) -> String {
    let what = match step {
        Step::SettleDelay => "network to settle",
        Step::ConvergenceDelay => "BGP to converge",
        other => other.label(),
    };
    format!(
        "{} {}\n",
        Icon::Wait.colored(supports_color, supports_unicode),
        paint(
            &format!("Waiting {seconds}s for {what}..."),
            Tone::Dim,
            supports_color
        )
    )
}

/// Verification output under a `--- <label> on <host> ---` banner
pub fn render_verification(step: Step, host: &str, output: &str, supports_color: bool) -> String {
    let label = match step {
        Step::VerifyOverlay => "EVPN Summary",
        _ => "BGP Summary",
    };
    let banner = paint(&format!("--- {label} on {host} ---"), Tone::Info, supports_color);
    let body = output.trim_end();
    if body.is_empty() {
        format!("\n{banner}\n")
    } else {
        format!("\n{banner}\n{body}\n")
    }
}

pub fn render_dry_run(
    config_file: &Path,
    host: &str,
    sections: &[(String, usize)],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Progress.colored(supports_color, supports_unicode),
        paint_bold(
            &format!("DRY RUN: Would deploy {} to {}", config_file.display(), host),
            Tone::Warning,
            supports_color
        )
    );
    for (destination, lines) in sections {
        out.push_str(&format!(
            "  {} {}: {} lines\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            destination,
            lines
        ));
    }
    out
}

pub fn render_target_error(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        paint(message, Tone::Error, supports_color)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_shows_non_default_port() {
        let rendered = render_target_header("leaf1", "10.0.0.1", 2222, false, false);
        assert!(rendered.contains("[SWITCH] Deploying to leaf1 (10.0.0.1:2222)"));
        assert!(rendered.contains(&"=".repeat(60)));
    }

    #[test]
    fn header_omits_default_port() {
        let rendered = render_target_header("leaf1", "10.0.0.1", 22, false, true);
        assert!(rendered.contains("Deploying to leaf1 (10.0.0.1)"));
    }

    #[test]
    fn soft_failure_renders_as_warning() {
        let result = StepResult::failure(Step::SetHostname, "exited with status 1");
        assert_eq!(
            render_step(&result, false, false),
            "[WARN] Failed to set hostname: exited with status 1\n"
        );
    }

    #[test]
    fn hard_failure_renders_as_error() {
        let result = StepResult::failure(Step::ReloadNetworking, "timed out");
        assert_eq!(
            render_step(&result, false, true),
            "✗ Failed to reload networking: timed out\n"
        );
    }

    #[test]
    fn success_renders_message() {
        let result = StepResult::success(Step::Connect, "Connected to 10.0.0.1");
        assert_eq!(render_step(&result, false, false), "[OK] Connected to 10.0.0.1\n");
    }

    #[test]
    fn verification_has_banner() {
        let rendered = render_verification(Step::VerifyOverlay, "10.0.0.1", "VNI 10\n\n", false);
        assert_eq!(rendered, "\n--- EVPN Summary on 10.0.0.1 ---\nVNI 10\n");
    }

    #[test]
    fn wait_names_the_condition() {
        assert_eq!(
            render_wait(Step::ConvergenceDelay, 10, false, false),
            "[WAIT] Waiting 10s for BGP to converge...\n"
        );
    }

    #[test]
    fn dry_run_lists_sections() {
        let rendered = render_dry_run(
            Path::new("configs/leaf1.conf"),
            "10.0.0.1",
            &[
                ("/etc/network/interfaces".to_string(), 12),
                ("/etc/frr/frr.conf".to_string(), 30),
            ],
            false,
            false,
        );
        insta::assert_snapshot!(rendered, @r###"
        [..] DRY RUN: Would deploy configs/leaf1.conf to 10.0.0.1
          [>] /etc/network/interfaces: 12 lines
          [>] /etc/frr/frr.conf: 30 lines
        "###);
    }
}
