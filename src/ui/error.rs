use evpn_deploy::config::ConfigWarning;
use evpn_deploy::error::DeployError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, paint_bold, Tone};
use crate::ui::terminal::detect_capabilities;

fn hint(err: &DeployError) -> Option<&'static str> {
    match err {
        DeployError::InventoryLoad { .. } => {
            Some("The inventory needs a top-level 'switches' mapping.")
        }
        DeployError::InvalidTarget { .. } => {
            Some("Each switch needs 'hostname', 'username' and 'config_file'.")
        }
        DeployError::ConfigDirNotFound { .. } => {
            Some("Pass --config-dir, or create a 'configs' directory next to the inventory.")
        }
        DeployError::Settings { .. } => Some("Check the settings file, or remove it to use defaults."),
        DeployError::ConfigFileNotFound { .. } | DeployError::Io(_) => None,
    }
}

pub(crate) fn format_error_with(
    err: &anyhow::Error,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        paint_bold(&err.to_string(), Tone::Error, supports_color)
    );
    if let Some(hint) = err.downcast_ref::<DeployError>().and_then(hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            paint(hint, Tone::Dim, supports_color)
        ));
    }
    out
}

/// Print a process-fatal error: stderr for humans, an `error` event in JSON mode
pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        println!("{}", output);
        return;
    }

    let caps = detect_capabilities();
    eprint!(
        "{}",
        format_error_with(err, caps.supports_color, caps.supports_unicode)
    );
}

pub fn format_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} {}: unknown key '{}'",
        Icon::Warning.colored(supports_color, supports_unicode),
        location,
        warning.key
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    out.push('\n');
    out
}
