use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use evpn_deploy::config::{ColorMode, OutputSettings};
use evpn_deploy::presentation::ColorWhen;

/// Resolved output choices for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        output: &OutputSettings,
    ) -> Self {
        Self::from_caps(json, verbose, cli_color, output, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        output: &OutputSettings,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbose,
            color: color && !json,
            unicode: output.unicode && caps.supports_unicode,
        }
    }
}
