use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

pub(crate) fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some() || get_env("EVPN_DEPLOY_NO_COLOR").is_some();

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
        is_ci: is_ci_env(&get_env),
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "JENKINS_HOME", "BUILDKITE"];

    KEYS.iter().any(|k| get_env(k).is_some())
}

/// `C`/`POSIX` locales get ASCII; anything else is assumed UTF-8 capable.
fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

    let locale = KEYS
        .iter()
        .filter_map(|k| get_env(k))
        .find(|v| !v.is_empty());

    match locale {
        Some(value) => !matches!(value.to_lowercase().as_str(), "c" | "posix"),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps(env: &[(&str, &str)], is_tty: bool) -> TerminalCapabilities {
        let map: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        detect_capabilities_impl(|k| map.get(k).cloned(), is_tty)
    }

    #[test]
    fn detect_respects_no_color() {
        let c = caps(&[("NO_COLOR", "1"), ("TERM", "xterm-256color")], true);
        assert!(!c.supports_color);
    }

    #[test]
    fn detect_respects_tool_specific_no_color() {
        let c = caps(&[("EVPN_DEPLOY_NO_COLOR", "1")], true);
        assert!(!c.supports_color);
    }

    #[test]
    fn detect_no_color_without_tty() {
        let c = caps(&[("TERM", "xterm-256color")], false);
        assert!(!c.supports_color);
        assert!(c.supports_unicode);
    }

    #[test]
    fn detect_ci_environment() {
        let c = caps(&[("CI", "true")], true);
        assert!(c.is_ci);
    }

    #[test]
    fn detect_term_dumb_disables_enhancements() {
        let c = caps(&[("TERM", "dumb")], true);
        assert!(!c.supports_color);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn detect_posix_locale_uses_ascii() {
        let c = caps(&[("LANG", "C")], true);
        assert!(!c.supports_unicode);

        let c = caps(&[("LC_ALL", "en_US.UTF-8"), ("LANG", "C")], true);
        assert!(c.supports_unicode);
    }
}
