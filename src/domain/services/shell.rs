//! POSIX shell quoting for remote command lines

/// Quote a word for a POSIX shell, leaving plain words untouched
pub fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+:@,=".contains(c));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_words_are_untouched() {
        assert_eq!(shell_quote("/etc/frr/frr.conf"), "/etc/frr/frr.conf");
        assert_eq!(shell_quote("leaf1"), "leaf1");
    }

    #[test]
    fn escapes_single_quotes() {
        assert_eq!(shell_quote("it's"), "'it'\\''s'");
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("a b"), "'a b'");
    }
}
