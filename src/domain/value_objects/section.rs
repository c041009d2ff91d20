//! Configuration sections carried in a composite document

use crate::domain::services::extract_section;

/// Lines starting with this prefix inside a section are dropped
pub const COMMENT_PREFIX: char = '#';

/// The two device files a composite document carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// `/etc/network/interfaces`, ends at the routing-daemon marker
    Interfaces,
    /// FRR configuration, runs to the end of the document
    RoutingDaemon,
}

impl SectionKind {
    pub const ALL: [SectionKind; 2] = [SectionKind::Interfaces, SectionKind::RoutingDaemon];

    /// Marker line introducing this section
    pub fn start_marker(&self) -> &'static str {
        match self {
            SectionKind::Interfaces => "# /etc/network/interfaces",
            SectionKind::RoutingDaemon => "# /etc/frr/frr.conf",
        }
    }

    /// Marker line closing this section, if any
    pub fn end_marker(&self) -> Option<&'static str> {
        match self {
            SectionKind::Interfaces => Some(SectionKind::RoutingDaemon.start_marker()),
            SectionKind::RoutingDaemon => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Interfaces => "interfaces",
            SectionKind::RoutingDaemon => "frr",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named slice of a composite configuration document.
///
/// Derived on demand and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSection {
    pub kind: SectionKind,
    pub content: String,
}

impl ConfigSection {
    /// Extract `kind` from `document` using its markers
    pub fn extract(document: &str, kind: SectionKind) -> Self {
        Self {
            kind,
            content: extract_section(document, kind.start_marker(), kind.end_marker()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn line_count(&self) -> usize {
        if self.content.is_empty() {
            0
        } else {
            self.content.lines().count()
        }
    }

    /// Content as written to the device (newline terminated)
    pub fn file_content(&self) -> String {
        format!("{}\n", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
# leaf1 composite configuration
# /etc/network/interfaces
auto swp1
iface swp1
# /etc/frr/frr.conf
router bgp 65001
 neighbor swp51 interface remote-as external
";

    #[test]
    fn interfaces_section_ends_at_frr_marker() {
        let section = ConfigSection::extract(DOC, SectionKind::Interfaces);
        assert_eq!(section.content, "auto swp1\niface swp1");
        assert_eq!(section.line_count(), 2);
    }

    #[test]
    fn routing_section_runs_to_end() {
        let section = ConfigSection::extract(DOC, SectionKind::RoutingDaemon);
        assert_eq!(
            section.content,
            "router bgp 65001\n neighbor swp51 interface remote-as external"
        );
    }

    #[test]
    fn empty_section_reports_zero_lines() {
        let section = ConfigSection::extract("nothing here", SectionKind::Interfaces);
        assert!(section.is_empty());
        assert_eq!(section.line_count(), 0);
    }

    #[test]
    fn file_content_is_newline_terminated() {
        let section = ConfigSection::extract(DOC, SectionKind::Interfaces);
        assert_eq!(section.file_content(), "auto swp1\niface swp1\n");
    }

    #[test]
    fn section_names() {
        assert_eq!(SectionKind::Interfaces.to_string(), "interfaces");
        assert_eq!(SectionKind::RoutingDaemon.to_string(), "frr");
    }
}
