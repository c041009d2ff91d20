//! Property tests for section extraction.

use proptest::prelude::*;

use evpn_deploy::extract_section;

const START: &str = "# /etc/network/interfaces";
const END: &str = "# /etc/frr/frr.conf";

/// A content line that can never contain either marker
fn content_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _:.#-]{0,40}").unwrap()
}

fn lines() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(content_line(), 0..=12)
}

fn expected(body: &[String]) -> String {
    body.iter()
        .filter(|line| !line.starts_with('#'))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the result is exactly the non-comment lines between the markers, in order.
    #[test]
    fn property_extracts_lines_between_markers(
        prefix in lines(),
        body in lines(),
        suffix in lines(),
    ) {
        let mut doc = prefix.clone();
        doc.push(START.to_string());
        doc.extend(body.clone());
        doc.push(END.to_string());
        doc.extend(suffix);
        let document = doc.join("\n");

        prop_assert_eq!(extract_section(&document, START, Some(END)), expected(&body));
    }

    /// PROPERTY: without an end marker the section runs to the end of the document.
    #[test]
    fn property_open_section_runs_to_end(prefix in lines(), body in lines()) {
        let mut doc = prefix;
        doc.push(START.to_string());
        doc.extend(body.clone());
        let document: String = doc.iter().map(|line| format!("{line}\n")).collect();

        prop_assert_eq!(extract_section(&document, START, None), expected(&body));
    }

    /// PROPERTY: no output line is a comment or a marker, and every output
    /// line appears in the input in the same order.
    #[test]
    fn property_output_is_filtered_subsequence(document in "(?s).{0,512}") {
        let extracted = extract_section(&document, START, Some(END));
        if extracted.is_empty() {
            return Ok(());
        }

        let mut source = document.lines();
        for line in extracted.split('\n') {
            prop_assert!(!line.starts_with('#'));
            prop_assert!(!line.contains(START));
            prop_assert!(source.any(|candidate| candidate == line), "{line:?} out of order");
        }
    }

    /// PROPERTY: a document without the start marker yields nothing.
    #[test]
    fn property_missing_start_marker_is_empty(body in lines()) {
        let document = body.join("\n");
        prop_assert_eq!(extract_section(&document, START, Some(END)), "");
    }
}
