//! Property tests for inventory parsing.

use std::collections::BTreeSet;
use std::path::Path;

use proptest::prelude::*;

use evpn_deploy::parse_inventory;

fn switch_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("sw[a-z0-9]{0,6}", 1..=8)
        .prop_map(|names: BTreeSet<String>| names.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_inventory` never panics on arbitrary input.
    #[test]
    fn property_parse_inventory_never_panics(content in "(?s).{0,256}") {
        let _ = parse_inventory(&content, Path::new("inventory.yaml"));
    }

    /// PROPERTY: well-formed inventories keep every switch in file order.
    #[test]
    fn property_inventory_preserves_file_order(names in switch_names()) {
        let mut content = String::from("switches:\n");
        for (i, name) in names.iter().enumerate() {
            content.push_str(&format!(
                "  {name}:\n    hostname: 192.0.2.{}\n    username: cumulus\n    config_file: {name}.conf\n",
                i + 1
            ));
        }

        let (inventory, warnings) = parse_inventory(&content, Path::new("inventory.yaml"))
            .expect("constructed inventory should parse");

        prop_assert!(warnings.is_empty());
        prop_assert_eq!(inventory.names(), names);
    }
}
