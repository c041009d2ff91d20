//! Reusable test content

/// Two leaves, both pointing at files under `configs/`
pub const TWO_LEAF_INVENTORY: &str = r#"switches:
  leaf1:
    hostname: 192.0.2.11
    username: cumulus
    password: CumulusLinux!
    config_file: leaf1.conf
  leaf2:
    hostname: 192.0.2.12
    username: cumulus
    config_file: leaf2.conf
"#;

/// A composite document with both sections
pub const LEAF1_CONFIG: &str = "\
# leaf1 generated configuration
# /etc/network/interfaces
auto lo
iface lo inet loopback
    address 10.0.0.11/32

auto swp1
iface swp1
# /etc/frr/frr.conf
frr defaults datacenter
router bgp 65011
 neighbor swp1 interface remote-as external
";

pub const LEAF2_CONFIG: &str = "\
# /etc/network/interfaces
auto swp2
iface swp2
# /etc/frr/frr.conf
router bgp 65012
";

/// A document with no section markers at all
pub const UNMARKED_CONFIG: &str = "hostname leaf3\n";
