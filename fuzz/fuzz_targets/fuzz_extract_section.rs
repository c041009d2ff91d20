#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let interfaces =
            evpn_deploy::extract_section(content, "# /etc/network/interfaces", Some("# /etc/frr/frr.conf"));
        assert!(interfaces.lines().all(|line| !line.starts_with('#')));

        let _ = evpn_deploy::extract_section(content, "# /etc/frr/frr.conf", None);
    }
});
