use crate::frame::{
    self, FrameKind, MacAddr, ETH_TYPE_IPV4, ETH_TYPE_LLDP,
};
use std::net::Ipv4Addr;

fn mac(n: u8) -> MacAddr {
    MacAddr([0, 0, 0, 0, 0, n])
}

fn ip(n: u8) -> Ipv4Addr {
    Ipv4Addr::new(10, 0, 0, n)
}

#[test]
fn parse_ipv4_frame_extracts_addresses() {
    let bytes = frame::ipv4_frame(mac(1), mac(2), ip(1), ip(2));
    let eth = frame::parse(&bytes).expect("valid ipv4 frame");
    assert_eq!(eth.kind, FrameKind::Ipv4);
    assert_eq!(eth.src, mac(1));
    assert_eq!(eth.dst, mac(2));
    let net = eth.net.expect("ipv4 frame carries a net pair");
    assert_eq!(net.src, ip(1));
    assert_eq!(net.dst, ip(2));
}

#[test]
fn parse_arp_frame_extracts_protocol_addresses() {
    let bytes = frame::arp_frame(mac(1), MacAddr::BROADCAST, ip(1), ip(2));
    let eth = frame::parse(&bytes).expect("valid arp frame");
    assert_eq!(eth.kind, FrameKind::Arp);
    let net = eth.net.expect("arp frame carries a net pair");
    assert_eq!(net.src, ip(1));
    assert_eq!(net.dst, ip(2));
}

#[test]
fn lldp_frame_is_classified_as_link_discovery() {
    let bytes = frame::raw_frame(mac(1), mac(2), ETH_TYPE_LLDP);
    let eth = frame::parse(&bytes).expect("valid lldp frame");
    assert_eq!(eth.kind, FrameKind::LinkDiscovery);
    assert!(eth.net.is_none());
}

#[test]
fn unknown_ethertype_is_classified_as_other() {
    // IPv6 is not special-cased by this controller.
    let bytes = frame::raw_frame(mac(1), mac(2), 0x86dd);
    let eth = frame::parse(&bytes).expect("valid frame");
    assert_eq!(eth.kind, FrameKind::Other);
    assert!(eth.net.is_none());
}

#[test]
fn truncated_ethernet_header_is_malformed() {
    assert!(frame::parse(&[]).is_none());
    assert!(frame::parse(&[0u8; 13]).is_none());
}

#[test]
fn ipv4_frame_with_truncated_payload_is_malformed() {
    // Correct ethertype but no room for the IP header's address fields.
    let bytes = frame::raw_frame(mac(1), mac(2), ETH_TYPE_IPV4);
    assert!(frame::parse(&bytes).is_none());
}

#[test]
fn mac_addr_display_and_parse_round_trip() {
    let addr = MacAddr([0xde, 0xad, 0xbe, 0xef, 0x00, 0x42]);
    let text = addr.to_string();
    assert_eq!(text, "de:ad:be:ef:00:42");
    assert_eq!(text.parse::<MacAddr>().expect("round trip"), addr);
}

#[test]
fn mac_addr_parse_rejects_garbage() {
    assert!("not-a-mac".parse::<MacAddr>().is_err());
    assert!("00:11:22:33:44".parse::<MacAddr>().is_err());
    assert!("00:11:22:33:44:55:66".parse::<MacAddr>().is_err());
    assert!("00:11:22:33:44:zz".parse::<MacAddr>().is_err());
}
