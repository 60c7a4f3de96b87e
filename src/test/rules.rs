use crate::frame::{NetPair, ETH_TYPE_ARP, ETH_TYPE_IPV4};
use crate::proto::{
    self, Action, MatchFields, OutPort, RuleMatch, FLOW_HARD_TIMEOUT, FLOW_IDLE_TIMEOUT,
    PRIORITY_FLOW, PRIORITY_TABLE_MISS,
};
use std::net::Ipv4Addr;

fn net() -> NetPair {
    NetPair {
        src: Ipv4Addr::new(10, 0, 0, 1),
        dst: Ipv4Addr::new(10, 0, 0, 2),
    }
}

#[test]
fn table_miss_rule_is_priority_zero_wildcard_to_controller() {
    let rule = proto::table_miss();
    assert_eq!(rule.priority, PRIORITY_TABLE_MISS);
    assert!(rule.match_fields.is_wildcard());
    assert_eq!(rule.actions, vec![Action::Output(OutPort::Controller)]);
    // Never expires, never buffers.
    assert_eq!(rule.idle_timeout, 0);
    assert_eq!(rule.hard_timeout, 0);
    assert!(rule.buffer_id.is_none());
}

#[test]
fn ipv4_flow_rule_matches_network_addresses() {
    let rule = proto::flow(RuleMatch::Ipv4(net()), OutPort::Port(2), None);
    assert_eq!(rule.priority, PRIORITY_FLOW);
    assert_eq!(rule.idle_timeout, FLOW_IDLE_TIMEOUT);
    assert_eq!(rule.hard_timeout, FLOW_HARD_TIMEOUT);
    assert_eq!(
        rule.match_fields,
        MatchFields {
            ethertype: Some(ETH_TYPE_IPV4),
            ipv4_src: Some(net().src),
            ipv4_dst: Some(net().dst),
            ..MatchFields::default()
        }
    );
    assert_eq!(rule.actions, vec![Action::Output(OutPort::Port(2))]);
}

#[test]
fn arp_flow_rule_matches_protocol_addresses() {
    let rule = proto::flow(RuleMatch::Arp(net()), OutPort::Port(1), None);
    assert_eq!(rule.priority, PRIORITY_FLOW);
    assert_eq!(
        rule.match_fields,
        MatchFields {
            ethertype: Some(ETH_TYPE_ARP),
            arp_spa: Some(net().src),
            arp_tpa: Some(net().dst),
            ..MatchFields::default()
        }
    );
}

#[test]
fn flow_rules_always_outrank_the_baseline() {
    // Any frame matching both rules must exercise the learned one;
    // the baseline only fires on table-miss.
    let baseline = proto::table_miss();
    let learned = proto::flow(RuleMatch::Ipv4(net()), OutPort::Port(2), None);
    assert!(learned.priority > baseline.priority);
}
