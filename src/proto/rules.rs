//! 规则编译
//!
//! 把转发决策翻译为协议级规则规格。优先级与超时取值是
//! 数据平面契约：table-miss 基线规则优先级 0，学习流规则
//! 优先级 1（保证基线只在未命中时生效），空闲/硬超时 10/30。

use super::wire::{Action, BufferId, MatchFields, OutPort, RuleMatch, RuleSpec};
use crate::frame::{ETH_TYPE_ARP, ETH_TYPE_IPV4};

pub const PRIORITY_TABLE_MISS: u16 = 0;
pub const PRIORITY_FLOW: u16 = 1;
pub const FLOW_IDLE_TIMEOUT: u16 = 10;
pub const FLOW_HARD_TIMEOUT: u16 = 30;

/// 设备连接时下发的基线规则：通配所有流量，
/// 不经缓冲直接送控制器，永不超时。
pub fn table_miss() -> RuleSpec {
    RuleSpec {
        priority: PRIORITY_TABLE_MISS,
        match_fields: MatchFields::wildcard(),
        actions: vec![Action::Output(OutPort::Controller)],
        idle_timeout: 0,
        hard_timeout: 0,
        buffer_id: None,
    }
}

/// 编译一条优先级 1 的学习流规则
pub fn flow(rule_match: RuleMatch, out: OutPort, buffer_id: Option<BufferId>) -> RuleSpec {
    let match_fields = match rule_match {
        RuleMatch::Ipv4(net) => MatchFields {
            ethertype: Some(ETH_TYPE_IPV4),
            ipv4_src: Some(net.src),
            ipv4_dst: Some(net.dst),
            ..MatchFields::default()
        },
        RuleMatch::Arp(net) => MatchFields {
            ethertype: Some(ETH_TYPE_ARP),
            arp_spa: Some(net.src),
            arp_tpa: Some(net.dst),
            ..MatchFields::default()
        },
    };
    RuleSpec {
        priority: PRIORITY_FLOW,
        match_fields,
        actions: vec![Action::Output(out)],
        idle_timeout: FLOW_IDLE_TIMEOUT,
        hard_timeout: FLOW_HARD_TIMEOUT,
        buffer_id,
    }
}
