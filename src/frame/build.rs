//! 合成帧构造
//!
//! 为测试与回放脚本生成最小合法的线上字节。只填控制器会读取的
//! 字段，其余字段置零。

use super::addr::MacAddr;
use super::parse::{ETH_TYPE_ARP, ETH_TYPE_IPV4};
use std::net::Ipv4Addr;

fn eth_header(src: MacAddr, dst: MacAddr, ethertype: u16) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(14);
    bytes.extend_from_slice(&dst.octets());
    bytes.extend_from_slice(&src.octets());
    bytes.extend_from_slice(&ethertype.to_be_bytes());
    bytes
}

/// 任意 ethertype 的裸帧（仅以太网头）
pub fn raw_frame(src: MacAddr, dst: MacAddr, ethertype: u16) -> Vec<u8> {
    eth_header(src, dst, ethertype)
}

/// 携带最小 IPv4 头（20 字节，无选项）的帧
pub fn ipv4_frame(src: MacAddr, dst: MacAddr, net_src: Ipv4Addr, net_dst: Ipv4Addr) -> Vec<u8> {
    let mut bytes = eth_header(src, dst, ETH_TYPE_IPV4);
    let mut ip = [0u8; 20];
    ip[0] = 0x45; // version=4, ihl=5
    ip[8] = 64; // ttl
    ip[12..16].copy_from_slice(&net_src.octets());
    ip[16..20].copy_from_slice(&net_dst.octets());
    bytes.extend_from_slice(&ip);
    bytes
}

/// 以太网上的 IPv4 ARP 请求帧
pub fn arp_frame(src: MacAddr, dst: MacAddr, net_src: Ipv4Addr, net_dst: Ipv4Addr) -> Vec<u8> {
    let mut bytes = eth_header(src, dst, ETH_TYPE_ARP);
    let mut arp = [0u8; 28];
    arp[0..2].copy_from_slice(&1u16.to_be_bytes()); // htype: ethernet
    arp[2..4].copy_from_slice(&ETH_TYPE_IPV4.to_be_bytes()); // ptype
    arp[4] = 6; // hlen
    arp[5] = 4; // plen
    arp[6..8].copy_from_slice(&1u16.to_be_bytes()); // oper: request
    arp[8..14].copy_from_slice(&src.octets());
    arp[14..18].copy_from_slice(&net_src.octets());
    arp[24..28].copy_from_slice(&net_dst.octets());
    bytes.extend_from_slice(&arp);
    bytes
}
