//! 以太网帧解析与分类
//!
//! 控制器只关心帧头：硬件源/目的地址、ethertype，以及 IPv4/ARP
//! 载荷中的网络层地址对。其余字节不做解释。

use super::addr::MacAddr;
use std::net::Ipv4Addr;

pub const ETH_TYPE_IPV4: u16 = 0x0800;
pub const ETH_TYPE_ARP: u16 = 0x0806;
pub const ETH_TYPE_LLDP: u16 = 0x88cc;

const ETH_HEADER_LEN: usize = 14;

/// 帧分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// 链路发现（LLDP）：完全忽略
    LinkDiscovery,
    Ipv4,
    Arp,
    Other,
}

impl FrameKind {
    pub fn of_ethertype(ethertype: u16) -> Self {
        match ethertype {
            ETH_TYPE_LLDP => FrameKind::LinkDiscovery,
            ETH_TYPE_IPV4 => FrameKind::Ipv4,
            ETH_TYPE_ARP => FrameKind::Arp,
            _ => FrameKind::Other,
        }
    }
}

/// 网络层地址对（IPv4 头或 ARP 协议地址）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetPair {
    pub src: Ipv4Addr,
    pub dst: Ipv4Addr,
}

/// 已解析的以太网帧
#[derive(Debug, Clone)]
pub struct EthFrame {
    pub dst: MacAddr,
    pub src: MacAddr,
    pub ethertype: u16,
    pub kind: FrameKind,
    /// IPv4 或 ARP 帧的网络层地址对；其他帧为 None
    pub net: Option<NetPair>,
}

/// 解析一帧。无法提取完整帧头，或 IPv4/ARP 载荷截断到取不出
/// 网络层地址时返回 None（视为畸形帧，静默丢弃）。
pub fn parse(bytes: &[u8]) -> Option<EthFrame> {
    if bytes.len() < ETH_HEADER_LEN {
        return None;
    }

    let mut dst = [0u8; 6];
    let mut src = [0u8; 6];
    dst.copy_from_slice(&bytes[0..6]);
    src.copy_from_slice(&bytes[6..12]);
    let ethertype = u16::from_be_bytes([bytes[12], bytes[13]]);
    let kind = FrameKind::of_ethertype(ethertype);

    let net = match kind {
        FrameKind::Ipv4 => Some(parse_ipv4_pair(bytes)?),
        FrameKind::Arp => Some(parse_arp_pair(bytes)?),
        FrameKind::LinkDiscovery | FrameKind::Other => None,
    };

    Some(EthFrame {
        dst: MacAddr(dst),
        src: MacAddr(src),
        ethertype,
        kind,
        net,
    })
}

// IPv4 头：源地址偏移 12，目的地址偏移 16（相对 IP 头起始）。
fn parse_ipv4_pair(bytes: &[u8]) -> Option<NetPair> {
    let ip = bytes.get(ETH_HEADER_LEN..)?;
    if ip.len() < 20 {
        return None;
    }
    Some(NetPair {
        src: Ipv4Addr::new(ip[12], ip[13], ip[14], ip[15]),
        dst: Ipv4Addr::new(ip[16], ip[17], ip[18], ip[19]),
    })
}

// 以太网上的 IPv4 ARP：spa 偏移 14，tpa 偏移 24（相对 ARP 体起始）。
fn parse_arp_pair(bytes: &[u8]) -> Option<NetPair> {
    let arp = bytes.get(ETH_HEADER_LEN..)?;
    if arp.len() < 28 {
        return None;
    }
    Some(NetPair {
        src: Ipv4Addr::new(arp[14], arp[15], arp[16], arp[17]),
        dst: Ipv4Addr::new(arp[24], arp[25], arp[26], arp[27]),
    })
}
