//! 控制通道线上契约
//!
//! 定义入站事件与出站命令，以及规则规格中各字段的类型。
//! 字段取值是与数据平面的契约，不得随意变动。

use crate::frame::NetPair;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// 交换机标识符（datapath id）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(pub u64);

/// 数据平面报文缓冲区引用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferId(pub u32);

/// 输出端口：物理端口或泛洪/送控制器哨兵
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutPort {
    Port(u16),
    Flood,
    Controller,
}

impl fmt::Display for OutPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutPort::Port(p) => write!(f, "{p}"),
            OutPort::Flood => write!(f, "flood"),
            OutPort::Controller => write!(f, "controller"),
        }
    }
}

/// 规则动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Output(OutPort),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Output(p) => write!(f, "output:{p}"),
        }
    }
}

/// 匹配字段；全 None 即通配所有流量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchFields {
    pub ethertype: Option<u16>,
    pub ipv4_src: Option<Ipv4Addr>,
    pub ipv4_dst: Option<Ipv4Addr>,
    pub arp_spa: Option<Ipv4Addr>,
    pub arp_tpa: Option<Ipv4Addr>,
}

impl MatchFields {
    pub fn wildcard() -> Self {
        Self::default()
    }

    pub fn is_wildcard(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for MatchFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard() {
            return write!(f, "*");
        }
        let mut sep = "";
        if let Some(et) = self.ethertype {
            write!(f, "{sep}ethertype=0x{et:04x}")?;
            sep = " ";
        }
        if let Some(a) = self.ipv4_src {
            write!(f, "{sep}ipv4_src={a}")?;
            sep = " ";
        }
        if let Some(a) = self.ipv4_dst {
            write!(f, "{sep}ipv4_dst={a}")?;
            sep = " ";
        }
        if let Some(a) = self.arp_spa {
            write!(f, "{sep}arp_spa={a}")?;
            sep = " ";
        }
        if let Some(a) = self.arp_tpa {
            write!(f, "{sep}arp_tpa={a}")?;
        }
        Ok(())
    }
}

/// 决策到规则编译的交接值：要装规则的帧类别及其匹配地址对
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatch {
    Ipv4(NetPair),
    Arp(NetPair),
}

/// 协议级规则规格。控制器发出后即不再保存，
/// 已装规则的生存期由交换机侧的超时负责。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub priority: u16,
    pub match_fields: MatchFields,
    pub actions: Vec<Action>,
    pub idle_timeout: u16,
    pub hard_timeout: u16,
    pub buffer_id: Option<BufferId>,
}

/// 入站事件（来自协议传输层）
#[derive(Debug, Clone)]
pub enum Event {
    DeviceConnect {
        device: DeviceId,
    },
    PacketArrived {
        device: DeviceId,
        in_port: u16,
        data: Vec<u8>,
        buffer_id: Option<BufferId>,
    },
    DeviceDisconnect {
        device: DeviceId,
    },
}

/// 出站命令（发往协议传输层）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    InstallRule {
        device: DeviceId,
        rule: RuleSpec,
    },
    /// 立即转发触发帧；有缓冲区引用时不附带原始载荷
    ForwardNow {
        device: DeviceId,
        buffer_id: Option<BufferId>,
        in_port: u16,
        actions: Vec<Action>,
        data: Option<Vec<u8>>,
    },
}

fn fmt_actions(f: &mut fmt::Formatter<'_>, actions: &[Action]) -> fmt::Result {
    write!(f, "[")?;
    for (i, a) in actions.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{a}")?;
    }
    write!(f, "]")
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::InstallRule { device, rule } => {
                write!(
                    f,
                    "install_rule device={} priority={} match={{{}}} actions=",
                    device.0, rule.priority, rule.match_fields
                )?;
                fmt_actions(f, &rule.actions)?;
                write!(f, " idle={} hard={}", rule.idle_timeout, rule.hard_timeout)
            }
            Command::ForwardNow {
                device,
                buffer_id,
                in_port,
                actions,
                data,
            } => {
                write!(f, "forward_now device={} in_port={in_port} actions=", device.0)?;
                fmt_actions(f, actions)?;
                match buffer_id {
                    Some(b) => write!(f, " buffer={}", b.0)?,
                    None => write!(f, " buffer=none")?,
                }
                match data {
                    Some(d) => write!(f, " payload={}B", d.len()),
                    None => write!(f, " payload=none"),
                }
            }
        }
    }
}
