//! 转发决策引擎
//!
//! 对一帧执行：学习源地址 → 解析输出端口 → 判定是否装规则。
//! 帧类别用单个穷尽 match 分派，新增类别是编译期检查的扩展点。

use super::device::{DeviceClass, DeviceState};
use crate::frame::{EthFrame, FrameKind};
use crate::proto::{OutPort, RuleMatch};
use tracing::{debug, info, trace};

/// 单次事件的临时决策值，不持久化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub out: OutPort,
    /// Some 表示应为该匹配装一条持久规则
    pub install: Option<RuleMatch>,
}

/// 对一帧做出转发决策。链路发现帧返回 None 且无任何副作用。
pub fn decide(
    state: &mut DeviceState,
    frame: &EthFrame,
    in_port: u16,
    install_arp: bool,
) -> Option<Decision> {
    if frame.kind == FrameKind::LinkDiscovery {
        trace!("链路发现帧，忽略");
        return None;
    }

    state.macs.learn(frame.src, in_port);
    debug!(src = %frame.src, in_port, "学习源地址");

    let out = match state.macs.lookup(frame.dst) {
        Some(port) => OutPort::Port(port),
        None => match state.spec.class {
            DeviceClass::Aggregation => {
                let rotation = state
                    .rotation
                    .as_mut()
                    .expect("aggregation device must own an uplink rotation");
                let port = rotation.select_next();
                info!(device = ?state.spec.id, uplink = port, "🔁 轮转选择上行端口");
                OutPort::Port(port)
            }
            DeviceClass::Edge => OutPort::Flood,
        },
    };

    // 泛洪结果不装规则：没有确定端口可写入匹配动作。
    let install = if out == OutPort::Flood {
        None
    } else {
        match frame.kind {
            FrameKind::Ipv4 => frame.net.map(RuleMatch::Ipv4),
            FrameKind::Arp if install_arp => frame.net.map(RuleMatch::Arp),
            FrameKind::Arp | FrameKind::Other => None,
            FrameKind::LinkDiscovery => unreachable!("handled above"),
        }
    };

    Some(Decision { out, install })
}
