//! 地址学习表
//!
//! 单台设备上的硬件地址 → 最近观测入端口映射。

use crate::frame::MacAddr;
use std::collections::HashMap;

/// 每台设备一张；同一地址至多一条绑定，后学覆盖先学。
/// 控制器从不主动过期条目，数据平面转发状态的过期由
/// 已装规则的超时负责。
#[derive(Debug, Default, Clone)]
pub struct MacTable {
    bindings: HashMap<MacAddr, u16>,
}

impl MacTable {
    /// 记录（或覆盖）一条绑定
    pub fn learn(&mut self, addr: MacAddr, port: u16) {
        self.bindings.insert(addr, port);
    }

    /// 纯读取：返回最近一次绑定的端口
    pub fn lookup(&self, addr: MacAddr) -> Option<u16> {
        self.bindings.get(&addr).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
