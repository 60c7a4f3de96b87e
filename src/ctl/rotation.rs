//! 上行链路轮转选择器
//!
//! 聚合层设备在目的未知时于固定上行端口集上盲轮转，
//! 不感知链路利用率。

/// 仅聚合类设备持有；候选列表非空，计数器严格递增。
/// 初始化后第 n 次（1 起）选择返回 `uplinks[(n-1) % k]`。
#[derive(Debug, Clone)]
pub struct UplinkRotation {
    uplinks: Vec<u16>,
    counter: usize,
}

impl UplinkRotation {
    pub fn new(uplinks: Vec<u16>) -> Self {
        assert!(!uplinks.is_empty(), "uplink candidate list must be non-empty");
        Self { uplinks, counter: 0 }
    }

    /// 重连时计数器归零：负载分配历史不跨连接保留。
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// 返回下一个上行端口并推进计数器
    pub fn select_next(&mut self) -> u16 {
        let port = self.uplinks[self.counter % self.uplinks.len()];
        self.counter += 1;
        port
    }

    pub fn uplinks(&self) -> &[u16] {
        &self.uplinks
    }
}
