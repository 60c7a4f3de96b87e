//! 协议契约模块
//!
//! 包含入站事件、出站命令、规则规格与规则编译。

// 子模块声明
mod rules;
mod wire;

// 重新导出公共接口
pub use rules::{
    flow, table_miss, FLOW_HARD_TIMEOUT, FLOW_IDLE_TIMEOUT, PRIORITY_FLOW, PRIORITY_TABLE_MISS,
};
pub use wire::{
    Action, BufferId, Command, DeviceId, Event, MatchFields, OutPort, RuleMatch, RuleSpec,
};
