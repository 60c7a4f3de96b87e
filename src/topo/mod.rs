//! 拓扑描述模块
//!
//! 此模块包含控制器消费的拓扑描述文档与实验用的单 Pod 设备表。

// 子模块声明
mod one_pod;
mod spec;

// 重新导出公共接口
pub use one_pod::one_pod_fat_tree;
pub use spec::{TopoError, TopologySpec};
