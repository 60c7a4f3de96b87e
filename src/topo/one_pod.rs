//! 单 Pod fat-tree 设备表
//!
//! 实验拓扑的控制器视角：s1/s3 为边缘交换机（各接两台主机，
//! 端口 1-2 朝主机、3-4 朝聚合层），s2/s4 为聚合交换机，
//! 端口 1-2 即朝两台边缘交换机的上行候选。

use super::spec::TopologySpec;
use crate::ctl::{DeviceClass, DeviceSpec};
use crate::proto::DeviceId;

/// 构建单 Pod fat-tree 的拓扑描述
pub fn one_pod_fat_tree() -> TopologySpec {
    let edge = |id: u64| DeviceSpec {
        id: DeviceId(id),
        class: DeviceClass::Edge,
        uplinks: Vec::new(),
    };
    let agg = |id: u64| DeviceSpec {
        id: DeviceId(id),
        class: DeviceClass::Aggregation,
        uplinks: vec![1, 2],
    };

    TopologySpec {
        schema_version: 1,
        install_arp_rules: false,
        devices: vec![edge(1), agg(2), edge(3), agg(4)],
    }
}
