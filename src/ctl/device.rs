//! 设备描述与每设备可变状态

use super::mac_table::MacTable;
use super::rotation::UplinkRotation;
use crate::proto::DeviceId;
use serde::{Deserialize, Serialize};

/// 设备分类：接入主机的边缘交换机，或带上行端口集的聚合交换机
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Edge,
    Aggregation,
}

/// 拓扑描述提供的静态设备记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSpec {
    pub id: DeviceId,
    pub class: DeviceClass,
    /// 聚合类设备的有序上行端口候选；边缘设备为空
    #[serde(default)]
    pub uplinks: Vec<u16>,
}

/// 连接期间由控制器独占持有的可变状态。
/// 断开即丢弃，重连时全新重建。
#[derive(Debug)]
pub struct DeviceState {
    pub spec: DeviceSpec,
    pub macs: MacTable,
    /// 仅聚合类设备持有
    pub rotation: Option<UplinkRotation>,
}

impl DeviceState {
    /// 连接（或重连）时的全新状态：学习表为空，轮转计数器归零
    pub fn connect(spec: &DeviceSpec) -> Self {
        let rotation = match spec.class {
            DeviceClass::Aggregation => Some(UplinkRotation::new(spec.uplinks.clone())),
            DeviceClass::Edge => None,
        };
        Self {
            spec: spec.clone(),
            macs: MacTable::default(),
            rotation,
        }
    }
}
