//! 拓扑描述文档
//!
//! 控制器消费的外部拓扑描述：每台设备的分类与聚合设备的
//! 上行端口候选列表，外加 ARP 规则安装开关。

use crate::ctl::{DeviceClass, DeviceSpec};
use crate::proto::DeviceId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// 拓扑描述不自洽
#[derive(Debug, Error)]
pub enum TopoError {
    #[error("duplicate device id {0:?}")]
    DuplicateDevice(DeviceId),
    #[error("aggregation device {0:?} has no uplink candidates")]
    MissingUplinks(DeviceId),
    #[error("edge device {0:?} lists uplink candidates")]
    UnexpectedUplinks(DeviceId),
}

/// 外部拥有的拓扑描述（JSON 文档）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologySpec {
    pub schema_version: u32,
    /// ARP 帧是否也安装持久规则；默认关闭
    /// （部署可改用外部预置的静态地址解析）。
    #[serde(default)]
    pub install_arp_rules: bool,
    pub devices: Vec<DeviceSpec>,
}

impl TopologySpec {
    /// 校验描述自洽：设备 id 唯一，上行候选与分类一致
    pub fn validate(&self) -> Result<(), TopoError> {
        let mut seen = HashSet::new();
        for spec in &self.devices {
            if !seen.insert(spec.id) {
                return Err(TopoError::DuplicateDevice(spec.id));
            }
            match spec.class {
                DeviceClass::Aggregation if spec.uplinks.is_empty() => {
                    return Err(TopoError::MissingUplinks(spec.id));
                }
                DeviceClass::Edge if !spec.uplinks.is_empty() => {
                    return Err(TopoError::UnexpectedUplinks(spec.id));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
