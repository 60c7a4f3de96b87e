//! 控制器模块
//!
//! 此模块包含控制平面的决策逻辑：地址学习表、上行链路轮转、
//! 转发决策引擎与事件分派器。

// 子模块声明
mod controller;
mod device;
mod engine;
mod mac_table;
mod rotation;
mod sink;

// 重新导出公共接口
pub use controller::{Controller, CtlError};
pub use device::{DeviceClass, DeviceSpec, DeviceState};
pub use engine::{decide, Decision};
pub use mac_table::MacTable;
pub use rotation::UplinkRotation;
pub use sink::{CommandSink, RecordingSink, TransmitError};
