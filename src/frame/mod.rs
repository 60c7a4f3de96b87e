//! 以太网帧模块
//!
//! 此模块包含控制器可见的帧模型：硬件地址、帧解析与分类，
//! 以及测试/回放用的合成帧构造。

// 子模块声明
mod addr;
mod build;
mod parse;

// 重新导出公共接口
pub use addr::{MacAddr, ParseMacError};
pub use build::{arp_frame, ipv4_frame, raw_frame};
pub use parse::{
    EthFrame, FrameKind, NetPair, parse, ETH_TYPE_ARP, ETH_TYPE_IPV4, ETH_TYPE_LLDP,
};
