//! 命令下发通道
//!
//! 决策路径对出站命令是 fire-and-forget：提交失败只记日志、
//! 结束本事件处理，不重试（至多一次语义）。

use crate::proto::{Command, DeviceId};
use std::sync::Mutex;
use thiserror::Error;

/// 出站通道拒绝或丢失命令
#[derive(Debug, Error)]
#[error("command channel to device {device:?} failed: {reason}")]
pub struct TransmitError {
    pub device: DeviceId,
    pub reason: String,
}

/// 出站命令的提交端（由协议传输层实现）
pub trait CommandSink: Send + Sync {
    fn submit(&self, cmd: Command) -> Result<(), TransmitError>;
}

/// 记录型 sink：按提交顺序保存全部命令（测试与回放用）
#[derive(Debug, Default)]
pub struct RecordingSink {
    cmds: Mutex<Vec<Command>>,
}

impl RecordingSink {
    pub fn commands(&self) -> Vec<Command> {
        self.cmds.lock().expect("recording sink lock").clone()
    }

    /// 取走并清空已记录的命令
    pub fn take(&self) -> Vec<Command> {
        std::mem::take(&mut *self.cmds.lock().expect("recording sink lock"))
    }
}

impl CommandSink for RecordingSink {
    fn submit(&self, cmd: Command) -> Result<(), TransmitError> {
        self.cmds.lock().expect("recording sink lock").push(cmd);
        Ok(())
    }
}
