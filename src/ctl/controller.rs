//! 控制器核心
//!
//! 事件分派器：连接事件建立每设备状态并下发基线规则，
//! 报文事件驱动决策引擎并发出规则安装/立即转发命令。
//!
//! 并发纪律：不同设备的事件可并行处理；同一设备的事件在
//! 其互斥锁下串行执行完整的 学习→决策→编译→下发 过程，
//! 保证学习表与轮转计数器不被交错破坏。

use super::device::{DeviceSpec, DeviceState};
use super::engine::{self, Decision};
use super::sink::CommandSink;
use crate::frame;
use crate::proto::{self, Action, BufferId, Command, DeviceId, Event};
use crate::topo::TopologySpec;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

/// 控制器层错误
#[derive(Debug, Error)]
pub enum CtlError {
    /// 拓扑描述中没有该设备：分类无从得知，连接被拒绝
    #[error("device {0:?} is not in the topology description")]
    UnknownDevice(DeviceId),
}

/// 事件驱动的控制器核心。`handle` 是唯一入口，
/// 可从多个线程并发调用。
pub struct Controller {
    install_arp_rules: bool,
    specs: HashMap<DeviceId, DeviceSpec>,
    devices: RwLock<HashMap<DeviceId, Arc<Mutex<DeviceState>>>>,
    sink: Arc<dyn CommandSink>,
}

impl Controller {
    pub fn new(topo: &TopologySpec, sink: Arc<dyn CommandSink>) -> Self {
        let specs = topo
            .devices
            .iter()
            .map(|spec| (spec.id, spec.clone()))
            .collect();
        Self {
            install_arp_rules: topo.install_arp_rules,
            specs,
            devices: RwLock::new(HashMap::new()),
            sink,
        }
    }

    /// 处理一个入站事件
    pub fn handle(&self, ev: Event) -> Result<(), CtlError> {
        match ev {
            Event::DeviceConnect { device } => self.on_connect(device),
            Event::PacketArrived {
                device,
                in_port,
                data,
                buffer_id,
            } => {
                self.on_packet(device, in_port, &data, buffer_id);
                Ok(())
            }
            Event::DeviceDisconnect { device } => {
                self.on_disconnect(device);
                Ok(())
            }
        }
    }

    #[tracing::instrument(skip(self), fields(device = ?device))]
    fn on_connect(&self, device: DeviceId) -> Result<(), CtlError> {
        let spec = self
            .specs
            .get(&device)
            .ok_or(CtlError::UnknownDevice(device))?;

        let fresh = Arc::new(Mutex::new(DeviceState::connect(spec)));
        let previous = self
            .devices
            .write()
            .expect("device map lock")
            .insert(device, fresh);
        if previous.is_some() {
            info!("重复连接事件，按隐式重连处理：旧状态已丢弃");
        }

        info!(class = ?spec.class, "🔌 交换机已连接，下发 table-miss 基线规则");
        self.transmit(Command::InstallRule {
            device,
            rule: proto::table_miss(),
        });
        Ok(())
    }

    #[tracing::instrument(skip(self, data), fields(device = ?device, in_port, bytes = data.len()))]
    fn on_packet(&self, device: DeviceId, in_port: u16, data: &[u8], buffer_id: Option<BufferId>) {
        let Some(state) = self
            .devices
            .read()
            .expect("device map lock")
            .get(&device)
            .cloned()
        else {
            debug!("未连接设备的数据包，丢弃");
            return;
        };

        // 整个事件处理期间持有该设备的锁。
        let mut state = state.lock().expect("device state lock");

        let Some(eth) = frame::parse(data) else {
            trace!("畸形帧，静默丢弃");
            return;
        };
        trace!(src = %eth.src, dst = %eth.dst, kind = ?eth.kind, "帧已解析");

        let Some(Decision { out, install }) =
            engine::decide(&mut state, &eth, in_port, self.install_arp_rules)
        else {
            return;
        };

        if let Some(rule_match) = install {
            debug!(?rule_match, %out, "安装学习流规则");
            if !self.transmit(Command::InstallRule {
                device,
                rule: proto::flow(rule_match, out, None),
            }) {
                return;
            }
        }

        // 触发帧本身总是立即转发；有缓冲区引用时不重复携带载荷。
        let payload = match buffer_id {
            Some(_) => None,
            None => Some(data.to_vec()),
        };
        self.transmit(Command::ForwardNow {
            device,
            buffer_id,
            in_port,
            actions: vec![Action::Output(out)],
            data: payload,
        });
    }

    #[tracing::instrument(skip(self), fields(device = ?device))]
    fn on_disconnect(&self, device: DeviceId) {
        let removed = self
            .devices
            .write()
            .expect("device map lock")
            .remove(&device);
        match removed {
            Some(_) => info!("🔌 交换机已断开，学习表与轮转状态已丢弃"),
            None => debug!("未连接设备的断开事件，忽略"),
        }
    }

    /// 下发一条命令。失败记日志并返回 false（不重试，至多一次）。
    fn transmit(&self, cmd: Command) -> bool {
        match self.sink.submit(cmd) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "命令下发失败，结束本事件处理");
                false
            }
        }
    }

    /// 当前处于连接状态的设备数（观测用）
    pub fn connected_devices(&self) -> usize {
        self.devices.read().expect("device map lock").len()
    }
}
