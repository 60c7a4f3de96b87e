use clap::Parser;
use rrlb_rs::ctl::{Controller, RecordingSink};
use rrlb_rs::frame::{self, MacAddr};
use rrlb_rs::proto::{BufferId, DeviceId, Event};
use rrlb_rs::topo::{one_pod_fat_tree, TopologySpec};
use serde::Deserialize;
use std::fs;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(
    name = "replay",
    about = "Replay a JSON event script against the round-robin controller"
)]
struct Args {
    /// Path to the event script JSON
    #[arg(long)]
    script: PathBuf,

    /// Topology description JSON; defaults to the one-pod fat-tree
    #[arg(long)]
    topology: Option<PathBuf>,

    /// Install persistent rules for ARP frames as well
    #[arg(long)]
    install_arp_rules: bool,
}

#[derive(Debug, Deserialize)]
struct ScriptSpec {
    schema_version: u32,
    events: Vec<EventSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EventSpec {
    Connect {
        device: u64,
    },
    Packet {
        device: u64,
        in_port: u16,
        frame: FrameSpec,
        #[serde(default)]
        buffer_id: Option<u32>,
    },
    Disconnect {
        device: u64,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum FrameKindSpec {
    Ipv4,
    Arp,
    Lldp,
    Other,
}

#[derive(Debug, Deserialize)]
struct FrameSpec {
    eth_src: MacAddr,
    eth_dst: MacAddr,
    kind: FrameKindSpec,
    #[serde(default)]
    net_src: Option<Ipv4Addr>,
    #[serde(default)]
    net_dst: Option<Ipv4Addr>,
    #[serde(default)]
    ethertype: Option<u16>,
}

impl FrameSpec {
    fn build(&self) -> Vec<u8> {
        match self.kind {
            FrameKindSpec::Ipv4 => frame::ipv4_frame(
                self.eth_src,
                self.eth_dst,
                self.net_src.expect("ipv4 frame requires net_src"),
                self.net_dst.expect("ipv4 frame requires net_dst"),
            ),
            FrameKindSpec::Arp => frame::arp_frame(
                self.eth_src,
                self.eth_dst,
                self.net_src.expect("arp frame requires net_src"),
                self.net_dst.expect("arp frame requires net_dst"),
            ),
            FrameKindSpec::Lldp => {
                frame::raw_frame(self.eth_src, self.eth_dst, frame::ETH_TYPE_LLDP)
            }
            FrameKindSpec::Other => frame::raw_frame(
                self.eth_src,
                self.eth_dst,
                self.ethertype.expect("other frame requires an ethertype"),
            ),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut topo: TopologySpec = match &args.topology {
        Some(path) => {
            let raw = fs::read_to_string(path).expect("read topology file");
            serde_json::from_str(&raw).expect("parse topology json")
        }
        None => one_pod_fat_tree(),
    };
    topo.validate().expect("topology validation");
    if args.install_arp_rules {
        topo.install_arp_rules = true;
    }

    let raw = fs::read_to_string(&args.script).expect("read script file");
    let script: ScriptSpec = serde_json::from_str(&raw).expect("parse script json");
    assert_eq!(script.schema_version, 1, "unsupported script schema_version");

    let sink = Arc::new(RecordingSink::default());
    let ctl = Controller::new(&topo, sink.clone());

    let total_events = script.events.len();
    let mut total_commands = 0usize;
    for spec in script.events {
        let ev = match spec {
            EventSpec::Connect { device } => Event::DeviceConnect {
                device: DeviceId(device),
            },
            EventSpec::Packet {
                device,
                in_port,
                frame,
                buffer_id,
            } => Event::PacketArrived {
                device: DeviceId(device),
                in_port,
                data: frame.build(),
                buffer_id: buffer_id.map(BufferId),
            },
            EventSpec::Disconnect { device } => Event::DeviceDisconnect {
                device: DeviceId(device),
            },
        };
        ctl.handle(ev).expect("handle event");
        for cmd in sink.take() {
            total_commands += 1;
            println!("command {cmd}");
        }
    }

    println!("done events={total_events} commands={total_commands}");
}
