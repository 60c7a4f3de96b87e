use crate::ctl::{DeviceClass, DeviceSpec};
use crate::proto::DeviceId;
use crate::topo::{one_pod_fat_tree, TopoError, TopologySpec};

#[test]
fn one_pod_table_matches_the_experiment_layout() {
    let topo = one_pod_fat_tree();
    topo.validate().expect("canonical table must validate");
    assert_eq!(topo.devices.len(), 4);
    assert!(!topo.install_arp_rules);

    for spec in &topo.devices {
        match spec.id {
            DeviceId(1) | DeviceId(3) => {
                assert_eq!(spec.class, DeviceClass::Edge);
                assert!(spec.uplinks.is_empty());
            }
            DeviceId(2) | DeviceId(4) => {
                assert_eq!(spec.class, DeviceClass::Aggregation);
                assert_eq!(spec.uplinks, vec![1, 2]);
            }
            other => panic!("unexpected device {other:?}"),
        }
    }
}

#[test]
fn topology_parses_from_json() {
    let topo: TopologySpec = serde_json::from_str(
        r#"
{
    "schema_version": 1,
    "install_arp_rules": true,
    "devices": [
        { "id": 1, "class": "edge" },
        { "id": 2, "class": "aggregation", "uplinks": [1, 2] }
    ]
}
        "#,
    )
    .expect("parse topology");
    topo.validate().expect("validate");
    assert!(topo.install_arp_rules);
    assert_eq!(topo.devices[0].class, DeviceClass::Edge);
    assert_eq!(topo.devices[1].uplinks, vec![1, 2]);
}

#[test]
fn install_arp_rules_defaults_to_off() {
    let topo: TopologySpec = serde_json::from_str(
        r#"{ "schema_version": 1, "devices": [] }"#,
    )
    .expect("parse topology");
    assert!(!topo.install_arp_rules);
}

#[test]
fn validation_rejects_duplicate_device_ids() {
    let mut topo = one_pod_fat_tree();
    topo.devices.push(topo.devices[0].clone());
    assert!(matches!(
        topo.validate(),
        Err(TopoError::DuplicateDevice(DeviceId(1)))
    ));
}

#[test]
fn validation_rejects_aggregation_without_uplinks() {
    let topo = TopologySpec {
        schema_version: 1,
        install_arp_rules: false,
        devices: vec![DeviceSpec {
            id: DeviceId(2),
            class: DeviceClass::Aggregation,
            uplinks: Vec::new(),
        }],
    };
    assert!(matches!(
        topo.validate(),
        Err(TopoError::MissingUplinks(DeviceId(2)))
    ));
}

#[test]
fn validation_rejects_edge_with_uplinks() {
    let topo = TopologySpec {
        schema_version: 1,
        install_arp_rules: false,
        devices: vec![DeviceSpec {
            id: DeviceId(1),
            class: DeviceClass::Edge,
            uplinks: vec![3],
        }],
    };
    assert!(matches!(
        topo.validate(),
        Err(TopoError::UnexpectedUplinks(DeviceId(1)))
    ));
}

#[test]
fn topology_serializes_back_to_json() {
    let topo = one_pod_fat_tree();
    let json = serde_json::to_string(&topo).expect("serialize");
    let back: TopologySpec = serde_json::from_str(&json).expect("parse back");
    assert_eq!(back.devices.len(), topo.devices.len());
    assert_eq!(back.schema_version, topo.schema_version);
}
