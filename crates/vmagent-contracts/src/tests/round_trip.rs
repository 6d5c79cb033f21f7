use serde_json::json;

use super::{sample_extension_json, value};
use crate::{
    Entity, Extension, ExtensionHandlerStatus, ExtensionStatus, ExtensionSubStatus,
    ProvisionStatus, Scalar, TelemetryEvent, TelemetryEventParam, VmStatus, deflate, inflate,
    inflate_new,
};

fn assert_round_trip<T: Entity + Default + PartialEq>(original: &T) {
    let mut copy = T::default();
    inflate(&mut copy, &deflate(original)).unwrap();
    assert_eq!(&copy, original);
}

fn sub_status(name: &str, code: i64) -> ExtensionSubStatus {
    let mut sub = ExtensionSubStatus::new();
    sub.name = name.into();
    sub.status = "success".into();
    sub.code = code.into();
    sub.message = format!("{name} done").into();
    sub
}

fn full_vm_status() -> VmStatus {
    let mut status = VmStatus::new();
    status.vm_agent.agent_version = "2.0.8".into();
    status.vm_agent.status = "Ready".into();
    status.vm_agent.message = "guest agent is running".into();

    let mut ext_status = ExtensionStatus::new();
    ext_status.name = "script".into();
    ext_status.configuration_applied_time = "2014-06-04T12:00:00Z".into();
    ext_status.operation = "Enable".into();
    ext_status.status = "success".into();
    ext_status.code = 0i64.into();
    ext_status.sequence_number = 3i64.into();
    ext_status.substatus_list.append(sub_status("stdout", 0));
    ext_status.substatus_list.append(sub_status("stderr", 1));

    let mut handler = ExtensionHandlerStatus::new();
    handler.handler_name = "CustomScriptForLinux".into();
    handler.handler_version = "1.4".into();
    handler.status = "Ready".into();
    handler.message = "enabled".into();
    handler.extension_status_list.append(ext_status);
    status.extension_handlers.append(handler);
    status
}

#[test]
fn vm_status_tree_round_trips() {
    assert_round_trip(&full_vm_status());
}

#[test]
fn extension_round_trips_from_wire_shape() {
    let wire = value(sample_extension_json());
    let ext: Extension = inflate_new(&wire).unwrap();
    assert_eq!(ext.properties.extensions.len(), 1);
    assert_eq!(ext.properties.extensions.as_slice()[0].sequence_number, Scalar::Int(3));
    assert_eq!(ext.version_uris.len(), 2);
    assert_eq!(deflate(&ext), wire);
    assert_round_trip(&ext);
}

#[test]
fn provision_status_round_trips() {
    let mut status = ProvisionStatus::new();
    status.status = "NotReady".into();
    status.sub_status = "Provisioning".into();
    status.description = "Starting".into();
    status.properties.certificate_thumbprint = "BEEF".into();
    assert_round_trip(&status);

    let out = deflate(&status);
    assert_eq!(
        out.get("properties"),
        Some(&value(json!({"certificateThumbprint": "BEEF"})))
    );
}

#[test]
fn telemetry_event_keeps_blob_and_float_scalars() {
    let mut event = TelemetryEvent::new();
    event.event_id = 1i64.into();
    event.provider_id = "69B669B9-4AF8-4C50-BDC4-6006FA76E975".into();
    for (name, value) in [
        ("Duration", Scalar::Float(0.25)),
        ("Payload", Scalar::Blob(vec![0xde, 0xad])),
        ("IsInternal", Scalar::Bool(false)),
    ] {
        let mut param = TelemetryEventParam::new();
        param.name = name.into();
        param.value = value;
        event.parameters.append(param);
    }
    assert_round_trip(&event);
}
