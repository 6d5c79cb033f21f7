//! Entities exchanged with the control plane.

mod certs;
mod extensions;
mod provisioning;
mod status;
mod telemetry;

pub use certs::{Cert, CertList};
pub use extensions::{
    Extension, ExtensionList, ExtensionPackage, ExtensionPackageList, ExtensionPackageUri,
    ExtensionProperties, ExtensionSettings, ExtensionVersionUri,
};
pub use provisioning::{InstanceMetadata, ProvisionStatus, VmInfo, VmProperties};
pub use status::{
    ExtensionHandlerStatus, ExtensionStatus, ExtensionSubStatus, VmAgentStatus, VmStatus,
};
pub use telemetry::{TelemetryEvent, TelemetryEventList, TelemetryEventParam};
