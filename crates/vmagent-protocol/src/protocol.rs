use vmagent_contracts::{
    CertList, Extension, ExtensionList, ExtensionPackageList, InstanceMetadata,
    ProvisionStatus, TelemetryEvent, VmInfo, VmStatus,
};

use crate::ProtocolError;

/// Operations the agent needs from a control-plane backend.
///
/// Implementations acquire payloads however they like and hand typed entities back;
/// [`crate::codec`] covers the common JSON case.
pub trait Protocol {
    /// Discover endpoints and perform any handshake needed before other calls.
    fn initialize(&mut self) -> Result<(), ProtocolError>;

    fn fetch_vm_info(&mut self) -> Result<VmInfo, ProtocolError>;

    fn fetch_certificates(&mut self) -> Result<CertList, ProtocolError>;

    fn fetch_extensions(&mut self) -> Result<ExtensionList, ProtocolError>;

    /// Available handler packages for `extension`.
    fn fetch_extension_packages(
        &mut self,
        extension: &Extension,
    ) -> Result<ExtensionPackageList, ProtocolError>;

    fn fetch_instance_metadata(&mut self) -> Result<InstanceMetadata, ProtocolError>;

    fn report_provision_status(&mut self, status: &ProvisionStatus) -> Result<(), ProtocolError>;

    fn report_status(&mut self, status: &VmStatus) -> Result<(), ProtocolError>;

    fn report_event(&mut self, event: &TelemetryEvent) -> Result<(), ProtocolError>;
}
