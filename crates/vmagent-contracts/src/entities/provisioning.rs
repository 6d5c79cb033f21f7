use crate::data_contract;

data_contract! {
    pub struct VmInfo {
        subscription_id: Scalar => "subscriptionId",
        vm_name: Scalar => "vmName",
    }
}

data_contract! {
    /// Deployment coordinates of the running role instance.
    pub struct InstanceMetadata {
        deployment_name: Scalar => "deploymentName",
        role_name: Scalar => "roleName",
        role_instance_id: Scalar => "roleInstanceId",
        container_id: Scalar => "containerId",
    }
}

data_contract! {
    pub struct VmProperties {
        certificate_thumbprint: Scalar => "certificateThumbprint",
    }
}

data_contract! {
    /// Provisioning outcome reported once the guest finishes first boot setup.
    pub struct ProvisionStatus {
        status: Scalar => "status",
        sub_status: Scalar => "subStatus",
        description: Scalar => "description",
        properties: Nested<VmProperties> => "properties",
    }
}
