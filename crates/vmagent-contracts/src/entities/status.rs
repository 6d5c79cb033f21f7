//! Status tree reported back to the control plane:
//! `VmStatus` → `ExtensionHandlerStatus` → `ExtensionStatus` → `ExtensionSubStatus`.

use crate::data_contract;

data_contract! {
    pub struct VmAgentStatus {
        agent_version: Scalar => "agentVersion",
        status: Scalar => "status",
        message: Scalar => "message",
    }
}

data_contract! {
    pub struct ExtensionSubStatus {
        name: Scalar => "name",
        status: Scalar => "status",
        code: Scalar => "code",
        message: Scalar => "message",
    }
}

data_contract! {
    pub struct ExtensionStatus {
        name: Scalar => "name",
        configuration_applied_time: Scalar => "configurationAppliedTime",
        operation: Scalar => "operation",
        status: Scalar => "status",
        code: Scalar => "code",
        sequence_number: Scalar => "sequenceNumber",
        substatus_list: List<ExtensionSubStatus> => "substatusList",
    }
}

data_contract! {
    pub struct ExtensionHandlerStatus {
        handler_name: Scalar => "handlerName",
        handler_version: Scalar => "handlerVersion",
        status: Scalar => "status",
        message: Scalar => "message",
        extension_status_list: List<ExtensionStatus> => "extensionStatusList",
    }
}

data_contract! {
    pub struct VmStatus {
        vm_agent: Nested<VmAgentStatus> => "vmAgent",
        extension_handlers: List<ExtensionHandlerStatus> => "extensionHandlers",
    }
}
