use crate::data_contract;

data_contract! {
    /// Certificate the control plane wants installed on the VM.
    pub struct Cert {
        name: Scalar => "name",
        thumbprint: Scalar => "thumbprint",
        certificate_data_uri: Scalar => "certificateDataUri",
    }
}

data_contract! {
    pub struct CertList {
        certificates: List<Cert> => "certificates",
    }
}
