use crate::data_contract;

data_contract! {
    /// Per-instance settings for one configured extension.
    pub struct ExtensionSettings {
        name: Scalar => "name",
        sequence_number: Scalar => "sequenceNumber",
        /// Opaque settings document, passed through untouched.
        public_settings: Scalar => "publicSettings",
        /// Encrypted settings blob.
        private_settings: Scalar => "privateSettings",
        certificate_thumbprint: Scalar => "certificateThumbprint",
    }
}

data_contract! {
    pub struct ExtensionProperties {
        version: Scalar => "version",
        upgrade_policy: Scalar => "upgradePolicy",
        state: Scalar => "state",
        extensions: List<ExtensionSettings> => "extensions",
    }
}

data_contract! {
    pub struct ExtensionVersionUri {
        uri: Scalar => "uri",
    }
}

data_contract! {
    /// Extension handler assigned to the VM together with its settings.
    pub struct Extension {
        name: Scalar => "name",
        properties: Nested<ExtensionProperties> => "properties",
        version_uris: List<ExtensionVersionUri> => "versionUris",
    }
}

data_contract! {
    pub struct ExtensionList {
        extensions: List<Extension> => "extensions",
    }
}

data_contract! {
    pub struct ExtensionPackageUri {
        uri: Scalar => "uri",
    }
}

data_contract! {
    /// One downloadable version of an extension handler and its mirror URIs.
    pub struct ExtensionPackage {
        version: Scalar => "version",
        uris: List<ExtensionPackageUri> => "uris",
    }
}

data_contract! {
    pub struct ExtensionPackageList {
        versions: List<ExtensionPackage> => "versions",
    }
}
