use serde_json::json;

use crate::Value;

pub mod round_trip;
pub mod scenarios;
pub mod schema;

pub(crate) fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

pub(crate) fn sample_extension_json() -> serde_json::Value {
    json!({
        "name": "Microsoft.OSTCExtensions.CustomScriptForLinux",
        "properties": {
            "version": "1.4",
            "upgradePolicy": "auto",
            "state": "enabled",
            "extensions": [
                {
                    "name": "script",
                    "sequenceNumber": 3,
                    "publicSettings": "{\"commandToExecute\":\"ls\"}",
                    "privateSettings": "MIIB...",
                    "certificateThumbprint": "F00D"
                }
            ]
        },
        "versionUris": [
            { "uri": "https://mirror-a/manifest.xml" },
            { "uri": "https://mirror-b/manifest.xml" }
        ]
    })
}
