use crate::data_contract;

data_contract! {
    pub struct TelemetryEventParam {
        name: Scalar => "name",
        value: Scalar => "value",
    }
}

data_contract! {
    /// Telemetry event keyed by provider and event id, with free-form parameters.
    pub struct TelemetryEvent {
        event_id: Scalar => "eventId",
        provider_id: Scalar => "providerId",
        parameters: List<TelemetryEventParam> => "parameters",
    }
}

data_contract! {
    pub struct TelemetryEventList {
        events: List<TelemetryEvent> => "events",
    }
}
