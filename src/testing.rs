use serde_json::{Map, Value, json};

pub mod capturing_logger;

/// Builds a single controller entry in the shape emitted by `juju show-controller --format=json`
pub fn controller_entry(endpoints: &[&str], ca_cert: &str, user: &str, password: &str) -> Value {
    json!({
        "details": {
            "uuid": "0f2b6d0e-7f0b-4c55-8f2c-0d4e5d8a1c11",
            "api-endpoints": endpoints,
            "cloud": "localhost",
            "region": "localhost",
            "agent-version": "3.4.2",
            "agent-git-commit": "7f1b1c8a",
            "controller-model-version": "3.4.2",
            "mongo-version": "4.4.24",
            "ca-fingerprint": "AA:BB:CC",
            "ca-cert": ca_cert
        },
        "current-model": "admin/default",
        "models": {
            "controller": {"uuid": "5a7f0f0e-model-controller", "unit-count": 1},
            "default": {"uuid": "5a7f0f0e-model-default", "unit-count": 0}
        },
        "account": {"user": user, "password": password, "access": "superuser"}
    })
}

/// Serializes a controller name to entry mapping as CLI output
pub fn controller_output(controllers: Vec<(&str, Value)>) -> Vec<u8> {
    let map: Map<String, Value> = controllers
        .into_iter()
        .map(|(name, entry)| (name.to_string(), entry))
        .collect();
    serde_json::to_vec(&Value::Object(map)).expect("fixture should serialize")
}
