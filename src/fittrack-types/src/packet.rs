use serde::{Deserialize, Serialize};

/// Raw reading as delivered by the sensor unit: a workout code plus an
/// ordered list of numeric values whose meaning depends on the code.
/// On the wire this is the tuple `("CODE", [values...])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, Vec<f64>)", into = "(String, Vec<f64>)")]
pub struct SensorPacket {
    pub code: String,
    pub values: Vec<f64>,
}

impl SensorPacket {
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }
}

impl From<(String, Vec<f64>)> for SensorPacket {
    fn from((code, values): (String, Vec<f64>)) -> Self {
        Self { code, values }
    }
}

impl From<SensorPacket> for (String, Vec<f64>) {
    fn from(packet: SensorPacket) -> Self {
        (packet.code, packet.values)
    }
}
