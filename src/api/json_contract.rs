use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{ScatterSnapshot, ScatterViewConfig};

pub const SCATTER_CONFIG_JSON_SCHEMA_V1: u32 = 1;
pub const SCATTER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterViewConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ScatterViewConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ScatterSnapshot,
}

impl ScatterViewConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ScatterViewConfigJsonContractV1 {
            schema_version: SCATTER_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config object or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse config json payload: {e}"))
            });
        }

        let payload: ScatterViewConfigJsonContractV1 =
            serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse config contract payload: {e}"))
            })?;
        if payload.schema_version != SCATTER_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

impl ScatterSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ScatterSnapshotJsonContractV1 {
            schema_version: SCATTER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ScatterSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ScatterSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != SCATTER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
