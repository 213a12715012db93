use serde::{Deserialize, Serialize};

use crate::core::GranularityEngine;
use crate::error::{SliderError, SliderResult};

use super::{RangeSlider, SliderSnapshot};

pub const SLIDER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SliderSnapshot,
}

impl SliderSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> SliderResult<String> {
        let payload = SliderSnapshotJsonContractV1 {
            schema_version: SLIDER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SliderError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> SliderResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SliderSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SliderSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SliderError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != SLIDER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(SliderError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<E: GranularityEngine> RangeSlider<E> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> SliderResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
