use serde::{Deserialize, Serialize};

use crate::core::{BarKey, ScaleRange, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable per-bar state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarStateSnapshot {
    pub dataset_index: usize,
    pub bar_index: usize,
    pub key: BarKey,
    pub value: f64,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub base: f64,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub active: bool,
}

/// Serializable deterministic chart state used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub range: ScaleRange,
    pub start_point: f64,
    pub end_point: f64,
    pub labels: Vec<String>,
    pub bars: Vec<BarStateSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
