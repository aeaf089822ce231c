//! 图统计快照
//!
//! 提供可导出的图规模信息

use crate::error::Result;
use crate::types::Representation;
use serde::{Deserialize, Serialize};

/// 可导出的统计快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub representation: Representation,
    pub directed: bool,
    pub weighted: bool,
    pub vertices: usize,
    pub edges: usize,
}

impl GraphSnapshot {
    /// 导出为 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json() {
        let snapshot = GraphSnapshot {
            representation: Representation::List,
            directed: false,
            weighted: true,
            vertices: 3,
            edges: 2,
        };

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"representation\": \"list\""));
        assert!(json.contains("\"edges\": 2"));
    }
}
