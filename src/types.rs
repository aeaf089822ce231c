//! 通用类型定义

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 顶点 ID
///
/// 邻接表允许任意整数（包括负数），邻接矩阵只接受 `[0, capacity)`。
pub type VertexId = i64;

/// 边权重
pub type Weight = f64;

/// 不带权时使用的默认权重
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// 图的存储表示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// 邻接表（稀疏）
    #[default]
    List,
    /// 邻接矩阵（稠密）
    Matrix,
}

impl Representation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Representation::List => "list",
            Representation::Matrix => "matrix",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Representation::List),
            "matrix" => Ok(Representation::Matrix),
            other => Err(crate::Error::ConfigError(format!(
                "未知的图表示: {}（可选 list, matrix）",
                other
            ))),
        }
    }
}
