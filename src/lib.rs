//! adjgraph - 邻接表与邻接矩阵图
//!
//! 两种可互换的图表示，共享同一套契约：
//! - 顶点/边的增删与校验
//! - 邻居查询与权重查询
//! - 有向/无向、带权/不带权

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod stats;
pub mod types;

// 重导出常用类型
pub use config::{AnyGraph, GraphConfig};
pub use error::{Error, Result};
pub use graph::{AdjacencyListGraph, AdjacencyMatrixGraph, Graph};
pub use stats::GraphSnapshot;
pub use types::{Representation, VertexId, Weight, DEFAULT_WEIGHT};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
