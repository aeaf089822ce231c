//! 图核心模块
//!
//! 定义两种图表示及其公共契约

mod adjacency;
mod list;
mod matrix;
mod traits;

pub use list::AdjacencyListGraph;
pub use matrix::{AdjacencyMatrixGraph, MAX_MATRIX_CAPACITY};
pub use traits::Graph;
