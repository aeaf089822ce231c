//! 图的公共契约
//!
//! 邻接表与邻接矩阵实现同一个 trait，调用方可以按稠密度自由选择。

use crate::error::Result;
use crate::stats::GraphSnapshot;
use crate::types::{Representation, VertexId, Weight, DEFAULT_WEIGHT};

/// 图的公共接口
///
/// 所有查询都返回新分配的序列，调用方拿不到内部存储的引用。
/// 任何失败都发生在修改之前，出错时图的状态不变。
pub trait Graph {
    /// 存储表示
    fn representation(&self) -> Representation;

    /// 是否为有向图（构造后不可变）
    fn is_directed(&self) -> bool;

    /// 是否带权（仅作标记，不影响存储）
    fn is_weighted(&self) -> bool;

    /// 顶点数量
    fn vertex_count(&self) -> usize;

    /// 边数量（无向边计为一条）
    fn edge_count(&self) -> usize;

    /// 添加边
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()>;

    /// 添加默认权重的边
    fn add_unweighted_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.add_edge(from, to, DEFAULT_WEIGHT)
    }

    /// 删除边，返回是否真的删除了一条边
    ///
    /// 顶点无效时返回 `InvalidVertex`；两点之间没有边时不做任何修改并返回 `false`。
    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<bool>;

    /// 两点之间是否有边
    fn has_edge(&self, from: VertexId, to: VertexId) -> Result<bool>;

    /// 顶点的邻居
    fn neighbours(&self, vertex: VertexId) -> Result<Vec<VertexId>>;

    /// 边的权重，没有边时返回 `EdgeNotFound`
    fn weight(&self, from: VertexId, to: VertexId) -> Result<Weight>;

    /// 全部顶点，供展示层遍历
    fn vertices(&self) -> Vec<VertexId>;

    /// 顶点的 (邻居, 权重) 列表，供展示层遍历
    fn adjacency(&self, vertex: VertexId) -> Result<Vec<(VertexId, Weight)>>;

    /// 统计快照
    fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            representation: self.representation(),
            directed: self.is_directed(),
            weighted: self.is_weighted(),
            vertices: self.vertex_count(),
            edges: self.edge_count(),
        }
    }
}
