//! 邻接表表示
//!
//! 稀疏图：顶点 ID 到其出边记录的有序映射，顶点按首次登记的顺序迭代。

use super::adjacency::Adjacency;
use super::traits::Graph;
use crate::error::{Error, Result};
use crate::types::{Representation, VertexId, Weight};
use indexmap::IndexMap;
use tracing::{debug, trace, warn};

/// 邻接表图
///
/// 同一对顶点之间重复添加边会得到多条平行条目，不做去重。
#[derive(Debug, Clone, Default)]
pub struct AdjacencyListGraph {
    /// 顶点 -> 出边记录
    adj_list: IndexMap<VertexId, Adjacency>,
    /// 是否有向
    directed: bool,
    /// 是否带权
    weighted: bool,
    /// 边数量
    edges: usize,
}

impl AdjacencyListGraph {
    /// 创建空图
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            adj_list: IndexMap::new(),
            directed,
            weighted,
            edges: 0,
        }
    }

    /// 添加顶点
    ///
    /// 顶点已存在时会被重置为空：它的出边全部丢弃，
    /// 其他顶点中指向它的条目保持不变，边计数也不变。
    pub fn add_vertex(&mut self, vertex: VertexId) {
        if let Some(previous) = self.adj_list.insert(vertex, Adjacency::new()) {
            if !previous.is_empty() {
                warn!(
                    vertex,
                    dropped = previous.len(),
                    "重置已存在的顶点，丢弃其出边"
                );
            }
        } else {
            debug!(vertex, "添加顶点");
        }
    }

    /// 顶点是否已登记
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.adj_list.contains_key(&vertex)
    }

    /// 确保顶点存在，已存在时保持原样
    fn ensure_vertex(&mut self, vertex: VertexId) -> &mut Adjacency {
        self.adj_list.entry(vertex).or_insert_with(|| {
            debug!(vertex, "自动登记顶点");
            Adjacency::new()
        })
    }

    /// 获取顶点的出边记录
    fn entry(&self, vertex: VertexId) -> Result<&Adjacency> {
        self.adj_list.get(&vertex).ok_or_else(|| {
            trace!(vertex, "拒绝未登记的顶点");
            Error::invalid_vertex(vertex, "顶点未登记")
        })
    }

    /// 获取顶点的可变出边记录
    fn entry_mut(&mut self, vertex: VertexId) -> Result<&mut Adjacency> {
        self.adj_list.get_mut(&vertex).ok_or_else(|| {
            trace!(vertex, "拒绝未登记的顶点");
            Error::invalid_vertex(vertex, "顶点未登记")
        })
    }

    /// 校验顶点已登记
    fn validate_vertex(&self, vertex: VertexId) -> Result<()> {
        self.entry(vertex).map(|_| ())
    }
}

impl Graph for AdjacencyListGraph {
    fn representation(&self) -> Representation {
        Representation::List
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn vertex_count(&self) -> usize {
        self.adj_list.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        // 先登记 from 再登记 to，保持顶点的迭代顺序
        self.ensure_vertex(from);
        self.ensure_vertex(to);

        self.ensure_vertex(from).push(to, weight);
        if !self.directed {
            self.ensure_vertex(to).push(from, weight);
        }
        self.edges += 1;

        debug!(from, to, weight, edges = self.edges, "添加边");
        Ok(())
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<bool> {
        self.validate_vertex(from)?;
        self.validate_vertex(to)?;

        if self.entry_mut(from)?.remove_first(to).is_none() {
            debug!(from, to, "边不存在，跳过删除");
            return Ok(false);
        }

        // 无向图删除镜像条目；自环的镜像在同一条记录里
        if !self.directed {
            self.entry_mut(to)?.remove_first(from);
        }
        self.edges -= 1;

        debug!(from, to, edges = self.edges, "删除边");
        Ok(true)
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> Result<bool> {
        self.validate_vertex(to)?;
        Ok(self.entry(from)?.contains(to))
    }

    fn neighbours(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        Ok(self.entry(vertex)?.neighbours())
    }

    fn weight(&self, from: VertexId, to: VertexId) -> Result<Weight> {
        self.validate_vertex(to)?;
        self.entry(from)?
            .weight_of(to)
            .ok_or(Error::EdgeNotFound { from, to })
    }

    fn vertices(&self) -> Vec<VertexId> {
        self.adj_list.keys().copied().collect()
    }

    fn adjacency(&self, vertex: VertexId) -> Result<Vec<(VertexId, Weight)>> {
        Ok(self.entry(vertex)?.pairs().collect())
    }
}
