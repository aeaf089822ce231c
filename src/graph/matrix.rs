//! 邻接矩阵表示
//!
//! 稠密图：`capacity × capacity` 的行主序单元格，每个单元格要么为空，要么保存边权重。

use super::traits::Graph;
use crate::error::{Error, Result};
use crate::types::{Representation, VertexId, Weight};
use tracing::{debug, trace};

/// 容量上限，超过时单元格数量会失控
pub const MAX_MATRIX_CAPACITY: usize = 1 << 14;

/// 邻接矩阵图
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph {
    /// 行主序单元格，`None` 表示没有边
    cells: Vec<Option<Weight>>,
    /// 顶点容量（构造后固定）
    capacity: usize,
    /// 是否有向
    directed: bool,
    /// 是否带权
    weighted: bool,
    /// 边数量
    edges: usize,
}

impl AdjacencyMatrixGraph {
    /// 创建容量为 `capacity` 的空图
    ///
    /// 容量超过 [`MAX_MATRIX_CAPACITY`] 时返回 `ConfigError`。
    pub fn new(capacity: usize, directed: bool, weighted: bool) -> Result<Self> {
        let cell_count = capacity
            .checked_mul(capacity)
            .filter(|_| capacity <= MAX_MATRIX_CAPACITY)
            .ok_or_else(|| {
                Error::ConfigError(format!(
                    "capacity {} 超过上限 {}",
                    capacity, MAX_MATRIX_CAPACITY
                ))
            })?;

        Ok(Self {
            cells: vec![None; cell_count],
            capacity,
            directed,
            weighted,
            edges: 0,
        })
    }

    /// 顶点容量
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 读取单元格
    pub fn cell(&self, from: VertexId, to: VertexId) -> Result<Option<Weight>> {
        let idx = self.offset(from, to)?;
        Ok(self.cells[idx])
    }

    /// 校验顶点并转换为行列下标
    fn index_of(&self, vertex: VertexId) -> Result<usize> {
        usize::try_from(vertex)
            .ok()
            .filter(|&idx| idx < self.capacity)
            .ok_or_else(|| {
                trace!(vertex, capacity = self.capacity, "拒绝越界顶点");
                Error::invalid_vertex(
                    vertex,
                    format!("顶点编号应在 0 到 {} 之间（不含）", self.capacity),
                )
            })
    }

    /// 单元格在行主序存储中的偏移
    fn offset(&self, from: VertexId, to: VertexId) -> Result<usize> {
        let row = self.index_of(from)?;
        let col = self.index_of(to)?;
        Ok(row * self.capacity + col)
    }
}

impl Graph for AdjacencyMatrixGraph {
    fn representation(&self) -> Representation {
        Representation::Matrix
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn vertex_count(&self) -> usize {
        self.capacity
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    /// 覆盖已存在的边时计数同样加一
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        let forward = self.offset(from, to)?;
        let backward = self.offset(to, from)?;

        self.cells[forward] = Some(weight);
        if !self.directed {
            self.cells[backward] = Some(weight);
        }
        self.edges += 1;

        debug!(from, to, weight, edges = self.edges, "添加边");
        Ok(())
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<bool> {
        let forward = self.offset(from, to)?;
        let backward = self.offset(to, from)?;

        if self.cells[forward].take().is_none() {
            return Ok(false);
        }
        if !self.directed {
            self.cells[backward] = None;
        }
        self.edges -= 1;

        debug!(from, to, edges = self.edges, "删除边");
        Ok(true)
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> Result<bool> {
        Ok(self.cell(from, to)?.is_some())
    }

    fn neighbours(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        Ok(self
            .adjacency(vertex)?
            .into_iter()
            .map(|(neighbour, _)| neighbour)
            .collect())
    }

    fn weight(&self, from: VertexId, to: VertexId) -> Result<Weight> {
        self.cell(from, to)?.ok_or(Error::EdgeNotFound { from, to })
    }

    fn vertices(&self) -> Vec<VertexId> {
        (0..self.capacity as VertexId).collect()
    }

    fn adjacency(&self, vertex: VertexId) -> Result<Vec<(VertexId, Weight)>> {
        let row = self.index_of(vertex)?;
        let start = row * self.capacity;

        Ok(self.cells[start..start + self.capacity]
            .iter()
            .enumerate()
            .filter_map(|(col, cell)| cell.map(|w| (col as VertexId, w)))
            .collect())
    }
}
