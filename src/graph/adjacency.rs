//! 邻接表中单个顶点的出边记录

use crate::types::{VertexId, Weight};

/// 单个顶点的邻居序列与权重序列
///
/// 两个序列按下标一一对应，只能成对修改。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adjacency {
    /// 邻居 ID（插入顺序，可重复）
    neighbours: Vec<VertexId>,
    /// 与邻居对齐的权重
    weights: Vec<Weight>,
}

impl Adjacency {
    /// 创建空记录
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条出边
    pub fn push(&mut self, neighbour: VertexId, weight: Weight) {
        self.neighbours.push(neighbour);
        self.weights.push(weight);
    }

    /// 第一个指向 `neighbour` 的下标
    pub fn position(&self, neighbour: VertexId) -> Option<usize> {
        self.neighbours.iter().position(|&n| n == neighbour)
    }

    /// 是否包含指向 `neighbour` 的边
    pub fn contains(&self, neighbour: VertexId) -> bool {
        self.neighbours.contains(&neighbour)
    }

    /// 第一个指向 `neighbour` 的边的权重
    pub fn weight_of(&self, neighbour: VertexId) -> Option<Weight> {
        self.position(neighbour).map(|idx| self.weights[idx])
    }

    /// 删除第一个指向 `neighbour` 的边，返回其权重
    pub fn remove_first(&mut self, neighbour: VertexId) -> Option<Weight> {
        let idx = self.position(neighbour)?;
        self.neighbours.remove(idx);
        Some(self.weights.remove(idx))
    }

    /// 邻居 ID 的副本
    pub fn neighbours(&self) -> Vec<VertexId> {
        self.neighbours.clone()
    }

    /// (邻居, 权重) 对
    pub fn pairs(&self) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.neighbours
            .iter()
            .copied()
            .zip(self.weights.iter().copied())
    }

    /// 出边条目数
    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_push_and_lookup() {
        let mut adj = Adjacency::new();
        adj.push(3, 2.5);
        adj.push(7, 1.0);
        adj.push(3, 9.0);

        assert_eq!(adj.len(), 3);
        assert_eq!(adj.position(3), Some(0));
        assert_eq!(adj.weight_of(3), Some(2.5));
        assert_eq!(adj.weight_of(8), None);
        assert_eq!(adj.neighbours(), vec![3, 7, 3]);
    }

    #[test]
    fn test_adjacency_remove_keeps_alignment() {
        let mut adj = Adjacency::new();
        adj.push(1, 10.0);
        adj.push(2, 20.0);
        adj.push(1, 30.0);

        assert_eq!(adj.remove_first(1), Some(10.0));
        assert_eq!(adj.pairs().collect::<Vec<_>>(), vec![(2, 20.0), (1, 30.0)]);
        assert_eq!(adj.remove_first(5), None);
        assert_eq!(adj.len(), 2);
    }
}
