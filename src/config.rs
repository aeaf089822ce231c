//! 图配置
//!
//! 从命令行参数或 JSON 文件构造图

use crate::error::{Error, Result};
use crate::graph::{AdjacencyListGraph, AdjacencyMatrixGraph, Graph, MAX_MATRIX_CAPACITY};
use crate::types::{Representation, VertexId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// 图配置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 存储表示
    pub representation: Representation,
    /// 矩阵容量（仅 matrix 使用）
    pub capacity: Option<usize>,
    /// 是否有向
    pub directed: bool,
    /// 是否带权
    pub weighted: bool,
}

impl GraphConfig {
    /// 邻接表配置
    pub fn list(directed: bool, weighted: bool) -> Self {
        Self {
            representation: Representation::List,
            capacity: None,
            directed,
            weighted,
        }
    }

    /// 邻接矩阵配置
    pub fn matrix(capacity: usize, directed: bool, weighted: bool) -> Self {
        Self {
            representation: Representation::Matrix,
            capacity: Some(capacity),
            directed,
            weighted,
        }
    }

    /// 从 JSON 字符串解析
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: GraphConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "加载图配置");
        Self::from_json_str(&data)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        match (self.representation, self.capacity) {
            (Representation::Matrix, None) => {
                Err(Error::ConfigError("邻接矩阵需要指定 capacity".to_string()))
            }
            (Representation::Matrix, Some(c)) if c > MAX_MATRIX_CAPACITY => Err(Error::ConfigError(
                format!("capacity {} 超过上限 {}", c, MAX_MATRIX_CAPACITY),
            )),
            (Representation::List, Some(_)) => {
                Err(Error::ConfigError("邻接表不接受 capacity".to_string()))
            }
            _ => Ok(()),
        }
    }

    /// 按配置构造空图
    pub fn build(&self) -> Result<AnyGraph> {
        self.validate()?;
        let graph = match self.representation {
            Representation::List => {
                AnyGraph::List(AdjacencyListGraph::new(self.directed, self.weighted))
            }
            Representation::Matrix => AnyGraph::Matrix(AdjacencyMatrixGraph::new(
                self.capacity.unwrap_or_default(),
                self.directed,
                self.weighted,
            )?),
        };
        debug!(config = ?self, "构造图");
        Ok(graph)
    }
}

/// 运行时选择的图
#[derive(Debug, Clone)]
pub enum AnyGraph {
    List(AdjacencyListGraph),
    Matrix(AdjacencyMatrixGraph),
}

impl AnyGraph {
    /// 以公共契约访问
    pub fn as_graph(&self) -> &dyn Graph {
        match self {
            AnyGraph::List(g) => g,
            AnyGraph::Matrix(g) => g,
        }
    }

    /// 以公共契约修改
    pub fn as_graph_mut(&mut self) -> &mut dyn Graph {
        match self {
            AnyGraph::List(g) => g,
            AnyGraph::Matrix(g) => g,
        }
    }

    /// 添加（或重置）顶点，只有邻接表支持
    pub fn add_vertex(&mut self, vertex: VertexId) -> Result<()> {
        match self {
            AnyGraph::List(g) => {
                g.add_vertex(vertex);
                Ok(())
            }
            AnyGraph::Matrix(_) => Err(Error::UnsupportedOperation(
                "邻接矩阵的顶点在构造时固定，不能单独添加".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default_is_list() {
        let config = GraphConfig::default();
        let graph = config.build().unwrap();

        assert!(matches!(graph, AnyGraph::List(_)));
        assert!(!graph.as_graph().is_directed());
    }

    #[test]
    fn test_config_from_json() {
        let config = GraphConfig::from_json_str(
            r#"{"representation": "matrix", "capacity": 8, "directed": true}"#,
        )
        .unwrap();

        assert_eq!(config, GraphConfig::matrix(8, true, false));
        let graph = config.build().unwrap();
        assert_eq!(graph.as_graph().vertex_count(), 8);
    }

    #[test]
    fn test_config_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"representation": "list", "directed": true, "weighted": true}}"#
        )
        .unwrap();

        let config = GraphConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config, GraphConfig::list(true, true));

        let graph = config.build().unwrap();
        assert!(graph.as_graph().is_directed());
        assert!(graph.as_graph().is_weighted());
    }

    #[test]
    fn test_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        assert!(matches!(
            GraphConfig::from_json_file(&missing),
            Err(Error::IoError(_))
        ));
    }

    #[test]
    fn test_config_validation() {
        let missing = GraphConfig {
            representation: Representation::Matrix,
            ..Default::default()
        };
        assert!(matches!(missing.validate(), Err(Error::ConfigError(_))));

        let too_big = GraphConfig::matrix(MAX_MATRIX_CAPACITY + 1, false, false);
        assert!(too_big.build().is_err());

        let list_with_capacity = GraphConfig {
            capacity: Some(3),
            ..Default::default()
        };
        assert!(list_with_capacity.validate().is_err());

        assert!(matches!(
            GraphConfig::from_json_str("{not json"),
            Err(Error::SerializationError(_))
        ));
    }

    #[test]
    fn test_any_graph_add_vertex() {
        let mut list = GraphConfig::list(false, false).build().unwrap();
        list.add_vertex(5).unwrap();
        assert_eq!(list.as_graph().vertices(), vec![5]);

        let mut matrix = GraphConfig::matrix(3, false, false).build().unwrap();
        assert!(matches!(
            matrix.add_vertex(1),
            Err(Error::UnsupportedOperation(_))
        ));
        matrix.as_graph_mut().add_unweighted_edge(0, 2).unwrap();
        assert!(matrix.as_graph().has_edge(2, 0).unwrap());
    }
}
