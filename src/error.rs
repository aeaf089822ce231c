//! 错误类型定义

use crate::types::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效的顶点 {vertex}: {reason}")]
    InvalidVertex { vertex: VertexId, reason: String },

    #[error("边不存在: ({from}, {to})")]
    EdgeNotFound { from: VertexId, to: VertexId },

    #[error("不支持的操作: {0}")]
    UnsupportedOperation(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("命令错误: {0}")]
    CommandError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl Error {
    /// 构造无效顶点错误
    pub fn invalid_vertex(vertex: VertexId, reason: impl Into<String>) -> Self {
        Self::InvalidVertex {
            vertex,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}
