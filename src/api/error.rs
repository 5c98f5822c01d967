// ==========================================
// OEE 助手 - API 层错误类型
// ==========================================
// 职责: 汇聚下层错误, 面向调用方的可解释错误
// 工具: thiserror 派生宏
// ==========================================

use crate::engine::EngineError;
use crate::importer::ImportError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("数据导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("指标计算失败: {0}")]
    Engine(#[from] EngineError),

    #[error("内部错误: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
