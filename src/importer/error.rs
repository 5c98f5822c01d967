// ==========================================
// OEE 助手 - 导入层错误类型
// ==========================================
// 职责: 加载/校验失败的结构化错误
// 工具: thiserror 派生宏
// ==========================================

use crate::importer::validator::ValidationReport;
use thiserror::Error;

/// 导入层错误类型
///
/// 加载失败与校验失败都会阻断数据集替换；错误信息必须
/// 足以定位问题（缺哪些列、哪行哪列解析失败）。
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件读取错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("不支持的文件格式: {0}")]
    UnsupportedFormat(String),

    #[error("CSV 解析失败: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("Excel 解析失败: {0}")]
    ExcelParse(String),

    #[error("文件无数据行: {0}")]
    EmptySheet(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    // ===== 字段映射错误 =====
    #[error("字段值错误 (column={column}, row={row}): {message}")]
    FieldValue {
        column: String,
        row: usize,
        message: String,
    },

    // ===== 校验失败 =====
    #[error("数据校验失败:\n{}", .0.render_message())]
    ValidationFailed(ValidationReport),
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
