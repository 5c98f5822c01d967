// ==========================================
// OEE 助手 - 导入层
// ==========================================
// 职责: 上传文件的解析、校验门与数据集构建
// 红线: 校验不通过的数据绝不进入存储层
// ==========================================

pub mod error;
pub mod file_parser;
pub mod loader;
pub mod record_mapper;
pub mod validator;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, RawRow, UniversalFileParser};
pub use loader::DatasetLoader;
pub use record_mapper::RecordMapper;
pub use validator::{DatasetValidator, ValidationReport};
