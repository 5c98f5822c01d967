// ==========================================
// OEE 助手 - 领域模型层
// ==========================================
// 职责: 定义领域实体与查询类型
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod metrics;
pub mod query;
pub mod record;

// 重导出核心类型
pub use metrics::OeeResult;
pub use query::{QueryFilter, QueryRequest, QueryResponse, UploadOutcome};
pub use record::{ProductionRecord, CRITICAL_COLUMNS, NUMERIC_COLUMNS, REQUIRED_COLUMNS};
