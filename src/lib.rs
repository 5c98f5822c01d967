// ==========================================
// OEE 助手 - 核心库
// ==========================================
// 系统定位: 设备综合效率(OEE)计算 + 受限自然语言查询
// 技术栈: Rust + 内存数据集快照
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据存储层 - 内存数据集
pub mod store;

// 导入层 - 外部数据与校验门
pub mod importer;

// 引擎层 - 指标计算 / 参数抽取 / 响应组装
pub mod engine;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态组装
pub mod app;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{OeeResult, ProductionRecord, QueryFilter, QueryRequest, QueryResponse};

// 存储
pub use store::{Dataset, DatasetHandle, FilterOptions};

// 引擎
pub use engine::{OeeEngine, ParamExtractor, ResponseComposer};

// 导入
pub use importer::{DatasetLoader, DatasetValidator, ValidationReport};

// API
pub use api::{ApiError, ApiResult, AssistantApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "OEE 助手";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
