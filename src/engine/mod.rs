// ==========================================
// OEE 助手 - 引擎层
// ==========================================
// 职责: 指标计算 / 参数抽取 / 响应组装
// 红线: 引擎是纯函数, 不持有数据, 不做 IO
// ==========================================

pub mod extractor;
pub mod oee;
pub mod responder;

// 重导出核心引擎
pub use extractor::ParamExtractor;
pub use oee::{EngineError, EngineResult, OeeEngine};
pub use responder::ResponseComposer;
