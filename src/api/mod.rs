// ==========================================
// OEE 助手 - API 层
// ==========================================
// 职责: 面向 HTTP/前端宿主的业务接口
// ==========================================

pub mod assistant_api;
pub mod error;

pub use assistant_api::AssistantApi;
pub use error::{ApiError, ApiResult};
