// ==========================================
// OEE 助手 - 应用层
// ==========================================
// 职责: 状态组装与宿主集成
// ==========================================

pub mod state;

pub use state::{get_default_data_path, AppState};
