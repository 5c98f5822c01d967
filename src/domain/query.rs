// ==========================================
// OEE 助手 - 查询类型
// ==========================================
// 职责: 筛选三元组与查询请求/响应 DTO
// ==========================================

use serde::{Deserialize, Serialize};

/// 筛选三元组
///
/// 每个维度可缺省；缺省表示该维度不限制。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryFilter {
    pub device_id: Option<String>,
    pub location: Option<String>,
    pub month: Option<String>,
}

impl QueryFilter {
    /// 是否三个维度全部缺省
    pub fn is_empty(&self) -> bool {
        self.device_id.is_none() && self.location.is_none() && self.month.is_none()
    }

    /// 与显式参数合并
    ///
    /// 抽取结果优先；显式参数仅在对应维度未抽取到值时生效。
    pub fn merge_explicit(self, explicit: &QueryFilter) -> Self {
        Self {
            device_id: self.device_id.or_else(|| explicit.device_id.clone()),
            location: self.location.or_else(|| explicit.location.clone()),
            month: self.month.or_else(|| explicit.month.clone()),
        }
    }
}

/// 查询请求
///
/// message 为自然语言问题；三个筛选字段为调用方显式指定的兜底值。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub message: String,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
}

impl QueryRequest {
    /// 取出显式筛选部分
    pub fn explicit_filter(&self) -> QueryFilter {
        QueryFilter {
            device_id: self.device_id.clone(),
            location: self.location.clone(),
            month: self.month.clone(),
        }
    }
}

/// 查询响应：指标 + 对话回复
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub oee: f64,
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
    /// 对话式回复（已按请求文本定制）
    pub message: String,
    /// 本次实际生效的筛选
    pub filter: QueryFilter,
}

/// 上传结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadOutcome {
    pub message: String,
    pub record_count: usize,
}
