// ==========================================
// OEE 助手 - OEE 指标结果
// ==========================================
// 职责: 指标引擎的输出结构
// 说明: 数值为百分比(0~100, 保留两位小数)
// ==========================================

use serde::{Deserialize, Serialize};

/// OEE 计算结果
///
/// 四个数值均为百分比，已按两位小数舍入。
/// 内部计算在 [0,1] 区间完成并逐项钳制后才相乘。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OeeResult {
    /// 综合效率 OEE = 可用率 × 表现性 × 良品率
    pub oee: f64,

    /// 可用率 Availability
    pub availability: f64,

    /// 表现性 Performance
    pub performance: f64,

    /// 良品率 Quality
    pub quality: f64,

    /// 多行文本摘要（产品界面直接展示，英文）
    pub message: String,
}

impl OeeResult {
    /// 空结果：筛选无命中时返回（这不是错误）
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            oee: 0.0,
            availability: 0.0,
            performance: 0.0,
            quality: 0.0,
            message: message.into(),
        }
    }
}
