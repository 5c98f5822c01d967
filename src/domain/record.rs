// ==========================================
// OEE 助手 - 生产记录实体
// ==========================================
// 职责: 定义数据集的一行(固定列契约)
// 依据: 上传数据的必填列清单
// ==========================================

use serde::{Deserialize, Serialize};

/// 必填列（固定契约，校验与映射共用）
pub const REQUIRED_COLUMNS: &[&str] = &[
    "device_id",
    "location",
    "month",
    "planned_production_time",
    "operating_time",
    "total_count",
    "good_count",
    "ideal_cycle_time",
];

/// 数值列（类型/负值校验范围）
pub const NUMERIC_COLUMNS: &[&str] = &[
    "planned_production_time",
    "operating_time",
    "total_count",
    "good_count",
    "ideal_cycle_time",
];

/// 关键列（零值校验范围）
pub const CRITICAL_COLUMNS: &[&str] = &[
    "planned_production_time",
    "operating_time",
    "total_count",
];

/// 生产记录
///
/// 一行生产数据。时间类字段单位为小时，
/// ideal_cycle_time 为 分钟/件。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    /// 设备编号（如 PACK001 / WRAP002）
    pub device_id: String,

    /// 产线位置（如 PRODUCTION_LINE_1）
    pub location: String,

    /// 月份（YYYY-MM）
    pub month: String,

    /// 计划生产时间（小时，正数）
    pub planned_production_time: f64,

    /// 实际运行时间（小时，非负，正常数据下 <= 计划时间）
    pub operating_time: f64,

    /// 总产量（件）
    pub total_count: u64,

    /// 良品数量（件，正常数据下 <= 总产量）
    pub good_count: u64,

    /// 理想节拍（分钟/件，正数）
    pub ideal_cycle_time: f64,
}
