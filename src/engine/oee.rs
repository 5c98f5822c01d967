// ==========================================
// OEE 助手 - OEE 指标引擎
// ==========================================
// 职责: 筛选 → 聚合 → 三分量计算 → 钳制 → 相乘
// 输入: 数据集快照 + 筛选三元组
// 输出: OeeResult (百分比, 两位小数)
// 红线: 计算错误以错误值返回, 不跨层抛出; 空子集不是错误
// ==========================================

use crate::domain::{OeeResult, QueryFilter};
use crate::store::Dataset;
use thiserror::Error;
use tracing::{debug, warn};

/// 指标引擎错误类型
///
/// 聚合过程中的意外情况（如坏数据泄入导致的非法数值）
/// 在引擎内部捕获, 以带描述的错误值形式返回。
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("OEE 计算失败: {0}")]
    Computation(String),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

// ==========================================
// OeeEngine - 指标引擎
// ==========================================

/// OEE 指标引擎
///
/// 无状态引擎; 数据集由调用方传入, 计算是纯函数。
pub struct OeeEngine;

impl OeeEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算 OEE
    ///
    /// # 参数
    /// - `dataset`: 数据集快照
    /// - `filter`: 筛选三元组
    ///
    /// # 返回
    /// - Ok(OeeResult): 计算结果; 筛选无命中时为零值结果
    /// - Err(EngineError): 聚合异常（带描述的错误值）
    pub fn compute(&self, dataset: &Dataset, filter: &QueryFilter) -> EngineResult<OeeResult> {
        // 1. 按三元组筛选
        let subset = dataset.filter(filter);
        debug!(
            "筛选结果: {}/{} 条 (filter={:?})",
            subset.len(),
            dataset.len(),
            filter
        );

        // 2. 空子集 → 零值结果, 不是错误
        if subset.is_empty() {
            warn!("筛选无命中: {:?}", filter);
            return Ok(OeeResult::empty(
                "No data found for the specified parameters",
            ));
        }

        // 3. 聚合
        let planned_production_time: f64 =
            subset.iter().map(|r| r.planned_production_time).sum();
        let operating_time: f64 = subset.iter().map(|r| r.operating_time).sum();
        let total_count: u64 = subset.iter().map(|r| r.total_count).sum();
        let good_count: u64 = subset.iter().map(|r| r.good_count).sum();
        let mean_cycle_time: f64 = subset.iter().map(|r| r.ideal_cycle_time).sum::<f64>()
            / subset.len() as f64;

        debug!(
            "聚合值: ppt={planned_production_time}, ot={operating_time}, \
             tc={total_count}, gc={good_count}, ict={mean_cycle_time}"
        );

        if !planned_production_time.is_finite()
            || !operating_time.is_finite()
            || !mean_cycle_time.is_finite()
        {
            return Err(EngineError::Computation(format!(
                "聚合值非法: ppt={planned_production_time}, ot={operating_time}, ict={mean_cycle_time}"
            )));
        }

        // 4. 可用率 = 运行时间 / 计划时间
        let availability = if planned_production_time > 0.0 {
            operating_time / planned_production_time
        } else {
            0.0
        };

        // 5. 理论生产时间 = 总产量 × 平均节拍 / 60
        //    节拍单位为 分钟/件, 除以 60 换算到与运行时间一致的小时
        let theoretical_production_time = total_count as f64 * mean_cycle_time / 60.0;

        // 6. 表现性 = 理论生产时间 / 运行时间
        let performance = if operating_time > 0.0 {
            theoretical_production_time / operating_time
        } else {
            0.0
        };

        // 7. 良品率 = 良品数 / 总数
        let quality = if total_count > 0 {
            good_count as f64 / total_count as f64
        } else {
            0.0
        };

        debug!("分量原始值: a={availability}, p={performance}, q={quality}");

        // 8. 逐项钳制到 [0,1] —— 先钳制再相乘
        //    (数据轻微越界时, 如运行时间因舍入略超计划时间)
        let availability = availability.clamp(0.0, 1.0);
        let performance = performance.clamp(0.0, 1.0);
        let quality = quality.clamp(0.0, 1.0);

        // 9. OEE = A × P × Q
        let oee = availability * performance * quality;

        // 10. 百分比化并按两位小数舍入
        let availability = round2(availability * 100.0);
        let performance = round2(performance * 100.0);
        let quality = round2(quality * 100.0);
        let oee = round2(oee * 100.0);

        let message = format!(
            "OEE Calculation Results:\n\
             Availability: {availability}%\n\
             Performance: {performance}%\n\
             Quality: {quality}%\n\
             Overall OEE: {oee}%"
        );

        Ok(OeeResult {
            oee,
            availability,
            performance,
            quality,
            message,
        })
    }
}

impl Default for OeeEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 两位小数舍入
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
