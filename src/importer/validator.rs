// ==========================================
// OEE 助手 - 数据校验门 (Validation Gate)
// ==========================================
// 职责: 上传数据替换当前数据集之前的结构/语义校验
// 红线: 校验不通过绝不换入; 原因必须逐类列出, 不许单条笼统报错
// ==========================================

use crate::domain::{CRITICAL_COLUMNS, NUMERIC_COLUMNS, REQUIRED_COLUMNS};
use crate::importer::file_parser::RawRow;
use serde::{Deserialize, Serialize};

/// 校验报告
///
/// 五类问题分桶记录；message 渲染为产品界面可直接展示的英文文本。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// 缺失的必填列
    pub missing_columns: Vec<String>,
    /// 数值列中出现非数值内容的列
    pub invalid_data_types: Vec<String>,
    /// 出现负值的数值列
    pub negative_values: Vec<String>,
    /// 关键列中出现零值的列
    pub zero_values: Vec<String>,
    /// 行间一致性问题（运行时间超计划 / 良品数超总数）
    pub data_consistency: Vec<String>,
}

impl ValidationReport {
    /// 是否存在任何一类问题
    pub fn has_errors(&self) -> bool {
        !self.missing_columns.is_empty()
            || !self.invalid_data_types.is_empty()
            || !self.negative_values.is_empty()
            || !self.zero_values.is_empty()
            || !self.data_consistency.is_empty()
    }

    /// 渲染为人类可读的多行文本
    pub fn render_message(&self) -> String {
        let mut messages = Vec::new();

        if !self.missing_columns.is_empty() {
            messages.push(format!(
                "Missing required columns: {}",
                self.missing_columns.join(", ")
            ));
        }
        if !self.invalid_data_types.is_empty() {
            messages.push(format!(
                "Invalid data types in columns: {}",
                self.invalid_data_types.join(", ")
            ));
        }
        if !self.negative_values.is_empty() {
            messages.push(format!(
                "Negative values found in columns: {}",
                self.negative_values.join(", ")
            ));
        }
        if !self.zero_values.is_empty() {
            messages.push(format!(
                "Zero values found in critical columns: {}",
                self.zero_values.join(", ")
            ));
        }
        messages.extend(self.data_consistency.iter().cloned());

        if messages.is_empty() {
            "Data validation successful".to_string()
        } else {
            messages.join("\n")
        }
    }
}

/// 数据校验器
pub struct DatasetValidator;

impl DatasetValidator {
    /// 校验原始行集
    ///
    /// # 返回
    /// (是否通过, 校验报告)
    ///
    /// 缺列属于硬伤：直接返回, 报告里只含 missing_columns,
    /// 不再做后续逐值检查。
    pub fn validate(rows: &[RawRow]) -> (bool, ValidationReport) {
        let mut report = ValidationReport::default();

        // 1. 必填列检查（以首行的键集为准; 空数据集视为全缺）
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !rows.iter().any(|row| row.contains_key(**col)))
            .map(|col| col.to_string())
            .collect();
        if !missing.is_empty() {
            report.missing_columns = missing;
            return (false, report);
        }

        // 2. 数值列类型检查
        for col in NUMERIC_COLUMNS {
            let has_non_numeric = rows
                .iter()
                .any(|row| row.get(*col).is_none_or(|v| v.parse::<f64>().is_err()));
            if has_non_numeric {
                report.invalid_data_types.push(col.to_string());
            }
        }

        // 3. 负值检查
        for col in NUMERIC_COLUMNS {
            let has_negative = rows
                .iter()
                .filter_map(|row| row.get(*col))
                .filter_map(|v| v.parse::<f64>().ok())
                .any(|v| v < 0.0);
            if has_negative {
                report.negative_values.push(col.to_string());
            }
        }

        // 4. 关键列零值检查
        for col in CRITICAL_COLUMNS {
            let has_zero = rows
                .iter()
                .filter_map(|row| row.get(*col))
                .filter_map(|v| v.parse::<f64>().ok())
                .any(|v| v == 0.0);
            if has_zero {
                report.zero_values.push(col.to_string());
            }
        }

        // 5. 行间一致性检查
        let numeric = |row: &RawRow, col: &str| -> Option<f64> {
            row.get(col).and_then(|v| v.parse::<f64>().ok())
        };

        let operating_exceeds_planned = rows.iter().any(|row| {
            matches!(
                (
                    numeric(row, "operating_time"),
                    numeric(row, "planned_production_time"),
                ),
                (Some(op), Some(planned)) if op > planned
            )
        });
        if operating_exceeds_planned {
            report
                .data_consistency
                .push("Operating time exceeds planned production time".to_string());
        }

        let good_exceeds_total = rows.iter().any(|row| {
            matches!(
                (numeric(row, "good_count"), numeric(row, "total_count")),
                (Some(good), Some(total)) if good > total
            )
        });
        if good_exceeds_total {
            report
                .data_consistency
                .push("Good count exceeds total count".to_string());
        }

        let valid = !report.has_errors();
        (valid, report)
    }
}
