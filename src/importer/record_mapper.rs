// ==========================================
// OEE 助手 - 记录映射器
// ==========================================
// 职责: 原始行 (字符串) → 类型化 ProductionRecord
// 前提: 行集已通过校验门; 此处仍逐字段报错兜底
// ==========================================

use crate::domain::ProductionRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRow;

/// 记录映射器
pub struct RecordMapper;

impl RecordMapper {
    /// 映射整批行集（行号从 1 起, 用于报错定位）
    pub fn map_rows(rows: &[RawRow]) -> ImportResult<Vec<ProductionRecord>> {
        rows.iter()
            .enumerate()
            .map(|(idx, row)| Self::map_row(row, idx + 1))
            .collect()
    }

    /// 映射单行
    pub fn map_row(row: &RawRow, row_number: usize) -> ImportResult<ProductionRecord> {
        Ok(ProductionRecord {
            device_id: text_field(row, "device_id", row_number)?,
            location: text_field(row, "location", row_number)?,
            month: text_field(row, "month", row_number)?,
            planned_production_time: float_field(row, "planned_production_time", row_number)?,
            operating_time: float_field(row, "operating_time", row_number)?,
            total_count: count_field(row, "total_count", row_number)?,
            good_count: count_field(row, "good_count", row_number)?,
            ideal_cycle_time: float_field(row, "ideal_cycle_time", row_number)?,
        })
    }
}

fn text_field(row: &RawRow, column: &str, row_number: usize) -> ImportResult<String> {
    let value = row
        .get(column)
        .ok_or_else(|| field_error(column, row_number, "列缺失"))?;
    if value.is_empty() {
        return Err(field_error(column, row_number, "值为空"));
    }
    Ok(value.clone())
}

fn float_field(row: &RawRow, column: &str, row_number: usize) -> ImportResult<f64> {
    let value = row
        .get(column)
        .ok_or_else(|| field_error(column, row_number, "列缺失"))?;
    value
        .parse::<f64>()
        .map_err(|_| field_error(column, row_number, &format!("无法解析为数值: {value:?}")))
}

fn count_field(row: &RawRow, column: &str, row_number: usize) -> ImportResult<u64> {
    let value = row
        .get(column)
        .ok_or_else(|| field_error(column, row_number, "列缺失"))?;

    // Excel 单元格可能带小数点形式的整数（如 "30000.0"）
    if let Ok(count) = value.parse::<u64>() {
        return Ok(count);
    }
    match value.parse::<f64>() {
        Ok(v) if v >= 0.0 && v.fract() == 0.0 => Ok(v as u64),
        _ => Err(field_error(
            column,
            row_number,
            &format!("无法解析为非负整数: {value:?}"),
        )),
    }
}

fn field_error(column: &str, row: usize, message: &str) -> ImportError {
    ImportError::FieldValue {
        column: column.to_string(),
        row,
        message: message.to_string(),
    }
}
