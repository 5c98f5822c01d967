// ==========================================
// OEE 助手 - 数据集加载器
// ==========================================
// 职责: 解析 → 校验 → 映射 → 构建数据集
// 红线: 任一阶段失败都返回错误, 不产出半成品数据集
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::record_mapper::RecordMapper;
use crate::importer::validator::DatasetValidator;
use crate::store::Dataset;
use std::path::Path;
use tracing::{debug, info};

/// 数据集加载器
pub struct DatasetLoader;

impl DatasetLoader {
    /// 从文件加载数据集
    ///
    /// # 返回
    /// - Ok(Dataset): 已通过校验门的完整数据集
    /// - Err(ImportError): 加载或校验失败, 调用方保持旧数据集不动
    pub fn load<P: AsRef<Path>>(path: P) -> ImportResult<Dataset> {
        let path = path.as_ref();
        info!("加载数据集: {}", path.display());

        let rows = UniversalFileParser.parse(path)?;
        debug!("解析完成: {} 行", rows.len());

        if rows.is_empty() {
            return Err(ImportError::EmptySheet(path.display().to_string()));
        }

        let (valid, report) = DatasetValidator::validate(&rows);
        if !valid {
            return Err(ImportError::ValidationFailed(report));
        }

        let records = RecordMapper::map_rows(&rows)?;
        let dataset = Dataset::from_records(records);
        info!(
            "数据集构建完成: {} 条记录, {} 个设备",
            dataset.len(),
            dataset.filter_options().device_ids.len()
        );

        Ok(dataset)
    }
}
