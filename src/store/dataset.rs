// ==========================================
// OEE 助手 - 内存数据集
// ==========================================
// 职责: 持有有序生产记录 + 各分类列的去重取值表
// 红线: 构建后只读; filter 返回派生视图, 不改原数据
// ==========================================

use crate::domain::{ProductionRecord, QueryFilter};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 筛选可选值（供前端下拉框填充）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub device_ids: Vec<String>,
    pub locations: Vec<String>,
    pub months: Vec<String>,
}

/// 内存数据集
///
/// 加载时一次性构建；上传新数据时整体替换，绝不原地修改。
/// 去重取值表按首次出现顺序保存。
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<ProductionRecord>,
    device_ids: Vec<String>,
    locations: Vec<String>,
    months: Vec<String>,
}

impl Dataset {
    /// 从记录列表构建数据集（同时派生去重取值表）
    pub fn from_records(records: Vec<ProductionRecord>) -> Self {
        let device_ids = distinct_in_order(records.iter().map(|r| r.device_id.as_str()));
        let locations = distinct_in_order(records.iter().map(|r| r.location.as_str()));
        let months = distinct_in_order(records.iter().map(|r| r.month.as_str()));

        Self {
            records,
            device_ids,
            locations,
            months,
        }
    }

    /// 记录条数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 全部记录
    pub fn records(&self) -> &[ProductionRecord] {
        &self.records
    }

    /// 按筛选三元组取子集
    ///
    /// 每个非缺省维度做字符串精确匹配；返回借用视图。
    pub fn filter<'a>(&'a self, filter: &QueryFilter) -> Vec<&'a ProductionRecord> {
        self.records
            .iter()
            .filter(|r| {
                filter
                    .device_id
                    .as_ref()
                    .is_none_or(|v| &r.device_id == v)
                    && filter.location.as_ref().is_none_or(|v| &r.location == v)
                    && filter.month.as_ref().is_none_or(|v| &r.month == v)
            })
            .collect()
    }

    /// 各分类列的去重取值表
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            device_ids: self.device_ids.clone(),
            locations: self.locations.clone(),
            months: self.months.clone(),
        }
    }

    /// 单列去重取值（按首次出现顺序）
    pub fn distinct_values(&self, column: &str) -> Option<&[String]> {
        match column {
            "device_id" => Some(&self.device_ids),
            "location" => Some(&self.locations),
            "month" => Some(&self.months),
            _ => None,
        }
    }
}

/// 按首次出现顺序去重
fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for value in values {
        if seen.insert(value) {
            result.push(value.to_string());
        }
    }
    result
}
