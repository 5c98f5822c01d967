// ==========================================
// OEE 助手 - 当前数据集句柄
// ==========================================
// 职责: 管理"当前数据集"的共享访问与整体替换
// 红线: 替换是单次指针换入; 读方只能看到完整的旧集或新集
// ==========================================

use crate::store::Dataset;
use std::sync::{Arc, RwLock};

/// 当前数据集句柄
///
/// 调用方持有句柄而非全局单例。读取时克隆出 `Arc<Dataset>` 快照，
/// 之后的所有计算都作用在该不可变快照上；上传新数据通过
/// [`DatasetHandle::replace`] 整体换入，换入仅发生在校验与构建全部
/// 完成之后。
pub struct DatasetHandle {
    current: RwLock<Arc<Dataset>>,
}

impl DatasetHandle {
    /// 以初始数据集创建句柄
    pub fn new(dataset: Dataset) -> Self {
        Self {
            current: RwLock::new(Arc::new(dataset)),
        }
    }

    /// 取当前数据集快照
    ///
    /// 锁只保护指针读取；返回后读方与句柄无共享可变状态。
    pub fn current(&self) -> Arc<Dataset> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// 整体替换当前数据集（最后写入者胜出）
    pub fn replace(&self, dataset: Dataset) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(dataset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductionRecord;

    fn dataset_with_device(device: &str) -> Dataset {
        Dataset::from_records(vec![ProductionRecord {
            device_id: device.to_string(),
            location: "PRODUCTION_LINE_1".to_string(),
            month: "2024-01".to_string(),
            planned_production_time: 450.0,
            operating_time: 400.0,
            total_count: 30000,
            good_count: 28500,
            ideal_cycle_time: 0.75,
        }])
    }

    #[test]
    fn test_replace_swaps_wholesale() {
        let handle = DatasetHandle::new(dataset_with_device("PACK001"));
        let before = handle.current();

        handle.replace(dataset_with_device("WRAP001"));

        // 换入前取出的快照不受影响
        assert_eq!(before.records()[0].device_id, "PACK001");
        assert_eq!(handle.current().records()[0].device_id, "WRAP001");
    }

    #[test]
    fn test_concurrent_readers_see_old_or_new() {
        use std::thread;

        let handle = Arc::new(DatasetHandle::new(dataset_with_device("PACK001")));
        let mut readers = Vec::new();

        for _ in 0..8 {
            let handle = Arc::clone(&handle);
            readers.push(thread::spawn(move || {
                for _ in 0..1000 {
                    let snapshot = handle.current();
                    let device = &snapshot.records()[0].device_id;
                    // 只允许完整的旧集或新集
                    assert!(device == "PACK001" || device == "WRAP001");
                    assert_eq!(snapshot.len(), 1);
                }
            }));
        }

        let writer = {
            let handle = Arc::clone(&handle);
            thread::spawn(move || {
                for i in 0..200 {
                    let device = if i % 2 == 0 { "WRAP001" } else { "PACK001" };
                    handle.replace(dataset_with_device(device));
                }
            })
        };

        for reader in readers {
            reader.join().unwrap();
        }
        writer.join().unwrap();
    }
}
