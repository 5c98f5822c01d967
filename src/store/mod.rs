// ==========================================
// OEE 助手 - 数据存储层
// ==========================================
// 职责: 内存数据集快照与当前数据集句柄
// 红线: 数据集构建后不可变, 替换必须整体原子换入
// ==========================================

pub mod dataset;
pub mod handle;

pub use dataset::{Dataset, FilterOptions};
pub use handle::DatasetHandle;
