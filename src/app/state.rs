// ==========================================
// OEE 助手 - 应用状态
// ==========================================
// 职责: 组装共享状态与 API 实例
// 红线: 无全局单例; 调用方持有 AppState / 句柄
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{ApiResult, AssistantApi};
use crate::importer::DatasetLoader;
use crate::store::{Dataset, DatasetHandle};

/// 默认示例数据相对路径
const DEFAULT_SAMPLE_DATA: &str = "data/sample_oee_data.csv";

/// 应用状态
///
/// 持有当前数据集句柄与查询 API; 宿主(CLI / HTTP 层)
/// 通过它访问全部能力。
pub struct AppState {
    /// 初始数据文件路径
    pub data_path: PathBuf,

    /// 查询助手 API
    pub assistant_api: Arc<AssistantApi>,

    /// 当前数据集句柄(与 API 共享)
    pub dataset_handle: Arc<DatasetHandle>,
}

impl AppState {
    /// 创建新的 AppState 实例
    ///
    /// # 参数
    /// - data_path: 初始数据文件(CSV/Excel)
    ///
    /// # 说明
    /// 初始数据同样要过校验门; 加载失败则初始化失败。
    pub fn new<P: Into<PathBuf>>(data_path: P) -> ApiResult<Self> {
        let data_path = data_path.into();
        tracing::info!("初始化 AppState, 数据文件: {}", data_path.display());

        let dataset = DatasetLoader::load(&data_path)?;
        let dataset_handle = Arc::new(DatasetHandle::new(dataset));
        let assistant_api = Arc::new(AssistantApi::new(dataset_handle.clone()));

        tracing::info!("AppState 初始化完成");

        Ok(Self {
            data_path,
            assistant_api,
            dataset_handle,
        })
    }

    /// 以空数据集启动(等待首次上传)
    pub fn empty() -> Self {
        let dataset_handle = Arc::new(DatasetHandle::new(Dataset::from_records(Vec::new())));
        let assistant_api = Arc::new(AssistantApi::new(dataset_handle.clone()));

        Self {
            data_path: PathBuf::new(),
            assistant_api,
            dataset_handle,
        }
    }
}

/// 获取默认数据文件路径
///
/// 允许通过环境变量 OEE_ASSISTANT_DATA_PATH 显式指定
/// (便于调试/测试/CI), 否则使用仓库内示例数据。
pub fn get_default_data_path() -> PathBuf {
    if let Ok(path) = std::env::var("OEE_ASSISTANT_DATA_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    PathBuf::from(DEFAULT_SAMPLE_DATA)
}
