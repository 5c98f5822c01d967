// ==========================================
// OEE 助手 - 查询 API
// ==========================================
// 职责: 查询编排(抽取 → 合并 → 计算 → 组装)、上传换入、筛选枚举
// 架构: API 层 → 引擎层(纯函数) + 存储层(快照句柄)
// 红线: 上传失败时旧数据集继续服务; 抽取值优先于显式参数
// ==========================================

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::error::ApiResult;
use crate::domain::{QueryRequest, QueryResponse, UploadOutcome};
use crate::engine::{OeeEngine, ParamExtractor, ResponseComposer};
use crate::importer::DatasetLoader;
use crate::store::{DatasetHandle, FilterOptions};

// ==========================================
// AssistantApi - 查询助手 API
// ==========================================

/// 查询助手 API
///
/// 持有当前数据集句柄与三个无状态引擎。所有请求在
/// 取出的数据集快照上完成, 与并发上传互不干扰。
pub struct AssistantApi {
    handle: Arc<DatasetHandle>,
    extractor: ParamExtractor,
    engine: OeeEngine,
    composer: ResponseComposer,
}

impl AssistantApi {
    /// 创建 API 实例
    ///
    /// # 参数
    /// - handle: 当前数据集句柄(与其他调用方共享)
    pub fn new(handle: Arc<DatasetHandle>) -> Self {
        Self {
            handle,
            extractor: ParamExtractor::new(),
            engine: OeeEngine::new(),
            composer: ResponseComposer::new(),
        }
    }

    /// 处理一次自然语言查询
    ///
    /// 流程:
    /// 1. 从 message 抽取筛选三元组
    /// 2. 与显式参数合并(抽取值优先, 显式值只补缺口)
    /// 3. 在当前数据集快照上计算 OEE
    /// 4. 按原始问题组装对话式回复
    pub fn query(&self, request: &QueryRequest) -> ApiResult<QueryResponse> {
        let extracted = self.extractor.extract(&request.message);
        let filter = extracted.merge_explicit(&request.explicit_filter());
        debug!("生效筛选: {:?}", filter);

        let dataset = self.handle.current();
        let result = self.engine.compute(&dataset, &filter)?;
        let message = self.composer.compose(&request.message, &result);

        Ok(QueryResponse {
            oee: result.oee,
            availability: result.availability,
            performance: result.performance,
            quality: result.quality,
            message,
            filter,
        })
    }

    /// 上传并换入新数据集
    ///
    /// 解析/校验/构建全部成功后才原子换入; 任何失败都
    /// 原样返回错误, 旧数据集继续服务后续请求。
    pub fn upload_dataset<P: AsRef<Path>>(&self, path: P) -> ApiResult<UploadOutcome> {
        let dataset = DatasetLoader::load(path.as_ref())?;
        let record_count = dataset.len();

        self.handle.replace(dataset);
        info!("数据集已换入: {} 条记录", record_count);

        Ok(UploadOutcome {
            message: "File uploaded and validated successfully".to_string(),
            record_count,
        })
    }

    /// 枚举当前数据集的筛选可选值(供前端下拉框)
    pub fn filter_options(&self) -> FilterOptions {
        self.handle.current().filter_options()
    }
}
