// ==========================================
// 空闲教室查询 - 教室API
// ==========================================
// 职责: 展示层入口（加载课表 / 查询空闲教室）
// 并发: 当前索引以 Arc 持有，重新加载时整体替换引用，查询不持锁计算
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::domain::{AvailabilityReport, DayCode, ScheduleIndex};
use crate::engine::AvailabilityEngine;
use crate::importer::{ScheduleImporter, ScheduleImporterImpl, UniversalFileParser};
use chrono::{Datelike, Local, NaiveTime, Timelike};
use std::path::Path;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

/// 教室API
pub struct RoomApi {
    importer: Box<dyn ScheduleImporter>,
    engine: AvailabilityEngine,
    current: RwLock<Arc<ScheduleIndex>>,
}

impl Default for RoomApi {
    fn default() -> Self {
        Self::new(Box::new(ScheduleImporterImpl::default()))
    }
}

impl RoomApi {
    /// 创建新的RoomApi实例（初始为空课表）
    pub fn new(importer: Box<dyn ScheduleImporter>) -> Self {
        Self {
            importer,
            engine: AvailabilityEngine::new(),
            current: RwLock::new(Arc::new(ScheduleIndex::empty())),
        }
    }

    /// 按配置创建（表头标记 / 列数）
    pub fn from_config(config: &ConfigManager) -> Self {
        Self::new(Box::new(ScheduleImporterImpl::new(
            Box::new(UniversalFileParser),
            config.grid_ingestor(),
        )))
    }

    // ==========================================
    // 加载
    // ==========================================

    /// 加载课表文件并替换当前课表
    ///
    /// # 返回
    /// - Ok: 新索引（已成为当前课表）
    /// - Err: 加载失败，当前课表被置为空
    pub fn load(&self, file_path: impl AsRef<Path>) -> ApiResult<Arc<ScheduleIndex>> {
        let path = file_path.as_ref();

        match self.importer.import_file(path) {
            Ok(index) => {
                let index = Arc::new(index);
                self.swap(Arc::clone(&index))?;
                info!(
                    file = %path.display(),
                    load_id = %index.load_id,
                    rooms = index.rooms().len(),
                    "课表已切换"
                );
                Ok(index)
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "课表加载失败，当前课表已清空");
                self.swap(Arc::new(ScheduleIndex::empty()))?;
                Err(ApiError::from(e))
            }
        }
    }

    /// 加载默认课表文件（不存在时返回 Ok(None)，当前课表保持不变）
    pub fn load_default(
        &self,
        default_path: impl AsRef<Path>,
    ) -> ApiResult<Option<Arc<ScheduleIndex>>> {
        let path = default_path.as_ref();
        if !path.exists() {
            info!(file = %path.display(), "未找到默认课表文件");
            return Ok(None);
        }
        self.load(path).map(Some)
    }

    fn swap(&self, index: Arc<ScheduleIndex>) -> ApiResult<()> {
        let mut guard = self
            .current
            .write()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))?;
        *guard = index;
        Ok(())
    }

    /// 当前课表（引用计数共享，调用方持有期间不受重新加载影响）
    pub fn current_index(&self) -> ApiResult<Arc<ScheduleIndex>> {
        let guard = self
            .current
            .read()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))?;
        Ok(Arc::clone(&*guard))
    }

    /// 是否已加载非空课表
    pub fn has_schedule(&self) -> bool {
        self.current_index()
            .map(|index| !index.is_empty())
            .unwrap_or(false)
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 按文本输入查询空闲教室
    ///
    /// # 参数
    /// - day: 星期文本（如 "Tue" / "Tuesday"）
    /// - time: 时刻文本（如 "10:30 AM" / "13:40"）
    pub fn query(&self, day: &str, time: &str) -> ApiResult<AvailabilityReport> {
        let index = self.current_index()?;
        Ok(self.engine.query(&index, day, time)?)
    }

    /// 按已解析的星期与时刻查询
    pub fn query_at(&self, day: DayCode, time: NaiveTime) -> ApiResult<AvailabilityReport> {
        let index = self.current_index()?;
        Ok(self.engine.evaluate(&index, day, time))
    }

    /// 按本地当前时间查询（精确到分钟）
    pub fn query_now(&self) -> ApiResult<AvailabilityReport> {
        let now = Local::now();
        let day = DayCode::from_weekday(now.weekday());
        let time = NaiveTime::from_hms_opt(now.hour(), now.minute(), 0)
            .ok_or_else(|| ApiError::InternalError("当前时间无效".to_string()))?;
        self.query_at(day, time)
    }
}
