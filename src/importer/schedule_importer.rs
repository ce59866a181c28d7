// ==========================================
// 空闲教室查询 - 课表导入器实现
// ==========================================
// 职责: 整合导入流程，从文件到课表索引
// 流程: 解析文件 → 定位表头 → 摄取网格 → 生成索引
// ==========================================

use crate::domain::ScheduleIndex;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::grid::ScheduleGrid;
use crate::importer::grid_ingestor::GridIngestor;
use crate::importer::schedule_importer_trait::{FileParser, ScheduleImporter};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument};

// ==========================================
// ScheduleImporterImpl - 课表导入器实现
// ==========================================
pub struct ScheduleImporterImpl {
    // 导入组件
    file_parser: Box<dyn FileParser>,
    ingestor: GridIngestor,
}

impl Default for ScheduleImporterImpl {
    fn default() -> Self {
        Self::new(Box::new(UniversalFileParser), GridIngestor::default())
    }
}

impl ScheduleImporterImpl {
    /// 创建新的 ScheduleImporter 实例
    ///
    /// # 参数
    /// - file_parser: 文件解析器
    /// - ingestor: 网格摄取器（携带表头标记与列数配置）
    pub fn new(file_parser: Box<dyn FileParser>, ingestor: GridIngestor) -> Self {
        Self {
            file_parser,
            ingestor,
        }
    }
}

impl ScheduleImporter for ScheduleImporterImpl {
    #[instrument(skip(self, file_path), fields(file_path = %file_path.display()))]
    fn import_file(&self, file_path: &Path) -> ImportResult<ScheduleIndex> {
        let start_time = Instant::now();
        info!("开始导入课表");

        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let grid = self.file_parser.parse_to_grid(file_path).map_err(|e| {
            error!(error = %e, "文件解析失败");
            e
        })?;
        info!(total_rows = grid.row_count(), "文件解析完成");

        // === 步骤 2: 摄取网格 ===
        debug!("步骤 2: 摄取网格");
        let index = self.import_grid(&grid, Some(file_path.display().to_string()))?;

        info!(
            load_id = %index.load_id,
            entries = index.entries().len(),
            rooms = index.rooms().len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "课表导入完成"
        );
        Ok(index)
    }

    fn import_grid(
        &self,
        grid: &ScheduleGrid,
        source: Option<String>,
    ) -> ImportResult<ScheduleIndex> {
        self.ingestor.ingest(grid, source).map_err(|e| {
            error!(error = %e, "课表摄取失败");
            e
        })
    }
}
