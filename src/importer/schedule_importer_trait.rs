// ==========================================
// 空闲教室查询 - 课表导入 Trait
// ==========================================
// 职责: 定义课表导入接口（不包含实现）
// 流程: 文件读取 → 原始网格 → 表头定位 → 星期延续 → 课表索引
// ==========================================

use crate::domain::ScheduleIndex;
use crate::importer::error::ImportResult;
use crate::importer::grid::ScheduleGrid;
use std::path::Path;

// ==========================================
// ScheduleImporter Trait
// ==========================================
// 用途: 课表导入主接口
// 实现者: ScheduleImporterImpl
pub trait ScheduleImporter: Send + Sync {
    /// 从文件导入课表
    ///
    /// # 参数
    /// - file_path: 课表文件路径（.xlsx/.xls/.xlsm/.ods/.csv）
    ///
    /// # 返回
    /// - Ok(ScheduleIndex): 新构建的不可变索引
    /// - Err: 文件错误 / 未找到表头（不产生部分索引）
    fn import_file(&self, file_path: &Path) -> ImportResult<ScheduleIndex>;

    /// 从内存网格导入课表
    ///
    /// # 参数
    /// - grid: 原始网格
    /// - source: 来源描述（用于日志与索引元数据）
    fn import_grid(&self, grid: &ScheduleGrid, source: Option<String>)
        -> ImportResult<ScheduleIndex>;
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: ExcelParser, CsvParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始网格（不做表头识别）
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(ScheduleGrid): 原始网格
    /// - Err: 文件读取错误、格式错误
    fn parse_to_grid(&self, file_path: &Path) -> ImportResult<ScheduleGrid>;
}
