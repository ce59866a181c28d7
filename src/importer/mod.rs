// ==========================================
// 空闲教室查询 - 导入层
// ==========================================
// 职责: 外部课表文件 → 原始网格 → 课表索引
// 支持: Excel, CSV, 内存网格
// ==========================================

// 模块声明
pub mod cell_parser;
pub mod error;
pub mod file_parser;
pub mod grid;
pub mod grid_ingestor;
pub mod schedule_importer;
pub mod schedule_importer_trait;

// 重导出核心类型
pub use cell_parser::{extract_rooms, parse_day_label, parse_time_of_day, parse_time_range};
pub use error::{CellParseError, ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use grid::ScheduleGrid;
pub use grid_ingestor::{GridIngestor, IngestStats, DEFAULT_CONTENT_COLUMNS, DEFAULT_HEADER_MARKER};
pub use schedule_importer::ScheduleImporterImpl;

// 重导出 Trait 接口
pub use schedule_importer_trait::{FileParser, ScheduleImporter};
