// ==========================================
// 空闲教室查询 - 网格摄取器
// ==========================================
// 流程: 定位表头行 → 逐行延续星期标签 → 提取教室 → 生成课表条目
// 红线: 未找到表头时整体失败，不产生部分索引
// ==========================================

use crate::domain::{DayCode, RoomId, ScheduleEntry, ScheduleIndex};
use crate::importer::cell_parser::{extract_rooms, parse_day_label};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::grid::ScheduleGrid;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// 默认表头标记（第 0 列中包含此文本的第一行即表头行）
pub const DEFAULT_HEADER_MARKER: &str = "Day /Time";

/// 默认时间段列数（第 1..=7 列）
pub const DEFAULT_CONTENT_COLUMNS: usize = 7;

/// 摄取统计（用于日志）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub header_row: usize,
    pub data_rows: usize,
    pub rows_before_first_day: usize,
    pub cells_without_rooms: usize,
}

// ==========================================
// GridIngestor - 网格摄取器
// ==========================================
#[derive(Debug, Clone)]
pub struct GridIngestor {
    header_marker: String,
    content_columns: usize,
}

impl Default for GridIngestor {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_MARKER, DEFAULT_CONTENT_COLUMNS)
    }
}

impl GridIngestor {
    pub fn new(header_marker: impl Into<String>, content_columns: usize) -> Self {
        Self {
            header_marker: header_marker.into(),
            content_columns,
        }
    }

    pub fn header_marker(&self) -> &str {
        &self.header_marker
    }

    /// 在第 0 列中自上而下查找表头行
    pub fn find_header_row(&self, grid: &ScheduleGrid) -> Option<usize> {
        (0..grid.row_count()).find(|&row| grid.cell(row, 0).contains(&self.header_marker))
    }

    /// 摄取网格，构建课表索引
    ///
    /// # 规则
    /// - 第 0 列非空白时重新解析星期标签，否则沿用上一行的星期
    /// - 第一个星期标签之前的行跳过
    /// - 每个非空白内容单元格: 对其中每个教室 × 当前每个星期生成一条条目
    #[instrument(skip(self, grid), fields(rows = grid.row_count()))]
    pub fn ingest(
        &self,
        grid: &ScheduleGrid,
        source: Option<String>,
    ) -> ImportResult<ScheduleIndex> {
        let (index, stats) = self.ingest_with_stats(grid, source)?;
        info!(
            header_row = stats.header_row,
            data_rows = stats.data_rows,
            entries = index.entries().len(),
            rooms = index.rooms().len(),
            "课表摄取完成"
        );
        Ok(index)
    }

    pub fn ingest_with_stats(
        &self,
        grid: &ScheduleGrid,
        source: Option<String>,
    ) -> ImportResult<(ScheduleIndex, IngestStats)> {
        let header_row = self.find_header_row(grid).ok_or_else(|| {
            warn!(marker = %self.header_marker, "未找到表头行");
            ImportError::HeaderNotFound {
                marker: self.header_marker.clone(),
            }
        })?;
        debug!(header_row, "定位表头行");

        let mut stats = IngestStats {
            header_row,
            ..IngestStats::default()
        };
        let mut entries: Vec<ScheduleEntry> = Vec::new();
        let mut rooms: BTreeSet<RoomId> = BTreeSet::new();

        // None: 尚未遇到任何星期标签
        let mut active_days: Option<Vec<DayCode>> = None;

        for row in (header_row + 1)..grid.row_count() {
            stats.data_rows += 1;

            if !grid.is_blank(row, 0) {
                let label = grid.cell(row, 0);
                let days = parse_day_label(label);
                if days.is_empty() {
                    debug!(row, label = %label, "星期标签无法识别，本组行不产生条目");
                }
                active_days = Some(days);
            }

            let Some(days) = active_days.as_deref() else {
                stats.rows_before_first_day += 1;
                continue;
            };

            for col in 1..=self.content_columns {
                if grid.is_blank(row, col) {
                    continue;
                }

                let slot = grid.cell(header_row, col);
                let cell_rooms = extract_rooms(grid.cell(row, col));
                if cell_rooms.is_empty() {
                    stats.cells_without_rooms += 1;
                    continue;
                }

                for room in cell_rooms {
                    for &day in days {
                        entries.push(ScheduleEntry {
                            day,
                            slot: slot.to_string(),
                            room: room.clone(),
                        });
                    }
                    rooms.insert(room);
                }
            }
        }

        if stats.rows_before_first_day > 0 {
            debug!(
                skipped = stats.rows_before_first_day,
                "跳过首个星期标签之前的行"
            );
        }

        Ok((ScheduleIndex::new(source, entries, rooms), stats))
    }
}
