// ==========================================
// 空闲教室查询 - 可用性查询引擎
// ==========================================
// 输入: 课表索引 + 查询星期 + 查询时刻
// 输出: 按楼栋分组、排好序的空闲教室报告
// ==========================================
// 红线: 单个时间段解析失败只跳过该条目，不中止查询
// 红线: 只报告课表中出现过的教室
// ==========================================

use crate::domain::{
    day_key, AvailabilityReport, Building, DayCode, RoomAvailability, RoomId, ScheduleEntry,
    ScheduleIndex,
};
use crate::engine::error::{QueryError, QueryResult};
use crate::importer::cell_parser::{parse_time_of_day, parse_time_range};
use crate::importer::error::CellParseError;
use chrono::NaiveTime;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, instrument, warn};

/// 被跳过的时间段（查询期间解析失败）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSlot {
    pub room: RoomId,
    pub slot: String,
    pub error: CellParseError,
}

/// 占用扫描结果
#[derive(Debug, Clone, Default)]
pub struct OccupancyScan {
    pub occupied: HashSet<RoomId>,
    pub skipped: Vec<SkippedSlot>,
}

// ==========================================
// AvailabilityEngine - 可用性查询引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityEngine;

impl AvailabilityEngine {
    /// 创建新的可用性查询引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 按文本输入查询空闲教室
    ///
    /// # 参数
    /// - day_label: 星期文本（截取前三个字符匹配，大小写不敏感）
    /// - time_label: 时刻文本（12 小时制带 AM/PM，或 24 小时制）
    ///
    /// # 返回
    /// - Err(InvalidQueryTime): 时刻无法解析
    /// - 星期无法识别时不报错: 没有条目匹配，全部已知教室空闲
    #[instrument(skip(self, index), fields(load_id = %index.load_id))]
    pub fn query(
        &self,
        index: &ScheduleIndex,
        day_label: &str,
        time_label: &str,
    ) -> QueryResult<AvailabilityReport> {
        let time = parse_time_of_day(time_label)
            .map_err(|_| QueryError::InvalidQueryTime(time_label.to_string()))?;

        let day = DayCode::from_label(day_label);
        if day.is_none() {
            debug!(day_label = %day_label, "星期无法识别，不匹配任何条目");
        }

        Ok(self.build_report(index, day, day_key(day_label), time))
    }

    /// 按已解析的星期与时刻计算报告
    pub fn evaluate(
        &self,
        index: &ScheduleIndex,
        day: DayCode,
        time: NaiveTime,
    ) -> AvailabilityReport {
        self.build_report(index, Some(day), day.as_str().to_string(), time)
    }

    fn build_report(
        &self,
        index: &ScheduleIndex,
        day: Option<DayCode>,
        key: String,
        time: NaiveTime,
    ) -> AvailabilityReport {
        let scan = self.occupied_rooms(index, day, time);

        if !scan.skipped.is_empty() {
            warn!(
                day = %key,
                skipped = scan.skipped.len(),
                "部分时间段无法解析，已跳过"
            );
        }

        let mut buildings: BTreeMap<Building, Vec<RoomAvailability>> = BTreeMap::new();
        let mut total_available = 0;

        for building in Building::ALL {
            let mut available: Vec<&RoomId> = index
                .rooms_in(building)
                .filter(|room| !scan.occupied.contains(*room))
                .collect();
            available.sort();

            total_available += available.len();
            buildings.insert(
                building,
                available
                    .into_iter()
                    .cloned()
                    .map(RoomAvailability::available)
                    .collect(),
            );
        }

        info!(
            day = %key,
            time = %time.format("%H:%M"),
            occupied = scan.occupied.len(),
            total_available,
            "可用性查询完成"
        );

        AvailabilityReport {
            day: key,
            time,
            buildings,
            total_available,
        }
    }

    /// 计算某星期某时刻被占用的教室
    ///
    /// 每个条目独立解析时间段；解析失败的条目记入 skipped，不影响其他条目。
    /// day 为 None（星期无法识别）时没有条目匹配
    pub fn occupied_rooms(
        &self,
        index: &ScheduleIndex,
        day: Option<DayCode>,
        time: NaiveTime,
    ) -> OccupancyScan {
        let mut scan = OccupancyScan::default();
        let Some(day) = day else {
            return scan;
        };

        for (entry, parsed) in index
            .entries_on(day)
            .map(|entry| (entry, parse_time_range(&entry.slot)))
        {
            match parsed {
                Ok(range) if range.contains(time) => {
                    scan.occupied.insert(entry.room.clone());
                }
                Ok(_) => {}
                Err(error) => {
                    debug!(room = %entry.room, slot = %entry.slot, "跳过无效时间段");
                    scan.skipped.push(skipped(entry, error));
                }
            }
        }

        scan
    }
}

fn skipped(entry: &ScheduleEntry, error: CellParseError) -> SkippedSlot {
    SkippedSlot {
        room: entry.room.clone(),
        slot: entry.slot.clone(),
        error,
    }
}
