// ==========================================
// 空闲教室查询 - 课表索引领域模型
// ==========================================
// 职责: 时间段 / 课表条目 / 课表索引
// 红线: 索引构建后不可变，重新加载时整体替换
// ==========================================

use crate::domain::room::RoomId;
use crate::domain::types::{Building, DayCode};
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

// ==========================================
// TimeRange - 占用时间段
// ==========================================
// 不校验 start <= end；倒置区间不包含任何时刻
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// 判断时刻是否落在区间内（两端均包含）
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }
}

// ==========================================
// ScheduleEntry - 课表条目
// ==========================================
// slot 为表头原文，查询时再解析（不缓存解析结果）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: DayCode,
    pub slot: String,
    pub room: RoomId,
}

// ==========================================
// ScheduleIndex - 课表索引
// ==========================================
/// 只能经由 ScheduleIndex::new 构建（不提供反序列化），保证条目教室都在教室集合内
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleIndex {
    // ===== 加载批次信息 =====
    pub load_id: String,          // 每次加载生成的批次 ID
    pub source: Option<String>,   // 来源文件（网格直接导入时为 None）
    pub loaded_at: DateTime<Utc>, // 加载时间

    // ===== 索引内容 =====
    entries: Vec<ScheduleEntry>,
    rooms: BTreeSet<RoomId>,
}

/// 单个楼栋的索引统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingSummary {
    pub building: Building,
    pub room_count: usize,
    pub entry_count: usize,
}

impl ScheduleIndex {
    /// 由条目与额外观察到的教室构造索引
    ///
    /// 教室集合 = 额外教室 ∪ 条目中的教室，保证每个条目的教室都在集合内
    pub fn new(
        source: Option<String>,
        entries: Vec<ScheduleEntry>,
        observed_rooms: impl IntoIterator<Item = RoomId>,
    ) -> Self {
        let mut rooms: BTreeSet<RoomId> = observed_rooms.into_iter().collect();
        rooms.extend(entries.iter().map(|e| e.room.clone()));

        Self {
            load_id: Uuid::new_v4().to_string(),
            source,
            loaded_at: Utc::now(),
            entries,
            rooms,
        }
    }

    /// 空索引（尚未加载或加载失败）
    pub fn empty() -> Self {
        Self::new(None, Vec::new(), Vec::new())
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn rooms(&self) -> &BTreeSet<RoomId> {
        &self.rooms
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.rooms.is_empty()
    }

    /// 某楼栋内出现过的全部教室（按展示顺序）
    pub fn rooms_in(&self, building: Building) -> impl Iterator<Item = &RoomId> + '_ {
        self.rooms.iter().filter(move |r| r.building() == building)
    }

    /// 某一天的全部条目
    pub fn entries_on(&self, day: DayCode) -> impl Iterator<Item = &ScheduleEntry> + '_ {
        self.entries.iter().filter(move |e| e.day == day)
    }

    /// 按楼栋汇总教室数与条目数（四个楼栋全部输出）
    pub fn summary(&self) -> Vec<BuildingSummary> {
        let mut entry_counts: BTreeMap<Building, usize> = BTreeMap::new();
        for entry in &self.entries {
            *entry_counts.entry(entry.room.building()).or_insert(0) += 1;
        }

        Building::ALL
            .iter()
            .map(|&building| BuildingSummary {
                building,
                room_count: self.rooms_in(building).count(),
                entry_count: entry_counts.get(&building).copied().unwrap_or(0),
            })
            .collect()
    }
}
