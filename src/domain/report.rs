// ==========================================
// 空闲教室查询 - 可用性报告
// ==========================================
// 输出: 按楼栋分组的空闲教室列表 + 总数
// ==========================================

use crate::domain::room::RoomId;
use crate::domain::types::{Building, RoomStatus};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 单个空闲教室的展示行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomAvailability {
    pub room: RoomId,
    pub floor: char,
    pub status: RoomStatus,
}

impl RoomAvailability {
    pub fn available(room: RoomId) -> Self {
        Self {
            floor: room.floor(),
            room,
            status: RoomStatus::Available,
        }
    }
}

/// 可用性报告
///
/// 四个楼栋始终存在（可能为空列表），列表已按展示顺序排好
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    /// 星期匹配键（规范代码，或无法识别时截取的三个字符）
    pub day: String,
    pub time: NaiveTime,
    pub buildings: BTreeMap<Building, Vec<RoomAvailability>>,
    pub total_available: usize,
}

impl AvailabilityReport {
    pub fn rooms_in(&self, building: Building) -> &[RoomAvailability] {
        self.buildings
            .get(&building)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 判断教室是否出现在空闲列表中
    pub fn is_available(&self, room: &RoomId) -> bool {
        self.rooms_in(room.building())
            .iter()
            .any(|r| &r.room == room)
    }
}
