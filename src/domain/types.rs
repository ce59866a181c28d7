// ==========================================
// 空闲教室查询 - 领域类型定义
// ==========================================
// 职责: 星期代码 / 楼栋代码 / 教室状态
// ==========================================

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 星期代码 (Day Code)
// ==========================================
// 匹配键: 课表条目与查询之间统一按三字母代码比较
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayCode {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayCode {
    /// 从自由文本标签解析星期代码
    ///
    /// 规则: TRIM 后截取前三个字符，大小写不敏感
    /// - "Tuesday" → Tue
    /// - "SAT" → Sat
    /// - "Break" → None
    pub fn from_label(label: &str) -> Option<Self> {
        match label_prefix(label).to_ascii_lowercase().as_str() {
            "mon" => Some(DayCode::Mon),
            "tue" => Some(DayCode::Tue),
            "wed" => Some(DayCode::Wed),
            "thu" => Some(DayCode::Thu),
            "fri" => Some(DayCode::Fri),
            "sat" => Some(DayCode::Sat),
            "sun" => Some(DayCode::Sun),
            _ => None,
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayCode::Mon,
            Weekday::Tue => DayCode::Tue,
            Weekday::Wed => DayCode::Wed,
            Weekday::Thu => DayCode::Thu,
            Weekday::Fri => DayCode::Fri,
            Weekday::Sat => DayCode::Sat,
            Weekday::Sun => DayCode::Sun,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayCode::Mon => "Mon",
            DayCode::Tue => "Tue",
            DayCode::Wed => "Wed",
            DayCode::Thu => "Thu",
            DayCode::Fri => "Fri",
            DayCode::Sat => "Sat",
            DayCode::Sun => "Sun",
        }
    }
}

/// 标签的匹配键: TRIM 后的前三个字符
fn label_prefix(label: &str) -> String {
    label.trim().chars().take(3).collect()
}

/// 查询星期的匹配键
///
/// 可识别的星期返回规范代码（"tuesday" → "Tue"），否则原样返回截取后的三个字符；
/// 无法识别的键不会与任何课表条目匹配
pub fn day_key(label: &str) -> String {
    match DayCode::from_label(label) {
        Some(day) => day.as_str().to_string(),
        None => label_prefix(label),
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 楼栋代码 (Building)
// ==========================================
// 固定集合: PA / PB / PC / PD，顺序即展示顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Building {
    PA,
    PB,
    PC,
    PD,
}

impl Building {
    pub const ALL: [Building; 4] = [Building::PA, Building::PB, Building::PC, Building::PD];

    pub fn code(&self) -> &'static str {
        match self {
            Building::PA => "PA",
            Building::PB => "PB",
            Building::PC => "PC",
            Building::PD => "PD",
        }
    }

    /// 按楼栋前缀解析（大小写不敏感）
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "PA" => Some(Building::PA),
            "PB" => Some(Building::PB),
            "PC" => Some(Building::PC),
            "PD" => Some(Building::PD),
            _ => None,
        }
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 教室状态 (Room Status)
// ==========================================
// 报告中只出现空闲教室，占用教室不输出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
}

impl RoomStatus {
    /// 国际化文案 key
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RoomStatus::Available => "status.available",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Available => write!(f, "Available"),
        }
    }
}
