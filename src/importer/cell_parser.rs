// ==========================================
// 空闲教室查询 - 单元格解析器
// ==========================================
// 职责: 星期标签拆分 / 教室标识提取 / 时间与时间段解析
// 红线: 纯函数，无共享状态
// ==========================================

use crate::domain::{DayCode, RoomId, TimeRange};
use crate::domain::types::Building;
use crate::importer::error::CellParseError;
use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// 预编译正则（std::sync::LazyLock）
static RE_ROOM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(PA|PB|PC|PD)\s*([0-9]+)([A-Z])?\b").expect("valid room regex")
});
static RE_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*:\s*").expect("valid colon regex"));
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// 组合星期分隔符（"Sun & Tue"）
const DAY_COMBINATOR: char = '&';

/// 时间段分隔符（"10:00 AM-11:00 AM"）
const RANGE_SEPARATOR: char = '-';

/// 解析星期标签
///
/// # 规则
/// - 含 '&' 时按 '&' 拆分，每段 TRIM 后取前三个字符
/// - 否则整体取前三个字符
/// - 大小写不敏感；无法识别的片段丢弃
///
/// # 示例
/// - "Sun & Tue" → [Sun, Tue]
/// - "Thu & SAT" → [Thu, Sat]
pub fn parse_day_label(text: &str) -> Vec<DayCode> {
    let text = text.trim();

    let parts: Vec<&str> = if text.contains(DAY_COMBINATOR) {
        text.split(DAY_COMBINATOR)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    } else {
        vec![text]
    };

    parts
        .into_iter()
        .filter_map(|part| {
            let day = DayCode::from_label(part);
            if day.is_none() {
                debug!(label = %text, part = %part, "无法识别的星期片段，已忽略");
            }
            day
        })
        .collect()
}

/// 从单元格文本中提取全部教室标识
///
/// 按出现顺序返回，保留重复项，统一大写
pub fn extract_rooms(text: &str) -> Vec<RoomId> {
    RE_ROOM
        .captures_iter(text)
        .filter_map(|caps| {
            let building = Building::from_code(caps.get(1)?.as_str())?;
            let number = caps.get(2)?.as_str();
            let suffix = caps.get(3).and_then(|m| m.as_str().chars().next());
            RoomId::from_parts(building, number, suffix)
        })
        .collect()
}

/// 解析单个时刻
///
/// # 规则
/// 1. 去掉 ':' 两侧多余空白，连续空白压缩为一个空格
/// 2. 若仍含 '-'，只取第一个 '-' 之前的部分
/// 3. 先按 12 小时制（带 AM/PM）解析，再按 24 小时制解析
///
/// # 示例
/// - "1:40 PM" → 13:40
/// - "1 : 40 PM" → 13:40
/// - "13:40" → 13:40
pub fn parse_time_of_day(text: &str) -> Result<NaiveTime, CellParseError> {
    let normalized = RE_COLON.replace_all(text, ":");
    let normalized = RE_WHITESPACE.replace_all(&normalized, " ");
    let mut candidate = normalized.trim();

    if let Some((head, _)) = candidate.split_once(RANGE_SEPARATOR) {
        candidate = head.trim();
    }

    NaiveTime::parse_from_str(candidate, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(candidate, "%H:%M"))
        .map_err(|_| CellParseError::TimeParseError(text.to_string()))
}

/// 解析时间段
///
/// 按第一个 '-' 拆成两段分别解析；不校验 start <= end
pub fn parse_time_range(text: &str) -> Result<TimeRange, CellParseError> {
    let (start, end) = text
        .split_once(RANGE_SEPARATOR)
        .ok_or_else(|| CellParseError::TimeParseError(text.to_string()))?;

    let start = parse_time_of_day(start.trim())?;
    let end = parse_time_of_day(end.trim())?;
    Ok(TimeRange::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn codes(rooms: &[RoomId]) -> Vec<&str> {
        rooms.iter().map(|r| r.as_str()).collect()
    }

    #[test]
    fn test_parse_day_label_single() {
        assert_eq!(parse_day_label("Tue"), vec![DayCode::Tue]);
        assert_eq!(parse_day_label("  Wednesday  "), vec![DayCode::Wed]);
    }

    #[test]
    fn test_parse_day_label_combined() {
        assert_eq!(
            parse_day_label("Sun & Tue"),
            vec![DayCode::Sun, DayCode::Tue]
        );
        assert_eq!(
            parse_day_label("Thu & SAT"),
            vec![DayCode::Thu, DayCode::Sat]
        );
        assert_eq!(
            parse_day_label("Sun &Tue"),
            vec![DayCode::Sun, DayCode::Tue]
        );
    }

    #[test]
    fn test_parse_day_label_skips_empty_and_unknown_parts() {
        assert_eq!(parse_day_label("Mon & "), vec![DayCode::Mon]);
        assert_eq!(parse_day_label("Lunch"), Vec::<DayCode>::new());
        assert_eq!(parse_day_label("Fri & ???"), vec![DayCode::Fri]);
    }

    #[test]
    fn test_extract_rooms_multiple_case_insensitive() {
        let rooms = extract_rooms("Lecture in PA101 and pb202b");
        assert_eq!(codes(&rooms), vec!["PA101", "PB202B"]);
    }

    #[test]
    fn test_extract_rooms_spacing_and_duplicates() {
        let rooms = extract_rooms("CSE 101 (PC 305) / Lab PC305, PD7");
        assert_eq!(codes(&rooms), vec!["PC305", "PC305", "PD7"]);
    }

    #[test]
    fn test_extract_rooms_none() {
        assert!(extract_rooms("Seminar hall").is_empty());
        assert!(extract_rooms("PE101 XPA101").is_empty());
        assert!(extract_rooms("").is_empty());
    }

    #[test]
    fn test_parse_time_of_day_formats() {
        assert_eq!(parse_time_of_day("1:40 PM").unwrap(), t(13, 40));
        assert_eq!(parse_time_of_day("1 : 40 PM").unwrap(), t(13, 40));
        assert_eq!(parse_time_of_day("13:40").unwrap(), t(13, 40));
        assert_eq!(parse_time_of_day("  10:00   am ").unwrap(), t(10, 0));
        assert_eq!(parse_time_of_day("12:15 AM").unwrap(), t(0, 15));
    }

    #[test]
    fn test_parse_time_of_day_takes_range_start() {
        assert_eq!(parse_time_of_day("10:00 AM-11:00 AM").unwrap(), t(10, 0));
    }

    #[test]
    fn test_parse_time_of_day_error_keeps_original_text() {
        let err = parse_time_of_day("noon").unwrap_err();
        assert_eq!(err, CellParseError::TimeParseError("noon".to_string()));
        assert!(parse_time_of_day("25:00").is_err());
        assert!(parse_time_of_day("").is_err());
    }

    #[test]
    fn test_parse_time_range() {
        let range = parse_time_range("10:00 AM-11:00 AM").unwrap();
        assert_eq!(range, TimeRange::new(t(10, 0), t(11, 0)));

        let range = parse_time_range("1 : 40 PM - 3:10 PM").unwrap();
        assert_eq!(range, TimeRange::new(t(13, 40), t(15, 10)));
    }

    #[test]
    fn test_parse_time_range_tolerates_inverted() {
        let range = parse_time_range("11:00-10:00").unwrap();
        assert_eq!(range, TimeRange::new(t(11, 0), t(10, 0)));
    }

    #[test]
    fn test_parse_time_range_errors() {
        assert!(parse_time_range("10:00 AM").is_err());
        assert!(parse_time_range("TBA-11:00").is_err());
        assert!(parse_time_range("").is_err());
    }
}
