// ==========================================
// 空闲教室查询 - 教室标识
// ==========================================
// 格式: 楼栋前缀 + 数字部分 + 可选单个字母后缀
// 规范化: 全大写、去除空白（"pa 101b" → "PA101B"）
// ==========================================

use crate::domain::types::Building;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ==========================================
// RoomId - 教室标识
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId {
    code: String,
    building: Building,
    number: String,
    suffix: Option<char>,
}

impl RoomId {
    /// 由已拆分的各部分构造
    ///
    /// # 返回
    /// - None: 数字部分为空或含非数字字符，或后缀不是字母
    pub fn from_parts(building: Building, number: &str, suffix: Option<char>) -> Option<Self> {
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let suffix = match suffix {
            Some(c) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
            Some(_) => return None,
            None => None,
        };

        let mut code = String::with_capacity(2 + number.len() + 1);
        code.push_str(building.code());
        code.push_str(number);
        if let Some(c) = suffix {
            code.push(c);
        }

        Some(Self {
            code,
            building,
            number: number.to_string(),
            suffix,
        })
    }

    /// 解析单个教室文本（整段文本必须恰好是一个教室标识）
    pub fn parse(text: &str) -> Option<Self> {
        let compact: String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();
        if compact.len() < 3 || !compact.is_ascii() {
            return None;
        }

        let building = Building::from_code(&compact[..2])?;
        let rest = &compact[2..];
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(digits_end);

        let mut tail_chars = tail.chars();
        let suffix = tail_chars.next();
        if tail_chars.next().is_some() {
            return None;
        }

        Self::from_parts(building, number, suffix)
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn building(&self) -> Building {
        self.building
    }

    /// 数字部分（原样保留前导零）
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn suffix(&self) -> Option<char> {
        self.suffix
    }

    /// 楼层 = 数字部分的首位数字
    pub fn floor(&self) -> char {
        // from_parts 保证数字部分非空
        self.number.chars().next().unwrap_or('0')
    }

    // 数值比较键: 去掉前导零后先比位数再比字面，避免长数字溢出
    fn numeric_key(&self) -> (usize, &str) {
        let trimmed = self.number.trim_start_matches('0');
        (trimmed.len(), trimmed)
    }
}

// 展示顺序: 数字部分的数值升序，数值相同再按完整字符串（覆盖字母后缀）
impl Ord for RoomId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeric_key()
            .cmp(&other.numeric_key())
            .then_with(|| self.code.cmp(&other.code))
    }
}

impl PartialOrd for RoomId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl TryFrom<String> for RoomId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RoomId::parse(&value).ok_or_else(|| format!("无效的教室标识: {}", value))
    }
}

impl From<RoomId> for String {
    fn from(room: RoomId) -> Self {
        room.code
    }
}
