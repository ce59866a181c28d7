// ==========================================
// 空闲教室查询 - 原始课表网格
// ==========================================
// 第 0 列: 星期标签或空白
// 第 1..=7 列: 每周时间段列（表头行 = 时间段，其余行 = 课程文本）
// ==========================================

/// 原始单元格网格（行 × 列，越界单元格视为空白）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleGrid {
    rows: Vec<Vec<String>>,
}

impl ScheduleGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// 从字符串切片构造（测试与内存数据使用）
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 读取单元格原文；越界返回空串
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// 单元格是否为空白（空串或仅含空白字符）
    pub fn is_blank(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).trim().is_empty()
    }
}
