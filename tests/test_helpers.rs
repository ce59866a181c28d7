// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 生成临时课表文件与内存网格
// ==========================================

#![allow(dead_code)]

use roomable::importer::ScheduleGrid;
use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

/// 标准表头行（第 0 列为表头标记，第 1..=7 列为时间段）
pub const HEADER: [&str; 8] = [
    "Day /Time",
    "8:00 AM-9:20 AM",
    "9:30 AM-10:50 AM",
    "11:00 AM-12:20 PM",
    "12:30 PM-1:50 PM",
    "2:00 PM-3:20 PM",
    "3:30 PM - 4:50 PM",
    "5:00 PM-6 : 20 PM",
];

/// 写入临时 CSV 课表文件
///
/// # 返回
/// - NamedTempFile: 临时文件（需要保持存活）
pub fn create_csv_schedule(rows: &[Vec<&str>]) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut temp_file = tempfile::Builder::new().suffix(".csv").tempfile()?;
    {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(temp_file.as_file_mut());
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }
    temp_file.flush()?;
    Ok(temp_file)
}

/// 带标题行与标准表头的课表（数据行追加在表头之后）
pub fn routine_rows<'a>(data: &[Vec<&'a str>]) -> Vec<Vec<&'a str>> {
    let mut rows = vec![vec!["Class Routine - Spring"], HEADER.to_vec()];
    rows.extend(data.iter().cloned());
    rows
}

/// 内存网格（不经过文件）
pub fn grid(rows: &[Vec<&str>]) -> ScheduleGrid {
    ScheduleGrid::from_rows(rows.iter().map(|r| r.iter().map(|c| c.to_string())))
}

/// 示例课表: 覆盖组合星期、星期延续、多教室、坏时间段
pub fn sample_routine() -> Vec<Vec<&'static str>> {
    routine_rows(&[
        vec!["Sun & Tue", "CSE101 PA101", "", "EEE205 (PB202b)"],
        vec!["", "", "MAT110 pa 102", "", "PHY101 PC301 / PC302"],
        vec!["Mon", "", "", "", "", "", "ENG101 PD404"],
        vec!["Thu & SAT", "", "", "", "", "", "", "BIO201 PA210"],
        vec!["Wed", "Lab PB105", "", "Seminar Hall"],
    ])
}

/// tests/fixtures 下的固定文件路径
pub fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
