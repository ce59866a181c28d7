// ==========================================
// 空闲教室查询 - 报告文本渲染
// ==========================================
// 职责: 将报告渲染为命令行文本（按楼栋分组，带序号/教室/楼层/状态）
// ==========================================

use crate::domain::{AvailabilityReport, BuildingSummary, RoomAvailability};
use crate::i18n::{t, t_with_args};
use std::fmt::Write;

/// 查询时间的展示格式（12 小时制，去掉前导零）
pub fn display_time(report: &AvailabilityReport) -> String {
    let formatted = report.time.format("%I:%M %p").to_string();
    formatted.trim_start_matches('0').to_string()
}

fn render_row(out: &mut String, idx: usize, row: &RoomAvailability) {
    let _ = writeln!(
        out,
        "{:<4} {:<9} {:<6} {}",
        idx + 1,
        row.room.as_str(),
        row.floor,
        t(row.status.i18n_key())
    );
}

/// 渲染可用性报告
pub fn render_report(report: &AvailabilityReport) -> String {
    let mut out = String::new();

    for (building, rooms) in &report.buildings {
        let _ = writeln!(
            out,
            "{}",
            t_with_args("report.building", &[("building", building.code())])
        );
        if rooms.is_empty() {
            let _ = writeln!(out, "{}", t("report.empty_building"));
        } else {
            let _ = writeln!(out, "{}", t("report.columns"));
            for (idx, row) in rooms.iter().enumerate() {
                render_row(&mut out, idx, row);
            }
        }
        out.push('\n');
    }

    let time = display_time(report);
    let day = report.day.as_str();
    let count = report.total_available.to_string();
    let summary = if report.total_available == 0 {
        t_with_args("report.none_available", &[("time", &time), ("day", day)])
    } else {
        t_with_args(
            "report.summary",
            &[("count", &count), ("time", &time), ("day", day)],
        )
    };
    out.push_str(&summary);
    out.push('\n');
    out
}

/// 渲染索引统计（每楼栋教室数 / 条目数）
pub fn render_summary(summary: &[BuildingSummary]) -> String {
    let mut out = String::new();
    let mut total_rooms = 0;
    let mut total_entries = 0;

    for item in summary {
        total_rooms += item.room_count;
        total_entries += item.entry_count;
        let rooms = item.room_count.to_string();
        let entries = item.entry_count.to_string();
        let _ = writeln!(
            out,
            "{}",
            t_with_args(
                "rooms.summary",
                &[
                    ("building", item.building.code()),
                    ("rooms", &rooms),
                    ("entries", &entries),
                ],
            )
        );
    }

    let rooms = total_rooms.to_string();
    let entries = total_entries.to_string();
    let _ = writeln!(
        out,
        "{}",
        t_with_args("rooms.total", &[("rooms", &rooms), ("entries", &entries)])
    );
    out
}
