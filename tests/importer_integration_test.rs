// ==========================================
// 空闲教室查询 - 课表导入集成测试
// ==========================================
// 测试目标: 文件 → 网格 → 课表索引 全流程
// ==========================================

mod test_helpers;

use roomable::domain::{Building, DayCode, RoomId};
use roomable::importer::{
    ExcelParser, FileParser, GridIngestor, ImportError, ScheduleImporter, ScheduleImporterImpl,
    UniversalFileParser,
};
use roomable::logging;
use std::path::Path;

fn room(code: &str) -> RoomId {
    RoomId::parse(code).expect("测试教室标识无效")
}

#[test]
fn test_import_sample_routine_from_csv() {
    logging::init_test();

    let file = test_helpers::create_csv_schedule(&test_helpers::sample_routine())
        .expect("创建测试课表失败");
    let importer = ScheduleImporterImpl::default();
    let index = importer.import_file(file.path()).expect("导入失败");

    let rooms: Vec<&str> = index.rooms().iter().map(|r| r.as_str()).collect();
    assert_eq!(rooms.len(), 8);
    for code in [
        "PA101", "PA102", "PA210", "PB105", "PB202B", "PC301", "PC302", "PD404",
    ] {
        assert!(rooms.contains(&code), "缺少教室 {}", code);
    }
    assert_eq!(index.entries().len(), 14);

    // 每个条目的教室都在教室集合内
    for entry in index.entries() {
        assert!(index.rooms().contains(&entry.room));
    }
}

#[test]
fn test_combined_days_and_carry_forward() {
    let file = test_helpers::create_csv_schedule(&test_helpers::sample_routine())
        .expect("创建测试课表失败");
    let index = ScheduleImporterImpl::default()
        .import_file(file.path())
        .expect("导入失败");

    // "Sun & Tue" 之后的空白行沿用 Sun/Tue
    let pa102_days: Vec<DayCode> = index
        .entries()
        .iter()
        .filter(|e| e.room == room("PA102"))
        .map(|e| e.day)
        .collect();
    assert_eq!(pa102_days, vec![DayCode::Sun, DayCode::Tue]);

    // "Thu & SAT" 大小写不敏感
    let pa210_days: Vec<DayCode> = index
        .entries()
        .iter()
        .filter(|e| e.room == room("PA210"))
        .map(|e| e.day)
        .collect();
    assert_eq!(pa210_days, vec![DayCode::Thu, DayCode::Sat]);
}

#[test]
fn test_slot_is_stored_raw() {
    let file = test_helpers::create_csv_schedule(&test_helpers::sample_routine())
        .expect("创建测试课表失败");
    let index = ScheduleImporterImpl::default()
        .import_file(file.path())
        .expect("导入失败");

    let entry = index
        .entries()
        .iter()
        .find(|e| e.room == room("PA210"))
        .expect("缺少 PA210 条目");
    assert_eq!(entry.slot, "5:00 PM-6 : 20 PM");
}

#[test]
fn test_missing_header_yields_no_index() {
    let rows = vec![vec!["Tue", "PA101"], vec!["Wed", "PB202"]];
    let file = test_helpers::create_csv_schedule(&rows).expect("创建测试课表失败");

    let result = ScheduleImporterImpl::default().import_file(file.path());
    match result {
        Err(ImportError::HeaderNotFound { marker }) => assert_eq!(marker, "Day /Time"),
        other => panic!("期望 HeaderNotFound，实际: {:?}", other.map(|i| i.entries().len())),
    }
}

#[test]
fn test_custom_header_marker() {
    let rows = vec![
        vec!["Slot / Day", "10:00-11:00"],
        vec!["Fri", "PD1"],
    ];
    let file = test_helpers::create_csv_schedule(&rows).expect("创建测试课表失败");

    let importer = ScheduleImporterImpl::new(
        Box::new(UniversalFileParser),
        GridIngestor::new("Slot / Day", 7),
    );
    let index = importer.import_file(file.path()).expect("导入失败");
    assert_eq!(index.rooms_in(Building::PD).count(), 1);
}

#[test]
fn test_missing_file_and_unsupported_format() {
    let importer = ScheduleImporterImpl::default();

    let result = importer.import_file(Path::new("no_such_schedule.csv"));
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));

    let result = importer.import_file(Path::new("schedule.pdf"));
    assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
}

#[test]
fn test_import_grid_matches_file_import() {
    let rows = test_helpers::sample_routine();
    let file = test_helpers::create_csv_schedule(&rows).expect("创建测试课表失败");
    let importer = ScheduleImporterImpl::default();

    let from_file = importer.import_file(file.path()).expect("导入失败");
    let from_grid = importer
        .import_grid(&test_helpers::grid(&rows), None)
        .expect("导入失败");

    assert_eq!(from_file.entries(), from_grid.entries());
    assert_eq!(from_file.rooms(), from_grid.rooms());
}

// ==========================================
// Excel 工作簿
// ==========================================

#[test]
fn test_excel_offset_sheet_keeps_column_positions() {
    // 使用区域从 B1 开始: 左侧补空列后第 0 列仍对应 A 列
    let grid = ExcelParser
        .parse_to_grid(&test_helpers::fixture("offset_schedule.xlsx"))
        .expect("读取 Excel 失败");

    assert_eq!(grid.row_count(), 3);
    for row in 0..grid.row_count() {
        assert!(grid.is_blank(row, 0), "第 {} 行第 0 列应为空", row);
    }
    assert_eq!(grid.cell(0, 1), "Class Routine");
    assert_eq!(grid.cell(1, 1), "Day /Time");
    assert_eq!(grid.cell(1, 2), "10:00 AM-11:00 AM");
    assert_eq!(grid.cell(2, 1), "Tue");
    assert_eq!(grid.cell(2, 2), "PA101");

    // 表头标记不在第 0 列，默认摄取找不到表头
    let result = GridIngestor::default().ingest(&grid, None);
    assert!(matches!(result, Err(ImportError::HeaderNotFound { .. })));
}

#[test]
fn test_import_excel_workbook() {
    let path = test_helpers::fixture("class_schedule.xlsx");
    let index = ScheduleImporterImpl::default()
        .import_file(&path)
        .expect("导入失败");

    let rooms: Vec<&str> = index.rooms().iter().map(|r| r.as_str()).collect();
    assert_eq!(rooms, vec!["PA101", "PB202", "PC301", "PD404"]);
    assert_eq!(index.entries().len(), 7);
    assert_eq!(index.source.as_deref(), Some(path.display().to_string().as_str()));

    // 空白星期单元格沿用 "Sun & Tue"
    let pc301_days: Vec<DayCode> = index
        .entries()
        .iter()
        .filter(|e| e.room == room("PC301"))
        .map(|e| e.day)
        .collect();
    assert_eq!(pc301_days, vec![DayCode::Sun, DayCode::Tue]);
}
