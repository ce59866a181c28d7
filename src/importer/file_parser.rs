// ==========================================
// 空闲教室查询 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析（无表头，原样保留每个单元格）
// 支持: Excel (.xlsx/.xls/.xlsm/.ods) / CSV (.csv)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::grid::ScheduleGrid;
use crate::importer::schedule_importer_trait::FileParser;
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

const EXCEL_EXTENSIONS: [&str; 4] = ["xlsx", "xls", "xlsm", "ods"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_grid(&self, file_path: &Path) -> ImportResult<ScheduleGrid> {
        let path = file_path;

        // 检查文件存在
        ensure_exists(path)?;

        // 检查扩展名
        let ext = extension_of(path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 打开 CSV 文件（表头行不固定在第一行，按普通数据行读取）
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(rows = rows.len(), "CSV 读取完成");
        Ok(ScheduleGrid::new(rows))
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_grid(&self, file_path: &Path) -> ImportResult<ScheduleGrid> {
        let path = file_path;

        // 检查文件存在
        ensure_exists(path)?;

        // 检查扩展名
        let ext = extension_of(path);
        if !EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 打开工作簿（按扩展名自动识别格式）
        let mut workbook = open_workbook_auto(path)?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        // Range 从第一个非空单元格开始，补齐左侧空列，保证第 0 列仍是星期列
        let leading_cols = range.start().map(|(_, col)| col as usize).unwrap_or(0);

        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|data_row| {
                std::iter::repeat(String::new())
                    .take(leading_cols)
                    .chain(data_row.iter().map(|cell| cell.to_string()))
                    .collect()
            })
            .collect();

        debug!(sheet = %sheet_name, rows = rows.len(), leading_cols, "Excel 读取完成");
        Ok(ScheduleGrid::new(rows))
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_to_grid(&self, file_path: &Path) -> ImportResult<ScheduleGrid> {
        let ext = extension_of(file_path);

        match ext.as_str() {
            "csv" => CsvParser.parse_to_grid(file_path),
            e if EXCEL_EXTENSIONS.contains(&e) => ExcelParser.parse_to_grid(file_path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
