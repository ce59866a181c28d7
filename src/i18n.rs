// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use crate::config::config_manager::SUPPORTED_LOCALES;

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"en" 或 "zh-CN"），不支持的语言忽略
pub fn set_locale(locale: &str) {
    if SUPPORTED_LOCALES.contains(&locale) {
        rust_i18n::set_locale(locale);
    } else {
        tracing::warn!(locale = %locale, "不支持的语言，保持当前设置");
    }
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use roomable::i18n::t;
/// let msg = t("status.available");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use roomable::i18n::t_with_args;
/// let msg = t_with_args("load.default_missing", &[("file", "class_schedule.xlsx")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 为避免测试互相干扰，这里对 i18n 相关测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");

        set_locale("en");
        assert_eq!(current_locale(), "en");

        // 不支持的语言被忽略
        set_locale("fr");
        assert_eq!(current_locale(), "en");
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(t("status.available"), "Available");

        set_locale("zh-CN");
        assert_eq!(t("status.available"), "空闲");

        // 恢复默认语言
        set_locale("en");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        let msg = t_with_args(
            "report.summary",
            &[("count", "3"), ("time", "10:30 AM"), ("day", "Tue")],
        );
        assert_eq!(msg, "Found 3 available rooms at 10:30 AM on Tue");

        set_locale("zh-CN");
        let msg = t_with_args("error.header_not_found", &[("marker", "Day /Time")]);
        assert!(msg.contains("Day /Time"));
        assert!(msg.contains("表头"));

        // 恢复默认语言
        set_locale("en");
    }
}
