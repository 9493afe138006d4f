//! 宣告樣式庫：模組標頭、參數與輸入/輸出埠的文字規則。
//!
//! `regex` 不支援 lookbehind，因此關鍵字前一個字元的限制由 [`Rule::find_all`]
//! 逐一檢查；被拒絕的候選會從其起點後一個位元組重新搜尋，避免漏掉重疊的合法匹配。

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// 單一方括號範圍，或 `$${NAME}` / `$[NAME]` 樣板佔位符
const DIMENSION: &str = r"(\[[`a-zA-Z0-9_\-+:*/ ]+\]|\$\$\{[a-zA-Z_]+\}|\$\[[a-zA-Z_]+\])";

const MODULE_NAME: &str = r"module\s+(?:\$\[PREFIX\])?([a-zA-Z_0-9]+)\s*#?\s*\(";

const PARAMETER: &str = r"parameter\s*(?:\[[`a-zA-Z0-9_\-+:*/ ]+\]\s*){0,2}\s*([a-zA-Z_0-9]+)\s*=";

lazy_static! {
    pub static ref MODULE_NAME_RULE: Rule = Rule::new("module-name", MODULE_NAME);
    pub static ref PARAMETER_RULE: Rule = Rule::new("parameter", PARAMETER);
    pub static ref INPUT_RULE: Rule = Rule::new("input", &port_pattern("input"));
    pub static ref OUTPUT_RULE: Rule = Rule::new("output", &port_pattern("output"));
}

/// 埠規則的擷取群組: 1 = storage class, 2/3 = dimension, 4 = name
fn port_pattern(keyword: &str) -> String {
    let mut pattern = String::from(keyword);
    pattern.push_str(r"\s+(wire\b|reg\b)?\s*");
    pattern.push_str(DIMENSION);
    pattern.push_str(r"?\s*");
    pattern.push_str(DIMENSION);
    pattern.push_str(r"?\s*([a-zA-Z_0-9$\{\}]+)\s*,?");
    pattern
}

/// 關鍵字前一個字元不可為識別字元或註解符號 `/`
pub fn has_keyword_boundary(text: &str, keyword_start: usize) -> bool {
    match text[..keyword_start].chars().next_back() {
        None => true,
        Some(c) => !(c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '/'),
    }
}

#[derive(Debug)]
pub struct Rule {
    name: &'static str,
    regex: Regex,
}

impl Rule {
    fn new(name: &'static str, pattern: &str) -> Self {
        // 樣式皆為編譯期常數，由 tests::test_rules_compile 保證可編譯
        let regex = Regex::new(pattern).unwrap();
        Self { name, regex }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 依出現順序回傳所有通過邊界檢查、互不重疊的匹配
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<Captures<'t>> {
        let mut found = Vec::new();
        let mut start = 0;

        while start <= text.len() {
            let Some(caps) = self.regex.captures_at(text, start) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            if has_keyword_boundary(text, whole.start()) {
                start = whole.end().max(whole.start() + 1);
                found.push(caps);
            } else {
                tracing::trace!(
                    "{} rule: rejected candidate at byte {} (no keyword boundary)",
                    self.name,
                    whole.start()
                );
                // 所有關鍵字皆為 ASCII，+1 仍落在字元邊界上
                start = whole.start() + 1;
            }
        }

        found
    }
}
