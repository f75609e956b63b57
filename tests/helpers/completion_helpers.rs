//! Completion helpers: `$0` marks the cursor in request sources.

use slim_enum::base::LineCol;
use slim_enum::ide::{AnalysisHost, CompletionConfig, CompletionItem};

use super::source_fixtures::ALL_GROUPS;

pub const CURSOR: &str = "$0";

/// Split `source` at the cursor marker into text and line/column.
pub fn cursor_position(source: &str) -> (String, LineCol) {
    let offset = source.find(CURSOR).expect("source has no $0 cursor");
    let before = &source[..offset];
    let line = before.matches('\n').count() as u32;
    let col = before.rfind('\n').map_or(offset, |nl| offset - nl - 1) as u32;
    (source.replacen(CURSOR, "", 1), LineCol::new(line, col))
}

/// Complete at `$0` in `source`, loaded next to every fixture group.
pub fn complete(source: &str) -> Vec<CompletionItem> {
    complete_with(source, CompletionConfig::default())
}

pub fn complete_with(source: &str, config: CompletionConfig) -> Vec<CompletionItem> {
    let (text, position) = cursor_position(source);
    let mut host = AnalysisHost::new();
    for (path, content) in ALL_GROUPS {
        host.set_file_content(path, content);
    }
    host.set_file_content("Request.java", &text);
    host.set_config(config);
    host.analysis()
        .const_completions("Request.java", position)
        .expect("request file is loaded")
}

pub fn labels(items: &[CompletionItem]) -> Vec<&str> {
    items.iter().map(|i| i.label.as_ref()).collect()
}
