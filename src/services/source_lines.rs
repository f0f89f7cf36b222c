//! 文本转 `source` 行序列

/// 除 CR/LF 外也视为换行的字符（VT、FF、FS、GS、RS、NEL、LS、PS）
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// 将文本转换为笔记本 `source` 字段所需的行序列
///
/// - CRLF 和单独的 CR 统一为 LF
/// - 在每个换行字符之后断行，换行字符留在行尾
/// - 最后一行不以 `\n` 结尾时补上 `\n`
/// - 空文本返回 `["\n"]`，结果永不为空
pub fn to_source_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<String> = normalized
        .split_inclusive(is_line_boundary)
        .map(str::to_string)
        .collect();

    match lines.last_mut() {
        None => lines.push("\n".to_string()),
        Some(last) if !last.ends_with('\n') => last.push('\n'),
        Some(_) => {}
    }

    lines
}
