/// Backslash-escapes every character that has a meaning in patterns, so the
/// result matches `text` literally.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(
            ch,
            '\\' | '*' | '+' | '?' | '.' | '^' | '$' | '#' | '(' | ')' | '[' | '{' | '|'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
