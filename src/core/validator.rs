/// 名稱驗證：只允許 ASCII 字母、數字與空白，且不可為空。
///
/// 等同 `^[a-zA-Z0-9 ]+$`。去除前後空白是呼叫端的責任。
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ')
}
