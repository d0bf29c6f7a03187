//! 首字母跳转

/// 从 `current` 之后开始向前查找第一个以 `letter` 开头的标签，到末尾后从头继续。
///
/// 大小写不敏感，忽略标签前导空白。当前项只在其他项都不匹配时才会被返回。
/// 列表为空或无匹配时返回 `None`。
pub fn find_next_by_letter<S: AsRef<str>>(labels: &[S], current: usize, letter: char) -> Option<usize> {
    let count = labels.len();
    if count == 0 {
        return None;
    }

    (1..=count)
        .map(|offset| (current + offset) % count)
        .find(|&i| starts_with_letter(labels[i].as_ref(), letter))
}

/// 标签是否以该字母开头（大小写不敏感）
pub fn starts_with_letter(label: &str, letter: char) -> bool {
    label
        .trim_start()
        .chars()
        .next()
        .is_some_and(|first| first.to_lowercase().eq(letter.to_lowercase()))
}
