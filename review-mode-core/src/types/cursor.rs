//! 导航层级与游标

use serde::{Deserialize, Serialize};

/// 导航层级
///
/// 顺序即深度：`Screens` 最浅，`SectionItems` 最深。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum NavigationLevel {
    #[default]
    Screens,
    Items,
    Sections,
    SectionItems,
}

impl NavigationLevel {
    /// 层级名称（用于日志与界面显示）
    pub fn name(self) -> &'static str {
        match self {
            NavigationLevel::Screens => "Screens",
            NavigationLevel::Items => "Items",
            NavigationLevel::Sections => "Sections",
            NavigationLevel::SectionItems => "Section items",
        }
    }
}

impl std::fmt::Display for NavigationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 游标快照
///
/// 只读副本，供宿主显示或测试断言；修改游标只能通过 `Navigator` 的操作。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cursor {
    pub level: NavigationLevel,
    pub screen: usize,
    pub item: usize,
    pub section: usize,
    pub section_item: usize,
    /// 二级钻取的嵌套深度（0 表示未嵌套）
    pub nesting_depth: usize,
}
