//! 四级导航状态机

use super::nesting::{NestingFrame, NestingStack};
use crate::error::NavResult;
use crate::letter::find_next_by_letter;
use crate::traits::{Screen, Section};
use crate::types::{ActionOutcome, Cursor, DrillOutcome, NavigationLevel};

/// 审阅导航器
///
/// 持有四级游标（屏幕、条目、分节、分节条目）与"当前条目的分节"缓存。
/// 所有操作都是全函数：空集合、过期索引都不会 panic，只会退化为无操作
/// 或描述性的"没有条目"文本。
pub struct Navigator {
    screens: Vec<Box<dyn Screen>>,
    level: NavigationLevel,
    screen_index: usize,
    item_index: usize,
    section_index: usize,
    section_item_index: usize,
    /// 当前条目（或嵌套目标）的分节；`None` 表示缓存已失效
    sections: Option<Vec<Box<dyn Section>>>,
    nesting: NestingStack,
    announce_hints: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// 创建空导航器（未注册屏幕时处于惰性状态）
    #[must_use]
    pub fn new() -> Self {
        Self {
            screens: Vec::new(),
            level: NavigationLevel::Screens,
            screen_index: 0,
            item_index: 0,
            section_index: 0,
            section_item_index: 0,
            sections: None,
            nesting: NestingStack::default(),
            announce_hints: true,
        }
    }

    /// 是否在分节条目朗读中附加操作提示
    pub fn set_announce_hints(&mut self, announce_hints: bool) {
        self.announce_hints = announce_hints;
    }

    // ========== 注册与重置 ==========

    /// 替换屏幕集合并重置游标
    pub fn register_screens(&mut self, screens: Vec<Box<dyn Screen>>) {
        self.deactivate_current();
        self.screens = screens;
        if self.screens.is_empty() {
            log::warn!("No screens registered, navigator is inert");
        } else {
            log::debug!("Registered {} screens", self.screens.len());
        }
        self.reset();
    }

    /// 回到 (0,0,0,0) / Screens，并激活第一个屏幕
    pub fn reset(&mut self) {
        self.level = NavigationLevel::Screens;
        self.screen_index = 0;
        self.item_index = 0;
        self.invalidate_sections();
        if let Some(screen) = self.screens.first_mut() {
            screen.on_activate();
        }
    }

    /// 通知当前屏幕失去焦点（退出审阅模式时调用）
    pub fn deactivate_current(&mut self) {
        if let Some(screen) = self.screens.get_mut(self.screen_index) {
            screen.on_deactivate();
        }
    }

    // ========== 状态查询 ==========

    pub fn level(&self) -> NavigationLevel {
        self.level
    }

    /// 游标快照
    pub fn cursor(&self) -> Cursor {
        Cursor {
            level: self.level,
            screen: self.screen_index,
            item: self.item_index,
            section: self.section_index,
            section_item: self.section_item_index,
            nesting_depth: self.nesting.depth(),
        }
    }

    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    pub fn item_count(&self) -> usize {
        self.current_screen().map_or(0, Screen::item_count)
    }

    pub fn section_count(&self) -> usize {
        self.sections.as_ref().map_or(0, Vec::len)
    }

    pub fn section_item_count(&self) -> usize {
        self.current_section().map_or(0, Section::item_count)
    }

    pub fn nesting_depth(&self) -> usize {
        self.nesting.depth()
    }

    /// 最内层嵌套的钻取标识
    pub fn nesting_target(&self) -> Option<&str> {
        self.nesting.top().map(|frame| frame.target.as_str())
    }

    pub fn current_screen(&self) -> Option<&dyn Screen> {
        self.screens.get(self.screen_index).map(Box::as_ref)
    }

    pub fn current_section(&self) -> Option<&dyn Section> {
        self.sections
            .as_ref()?
            .get(self.section_index)
            .map(Box::as_ref)
    }

    /// 当前位置的路径（屏幕名、条目摘要、嵌套目标、分节名）
    pub fn breadcrumb(&self) -> Vec<String> {
        let mut path = Vec::new();
        let Some(screen) = self.current_screen() else {
            return path;
        };
        path.push(screen.name().to_string());
        if self.level >= NavigationLevel::Sections && self.item_index < screen.item_count() {
            path.push(screen.item_summary(self.item_index));
        }
        path.extend(self.nesting.targets().map(str::to_string));
        if self.level == NavigationLevel::SectionItems {
            if let Some(section) = self.current_section() {
                path.push(section.name().to_string());
            }
        }
        path
    }

    // ========== 移动 ==========

    /// 当前层下一项（循环）；当前层为空时返回 false
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        self.step(true)
    }

    /// 当前层上一项（循环）；当前层为空时返回 false
    pub fn previous(&mut self) -> bool {
        self.step(false)
    }

    fn step(&mut self, forward: bool) -> bool {
        if self.validate_cursor() {
            return false;
        }
        let count = self.level_count();
        if count == 0 {
            return false;
        }
        let target = wrap_index(self.level_index(), count, forward);
        self.move_to(target);
        true
    }

    /// 跳到当前层下一个以该字母开头的条目
    pub fn jump_to_letter(&mut self, letter: char) -> bool {
        if self.validate_cursor() {
            return false;
        }
        let labels = self.level_labels(true);
        let current = self.level_index();
        match find_next_by_letter(&labels, current, letter) {
            Some(index) if index != current => {
                self.move_to(index);
                true
            }
            Some(_) => true,
            None => false,
        }
    }

    /// 直接切换到指定屏幕；屏幕有条目时落在 Items 层，否则停在 Screens 层
    pub fn switch_to_screen(&mut self, index: usize) -> bool {
        if index >= self.screens.len() {
            return false;
        }
        self.switch_active_screen(index);
        self.level = if self.item_count() > 0 {
            NavigationLevel::Items
        } else {
            NavigationLevel::Screens
        };
        true
    }

    // ========== 层级转换 ==========

    /// 进入下一层，或在分节条目层执行动作
    pub fn drill_down(&mut self) -> bool {
        self.drill_down_outcome().is_success()
    }

    /// 与 [`Self::drill_down`] 相同，但返回具体结果（包含动作的返回值）
    pub fn drill_down_outcome(&mut self) -> DrillOutcome {
        if self.validate_cursor() {
            return DrillOutcome::Nothing;
        }
        match self.level {
            NavigationLevel::Screens => {
                if self.item_count() == 0 {
                    return DrillOutcome::Nothing;
                }
                self.level = NavigationLevel::Items;
                self.item_index = 0;
                self.invalidate_sections();
                DrillOutcome::Moved
            }
            NavigationLevel::Items => {
                let Some(screen) = self.current_screen() else {
                    return DrillOutcome::Nothing;
                };
                if !screen.can_drill_into_item(self.item_index) {
                    return DrillOutcome::Nothing;
                }
                let sections = screen.sections_for_item(self.item_index);
                if sections.is_empty() {
                    return DrillOutcome::Nothing;
                }
                self.sections = Some(sections);
                self.nesting.clear();
                self.section_index = 0;
                self.section_item_index = 0;
                self.level = NavigationLevel::Sections;
                DrillOutcome::Moved
            }
            NavigationLevel::Sections => {
                if self.section_item_count() == 0 {
                    return DrillOutcome::Nothing;
                }
                self.level = NavigationLevel::SectionItems;
                self.section_item_index = 0;
                DrillOutcome::Moved
            }
            NavigationLevel::SectionItems => self.drill_into_entry(),
        }
    }

    fn drill_into_entry(&mut self) -> DrillOutcome {
        let entry = self.section_item_index;
        let Some(section) = self.current_section() else {
            return DrillOutcome::Nothing;
        };
        let target = section.drill_target(entry);
        let can_activate = section.can_activate(entry);

        if let Some(target) = target {
            let nested = self
                .current_screen()
                .map(|s| s.sections_for_target(&target))
                .unwrap_or_default();
            if !nested.is_empty() {
                log::debug!("Drilling into {target} (depth {})", self.nesting.depth() + 1);
                let parent = self.sections.replace(nested).unwrap_or_default();
                self.nesting.push(NestingFrame {
                    sections: parent,
                    section_index: self.section_index,
                    section_item_index: entry,
                    target,
                });
                self.section_index = 0;
                self.section_item_index = 0;
                self.level = NavigationLevel::Sections;
                return DrillOutcome::Nested;
            }
        }

        if !can_activate {
            return DrillOutcome::Nothing;
        }
        let Some(result) = self.current_section().map(|s| s.activate(entry)) else {
            return DrillOutcome::Nothing;
        };
        // 动作可能改变了外部数据
        self.refresh_sections();
        match result {
            Ok(outcome) => DrillOutcome::Activated(outcome),
            Err(e) => {
                e.log("Entry activation");
                DrillOutcome::ActivationFailed(e)
            }
        }
    }

    /// 返回上一层；已在顶层，或游标刚被重新同步时返回 false
    pub fn back_out(&mut self) -> bool {
        if self.validate_cursor() {
            return false;
        }
        match self.level {
            NavigationLevel::Screens => false,
            NavigationLevel::Items => {
                self.level = NavigationLevel::Screens;
                self.invalidate_sections();
                true
            }
            NavigationLevel::Sections => {
                if let Some(frame) = self.nesting.pop() {
                    self.sections = Some(frame.sections);
                    self.section_index = frame.section_index;
                    self.section_item_index = frame.section_item_index;
                    self.level = NavigationLevel::SectionItems;
                    self.refresh_sections();
                } else {
                    self.level = NavigationLevel::Items;
                    self.sections = None;
                    self.section_index = 0;
                    self.section_item_index = 0;
                }
                true
            }
            NavigationLevel::SectionItems => {
                self.level = NavigationLevel::Sections;
                self.section_item_index = 0;
                true
            }
        }
    }

    /// 从屏幕重新读取当前条目（或嵌套目标）的分节
    ///
    /// 列表变空时降级：嵌套中则回到父级条目，否则回到 Items 层；
    /// 超出新范围的索引归零。
    pub fn refresh_sections(&mut self) {
        self.validate_cursor();
        if self.level < NavigationLevel::Sections {
            self.invalidate_sections();
            return;
        }

        let fresh = match (self.current_screen(), self.nesting.top()) {
            (Some(screen), Some(frame)) => screen.sections_for_target(&frame.target),
            (Some(screen), None) => screen.sections_for_item(self.item_index),
            (None, _) => Vec::new(),
        };

        if fresh.is_empty() {
            if let Some(frame) = self.nesting.pop() {
                log::debug!("Sections of {} vanished, returning to parent", frame.target);
                self.sections = Some(frame.sections);
                self.section_index = frame.section_index;
                self.section_item_index = frame.section_item_index;
                self.level = NavigationLevel::SectionItems;
                self.refresh_sections();
                return;
            }
            log::debug!("Sections vanished, back to Items");
            self.level = NavigationLevel::Items;
            self.sections = None;
            self.section_index = 0;
            self.section_item_index = 0;
            return;
        }

        self.sections = Some(fresh);
        self.clamp_section_indices();
    }

    /// 触发当前分节条目的提示信息；不可用时返回 None
    pub fn show_tooltip(&self) -> Option<NavResult<ActionOutcome>> {
        if self.level != NavigationLevel::SectionItems {
            return None;
        }
        let section = self.current_section()?;
        if !section.has_tooltip(self.section_item_index) {
            return None;
        }
        Some(section.show_tooltip(self.section_item_index))
    }

    // ========== 朗读文本 ==========

    /// "位置 of 总数: 内容" 形式的一行朗读
    pub fn current_announcement(&self) -> String {
        match self.level {
            NavigationLevel::Screens => match self.current_screen() {
                Some(screen) => {
                    let content = format!(
                        "{}, {}",
                        screen.name(),
                        plural(screen.item_count(), "item", "items")
                    );
                    position(self.screen_index, self.screens.len(), &content)
                }
                None => self.empty_level_text(),
            },
            NavigationLevel::Items => match self.current_screen() {
                Some(screen) if self.item_index < screen.item_count() => position(
                    self.item_index,
                    screen.item_count(),
                    &screen.item_summary(self.item_index),
                ),
                _ => self.empty_level_text(),
            },
            NavigationLevel::Sections => match self.current_section() {
                Some(section) => {
                    let content = format!(
                        "{}, {}",
                        section.name(),
                        plural(section.item_count(), "entry", "entries")
                    );
                    position(self.section_index, self.section_count(), &content)
                }
                None => self.empty_level_text(),
            },
            NavigationLevel::SectionItems => match self.current_section() {
                Some(section) if self.section_item_index < section.item_count() => {
                    let index = self.section_item_index;
                    let mut text = position(index, section.item_count(), &section.read_item(index));
                    if self.announce_hints {
                        text.push_str(self.entry_hint(section, index));
                    }
                    text
                }
                _ => self.empty_level_text(),
            },
        }
    }

    /// 当前位置的详细朗读
    pub fn current_detail(&self) -> String {
        match self.level {
            NavigationLevel::Screens => self
                .current_screen()
                .map_or_else(|| self.empty_level_text(), Screen::description),
            NavigationLevel::Items => match self.current_screen() {
                Some(screen) if self.item_index < screen.item_count() => {
                    screen.item_detail(self.item_index)
                }
                _ => self.empty_level_text(),
            },
            NavigationLevel::Sections => self
                .current_section()
                .map_or_else(|| self.empty_level_text(), Section::full_summary),
            NavigationLevel::SectionItems => match self.current_section() {
                Some(section) if self.section_item_index < section.item_count() => {
                    section.read_item_detail(self.section_item_index)
                }
                _ => self.empty_level_text(),
            },
        }
    }

    /// 当前层所有条目，当前项带 "(current)" 标记
    pub fn level_entries(&self) -> Vec<String> {
        let current = self.level_index();
        mark_current(self.level_labels(false), current)
    }

    /// 朗读当前层全部条目
    pub fn list_current_level(&self, separator: &str) -> String {
        let entries = self.level_entries();
        if entries.is_empty() {
            return self.empty_level_text();
        }
        let noun = match self.level {
            NavigationLevel::Screens => plural(entries.len(), "screen", "screens"),
            NavigationLevel::Items => plural(entries.len(), "item", "items"),
            NavigationLevel::Sections => plural(entries.len(), "section", "sections"),
            NavigationLevel::SectionItems => plural(entries.len(), "entry", "entries"),
        };
        format!("{noun}: {}", entries.join(separator))
    }

    /// 朗读全部屏幕（与当前层无关）
    pub fn list_screens(&self, separator: &str) -> String {
        if self.screens.is_empty() {
            return "No screens available".to_string();
        }
        let names = self.screens.iter().map(|s| s.name().to_string()).collect();
        let entries = mark_current(names, self.screen_index);
        format!(
            "{}: {}",
            plural(entries.len(), "screen", "screens"),
            entries.join(separator)
        )
    }

    // ========== 内部辅助 ==========

    fn level_count(&self) -> usize {
        match self.level {
            NavigationLevel::Screens => self.screen_count(),
            NavigationLevel::Items => self.item_count(),
            NavigationLevel::Sections => self.section_count(),
            NavigationLevel::SectionItems => self.section_item_count(),
        }
    }

    fn level_index(&self) -> usize {
        match self.level {
            NavigationLevel::Screens => self.screen_index,
            NavigationLevel::Items => self.item_index,
            NavigationLevel::Sections => self.section_index,
            NavigationLevel::SectionItems => self.section_item_index,
        }
    }

    /// `for_jump` 为 true 时分节条目使用短标签（首字母跳转用）
    fn level_labels(&self, for_jump: bool) -> Vec<String> {
        match self.level {
            NavigationLevel::Screens => self.screens.iter().map(|s| s.name().to_string()).collect(),
            NavigationLevel::Items => self
                .current_screen()
                .map(|s| (0..s.item_count()).map(|i| s.item_summary(i)).collect())
                .unwrap_or_default(),
            NavigationLevel::Sections => self
                .sections
                .as_ref()
                .map(|list| list.iter().map(|s| s.name().to_string()).collect())
                .unwrap_or_default(),
            NavigationLevel::SectionItems => self
                .current_section()
                .map(|s| {
                    (0..s.item_count())
                        .map(|i| if for_jump { s.item_label(i) } else { s.read_item(i) })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// 将当前层索引设为 `index`（调用方保证在范围内）
    fn move_to(&mut self, index: usize) {
        match self.level {
            NavigationLevel::Screens => self.switch_active_screen(index),
            NavigationLevel::Items => {
                self.item_index = index;
                self.invalidate_sections();
            }
            NavigationLevel::Sections => {
                self.section_index = index;
                self.section_item_index = 0;
            }
            NavigationLevel::SectionItems => self.section_item_index = index,
        }
        log::debug!("{} -> {}", self.level, index);
    }

    fn switch_active_screen(&mut self, index: usize) {
        self.deactivate_current();
        self.screen_index = index;
        self.item_index = 0;
        self.invalidate_sections();
        if let Some(screen) = self.screens.get_mut(index) {
            screen.on_activate();
        }
    }

    fn invalidate_sections(&mut self) {
        self.sections = None;
        self.nesting.clear();
        self.section_index = 0;
        self.section_item_index = 0;
    }

    fn clamp_section_indices(&mut self) {
        if self.section_index >= self.section_count() {
            self.section_index = 0;
            self.section_item_index = 0;
        }
        if self.level == NavigationLevel::SectionItems {
            let entries = self.section_item_count();
            if entries == 0 {
                self.level = NavigationLevel::Sections;
                self.section_item_index = 0;
            } else if self.section_item_index >= entries {
                self.section_item_index = 0;
            }
        }
    }

    /// 把过期游标拉回合法范围；游标因此移动时返回 true
    ///
    /// 宿主在一次命令之前调用它，可以把"数据变了"与命令本身的结果分开朗读。
    pub fn resync(&mut self) -> bool {
        self.validate_cursor()
    }

    /// 外部数据可能在两次输入之间发生变化，每次操作前先把游标拉回合法范围。
    ///
    /// 返回 true 表示游标被移动过：调用方应就此停下，一次输入只做一次转换。
    fn validate_cursor(&mut self) -> bool {
        let before = self.cursor();
        self.clamp_cursor();
        let after = self.cursor();
        if after == before {
            return false;
        }
        log::debug!("Cursor re-synced: {before:?} -> {after:?}");
        true
    }

    fn clamp_cursor(&mut self) {
        if self.screens.is_empty() || self.screen_index >= self.screens.len() {
            self.level = NavigationLevel::Screens;
            self.screen_index = 0;
            self.item_index = 0;
            self.invalidate_sections();
            return;
        }
        if self.level == NavigationLevel::Screens {
            return;
        }

        let items = self.item_count();
        if items == 0 {
            log::debug!("Items vanished, back to Screens");
            self.level = NavigationLevel::Screens;
            self.item_index = 0;
            self.invalidate_sections();
            return;
        }
        if self.item_index >= items {
            log::debug!("Item index {} out of range ({items}), clamped", self.item_index);
            self.item_index = 0;
            self.level = NavigationLevel::Items;
            self.invalidate_sections();
            return;
        }
        if self.level == NavigationLevel::Items {
            return;
        }

        if self.section_count() == 0 {
            self.level = NavigationLevel::Items;
            self.invalidate_sections();
            return;
        }
        self.clamp_section_indices();
    }

    fn empty_level_text(&self) -> String {
        match self.level {
            NavigationLevel::Screens => "No screens available".to_string(),
            NavigationLevel::Items => match self.current_screen() {
                Some(screen) => format!("{}: no items", screen.name()),
                None => "No items".to_string(),
            },
            NavigationLevel::Sections => "No sections".to_string(),
            NavigationLevel::SectionItems => "No entries".to_string(),
        }
    }

    fn entry_hint(&self, section: &dyn Section, index: usize) -> &'static str {
        let drillable = section.drill_target(index).is_some_and(|target| {
            self.current_screen()
                .is_some_and(|s| !s.sections_for_target(&target).is_empty())
        });
        if drillable {
            " (Enter to open)"
        } else if section.can_activate(index) {
            " (Enter to activate)"
        } else {
            ""
        }
    }
}

fn wrap_index(index: usize, count: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % count
    } else if index == 0 || index >= count {
        count - 1
    } else {
        index - 1
    }
}

fn position(index: usize, count: usize, content: &str) -> String {
    format!("{} of {count}: {content}", index + 1)
}

/// "1 entry" / "3 entries"
pub(crate) fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {one}")
    } else {
        format!("{count} {many}")
    }
}

fn mark_current(labels: Vec<String>, current: usize) -> Vec<String> {
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            if i == current {
                format!("{label} (current)")
            } else {
                label
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{entry, item, screen, section, MockSection, SharedData};

    fn two_screens() -> Navigator {
        let (alpha, _) = screen(
            "Alpha",
            vec![
                item("Zeta", vec![section("Stats", &["Loyalty: 4", "Command: 7"])]),
                item("Yuri", vec![section("Stats", &["Loyalty: 9"]), section("Traits", &["Bold"])]),
            ],
        );
        let (beta, _) = screen("Beta", vec![]);
        let mut nav = Navigator::new();
        nav.register_screens(vec![Box::new(alpha), Box::new(beta)]);
        nav
    }

    #[test]
    fn empty_navigator_is_inert() {
        let mut nav = Navigator::new();
        nav.register_screens(Vec::new());

        assert!(!nav.next());
        assert!(!nav.previous());
        assert!(!nav.drill_down());
        assert!(!nav.back_out());
        assert_eq!(nav.cursor(), Cursor::default());
        assert_eq!(nav.current_announcement(), "No screens available");
        assert_eq!(nav.list_current_level(", "), "No screens available");
    }

    #[test]
    fn screens_announce_position_and_item_count() {
        let nav = two_screens();
        assert_eq!(nav.current_announcement(), "1 of 2: Alpha, 2 items");
    }

    #[test]
    fn screen_change_fires_lifecycle_hooks() {
        let (alpha, alpha_data) = screen("Alpha", vec![item("Zeta", vec![])]);
        let (beta, beta_data) = screen("Beta", vec![]);
        let mut nav = Navigator::new();
        nav.register_screens(vec![Box::new(alpha), Box::new(beta)]);
        assert_eq!(alpha_data.borrow().lifecycle, vec!["activate"]);

        assert!(nav.next());
        assert_eq!(alpha_data.borrow().lifecycle, vec!["activate", "deactivate"]);
        assert_eq!(beta_data.borrow().lifecycle, vec!["activate"]);

        assert!(nav.previous());
        assert_eq!(beta_data.borrow().lifecycle, vec!["activate", "deactivate"]);
        assert_eq!(nav.cursor().screen, 0);
    }

    #[test]
    fn item_index_survives_sections_round_trip() {
        let mut nav = two_screens();
        assert!(nav.drill_down());
        assert!(nav.next());
        assert!(nav.drill_down());
        assert_eq!(nav.level(), NavigationLevel::Sections);
        assert!(nav.next());
        assert_eq!(nav.cursor().section, 1);

        assert!(nav.back_out());
        assert_eq!(nav.level(), NavigationLevel::Items);
        assert_eq!(nav.cursor().item, 1);
        assert_eq!(nav.cursor().section, 0);
    }

    #[test]
    fn section_item_index_resets_on_back_out() {
        let mut nav = two_screens();
        nav.drill_down();
        nav.drill_down();
        nav.drill_down();
        assert_eq!(nav.level(), NavigationLevel::SectionItems);
        nav.next();
        assert_eq!(nav.cursor().section_item, 1);

        assert!(nav.back_out());
        assert_eq!(nav.level(), NavigationLevel::Sections);
        assert_eq!(nav.cursor().section_item, 0);
    }

    #[test]
    fn section_items_wrap_both_ways() {
        let mut nav = two_screens();
        nav.drill_down();
        nav.drill_down();
        nav.drill_down();
        assert!(nav.previous());
        assert_eq!(nav.cursor().section_item, 1);
        assert!(nav.next());
        assert_eq!(nav.cursor().section_item, 0);
    }

    #[test]
    fn item_without_sections_cannot_be_entered() {
        let (alpha, _) = screen("Alpha", vec![item("Empty", vec![])]);
        let mut nav = Navigator::new();
        nav.register_screens(vec![Box::new(alpha)]);
        nav.drill_down();

        assert!(matches!(nav.drill_down_outcome(), DrillOutcome::Nothing));
        assert_eq!(nav.level(), NavigationLevel::Items);
    }

    #[test]
    fn activation_runs_action_and_stays_in_place() {
        let (alpha, data) = screen(
            "Alpha",
            vec![item(
                "Zeta",
                vec![MockSection::new("Orders")
                    .with_entry(entry("Hold"))
                    .with_entry(entry("Recall").actionable())],
            )],
        );
        let mut nav = Navigator::new();
        nav.register_screens(vec![Box::new(alpha)]);
        nav.drill_down();
        nav.drill_down();
        nav.drill_down();
        nav.next();
        assert_eq!(nav.current_announcement(), "2 of 2: Recall (Enter to activate)");

        assert!(matches!(nav.drill_down_outcome(), DrillOutcome::Activated(ActionOutcome::Done)));
        assert_eq!(data.borrow().activations, vec!["Recall"]);
        assert_eq!(nav.level(), NavigationLevel::SectionItems);
        assert_eq!(nav.cursor().section_item, 1);

        nav.previous();
        assert!(!nav.drill_down());
        assert_eq!(data.borrow().activations.len(), 1);
    }

    #[test]
    fn failing_action_is_reported() {
        let (alpha, _) = screen(
            "Alpha",
            vec![item("Zeta", vec![MockSection::new("Orders").with_entry(entry("Launch").failing())])],
        );
        let mut nav = Navigator::new();
        nav.register_screens(vec![Box::new(alpha)]);
        nav.drill_down();
        nav.drill_down();
        nav.drill_down();

        let outcome = nav.drill_down_outcome();
        assert!(matches!(outcome, DrillOutcome::ActivationFailed(_)));
        assert!(!outcome.is_success());
        assert_eq!(nav.level(), NavigationLevel::SectionItems);
    }

    #[test]
    fn nested_drill_round_trip() {
        let (research, data) = screen(
            "Research",
            vec![item(
                "Fusion",
                vec![
                    section("Summary", &["Cost: 400"]),
                    MockSection::new("Prerequisites")
                        .with_entry(entry("Plasma Physics").target("plasma"))
                        .with_entry(entry("Materials").target("materials")),
                ],
            )],
        );
        data.borrow_mut().targets.insert(
            "materials".to_string(),
            vec![section("Summary", &["Cost: 100"]), section("Unlocks", &["Fusion"])],
        );
        let mut nav = Navigator::new();
        nav.register_screens(vec![Box::new(research)]);
        nav.drill_down();
        nav.drill_down();
        nav.next();
        nav.drill_down();
        nav.next();
        assert_eq!(nav.current_announcement(), "2 of 2: Materials (Enter to open)");

        assert!(matches!(nav.drill_down_outcome(), DrillOutcome::Nested));
        assert_eq!(nav.level(), NavigationLevel::Sections);
        assert_eq!(nav.nesting_depth(), 1);
        assert_eq!(nav.section_count(), 2);
        assert_eq!(nav.breadcrumb(), vec!["Research", "Fusion", "materials"]);

        nav.next();
        assert!(nav.back_out());
        assert_eq!(nav.level(), NavigationLevel::SectionItems);
        assert_eq!(nav.nesting_depth(), 0);
        assert_eq!(nav.cursor().section, 1);
        assert_eq!(nav.cursor().section_item, 1);
        assert_eq!(nav.current_announcement(), "2 of 2: Materials (Enter to open)");
    }

    #[test]
    fn unresolvable_target_is_not_drillable() {
        let (research, _) = screen(
            "Research",
            vec![item(
                "Fusion",
                vec![MockSection::new("Prerequisites").with_entry(entry("Plasma Physics").target("plasma"))],
            )],
        );
        let mut nav = Navigator::new();
        nav.register_screens(vec![Box::new(research)]);
        nav.drill_down();
        nav.drill_down();
        nav.drill_down();

        assert_eq!(nav.current_announcement(), "1 of 1: Plasma Physics");
        assert!(!nav.drill_down());
        assert_eq!(nav.nesting_depth(), 0);
    }

    #[test]
    fn refresh_demotes_when_sections_vanish() {
        let (alpha, data) = screen("Alpha", vec![item("Zeta", vec![section("Stats", &["Loyalty: 4", "Command: 7"])])]);
        let mut nav = Navigator::new();
        nav.register_screens(vec![Box::new(alpha)]);
        nav.drill_down();
        nav.drill_down();
        nav.drill_down();
        nav.next();

        data.borrow_mut().items[0].sections.clear();
        nav.refresh_sections();

        assert_eq!(nav.level(), NavigationLevel::Items);
        assert_eq!(nav.cursor().section, 0);
        assert_eq!(nav.cursor().section_item, 0);
    }

    #[test]
    fn refresh_clamps_shrunken_section() {
        let (alpha, data) = screen("Alpha", vec![item("Zeta", vec![section("Ships", &["Alpha", "Beta", "Gamma"])])]);
        let mut nav = Navigator::new();
        nav.register_screens(vec![Box::new(alpha)]);
        nav.drill_down();
        nav.drill_down();
        nav.drill_down();
        nav.previous();
        assert_eq!(nav.cursor().section_item, 2);

        data.borrow_mut().items[0].sections[0] = section("Ships", &["Alpha"]);
        nav.refresh_sections();

        assert_eq!(nav.level(), NavigationLevel::SectionItems);
        assert_eq!(nav.cursor().section_item, 0);
        assert_eq!(nav.current_announcement(), "1 of 1: Alpha");
    }

    #[test]
    fn refresh_inside_nesting_returns_to_parent_when_target_vanishes() {
        let (research, data) = screen(
            "Research",
            vec![item(
                "Fusion",
                vec![MockSection::new("Prerequisites").with_entry(entry("Materials").target("materials"))],
            )],
        );
        data.borrow_mut()
            .targets
            .insert("materials".to_string(), vec![section("Summary", &["Cost: 100"])]);
        let mut nav = Navigator::new();
        nav.register_screens(vec![Box::new(research)]);
        nav.drill_down();
        nav.drill_down();
        nav.drill_down();
        assert!(nav.drill_down());
        assert_eq!(nav.nesting_depth(), 1);

        data.borrow_mut().targets.clear();
        nav.refresh_sections();

        assert_eq!(nav.nesting_depth(), 0);
        assert_eq!(nav.level(), NavigationLevel::SectionItems);
        assert_eq!(nav.current_announcement(), "1 of 1: Materials");
    }

    #[test]
    fn vanished_items_clamp_stale_index() {
        let (alpha, data) = screen(
            "Alpha",
            vec![
                item("Zeta", vec![section("Stats", &["Loyalty: 4"])]),
                item("Yuri", vec![section("Stats", &["Loyalty: 9"])]),
            ],
        );
        let mut nav = Navigator::new();
        nav.register_screens(vec![Box::new(alpha)]);
        nav.drill_down();
        nav.next();
        nav.drill_down();
        assert_eq!(nav.level(), NavigationLevel::Sections);

        // 重新同步本身就是这次输入的结果
        data.borrow_mut().items.pop();
        assert!(!nav.next());
        assert_eq!(nav.level(), NavigationLevel::Items);
        assert_eq!(nav.cursor().item, 0);
        assert!(nav.next());
        assert_eq!(nav.cursor().item, 0);

        data.borrow_mut().items.clear();
        assert!(!nav.next());
        assert_eq!(nav.level(), NavigationLevel::Screens);
        assert_eq!(nav.cursor().screen, 0);
    }

    /// 停在第二个条目的分节条目层，然后让该条目消失
    fn stale_section_item() -> (Navigator, SharedData) {
        let (alpha, data) = screen(
            "Alpha",
            vec![
                item("Zeta", vec![section("Stats", &["Loyalty: 4"])]),
                item(
                    "Yuri",
                    vec![MockSection::new("Orders")
                        .with_entry(entry("Hold"))
                        .with_entry(entry("Recall").actionable())],
                ),
            ],
        );
        let mut nav = Navigator::new();
        nav.register_screens(vec![Box::new(alpha)]);
        nav.drill_down();
        nav.next();
        nav.drill_down();
        nav.drill_down();
        nav.next();
        assert_eq!(nav.level(), NavigationLevel::SectionItems);
        assert_eq!(nav.cursor().section_item, 1);

        data.borrow_mut().items.pop();
        (nav, data)
    }

    #[test]
    fn next_on_stale_section_item_only_resyncs() {
        let (mut nav, _) = stale_section_item();
        assert!(!nav.next());
        assert_eq!(nav.level(), NavigationLevel::Items);
        assert_eq!(nav.cursor().item, 0);
        assert_eq!(nav.current_announcement(), "1 of 1: Zeta");
    }

    #[test]
    fn back_out_on_stale_section_item_climbs_one_level() {
        let (mut nav, _) = stale_section_item();
        assert!(!nav.back_out());
        assert_eq!(nav.level(), NavigationLevel::Items);

        assert!(nav.back_out());
        assert_eq!(nav.level(), NavigationLevel::Screens);
    }

    #[test]
    fn drill_on_stale_section_item_does_not_activate() {
        let (mut nav, data) = stale_section_item();
        assert!(matches!(nav.drill_down_outcome(), DrillOutcome::Nothing));
        assert_eq!(nav.level(), NavigationLevel::Items);
        assert!(data.borrow().activations.is_empty());

        assert!(nav.drill_down());
        assert_eq!(nav.level(), NavigationLevel::Sections);
        assert_eq!(nav.breadcrumb(), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn letter_jump_on_stale_section_item_only_resyncs() {
        let (mut nav, _) = stale_section_item();
        assert!(!nav.jump_to_letter('z'));
        assert_eq!(nav.level(), NavigationLevel::Items);
        assert!(nav.jump_to_letter('z'));
    }

    #[test]
    fn emptied_items_do_not_cycle_screens() {
        let (alpha, data) = screen("Alpha", vec![item("Zeta", vec![])]);
        let mut nav = Navigator::new();
        nav.register_screens(vec![Box::new(alpha)]);
        nav.drill_down();

        data.borrow_mut().items.clear();
        assert!(!nav.next());
        assert_eq!(nav.level(), NavigationLevel::Screens);
        assert_eq!(data.borrow().lifecycle, vec!["activate"]);
        assert!(!nav.resync());
    }

    #[test]
    fn lists_level_with_current_marker() {
        let mut nav = two_screens();
        nav.drill_down();
        nav.next();
        assert_eq!(nav.list_current_level(", "), "2 items: Zeta, Yuri (current)");
        assert_eq!(nav.list_screens(" / "), "2 screens: Alpha (current) / Beta");
    }

    #[test]
    fn details_per_level() {
        let mut nav = two_screens();
        assert_eq!(nav.current_detail(), "Alpha screen");
        nav.drill_down();
        assert_eq!(nav.current_detail(), "Zeta in detail");
        nav.drill_down();
        assert_eq!(nav.current_detail(), "Stats: Loyalty: 4. Command: 7");
        nav.drill_down();
        assert_eq!(nav.current_detail(), "Loyalty: 4");
    }

    #[test]
    fn letter_jump_moves_within_level() {
        let (alpha, _) = screen(
            "Alpha",
            vec![item("Zeta", vec![section("Ships", &["Apple", "Cherry", "Banana", "Cat"])])],
        );
        let mut nav = Navigator::new();
        nav.register_screens(vec![Box::new(alpha)]);
        nav.drill_down();
        nav.drill_down();
        nav.drill_down();

        assert!(nav.jump_to_letter('c'));
        assert_eq!(nav.cursor().section_item, 1);
        assert!(nav.jump_to_letter('C'));
        assert_eq!(nav.cursor().section_item, 3);
        assert!(nav.jump_to_letter('c'));
        assert_eq!(nav.cursor().section_item, 1);
        assert!(!nav.jump_to_letter('x'));
        assert_eq!(nav.cursor().section_item, 1);
    }

    #[test]
    fn switch_to_screen_lands_on_items_when_available() {
        let mut nav = two_screens();
        assert!(nav.switch_to_screen(1));
        assert_eq!(nav.level(), NavigationLevel::Screens);
        assert_eq!(nav.cursor().screen, 1);

        assert!(nav.switch_to_screen(0));
        assert_eq!(nav.level(), NavigationLevel::Items);
        assert_eq!(nav.cursor().item, 0);

        assert!(!nav.switch_to_screen(5));
        assert_eq!(nav.cursor().screen, 0);
    }

    #[test]
    fn hints_can_be_disabled() {
        let (alpha, _) = screen(
            "Alpha",
            vec![item("Zeta", vec![MockSection::new("Orders").with_entry(entry("Recall").actionable())])],
        );
        let mut nav = Navigator::new();
        nav.set_announce_hints(false);
        nav.register_screens(vec![Box::new(alpha)]);
        nav.drill_down();
        nav.drill_down();
        nav.drill_down();
        assert_eq!(nav.current_announcement(), "1 of 1: Recall");
    }
}
