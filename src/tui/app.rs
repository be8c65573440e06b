//! 终端 UI 状态机
//!
//! 标签页与行光标的纯状态，不做任何 I/O。
//! 按键翻译成 Action 交给外层 shell 执行。

use crossterm::event::KeyCode;

use crate::models::{MarketOverview, Startup, StartupSummary, Stock, StockSummary};

/// 当前激活的标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Stocks,
    Startups,
}

/// 按键翻译出的后续动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// 退出进程
    Quit,
    /// 整体重新加载当前标签页的行
    Reload,
    /// 光标移动，需要加载新选中行的详情
    SelectionChanged,
}

pub struct App {
    /// 激活标签页
    pub tab: Tab,
    /// 当前标签页内的行光标
    pub selected: usize,
    /// 股票页是否只显示自选
    pub watchlist_only: bool,
    /// 股票页行数据
    pub stocks: Vec<StockSummary>,
    /// 初创页行数据
    pub startups: Vec<StartupSummary>,
    /// 市场总览面板数据
    pub overview: Option<MarketOverview>,
    /// 选中股票的详情
    pub stock_detail: Option<Stock>,
    /// 选中初创公司的详情
    pub startup_detail: Option<Startup>,
    /// 状态栏文本
    pub status: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            tab: Tab::Stocks,
            selected: 0,
            watchlist_only: false,
            stocks: Vec::new(),
            startups: Vec::new(),
            overview: None,
            stock_detail: None,
            startup_detail: None,
            status: "Ready".to_string(),
        }
    }

    /// 当前标签页的行数
    pub fn row_count(&self) -> usize {
        match self.tab {
            Tab::Stocks => self.stocks.len(),
            Tab::Startups => self.startups.len(),
        }
    }

    /// 选中行的标识（股票代码或初创公司 id）
    pub fn selected_key(&self) -> Option<&str> {
        match self.tab {
            Tab::Stocks => self.stocks.get(self.selected).map(|s| s.ticker.as_str()),
            Tab::Startups => self.startups.get(self.selected).map(|s| s.id.as_str()),
        }
    }

    pub fn on_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('1') => self.switch_tab(Tab::Stocks),
            KeyCode::Char('2') => self.switch_tab(Tab::Startups),
            KeyCode::Char('r') => Action::Reload,
            KeyCode::Char('w') if self.tab == Tab::Stocks => {
                self.watchlist_only = !self.watchlist_only;
                self.selected = 0;
                Action::Reload
            }
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            _ => Action::None,
        }
    }

    /// 切换标签页：行光标重置为 0，行数据整体重新加载
    fn switch_tab(&mut self, tab: Tab) -> Action {
        if self.tab == tab {
            return Action::None;
        }
        self.tab = tab;
        self.selected = 0;
        Action::Reload
    }

    /// 光标在 [0, row_count-1] 内夹取，空表时不动
    fn move_cursor(&mut self, delta: i64) -> Action {
        let rows = self.row_count();
        if rows == 0 {
            return Action::None;
        }
        let max = (rows - 1) as i64;
        let next = (self.selected as i64 + delta).clamp(0, max) as usize;
        if next == self.selected {
            return Action::None;
        }
        self.selected = next;
        Action::SelectionChanged
    }

    /// 行数据整体替换后收紧光标，避免指向已不存在的行
    pub fn clamp_selection(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            self.selected = 0;
        } else if self.selected >= rows {
            self.selected = rows - 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(ticker: &str) -> StockSummary {
        StockSummary {
            ticker: ticker.to_string(),
            name: format!("{} Inc.", ticker),
            sector: "Technology".to_string(),
            price: 100.0,
            change_pct: 0.5,
            watchlisted: false,
        }
    }

    fn startup_summary(id: &str) -> StartupSummary {
        StartupSummary {
            id: id.to_string(),
            name: format!("Startup {}", id),
            sector: "Fintech".to_string(),
            stage: "Seed".to_string(),
            signal_score: 42.0,
        }
    }

    fn app_with_rows(n: usize) -> App {
        let mut app = App::new();
        app.stocks = (0..n).map(|i| summary(&format!("S{}", i))).collect();
        app
    }

    /// 初始状态：股票页，光标 0
    #[test]
    fn test_initial_state() {
        let app = App::new();
        assert_eq!(app.tab, Tab::Stocks);
        assert_eq!(app.selected, 0);
    }

    /// 5 行表中按 3 次 Down 停在第 3 行
    #[test]
    fn test_cursor_down_three() {
        let mut app = app_with_rows(5);
        for _ in 0..3 {
            app.on_key(KeyCode::Down);
        }
        assert_eq!(app.selected, 3);
    }

    /// 5 行表中按 10 次 Down 夹取在末行
    #[test]
    fn test_cursor_down_clamped() {
        let mut app = app_with_rows(5);
        for _ in 0..10 {
            app.on_key(KeyCode::Down);
        }
        assert_eq!(app.selected, 4);
    }

    /// 首行按 Up 不动
    #[test]
    fn test_cursor_up_at_top() {
        let mut app = app_with_rows(5);
        assert_eq!(app.on_key(KeyCode::Up), Action::None);
        assert_eq!(app.selected, 0);
    }

    /// 空表时 Up/Down 均为空操作
    #[test]
    fn test_cursor_empty_table() {
        let mut app = app_with_rows(0);
        assert_eq!(app.on_key(KeyCode::Down), Action::None);
        assert_eq!(app.on_key(KeyCode::Up), Action::None);
        assert_eq!(app.selected, 0);
    }

    /// 光标移动产生 SelectionChanged，夹取时不产生
    #[test]
    fn test_move_actions() {
        let mut app = app_with_rows(2);
        assert_eq!(app.on_key(KeyCode::Down), Action::SelectionChanged);
        assert_eq!(app.on_key(KeyCode::Down), Action::None);
    }

    /// 切换标签页触发重载并把光标重置为 0
    #[test]
    fn test_tab_switch_resets_cursor() {
        let mut app = app_with_rows(5);
        app.startups = (0..3).map(|i| startup_summary(&format!("su-{}", i))).collect();
        for _ in 0..3 {
            app.on_key(KeyCode::Down);
        }
        assert_eq!(app.selected, 3);

        assert_eq!(app.on_key(KeyCode::Char('2')), Action::Reload);
        assert_eq!(app.tab, Tab::Startups);
        assert_eq!(app.selected, 0);

        assert_eq!(app.on_key(KeyCode::Char('1')), Action::Reload);
        assert_eq!(app.tab, Tab::Stocks);
        assert_eq!(app.selected, 0);
    }

    /// 重复按当前标签页的键不触发重载
    #[test]
    fn test_tab_switch_same_tab_noop() {
        let mut app = app_with_rows(5);
        assert_eq!(app.on_key(KeyCode::Char('1')), Action::None);
    }

    /// q 退出，未绑定的键忽略
    #[test]
    fn test_quit_and_unknown_keys() {
        let mut app = app_with_rows(1);
        assert_eq!(app.on_key(KeyCode::Char('q')), Action::Quit);
        assert_eq!(app.on_key(KeyCode::Char('x')), Action::None);
        assert_eq!(app.on_key(KeyCode::Esc), Action::None);
    }

    /// w 在股票页切换自选过滤，在初创页无效
    #[test]
    fn test_watchlist_toggle() {
        let mut app = app_with_rows(5);
        assert_eq!(app.on_key(KeyCode::Char('w')), Action::Reload);
        assert!(app.watchlist_only);

        app.on_key(KeyCode::Char('2'));
        assert_eq!(app.on_key(KeyCode::Char('w')), Action::None);
    }

    /// 行数据缩水后光标收紧
    #[test]
    fn test_clamp_selection_after_replace() {
        let mut app = app_with_rows(5);
        app.selected = 4;
        app.stocks.truncate(2);
        app.clamp_selection();
        assert_eq!(app.selected, 1);

        app.stocks.clear();
        app.clamp_selection();
        assert_eq!(app.selected, 0);
    }
}
