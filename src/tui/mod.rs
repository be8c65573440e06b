//! 终端 UI shell
//!
//! 负责终端初始化/恢复与主事件循环。状态机见 app，渲染见 ui。
//! 每次导航同步请求数据服务，请求返回前不重绘。

pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::client::{ApiClient, ApiError};
use app::{Action, App, Tab};

pub struct TuiShell {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    client: ApiClient,
    app: App,
}

impl TuiShell {
    pub fn new(client: ApiClient) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            client,
            app: App::new(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        // 启动即加载股票页
        self.reload();

        loop {
            self.terminal.draw(|f| ui::render(f, &self.app))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match self.app.on_key(key.code) {
                        Action::Quit => break,
                        Action::Reload => self.reload(),
                        Action::SelectionChanged => self.load_detail(),
                        Action::None => {}
                    }
                }
            }
        }

        self.cleanup()
    }

    /// 整体替换当前标签页的行，随后刷新选中行详情
    fn reload(&mut self) {
        self.app.status = "Fetching...".to_string();

        let result = match self.app.tab {
            Tab::Stocks => self.reload_stocks(),
            Tab::Startups => self.reload_startups(),
        };

        match result {
            Ok(()) => {
                self.app.clamp_selection();
                self.load_detail();
                self.app.status = "Ready".to_string();
            }
            Err(e) => self.report_load_error(e),
        }
    }

    fn reload_stocks(&mut self) -> Result<(), ApiError> {
        self.app.overview = Some(self.client.market_overview()?);
        self.app.stocks = if self.app.watchlist_only {
            self.client.list_watchlist()?
        } else {
            self.client.list_stocks()?
        };
        Ok(())
    }

    fn reload_startups(&mut self) -> Result<(), ApiError> {
        self.app.startups = self.client.list_startups()?;
        Ok(())
    }

    /// 加载选中行详情；失败只清空详情面板，列表保持不动
    fn load_detail(&mut self) {
        let Some(key) = self.app.selected_key().map(str::to_string) else {
            self.app.stock_detail = None;
            self.app.startup_detail = None;
            return;
        };

        match self.app.tab {
            Tab::Stocks => match self.client.get_stock(&key) {
                Ok(stock) => self.app.stock_detail = Some(stock),
                Err(e) => {
                    self.app.stock_detail = None;
                    self.app.status = format!("Error: {}", e);
                }
            },
            Tab::Startups => match self.client.get_startup(&key) {
                Ok(startup) => self.app.startup_detail = Some(startup),
                Err(e) => {
                    self.app.startup_detail = None;
                    self.app.status = format!("Error: {}", e);
                }
            },
        }
    }

    /// 列表加载失败：清空当前视图并把错误写入状态栏，不做重试。
    /// 下一次触发加载的按键就是自然的重试。
    fn report_load_error(&mut self, err: ApiError) {
        match self.app.tab {
            Tab::Stocks => {
                self.app.stocks.clear();
                self.app.stock_detail = None;
                self.app.overview = None;
            }
            Tab::Startups => {
                self.app.startups.clear();
                self.app.startup_detail = None;
            }
        }
        self.app.selected = 0;
        self.app.status = format!("Error: {}", err);
    }

    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiShell {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
