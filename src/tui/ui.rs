//! 终端 UI 渲染
//!
//! 只读取 App 状态绘制 widget，不修改状态

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Sparkline, Table, TableState, Tabs},
    Frame,
};

use super::app::{App, Tab};
use crate::models::{MarketOverview, Startup, Stock};

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(9),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_tabs(f, app, chunks[0]);
    match app.tab {
        Tab::Stocks => render_stocks_view(f, app, chunks[1]),
        Tab::Startups => render_startups_view(f, app, chunks[1]),
    }
    render_detail(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let index = match app.tab {
        Tab::Stocks => 0,
        Tab::Startups => 1,
    };
    let tabs = Tabs::new(vec!["[1] Stocks", "[2] Startups"])
        .select(index)
        .block(Block::default().borders(Borders::ALL).title("Market Intel"))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_stocks_view(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(area);

    render_overview(f, app.overview.as_ref(), chunks[0]);

    let title = if app.watchlist_only {
        "Tracked Stocks · Watchlist"
    } else {
        "Tracked Stocks"
    };
    let header = Row::new(vec!["Ticker", "Name", "Sector", "Price", "Change", "Watch"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app
        .stocks
        .iter()
        .map(|s| {
            Row::new(vec![
                Cell::from(s.ticker.clone()),
                Cell::from(s.name.clone()),
                Cell::from(s.sector.clone()),
                Cell::from(format!("{:.2}", s.price)),
                Cell::from(Span::styled(
                    format!("{:+.2}%", s.change_pct),
                    change_style(s.change_pct),
                )),
                Cell::from(if s.watchlisted { "★" } else { "" }),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(20),
            Constraint::Length(22),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("» ");

    let mut state = TableState::default();
    if !app.stocks.is_empty() {
        state.select(Some(app.selected));
    }
    f.render_stateful_widget(table, chunks[1], &mut state);
}

fn render_overview(f: &mut Frame, overview: Option<&MarketOverview>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Market Overview");
    let Some(overview) = overview else {
        let empty = Paragraph::new("No market overview data.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    };

    let counters = vec![
        Span::raw(format!("Stocks: {}   ", overview.total_stocks)),
        Span::styled(
            format!("Advancers: {}", overview.advancers),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" / "),
        Span::styled(
            format!("Decliners: {}", overview.decliners),
            Style::default().fg(Color::Red),
        ),
        Span::raw("   Avg change: "),
        Span::styled(
            format!("{:+.2}%", overview.avg_change_pct),
            change_style(overview.avg_change_pct),
        ),
    ];

    let mut sector_spans = vec![Span::raw("Sectors: ")];
    for (i, sector) in overview.sectors.iter().enumerate() {
        if i > 0 {
            sector_spans.push(Span::raw("  ·  "));
        }
        sector_spans.push(Span::raw(sector.sector.clone()));
        sector_spans.push(Span::styled(
            format!(" {:+.2}%", sector.change_pct),
            change_style(sector.change_pct),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            format!("As of {}", overview.as_of),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(counters),
        Line::from(sector_spans),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_startups_view(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Name", "Sector", "Stage", "Signal"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app
        .startups
        .iter()
        .map(|s| {
            Row::new(vec![
                Cell::from(s.name.clone()),
                Cell::from(s.sector.clone()),
                Cell::from(s.stage.clone()),
                Cell::from(Span::styled(
                    format!("{:.1}", s.signal_score),
                    Style::default().fg(Color::Cyan),
                )),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(24),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Startup Signals"))
    .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("» ");

    let mut state = TableState::default();
    if !app.startups.is_empty() {
        state.select(Some(app.selected));
    }
    f.render_stateful_widget(table, area, &mut state);
}

fn render_detail(f: &mut Frame, app: &App, area: Rect) {
    match app.tab {
        Tab::Stocks => match &app.stock_detail {
            Some(stock) => render_stock_detail(f, stock, area),
            None => render_no_detail(f, area),
        },
        Tab::Startups => match &app.startup_detail {
            Some(startup) => render_startup_detail(f, startup, area),
            None => render_no_detail(f, area),
        },
    }
}

fn render_no_detail(f: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new("No selection.")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("Detail"));
    f.render_widget(placeholder, area);
}

fn render_stock_detail(f: &mut Frame, stock: &Stock, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(44)])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            format!("{} ({})", stock.name, stock.ticker),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Sector: {}", stock.sector)),
        Line::from(format!("Price: {:.2}", stock.price)),
        Line::from(vec![
            Span::raw("Change: "),
            Span::styled(
                format!("{:+.2}%", stock.change_pct),
                change_style(stock.change_pct),
            ),
        ]),
        Line::from(format!(
            "Watchlisted: {}",
            if stock.watchlisted { "yes" } else { "no" }
        )),
    ];
    let detail = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Stock Detail"));
    f.render_widget(detail, chunks[0]);

    // 稀疏图只表达形状，先把价格平移到窗口最小值再放大
    let prices: Vec<f64> = stock.series.six_month.iter().map(|p| p.price).collect();
    let scaled = scale_for_sparkline(&prices);
    let sparkline = Sparkline::default()
        .data(&scaled)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title("6M Price Trend"));
    f.render_widget(sparkline, chunks[1]);
}

fn render_startup_detail(f: &mut Frame, startup: &Startup, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(44)])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            startup.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Sector: {}", startup.sector)),
        Line::from(format!("Stage: {}", startup.stage)),
        Line::from(vec![
            Span::raw("Signal score: "),
            Span::styled(
                format!("{:.1}", startup.signal_score),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];
    let detail = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Startup Detail"));
    f.render_widget(detail, chunks[0]);

    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let hiring: Vec<u64> = startup.momentum.iter().map(|p| p.hiring as u64).collect();
    let buzz: Vec<u64> = startup.momentum.iter().map(|p| p.buzz as u64).collect();
    let hiring_chart = Sparkline::default()
        .data(&hiring)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title("Hiring"));
    let buzz_chart = Sparkline::default()
        .data(&buzz)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Buzz"));
    f.render_widget(hiring_chart, halves[0]);
    f.render_widget(buzz_chart, halves[1]);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " 1 Stocks  2 Startups  ↑/↓ Move  w Watchlist  r Reload  q Quit ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("| "),
        Span::styled(app.status.clone(), Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn change_style(change_pct: f64) -> Style {
    if change_pct < 0.0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    }
}

/// 价格序列 → 稀疏图数据：平移到最小值并放大，保留波形
fn scale_for_sparkline(values: &[f64]) -> Vec<u64> {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    if !min.is_finite() {
        return Vec::new();
    }
    values
        .iter()
        .map(|v| ((v - min) * 100.0).round() as u64 + 1)
        .collect()
}
