use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::compare::{BudgetStatus, Comparison, ComparisonOutcome, MonthReport, Trend};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_delta, format_money, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let report = match (&app.report, app.report_requested) {
        (Some(report), true) => report,
        (Some(_), false) => {
            render_message(f, area, "Press Enter to generate the report", theme::dim_style());
            return;
        }
        (None, _) => {
            let msg = if app.load_error.is_some() {
                "Failed to load data."
            } else {
                "Please select month and year"
            };
            render_message(f, area, msg, theme::warn_style());
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Metric cards
            Constraint::Min(10),    // Category + month charts
            Constraint::Length(10), // Frequency by date
        ])
        .split(area);

    render_metric_cards(f, chunks[0], report, &app.currency);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    render_category_chart(f, charts[0], report);
    render_month_chart(f, charts[1], report, &app.currency);

    render_frequency_chart(f, chunks[2], report);
}

fn render_message(f: &mut Frame, area: Rect, msg: &str, style: Style) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(" Report ", theme::title_style()));
    let text = Paragraph::new(vec![Line::from(""), Line::from(Span::styled(msg, style))])
        .centered()
        .block(block);
    f.render_widget(text, area);
}

fn render_metric_cards(f: &mut Frame, area: Rect, report: &MonthReport, currency: &str) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let comparison = report.outcome.comparison();

    render_card(
        f,
        cards[0],
        "Total Expense",
        format_money(report.current.total_cost, currency),
        comparison.map(|c| delta_line(c.delta_cost, c.delta_cost >= Decimal::ZERO)),
        cost_message(&report.outcome, currency),
    );
    render_card(
        f,
        cards[1],
        "Number of Transactions",
        report.current.transaction_count.to_string(),
        comparison.map(|c| delta_line(Decimal::from(c.delta_count), c.delta_count <= 0)),
        count_message(comparison),
    );
    render_card(
        f,
        cards[2],
        "Budget",
        format_money(report.budget_total, currency),
        Some(delta_line(report.variance, report.variance >= Decimal::ZERO)),
        budget_message(report.budget_status, currency),
    );
}

/// Green when the change is good news for the budget, red otherwise.
fn delta_line(delta: Decimal, good: bool) -> Line<'static> {
    let style = if good {
        theme::good_style()
    } else {
        theme::bad_style()
    };
    Line::from(Span::styled(format_delta(delta), style))
}

fn cost_message(outcome: &ComparisonOutcome, currency: &str) -> Line<'static> {
    let Some(cmp) = outcome.comparison() else {
        return Line::from(Span::styled(
            "No data available for comparison.",
            theme::warn_style(),
        ));
    };
    match cmp.cost_trend() {
        Trend::Decreased(n) => Line::from(Span::styled(
            format!("Total Expense Decreased by {}", format_money(n, currency)),
            theme::good_style(),
        )),
        Trend::Increased(n) => Line::from(Span::styled(
            format!("Total Expense Increased by {}", format_money(n, currency)),
            theme::bad_style(),
        )),
        Trend::Unchanged => Line::from(Span::styled(
            "Total Expense Remained the Same",
            theme::good_style(),
        )),
    }
}

fn count_message(comparison: Option<&Comparison>) -> Line<'static> {
    let Some(cmp) = comparison else {
        return Line::from(Span::styled(
            "No data available for comparison.",
            theme::warn_style(),
        ));
    };
    match cmp.count_trend() {
        Trend::Decreased(n) => Line::from(Span::styled(
            format!("Number of Transactions Decreased by {n}"),
            theme::good_style(),
        )),
        Trend::Increased(n) => Line::from(Span::styled(
            format!("Number of Transactions Increased by {n}"),
            theme::bad_style(),
        )),
        Trend::Unchanged => Line::from(Span::styled(
            "Number of Transactions Remained the Same",
            theme::good_style(),
        )),
    }
}

fn budget_message(status: BudgetStatus, currency: &str) -> Line<'static> {
    match status {
        BudgetStatus::Exceeded(n) => Line::from(Span::styled(
            format!("Budget Exceeded by {}", format_money(n, currency)),
            theme::bad_style(),
        )),
        BudgetStatus::Saved(n) => Line::from(Span::styled(
            format!("You saved {}", format_money(n, currency)),
            theme::good_style(),
        )),
        BudgetStatus::Exact => Line::from(Span::styled(
            "Budget Spent as Planned",
            theme::good_style(),
        )),
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    delta: Option<Line<'static>>,
    message: Line<'static>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::PLUM))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        delta.unwrap_or_default(),
        Line::from(""),
        message,
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn chart_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(title, theme::title_style()))
}

fn bar_value(amount: Decimal) -> u64 {
    amount.round().to_u64().unwrap_or(0)
}

fn render_category_chart(f: &mut Frame, area: Rect, report: &MonthReport) {
    let title = " Expense Distribution by Type ".to_string();
    let categories = report.categories_by_cost();
    if categories.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No costs recorded for this month",
            theme::dim_style(),
        )))
        .centered()
        .block(chart_block(title));
        f.render_widget(msg, area);
        return;
    }

    let total = report.current.total_cost;
    let bars: Vec<Bar> = categories
        .iter()
        .take(12)
        .map(|(name, cost)| {
            let share = if total.is_zero() {
                Decimal::ZERO
            } else {
                (*cost * Decimal::from(100) / total).round()
            };
            Bar::default()
                .value(bar_value(*cost))
                .text_value(format!("{} {share}%", format_amount(*cost)))
                .label(Line::from(truncate(name, 12)))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(12)
        .bar_gap(2);

    f.render_widget(chart, area);
}

fn render_month_chart(f: &mut Frame, area: Rect, report: &MonthReport, currency: &str) {
    let current: Decimal = report.current.cost_by_month.values().sum();
    let previous: Decimal = report.previous.cost_by_month.values().sum();

    let title = match report.month_gap() {
        Some(gap) => format!(
            " Expense Distribution by Month · Difference {} ",
            format_money(gap, currency)
        ),
        None => " Expense Distribution by Month ".to_string(),
    };

    let mut bars = Vec::with_capacity(2);
    if report.outcome.comparison().is_some() {
        bars.push(
            Bar::default()
                .value(bar_value(previous))
                .text_value(format_amount(previous))
                .label(Line::from(format!(
                    "Previous ({})",
                    report.previous_period.month_label()
                )))
                .style(Style::default().fg(theme::RED)),
        );
    }
    bars.push(
        Bar::default()
            .value(bar_value(current))
            .text_value(format_amount(current))
            .label(Line::from(format!(
                "Current ({})",
                report.period.month_label()
            )))
            .style(Style::default().fg(theme::ACCENT)),
    );

    let chart = BarChart::default()
        .block(chart_block(title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(14)
        .bar_gap(3)
        .value_style(
            Style::default()
                .fg(theme::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(chart, area);
}

fn render_frequency_chart(f: &mut Frame, area: Rect, report: &MonthReport) {
    let bars: Vec<Bar> = report
        .daily_frequency
        .iter()
        .map(|(date, count)| {
            Bar::default()
                .value(*count as u64)
                .label(Line::from(date.format("%d").to_string()))
                .style(Style::default().fg(theme::ACCENT))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(" Expense Frequency by Date ".to_string()))
        .data(BarGroup::default().bars(&bars))
        .bar_width(3)
        .bar_gap(1)
        .value_style(Style::default().fg(theme::HEADER_BG).bg(theme::ACCENT));

    f.render_widget(chart, area);
}
