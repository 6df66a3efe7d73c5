use crate::account::format_currency;
use crate::selector::{AccountRow, SelectorView, SummaryRow};
use crate::ui::app::App;
use crate::ui::layout::{selector_layout, SelectorLayout, ICON_WIDTH};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SELECTED_ICON: &str = "■";
const UNSELECTED_ICON: &str = "□";
const EXPAND_ICON: &str = "⇅";

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );

    let view = app.selector.view();
    let layout = selector_layout(area, view.rows.len(), view.is_expanded);

    render_header(frame, &view, &layout, theme);

    if view.is_expanded {
        render_list(frame, app, &view, &layout);
    }

    render_help(frame, view.is_expanded, theme);

    if app.show_info {
        render_info(frame, theme);
    }
}

fn render_header(frame: &mut Frame, view: &SelectorView, layout: &SelectorLayout, theme: &Theme) {
    let border_color = if view.is_expanded {
        theme.accent
    } else {
        theme.fg_dim
    };
    let bg = if view.is_expanded {
        theme.highlight_bg
    } else {
        theme.bg
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg));
    let inner = inset(block.inner(layout.header));
    frame.render_widget(block, layout.header);

    let bold = Style::default().fg(theme.fg).add_modifier(Modifier::BOLD);

    let value = Line::from(vec![
        Span::styled(view.formatted_balance(), bold),
        Span::raw(" "),
        Span::styled(EXPAND_ICON, Style::default().fg(theme.fg_dim)),
    ]);
    let (label_rect, value_rect) = split_label_value(inner, &value);

    frame.render_widget(
        Paragraph::new(Span::styled(
            truncate(&view.header_label, label_rect.width),
            bold,
        )),
        label_rect,
    );
    frame.render_widget(Paragraph::new(value).alignment(Alignment::Right), value_rect);
}

fn render_list(frame: &mut Frame, app: &App, view: &SelectorView, layout: &SelectorLayout) {
    let theme = &app.theme;

    if let Some(list) = layout.list {
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.bg)),
            list,
        );
    }

    for (index, (row, rect)) in view.rows.iter().zip(&layout.rows).enumerate() {
        if rect.height > 0 {
            render_account_row(frame, row, *rect, index == app.cursor, theme);
        }
    }

    if let Some(rect) = layout.summary.filter(|r| r.height > 0) {
        render_summary_row(frame, &view.summary, rect, theme);
    }

    if let Some(rect) = layout.footer.filter(|r| r.height > 0) {
        frame.render_widget(
            Paragraph::new(view.footer_label)
                .style(Style::default().fg(theme.fg_dim))
                .alignment(Alignment::Center),
            rect,
        );
    }
}

fn render_account_row(
    frame: &mut Frame,
    row: &AccountRow,
    rect: Rect,
    under_cursor: bool,
    theme: &Theme,
) {
    let row_style = if row.highlighted {
        Style::default().bg(theme.highlight_bg)
    } else {
        Style::default()
    };

    let (icon, icon_color) = if row.selected {
        (SELECTED_ICON, theme.accent)
    } else {
        (UNSELECTED_ICON, theme.fg_dim)
    };

    let label_style = if under_cursor {
        Style::default()
            .fg(theme.cursor)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)
    };

    let padding = " ".repeat(usize::from(ICON_WIDTH).saturating_sub(1));
    let left = Line::from(vec![
        Span::styled(icon, Style::default().fg(icon_color)),
        Span::raw(padding),
        Span::styled(row.category_label.clone(), label_style),
        Span::styled(
            format!(" · {}", row.number),
            Style::default().fg(theme.fg_dim),
        ),
    ]);

    let balance_color = if row.negative {
        theme.negative
    } else {
        theme.fg
    };

    let balance = Line::from(Span::styled(
        format_currency(row.balance),
        Style::default()
            .fg(balance_color)
            .add_modifier(Modifier::BOLD),
    ));
    let (left_rect, balance_rect) = split_label_value(rect, &balance);

    frame.render_widget(Block::default().style(row_style), rect);
    frame.render_widget(Paragraph::new(left), left_rect);
    frame.render_widget(
        Paragraph::new(balance).alignment(Alignment::Right),
        balance_rect,
    );
}

fn render_summary_row(frame: &mut Frame, summary: &SummaryRow, rect: Rect, theme: &Theme) {
    let style = if summary.highlighted {
        Style::default().bg(theme.highlight_bg)
    } else {
        Style::default()
    };
    let bold = Style::default().fg(theme.fg).add_modifier(Modifier::BOLD);

    let total = Line::from(Span::styled(format_currency(summary.total), bold));
    let (label_rect, total_rect) = split_label_value(rect, &total);

    frame.render_widget(Block::default().style(style), rect);
    frame.render_widget(Paragraph::new(Span::styled(summary.label, bold)), label_rect);
    frame.render_widget(Paragraph::new(total).alignment(Alignment::Right), total_rect);
}

fn render_help(frame: &mut Frame, expanded: bool, theme: &Theme) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }

    let help_text = if expanded {
        "[↑↓/jk] Move  [Space] Toggle  [Enter] Select  [m] Connections  [Esc] Close  [q] Quit"
    } else {
        "[Enter] Open  [t] Theme  [i] Info  [q] Quit"
    };

    let line = Rect::new(area.x, area.bottom() - 1, area.width, 1);
    frame.render_widget(
        Paragraph::new(help_text)
            .style(Style::default().fg(theme.fg_dim))
            .alignment(Alignment::Center),
        line,
    );
}

fn render_info(frame: &mut Frame, theme: &Theme) {
    let area = centered(frame.area(), 52, 10);

    let text = vec![
        Line::from(Span::styled(
            "Account Selector",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Enter on a row shows only that account."),
        Line::from("Enter on it again shows all accounts."),
        Line::from("Space toggles an account in or out."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Theme: ", Style::default().fg(theme.fg_dim)),
            Span::raw(theme.name),
        ]),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Info ")
                    .border_style(Style::default().fg(theme.accent)),
            )
            .style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );
}

/// Split a line into a left label area and a right-aligned value area
///
/// The value keeps its full width and a one column gap separates it from the
/// label, so the label is clipped instead of drawing over the value.
fn split_label_value(rect: Rect, value: &Line) -> (Rect, Rect) {
    let value_width = u16::try_from(value.width())
        .unwrap_or(u16::MAX)
        .min(rect.width);
    let gap = u16::from(rect.width > value_width);
    let label_width = rect.width - value_width - gap;

    let label = Rect::new(rect.x, rect.y, label_width, rect.height);
    let value = Rect::new(rect.right() - value_width, rect.y, value_width, rect.height);
    (label, value)
}

/// Shorten `text` to `width` columns, ending with an ellipsis when cut
fn truncate(text: &str, width: u16) -> String {
    let width = usize::from(width);
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut short: String = text.chars().take(width - 1).collect();
    short.push('…');
    short
}

/// One column of horizontal padding inside a bordered block
fn inset(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y,
        rect.width.saturating_sub(2),
        rect.height,
    )
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}
