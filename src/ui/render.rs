use crate::availability::dates::{self, WINDOW_DAYS};
use crate::availability::{AvailabilityGrid, Cell, Projection};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::location::Pane;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, SLOT_FULL, SLOT_OPEN,
    STATUS_ERROR,
};
use chrono::NaiveDate;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell as TableCell, Clear, List, ListItem, ListState, Paragraph, Row, Table,
    Wrap,
};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    draw_at(frame, app, dates::today_ist());
}

/// Draw with an explicit "today" for the grid window.
pub fn draw_at(frame: &mut Frame<'_>, app: &App, today: NaiveDate) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let location = app.location();
    let dashboard = app.dashboard();

    let district_label = dashboard
        .district_id()
        .or(location.selected_district)
        .map(|id| match location.selected_district_name() {
            Some(name) => name.to_string(),
            None => format!("District {}", id),
        });
    let header_widget = Header {
        state_name: location.selected_state_name(),
        district_label,
        loading: app.is_loading(),
        last_updated: dashboard.last_updated(),
    };
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let regions = body_regions(body);
    draw_states(frame, app, regions.states);
    draw_districts(frame, app, regions.districts);
    draw_availability(frame, app, regions.availability, today);

    let error = app.last_command_error().or(location.last_error.as_deref());
    frame.render_widget(Footer { error }.widget(footer), footer);
}

fn picker_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_states(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let location = app.location();
    let items: Vec<ListItem> = location
        .states
        .iter()
        .map(|state| {
            let marker = if location.selected_state == Some(state.state_id) {
                "● "
            } else {
                "  "
            };
            ListItem::new(format!("{}{}", marker, state.state_name))
        })
        .collect();
    draw_picker(
        frame,
        area,
        items,
        "States",
        location.focus == Pane::States,
        location.state_cursor,
        location.states_loading && location.states.is_empty(),
    );
}

fn draw_districts(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let location = app.location();
    let items: Vec<ListItem> = location
        .districts
        .iter()
        .map(|district| {
            let marker = if location.selected_district == Some(district.district_id) {
                "● "
            } else {
                "  "
            };
            ListItem::new(format!("{}{}", marker, district.district_name))
        })
        .collect();
    let loading = location.districts_loading.is_some();
    draw_picker(
        frame,
        area,
        items,
        "Districts",
        location.focus == Pane::Districts,
        location.district_cursor,
        loading && location.districts.is_empty(),
    );
}

fn draw_picker(
    frame: &mut Frame<'_>,
    area: Rect,
    items: Vec<ListItem<'_>>,
    title: &str,
    focused: bool,
    cursor: usize,
    loading: bool,
) {
    let block = picker_block(title, focused);
    if items.is_empty() {
        let text = if loading { "Loading..." } else { "" };
        let placeholder = Paragraph::new(text)
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let highlight = if focused {
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(ACTIVE_HIGHLIGHT)
    };
    let list = List::new(items)
        .style(Style::default().fg(HEADER_TEXT))
        .highlight_style(highlight)
        .block(block);
    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_availability(frame: &mut Frame<'_>, app: &App, area: Rect, today: NaiveDate) {
    let dashboard = app.dashboard();
    let block = Block::default()
        .title(Span::styled(" Availability ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let mut lines: Vec<Line> = Vec::new();
    if let Some(error) = dashboard.last_error() {
        lines.push(Line::from(Span::styled(
            format!("Last update failed: {}", error),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    let projection = if dashboard.is_watching() {
        dashboard.projection(app.rule(), today)
    } else {
        None
    };

    match projection {
        Some(Projection::Grid(grid)) if lines.is_empty() => {
            frame.render_widget(grid_table(&grid).block(block), area);
        }
        Some(Projection::Grid(grid)) => {
            // Keep the last good grid visible under the error line
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let (status, table) = split_status(inner);
            frame.render_widget(Paragraph::new(lines), status);
            frame.render_widget(grid_table(&grid), table);
        }
        Some(Projection::NoAvailability) => {
            lines.push(Line::from(app.rule().empty_message()));
            render_message(frame, area, block, lines);
        }
        None => {
            let message = if !dashboard.is_watching() {
                "Please select a state and district"
            } else if dashboard.last_error().is_some() {
                ""
            } else {
                "Loading availability..."
            };
            if !message.is_empty() {
                lines.push(Line::from(message));
            }
            render_message(frame, area, block, lines);
        }
    }
}

fn render_message(frame: &mut Frame<'_>, area: Rect, block: Block<'_>, lines: Vec<Line<'_>>) {
    let widget = Paragraph::new(lines)
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, area);
}

fn split_status(area: Rect) -> (Rect, Rect) {
    let status_height = area.height.min(1);
    let status = Rect {
        height: status_height,
        ..area
    };
    let table = Rect {
        y: area.y + status_height,
        height: area.height.saturating_sub(status_height),
        ..area
    };
    (status, table)
}

fn grid_table(grid: &AvailabilityGrid) -> Table<'static> {
    let header_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let mut header_cells = vec![
        TableCell::from("Locality"),
        TableCell::from("Name"),
        TableCell::from("PIN"),
    ];
    header_cells.extend(
        grid.dates
            .iter()
            .map(|date| TableCell::from(dates::column_label(*date))),
    );
    let header = Row::new(header_cells).style(header_style);

    let rows: Vec<Row> = grid
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                TableCell::from(row.block_name.clone()),
                TableCell::from(row.name.clone()),
                TableCell::from(row.pincode.to_string()),
            ];
            cells.extend(row.cells.iter().map(slot_cell));
            Row::new(cells).style(Style::default().fg(HEADER_TEXT))
        })
        .collect();

    let mut widths = vec![
        Constraint::Min(10),
        Constraint::Min(16),
        Constraint::Length(6),
    ];
    widths.extend([Constraint::Length(6); WINDOW_DAYS]);

    Table::new(rows, widths).header(header).column_spacing(1)
}

fn slot_cell(cell: &Cell) -> TableCell<'static> {
    match cell {
        Cell::Absent => TableCell::from(""),
        Cell::Slots { capacity, .. } if cell.is_open() => TableCell::from(capacity.to_string())
            .style(Style::default().fg(SLOT_OPEN).add_modifier(Modifier::BOLD)),
        Cell::Slots { capacity, .. } => TableCell::from(capacity.to_string())
            .style(Style::default().fg(SLOT_FULL).add_modifier(Modifier::DIM)),
    }
}
