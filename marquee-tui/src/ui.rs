use marquee_core::card_stack::CardRole;
use marquee_core::loading::LoadingPhase;
use marquee_core::newsletter::HintTone;
use marquee_core::prefs::PreferenceStore;
use marquee_core::slider::Slider;
use marquee_core::tabs::TabPanel;
use marquee_core::theme::ThemeMode;
use marquee_core::toast::ToastKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Tabs, Wrap},
};

use crate::app::{App, HitAreas, InputMode};
use crate::scheduler::TokioScheduler;

const HELP: &str =
    "←/→ cards  [/] slides  d theme  1-9 tabs  PgUp/PgDn scroll  f features  m menu  l login  n email  q quit";

struct Palette {
    base: Style,
    accent: Color,
    muted: Color,
}

fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => Palette {
            base: Style::default(),
            accent: Color::Rgb(37, 99, 235),
            muted: Color::DarkGray,
        },
        ThemeMode::Dark => Palette {
            base: Style::default()
                .bg(Color::Rgb(15, 23, 42))
                .fg(Color::Rgb(226, 232, 240)),
            accent: Color::Rgb(96, 165, 250),
            muted: Color::Gray,
        },
    }
}

fn boxed(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).title(title)
}

pub fn render<P: PreferenceStore>(f: &mut Frame, app: &mut App<P>) {
    let page = app.page();
    let colors = palette(page.theme().mode());
    let area = f.size();
    f.render_widget(Block::default().style(colors.base), area);

    if page.loading().phase() != LoadingPhase::Gone {
        render_loading(f, area, page.loading().phase(), &colors);
        app.set_hits(HitAreas::default());
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(7),
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(area);

    render_nav(f, rows[0], app, &colors);
    render_hero(f, rows[1], app, &colors);
    let mut hits = HitAreas {
        stack: rows[2],
        ..HitAreas::default()
    };
    render_cards(f, rows[2], app, &colors);
    hits.indicators = render_indicators(f, rows[3], app, &colors);
    hits.dots = render_slider(f, rows[4], app, &colors);
    render_tabs(f, rows[5], app, &colors);
    render_progress(f, rows[6], app, &colors);
    render_newsletter(f, rows[7], app, &colors);
    render_status(f, rows[8], app, &colors);
    app.set_hits(hits);
}

fn render_loading(f: &mut Frame, area: Rect, phase: LoadingPhase, colors: &Palette) {
    let style = match phase {
        LoadingPhase::Fading => Style::default().fg(colors.muted),
        _ => Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
    };
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage(45),
                Constraint::Length(1),
                Constraint::Percentage(45),
            ]
            .as_ref(),
        )
        .split(area);
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new("Loading…")
            .alignment(Alignment::Center)
            .style(style),
        vertical[1],
    );
}

fn render_nav<P: PreferenceStore>(f: &mut Frame, area: Rect, app: &App<P>, colors: &Palette) {
    let nav = app.page().nav();
    let mut spans = vec![Span::styled(
        "Marquee",
        Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
    )];
    if nav.is_menu_open() {
        let links: Vec<String> = app.layout().sections.iter().map(|id| format!("#{id}")).collect();
        spans.push(Span::raw("  "));
        spans.push(Span::raw(links.join(" · ")));
    } else {
        spans.push(Span::styled("  ≡ menu", Style::default().fg(colors.muted)));
    }
    if nav.redirect_pending() {
        spans.push(Span::styled("  → login", Style::default().fg(Color::Yellow)));
    }
    let title = if nav.is_sticky() { "nav (sticky)" } else { "nav" };
    f.render_widget(Paragraph::new(Line::from(spans)).block(boxed(title)), area);
}

fn render_hero<P: PreferenceStore>(f: &mut Frame, area: Rect, app: &App<P>, colors: &Palette) {
    let block = boxed("hero");
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = usize::from(inner.width);
    let height = usize::from(inner.height);
    let mut grid = vec![vec![' '; width]; height];
    let elapsed = app.elapsed_secs();
    for particle in app.page().particles() {
        let col = ((particle.left_percent / 100.0) * width as f32) as usize;
        // particles rise from the bottom
        let progress = particle.phase_at(elapsed);
        let row = height - 1 - ((progress * height as f32) as usize).min(height - 1);
        if let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(col.min(width - 1))) {
            *cell = '·';
        }
    }

    let counters: Vec<&str> = app.page().counters().iter().map(|c| c.text()).collect();
    let headline = format!("Banking for the way you live   {}", counters.join(" · "));
    for (idx, ch) in headline.chars().take(width).enumerate() {
        grid[0][idx] = ch;
    }

    let lines: Vec<Line> = grid
        .into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let text: String = row.into_iter().collect();
            if idx == 0 {
                Line::styled(text, Style::default().add_modifier(Modifier::BOLD))
            } else {
                Line::styled(text, Style::default().fg(colors.muted))
            }
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_cards<P: PreferenceStore>(f: &mut Frame, area: Rect, app: &App<P>, colors: &Palette) {
    let Some(stack) = app.page().card_stack() else {
        f.render_widget(
            Paragraph::new("no cards").block(boxed("cards")).alignment(Alignment::Center),
            area,
        );
        return;
    };

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(25),
                Constraint::Percentage(50),
                Constraint::Percentage(25),
            ]
            .as_ref(),
        )
        .split(area);

    let board = stack.surface();
    for (slot, role) in [CardRole::Prev, CardRole::Active, CardRole::Next].into_iter().enumerate() {
        let Some(card) = board.cards_with(role).first().copied() else {
            continue;
        };
        let (border, body) = if role == CardRole::Active {
            (
                Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
                Style::default().add_modifier(Modifier::BOLD),
            )
        } else {
            (Style::default().fg(colors.muted), Style::default().fg(colors.muted))
        };
        let mut lines = vec![
            Line::styled(format!("Card {}", card + 1), body),
            Line::styled(role.marker(), Style::default().fg(colors.muted)),
        ];
        if role == CardRole::Active && stack.is_animating() {
            lines.push(Line::styled("…", Style::default().fg(colors.muted)));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(role.marker());
        f.render_widget(
            Paragraph::new(lines).block(block).alignment(Alignment::Center),
            slots[slot],
        );
    }
}

/// Draws the indicator row and returns one hit rectangle per indicator.
fn render_indicators<P: PreferenceStore>(
    f: &mut Frame,
    area: Rect,
    app: &App<P>,
    colors: &Palette,
) -> Vec<Rect> {
    let Some(stack) = app.page().card_stack() else {
        return Vec::new();
    };
    let board = stack.surface();
    let count = board.len() as u16;
    let start = area.x + area.width.saturating_sub(count * 2) / 2;

    let mut rects = Vec::with_capacity(board.len());
    let mut spans = Vec::with_capacity(board.len());
    for idx in 0..board.len() {
        let (glyph, style) = if board.indicator(idx) {
            ("● ", Style::default().fg(colors.accent))
        } else {
            ("○ ", Style::default().fg(colors.muted))
        };
        spans.push(Span::styled(glyph, style));
        rects.push(Rect::new(start + idx as u16 * 2, area.y, 1, 1));
    }
    let row = Rect::new(start, area.y, area.width.saturating_sub(start - area.x), 1);
    f.render_widget(Paragraph::new(Line::from(spans)), row);
    rects
}

fn render_slider<P: PreferenceStore>(
    f: &mut Frame,
    area: Rect,
    app: &App<P>,
    colors: &Palette,
) -> Vec<Rect> {
    let block = boxed("slider");
    let inner = block.inner(area);
    f.render_widget(block, area);
    let Some(slider) = app.page().slider() else {
        return Vec::new();
    };
    if inner.height < 2 {
        return Vec::new();
    }

    let label = format!(
        "{} of {}",
        Slider::<TokioScheduler>::dot_label(slider.current()),
        slider.len()
    );
    f.render_widget(
        Paragraph::new(label).alignment(Alignment::Center),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    let count = slider.len() as u16;
    let start = inner.x + inner.width.saturating_sub(count * 2) / 2;
    let mut rects = Vec::new();
    let mut spans = Vec::new();
    for idx in 0..slider.len() {
        let style = if slider.is_active(idx) {
            Style::default().fg(colors.accent)
        } else {
            Style::default().fg(colors.muted)
        };
        spans.push(Span::styled("■ ", style));
        rects.push(Rect::new(start + idx as u16 * 2, inner.y + 1, 1, 1));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(start, inner.y + 1, inner.width.saturating_sub(start - inner.x), 1),
    );
    rects
}

fn render_tabs<P: PreferenceStore>(f: &mut Frame, area: Rect, app: &App<P>, colors: &Palette) {
    let Some(tabs) = app.page().tabs() else {
        f.render_widget(boxed("operations"), area);
        return;
    };
    let titles: Vec<Line> = tabs
        .ids()
        .iter()
        .enumerate()
        .map(|(idx, id)| Line::from(format!("{} · {id}", idx + 1)))
        .collect();
    let block = boxed("operations");
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }
    f.render_widget(
        Tabs::new(titles)
            .select(tabs.active_index())
            .highlight_style(Style::default().fg(colors.accent).add_modifier(Modifier::BOLD)),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );
    if inner.height > 1 {
        f.render_widget(
            Paragraph::new(format!("content: {}", TabPanel::content_class(tabs.active_id())))
                .style(Style::default().fg(colors.muted)),
            Rect::new(inner.x, inner.y + 1, inner.width, 1),
        );
    }
}

fn render_progress<P: PreferenceStore>(f: &mut Frame, area: Rect, app: &App<P>, colors: &Palette) {
    let scroll = app.page().scroll();
    let section = app.document().section_at(app.scroll_top()).unwrap_or("top");
    let mut title = format!("scroll · {section}");
    if scroll.back_to_top_visible() {
        title.push_str(" · Home ↑");
    }
    f.render_widget(
        Gauge::default()
            .block(boxed(&title))
            .gauge_style(Style::default().fg(colors.accent))
            .percent(scroll.progress().clamp(0.0, 100.0) as u16),
        area,
    );
}

fn render_newsletter<P: PreferenceStore>(f: &mut Frame, area: Rect, app: &App<P>, colors: &Palette) {
    let form = app.page().newsletter();
    let editing = app.mode() == InputMode::Email;
    let mut input = form.email().to_string();
    if editing {
        input.push('▏');
    }
    let mut lines = vec![Line::from(vec![
        Span::styled("email: ", Style::default().fg(colors.muted)),
        Span::raw(input),
    ])];
    if let Some(hint) = form.hint() {
        let color = match hint.tone {
            HintTone::Error => Color::LightRed,
            HintTone::Pending => colors.muted,
            HintTone::Success => Color::LightGreen,
        };
        lines.push(Line::styled(hint.text.clone(), Style::default().fg(color)));
    }
    let title = if editing { "newsletter (editing)" } else { "newsletter" };
    f.render_widget(
        Paragraph::new(lines).block(boxed(title)).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_status<P: PreferenceStore>(f: &mut Frame, area: Rect, app: &App<P>, colors: &Palette) {
    let page = app.page();
    let line = if let Some(toast) = page.toasts().current() {
        let color = match toast.kind {
            ToastKind::Success => Color::LightGreen,
            ToastKind::Error => Color::LightRed,
        };
        Line::styled(toast.message.clone(), Style::default().fg(color).add_modifier(Modifier::BOLD))
    } else if let Some(url) = app.history().navigation() {
        Line::styled(format!("navigated to {url}"), Style::default().fg(Color::Yellow))
    } else {
        Line::styled(HELP, Style::default().fg(colors.muted))
    };
    f.render_widget(Paragraph::new(line).block(boxed("status")), area);
}
