//! Terminal view of the economy.

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::app::{Tab, UpgradeRow, VibecodeGame};
use crate::economy::catalog::{milestones, LeveledUpgrade, SubscriptionTier, ToolDef, UpgradeDef};
use crate::economy::milestones::{is_completed, progress};
use crate::economy::unlock::{all_unlocked, next_locked};
use crate::format::{format_duration, format_number, format_rate};
use crate::generator::growth::GrowthStatus;

pub fn render(game: &VibecodeGame, f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // currencies
            Constraint::Length(1), // tab bar
            Constraint::Min(6),    // content
            Constraint::Length(1), // generation status
            Constraint::Length(3), // help
        ])
        .split(area);

    render_header(game, f, chunks[0]);
    render_tab_bar(game, f, chunks[1]);
    match game.tab {
        Tab::Tools => render_tools(game, f, chunks[2]),
        Tab::Subscriptions => render_subscriptions(game, f, chunks[2]),
        Tab::Upgrades => render_upgrades(game, f, chunks[2]),
        Tab::Milestones => render_milestones(game, f, chunks[2]),
    }
    render_growth_status(game, f, chunks[3]);
    render_help(game, f, chunks[4]);
}

fn render_header(game: &VibecodeGame, f: &mut Frame, area: Rect) {
    let state = &game.state;
    let income = state.passive_income(&game.catalog);
    let bold = |c: Color| Style::default().fg(c).add_modifier(Modifier::BOLD);

    let currencies = Line::from(vec![
        Span::styled(format!(" 💻 {} VB", format_number(state.currencies.vibe_codes.floor())), bold(Color::Green)),
        Span::styled(format!(" ({})", format_rate(income.vibe_codes)), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("  🔤 {} PT", format_number(state.currencies.prompt_tokens)), bold(Color::Cyan)),
        Span::styled(format!(" ({})", format_rate(income.prompt_tokens)), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("  🛠 {} DP", format_number(state.currencies.dev_points)), bold(Color::Magenta)),
        Span::styled(format!(" ({})", format_rate(income.dev_points)), Style::default().fg(Color::DarkGray)),
    ]);

    let click_style = match game.last_click {
        Some(c) if c.golden => bold(Color::Yellow),
        Some(c) if c.crit => bold(Color::Red),
        _ => Style::default().fg(Color::Yellow),
    };
    let mut click = vec![
        Span::styled(
            format!(" [C] +{} per click", format_number(state.effective_click_value())),
            click_style,
        ),
        Span::styled(
            format!("  crit {:.0}% x{:.1}", state.crit_chance() * 100.0, state.crit_multiplier()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("  clicks {}", state.stats.total_clicks),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if state.demo_mode {
        click.push(Span::styled("  DEMO", bold(Color::Red)));
    }

    let message = Line::from(Span::styled(
        format!(" {}", game.message.as_deref().unwrap_or("")),
        Style::default().fg(if game.confirm_reset { Color::Red } else { Color::White }),
    ));

    let widget = Paragraph::new(vec![currencies, Line::from(click), message]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Vibecode Clicker "),
    );
    f.render_widget(widget, area);
}

fn render_tab_bar(game: &VibecodeGame, f: &mut Frame, area: Rect) {
    let spans: Vec<Span> = Tab::all()
        .iter()
        .map(|tab| {
            let label = format!(" [{}] {} ", tab.key(), tab.title());
            if *tab == game.tab {
                Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(label, Style::default().fg(Color::Cyan))
            }
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn cursor_style(selected: bool, affordable: bool) -> Style {
    let base = if affordable {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if selected {
        base.bg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        base
    }
}

fn tier_color(tier: u8) -> Color {
    match tier {
        1 => Color::Green,
        2 => Color::Cyan,
        _ => Color::Magenta,
    }
}

fn tool_line(game: &VibecodeGame, tool: &ToolDef, selected: bool) -> ListItem<'static> {
    let state = &game.state;
    let cost = state.tool_cost(&game.catalog, &tool.id);
    let affordable = state.currencies.vibe_codes >= cost;
    let count = state.owned_count(&tool.id);
    let marker = if selected { "▶" } else { " " };
    ListItem::new(Line::from(vec![
        Span::styled(format!("{marker} {} ", tool.icon), Style::default()),
        Span::styled(format!("T{} ", tool.tier), Style::default().fg(tier_color(tool.tier))),
        Span::styled(format!("{:<22}", tool.name), cursor_style(selected, affordable)),
        Span::styled(format!(" x{count:<4}"), Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {:>8} VB", format_number(cost)),
            Style::default().fg(if affordable { Color::Green } else { Color::Red }),
        ),
        Span::styled(
            format!("  {}", format_rate(state.tool_production(&game.catalog, &tool.id))),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

fn render_tools(game: &VibecodeGame, f: &mut Frame, area: Rect) {
    let unlocked = all_unlocked(&game.catalog, &game.state);
    let mut items: Vec<ListItem> = unlocked
        .iter()
        .enumerate()
        .map(|(i, tool)| tool_line(game, tool, i == game.cursor))
        .collect();

    if let Some(locked) = next_locked(&game.catalog, &game.state) {
        items.push(ListItem::new(Line::from(Span::styled(
            format!(
                "  🔒 {} ({} VB) - buy the previous tool to unlock",
                locked.name,
                format_number(locked.base_cost)
            ),
            Style::default().fg(Color::DarkGray),
        ))));
    }

    let title = format!(
        " Tools {}/{} ({} generated) ",
        game.state.distinct_tools_owned(),
        game.catalog.len(),
        game.catalog.generated().len()
    );
    let list = List::new(scrolled(items, game.cursor, area.height)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(title),
    );
    f.render_widget(list, area);
}

/// Drops leading rows so the cursor stays inside a bordered list.
fn scrolled(items: Vec<ListItem<'static>>, cursor: usize, height: u16) -> Vec<ListItem<'static>> {
    let visible = height.saturating_sub(2) as usize;
    let skip = (cursor + 1).saturating_sub(visible);
    items.into_iter().skip(skip).collect()
}

fn render_subscriptions(game: &VibecodeGame, f: &mut Frame, area: Rect) {
    let state = &game.state;
    let rows = game.subscription_rows();

    let ladder: Vec<Span> = SubscriptionTier::all()
        .iter()
        .map(|t| {
            Span::styled(
                format!(
                    " {} x{} crit+{:.0}% ",
                    t.display_name(),
                    t.vb_multiplier(),
                    t.crit_chance() * 100.0
                ),
                Style::default().fg(Color::DarkGray),
            )
        })
        .collect();

    let mut items = vec![ListItem::new(Line::from(ladder))];
    if rows.is_empty() {
        items.push(ListItem::new(Span::styled(
            "  Buy a tool to subscribe to it.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (i, id) in rows.iter().enumerate() {
        let Some(tool) = game.catalog.get(id) else {
            continue;
        };
        let tier = state.subscription(id);
        let selected = i == game.cursor;
        let (next, affordable) = match (tier.next(), state.subscription_cost(id)) {
            (Some(next), Some(cost)) => (
                format!("→ {} for {} DP", next.display_name(), format_number(cost)),
                state.currencies.dev_points >= cost,
            ),
            _ => ("maxed".to_string(), false),
        };
        items.push(ListItem::new(Line::from(vec![
            Span::raw(format!("{} {} ", if selected { "▶" } else { " " }, tool.icon)),
            Span::styled(format!("{:<22}", tool.name), cursor_style(selected, affordable)),
            Span::styled(format!(" {:<8}", tier.display_name()), Style::default().fg(Color::Magenta)),
            Span::styled(
                format!(" {next}"),
                Style::default().fg(if affordable { Color::Green } else { Color::DarkGray }),
            ),
        ])));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Subscriptions "),
    );
    f.render_widget(list, area);
}

fn leveled_line(game: &VibecodeGame, upgrade: LeveledUpgrade, selected: bool) -> ListItem<'static> {
    let state = &game.state;
    let level = state.level(upgrade);
    let currency = upgrade.currency();
    let (price, affordable) = if state.at_max_level(upgrade) {
        ("MAX".to_string(), false)
    } else {
        let cost = state.leveled_cost(upgrade);
        (
            format!("{} {}", format_number(cost), currency.short_name()),
            state.currencies.get(currency) >= cost,
        )
    };
    let cap = upgrade
        .max_level()
        .map_or(String::new(), |max| format!("/{max}"));
    ListItem::new(Line::from(vec![
        Span::raw(if selected { "▶ " } else { "  " }),
        Span::styled(format!("{:<20}", upgrade.name()), cursor_style(selected, affordable)),
        Span::styled(format!(" Lv {level}{cap:<5}"), Style::default().fg(Color::Yellow)),
        Span::styled(format!(" {:<12}", upgrade.category().label()), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {price}"),
            Style::default().fg(if affordable { Color::Green } else { Color::Red }),
        ),
        Span::styled(format!("  {}", upgrade.effect_label()), Style::default().fg(Color::Gray)),
    ]))
}

fn one_time_line(game: &VibecodeGame, upgrade: &UpgradeDef, selected: bool) -> ListItem<'static> {
    let state = &game.state;
    let owned = state.owned_upgrades.contains(upgrade.id);
    let affordable = !owned && state.currencies.vibe_codes >= upgrade.cost;
    let price = if owned {
        "owned".to_string()
    } else {
        format!("{} VB", format_number(upgrade.cost))
    };
    ListItem::new(Line::from(vec![
        Span::raw(if selected { "▶ " } else { "  " }),
        Span::styled(format!("{:<20}", upgrade.name), cursor_style(selected, affordable)),
        Span::styled(format!(" {:<12}", upgrade.category.label()), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {price:<14}"),
            Style::default().fg(if owned { Color::Cyan } else if affordable { Color::Green } else { Color::Red }),
        ),
        Span::styled(format!(" {}", upgrade.description), Style::default().fg(Color::Gray)),
    ]))
}

fn render_upgrades(game: &VibecodeGame, f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = game
        .upgrade_rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| match row {
            UpgradeRow::Leveled(u) => leveled_line(game, u, i == game.cursor),
            UpgradeRow::OneTime(u) => one_time_line(game, u, i == game.cursor),
        })
        .collect();
    let list = List::new(scrolled(items, game.cursor, area.height)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Upgrades "),
    );
    f.render_widget(list, area);
}

fn render_milestones(game: &VibecodeGame, f: &mut Frame, area: Rect) {
    let state = &game.state;
    let items: Vec<ListItem> = milestones()
        .iter()
        .map(|m| {
            let done = is_completed(state, m.id);
            let (current, target) = progress(state, m);
            let ratio = if target > 0.0 { (current / target).clamp(0.0, 1.0) } else { 1.0 };
            let filled = (ratio * 10.0).round() as usize;
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled));
            ListItem::new(Line::from(vec![
                Span::styled(
                    if done { " ✔ " } else { "   " },
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("{:<26}", m.name),
                    if done {
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    },
                ),
                Span::styled(format!(" {bar} "), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{}/{}", format_number(current), format_number(target)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("  {}", m.description), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let title = format!(
        " Milestones {}/{}  x{:.2} ",
        state.completed_milestones.len(),
        milestones().len(),
        state.milestone_multiplier
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(title),
    );
    f.render_widget(list, area);
}

fn render_growth_status(game: &VibecodeGame, f: &mut Frame, area: Rect) {
    let (text, color) = match game.growth.status(game.now_ms) {
        GrowthStatus::Idle => (String::new(), Color::DarkGray),
        GrowthStatus::InFlight { tool_index } => (
            format!(" ⏳ Discovering tool #{}...", tool_index + 1),
            Color::Yellow,
        ),
        GrowthStatus::CoolingDown { remaining_ms } => (
            format!(" Next discovery in {}", format_duration(remaining_ms / 1000.0)),
            Color::DarkGray,
        ),
        GrowthStatus::Failed(e) => (format!(" ⚠ {e} [G] retry"), Color::Red),
    };
    let widget = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

fn render_help(game: &VibecodeGame, f: &mut Frame, area: Rect) {
    let text = if game.confirm_reset {
        "[Y] confirm reset  [any] cancel".to_string()
    } else {
        format!(
            "[C] click  [J/K] move  [B] buy  [1-4] tabs  [D] demo  [S] sound {}  [R] reset  saving in {}s",
            if game.state.settings.sound_enabled { "on" } else { "off" },
            game.seconds_to_autosave()
        )
    };
    let help = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(Color::DarkGray))))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    f.render_widget(help, area);
}
