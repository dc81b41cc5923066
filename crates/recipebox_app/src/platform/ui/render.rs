use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use recipebox_core::{AppViewModel, RecipeCardView, SortMode};

use super::constants::{HEART_EMPTY, HEART_FILLED, HELP_LINE};
use super::layout;

/// Draws the whole page from the view model. Every redraw rebuilds all
/// cards from scratch; nothing is patched in place.
///
/// `search_input` is the host-side echo of the search field, which may
/// run ahead of the committed query while the debounce window is open.
/// `selected` is the host-local card selection.
pub(crate) fn draw(frame: &mut Frame, view: &AppViewModel, search_input: &str, selected: usize) {
    let (header_area, cards_area, help_area) = layout::split(frame.area());

    frame.render_widget(header(view, search_input), header_area);

    let items: Vec<ListItem> = view.cards.iter().map(card_item).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Recipes "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut list_state = ListState::default();
    if !view.cards.is_empty() {
        list_state.select(Some(selected.min(view.cards.len() - 1)));
    }
    frame.render_stateful_widget(list, cards_area, &mut list_state);

    frame.render_widget(
        Paragraph::new(HELP_LINE).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn header(view: &AppViewModel, search_input: &str) -> Paragraph<'static> {
    let sort_label = match view.sort_mode {
        SortMode::None => "none",
        SortMode::Title => "title",
    };
    let favorites_box = if view.favorites_only { "[x]" } else { "[ ]" };

    let lines = vec![
        Line::from(vec![
            Span::styled("Search: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(search_input.to_string()),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::raw(format!(
                "Sort: {sort_label}   Favorites only: {favorites_box}   "
            )),
            Span::styled(view.counter.clone(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Recipebox "))
}

fn card_item(card: &RecipeCardView) -> ListItem<'static> {
    let (heart, heart_style) = if card.favorited {
        (HEART_FILLED, Style::default().fg(Color::Red))
    } else {
        (HEART_EMPTY, Style::default().fg(Color::DarkGray))
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{heart} "), heart_style),
            Span::styled(
                card.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            card.ingredients_line.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("[{}]", card.details_label),
            Style::default().fg(Color::Cyan),
        )),
    ];
    if card.expanded {
        lines.push(Line::from(card.details.clone()));
    }
    lines.push(Line::default());

    ListItem::new(lines)
}
