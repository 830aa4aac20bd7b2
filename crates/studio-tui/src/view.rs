//! State-to-terminal projection.
//!
//! Pure rendering: every function here maps a session snapshot plus UI
//! context to widgets. Nothing in this module mutates state, so the layout
//! logic is testable without a live terminal.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use studio_core::persona::InfluencerConcept;
use studio_core::state::{GeneratedImage, SessionState};

use crate::app::FocusField;

const EYEBROW: &str = "AI CREATIVE SUITE";
const TAGLINE: &str = "Generate image concepts and AI influencer personas from one prompt.";
const IMAGES_EMPTY_HINT: &str = "Run generation to preview three visual concepts.";
const CONCEPTS_EMPTY_HINT: &str = "Influencer personas appear after image generation.";
const TRIGGER_IDLE_LABEL: &str = "Create Images & AI Influencers";
const TRIGGER_BUSY_LABEL: &str = "Generating concepts...";

/// UI-side context the renderer needs besides the session snapshot.
pub struct ViewContext<'a> {
    pub brand_name: &'a str,
    pub focus: FocusField,
    pub prompt: &'a str,
    /// Cursor position in the prompt, in characters.
    pub cursor: usize,
}

/// Projects the whole session state into the frame.
pub fn render(frame: &mut Frame, state: &SessionState, ctx: &ViewContext) {
    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(12),
        Constraint::Length(3),
    ])
    .split(frame.area());

    render_header(frame, chunks[0], ctx.brand_name);

    let body =
        Layout::horizontal([Constraint::Percentage(42), Constraint::Percentage(58)]).split(chunks[1]);
    render_form(frame, body[0], state, ctx);

    let output =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(body[1]);
    render_images(frame, output[0], state);
    render_concepts(frame, output[1], state);

    render_footer(frame, chunks[2], state);
}

fn render_header(frame: &mut Frame, area: Rect, brand_name: &str) {
    let lines = vec![
        Line::from(Span::styled(
            EYEBROW,
            Style::default().fg(Color::Magenta),
        )),
        Line::from(Span::styled(
            brand_name.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::DarkGray))),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

fn render_form(frame: &mut Frame, area: Rect, state: &SessionState, ctx: &ViewContext) {
    let block = Block::default()
        .title(" Creative Input ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .split(inner);

    render_prompt(frame, fields[0], ctx);
    render_select(
        frame,
        fields[1],
        " Primary Platform ",
        &state.platform.to_string(),
        ctx.focus == FocusField::Platform,
    );
    render_select(
        frame,
        fields[2],
        " Niche ",
        &state.niche.to_string(),
        ctx.focus == FocusField::Niche,
    );
    render_trigger(frame, fields[3], state, ctx.focus == FocusField::Generate);
}

fn render_prompt(frame: &mut Frame, area: Rect, ctx: &ViewContext) {
    let focused = ctx.focus == FocusField::Prompt;
    let block = Block::default()
        .title(" Image Prompt ")
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    let line = if focused {
        prompt_line_with_cursor(ctx.prompt, ctx.cursor)
    } else {
        Line::from(Span::raw(ctx.prompt.to_string()))
    };

    let paragraph = Paragraph::new(line).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}

/// Splits the prompt at the cursor and renders the character under it in
/// reverse video, so the edit point stays visible without a terminal cursor.
fn prompt_line_with_cursor(prompt: &str, cursor: usize) -> Line<'static> {
    let before: String = prompt.chars().take(cursor).collect();
    let at: String = prompt
        .chars()
        .nth(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = prompt.chars().skip(cursor + 1).collect();

    Line::from(vec![
        Span::raw(before),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ])
}

fn render_select(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let content = if focused {
        Line::from(vec![
            Span::styled("◂ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▸", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(Span::raw(value.to_string()))
    };

    let select = Paragraph::new(content).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(border_style(focused)),
    );
    frame.render_widget(select, area);
}

fn render_trigger(frame: &mut Frame, area: Rect, state: &SessionState, focused: bool) {
    let label = trigger_label(state.generating);
    let style = if state.generating || !state.can_generate() {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let trigger = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        );
    frame.render_widget(trigger, area);
}

fn render_images(frame: &mut Frame, area: Rect, state: &SessionState) {
    let block = Block::default()
        .title(" Generated Image Concepts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.images.is_empty() {
        render_placeholder(frame, inner, IMAGES_EMPTY_HINT);
        return;
    }

    let columns = card_columns(inner, state.images.len());
    for (image, column) in state.images.iter().zip(columns.iter()) {
        render_image_card(frame, *column, image);
    }
}

fn render_image_card(frame: &mut Frame, area: Rect, image: &GeneratedImage) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            image.prompt.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            data_url_summary(&image.data_url),
            Style::default().fg(Color::Green),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(format!(" {} ", image.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(card, area);
}

fn render_concepts(frame: &mut Frame, area: Rect, state: &SessionState) {
    let block = Block::default()
        .title(" AI Influencer Concepts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.concepts.is_empty() {
        render_placeholder(frame, inner, CONCEPTS_EMPTY_HINT);
        return;
    }

    let columns = card_columns(inner, state.concepts.len());
    for (concept, column) in state.concepts.iter().zip(columns.iter()) {
        let card = Paragraph::new(concept_card_lines(concept))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {} ", concept.name))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(card, *column);
    }
}

/// Card body for one persona: followers badge, placement, tone, bio.
fn concept_card_lines(concept: &InfluencerConcept) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("{} followers", concept.followers),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(Span::styled(
            format!("{} • {}", concept.platform, concept.niche),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!("Tone: {}", concept.tone),
            Style::default().fg(Color::DarkGray),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            concept.bio.clone(),
            Style::default().fg(Color::Gray),
        )),
    ]
}

fn render_footer(frame: &mut Frame, area: Rect, state: &SessionState) {
    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(":fields  "),
        Span::styled("◂ ▸", Style::default().fg(Color::Yellow)),
        Span::raw(":options  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(":generate  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(":quit"),
    ];
    if state.generating {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            TRIGGER_BUSY_LABEL,
            Style::default().fg(Color::Magenta),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(footer, area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, hint: &str) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    // Push the hint toward the vertical center of the pane.
    let padded = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Min(1),
        Constraint::Percentage(40),
    ])
    .split(area);
    frame.render_widget(placeholder, padded[1]);
}

fn card_columns(area: Rect, count: usize) -> Vec<Rect> {
    let share = 100 / count.max(1) as u16;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Percentage(share)).collect();
    Layout::horizontal(constraints).split(area).to_vec()
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn trigger_label(generating: bool) -> &'static str {
    if generating {
        TRIGGER_BUSY_LABEL
    } else {
        TRIGGER_IDLE_LABEL
    }
}

/// Compact one-line description of a preview payload; the terminal cannot
/// raster the bitmap, so the scheme and size stand in for it.
fn data_url_summary(data_url: &str) -> String {
    let scheme = data_url.split(',').next().unwrap_or(data_url);
    format!("{scheme} · {} chars", data_url.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::catalog::{Niche, Platform, Tone};
    use studio_core::preview::preview_data_url;

    #[test]
    fn test_trigger_label_per_state() {
        assert_eq!(trigger_label(false), "Create Images & AI Influencers");
        assert_eq!(trigger_label(true), "Generating concepts...");
    }

    #[test]
    fn test_data_url_summary_keeps_scheme() {
        let url = preview_data_url("summary check", 0);
        let summary = data_url_summary(&url);
        assert!(summary.starts_with("data:image/svg+xml;charset=UTF-8 ·"));
        assert!(summary.ends_with("chars"));
    }

    #[test]
    fn test_concept_card_lines_contents() {
        let concept = InfluencerConcept {
            name: "BoldNova 3".to_string(),
            niche: Niche::TechGaming,
            platform: Platform::TikTok,
            tone: Tone::Bold,
            bio: "bio text".to_string(),
            followers: "360K".to_string(),
        };

        let lines = concept_card_lines(&concept);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(text[0], "360K followers");
        assert_eq!(text[1], "TikTok • Tech & Gaming");
        assert_eq!(text[2], "Tone: Bold");
        assert_eq!(text[4], "bio text");
    }

    #[test]
    fn test_prompt_cursor_splits_characters() {
        let line = prompt_line_with_cursor("abc", 1);
        assert_eq!(line.to_string(), "abc");
        let line = prompt_line_with_cursor("abc", 3);
        // Cursor past the end renders as a trailing space cell.
        assert_eq!(line.to_string(), "abc ");
    }
}
