//! The game screen: play field, score, overlays, status bar and info panel.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_status_bar, stamp_centered,
};
use super::play_field::{fit_field, render_lines, FieldView};
use crate::assets::{Assets, ScoreFont};
use crate::game::{GameSession, Phase};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Y of the score, in world units from the top.
const SCORE_Y: f64 = 50.0;

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, session: &GameSession, assets: &Assets) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 22);

    let config = &session.config;
    let field = fit_field(layout.content, config.screen_width, config.screen_height);
    if field.width > 0 && field.height > 0 {
        let view = FieldView::new(field, config.screen_width, config.screen_height);
        frame.render_widget(Paragraph::new(render_lines(session, assets, &view)), field);
        render_score(frame, &view, session.score, &assets.font);
        render_phase_overlay(frame, &view, session);
    }

    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);
}

fn render_score(frame: &mut Frame, view: &FieldView, score: u32, font: &ScoreFont) {
    let lines = match font {
        ScoreFont::Plain => vec![format!("Score: {score}")],
        ScoreFont::Glyphs { .. } => font.render(&score.to_string()),
    };
    let top = view.row_for(SCORE_Y) - (lines.len() as i32) / 2;
    let style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    stamp_centered(frame.buffer_mut(), view.area, top, &lines, style);
}

/// Title text before the first run, results after a crash.
fn render_phase_overlay(frame: &mut Frame, view: &FieldView, session: &GameSession) {
    // (text, offset from the field's vertical center in world units)
    let messages: Vec<(String, f64)> = match session.phase {
        Phase::Playing => return,
        Phase::Idle => vec![
            ("Flappy Bird".to_string(), -50.0),
            ("Press SPACE to Start".to_string(), 0.0),
        ],
        Phase::GameOver => vec![
            ("GAME OVER!".to_string(), -50.0),
            (format!("Score: {}", session.score), 0.0),
            (format!("High Score: {}", session.high_score), 40.0),
            ("Press SPACE to Restart".to_string(), 80.0),
        ],
    };

    let center = session.config.screen_height / 2.0;
    let style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    for (text, offset) in messages {
        let row = view.row_for(center + offset);
        stamp_centered(frame.buffer_mut(), view.area, row, &[text], style);
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &GameSession) {
    let (text, color) = match session.phase {
        Phase::Idle => ("Press Space to start!".to_string(), Color::Yellow),
        Phase::Playing => (format!("Score: {}", session.score), Color::Green),
        Phase::GameOver => ("Crashed! Press Space to fly again".to_string(), Color::Red),
    };
    let action = if session.phase == Phase::Playing {
        "Flap"
    } else {
        "Start"
    };
    render_status_bar(
        frame,
        area,
        &text,
        color,
        &[("[Space/Up/Enter]", action), ("[Esc/Q]", "Quit")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let phase = match session.phase {
        Phase::Idle => ("Ready", Color::Yellow),
        Phase::Playing => ("Flying", Color::Green),
        Phase::GameOver => ("Crashed", Color::Red),
    };

    let lines = vec![
        Line::from(Span::styled(
            " Flappy Bird ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.high_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" State: ", Style::default().fg(Color::DarkGray)),
            Span::styled(phase.0, Style::default().fg(phase.1)),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.pipes.len()),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
