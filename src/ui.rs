//! Terminal views - one draw function per session screen

use ratatui::{prelude::*, widgets::*};

use crate::app::session::Screen;
use crate::constants::{APP_NAME, APP_TAGLINE};
use crate::messages::ui_events::{InputField, InputMode};
use crate::messages::RenderState;
use crate::models::{BackendStatus, Feedback, Question};

const ACCENT: Color = Color::Rgb(99, 102, 241);

/// Draw the whole frame from a render snapshot
pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    let error_height = if state.error.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Header
            Constraint::Length(error_height), // Error banner
            Constraint::Min(0),               // Screen
            Constraint::Length(1),            // Status bar
        ])
        .split(area);

    draw_header(f, chunks[0]);
    if let Some(error) = &state.error {
        draw_error(f, error, chunks[1]);
    }

    match &state.screen {
        Screen::Input => draw_input_screen(f, state, chunks[2]),
        Screen::Questions => draw_questions_screen(f, state, chunks[2]),
        Screen::Practice => draw_practice_screen(f, state, chunks[2]),
        Screen::Feedback(feedback) => draw_feedback_screen(f, state, feedback, chunks[2]),
        Screen::Complete => draw_complete_screen(f, state, chunks[2]),
    }

    draw_status_bar(f, state, chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled(" * ", Style::default().fg(ACCENT)),
        Span::styled(APP_NAME, Style::default().bold()),
    ]);
    let halves = split_row(inner);
    f.render_widget(Paragraph::new(title), halves[0]);
    f.render_widget(
        Paragraph::new(Line::from(format!("{} ", APP_TAGLINE)).right_aligned())
            .style(Style::default().fg(Color::DarkGray)),
        halves[1],
    );
}

fn draw_error(f: &mut Frame, error: &str, area: Rect) {
    let banner = Paragraph::new(error)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(banner, area);
}

// ============================================================================
// Input screen
// ============================================================================

fn draw_input_screen(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Intro
            Constraint::Length(3), // Title
            Constraint::Length(3), // Level
            Constraint::Min(5),    // Description
            Constraint::Length(3), // Action
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled("Get Started", Style::default().bold())),
        Line::from(Span::styled(
            "Enter the job details to generate tailored interview questions",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(intro, chunks[0]);

    let editing = |field: InputField| state.focus == field && state.input_mode == InputMode::Editing;

    let title_text = placeholder(&state.job.title, "e.g., Frontend Developer");
    let title = Paragraph::new(title_text).block(field_block(
        " Job Title ",
        state.focus == InputField::Title,
        editing(InputField::Title),
    ));
    f.render_widget(title, chunks[1]);

    let level = Paragraph::new(Line::from(vec![
        Span::raw("< "),
        Span::styled(state.job.experience_level.label(), Style::default().bold()),
        Span::raw(" >"),
    ]))
    .block(field_block(
        " Experience Level (←/→) ",
        state.focus == InputField::Level,
        false,
    ));
    f.render_widget(level, chunks[2]);

    let description_text = placeholder(&state.job.description, "Paste the job description here...");
    let description = Paragraph::new(description_text)
        .block(field_block(
            " Job Description ",
            state.focus == InputField::Description,
            editing(InputField::Description),
        ))
        .wrap(Wrap { trim: false });
    f.render_widget(description, chunks[3]);

    let action = if state.is_loading {
        "Generating Questions..."
    } else {
        "g  Generate Interview Questions"
    };
    f.render_widget(action_button(action, state.is_loading), chunks[4]);

    if editing(InputField::Title) {
        set_cursor(f, &state.job.title, state.cursor_position, chunks[1]);
    } else if editing(InputField::Description) {
        set_cursor(f, &state.job.description, state.cursor_position, chunks[3]);
    }
}

// ============================================================================
// Questions screen
// ============================================================================

fn draw_questions_screen(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Intro
            Constraint::Min(3),    // List
            Constraint::Length(3), // Action
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled("Your Interview Questions", Style::default().bold())),
        Line::from(Span::styled(
            "Ready to practice? Let's start with question 1",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(intro, chunks[0]);

    let mut lines: Vec<Line> = Vec::new();
    for (idx, question) in state.questions.iter().enumerate() {
        let mut header = vec![Span::styled(
            format!("Question {}  ", idx + 1),
            Style::default().fg(ACCENT).bold(),
        )];
        header.extend(question_tags(question));
        lines.push(Line::from(header));
        lines.push(Line::from(question.text.as_str()));
        lines.push(Line::default());
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No questions were generated. Press 'r' to start over.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let list = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Questions (↑/↓ scroll) "))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(list, chunks[1]);

    let ready = !state.questions.is_empty();
    f.render_widget(action_button("Enter  Start Practice Session", !ready), chunks[2]);
}

// ============================================================================
// Practice screen
// ============================================================================

fn draw_practice_screen(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Position + progress
            Constraint::Length(1), // Gauge
            Constraint::Length(6), // Question
            Constraint::Min(5),    // Answer
            Constraint::Length(3), // Action
        ])
        .split(area);

    let total = state.questions.len();
    let progress = state.progress.unwrap_or(0);
    let position = Line::from(Span::styled(
        format!("Question {} of {}", state.index + 1, total),
        Style::default().bold(),
    ));
    let halves = split_row(chunks[0]);
    f.render_widget(Paragraph::new(position), halves[0]);
    f.render_widget(
        Paragraph::new(Line::from(format!("{}% Complete", progress)).right_aligned())
            .style(Style::default().fg(Color::Gray)),
        halves[1],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(ACCENT))
        .percent(progress.min(100) as u16)
        .label("");
    f.render_widget(gauge, chunks[1]);

    let question_lines = match state.current_question() {
        Some(question) => vec![
            Line::from(question_tags(question)),
            Line::default(),
            Line::from(Span::styled(question.text.as_str(), Style::default().bold())),
        ],
        None => vec![Line::from(Span::styled(
            format!("Question {} is not available", state.index + 1),
            Style::default().fg(Color::Red),
        ))],
    };
    let question = Paragraph::new(question_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(question, chunks[2]);

    let editing = state.input_mode == InputMode::Editing;
    let answer = Paragraph::new(placeholder(&state.answer, "Type your answer here..."))
        .block(field_block(" Your Answer (e:edit, Esc:done) ", true, editing))
        .wrap(Wrap { trim: false });
    f.render_widget(answer, chunks[3]);

    let action = if state.is_loading {
        "Analyzing..."
    } else {
        "s  Get Feedback"
    };
    f.render_widget(action_button(action, state.is_loading), chunks[4]);

    if editing {
        set_cursor(f, &state.answer, state.cursor_position, chunks[3]);
    }
}

// ============================================================================
// Feedback screen
// ============================================================================

fn draw_feedback_screen(f: &mut Frame, state: &RenderState, feedback: &Feedback, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Score
            Constraint::Min(5),    // Strengths / improvements
            Constraint::Min(5),    // Sample answer
            Constraint::Length(3), // Actions
        ])
        .split(area);

    let score = Paragraph::new(vec![
        Line::from(Span::styled("Your Feedback", Style::default().bold())),
        Line::from(vec![
            Span::styled(format!("{}/10", feedback.score), Style::default().fg(ACCENT).bold()),
            Span::styled("  Overall Score", Style::default().fg(Color::Gray)),
        ]),
    ]);
    f.render_widget(score, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    f.render_widget(
        bullet_list(" ✓ Strengths ", &feedback.strengths, Color::Green),
        columns[0],
    );
    f.render_widget(
        bullet_list(" → Areas to Improve ", &feedback.improvements, Color::Yellow),
        columns[1],
    );

    let sample = Paragraph::new(feedback.sample_answer.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" Sample Strong Answer (↑/↓ scroll) "),
        )
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(sample, chunks[2]);

    let next = if state.is_last_question {
        "Enter  Complete Session"
    } else {
        "Enter  Next Question →"
    };
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(chunks[3]);
    f.render_widget(action_button(next, false), buttons[0]);
    f.render_widget(action_button("r  Start Over", true), buttons[1]);
}

// ============================================================================
// Complete screen
// ============================================================================

fn draw_complete_screen(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup = centered_rect(70, 50, area);
    let text = vec![
        Line::from(Span::styled("*", Style::default().fg(Color::Green).bold())),
        Line::default(),
        Line::from(Span::styled("Great Job!", Style::default().bold())),
        Line::default(),
        Line::from(format!(
            "You've completed all {} interview questions.",
            state.questions.len()
        )),
        Line::from("Keep practicing to improve your skills!"),
        Line::default(),
        Line::from(Span::styled(
            "Enter  Practice Another Job",
            Style::default().fg(ACCENT).bold(),
        )),
    ];
    let done = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(done, popup);
}

// ============================================================================
// Chrome
// ============================================================================

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = if state.is_loading {
        " Waiting for the coach... | r:start over | q:quit "
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | arrows:move | Enter:newline "
    } else {
        match state.screen {
            Screen::Input => " Tab:field | e:edit | ←/→:level | g:generate | ?:help | q:quit ",
            Screen::Questions => " Enter:start practice | r:start over | ?:help | q:quit ",
            Screen::Practice => " e:edit answer | s:submit | r:start over | ?:help | q:quit ",
            Screen::Feedback(_) => " Enter:next | r:start over | ?:help | q:quit ",
            Screen::Complete => " Enter:practice another job | q:quit ",
        }
    };

    let backend = format!("{} ({}) ", state.backend_status.label(), state.api_url);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(backend.chars().count() as u16),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(backend).style(Style::default().fg(backend_color(state.backend_status))),
        chunks[1],
    );
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 INTERVIEWIQ - Keyboard Shortcuts

 JOB DETAILS
   Tab / Shift+Tab    Next / previous field
   e / Enter          Edit field
   ← / →              Change experience level
   g                  Generate questions

 PRACTICE
   Enter / s          Start practice (question list)
   e                  Edit your answer
   Esc                Stop editing
   s                  Submit answer for feedback
   Enter / n          Next question (feedback)
   ↑ / ↓              Scroll

 GENERAL
   r                  Start over
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

// ============================================================================
// Helpers
// ============================================================================

fn field_block(title: &str, is_focused: bool, is_editing: bool) -> Block<'_> {
    let border_style = if is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn placeholder<'a>(text: &'a str, hint: &'a str) -> Text<'a> {
    if text.is_empty() {
        Text::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
    } else {
        Text::from(text)
    }
}

fn action_button(label: &str, disabled: bool) -> Paragraph<'_> {
    let style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(ACCENT).bold()
    };
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style))
}

fn question_tags(question: &Question) -> Vec<Span<'_>> {
    vec![
        Span::styled(
            format!("[{}]", question.category),
            Style::default().fg(Color::Magenta),
        ),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", question.difficulty),
            Style::default().fg(Color::Blue),
        ),
    ]
}

fn bullet_list<'a>(title: &'a str, items: &'a [String], color: Color) -> Paragraph<'a> {
    let lines: Vec<Line> = items
        .iter()
        .map(|item| Line::from(format!("• {}", item)))
        .collect();
    Paragraph::new(lines)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title),
        )
        .wrap(Wrap { trim: true })
}

fn backend_color(status: BackendStatus) -> Color {
    match status {
        BackendStatus::Online => Color::Green,
        BackendStatus::Offline => Color::Red,
        BackendStatus::Unknown => Color::DarkGray,
    }
}

/// Row and column of a byte cursor inside possibly multi-line text
pub fn cursor_offset(text: &str, cursor: usize) -> (u16, u16) {
    let before = &text[..cursor.min(text.len())];
    let row = before.matches('\n').count();
    let col = before
        .rsplit('\n')
        .next()
        .map(|line| line.chars().count())
        .unwrap_or(0);
    (col as u16, row as u16)
}

fn set_cursor(f: &mut Frame, text: &str, cursor: usize, area: Rect) {
    let (col, row) = cursor_offset(text, cursor);
    let max_x = area.x + area.width.saturating_sub(2);
    let max_y = area.y + area.height.saturating_sub(2);
    let cursor_x = (area.x + col + 1).min(max_x);
    let cursor_y = (area.y + row + 1).min(max_y);
    f.set_cursor_position(Position::new(cursor_x, cursor_y));
}

/// Left and right halves of a single row
fn split_row(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
