use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates an input field block, with a visual cursor when focused
pub fn create_input_paragraph<'a>(input_buffer: &str, field_title: &str, focused: bool) -> Paragraph<'a> {
    let cursor_char = "█";
    let input_display = if focused {
        format!("{}{}", input_buffer, cursor_char)
    } else {
        input_buffer.to_string()
    };

    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    Paragraph::new(input_display)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

/// Creates a bordered button label
pub fn create_button_paragraph<'a>(label: &str, focused: bool) -> Paragraph<'a> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Paragraph::new(label.to_string())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Gray)),
        )
        .style(style)
        .alignment(Alignment::Center)
}
