//! Reusable UI helpers: layout, reveal timing, key hint legends

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};
use std::time::Duration;

/// Window during which the "no" icon wobbles
const SHAKE_START_MS: u64 = 200;
const SHAKE_END_MS: u64 = 700;
const SHAKE_PATTERN: [i16; 6] = [0, -2, 2, -2, 2, 0];

/// A `width` x `height` rect centered in `r`, shrunk to fit
pub fn centered_box(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Whether an element with the given entrance delay is visible yet
pub fn revealed(elapsed: Duration, delay_ms: u64) -> bool {
    elapsed >= Duration::from_millis(delay_ms)
}

/// Horizontal offset for the wobble animation
pub fn shake_offset(elapsed: Duration) -> i16 {
    let ms = elapsed.as_millis() as u64;
    if !(SHAKE_START_MS..SHAKE_END_MS).contains(&ms) {
        return 0;
    }
    let step = (SHAKE_END_MS - SHAKE_START_MS) / SHAKE_PATTERN.len() as u64;
    let idx = ((ms - SHAKE_START_MS) / step) as usize;
    SHAKE_PATTERN[idx.min(SHAKE_PATTERN.len() - 1)]
}

/// Pad text so that, when centered, it sits `offset` columns off center
pub fn shifted(text: &str, offset: i16) -> String {
    let pad = " ".repeat(offset.unsigned_abs() as usize * 2);
    if offset > 0 {
        format!("{}{}", pad, text)
    } else {
        format!("{}{}", text, pad)
    }
}

/// Footer legend: `key action │ key action`
pub fn key_hints(hints: &[(&str, &str)], key_color: Color, text_color: Color) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        spans.push(Span::styled(key.to_string(), Style::default().fg(key_color)));
        let sep = if i + 1 < hints.len() { " │ " } else { "" };
        spans.push(Span::styled(
            format!(" {}{}", action, sep),
            Style::default().fg(text_color),
        ));
    }
    Line::from(spans)
}
