use std::cmp::min;

use ratatui::layout::Rect;

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// Header counter text, e.g. "no tasks", "1 task", "4 tasks (1 done)".
pub fn format_counter(total: usize, done: usize) -> String {
    let base = match total {
        0 => return String::from("no tasks"),
        1 => String::from("1 task"),
        n => format!("{n} tasks"),
    };
    if done > 0 {
        format!("{base} ({done} done)")
    } else {
        base
    }
}
