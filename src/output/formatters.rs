//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a 0-100 closeness percentage
#[must_use]
pub fn closeness_bar(percent: u8, width: usize) -> String {
    create_progress_bar(f64::from(percent), 100.0, width)
}

/// "+12 pts" / "+1 pt"
#[must_use]
pub fn format_points(points: u32) -> String {
    if points == 1 {
        "+1 pt".to_string()
    } else {
        format!("+{points} pts")
    }
}
