// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sortlab CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `SORTLAB_THEME` first, then `COLORFGBG`, then defaults to dark. Color is
//! dropped entirely under `NO_COLOR` or when stdout is not a TTY, so piped
//! output stays plain.
//!
//! The session's own lines ("Bubble Sort: ...", "Sorted in ...") are never
//! colored; only the comparison table and error messages are.

use std::sync::OnceLock;

use sortlab::{SortMethod, SortReport};

/// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn theme_from(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if let Some(theme) = explicit {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Some(bg) = colorfgbg.and_then(|v| v.split(';').next_back()) {
        if let Ok(bg_num) = bg.parse::<u8>() {
            if bg_num >= 7 && bg_num != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

fn detect_theme() -> Theme {
    theme_from(
        std::env::var("SORTLAB_THEME").ok().as_deref(),
        std::env::var("COLORFGBG").ok().as_deref(),
    )
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// `error: <message>` for stderr
pub fn error_line(message: &str) -> String {
    format!("{} {}", themed(RED, &[BOLD], "error:"), message)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(s: &str) -> String {
    themed(GRAY, &[], s)
}

/// │ content          │
fn row(buf: &mut String, content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    buf.push_str(&format!(
        "{}{}{}{}\n",
        border("│"),
        content,
        " ".repeat(pad),
        border("│")
    ));
}

/// ┌─ LABEL ──────────┐
fn section_top(buf: &mut String, label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    buf.push_str(&format!(
        "{}{}{}\n",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    ));
}

/// ├──────────────────┤
fn section_mid(buf: &mut String) {
    buf.push_str(&border(&format!("├{}┤", "─".repeat(BOX_WIDTH))));
    buf.push('\n');
}

/// └──────────────────┘
fn section_bot(buf: &mut String) {
    buf.push_str(&border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
    buf.push('\n');
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded timing value in ms (green=fast, yellow=medium, red=slow)
pub fn timing_ms(value: f64) -> String {
    let text = format!("{:>12.3}", value);
    if !use_colors() {
        return text;
    }
    let color = if value < 1.0 {
        GREEN()
    } else if value < 100.0 {
        YELLOW()
    } else {
        RED()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Steps column, bold for the cheapest method
fn steps_cell(steps: u64, cheapest: bool) -> String {
    let text = format!("{:>14}", steps);
    if cheapest {
        themed(GREEN, &[BOLD], &text)
    } else {
        text
    }
}

fn stability_badge(method: SortMethod) -> String {
    if method.is_stable() {
        themed(BLUE, &[], "stable")
    } else {
        themed(GRAY, &[], "unstable")
    }
}

/// Boxed table comparing every method on the same sequence.
pub fn render_comparison(len: usize, seed: u64, reports: &[SortReport]) -> String {
    let mut buf = String::new();
    let cheapest = reports.iter().map(|r| r.steps).min();

    section_top(&mut buf, &format!("{} elements, seed {}", len, seed));
    row(
        &mut buf,
        &format!(
            " {} {} {} {}",
            pad_right("Method", 10),
            pad_left("Steps", 14),
            pad_left("Time (ms)", 12),
            pad_left("Stability", 10)
        ),
    );
    section_mid(&mut buf);
    for report in reports {
        row(
            &mut buf,
            &format!(
                " {} {} {} {}",
                pad_right(report.method.label(), 10),
                steps_cell(report.steps, Some(report.steps) == cheapest),
                timing_ms(report.elapsed_ms()),
                pad_left(&stability_badge(report.method), 10)
            ),
        );
    }
    section_bot(&mut buf);
    buf
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
