// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the pressmark CLI.
//!
//! Highlighted runs are painted in the theme's accent color: OneDark for dark
//! terminals, One Light for light ones. Detection tries `PRESSMARK_THEME`
//! first, then `COLORFGBG`, then defaults to dark. `NO_COLOR` and non-TTY
//! output fall back to `[brackets]` around matches so pipelines still see them.

use std::sync::OnceLock;

use pressmark::{Segment, Segments};

/// Width of section rules.
pub const RULE_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("PRESSMARK_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
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
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
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

theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GREEN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
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

/// Paint highlighted runs; brackets when colors are off.
pub fn paint(segments: Segments<'_>) -> String {
    let colors = use_colors();
    let accent = if colors { format!("{}{}", BOLD, YELLOW()) } else { String::new() };
    segments
        .map(|segment: Segment<'_>| match (segment.is_match(), colors) {
            (false, _) => segment.text.to_string(),
            (true, true) => format!("{}{}{}", accent, segment.text, RESET),
            (true, false) => format!("[{}]", segment.text),
        })
        .collect()
}

/// Print a section rule: ── LABEL ─────────
pub fn section(label: &str) {
    let label_part = format!("── {} ", themed(CYAN, &[BOLD], label));
    let remaining = RULE_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}{}", label_part, themed(GRAY, &[], &"─".repeat(remaining)));
}

/// Print a dimmed `key: value` line.
pub fn field(key: &str, value: &str) {
    println!("{} {}", themed(GRAY, &[], &format!("{}:", key)), value);
}

/// Print a green status note.
pub fn note(text: &str) {
    println!("{}", themed(GREEN, &[], text));
}
