// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the dsamatch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `DSAMATCH_THEME` first, then `COLORFGBG`, then defaults to dark. Colour is
//! dropped entirely under `NO_COLOR` or when stdout is not a TTY, so piped
//! output is plain text.
//!
//! Every formatter returns a `String`; `main` decides where it goes.

use std::fmt::Write;
use std::sync::OnceLock;

use dsamatch::{truncate_chars, Record, ScoreBreakdown};

/// Width of the `=` rules around the best match.
pub const RULE_WIDTH: usize = 60;

/// Alternates show at most this many characters of their question.
pub const ALTERNATE_QUESTION_CHARS: usize = 80;

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
    if let Ok(theme) = std::env::var("DSAMATCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg"; backgrounds 7 and up (except 8) are light
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
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
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
theme_color!(CYAN);
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

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn rule() -> String {
    themed(GRAY, &[], &"=".repeat(RULE_WIDTH))
}

/// Color-coded confidence (green=strong, yellow=plausible, red=weak)
pub fn confidence_label(confidence: u8) -> String {
    let text = format!("{}%", confidence);
    let color: fn() -> String = if confidence >= 60 {
        GREEN
    } else if confidence >= 30 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[BOLD], &text)
}

/// Color-coded score value
pub fn score_value(score: f64) -> String {
    let text = format!("{:>8.2}", score);
    if score >= 100.0 {
        themed(GREEN, &[BOLD], &text)
    } else if score > 0.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// The boxed best-match block: header, id, question, answer.
pub fn best_match_block(record: &Record, confidence: u8) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(
        out,
        "{} (Confidence: {})",
        themed(CYAN, &[BOLD], "BEST MATCH"),
        confidence_label(confidence)
    );
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "ID: {}", record.id());
    let _ = writeln!(out, "Question: {}", record.question());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", themed(CYAN, &[], "--- ANSWER ---"));
    let _ = writeln!(out, "{}", record.answer());
    let _ = writeln!(out, "{}", rule());
    out
}

/// Runners-up, one line each. Empty when there are none.
pub fn alternates_block(alternates: &[&Record]) -> String {
    if alternates.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", themed(GRAY, &[], "[Other possible matches:]"));
    for record in alternates {
        let _ = writeln!(
            out,
            "  - {}: {}",
            record.id(),
            truncate_chars(record.question(), ALTERNATE_QUESTION_CHARS)
        );
    }
    out
}

pub fn no_match_block() -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        themed(YELLOW, &[BOLD], "No confident match found. Try different keywords.")
    );
    let _ = writeln!(
        out,
        "Tip: Use terms like queue, stack, tree, sort, graph, bfs, linked, etc."
    );
    let _ = writeln!(out, "Typos are OK! (e.g., 'curcular que' works)");
    out
}

/// One row per signal, then the total.
pub fn breakdown_block(breakdown: &ScoreBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", themed(CYAN, &[BOLD], "--- SCORE BREAKDOWN ---"));
    for (name, value) in breakdown.signals() {
        let shown = if name == "penalty" {
            themed(GRAY, &[], &format!("{:>8}", format!("x{:.1}", value)))
        } else {
            score_value(value)
        };
        let _ = writeln!(out, "  {}{}", pad_right(name, 12), shown);
    }
    let _ = writeln!(out, "  {}{}", pad_right("total", 12), score_value(breakdown.total()));
    out
}
