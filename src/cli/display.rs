// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the unisearch CLI.
//!
//! Renders the overlay's [`RenderModel`] as one box with a section per
//! category. Colors are picked by [`Role`] from a OneDark or One Light
//! [`Palette`], and are off for pipes, with `NO_COLOR`, and with `--no-color`.
//!
//! # Theme detection order
//!
//! 1. `UNISEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use unisearch::{Category, RenderEntry, RenderModel, ResolvedQuickLink};

/// Inner width of the result box, borders excluded.
pub const BOX_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// THEMES AND PALETTES
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// `UNISEARCH_THEME` value.
    pub fn parse(name: &str) -> Option<Theme> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" | "d" => Some(Theme::Dark),
            "light" | "l" => Some(Theme::Light),
            _ => None,
        }
    }

    /// `COLORFGBG` is `fg;bg` (sometimes `fg;x;bg`). Background colors 7 and
    /// 9-15 are light.
    pub fn from_colorfgbg(value: &str) -> Option<Theme> {
        let bg: u8 = value.rsplit(';').next()?.parse().ok()?;
        Some(if bg >= 7 && bg != 8 {
            Theme::Light
        } else {
            Theme::Dark
        })
    }

    fn detect() -> Theme {
        let from_env = |var: &str, parse: fn(&str) -> Option<Theme>| {
            std::env::var(var).ok().and_then(|v| parse(&v))
        };
        from_env("UNISEARCH_THEME", Theme::parse)
            .or_else(|| from_env("COLORFGBG", Theme::from_colorfgbg))
            .unwrap_or(Theme::Dark)
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &ONE_DARK,
            Theme::Light => &ONE_LIGHT,
        }
    }
}

/// What a piece of text means on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Catalog,
    Pages,
    News,
    /// Group headings and selected titles.
    Heading,
    /// Selection marker and the query echo.
    Accent,
    /// Navigation targets.
    Target,
    /// Borders, descriptions and hints.
    Muted,
}

impl From<Category> for Role {
    fn from(category: Category) -> Self {
        match category {
            Category::Catalog => Role::Catalog,
            Category::Pages => Role::Pages,
            Category::News => Role::News,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(u8, u8, u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }
}

#[derive(Debug)]
pub struct Palette {
    green: Rgb,
    blue: Rgb,
    magenta: Rgb,
    cyan: Rgb,
    yellow: Rgb,
    gray: Rgb,
}

const ONE_DARK: Palette = Palette {
    green: Rgb(152, 195, 121),
    blue: Rgb(97, 175, 239),
    magenta: Rgb(198, 120, 221),
    cyan: Rgb(86, 182, 194),
    yellow: Rgb(229, 192, 123),
    gray: Rgb(92, 99, 112),
};

const ONE_LIGHT: Palette = Palette {
    green: Rgb(80, 161, 79),
    blue: Rgb(64, 120, 242),
    magenta: Rgb(166, 38, 164),
    cyan: Rgb(1, 132, 188),
    yellow: Rgb(193, 132, 1),
    gray: Rgb(160, 161, 167),
};

impl Palette {
    pub fn color(&self, role: Role) -> Rgb {
        match role {
            Role::Catalog | Role::Target => self.green,
            Role::Pages => self.blue,
            Role::News => self.magenta,
            Role::Heading => self.cyan,
            Role::Accent => self.yellow,
            Role::Muted => self.gray,
        }
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();
static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

pub fn theme() -> Theme {
    *THEME.get_or_init(Theme::detect)
}

/// `--no-color`.
pub fn disable_colors() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
}

pub fn use_colors() -> bool {
    !COLOR_DISABLED.load(Ordering::Relaxed)
        && std::env::var_os("NO_COLOR").is_none()
        && atty::is(atty::Stream::Stdout)
}

// ═══════════════════════════════════════════════════════════════════════════
// STYLED TEXT
// ═══════════════════════════════════════════════════════════════════════════

fn styled(prefix: &str, role: Role, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    format!("{}{}{}{}", prefix, theme().palette().color(role), text, RESET)
}

pub fn paint(role: Role, text: &str) -> String {
    styled("", role, text)
}

pub fn strong(role: Role, text: &str) -> String {
    styled(BOLD, role, text)
}

/// Dimmed muted text, for hints and targets.
pub fn faint(text: &str) -> String {
    styled(DIM, Role::Muted, text)
}

/// Chars a terminal would draw, skipping `ESC [ ... m` sequences.
pub fn visible_len(s: &str) -> usize {
    let mut chars = s.chars();
    let mut len = 0;
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            len += 1;
        }
    }
    len
}

/// Cut to `max` chars, ending with an ellipsis when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some(_) => {
            let keep: String = text.chars().take(max.saturating_sub(1)).collect();
            keep + "…"
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Horizontal edge of the box, optionally carrying a label.
fn edge(left: char, right: char, label: Option<&str>) {
    let head = label
        .map(|l| format!("─ {} ", strong(Role::Heading, l)))
        .unwrap_or_default();
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&head)));
    println!(
        "{}{}{}{}",
        paint(Role::Muted, &left.to_string()),
        head,
        paint(Role::Muted, &fill),
        paint(Role::Muted, &right.to_string())
    );
}

/// │ content          │
pub fn row(content: &str) {
    let pad = " ".repeat(BOX_WIDTH.saturating_sub(visible_len(content)));
    let bar = paint(Role::Muted, "│");
    println!("{bar}{content}{pad}{bar}");
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    edge('┌', '┐', Some(label));
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    edge('├', '┤', Some(label));
}

/// └──────────────────┘
pub fn section_bot() {
    edge('└', '┘', None);
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// Group header: "Programs (3)". The count is the number shown, not the
/// number that matched.
pub fn group_label(category: Category, count: usize) -> String {
    let name = match category {
        Category::Catalog => "Programs",
        Category::Pages => "Pages",
        Category::News => "News",
    };
    format!("{} ({})", name, count)
}

/// One result line: `▶  2  Title  description  → /target`
pub fn entry_line(category: Category, entry: &RenderEntry) -> String {
    let marker = if entry.selected {
        strong(Role::Accent, "▶")
    } else {
        " ".to_string()
    };
    let mut line = format!(
        " {} {:>2}  {}",
        marker,
        entry.position,
        strong(category.into(), &truncate(&entry.title, 28))
    );
    if !entry.description.is_empty() {
        line += &paint(Role::Muted, &format!("  {}", truncate(&entry.description, 20)));
    }
    line += &faint(&format!("  → {}", truncate(&entry.target, 16)));
    line
}

pub fn print_quick_links(links: &[ResolvedQuickLink]) {
    section_top("Quick links");
    for (i, link) in links.iter().enumerate() {
        row(&format!(
            "   {:>2}  {}{}",
            i,
            link.label,
            faint(&format!("  → {}", link.target))
        ));
    }
    section_bot();
}

pub fn print_render_model(model: &RenderModel) {
    match model {
        RenderModel::Closed => println!("{}", paint(Role::Muted, "(overlay closed)")),
        RenderModel::QuickLinks { links } => print_quick_links(links),
        RenderModel::NoMatches { query } => {
            println!("Nothing found for {}", strong(Role::Accent, &format!("\"{}\"", query)));
        }
        RenderModel::Results {
            groups,
            active_index,
        } => {
            for (i, group) in groups.iter().enumerate() {
                let label = group_label(group.category, group.count);
                if i == 0 {
                    section_top(&label);
                } else {
                    section_mid(&label);
                }
                for entry in &group.entries {
                    row(&entry_line(group.category, entry));
                }
            }
            section_bot();
            println!("{}", faint(&format!("active index: {}", active_index)));
        }
    }
}
