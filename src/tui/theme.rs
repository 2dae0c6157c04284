// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

pub(crate) const PALETTE_ENV: &str = "PITCHDECK_TUI_PALETTE";

#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let palette = match env::var(PALETTE_ENV) {
            Ok(value) => palette_from_value(&value)?,
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: PALETTE_ENV.to_string(),
                    value: "<non-unicode>".to_string(),
                });
            }
        };
        Ok(Self { palette })
    }

    fn color(&self, role: Role) -> Color {
        match &self.palette {
            Some(palette) => palette.color(role),
            None => role.fallback(),
        }
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    pub(crate) fn heading_style(&self) -> Style {
        self.base_style().fg(self.color(Role::Accent)).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.base_style().fg(self.color(Role::Muted))
    }

    pub(crate) fn current_stage_style(&self) -> Style {
        self.base_style().fg(self.color(Role::Accent)).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn finale_style(&self) -> Style {
        self.base_style().fg(self.color(Role::Alert)).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn border_style(&self) -> Style {
        self.muted_style()
    }

    pub(crate) fn footer_label_style(&self) -> Style {
        self.muted_style()
    }

    pub(crate) fn footer_key_style(&self) -> Style {
        self.base_style().fg(self.color(Role::Accent)).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn toast_style(&self) -> Style {
        self.base_style().fg(self.color(Role::Alert))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Accent,
    Muted,
    Alert,
}

impl Role {
    fn fallback(self) -> Color {
        match self {
            Self::Accent => Color::Cyan,
            Self::Muted => Color::DarkGray,
            Self::Alert => Color::LightRed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    accent: Color,
    muted: Color,
    alert: Color,
}

impl TuiPalette {
    const FIELDS: [&'static str; 5] = ["fg", "bg", "accent", "muted", "alert"];

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts = value.split(',').map(str::trim).collect::<Vec<_>>();
        if parts.len() != Self::FIELDS.len() {
            return Err(format!(
                "expected {} comma-separated colors ({}), got {}",
                Self::FIELDS.len(),
                Self::FIELDS.join(","),
                parts.len()
            ));
        }

        let mut colors = [Color::Reset; 5];
        for (idx, (part, field)) in parts.iter().zip(Self::FIELDS).enumerate() {
            colors[idx] = parse_palette_color(part).map_err(|err| format!("{field}: {err}"))?;
        }
        let [fg, bg, accent, muted, alert] = colors;
        Ok(Self { fg, bg, accent, muted, alert })
    }

    fn color(&self, role: Role) -> Color {
        match role {
            Role::Accent => self.accent,
            Role::Muted => self.muted,
            Role::Alert => self.alert,
        }
    }
}

fn palette_from_value(value: &str) -> Result<Option<TuiPalette>, ThemeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    TuiPalette::parse_csv(trimmed).map(Some).map_err(|error| ThemeError::InvalidEnv {
        name: PALETTE_ENV.to_string(),
        value: format!("{trimmed} ({error})"),
    })
}

/// Accepts `#RRGGBB`, `0xRRGGBB`, or bare `RRGGBB`.
fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_string());
    }

    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| format!("invalid hex color: {trimmed}"))
    };
    Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[derive(Debug, Clone)]
pub(crate) enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}
