//! 颜色与主题配色
//!
//! 主题配色是显式传入显示组件的值对象，
//! 组件自身不向上层窗口反查颜色。

use serde::{Deserialize, Serialize};

/// RGB颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 从 0xRRGGBB 构造
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

/// 主题类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    Dark,
}

impl Default for ThemeKind {
    fn default() -> Self {
        ThemeKind::Light
    }
}

impl ThemeKind {
    pub fn scheme(&self) -> ColorScheme {
        match self {
            ThemeKind::Light => ColorScheme::light(),
            ThemeKind::Dark => ColorScheme::dark(),
        }
    }
}

/// 应用主题配色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_light: Color,
    pub error: Color,
}

impl ColorScheme {
    /// 浅色主题
    pub fn light() -> Self {
        Self {
            primary: Color::rgb(156, 39, 176),
            secondary: Color::rgb(186, 104, 200),
            accent: Color::rgb(255, 87, 34),
            background: Color::rgb(248, 249, 250),
            surface: Color::rgb(255, 255, 255),
            text: Color::rgb(44, 62, 80),
            text_light: Color::rgb(127, 140, 141),
            error: Color::rgb(231, 76, 60),
        }
    }

    /// 深色主题
    pub fn dark() -> Self {
        Self {
            primary: Color::rgb(124, 77, 255),
            secondary: Color::rgb(157, 126, 245),
            accent: Color::rgb(255, 111, 0),
            background: Color::rgb(33, 33, 33),
            surface: Color::rgb(48, 48, 48),
            text: Color::rgb(237, 240, 242),
            text_light: Color::rgb(176, 182, 186),
            error: Color::rgb(255, 82, 82),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0x9C27B0);
        assert_eq!(c, Color::rgb(156, 39, 176));
    }

    #[test]
    fn test_theme_kind_scheme() {
        assert_eq!(ThemeKind::Light.scheme(), ColorScheme::light());
        assert_eq!(ThemeKind::Dark.scheme(), ColorScheme::dark());
    }
}
