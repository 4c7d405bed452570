//! Closed value types attached to component nodes.
//!
//! Everything here is an immutable value with structural equality. Colors
//! only ever reference theme roles, so a generated layout follows whatever
//! theme the project carries.

use serde::{Deserialize, Serialize};

/// A color reference resolved against the project theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Color {
    #[default]
    Unspecified,
    Primary,
    OnPrimary,
    Secondary,
    OnSecondary,
    Tertiary,
    OnTertiary,
    Background,
    OnBackground,
    Surface,
    OnSurface,
    Error,
    OnError,
}

impl Color {
    /// Every theme role, in declaration order (excludes `Unspecified`)
    pub const ROLES: [Color; 12] = [
        Color::Primary,
        Color::OnPrimary,
        Color::Secondary,
        Color::OnSecondary,
        Color::Tertiary,
        Color::OnTertiary,
        Color::Background,
        Color::OnBackground,
        Color::Surface,
        Color::OnSurface,
        Color::Error,
        Color::OnError,
    ];

    pub fn is_specified(&self) -> bool {
        !matches!(self, Color::Unspecified)
    }
}

/// Two-dimensional alignment inside a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Alignment {
    #[default]
    TopStart,
    TopCenter,
    TopEnd,
    CenterStart,
    Center,
    CenterEnd,
    BottomStart,
    BottomCenter,
    BottomEnd,
}

/// Cross-axis alignment for columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HorizontalAlignment {
    #[default]
    Start,
    CenterHorizontally,
    End,
}

/// Cross-axis alignment for rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VerticalAlignment {
    #[default]
    Top,
    CenterVertically,
    Bottom,
}

/// Main-axis arrangement of a row or column.
///
/// `Start` and `End` read as `Top` and `Bottom` on a vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Arrangement {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    SpacedBy(f32),
}

/// Material typography roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TextStyle {
    DisplayLarge,
    DisplayMedium,
    DisplaySmall,
    HeadlineLarge,
    HeadlineMedium,
    HeadlineSmall,
    TitleLarge,
    TitleMedium,
    TitleSmall,
    #[default]
    BodyLarge,
    BodyMedium,
    BodySmall,
    LabelLarge,
    LabelMedium,
    LabelSmall,
}

/// Outline used by background, border and clip modifiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type")]
pub enum Shape {
    #[default]
    Rectangle,
    Circle,
    RoundedCorner { radius: f32 },
}

/// Packed `0xAARRGGBB` color value
pub type Argb = u32;

/// Concrete colors for every theme role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub primary: Argb,
    pub on_primary: Argb,
    pub secondary: Argb,
    pub on_secondary: Argb,
    pub tertiary: Argb,
    pub on_tertiary: Argb,
    pub background: Argb,
    pub on_background: Argb,
    pub surface: Argb,
    pub on_surface: Argb,
    pub error: Argb,
    pub on_error: Argb,
}

impl ColorScheme {
    /// Material baseline light palette
    pub fn light() -> Self {
        Self {
            primary: 0xFF6750A4,
            on_primary: 0xFFFFFFFF,
            secondary: 0xFF625B71,
            on_secondary: 0xFFFFFFFF,
            tertiary: 0xFF7D5260,
            on_tertiary: 0xFFFFFFFF,
            background: 0xFFFFFBFE,
            on_background: 0xFF1C1B1F,
            surface: 0xFFFFFBFE,
            on_surface: 0xFF1C1B1F,
            error: 0xFFB3261E,
            on_error: 0xFFFFFFFF,
        }
    }

    /// Material baseline dark palette
    pub fn dark() -> Self {
        Self {
            primary: 0xFFD0BCFF,
            on_primary: 0xFF381E72,
            secondary: 0xFFCCC2DC,
            on_secondary: 0xFF332D41,
            tertiary: 0xFFEFB8C8,
            on_tertiary: 0xFF492532,
            background: 0xFF1C1B1F,
            on_background: 0xFFE6E1E5,
            surface: 0xFF1C1B1F,
            on_surface: 0xFFE6E1E5,
            error: 0xFFF2B8B5,
            on_error: 0xFF601410,
        }
    }

    /// Look up the concrete value of a role; `None` for `Unspecified`
    pub fn resolve(&self, color: Color) -> Option<Argb> {
        let value = match color {
            Color::Unspecified => return None,
            Color::Primary => self.primary,
            Color::OnPrimary => self.on_primary,
            Color::Secondary => self.secondary,
            Color::OnSecondary => self.on_secondary,
            Color::Tertiary => self.tertiary,
            Color::OnTertiary => self.on_tertiary,
            Color::Background => self.background,
            Color::OnBackground => self.on_background,
            Color::Surface => self.surface,
            Color::OnSurface => self.on_surface,
            Color::Error => self.error,
            Color::OnError => self.on_error,
        };
        Some(value)
    }
}

/// Project-wide theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            light: ColorScheme::light(),
            dark: ColorScheme::dark(),
        }
    }
}
