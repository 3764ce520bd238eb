//! Visual attributes of a toast
//!
//! These describe how the display service should render a notification. They
//! are plain data; rendering and adaptive colour picking belong to the display
//! service.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// RGBA colour with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const DARK_GRAY: Color = Color::rgb(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font description; `family: None` selects the platform system font
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: Option<String>,
    pub size: f32,
    pub weight: FontWeight,
}

impl Font {
    pub fn system(size: f32) -> Self {
        Self {
            family: None,
            size,
            weight: FontWeight::Regular,
        }
    }

    pub fn bold_system(size: f32) -> Self {
        Self {
            family: None,
            size,
            weight: FontWeight::Bold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justified,
    Natural,
}

/// Two-dimensional offset, used for text shadows
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub width: f32,
    pub height: f32,
}

/// Styling for one line of text (title or subtitle)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub alignment: TextAlignment,
    pub font: Font,
    pub color: Color,
    /// 0 means unlimited
    pub max_lines: u32,
    pub shadow_color: Color,
    pub shadow_offset: Offset,
}

impl TextStyle {
    fn with_font(font: Font) -> Self {
        Self {
            alignment: TextAlignment::Left,
            font,
            color: Color::WHITE,
            max_lines: 0,
            shadow_color: Color::CLEAR,
            shadow_offset: Offset::default(),
        }
    }
}

/// Height class of the toast view
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastSize {
    /// Status-bar height
    Compact,
    /// Navigation-bar height
    #[default]
    Regular,
    Custom { preferred_height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBarStyle {
    #[default]
    Default,
    LightContent,
}

/// Placement of an image or activity indicator inside the toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    ScaleToFill,
    ScaleAspectFit,
    ScaleAspectFill,
    #[default]
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityIndicatorStyle {
    White,
    WhiteLarge,
    #[default]
    Gray,
}

/// Image shown next to the text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// Asset bundled with the host application
    Named(String),
    /// Image file on disk
    Path(PathBuf),
}

/// Complete set of rendering attributes for one toast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationAttributes {
    pub text: TextStyle,
    pub subtext: TextStyle,

    pub size: ToastSize,
    pub background_color: Color,
    pub preferred_padding: f32,

    pub shows_status_bar: bool,
    pub status_bar_style: StatusBarStyle,

    pub image: Option<ImageSource>,
    pub image_tint: Option<Color>,
    pub image_alignment: AccessoryAlignment,
    pub image_content_mode: ContentMode,

    pub shows_activity_indicator: bool,
    pub activity_indicator_style: ActivityIndicatorStyle,
    pub activity_indicator_alignment: AccessoryAlignment,

    /// Keep the thin border under a standard navigation bar while presenting.
    /// Custom bars without that border should turn this off.
    pub keeps_navigation_bar_border: bool,
    pub rotates_automatically: bool,
    pub captures_default_window: bool,
}

impl Default for NotificationAttributes {
    fn default() -> Self {
        Self {
            text: TextStyle::with_font(Font::bold_system(18.0)),
            subtext: TextStyle::with_font(Font::system(14.0)),
            size: ToastSize::Regular,
            background_color: Color::DARK_GRAY,
            preferred_padding: 0.0,
            shows_status_bar: false,
            status_bar_style: StatusBarStyle::Default,
            image: None,
            image_tint: None,
            image_alignment: AccessoryAlignment::Left,
            image_content_mode: ContentMode::Center,
            shows_activity_indicator: false,
            activity_indicator_style: ActivityIndicatorStyle::Gray,
            activity_indicator_alignment: AccessoryAlignment::Left,
            keeps_navigation_bar_border: true,
            rotates_automatically: true,
            captures_default_window: true,
        }
    }
}

impl NotificationAttributes {
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: ToastSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: ImageSource) -> Self {
        self.image = Some(image);
        self
    }

    #[must_use]
    pub fn with_status_bar(mut self, style: StatusBarStyle) -> Self {
        self.shows_status_bar = true;
        self.status_bar_style = style;
        self
    }

    #[must_use]
    pub fn with_activity_indicator(mut self, style: ActivityIndicatorStyle) -> Self {
        self.shows_activity_indicator = true;
        self.activity_indicator_style = style;
        self
    }
}
