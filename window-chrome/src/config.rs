use crate::color::Argb;

/// Colour of the icons drawn in a system bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconStyle {
    /// Light icons, for use over a dark background
    Light,
    /// Dark icons, for use over a light background
    Dark,
}

impl IconStyle {
    /// Whether Android's "light bar" appearance should be enabled.
    ///
    /// Android names bars after their background, so a light bar is one
    /// with *dark* icons: `APPEARANCE_LIGHT_STATUS_BARS`,
    /// `SYSTEM_UI_FLAG_LIGHT_STATUS_BAR` and friends are set for
    /// [`IconStyle::Dark`] and cleared for [`IconStyle::Light`].
    pub fn is_light_bar_appearance(self) -> bool {
        self == IconStyle::Dark
    }
}

/// The window chrome requested for an activity
///
/// The default is edge-to-edge content behind transparent system bars with
/// light icons. Light icons are a fixed choice for the app's dark
/// background; nothing here looks at the current theme, so an app with a
/// light background has to ask for [`IconStyle::Dark`] itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeConfig {
    pub edge_to_edge: bool,
    pub status_bar_color: Argb,
    pub navigation_bar_color: Argb,
    pub status_bar_icons: IconStyle,
    pub navigation_bar_icons: IconStyle,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            edge_to_edge: true,
            status_bar_color: Argb::TRANSPARENT,
            navigation_bar_color: Argb::TRANSPARENT,
            status_bar_icons: IconStyle::Light,
            navigation_bar_icons: IconStyle::Light,
        }
    }
}

impl ChromeConfig {
    pub fn with_edge_to_edge(mut self, edge_to_edge: bool) -> Self {
        self.edge_to_edge = edge_to_edge;
        self
    }

    /// Sets both bar colours
    pub fn with_bar_color(mut self, color: Argb) -> Self {
        self.status_bar_color = color;
        self.navigation_bar_color = color;
        self
    }

    pub fn with_status_bar_color(mut self, color: Argb) -> Self {
        self.status_bar_color = color;
        self
    }

    pub fn with_navigation_bar_color(mut self, color: Argb) -> Self {
        self.navigation_bar_color = color;
        self
    }

    /// Sets the icon style of both bars
    pub fn with_icons(mut self, style: IconStyle) -> Self {
        self.status_bar_icons = style;
        self.navigation_bar_icons = style;
        self
    }

    pub fn with_status_bar_icons(mut self, style: IconStyle) -> Self {
        self.status_bar_icons = style;
        self
    }

    pub fn with_navigation_bar_icons(mut self, style: IconStyle) -> Self {
        self.navigation_bar_icons = style;
        self
    }
}
