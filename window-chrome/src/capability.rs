//! Which window chrome operations a given platform release supports.
//!
//! Rather than scattering `if sdk >= X` checks through the configurator, the
//! version policy lives in one ordered table that is resolved once per
//! configuration.

use bitflags::bitflags;

use crate::sdk::{SdkVersion, VersionCode};

bitflags! {
    /// Window chrome operations available on a platform release
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        /// `Window.setDecorFitsSystemWindows()` and `Window.getInsetsController()`
        const MODERN_INSETS = 0x01;
        /// `WindowManager.LayoutParams.FLAG_LAYOUT_NO_LIMITS` as an edge-to-edge fallback
        const LEGACY_LAYOUT = 0x02;
        /// `Window.setStatusBarColor()` and `Window.setNavigationBarColor()`
        const BAR_COLORS = 0x04;
        /// Light/dark status bar icons
        const STATUS_BAR_ICONS = 0x08;
        /// Light/dark navigation bar icons
        const NAVIGATION_BAR_ICONS = 0x10;
    }
}

/// The oldest release the configurator does anything on
pub const MIN_SUPPORTED_SDK: VersionCode = VersionCode::Lollipop;

struct Row {
    min: VersionCode,
    /// Inclusive
    max: Option<VersionCode>,
    capabilities: Capabilities,
}

// Ordered by `min`, non-overlapping, and contiguous from `MIN_SUPPORTED_SDK`.
const CAPABILITY_TABLE: &[Row] = &[
    Row {
        min: VersionCode::Lollipop,
        max: Some(VersionCode::LollipopMr1),
        capabilities: Capabilities::LEGACY_LAYOUT.union(Capabilities::BAR_COLORS),
    },
    Row {
        min: VersionCode::M,
        max: Some(VersionCode::NMr1),
        capabilities: Capabilities::LEGACY_LAYOUT
            .union(Capabilities::BAR_COLORS)
            .union(Capabilities::STATUS_BAR_ICONS),
    },
    Row {
        min: VersionCode::O,
        max: Some(VersionCode::Q),
        capabilities: Capabilities::LEGACY_LAYOUT
            .union(Capabilities::BAR_COLORS)
            .union(Capabilities::STATUS_BAR_ICONS)
            .union(Capabilities::NAVIGATION_BAR_ICONS),
    },
    Row {
        min: VersionCode::R,
        max: None,
        capabilities: Capabilities::MODERN_INSETS
            .union(Capabilities::BAR_COLORS)
            .union(Capabilities::STATUS_BAR_ICONS)
            .union(Capabilities::NAVIGATION_BAR_ICONS),
    },
];

impl Row {
    fn contains(&self, sdk: SdkVersion) -> bool {
        sdk.at_least(self.min) && self.max.map_or(true, |max| sdk.get() <= i32::from(max))
    }
}

impl Capabilities {
    /// Looks up what `sdk` supports; empty below [`MIN_SUPPORTED_SDK`]
    pub fn for_sdk(sdk: SdkVersion) -> Self {
        CAPABILITY_TABLE
            .iter()
            .find(|row| row.contains(sdk))
            .map_or(Capabilities::empty(), |row| row.capabilities)
    }

    /// Whether any of the icon styling capabilities are present
    pub fn has_icon_control(self) -> bool {
        self.intersects(Capabilities::STATUS_BAR_ICONS | Capabilities::NAVIGATION_BAR_ICONS)
    }
}
