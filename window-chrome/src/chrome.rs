use bitflags::bitflags;
use log::{debug, trace};

use crate::capability::Capabilities;
use crate::color::Argb;
use crate::config::{ChromeConfig, IconStyle};
use crate::error::Result;
use crate::sdk::SdkVersion;

bitflags! {
    /// A subset of [`WindowManager.LayoutParams`](https://developer.android.com/reference/android/view/WindowManager.LayoutParams) window flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayoutFlags: u32 {
        /// `FLAG_LAYOUT_NO_LIMITS`: the window may extend outside of the screen
        /// and under the system bars
        const LAYOUT_NO_LIMITS = 0x0000_0200;
    }
}

/// The window surface the configurator drives
///
/// On Android this is [`crate::ActivityWindow`], a wrapper over
/// `android.view.Window`.
pub trait ChromeWindow {
    type Controller<'a>: InsetsController
    where
        Self: 'a;

    /// `Window.setDecorFitsSystemWindows()`
    fn set_decor_fits_system_windows(&mut self, fits: bool) -> Result<()>;

    /// `Window.setFlags()`: sets the bits of `flags` that are in `mask`
    fn set_layout_flags(&mut self, flags: LayoutFlags, mask: LayoutFlags) -> Result<()>;

    fn set_status_bar_color(&mut self, color: Argb) -> Result<()>;

    fn set_navigation_bar_color(&mut self, color: Argb) -> Result<()>;

    /// Returns `Ok(None)` if the window has no inset controller to give out
    fn insets_controller(&mut self) -> Result<Option<Self::Controller<'_>>>;
}

/// Controls how system bars are drawn over a window
pub trait InsetsController {
    fn set_status_bar_icons(&mut self, style: IconStyle) -> Result<()>;

    fn set_navigation_bar_icons(&mut self, style: IconStyle) -> Result<()>;
}

/// How content is extended under the system bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutRequest {
    /// `setDecorFitsSystemWindows(value)`
    DecorFitsSystemWindows(bool),
    /// `setFlags(flags, flags)`
    LayoutFlags(LayoutFlags),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarColors {
    pub status: Argb,
    pub navigation: Argb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarIcons {
    pub status: IconStyle,
    /// `None` on releases that can't style navigation bar icons
    pub navigation: Option<IconStyle>,
}

/// The concrete window calls for one SDK version and config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromePlan {
    pub capabilities: Capabilities,
    pub layout: Option<LayoutRequest>,
    pub bar_colors: Option<BarColors>,
    pub icons: Option<BarIcons>,
}

impl ChromePlan {
    pub fn new(sdk: SdkVersion, config: &ChromeConfig) -> Self {
        let capabilities = Capabilities::for_sdk(sdk);

        let layout = if !config.edge_to_edge {
            None
        } else if capabilities.contains(Capabilities::MODERN_INSETS) {
            Some(LayoutRequest::DecorFitsSystemWindows(false))
        } else if capabilities.contains(Capabilities::LEGACY_LAYOUT) {
            Some(LayoutRequest::LayoutFlags(LayoutFlags::LAYOUT_NO_LIMITS))
        } else {
            None
        };

        let bar_colors = capabilities
            .contains(Capabilities::BAR_COLORS)
            .then_some(BarColors {
                status: config.status_bar_color,
                navigation: config.navigation_bar_color,
            });

        let icons = capabilities
            .contains(Capabilities::STATUS_BAR_ICONS)
            .then(|| BarIcons {
                status: config.status_bar_icons,
                navigation: capabilities
                    .contains(Capabilities::NAVIGATION_BAR_ICONS)
                    .then_some(config.navigation_bar_icons),
            });

        Self {
            capabilities,
            layout,
            bar_colors,
            icons,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_none() && self.bar_colors.is_none() && self.icons.is_none()
    }

    /// Issues the planned calls: layout, then bar colours, then icons
    pub fn apply<W: ChromeWindow>(&self, window: &mut W) -> Result<()> {
        match self.layout {
            Some(LayoutRequest::DecorFitsSystemWindows(fits)) => {
                trace!("setDecorFitsSystemWindows({fits})");
                window.set_decor_fits_system_windows(fits)?;
            }
            Some(LayoutRequest::LayoutFlags(flags)) => {
                trace!("setFlags({flags:?})");
                window.set_layout_flags(flags, flags)?;
            }
            None => {}
        }

        if let Some(colors) = self.bar_colors {
            trace!(
                "Bar colours: status = {}, navigation = {}",
                colors.status,
                colors.navigation
            );
            window.set_status_bar_color(colors.status)?;
            window.set_navigation_bar_color(colors.navigation)?;
        }

        if let Some(icons) = self.icons {
            // No controller means no icon styling, and that's not an error
            if let Some(mut controller) = window.insets_controller()? {
                trace!("Bar icons: {icons:?}");
                controller.set_status_bar_icons(icons.status)?;
                if let Some(navigation) = icons.navigation {
                    controller.set_navigation_bar_icons(navigation)?;
                }
            }
        }

        Ok(())
    }
}

/// Configures edge-to-edge content, transparent system bars and light bar
/// icons for `window`.
///
/// Call this once while the window is being created, after the host shell's
/// own setup and before the window is shown. Calling it again is harmless.
pub fn configure_window_chrome<W: ChromeWindow>(
    window: &mut W,
    sdk: SdkVersion,
) -> Result<()> {
    configure_window_chrome_with(window, sdk, &ChromeConfig::default())
}

/// Like [`configure_window_chrome()`] but with non-default colours or icons
pub fn configure_window_chrome_with<W: ChromeWindow>(
    window: &mut W,
    sdk: SdkVersion,
    config: &ChromeConfig,
) -> Result<()> {
    let plan = ChromePlan::new(sdk, config);
    debug!(
        "Configuring window chrome for SDK {sdk}: {:?}",
        plan.capabilities
    );
    plan.apply(window)
}
