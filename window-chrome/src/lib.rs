//! Edge-to-edge window chrome for Android activities.
//!
//! Hybrid app shells draw their whole UI in a web view, so the system bars
//! should be see-through and the content should extend under them. This
//! crate configures that once, while the activity window is being created:
//!
//! 1. Content is laid out edge-to-edge, via
//!    `Window.setDecorFitsSystemWindows(false)` on Android 11+ or the legacy
//!    `FLAG_LAYOUT_NO_LIMITS` window flag before that.
//! 2. The status and navigation bars are made fully transparent.
//! 3. Both bars are given light icons, for use over a dark background.
//!
//! Which of these steps a device supports is decided by a [`Capabilities`]
//! table keyed on [`SdkVersion`], so the policy can be exercised without a
//! device through any [`ChromeWindow`] implementation. On Android, use
//! [`configure_activity()`] from a native method that your activity calls in
//! `onCreate()`.

mod android;
pub use android::{configure_activity, configure_activity_with, ActivityInsetsController, ActivityWindow};

mod capability;
pub use capability::{Capabilities, MIN_SUPPORTED_SDK};

mod chrome;
pub use chrome::{
    configure_window_chrome, configure_window_chrome_with, BarColors, BarIcons, ChromePlan,
    ChromeWindow, InsetsController, LayoutFlags, LayoutRequest,
};

mod color;
pub use color::Argb;

mod config;
pub use config::{ChromeConfig, IconStyle};

pub mod error;
pub use error::{AppError, Result};

mod jni_utils;

mod sdk;
pub use sdk::{SdkVersion, VersionCode};

#[test]
fn test_policy_is_send_sync() {
    fn needs_send_sync<T: Send + Sync>() {}
    needs_send_sync::<ChromePlan>();
    needs_send_sync::<ChromeConfig>();
}
