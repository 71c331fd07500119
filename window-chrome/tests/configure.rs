use window_chrome::{
    configure_window_chrome, configure_window_chrome_with, Argb, ChromeConfig, ChromeWindow,
    IconStyle, InsetsController, LayoutFlags, Result, SdkVersion, VersionCode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    DecorFitsSystemWindows(bool),
    SetFlags(LayoutFlags, LayoutFlags),
    StatusBarColor(Argb),
    NavigationBarColor(Argb),
    InsetsController,
    StatusBarIcons(IconStyle),
    NavigationBarIcons(IconStyle),
}

/// The window state the OS would end up with, plus every call made
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChromeState {
    decor_fits_system_windows: bool,
    flags: LayoutFlags,
    status_bar_color: Argb,
    navigation_bar_color: Argb,
    light_status_bar_icons: bool,
    light_navigation_bar_icons: bool,
}

impl Default for ChromeState {
    fn default() -> Self {
        Self {
            decor_fits_system_windows: true,
            flags: LayoutFlags::empty(),
            status_bar_color: Argb::BLACK,
            navigation_bar_color: Argb::BLACK,
            light_status_bar_icons: false,
            light_navigation_bar_icons: false,
        }
    }
}

#[derive(Default)]
struct RecordingWindow {
    state: ChromeState,
    calls: Vec<Call>,
    no_controller: bool,
}

impl RecordingWindow {
    fn without_controller() -> Self {
        Self {
            no_controller: true,
            ..Default::default()
        }
    }

    fn called(&self, pred: impl Fn(&Call) -> bool) -> bool {
        self.calls.iter().any(pred)
    }
}

struct RecordingController<'a> {
    window: &'a mut RecordingWindow,
}

impl ChromeWindow for RecordingWindow {
    type Controller<'a> = RecordingController<'a>;

    fn set_decor_fits_system_windows(&mut self, fits: bool) -> Result<()> {
        self.calls.push(Call::DecorFitsSystemWindows(fits));
        self.state.decor_fits_system_windows = fits;
        Ok(())
    }

    fn set_layout_flags(&mut self, flags: LayoutFlags, mask: LayoutFlags) -> Result<()> {
        self.calls.push(Call::SetFlags(flags, mask));
        self.state.flags = (self.state.flags & !mask) | (flags & mask);
        Ok(())
    }

    fn set_status_bar_color(&mut self, color: Argb) -> Result<()> {
        self.calls.push(Call::StatusBarColor(color));
        self.state.status_bar_color = color;
        Ok(())
    }

    fn set_navigation_bar_color(&mut self, color: Argb) -> Result<()> {
        self.calls.push(Call::NavigationBarColor(color));
        self.state.navigation_bar_color = color;
        Ok(())
    }

    fn insets_controller(&mut self) -> Result<Option<Self::Controller<'_>>> {
        self.calls.push(Call::InsetsController);
        if self.no_controller {
            return Ok(None);
        }
        Ok(Some(RecordingController { window: self }))
    }
}

impl<'a> InsetsController for RecordingController<'a> {
    fn set_status_bar_icons(&mut self, style: IconStyle) -> Result<()> {
        self.window.calls.push(Call::StatusBarIcons(style));
        self.window.state.light_status_bar_icons = style == IconStyle::Light;
        Ok(())
    }

    fn set_navigation_bar_icons(&mut self, style: IconStyle) -> Result<()> {
        self.window.calls.push(Call::NavigationBarIcons(style));
        self.window.state.light_navigation_bar_icons = style == IconStyle::Light;
        Ok(())
    }
}

fn configured(level: i32) -> RecordingWindow {
    let mut window = RecordingWindow::default();
    configure_window_chrome(&mut window, SdkVersion::new(level)).unwrap();
    window
}

#[test]
fn modern_releases_use_decor_fits_system_windows() {
    for level in 30..=36 {
        let window = configured(level);
        assert!(!window.state.decor_fits_system_windows, "level {level}");
        assert!(window.state.flags.is_empty(), "level {level}");
        assert!(!window.called(|c| matches!(c, Call::SetFlags(..))));
    }
}

#[test]
fn older_releases_set_layout_no_limits() {
    for level in 21..30 {
        let window = configured(level);
        assert_eq!(window.state.flags, LayoutFlags::LAYOUT_NO_LIMITS, "level {level}");
        assert!(window.state.decor_fits_system_windows, "level {level}");
        assert!(!window.called(|c| matches!(c, Call::DecorFitsSystemWindows(_))));
    }
}

#[test]
fn bars_are_transparent_on_every_supported_release() {
    for level in 21..=36 {
        let window = configured(level);
        assert!(window.state.status_bar_color.is_transparent(), "level {level}");
        assert!(window.state.navigation_bar_color.is_transparent(), "level {level}");
    }
}

#[test]
fn icons_are_light_where_supported() {
    for level in 26..=36 {
        let window = configured(level);
        assert!(window.state.light_status_bar_icons, "level {level}");
        assert!(window.state.light_navigation_bar_icons, "level {level}");
    }

    // Status bar icons from M, navigation bar icons only from O
    let window = configured(VersionCode::M.into());
    assert!(window.state.light_status_bar_icons);
    assert!(!window.called(|c| matches!(c, Call::NavigationBarIcons(_))));

    let window = configured(22);
    assert!(!window.called(|c| *c == Call::InsetsController));
}

#[test]
fn exactly_r() {
    let window = configured(VersionCode::R.into());
    assert_eq!(
        window.calls,
        vec![
            Call::DecorFitsSystemWindows(false),
            Call::StatusBarColor(Argb::TRANSPARENT),
            Call::NavigationBarColor(Argb::TRANSPARENT),
            Call::InsetsController,
            Call::StatusBarIcons(IconStyle::Light),
            Call::NavigationBarIcons(IconStyle::Light),
        ]
    );
}

#[test]
fn missing_controller_skips_icons_only() {
    let mut window = RecordingWindow::without_controller();
    configure_window_chrome(&mut window, VersionCode::R.into()).unwrap();

    assert!(!window.called(|c| matches!(c, Call::StatusBarIcons(_) | Call::NavigationBarIcons(_))));
    assert!(!window.state.decor_fits_system_windows);
    assert!(window.state.status_bar_color.is_transparent());
    assert!(window.state.navigation_bar_color.is_transparent());
    assert!(!window.state.light_status_bar_icons);
}

#[test]
fn configuring_twice_is_idempotent() {
    for level in [21, 23, 26, 29, 30, 34] {
        let once = configured(level);

        let mut twice = RecordingWindow::default();
        configure_window_chrome(&mut twice, SdkVersion::new(level)).unwrap();
        configure_window_chrome(&mut twice, SdkVersion::new(level)).unwrap();

        assert_eq!(once.state, twice.state, "level {level}");
    }
}

#[test]
fn unsupported_release_is_untouched() {
    let window = configured(19);
    assert!(window.calls.is_empty());
    assert_eq!(window.state, ChromeState::default());
}

#[test]
fn custom_config() {
    let config = ChromeConfig::default()
        .with_status_bar_color(Argb::from_argb(0x80, 0, 0, 0))
        .with_icons(IconStyle::Dark);
    let mut window = RecordingWindow::default();
    configure_window_chrome_with(&mut window, VersionCode::Tiramisu.into(), &config).unwrap();

    assert_eq!(window.state.status_bar_color, Argb(0x8000_0000));
    assert!(window.state.navigation_bar_color.is_transparent());
    assert!(!window.state.light_status_bar_icons);
    assert!(!window.state.light_navigation_bar_icons);
    assert!(window.called(|c| *c == Call::NavigationBarIcons(IconStyle::Dark)));
}
