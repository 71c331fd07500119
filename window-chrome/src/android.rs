//! [`ChromeWindow`] over a real `android.view.Window`, reached through JNI.
//!
//! Everything here must run on the activity's UI thread, from inside a Java
//! native method such as one called from `Activity.onCreate()`.

use bitflags::bitflags;
use jni::objects::{JObject, JValue};
use jni::JNIEnv;

use crate::capability::Capabilities;
use crate::chrome::{configure_window_chrome_with, ChromeWindow, InsetsController, LayoutFlags};
use crate::color::Argb;
use crate::config::{ChromeConfig, IconStyle};
use crate::error::{InternalAppError, InternalResult, Result};
use crate::jni_utils::{call_int, call_object, call_void, clear_and_map_exception_to_err};
use crate::sdk::SdkVersion;

// Enough for the window, decor view / inset controller and an exception
const LOCAL_FRAME_CAPACITY: i32 = 16;

bitflags! {
    /// `WindowInsetsController.APPEARANCE_*`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Appearance: i32 {
        const LIGHT_STATUS_BARS = 0x0000_0008;
        const LIGHT_NAVIGATION_BARS = 0x0000_0010;
    }
}

bitflags! {
    /// `View.SYSTEM_UI_FLAG_*`, deprecated in API 30
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct SystemUiFlags: i32 {
        const LIGHT_NAVIGATION_BAR = 0x0000_0010;
        const LIGHT_STATUS_BAR = 0x0000_2000;
    }
}

impl SdkVersion {
    /// Reads `android.os.Build.VERSION.SDK_INT`
    pub fn from_build(env: &mut JNIEnv<'_>) -> Result<Self> {
        Ok(sdk_int(env)?)
    }
}

fn sdk_int(env: &mut JNIEnv<'_>) -> InternalResult<SdkVersion> {
    let sdk_int = env
        .get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
        .map_err(|err| clear_and_map_exception_to_err(env, err))?
        .i()?;
    if sdk_int <= 0 {
        return Err(InternalAppError::InvalidSdkVersion(sdk_int));
    }
    Ok(SdkVersion::new(sdk_int))
}

/// An activity's `android.view.Window`
pub struct ActivityWindow<'env, 'local> {
    env: &'env mut JNIEnv<'local>,
    window: JObject<'local>,
    capabilities: Capabilities,
}

impl<'env, 'local> ActivityWindow<'env, 'local> {
    /// Wraps `window`, which must be a non-null `android.view.Window`
    pub fn new(env: &'env mut JNIEnv<'local>, window: JObject<'local>, sdk: SdkVersion) -> Self {
        Self {
            env,
            window,
            capabilities: Capabilities::for_sdk(sdk),
        }
    }

    /// Looks up the window of an `android.app.Activity` via `getWindow()`
    pub fn from_activity(
        env: &'env mut JNIEnv<'local>,
        activity: &JObject<'_>,
        sdk: SdkVersion,
    ) -> Result<Self> {
        let window = call_object(env, activity, "getWindow", "()Landroid/view/Window;")?;
        if window.is_null() {
            return Err(InternalAppError::WindowUnavailable.into());
        }
        Ok(Self::new(env, window, sdk))
    }

    fn call_void(&mut self, name: &str, sig: &str, args: &[JValue<'_, '_>]) -> Result<()> {
        Ok(call_void(self.env, &self.window, name, sig, args)?)
    }

    fn window_object(&mut self, name: &str, sig: &str) -> Result<Option<JObject<'local>>> {
        let obj = call_object(self.env, &self.window, name, sig)?;
        Ok((!obj.is_null()).then_some(obj))
    }
}

impl<'env, 'local> ChromeWindow for ActivityWindow<'env, 'local> {
    type Controller<'a> = ActivityInsetsController<'a, 'local> where Self: 'a;

    fn set_decor_fits_system_windows(&mut self, fits: bool) -> Result<()> {
        self.call_void("setDecorFitsSystemWindows", "(Z)V", &[JValue::Bool(u8::from(fits))])
    }

    fn set_layout_flags(&mut self, flags: LayoutFlags, mask: LayoutFlags) -> Result<()> {
        self.call_void(
            "setFlags",
            "(II)V",
            &[
                JValue::Int(flags.bits() as i32),
                JValue::Int(mask.bits() as i32),
            ],
        )
    }

    fn set_status_bar_color(&mut self, color: Argb) -> Result<()> {
        self.call_void("setStatusBarColor", "(I)V", &[JValue::Int(color.as_jint())])
    }

    fn set_navigation_bar_color(&mut self, color: Argb) -> Result<()> {
        self.call_void(
            "setNavigationBarColor",
            "(I)V",
            &[JValue::Int(color.as_jint())],
        )
    }

    fn insets_controller(&mut self) -> Result<Option<Self::Controller<'_>>> {
        let target = if self.capabilities.contains(Capabilities::MODERN_INSETS) {
            self.window_object(
                "getInsetsController",
                "()Landroid/view/WindowInsetsController;",
            )?
            .map(ControllerTarget::Framework)
        } else if self.capabilities.has_icon_control() {
            self.window_object("getDecorView", "()Landroid/view/View;")?
                .map(ControllerTarget::DecorView)
        } else {
            None
        };

        Ok(target.map(|target| ActivityInsetsController {
            env: &mut *self.env,
            target,
        }))
    }
}

enum ControllerTarget<'local> {
    /// `android.view.WindowInsetsController`
    Framework(JObject<'local>),
    /// Before API 30 the light bar state lives in the decor view's
    /// `systemUiVisibility`
    DecorView(JObject<'local>),
}

/// Bar icon styling for an [`ActivityWindow`]
pub struct ActivityInsetsController<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
    target: ControllerTarget<'local>,
}

impl<'a, 'local> ActivityInsetsController<'a, 'local> {
    fn set_light_bar(
        &mut self,
        appearance: Appearance,
        ui_flag: SystemUiFlags,
        style: IconStyle,
    ) -> Result<()> {
        let light = style.is_light_bar_appearance();
        match &self.target {
            ControllerTarget::Framework(controller) => {
                let value = if light {
                    appearance
                } else {
                    Appearance::empty()
                };
                call_void(
                    self.env,
                    controller,
                    "setSystemBarsAppearance",
                    "(II)V",
                    &[JValue::Int(value.bits()), JValue::Int(appearance.bits())],
                )?;
            }
            ControllerTarget::DecorView(view) => {
                let current = call_int(self.env, view, "getSystemUiVisibility")?;
                let updated = with_ui_flag(current, ui_flag, light);
                if updated != current {
                    call_void(
                        self.env,
                        view,
                        "setSystemUiVisibility",
                        "(I)V",
                        &[JValue::Int(updated)],
                    )?;
                }
            }
        }
        Ok(())
    }
}

impl<'a, 'local> InsetsController for ActivityInsetsController<'a, 'local> {
    fn set_status_bar_icons(&mut self, style: IconStyle) -> Result<()> {
        self.set_light_bar(
            Appearance::LIGHT_STATUS_BARS,
            SystemUiFlags::LIGHT_STATUS_BAR,
            style,
        )
    }

    fn set_navigation_bar_icons(&mut self, style: IconStyle) -> Result<()> {
        self.set_light_bar(
            Appearance::LIGHT_NAVIGATION_BARS,
            SystemUiFlags::LIGHT_NAVIGATION_BAR,
            style,
        )
    }
}

// Keeps whatever other flags the shell has set
fn with_ui_flag(visibility: i32, flag: SystemUiFlags, set: bool) -> i32 {
    let mut flags = SystemUiFlags::from_bits_retain(visibility);
    flags.set(flag, set);
    flags.bits()
}

/// Configures the window chrome of `activity` with the default
/// [`ChromeConfig`]
///
/// Intended to be called from a native method that the activity invokes in
/// `onCreate()`, right after `super.onCreate()`:
///
/// ```no_run
/// use jni::{objects::JObject, JNIEnv};
///
/// #[no_mangle]
/// pub extern "C" fn Java_com_example_MainActivity_configureWindowChrome(
///     mut env: JNIEnv,
///     activity: JObject,
/// ) {
///     if let Err(err) = window_chrome::configure_activity(&mut env, &activity) {
///         log::error!("Failed to configure window chrome: {err}");
///     }
/// }
/// ```
pub fn configure_activity(env: &mut JNIEnv<'_>, activity: &JObject<'_>) -> Result<()> {
    configure_activity_with(env, activity, &ChromeConfig::default())
}

/// Like [`configure_activity()`] with a custom [`ChromeConfig`]
pub fn configure_activity_with(
    env: &mut JNIEnv<'_>,
    activity: &JObject<'_>,
    config: &ChromeConfig,
) -> Result<()> {
    // We're called from Java so local references would be freed on return
    // anyway, but the shell's onCreate may still be holding plenty of its own
    env.with_local_frame::<_, _, InternalAppError>(LOCAL_FRAME_CAPACITY, |env| {
        Ok(configure_in_frame(env, activity, config))
    })?
}

fn configure_in_frame(
    env: &mut JNIEnv<'_>,
    activity: &JObject<'_>,
    config: &ChromeConfig,
) -> Result<()> {
    let sdk = SdkVersion::from_build(env)?;
    let mut window = ActivityWindow::from_activity(env, activity, sdk)?;
    configure_window_chrome_with(&mut window, sdk, config)
}
