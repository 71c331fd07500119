use std::fmt;
use std::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{AppError, Result};

/// Named platform API levels that the chrome policy cares about
///
/// See [`Build.VERSION_CODES`](https://developer.android.com/reference/android/os/Build.VERSION_CODES)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
#[non_exhaustive]
pub enum VersionCode {
    /// Android 5.0, first release with runtime bar colours
    Lollipop = 21,
    LollipopMr1 = 22,
    /// Android 6.0, first release with light status bar icons
    M = 23,
    N = 24,
    NMr1 = 25,
    /// Android 8.0, first release with light navigation bar icons
    O = 26,
    OMr1 = 27,
    P = 28,
    Q = 29,
    /// Android 11, first release with `WindowInsetsController`
    R = 30,
    S = 31,
    Sv2 = 32,
    Tiramisu = 33,
    UpsideDownCake = 34,
    VanillaIceCream = 35,
}

/// The user-visible SDK version of the running framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SdkVersion(i32);

impl SdkVersion {
    pub const fn new(api_level: i32) -> Self {
        Self(api_level)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    pub fn at_least(self, code: VersionCode) -> bool {
        self.0 >= i32::from(code)
    }

    /// Returns the named version code for this exact API level, if there is one
    pub fn version_code(self) -> Option<VersionCode> {
        VersionCode::try_from(self.0).ok()
    }

    /// Reads the `ro.build.version.sdk` system property
    #[cfg(target_os = "android")]
    pub fn from_system_properties() -> Result<Self> {
        let prop = android_properties::getprop("ro.build.version.sdk");
        match prop.value() {
            Some(val) => val.parse(),
            None => Err(AppError::SdkVersionUnavailable),
        }
    }
}

impl From<VersionCode> for SdkVersion {
    fn from(code: VersionCode) -> Self {
        Self(code.into())
    }
}

impl fmt::Display for SdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version_code() {
            Some(code) => write!(f, "{} ({:?})", self.0, code),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for SdkVersion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<i32>() {
            Ok(level) if level > 0 => Ok(Self(level)),
            _ => Err(AppError::InvalidSdkVersion(s.to_owned())),
        }
    }
}
