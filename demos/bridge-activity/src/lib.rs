//! Native half of a bridge activity that wants edge-to-edge chrome.
//!
//! The Java side only needs to load the library and call the native method
//! once its own `onCreate()` work is done:
//!
//! ```java
//! public class MainActivity extends BridgeActivity {
//!     static { System.loadLibrary("bridge_activity"); }
//!
//!     private native void configureWindowChrome();
//!
//!     @Override
//!     protected void onCreate(Bundle savedInstanceState) {
//!         super.onCreate(savedInstanceState);
//!         configureWindowChrome();
//!     }
//! }
//! ```

use jni::objects::JObject;
use jni::JNIEnv;
use log::{error, info, Level};

#[allow(non_snake_case)]
#[no_mangle]
pub extern "C" fn Java_com_lotriflow_smokefree_MainActivity_configureWindowChrome(
    mut env: JNIEnv,
    activity: JObject, // This is the MainActivity instance
) {
    android_logger::init_once(android_logger::Config::default().with_min_level(Level::Info));

    match window_chrome::SdkVersion::from_system_properties() {
        Ok(sdk) => info!("Configuring window chrome on SDK {sdk}"),
        Err(err) => error!("{err}"),
    }

    if let Err(err) = window_chrome::configure_activity(&mut env, &activity) {
        error!("Failed to configure window chrome: {err}");
    }
}
