//! The window calls we make are usually from inside a Java native method
//! (`onCreate`), but we still don't want to leave exceptions pending for the
//! caller to trip over, since the host shell never expects our method to
//! throw.
//!
//! These utilities help us check + clear exceptions and map them into Rust Errors.

use jni::{
    objects::{JObject, JString, JValue},
    JNIEnv,
};

use crate::error::{InternalAppError, InternalResult};

/// Use with `.map_err()` to map `jni::errors::Error::JavaException` into a
/// richer error based on the actual contents of the `JThrowable`
///
/// (The `jni` crate doesn't do that automatically since it's more
/// common to let the exception get thrown when returning to Java)
///
/// This will also clear the exception
pub(crate) fn clear_and_map_exception_to_err(
    env: &mut JNIEnv<'_>,
    err: jni::errors::Error,
) -> InternalAppError {
    if matches!(err, jni::errors::Error::JavaException) {
        let result = env.with_local_frame::<_, _, InternalAppError>(5, |env| {
            let e = env.exception_occurred()?;
            if e.is_null() {
                return Ok(String::from("UNKNOWN (no pending exception)"));
            }
            env.exception_clear()?;

            let msg = env
                .call_method(&e, "toString", "()Ljava/lang/String;", &[])?
                .l()?;
            let msg = JString::from(msg);
            let msg: String = env.get_string(&msg)?.into();

            Ok(msg)
        });

        match result {
            Ok(msg) => InternalAppError::JniException(msg),
            Err(err) => InternalAppError::JniException(format!(
                "UNKNOWN (Failed to query JThrowable: {err:?})"
            )),
        }
    } else {
        err.into()
    }
}

/// Calls a `void` instance method
pub(crate) fn call_void(
    env: &mut JNIEnv<'_>,
    obj: &JObject<'_>,
    name: &str,
    sig: &str,
    args: &[JValue<'_, '_>],
) -> InternalResult<()> {
    env.call_method(obj, name, sig, args)
        .map_err(|err| clear_and_map_exception_to_err(env, err))?;
    Ok(())
}

/// Calls a no-argument `int` getter
pub(crate) fn call_int(
    env: &mut JNIEnv<'_>,
    obj: &JObject<'_>,
    name: &str,
) -> InternalResult<i32> {
    let value = env
        .call_method(obj, name, "()I", &[])
        .map_err(|err| clear_and_map_exception_to_err(env, err))?;
    Ok(value.i()?)
}

/// Calls a no-argument getter returning an object, which may be null
pub(crate) fn call_object<'local>(
    env: &mut JNIEnv<'local>,
    obj: &JObject<'_>,
    name: &str,
    sig: &str,
) -> InternalResult<JObject<'local>> {
    let value = env
        .call_method(obj, name, sig, &[])
        .map_err(|err| clear_and_map_exception_to_err(env, err))?;
    Ok(value.l()?)
}
