use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Java VM or JNI error, including Java exceptions: {0}")]
    JavaError(String),

    #[error("Activity has no window")]
    WindowUnavailable,

    #[error("Invalid SDK version: {0:?}")]
    InvalidSdkVersion(String),

    #[error("SDK version could not be determined")]
    SdkVersionUnavailable,

    #[error("Invalid colour: {0:?}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

// XXX: we don't want to expose jni-rs in the public API
// so the binding uses an internal error type and the
// public entry points strip it down to an `AppError`.
//
// This way we avoid exposing a public trait implementation for
// `From<jni::errors::Error>`
#[derive(Error, Debug)]
pub(crate) enum InternalAppError {
    #[error("A JNI error")]
    JniError(jni::errors::JniError),
    #[error("A Java Exception was thrown via a JNI method call")]
    JniException(String),
    #[error("A Java VM error")]
    JvmError(jni::errors::Error),
    #[error("Activity has no window")]
    WindowUnavailable,
    #[error("Invalid SDK version")]
    InvalidSdkVersion(i32),
}

pub(crate) type InternalResult<T> = std::result::Result<T, InternalAppError>;

impl From<jni::errors::Error> for InternalAppError {
    fn from(value: jni::errors::Error) -> Self {
        InternalAppError::JvmError(value)
    }
}
impl From<jni::errors::JniError> for InternalAppError {
    fn from(value: jni::errors::JniError) -> Self {
        InternalAppError::JniError(value)
    }
}

impl From<InternalAppError> for AppError {
    fn from(value: InternalAppError) -> Self {
        match value {
            InternalAppError::JniError(err) => AppError::JavaError(err.to_string()),
            InternalAppError::JniException(msg) => AppError::JavaError(msg),
            InternalAppError::JvmError(err) => AppError::JavaError(err.to_string()),
            InternalAppError::WindowUnavailable => AppError::WindowUnavailable,
            InternalAppError::InvalidSdkVersion(sdk) => {
                AppError::InvalidSdkVersion(sdk.to_string())
            }
        }
    }
}

