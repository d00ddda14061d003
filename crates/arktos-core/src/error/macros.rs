//! Error macros for arktos

/// Macro for returning a collection service error
#[macro_export]
macro_rules! bail_service {
    ($service:expr, $msg:expr) => {
        return Err($crate::error::ArktosError::service($service, $msg))
    };
}
