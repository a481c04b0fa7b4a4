//! Timezone name resolution
//!
//! Named timezones come from the IANA database embedded by `chrono-tz`.
//! An absent name means "use the system local zone"; resolution keeps that
//! as `None` so callers can pick the right chrono path.

use chrono_tz::{Tz, TZ_VARIANTS};

use crate::error::ConvertError;

/// Resolve an optional timezone name.
///
/// # Arguments
/// * `name` - IANA identifier such as "Asia/Shanghai", or `None` for the
///   system local zone
///
/// # Returns
/// * `Result<Option<Tz>, ConvertError>` - `Ok(None)` when no name was
///   given, `ConvertError::InvalidTimezone` for an unknown name
pub fn resolve(name: Option<&str>) -> Result<Option<Tz>, ConvertError> {
    match name {
        Some(name) => name
            .parse::<Tz>()
            .map(Some)
            .map_err(|_| ConvertError::InvalidTimezone(name.to_string())),
        None => Ok(None),
    }
}

/// All timezone names known to the embedded database, in catalog order
pub fn available_timezones() -> impl Iterator<Item = &'static str> {
    TZ_VARIANTS.iter().map(|tz| tz.name())
}
