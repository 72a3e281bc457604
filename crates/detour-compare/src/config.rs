//! Comparator configuration.

/// Settings for a [`DetourComparator`][crate::DetourComparator].
///
/// Typically built in code or deserialized from a config file by the
/// application (with the `serde` feature) and passed to
/// [`DetourComparator::new`][crate::DetourComparator::new].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompareConfig {
    /// Reject pairs containing non-finite or out-of-range coordinates before
    /// comparing.  Off by default: the bare formulas accept any number.
    pub validate_coordinates: bool,
}

impl CompareConfig {
    /// Configuration with coordinate validation switched on.
    pub fn validating() -> Self {
        Self { validate_coordinates: true }
    }
}
