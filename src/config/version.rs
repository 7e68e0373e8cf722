//! Storefront API version definitions.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Shopify Storefront API version.
///
/// Versions are released quarterly (January, April, July, October) and are
/// embedded in the endpoint path: `/api/{version}/graphql.json`.
///
/// # Example
///
/// ```rust
/// use storefront_paginator::ApiVersion;
///
/// let version: ApiVersion = "2019-10".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2019_10);
/// assert_eq!(ApiVersion::V2025_10.to_string(), "2025-10");
///
/// // Releases without a dedicated variant are still accepted
/// let future: ApiVersion = "2026-04".parse().unwrap();
/// assert_eq!(future, ApiVersion::Custom("2026-04".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2019-10, the release the cursor-walking queries were first written against.
    V2019_10,
    /// API version 2024-10 (October 2024)
    V2024_10,
    /// API version 2025-01 (January 2025)
    V2025_01,
    /// API version 2025-04 (April 2025)
    V2025_04,
    /// API version 2025-07 (July 2025)
    V2025_07,
    /// API version 2025-10 (October 2025)
    V2025_10,
    /// Unstable API version for development and testing.
    Unstable,
    /// Any other quarterly release in `YYYY-MM` form.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns `true` if this is a named stable release.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    /// Returns the endpoint path for this version, relative to the store URL.
    ///
    /// ```rust
    /// use storefront_paginator::ApiVersion;
    ///
    /// assert_eq!(ApiVersion::V2019_10.graphql_path(), "api/2019-10/graphql.json");
    /// ```
    #[must_use]
    pub fn graphql_path(&self) -> String {
        format!("api/{self}/graphql.json")
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
            && matches!(month, "01" | "04" | "07" | "10")
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2019_10 => "2019-10",
            Self::V2024_10 => "2024-10",
            Self::V2025_01 => "2025-01",
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::V2025_10 => "2025-10",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "2019-10" => Ok(Self::V2019_10),
            "2024-10" => Ok(Self::V2024_10),
            "2025-01" => Ok(Self::V2025_01),
            "2025-04" => Ok(Self::V2025_04),
            "2025-07" => Ok(Self::V2025_07),
            "2025-10" => Ok(Self::V2025_10),
            "unstable" => Ok(Self::Unstable),
            _ if Self::is_valid_version_format(&s) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
