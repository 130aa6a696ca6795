use serde::{Deserialize, Serialize};

/// Parameters of a documentation lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsRequest {
    /// Symbol or function to look up, e.g. `Plot` or `FCFeynmanParametrize`.
    pub symbol: String,
    /// Packages to import before the lookup, in load order.
    #[serde(default)]
    pub packages: Option<Vec<String>>,
    /// Addons to register through `$LoadAddOns` before any import.
    #[serde(default)]
    pub load_addons: Option<Vec<String>>,
}

impl DocsRequest {
    /// Creates a lookup for `symbol` with nothing preloaded.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Packages to import, with an empty list treated as absent.
    pub fn packages(&self) -> &[String] {
        non_empty(&self.packages)
    }

    /// Addons to load, with an empty list treated as absent.
    pub fn addons(&self) -> &[String] {
        non_empty(&self.load_addons)
    }
}

/// Parameters of a package symbol listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolsRequest {
    /// Package whose context is enumerated, e.g. `FeynCalc`.
    pub package: String,
    /// Addons to register through `$LoadAddOns` before the import.
    #[serde(default)]
    pub load_addons: Option<Vec<String>>,
}

impl SymbolsRequest {
    /// Creates a listing for `package` with no addons.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Default::default()
        }
    }

    /// Addons to load, with an empty list treated as absent.
    pub fn addons(&self) -> &[String] {
        non_empty(&self.load_addons)
    }
}

fn non_empty(list: &Option<Vec<String>>) -> &[String] {
    list.as_deref().unwrap_or(&[])
}
