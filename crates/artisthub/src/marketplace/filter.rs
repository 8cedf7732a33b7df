use super::catalog::Artist;

/// One catalog filter field. The legacy UI used `"all"` and the empty string
/// interchangeably as "no filter"; both normalize to [`FilterValue::Unset`] at
/// the boundary so only one representation exists internally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue {
    #[default]
    Unset,
    Exact(String),
}

impl FilterValue {
    /// Normalize a raw query-style parameter. Absent, empty, and `"all"`
    /// (case-insensitive) all mean "no constraint".
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Unset,
            Some(value) if value.eq_ignore_ascii_case("all") => Self::Unset,
            Some(value) => Self::Exact(value.to_string()),
        }
    }

    pub fn as_exact(&self) -> Option<&str> {
        match self {
            Self::Unset => None,
            Self::Exact(value) => Some(value.as_str()),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

/// The three-field predicate narrowing the artist list. All fields are always
/// present; `Unset` fields impose no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub category: FilterValue,
    pub location: FilterValue,
    pub price_range: FilterValue,
}

impl FilterOptions {
    /// No constraints; returns the whole catalog.
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// Seed filters from the three optional query-style parameters.
    pub fn from_params(
        category: Option<&str>,
        location: Option<&str>,
        price_range: Option<&str>,
    ) -> Self {
        Self {
            category: FilterValue::from_param(category),
            location: FilterValue::from_param(location),
            price_range: FilterValue::from_param(price_range),
        }
    }

    /// Conjunction of the three predicates: category membership is
    /// case-insensitive, location and fee range are exact label matches.
    pub fn matches(&self, artist: &Artist) -> bool {
        let category_ok = match self.category.as_exact() {
            None => true,
            Some(wanted) => artist
                .categories
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(wanted)),
        };

        let location_ok = match self.location.as_exact() {
            None => true,
            Some(wanted) => artist.location == wanted,
        };

        let price_ok = match self.price_range.as_exact() {
            None => true,
            Some(wanted) => artist.fee_range == wanted,
        };

        category_ok && location_ok && price_ok
    }
}
