use std::fmt;
use std::str::FromStr;

/// Results per page requested when the user has not picked a size.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// The selectable results-per-page options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSize {
    Ten,
    Forty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Forty, PageSize::Hundred];

    pub fn per_page(self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::Forty => 40,
            PageSize::Hundred => 100,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.per_page())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported page size {0:?} (expected 10, 40 or 100)")]
pub struct InvalidPageSize(pub String);

impl FromStr for PageSize {
    type Err = InvalidPageSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PageSize::ALL
            .into_iter()
            .find(|size| size.per_page().to_string() == wanted)
            .ok_or_else(|| InvalidPageSize(wanted.to_string()))
    }
}

/// What the user is searching for and where they are in the result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    /// 1-based page number.
    pub page: u32,
    /// `None` until the user picks a size; requests then use [`DEFAULT_PER_PAGE`].
    pub page_size: Option<PageSize>,
}

impl SearchQuery {
    pub fn per_page(&self) -> u32 {
        self.page_size.map_or(DEFAULT_PER_PAGE, PageSize::per_page)
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            page: 1,
            page_size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_parses_supported_values_only() {
        assert_eq!("10".parse::<PageSize>(), Ok(PageSize::Ten));
        assert_eq!(" 40 ".parse::<PageSize>(), Ok(PageSize::Forty));
        assert_eq!("100".parse::<PageSize>(), Ok(PageSize::Hundred));
        assert!("20".parse::<PageSize>().is_err());
        assert!("ten".parse::<PageSize>().is_err());
    }

    #[test]
    fn every_page_size_parses_from_its_label() {
        for size in PageSize::ALL {
            assert_eq!(size.to_string().parse::<PageSize>(), Ok(size));
        }
    }

    #[test]
    fn unselected_page_size_uses_default() {
        let mut query = SearchQuery::default();
        assert_eq!(query.per_page(), DEFAULT_PER_PAGE);
        query.page_size = Some(PageSize::Hundred);
        assert_eq!(query.per_page(), 100);
    }
}
