/// Number of questions returned per page by every paginated endpoint
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number
///
/// # Invariants
/// - Always >= 1; smaller requests are floored to the first page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    /// Creates a page number, flooring anything below 1
    pub fn new(number: i64) -> Self {
        Page(number.clamp(1, i64::from(u32::MAX)) as u32)
    }

    /// Parses a raw `page` query value
    ///
    /// Missing or non-numeric input falls back to the first page.
    ///
    /// # Example
    /// ```
    /// use trivia_api::domain::pagination::Page;
    ///
    /// assert_eq!(Page::parse(Some("3")).number(), 3);
    /// assert_eq!(Page::parse(Some("abc")).number(), 1);
    /// assert_eq!(Page::parse(Some("-4")).number(), 1);
    /// ```
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl Default for Page {
    fn default() -> Self {
        Page(1)
    }
}

/// Returns the `[(page-1)*per_page, page*per_page)` window of `items`
///
/// Pages past the end of `items` yield an empty slice; callers decide whether
/// that means "not found".
pub fn paginate<T>(items: &[T], page: Page, per_page: usize) -> &[T] {
    let start = (page.number() as usize - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}
