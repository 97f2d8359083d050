use crate::domain::model::Record;
use crate::utils::error::{CatalogError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    size: usize,
    number: usize,
}

impl PageRequest {
    /// `size` must be at least 1 and `number` is 1-based.
    pub fn new(size: usize, number: usize) -> Result<Self> {
        if size == 0 || number == 0 {
            return Err(CatalogError::InvalidPageRequest { size, number });
        }
        Ok(Self { size, number })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// Index range `[(number-1)*size, (number-1)*size + size)` clipped to `len`.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let start = (self.number - 1).saturating_mul(self.size).min(len);
        let end = start.saturating_add(self.size).min(len);
        (start, end)
    }

    pub fn slice<'a>(&self, items: &'a [Record]) -> &'a [Record] {
        let (start, end) = self.bounds(items.len());
        &items[start..end]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
    pub number: usize,
    pub size: usize,
    pub total_records: usize,
    pub records: &'a [Record],
}

impl<'a> Page<'a> {
    pub fn new(request: PageRequest, items: &'a [Record]) -> Self {
        Self {
            number: request.number(),
            size: request.size(),
            total_records: items.len(),
            records: request.slice(items),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_records.div_ceil(self.size)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| [("ID", i.to_string())].into_iter().collect())
            .collect()
    }

    #[test]
    fn test_rejects_zero_size_or_number() {
        assert!(matches!(
            PageRequest::new(0, 1),
            Err(CatalogError::InvalidPageRequest { size: 0, number: 1 })
        ));
        assert!(PageRequest::new(5, 0).is_err());
        assert!(PageRequest::new(1, 1).is_ok());
    }

    #[test]
    fn test_bounds_clip_to_length() {
        let request = PageRequest::new(4, 2).unwrap();
        assert_eq!(request.bounds(10), (4, 8));
        assert_eq!(request.bounds(6), (4, 6));
        assert_eq!(request.bounds(3), (3, 3));
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let request = PageRequest::new(usize::MAX, usize::MAX).unwrap();
        assert_eq!(request.bounds(3), (3, 3));
    }

    #[test]
    fn test_page_metadata() {
        let data = items(5);
        let page = Page::new(PageRequest::new(2, 3).unwrap(), &data);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].id(), Some("4"));
        assert_eq!(page.total_pages(), 3);

        let past_end = Page::new(PageRequest::new(2, 4).unwrap(), &data);
        assert!(past_end.is_empty());
        assert_eq!(past_end.total_pages(), 3);
    }
}
