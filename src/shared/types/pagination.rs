/// One page of repository results
#[derive(Debug)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    /// 0-based page index
    pub page: u64,
    pub size: u64,
    pub total_pages: u64,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, size: u64) -> Self {
        let total_pages = if size == 0 { 0 } else { total.div_ceil(size) };
        Self {
            items,
            total,
            page,
            size,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page: PaginatedResult<i32> = PaginatedResult::new(vec![], 21, 0, 10);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn total_pages_exact_fit() {
        let page: PaginatedResult<i32> = PaginatedResult::new(vec![], 20, 1, 10);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn zero_size_yields_zero_pages() {
        let page: PaginatedResult<i32> = PaginatedResult::new(vec![], 5, 0, 0);
        assert_eq!(page.total_pages, 0);
    }
}
