/// Step by which the visible count grows per "load more".
pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    visible_count: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            visible_count: PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn reset(&mut self) {
        self.visible_count = PAGE_SIZE;
    }

    pub fn advance(&mut self) {
        self.visible_count = self.visible_count.saturating_add(PAGE_SIZE);
    }

    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_count.min(items.len())]
    }

    pub fn has_more<T>(&self, items: &[T]) -> bool {
        self.visible_count < items.len()
    }
}
