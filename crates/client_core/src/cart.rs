/// Running count of "buy" clicks for the session. Never decremented or persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartCounter {
    count: u64,
}

impl CartCounter {
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn increment(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_increments_display_three() {
        let mut cart = CartCounter::default();
        cart.increment();
        cart.increment();
        assert_eq!(cart.increment().to_string(), "3");
        assert_eq!(cart.count(), 3);
    }
}
