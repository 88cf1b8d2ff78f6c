/// Per-company count of candidate pages attempted.
///
/// Owned by the company scan loop and passed along explicitly; pages skipped
/// by robots.txt consume budget too.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanBudget {
    max_pages: usize,
    tried: usize,
}

impl ScanBudget {
    pub fn new(max_pages: usize) -> Self {
        Self { max_pages, tried: 0 }
    }

    /// Take one page from the budget, returning its 1-based attempt number,
    /// or `None` once the budget is spent.
    pub fn try_consume(&mut self) -> Option<usize> {
        if self.tried >= self.max_pages {
            return None;
        }
        self.tried += 1;
        Some(self.tried)
    }

    pub fn tried(&self) -> usize {
        self.tried
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_is_spent_after_max_pages() {
        let mut budget = ScanBudget::new(2);
        assert_eq!(budget.try_consume(), Some(1));
        assert_eq!(budget.try_consume(), Some(2));
        assert_eq!(budget.try_consume(), None);
        assert_eq!(budget.tried(), 2);
    }
}
