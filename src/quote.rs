//! Random quote selection.
//!
//! A selector starts `Unselected` and moves to `Selected` the first time it is
//! mounted on a non-empty quote list. After that it never changes: mounting
//! again returns the same quote. One selector lives for one page render.

use rand::Rng;

use crate::content::Quote;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteState<'q> {
    #[default]
    Unselected,
    Selected(&'q Quote),
}

#[derive(Debug, Default)]
pub struct QuoteSelector<'q> {
    state: QuoteState<'q>,
}

impl<'q> QuoteSelector<'q> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick one of `quotes` uniformly at random, unless already selected.
    ///
    /// An empty list leaves the selector unselected.
    pub fn mount<R: Rng + ?Sized>(
        &mut self,
        quotes: &'q [Quote],
        rng: &mut R,
    ) -> Option<&'q Quote> {
        if let QuoteState::Selected(quote) = self.state {
            return Some(quote);
        }
        if quotes.is_empty() {
            crate::debug!("quote"; "no quotes to select from");
            return None;
        }

        let quote = &quotes[rng.random_range(0..quotes.len())];
        self.state = QuoteState::Selected(quote);
        Some(quote)
    }

    pub fn selected(&self) -> Option<&'q Quote> {
        match self.state {
            QuoteState::Selected(quote) => Some(quote),
            QuoteState::Unselected => None,
        }
    }

    pub fn state(&self) -> QuoteState<'q> {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn quotes() -> Vec<Quote> {
        vec![
            Quote::new("A man's dream will never die!", "Marshall D. Teach, One Piece"),
            Quote::new(
                "If you don't take risks, you can't create a future.",
                "Monkey D. Luffy, One Piece",
            ),
            Quote::new(
                "Hard work is worthless for those that don't believe in themselves.",
                "Naruto Uzumaki, Naruto",
            ),
            Quote::new("Power comes in response to a need, not a desire.", "Goku, Dragon Ball Z"),
        ]
    }

    #[test]
    fn test_eventually_selects_every_quote() {
        let quotes = quotes();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = vec![false; quotes.len()];

        for _ in 0..500 {
            let mut selector = QuoteSelector::new();
            let picked = selector.mount(&quotes, &mut rng).unwrap();
            let index = quotes
                .iter()
                .position(|q| std::ptr::eq(q, picked))
                .expect("selected quote must come from the list");
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_mount_does_not_reselect() {
        let quotes = quotes();
        let mut rng = StdRng::seed_from_u64(42);
        let mut selector = QuoteSelector::new();

        let first = selector.mount(&quotes, &mut rng).unwrap();
        for _ in 0..20 {
            assert!(std::ptr::eq(selector.mount(&quotes, &mut rng).unwrap(), first));
        }
        assert_eq!(selector.state(), QuoteState::Selected(first));
    }

    #[test]
    fn test_empty_stays_unselected() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut selector = QuoteSelector::new();

        assert!(selector.mount(&[], &mut rng).is_none());
        assert_eq!(selector.state(), QuoteState::Unselected);
        assert!(selector.selected().is_none());
    }
}
