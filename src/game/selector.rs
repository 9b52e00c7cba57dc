use rand::Rng;

use crate::utils::letters::letter_pool;

pub struct LetterSelector;

impl LetterSelector {
    /// Draw `count` distinct letters from the letter table
    pub fn generate(count: usize, rng: &mut impl Rng) -> Vec<char> {
        Self::choose_n(count, letter_pool(), rng)
    }

    /// Pick `n` items uniformly without replacement.
    /// Returns fewer than `n` items when the pool runs out.
    pub fn choose_n<T>(n: usize, mut items: Vec<T>, rng: &mut impl Rng) -> Vec<T> {
        let total = n.min(items.len());
        let mut selected = Vec::with_capacity(total);

        for _ in 0..total {
            let idx = rng.random_range(0..items.len());
            selected.push(items.remove(idx));
        }

        selected
    }
}
