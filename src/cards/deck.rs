//! The card deck: a fixed template multiset and a shuffled working supply.
//!
//! Cards are dealt from the front of the supply without replacement. When
//! the supply runs out it is refilled from the template and reshuffled.
//! Whether the refill reseeds the RNG depends on the [`SeedPolicy`].

use log::debug;

use super::definition::{Card, CardTypeId};
use crate::board::{Candy, Color};
use crate::core::{clock_seed, GameRng, SeedPolicy};

/// Colour card counts per colour: (colour, doubles, singles).
pub const COLOR_COUNTS: [(Color, usize, usize); 6] = [
    (Color::Red, 2, 8),
    (Color::Orange, 2, 7),
    (Color::Yellow, 2, 7),
    (Color::Green, 2, 8),
    (Color::Blue, 3, 7),
    (Color::Purple, 2, 7),
];

/// Build the standard 64-card template.
///
/// One shortcut card per candy, then for each colour its doubles followed
/// by its singles. Each (colour, single/double) kind gets the next
/// `CardTypeId`.
#[must_use]
pub fn standard_cards() -> Vec<Card> {
    let mut cards: Vec<Card> = Candy::ALL.iter().copied().map(Card::Candy).collect();
    let mut next_type = 0u32;

    for (color, doubles, singles) in COLOR_COUNTS {
        for (double, count) in [(true, doubles), (false, singles)] {
            let card = Card::Color {
                color,
                double,
                card_type: CardTypeId::new(next_type),
            };
            next_type += 1;
            cards.extend(std::iter::repeat(card).take(count));
        }
    }

    cards
}

/// Template plus dealer.
///
/// Not shareable across threads while dealing: `deal` takes `&mut self`.
///
/// ## Example
///
/// ```
/// use candy_lane::cards::Deck;
/// use candy_lane::core::SeedPolicy;
///
/// let mut deck = Deck::standard(SeedPolicy::Fixed(7));
/// assert_eq!(deck.len(), 64);
///
/// let first = *deck.deal();
/// assert_eq!(deck.refills(), 1);
/// assert_eq!(deck.remaining(), 63);
/// assert!(deck.template().contains(&first));
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    template: Vec<Card>,
    supply: Vec<Card>,
    next: usize,
    rng: GameRng,
    seeding: SeedPolicy,
    refills: u64,
}

impl Deck {
    /// Standard deck with the given seeding policy.
    #[must_use]
    pub fn standard(seeding: SeedPolicy) -> Self {
        Self::from_cards(standard_cards(), seeding)
    }

    /// Deck over an arbitrary template. The working supply starts empty,
    /// so the first deal shuffles.
    ///
    /// Panics if `template` is empty.
    #[must_use]
    pub fn from_cards(template: Vec<Card>, seeding: SeedPolicy) -> Self {
        assert!(!template.is_empty(), "Deck template must not be empty");

        Self {
            supply: Vec::with_capacity(template.len()),
            template,
            next: 0,
            rng: GameRng::new(seeding.initial_seed()),
            seeding,
            refills: 0,
        }
    }

    /// Draw one card without replacement, refilling first if exhausted.
    pub fn deal(&mut self) -> &Card {
        if self.next >= self.supply.len() {
            self.refill();
        }
        let index = self.next;
        self.next += 1;
        &self.supply[index]
    }

    fn refill(&mut self) {
        if self.seeding.reseeds_on_refill() {
            self.rng.reseed(clock_seed());
        }
        self.supply.clear();
        self.supply.extend_from_slice(&self.template);
        self.rng.shuffle(&mut self.supply);
        self.next = 0;
        self.refills += 1;
        debug!("deck refill #{} (seed {})", self.refills, self.rng.seed());
    }

    /// Template size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.template.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.template.is_empty()
    }

    /// Cards left in the working supply before the next refill.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.supply.len() - self.next
    }

    /// Number of refills so far, including the initial shuffle.
    #[must_use]
    pub fn refills(&self) -> u64 {
        self.refills
    }

    #[must_use]
    pub fn template(&self) -> &[Card] {
        &self.template
    }

    #[must_use]
    pub fn seeding(&self) -> SeedPolicy {
        self.seeding
    }
}
