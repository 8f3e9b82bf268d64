//! The week: seven ordered columns of cards.

use crate::card::{Card, CardId};
use crate::event::Weekday;

#[derive(Debug, Clone, Default)]
pub struct WeekBoard {
    columns: [Vec<Card>; 7],
}

impl WeekBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the end of its weekday column.
    pub fn insert(&mut self, card: Card) {
        self.columns[card.weekday.column()].push(card);
    }

    /// Remove the card with `id`, wherever it is.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        self.columns.iter_mut().find_map(|column| {
            let pos = column.iter().position(|card| card.id == id)?;
            Some(column.remove(pos))
        })
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards().find(|card| card.id == id)
    }

    pub fn column(&self, weekday: Weekday) -> &[Card] {
        &self.columns[weekday.column()]
    }

    /// All cards, column by column from Sunday.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.columns.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of cards carrying `id`. Anything other than 0 or 1 means the
    /// board is out of step with the store.
    pub fn count(&self, id: CardId) -> usize {
        self.cards().filter(|card| card.id == id).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(index: usize, weekday: Weekday) -> Card {
        Card {
            id: CardId(index),
            weekday,
            background: "#f0f0f0".into(),
            title: format!("event {}", index),
            details: Vec::new(),
        }
    }

    #[test]
    fn cards_land_in_their_weekday_column() {
        let mut board = WeekBoard::new();
        board.insert(card(0, Weekday::Monday));
        board.insert(card(1, Weekday::Friday));
        board.insert(card(2, Weekday::Monday));

        let monday: Vec<_> = board.column(Weekday::Monday).iter().map(|c| c.id).collect();
        assert_eq!(monday, vec![CardId(0), CardId(2)]);
        assert_eq!(board.column(Weekday::Friday).len(), 1);
        assert!(board.column(Weekday::Sunday).is_empty());
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn remove_takes_card_out_of_any_column() {
        let mut board = WeekBoard::new();
        board.insert(card(0, Weekday::Tuesday));
        board.insert(card(1, Weekday::Saturday));

        let removed = board.remove(CardId(1)).unwrap();
        assert_eq!(removed.weekday, Weekday::Saturday);
        assert!(board.get(CardId(1)).is_none());
        assert_eq!(board.count(CardId(0)), 1);
        assert!(board.remove(CardId(7)).is_none());
    }

    #[test]
    fn cards_iterate_from_sunday() {
        let mut board = WeekBoard::new();
        board.insert(card(0, Weekday::Saturday));
        board.insert(card(1, Weekday::Sunday));

        let order: Vec<_> = board.cards().map(|c| c.id).collect();
        assert_eq!(order, vec![CardId(1), CardId(0)]);
    }
}
