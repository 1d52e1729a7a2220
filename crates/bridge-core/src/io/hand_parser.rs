use crate::card::Card;
use crate::hand::Hand;
use crate::rank::Rank;
use crate::suit::Suit;

/// Parses four per-suit holdings (spades, hearts, diamonds, clubs) into a hand.
///
/// Each holding is a string of rank characters such as `"AKT63"`. Whitespace
/// and any character that is not a rank are dropped, so `"A K 10 3"` and
/// `"AKT3"` read the same. An empty holding is a void.
///
/// Card counts are not checked here; see `Board::validate` for that.
pub fn parse_hand(spades: &str, hearts: &str, diamonds: &str, clubs: &str) -> Hand {
    let mut cards = Vec::new();
    for (suit, holding) in [
        (Suit::Spades, spades),
        (Suit::Hearts, hearts),
        (Suit::Diamonds, diamonds),
        (Suit::Clubs, clubs),
    ] {
        cards.extend(parse_holding(suit, holding));
    }
    Hand { cards }
}

/// Cards named by a single suit holding, in the order written.
pub fn parse_holding(suit: Suit, holding: &str) -> Vec<Card> {
    holding
        .chars()
        .filter_map(Rank::from_char)
        .map(|rank| Card { suit, rank })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hand() {
        let hand = parse_hand("AKT63", "Q8", "", "K62");
        assert_eq!(hand.len(), 10);
        assert_eq!(hand.length(Suit::Spades), 5);
        assert_eq!(hand.length(Suit::Hearts), 2);
        assert_eq!(hand.length(Suit::Diamonds), 0);
        assert_eq!(hand.length(Suit::Clubs), 3);
        assert!(hand.contains(Card::new(Suit::Spades, Rank::Ten)));
    }

    #[test]
    fn test_parse_hand_drops_noise() {
        let hand = parse_hand(" A K 10 3 ", "x-Q", "", "");
        assert_eq!(hand.holding(Suit::Spades), "AKT3");
        assert_eq!(hand.holding(Suit::Hearts), "Q");
    }
}
