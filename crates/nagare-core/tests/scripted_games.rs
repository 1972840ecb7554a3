use nagare_core::game::GameEngine;
use nagare_core::model::player::Player;
use nagare_core::policy::FirstLegal;
use proptest::prelude::*;
use std::collections::HashSet;

fn bots(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| Player::scripted(format!("Bot{i}"), FirstLegal))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn scripted_games_finish_with_a_full_ranking(seed in any::<u64>(), seats in 2usize..=7) {
        let mut engine = GameEngine::with_seed(bots(seats), seed).unwrap();
        engine.resolve_opponents();

        prop_assert!(engine.is_ended());
        let ranking = engine.ranking().unwrap();
        let mut ranked: Vec<usize> = ranking.iter().map(|s| s.seat).collect();
        ranked.sort_unstable();
        prop_assert_eq!(ranked, (0..seats).collect::<Vec<_>>());

        let holding: Vec<usize> = engine
            .players()
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.hand().is_empty())
            .map(|(seat, _)| seat)
            .collect();
        prop_assert_eq!(holding.len(), 1);
        prop_assert_eq!(ranking.last().map(|s| s.seat), Some(holding[0]));
    }

    #[test]
    fn scripted_games_never_lose_or_copy_a_card(seed in any::<u64>(), seats in 2usize..=7) {
        let mut engine = GameEngine::with_seed(bots(seats), seed).unwrap();
        engine.resolve_opponents();

        let field = engine.field();
        let mut cards: Vec<_> = engine
            .players()
            .iter()
            .flat_map(|p| p.hand().iter().copied())
            .collect();
        cards.extend(field.deck().cards().iter().copied());
        cards.extend(field.cemetery().iter().copied());
        cards.extend(field.top());
        let unique: HashSet<_> = cards.iter().copied().collect();
        prop_assert_eq!(cards.len(), 52);
        prop_assert_eq!(unique.len(), 52);
    }
}
