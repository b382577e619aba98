//! The entity list and the run lifecycle that fills and empties it.

use super::entity::{Bird, Entity, EntityKind};
use crate::assets::PipeEnd;
use crate::config::GameConfig;
use crate::constants::*;
use rand::Rng;

/// Ordered entities. Index 0 is always the player while a run is live;
/// pipes follow as (upper, lower) pairs in increasing x.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub entities: Vec<Entity>,
}

/// Gap half-height for a pipe pair, narrowing at fixed index thresholds.
pub fn gap_half_height(pair: usize) -> f32 {
    GAP_RAMP
        .iter()
        .rev()
        .find(|(first, _)| pair >= *first)
        .map_or(GAP_RAMP[0].1, |(_, half)| *half)
}

/// Left edge of a pipe pair.
pub fn pair_x(pair: usize) -> f32 {
    FIRST_PIPE_X + pair as f32 * PIPE_SPACING
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the player and every pipe pair for a new run.
    pub fn start<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        debug_assert!(self.entities.is_empty(), "start called on a live world");
        self.entities.reserve(1 + config.pipe_pairs * 2);
        self.entities.push(Entity::bird(config.bird_color));

        for pair in 0..config.pipe_pairs {
            let half = gap_half_height(pair);
            let center = rng.gen_range(half..=WORLD_HEIGHT - half);
            let x = pair_x(pair);
            self.entities.push(Entity::pipe(
                config.pipe_color,
                PipeEnd::Upper,
                pair,
                x,
                center - half,
            ));
            self.entities.push(Entity::pipe(
                config.pipe_color,
                PipeEnd::Lower,
                pair,
                x,
                center + half,
            ));
        }
    }

    /// Release every entity.
    pub fn end(&mut self) {
        self.entities.clear();
    }

    pub fn is_live(&self) -> bool {
        self.entities.first().is_some_and(Entity::is_bird)
    }

    pub fn player(&self) -> &Entity {
        &self.entities[0]
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        &mut self.entities[0]
    }

    /// The player's kind-specific state.
    pub fn bird(&self) -> Option<&Bird> {
        match &self.player().kind {
            EntityKind::Bird(bird) => Some(bird),
            EntityKind::Pipe(_) => None,
        }
    }

    pub fn pipes(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().skip(1)
    }

    pub fn pipe_pairs(&self) -> usize {
        self.entities.len().saturating_sub(1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn started(pairs: usize, seed: u64) -> World {
        let config = GameConfig {
            pipe_pairs: pairs,
            ..GameConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut world = World::new();
        world.start(&config, &mut rng);
        world
    }

    #[test]
    fn test_start_allocates_player_and_pairs() {
        let world = started(40, 1);
        assert_eq!(world.entities.len(), 81);
        assert!(world.is_live());
        assert!(world.player().is_bird());
        assert!(world.pipes().all(|p| !p.is_bird()));
        assert_eq!(world.pipe_pairs(), 40);
    }

    #[test]
    fn test_pairs_are_evenly_spaced() {
        let world = started(5, 2);
        for (i, pair) in world.entities[1..].chunks(2).enumerate() {
            let expected = FIRST_PIPE_X + i as f32 * PIPE_SPACING;
            assert!((pair[0].rect.x - expected).abs() < 0.001);
            assert!((pair[1].rect.x - expected).abs() < 0.001);
        }
    }

    #[test]
    fn test_gap_matches_ramp_and_stays_on_screen() {
        let world = started(40, 3);
        for (i, pair) in world.entities[1..].chunks(2).enumerate() {
            let (upper, lower) = (&pair[0], &pair[1]);
            let gap = lower.rect.y - upper.rect.bottom();
            assert!((gap - 2.0 * gap_half_height(i)).abs() < 0.01, "pair {}", i);
            assert!(upper.rect.bottom() >= 0.0);
            assert!(lower.rect.y <= WORLD_HEIGHT);
        }
    }

    #[test]
    fn test_gap_narrows_at_thresholds() {
        assert_eq!(gap_half_height(0), 100.0);
        assert_eq!(gap_half_height(9), 100.0);
        assert_eq!(gap_half_height(10), 90.0);
        assert_eq!(gap_half_height(20), 80.0);
        assert_eq!(gap_half_height(30), 70.0);
        assert_eq!(gap_half_height(500), 70.0);
    }

    #[test]
    fn test_end_releases_everything() {
        let mut world = started(3, 4);
        world.end();
        assert!(world.entities.is_empty());
        assert!(!world.is_live());
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = started(10, 99);
        let b = started(10, 99);
        assert_eq!(a.entities, b.entities);
    }
}
