use std::collections::BTreeMap;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::game::GameConfig;
use crate::error::GameResult;
use crate::game::entities::spawn_back_row;
use crate::game::grid::Grid;
use crate::game::save::GameSnapshot;
use crate::game::systems::{
    FireOutcome, destroyable_reached_player, render_grid, resolve_fire, rotate_grid, step_grid,
};
use crate::game::types::{Direction, Entity, Position, ShotType};

/// One playthrough: the board and score counters, plus the spawn generator.
///
/// Won and lost are reported, never enforced. The caller keeps calling or stops.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    collected: u32,
    destroyed: u32,
    total_shots: u32,
    rng: StdRng,
}

impl Game {
    /// Empty board with zeroed counters. Fails when `config` does not validate.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        debug!(
            "[Game] New game: size={} target={} seed={:?}",
            config.size, config.collection_target, config.seed
        );
        Ok(Game {
            grid: Grid::new(config.size),
            config,
            collected: 0,
            destroyed: 0,
            total_shots: 0,
            rng,
        })
    }

    /// Rebuild a game from a serialised grid and the two persisted counters.
    ///
    /// Cells outside the board (including the player row) are dropped.
    pub fn restore(
        config: GameConfig,
        field: &BTreeMap<(i32, i32), char>,
        collected: u32,
        destroyed: u32,
    ) -> GameResult<Self> {
        let mut game = Game::new(config)?;
        for (&(x, y), &tag) in field {
            let entity = Entity::from_tag(tag)?;
            let pos = Position::new(x, y);
            if !game.grid.in_bounds(pos) {
                if entity != Entity::Player {
                    warn!("[Save] Dropping {} at {}: outside the board", entity, pos);
                }
                continue;
            }
            game.grid.add_entity(pos, entity);
        }
        game.collected = collected;
        game.destroyed = destroyed;
        Ok(game)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Fixed player cell: middle lane of row 0. Never stored in the grid.
    pub fn player_position(&self) -> Position {
        Position::new(self.config.player_lane() as i32, 0)
    }

    pub fn collected(&self) -> u32 {
        self.collected
    }

    pub fn destroyed(&self) -> u32 {
        self.destroyed
    }

    pub fn total_shots(&self) -> u32 {
        self.total_shots
    }

    pub fn rotate(&mut self, direction: Direction) {
        self.grid = rotate_grid(&self.grid, direction, self.player_position());
        debug!("[Game] Rotated {:?}", direction);
    }

    /// Advance every entity one row, then spawn a new back row.
    pub fn step(&mut self) {
        let was_lost = self.has_lost();
        self.grid = step_grid(&self.grid, self.player_position());
        self.generate_entities();
        debug!("[Game] Step: {} entities on the board", self.grid.len());

        if !was_lost && self.has_lost() {
            info!("[Game] A destroyable reached the player row");
        }
    }

    pub fn generate_entities(&mut self) {
        let spawned = spawn_back_row(self.config.size, self.config.spawn_bombs, &mut self.rng);
        for (pos, entity) in spawned {
            self.grid.add_entity(pos, entity);
        }
    }

    pub fn fire(&mut self, shot: ShotType) -> GameResult<FireOutcome> {
        let was_won = self.has_won();
        let lane = self.player_position().x;
        let outcome = resolve_fire(&mut self.grid, lane, shot)?;

        match outcome {
            FireOutcome::Collected => self.collected += 1,
            FireOutcome::Destroyed => self.destroyed += 1,
            _ => {}
        }
        if outcome.is_hit() {
            self.total_shots += 1;
        }

        if !was_won && self.has_won() {
            info!("[Game] Collection target of {} reached", self.config.collection_target);
        }
        Ok(outcome)
    }

    pub fn has_won(&self) -> bool {
        self.collected >= self.config.collection_target
    }

    pub fn has_lost(&self) -> bool {
        destroyable_reached_player(&self.grid)
    }

    pub fn render(&self) -> String {
        render_grid(&self.grid, self.player_position())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: usize) -> Game {
        Game::new(GameConfig::with_size(size).seeded(11)).unwrap()
    }

    #[test]
    fn player_sits_mid_lane_on_row_zero() {
        assert_eq!(game(5).player_position(), Position::new(2, 0));
        assert_eq!(game(7).player_position(), Position::new(3, 0));
        assert!(game(7).grid().is_empty());
    }

    #[test]
    fn new_rejects_unplayable_sizes() {
        for size in 0..3 {
            assert!(Game::new(GameConfig::with_size(size)).is_err());
        }
        assert!(Game::new(GameConfig::with_size(3).seeded(1)).is_ok());
    }

    #[test]
    fn collect_hit_updates_counters() {
        let mut g = game(5);
        g.grid_mut().add_entity(Position::new(2, 1), Entity::Collectable);

        assert_eq!(g.fire(ShotType::Collect).unwrap(), FireOutcome::Collected);
        assert_eq!(g.collected(), 1);
        assert_eq!(g.total_shots(), 1);
        assert_eq!(g.destroyed(), 0);
        assert!(g.grid().is_empty());
    }

    #[test]
    fn wrong_shot_changes_nothing() {
        let mut g = game(5);
        let pos = Position::new(2, 1);
        g.grid_mut().add_entity(pos, Entity::Collectable);

        assert_eq!(
            g.fire(ShotType::Destroy).unwrap(),
            FireOutcome::NoEffect(Entity::Collectable)
        );
        assert_eq!(g.grid().get_entity(pos).unwrap(), Entity::Collectable);
        assert_eq!((g.collected(), g.destroyed(), g.total_shots()), (0, 0, 0));
    }

    #[test]
    fn bomb_is_not_counted() {
        let mut g = game(5);
        g.grid_mut().add_entity(Position::new(2, 3), Entity::Bomb);

        assert_eq!(g.fire(ShotType::Destroy).unwrap(), FireOutcome::BombCleared);
        assert_eq!(g.total_shots(), 0);
        assert!(g.grid().is_empty());
    }

    #[test]
    fn destroy_hit_updates_counters() {
        let mut g = game(5);
        g.grid_mut().add_entity(Position::new(2, 2), Entity::Destroyable);

        assert_eq!(g.fire(ShotType::Destroy).unwrap(), FireOutcome::Destroyed);
        assert_eq!((g.collected(), g.destroyed(), g.total_shots()), (0, 1, 1));
    }

    #[test]
    fn won_from_target_onward() {
        let mut g = Game::new(GameConfig {
            collection_target: 2,
            ..GameConfig::with_size(5).seeded(1)
        })
        .unwrap();

        for round in 1..=4 {
            g.grid_mut().add_entity(Position::new(2, 1), Entity::Collectable);
            g.fire(ShotType::Collect).unwrap();
            assert_eq!(g.has_won(), round >= 2);
        }
    }

    #[test]
    fn lost_tracks_row_one() {
        let mut g = game(5);
        g.grid_mut().add_entity(Position::new(2, 2), Entity::Destroyable);
        assert!(!g.has_lost());

        g.grid_mut().remove_entity(Position::new(2, 2)).unwrap();
        g.grid_mut().add_entity(Position::new(2, 1), Entity::Destroyable);
        assert!(g.has_lost());
    }

    #[test]
    fn step_on_empty_grid_only_spawns_back_row() {
        let mut g = game(5);
        g.step();
        assert!(g.grid().iter().all(|(pos, _)| pos.y == 4));
    }

    #[test]
    fn rotate_keeps_counters_and_count() {
        let mut g = game(5);
        g.grid_mut().add_entity(Position::new(0, 2), Entity::Collectable);
        g.grid_mut().add_entity(Position::new(4, 3), Entity::Destroyable);

        g.rotate(Direction::Right);
        assert_eq!(g.grid().len(), 2);
        assert_eq!(g.grid().get_entity(Position::new(1, 2)).unwrap(), Entity::Collectable);
        assert_eq!(g.grid().get_entity(Position::new(0, 3)).unwrap(), Entity::Destroyable);
    }

    #[test]
    fn restore_rebuilds_board_and_counters() {
        let field: BTreeMap<(i32, i32), char> =
            [((1, 2), 'C'), ((3, 6), 'O'), ((3, 0), 'P'), ((9, 9), 'D')].into();
        let g = Game::restore(GameConfig::default().seeded(2), &field, 4, 5).unwrap();

        assert_eq!(g.grid().len(), 2);
        assert_eq!(g.grid().get_entity(Position::new(3, 6)).unwrap(), Entity::Bomb);
        assert_eq!((g.collected(), g.destroyed()), (4, 5));
        assert_eq!(g.total_shots(), 0);
    }

    #[test]
    fn restore_rejects_unknown_tags() {
        let field: BTreeMap<(i32, i32), char> = [((1, 2), 'Z')].into();
        assert!(Game::restore(GameConfig::default(), &field, 0, 0).is_err());
    }
}
