//! Session module - the game controller
//!
//! A [`Session`] owns every piece of game state: parameters, the preview
//! queue, the cursor tile, the board and the scheduler that drives the
//! lose-condition check. It is constructed explicitly and handed around by
//! `&mut`; there is no global instance.
//!
//! # Lifecycle
//!
//! ```text
//! NotStarted --start_game--> Running --all nodes powered--> Won
//!                               |
//!                               +--timer <= 0 or moves <= 0--> Lost
//! ```
//!
//! `Won` and `Lost` are terminal; [`Session::reload`] builds a fresh
//! `NotStarted` game from the same configuration.
//!
//! # Timing
//!
//! [`Session::tick`] advances the scheduler. While running, the lose check
//! fires every `check_interval_ms`; each firing takes one interval off the
//! countdown and refreshes the timer/moves labels.

use crate::board::{Board, CellRole};
use crate::catalog::SpriteRegistry;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::queue::PreviewQueue;
use crate::rng::TileGenerator;
use crate::schedule::{Scheduler, TaskHandle};
use crate::settings::{cycle_index, Difficulty, Skill};
use crate::snapshot::{CellSnapshot, GameSnapshot, TileSnapshot};
use crate::tile::{Tile, TilePool};
use crate::types::{GameAction, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    Running,
    Won,
    Lost,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Won | SessionState::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoseReason {
    OutOfTime,
    OutOfMoves,
}

/// Visibility of the full-screen panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Panels {
    pub start: bool,
    pub win: bool,
    pub lose: bool,
}

impl Default for Panels {
    fn default() -> Self {
        Self {
            start: true,
            win: false,
            lose: false,
        }
    }
}

/// Values shown in the countdown and remaining-moves labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Labels {
    /// Whole seconds left, truncated toward zero
    pub timer_secs: i64,
    pub moves: i32,
}

/// Something that happened during play, drained by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    TilePlaced(Pos),
    TileRotated(Pos),
    Won,
    Lost(LoseReason),
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    registry: SpriteRegistry,
    generator: TileGenerator,
    pool: TilePool,
    queue: PreviewQueue,
    cursor_tile: Tile,
    board: Board,
    cursor: Pos,
    /// Dropdown values, applied at start
    difficulty_setting: usize,
    skill_setting: usize,
    num_nodes: u32,
    num_moves: i32,
    timer_ms: i64,
    state: SessionState,
    lose_reason: Option<LoseReason>,
    panels: Panels,
    labels: Labels,
    scheduler: Scheduler,
    lose_check: Option<TaskHandle>,
    /// Reused buffer for scheduler firings
    fired: Vec<TaskHandle>,
    events: Vec<SessionEvent>,
    /// Increments on every reload
    episode_id: u32,
}

impl Session {
    /// Build a session, rejecting unusable configurations up front.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let registry = config.sprite_registry()?;
        let generator = TileGenerator::new(config.seed, &registry)?;
        let mut pool = TilePool::new();
        let queue = PreviewQueue::new(config.preview_capacity, &mut pool)?;
        let board = Board::new(config.board_width, config.board_height);

        let mut session = Self {
            registry,
            generator,
            pool,
            queue,
            cursor_tile: Tile::blank(),
            cursor: Pos::default(),
            board,
            difficulty_setting: 0,
            skill_setting: 0,
            num_nodes: config.num_nodes,
            num_moves: config.num_moves,
            timer_ms: config.start_timer_ms,
            state: SessionState::NotStarted,
            lose_reason: None,
            panels: Panels::default(),
            labels: Labels::default(),
            scheduler: Scheduler::new(),
            lose_check: None,
            fired: Vec::new(),
            events: Vec::new(),
            episode_id: 0,
            config,
        };
        session.cursor = session.center();
        session.update_labels();
        Ok(session)
    }

    fn center(&self) -> Pos {
        Pos::new(self.board.width() / 2, self.board.height() / 2)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn registry(&self) -> &SpriteRegistry {
        &self.registry
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn lose_reason(&self) -> Option<LoseReason> {
        self.lose_reason
    }

    pub fn panels(&self) -> Panels {
        self.panels
    }

    pub fn labels(&self) -> Labels {
        self.labels
    }

    pub fn num_nodes(&self) -> u32 {
        self.num_nodes
    }

    pub fn num_moves(&self) -> i32 {
        self.num_moves
    }

    pub fn timer_ms(&self) -> i64 {
        self.timer_ms
    }

    pub fn start_timer_ms(&self) -> i64 {
        self.config.start_timer_ms
    }

    pub fn queue(&self) -> &PreviewQueue {
        &self.queue
    }

    pub fn cursor_tile(&self) -> &Tile {
        &self.cursor_tile
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scripted setups (puzzles, tests).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    pub fn difficulty_setting(&self) -> usize {
        self.difficulty_setting
    }

    pub fn skill_setting(&self) -> usize {
        self.skill_setting
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pool(&self) -> &TilePool {
        &self.pool
    }

    /// Whether the periodic lose check is still scheduled
    pub fn lose_check_active(&self) -> bool {
        self.lose_check
            .map_or(false, |h| self.scheduler.is_scheduled(h))
    }

    /// Take and clear recorded events.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Set the difficulty dropdown value (applied at start).
    pub fn select_difficulty(&mut self, index: usize) {
        self.difficulty_setting = index;
    }

    /// Set the skill dropdown value (applied at start).
    pub fn select_skill(&mut self, index: usize) {
        self.skill_setting = index;
    }

    /// Apply a difficulty level. Unknown levels leave `num_nodes` untouched.
    pub fn set_difficulty(&mut self, level: usize) {
        if let Some(difficulty) = Difficulty::from_index(level) {
            self.num_nodes = difficulty.node_count();
        }
    }

    /// Apply a skill level: move budget plus preview truncation.
    ///
    /// Removed preview slots go back to the pool; the queue does not grow back
    /// until the next [`Session::reload`]. Unknown levels change nothing.
    pub fn set_player_skill(&mut self, level: usize) {
        let Some(skill) = Skill::from_index(level) else {
            return;
        };
        let target = skill.preview_len(self.queue.len());
        self.queue.truncate_to(target, &mut self.pool);
        self.num_moves = skill.move_budget();
    }

    /// Take the front preview tile as the cursor tile and advance the queue.
    pub fn select_random_tile(&mut self) {
        let next = self.queue.advance(&mut self.generator);
        self.cursor_tile.copy_from(&next);
    }

    /// Leave the start panel and begin play. Returns `false` unless not yet started.
    pub fn start_game(&mut self) -> bool {
        if self.state != SessionState::NotStarted {
            return false;
        }

        self.queue.regenerate_all(&mut self.generator);
        self.set_difficulty(self.difficulty_setting);
        self.set_player_skill(self.skill_setting);
        self.select_random_tile();

        self.panels.start = false;
        self.board
            .initialize(self.config.num_sources, self.num_nodes, &mut self.generator);
        self.cursor = self.center();

        self.timer_ms = self.config.start_timer_ms;
        self.update_labels();
        self.state = SessionState::Running;
        self.cancel_lose_check();
        self.lose_check = Some(
            self.scheduler
                .schedule_repeating(0, self.config.check_interval_ms),
        );

        log::info!(
            "game started: episode={} nodes={} moves={} preview={} timer={}ms",
            self.episode_id,
            self.num_nodes,
            self.num_moves,
            self.queue.len(),
            self.timer_ms
        );
        self.events.push(SessionEvent::Started);
        true
    }

    fn cancel_lose_check(&mut self) {
        if let Some(handle) = self.lose_check.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn update_labels(&mut self) {
        self.labels = Labels {
            timer_secs: self.timer_ms / 1000,
            moves: self.num_moves,
        };
    }

    /// Win when every power node is powered. Returns whether the game was won now.
    pub fn check_win_condition(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        if !self.board.all_nodes_activated() {
            return false;
        }

        self.cancel_lose_check();
        self.panels.win = true;
        self.state = SessionState::Won;
        log::info!(
            "game won: episode={} moves_left={} time_left={}ms",
            self.episode_id,
            self.num_moves,
            self.timer_ms
        );
        self.events.push(SessionEvent::Won);
        true
    }

    /// One firing of the periodic lose check.
    pub fn check_lose_condition(&mut self) {
        if self.state != SessionState::Running {
            return;
        }

        self.timer_ms -= self.config.check_interval_ms as i64;
        self.update_labels();

        let reason = if self.timer_ms <= 0 {
            LoseReason::OutOfTime
        } else if self.num_moves <= 0 {
            LoseReason::OutOfMoves
        } else {
            return;
        };

        self.panels.lose = true;
        self.cancel_lose_check();
        self.state = SessionState::Lost;
        self.lose_reason = Some(reason);
        log::info!("game lost: episode={} reason={:?}", self.episode_id, reason);
        self.events.push(SessionEvent::Lost(reason));
    }

    /// Advance time by `elapsed_ms` and run due checks.
    pub fn tick(&mut self, elapsed_ms: u32) {
        let mut fired = std::mem::take(&mut self.fired);
        fired.clear();
        self.scheduler.advance(elapsed_ms, &mut fired);

        for &handle in &fired {
            // A check can cancel itself; later firings in the same step are then stale.
            if self.lose_check == Some(handle) {
                self.check_lose_condition();
            }
        }

        self.fired = fired;
    }

    /// Move the board cursor, clamped to the board.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        let max_x = self.board.width().saturating_sub(1) as i32;
        let max_y = self.board.height().saturating_sub(1) as i32;
        let x = (self.cursor.x as i32 + dx).clamp(0, max_x) as u16;
        let y = (self.cursor.y as i32 + dy).clamp(0, max_y) as u16;
        let moved = x != self.cursor.x || y != self.cursor.y;
        self.cursor = Pos::new(x, y);
        moved
    }

    /// Put the board cursor on `pos` if it is on the board.
    pub fn move_cursor_to(&mut self, pos: Pos) -> bool {
        if self.state != SessionState::Running || !self.board.contains(pos) {
            return false;
        }
        self.cursor = pos;
        true
    }

    /// Place the cursor tile under the board cursor.
    ///
    /// Costs one move, draws the next cursor tile, recomputes power and checks
    /// for a win.
    pub fn place_cursor_tile(&mut self) -> bool {
        if self.state != SessionState::Running || self.num_moves <= 0 {
            return false;
        }

        let pos = self.cursor;
        // Board cells are overwritten in place; only preview slots cycle through the pool.
        if let Err(e) = self.board.place(pos, &self.cursor_tile) {
            log::debug!("place rejected: {}", e);
            return false;
        }

        self.num_moves -= 1;
        self.select_random_tile();
        let powered = self.board.refresh_activation();
        log::debug!(
            "placed {:?} at ({}, {}): powered={} moves_left={}",
            self.board.get(pos).map(|c| c.tile.kind),
            pos.x,
            pos.y,
            powered,
            self.num_moves
        );
        self.events.push(SessionEvent::TilePlaced(pos));
        self.check_win_condition();
        true
    }

    /// Rotate the placed tile under the board cursor. Costs one move.
    pub fn rotate_at_cursor(&mut self) -> bool {
        if self.state != SessionState::Running || self.num_moves <= 0 {
            return false;
        }

        let pos = self.cursor;
        if let Err(e) = self.board.rotate(pos) {
            log::debug!("rotate rejected: {}", e);
            return false;
        }

        self.num_moves -= 1;
        self.board.refresh_activation();
        self.events.push(SessionEvent::TileRotated(pos));
        self.check_win_condition();
        true
    }

    /// Reload the scene: a fresh `NotStarted` game with the same configuration.
    ///
    /// The dropdown selections survive; the RNG keeps running so a seeded
    /// session does not replay the previous game.
    pub fn reload(&mut self) {
        self.cancel_lose_check();
        self.queue.reset(self.config.preview_capacity, &mut self.pool);
        self.cursor_tile.reset();
        self.board = Board::new(self.config.board_width, self.config.board_height);
        self.cursor = self.center();
        self.num_nodes = self.config.num_nodes;
        self.num_moves = self.config.num_moves;
        self.timer_ms = self.config.start_timer_ms;
        self.state = SessionState::NotStarted;
        self.lose_reason = None;
        self.panels = Panels::default();
        self.update_labels();
        self.episode_id = self.episode_id.wrapping_add(1);
        log::info!("scene reloaded: episode={}", self.episode_id);
    }

    /// Apply a player action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::CursorLeft => self.move_cursor(-1, 0),
            GameAction::CursorRight => self.move_cursor(1, 0),
            GameAction::CursorUp => self.move_cursor(0, -1),
            GameAction::CursorDown => self.move_cursor(0, 1),
            GameAction::Place => self.place_cursor_tile(),
            GameAction::Rotate => self.rotate_at_cursor(),
            GameAction::Start => self.start_game(),
            GameAction::CycleDifficulty => {
                if self.state != SessionState::NotStarted {
                    return false;
                }
                self.difficulty_setting = cycle_index(self.difficulty_setting, Difficulty::ALL.len());
                true
            }
            GameAction::CycleSkill => {
                if self.state != SessionState::NotStarted {
                    return false;
                }
                self.skill_setting = cycle_index(self.skill_setting, Skill::ALL.len());
                true
            }
            GameAction::Restart => {
                self.reload();
                true
            }
        }
    }

    fn tile_snapshot(&self, tile: &Tile) -> TileSnapshot {
        let color = self
            .registry
            .by_id(tile.sprite)
            .map(|s| s.color)
            .unwrap_or([200, 200, 200]);
        TileSnapshot {
            kind: tile.kind,
            mask: tile.mask(),
            rotation: tile.rotation,
            color,
            active: tile.active,
        }
    }

    /// Fill `out` with the current state, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();

        out.cells.clear();
        out.cells
            .extend(self.board.cells().iter().map(|c| CellSnapshot {
                tile: self.tile_snapshot(&c.tile),
                role: c.role,
                activated: c.activated,
            }));

        out.queue.clear();
        out.queue
            .extend(self.queue.tiles().iter().map(|t| self.tile_snapshot(t)));

        out.cursor = self.cursor;
        out.cursor_tile = self.tile_snapshot(&self.cursor_tile);
        out.state = self.state;
        out.lose_reason = self.lose_reason;
        out.panels = self.panels;
        out.labels = self.labels;
        out.num_nodes = self.num_nodes;
        out.nodes_powered = self.board.activated_node_count() as u32;
        out.nodes_total = self
            .board
            .cells()
            .iter()
            .filter(|c| c.role == CellRole::Node)
            .count() as u32;
        out.difficulty = Difficulty::from_index(self.difficulty_setting);
        out.skill = Skill::from_index(self.skill_setting);
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{rotated_connections, SpriteId};
    use crate::types::{Rotation, TileKind};

    fn seeded() -> Session {
        Session::new(GameConfig {
            seed: Some(12345),
            ..GameConfig::default()
        })
        .unwrap()
    }

    fn assign(tile: &mut Tile, kind: TileKind, rotation: Rotation) {
        tile.set(
            SpriteId(kind.index() as u8),
            kind,
            rotated_connections(kind, rotation),
            rotation,
        );
    }

    #[test]
    fn new_session_waits_on_the_start_panel() {
        let s = seeded();
        assert_eq!(s.state(), SessionState::NotStarted);
        assert!(s.panels().start);
        assert!(!s.panels().win && !s.panels().lose);
        assert_eq!(s.num_nodes(), 2);
        assert_eq!(s.num_moves(), 15);
        assert_eq!(s.queue().len(), 4);
        assert!(!s.lose_check_active());
    }

    #[test]
    fn invalid_config_fails_fast() {
        let err = Session::new(GameConfig {
            preview_capacity: 0,
            ..GameConfig::default()
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::EmptyPreviewQueue);
    }

    #[test]
    fn start_easy_novice() {
        let mut s = seeded();
        assert!(s.start_game());

        assert_eq!(s.state(), SessionState::Running);
        assert_eq!(s.num_nodes(), 2);
        assert_eq!(s.num_moves(), 70);
        assert_eq!(s.queue().len(), 4);
        assert_eq!(s.timer_ms(), s.start_timer_ms());
        assert!(!s.panels().start);
        assert!(!s.panels().lose);
        assert!(s.lose_check_active());
        assert!(s.cursor_tile().active);
        assert_eq!(s.board().power_node_positions().len(), 2);
        assert_eq!(s.take_events(), vec![SessionEvent::Started]);
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut s = seeded();
        assert!(s.start_game());
        assert!(!s.start_game());
    }

    #[test]
    fn skill_levels_truncate_the_preview() {
        for (skill, len, moves) in [(0, 4, 70), (1, 3, 50), (2, 1, 30)] {
            let mut s = seeded();
            s.select_skill(skill);
            s.start_game();
            assert_eq!(s.queue().len(), len, "skill {}", skill);
            assert_eq!(s.num_moves(), moves);
        }
    }

    #[test]
    fn difficulty_levels_set_node_counts() {
        for (difficulty, nodes) in [(0, 2), (1, 3), (2, 4)] {
            let mut s = seeded();
            s.select_difficulty(difficulty);
            s.start_game();
            assert_eq!(s.num_nodes(), nodes);
            assert_eq!(s.board().power_node_positions().len(), nodes as usize);
        }
    }

    #[test]
    fn unknown_levels_leave_parameters_alone() {
        let mut s = seeded();
        s.set_difficulty(1);
        s.set_difficulty(9);
        assert_eq!(s.num_nodes(), 3);

        s.set_player_skill(2);
        s.set_player_skill(5);
        assert_eq!(s.num_moves(), 30);
        assert_eq!(s.queue().len(), 1);
    }

    #[test]
    fn select_random_tile_takes_the_front() {
        let mut s = seeded();
        s.start_game();
        let front = s.queue().front().clone();
        s.select_random_tile();
        assert_eq!(s.cursor_tile(), &front);
        assert_eq!(s.queue().len(), 4);
    }

    #[test]
    fn lose_check_counts_down_and_updates_labels() {
        let mut s = seeded();
        s.start_game();
        s.tick(0);
        assert_eq!(s.timer_ms(), 30_000 - 10);
        assert_eq!(s.labels().timer_secs, 29);
        assert_eq!(s.labels().moves, 70);

        s.tick(990);
        assert_eq!(s.timer_ms(), 30_000 - 1000);
        assert_eq!(s.labels().timer_secs, 29);
    }

    #[test]
    fn timer_expiry_loses_once() {
        let mut s = seeded();
        s.start_game();
        s.take_events();

        for _ in 0..2000 {
            s.tick(16);
        }

        assert_eq!(s.state(), SessionState::Lost);
        assert_eq!(s.lose_reason(), Some(LoseReason::OutOfTime));
        assert!(s.panels().lose);
        assert!(!s.lose_check_active());
        assert_eq!(s.timer_ms(), 0);
        assert_eq!(
            s.take_events(),
            vec![SessionEvent::Lost(LoseReason::OutOfTime)]
        );
    }

    #[test]
    fn running_out_of_moves_loses_on_next_check() {
        let mut s = seeded();
        s.select_skill(2);
        s.start_game();
        s.num_moves = 0;
        s.tick(10);
        assert_eq!(s.state(), SessionState::Lost);
        assert_eq!(s.lose_reason(), Some(LoseReason::OutOfMoves));
    }

    #[test]
    fn place_costs_a_move_and_advances_the_queue() {
        let mut s = seeded();
        s.start_game();

        // Find an open cell.
        let open = (0..s.board().height())
            .flat_map(|y| (0..s.board().width()).map(move |x| Pos::new(x, y)))
            .find(|p| s.board().can_place(*p).is_ok())
            .unwrap();
        assert!(s.move_cursor_to(open));

        let placed = s.cursor_tile().clone();
        let next = s.queue().front().clone();
        assert!(s.place_cursor_tile());

        assert_eq!(s.num_moves(), 69);
        assert_eq!(s.board().get(open).unwrap().tile, placed);
        assert_eq!(s.cursor_tile(), &next);
    }

    #[test]
    fn place_on_fixture_is_rejected() {
        let mut s = seeded();
        s.start_game();
        let src = s.board().sources()[0];
        s.move_cursor_to(src);
        assert!(!s.place_cursor_tile());
        assert_eq!(s.num_moves(), 70);
    }

    #[test]
    fn connecting_every_node_wins_and_stops_the_lose_check() {
        let mut s = seeded();
        s.start_game();

        // Replace the random layout with a tiny known puzzle.
        let board = s.board_mut();
        *board = Board::new(3, 1);
        board.put_fixture(Pos::new(0, 0), CellRole::Source, TileKind::Quad);
        board.put_fixture(Pos::new(2, 0), CellRole::Node, TileKind::Node);

        assign(&mut s.cursor_tile, TileKind::Straight, Rotation::R90);
        s.move_cursor_to(Pos::new(1, 0));
        s.take_events();
        assert!(s.place_cursor_tile());

        assert_eq!(s.state(), SessionState::Won);
        assert!(s.panels().win);
        assert!(!s.lose_check_active());
        assert_eq!(
            s.take_events(),
            vec![SessionEvent::TilePlaced(Pos::new(1, 0)), SessionEvent::Won]
        );

        for _ in 0..5000 {
            s.tick(16);
        }
        assert!(!s.panels().lose);
        assert_eq!(s.state(), SessionState::Won);
    }

    #[test]
    fn rotate_fixes_a_misaligned_pipe() {
        let mut s = seeded();
        s.start_game();
        let board = s.board_mut();
        *board = Board::new(3, 1);
        board.put_fixture(Pos::new(0, 0), CellRole::Source, TileKind::Quad);
        board.put_fixture(Pos::new(2, 0), CellRole::Node, TileKind::Node);

        assign(&mut s.cursor_tile, TileKind::Straight, Rotation::R0);
        s.move_cursor_to(Pos::new(1, 0));
        assert!(s.place_cursor_tile());
        assert_eq!(s.state(), SessionState::Running);

        assert!(s.rotate_at_cursor());
        assert_eq!(s.state(), SessionState::Won);
        assert_eq!(s.num_moves(), 68);
    }

    #[test]
    fn cursor_is_clamped() {
        let mut s = seeded();
        assert!(!s.move_cursor(1, 0), "cursor is frozen before start");
        s.start_game();
        for _ in 0..20 {
            s.move_cursor(-1, -1);
        }
        assert_eq!(s.cursor(), Pos::new(0, 0));
        assert!(!s.apply_action(GameAction::CursorUp));
        assert!(s.apply_action(GameAction::CursorDown));
        assert_eq!(s.cursor(), Pos::new(0, 1));
    }

    #[test]
    fn selectors_cycle_only_before_start() {
        let mut s = seeded();
        assert!(s.apply_action(GameAction::CycleDifficulty));
        assert!(s.apply_action(GameAction::CycleDifficulty));
        assert!(s.apply_action(GameAction::CycleSkill));
        assert_eq!(s.difficulty_setting(), 2);
        assert_eq!(s.skill_setting(), 1);

        assert!(s.apply_action(GameAction::Start));
        assert!(!s.apply_action(GameAction::CycleDifficulty));
        assert_eq!(s.num_nodes(), 4);
        assert_eq!(s.num_moves(), 50);
    }

    #[test]
    fn reload_restores_a_fresh_game() {
        let mut s = seeded();
        s.select_skill(2);
        s.start_game();
        assert_eq!(s.queue().len(), 1);

        assert!(s.apply_action(GameAction::Restart));
        assert_eq!(s.state(), SessionState::NotStarted);
        assert_eq!(s.queue().len(), 4);
        assert!(s.panels().start);
        assert!(!s.lose_check_active());
        assert_eq!(s.episode_id(), 1);
        assert_eq!(s.skill_setting(), 2);

        assert!(s.start_game());
        assert_eq!(s.queue().len(), 1);
    }

    #[test]
    fn snapshot_mirrors_session() {
        let mut s = seeded();
        s.start_game();
        let snap = s.snapshot();
        assert_eq!(snap.width, 8);
        assert_eq!(snap.height, 6);
        assert_eq!(snap.cells.len(), 48);
        assert_eq!(snap.queue.len(), 4);
        assert_eq!(snap.nodes_total, 2);
        assert_eq!(snap.state, SessionState::Running);
        assert_eq!(snap.cursor, s.cursor());
        assert_eq!(snap.difficulty, Some(Difficulty::Easy));
        assert_eq!(snap.cursor_tile.kind, s.cursor_tile().kind);
    }
}
