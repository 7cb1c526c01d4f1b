//! Unit tests for gn-nav.

#[cfg(test)]
mod helpers {
    use rustc_hash::FxHashSet;

    use gn_core::{Cell, CellCoord, GridConfig, WorldPos};
    use gn_grid::{Grid, GridBuilder, GridMap, GridResult, GridService, Level, parse_level};
    use gn_path::AStarPathfinder;

    use crate::NavigationController;

    pub fn level_from(text: &str) -> (Level, CellCoord) {
        let parsed = parse_level(text, GridConfig::default()).unwrap();
        (parsed.level, parsed.agent_start.unwrap())
    }

    /// One tick: ask for a destination from `agent` and move onto it.
    pub fn tick<S: GridService>(
        nav:   &mut NavigationController<AStarPathfinder>,
        world: &S,
        agent: &mut CellCoord,
    ) -> Option<CellCoord> {
        let here = world.cell_to_world(*agent);
        let dest = nav.next_destination(world, here).unwrap()?;
        *agent = world.world_to_cell(dest).unwrap();
        Some(*agent)
    }

    /// A grid service whose objective sets are edited directly by the test.
    pub struct ScriptedWorld {
        pub grid:         Grid,
        pub exit:         Option<CellCoord>,
        pub threats:      FxHashSet<CellCoord>,
        pub collectibles: FxHashSet<CellCoord>,
    }

    impl ScriptedWorld {
        pub fn open(width: u32, height: u32, exit: CellCoord) -> Self {
            Self {
                grid:         GridBuilder::new(width, height).build().unwrap(),
                exit:         Some(exit),
                threats:      FxHashSet::default(),
                collectibles: FxHashSet::default(),
            }
        }
    }

    impl GridMap for ScriptedWorld {
        fn extents(&self) -> (u32, u32) {
            self.grid.extents()
        }
        fn is_walkable(&self, coord: CellCoord) -> bool {
            self.grid.is_walkable(coord)
        }
        fn cell_at(&self, x: i32, y: i32) -> GridResult<Cell> {
            self.grid.cell_at(x, y)
        }
        fn world_to_cell(&self, pos: WorldPos) -> GridResult<CellCoord> {
            self.grid.world_to_cell(pos)
        }
        fn cell_to_world(&self, coord: CellCoord) -> WorldPos {
            self.grid.cell_to_world(coord)
        }
    }

    impl GridService for ScriptedWorld {
        fn exit_cell(&self) -> Option<CellCoord> {
            self.exit
        }
        fn live_threats(&self) -> FxHashSet<CellCoord> {
            self.threats.clone()
        }
        fn live_collectibles(&self) -> FxHashSet<CellCoord> {
            self.collectibles.clone()
        }
    }
}

// ── Nearest selection ─────────────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use rustc_hash::FxHashSet;

    use gn_core::CellCoord;

    use crate::nearest;

    fn set(cells: &[(i32, i32)]) -> FxHashSet<CellCoord> {
        cells.iter().map(|&c| CellCoord::from(c)).collect()
    }

    #[test]
    fn empty_set_has_no_nearest() {
        assert_eq!(nearest(CellCoord::new(0, 0), &FxHashSet::default()), None);
    }

    #[test]
    fn picks_smallest_euclidean_distance() {
        // (3, 3) is Manhattan 6 but Euclidean √18 ≈ 4.24; (5, 0) is 5 / 5.
        let candidates = set(&[(5, 0), (3, 3)]);
        assert_eq!(nearest(CellCoord::new(0, 0), &candidates), Some(CellCoord::new(3, 3)));
    }

    #[test]
    fn equal_distance_prefers_smallest_row_then_column() {
        let candidates = set(&[(2, 4), (4, 2), (0, 2), (2, 0)]);
        assert_eq!(nearest(CellCoord::new(2, 2), &candidates), Some(CellCoord::new(2, 0)));

        let candidates = set(&[(4, 2), (0, 2)]);
        assert_eq!(nearest(CellCoord::new(2, 2), &candidates), Some(CellCoord::new(0, 2)));
    }

    #[test]
    fn candidate_under_query_point_wins() {
        let candidates = set(&[(1, 1), (1, 2)]);
        assert_eq!(nearest(CellCoord::new(1, 1), &candidates), Some(CellCoord::new(1, 1)));
    }
}

// ── ObjectiveSet ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod objective_set {
    use rustc_hash::FxHashSet;

    use gn_core::{CellCoord, CellKind};

    use crate::{Objective, ObjectiveSet};

    #[test]
    fn objective_accessors() {
        let c = CellCoord::new(2, 3);
        assert_eq!(Objective::Threat(c).cell(), c);
        assert_eq!(Objective::Collectible(c).class(), CellKind::Collectible);
        assert_eq!(Objective::Exit(c).class(), CellKind::Exit);
    }

    #[test]
    fn removed_cells_are_never_readmitted() {
        let threat = CellCoord::new(1, 0);
        let mut set = ObjectiveSet::new(CellCoord::new(0, 0), FxHashSet::default());
        set.sync_threats([threat].into_iter().collect());
        assert_eq!(set.remove_at(threat), Some(Objective::Threat(threat)));
        assert_eq!(set.remove_at(threat), None);

        set.sync_threats([threat].into_iter().collect());
        assert!(!set.is_live_threat(threat));
        assert_eq!(set.remaining(), 0);
    }

    #[test]
    fn vanished_threats_are_retired() {
        let a = CellCoord::new(1, 0);
        let b = CellCoord::new(2, 0);
        let mut set = ObjectiveSet::new(CellCoord::new(0, 0), FxHashSet::default());
        assert_eq!(set.sync_threats([a, b].into_iter().collect()), 0);
        assert_eq!(set.sync_threats([b].into_iter().collect()), 1);
        // `a` comes back in the live set but stays retired.
        set.sync_threats([a, b].into_iter().collect());
        assert!(!set.is_live_threat(a));
        assert!(set.is_live_threat(b));
    }

    #[test]
    fn exit_is_not_removable() {
        let exit = CellCoord::new(0, 0);
        let mut set = ObjectiveSet::new(exit, FxHashSet::default());
        assert_eq!(set.remove_at(exit), None);
        assert_eq!(set.exit(), exit);
        assert!(set.is_exhausted());
    }
}

// ── Controller ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod controller {
    use gn_core::{CellCoord, WorldPos};
    use gn_grid::{GridError, GridMap};
    use gn_path::AStarPathfinder;

    use super::helpers::{ScriptedWorld, level_from, tick};
    use crate::{NavError, NavigationController, Objective};

    #[test]
    fn open_grid_collectible_then_exit() {
        let (level, mut agent) = level_from(
            "\
A...E
.....
.....
.....
....C
",
        );
        let collectible = CellCoord::new(4, 4);
        let exit = CellCoord::new(4, 0);
        let mut nav = NavigationController::initialize(&level, AStarPathfinder).unwrap();
        assert_eq!(nav.objective_count(), 1);

        let first = tick(&mut nav, &level, &mut agent).unwrap();
        assert_eq!(nav.current_objective(), Some(Objective::Collectible(collectible)));
        // 8 steps, one already handed out.
        assert_eq!(nav.pending_steps(), 7);
        assert_eq!(first.manhattan(CellCoord::new(0, 0)), 1);
        assert_eq!(first.manhattan(collectible), 7);

        for _ in 1..8 {
            tick(&mut nav, &level, &mut agent).unwrap();
            assert_eq!(nav.current_objective(), Some(Objective::Collectible(collectible)));
        }
        assert_eq!(agent, collectible);
        assert!(nav.take_arrivals().is_empty());

        tick(&mut nav, &level, &mut agent).unwrap();
        assert_eq!(nav.take_arrivals(), vec![Objective::Collectible(collectible)]);
        assert!(nav.objectives().is_exhausted());
        assert_eq!(nav.objectives().exit(), exit);
        assert_eq!(nav.current_objective(), Some(Objective::Exit(exit)));
        assert!(nav.is_exit_locked());
        assert_eq!(nav.objective_count(), 0);
        // 4 steps, one already handed out.
        assert_eq!(nav.pending_steps(), 3);

        for _ in 0..3 {
            tick(&mut nav, &level, &mut agent).unwrap();
        }
        assert_eq!(agent, exit);
    }

    #[test]
    fn far_threat_beats_near_collectible() {
        let (level, mut agent) = level_from(
            "\
A........T
C.......E.
",
        );
        let mut nav = NavigationController::initialize(&level, AStarPathfinder).unwrap();
        tick(&mut nav, &level, &mut agent).unwrap();
        assert_eq!(nav.current_objective(), Some(Objective::Threat(CellCoord::new(9, 0))));
    }

    #[test]
    fn arrival_removes_objective_exactly_once() {
        // The host never deactivates anything, so the level keeps reporting
        // the threat as live after the agent reaches it.
        let (level, mut agent) = level_from("A.T.C.E\n");
        let mut nav = NavigationController::initialize(&level, AStarPathfinder).unwrap();

        let mut arrivals = Vec::new();
        for _ in 0..20 {
            tick(&mut nav, &level, &mut agent);
            arrivals.extend(nav.take_arrivals());
        }
        assert_eq!(
            arrivals,
            vec![
                Objective::Threat(CellCoord::new(2, 0)),
                Objective::Collectible(CellCoord::new(4, 0)),
            ]
        );
        assert_eq!(agent, CellCoord::new(6, 0));
        assert_eq!(nav.current_objective(), Some(Objective::Exit(CellCoord::new(6, 0))));
    }

    #[test]
    fn objective_passed_en_route_is_collected() {
        // The path to the threat crosses the collectible.
        let (level, mut agent) = level_from("AC..T\n....E\n");
        let mut nav = NavigationController::initialize(&level, AStarPathfinder).unwrap();
        tick(&mut nav, &level, &mut agent);
        assert_eq!(agent, CellCoord::new(1, 0));
        tick(&mut nav, &level, &mut agent);
        assert_eq!(nav.take_arrivals(), vec![Objective::Collectible(CellCoord::new(1, 0))]);
        assert_eq!(nav.current_objective(), Some(Objective::Threat(CellCoord::new(4, 0))));
    }

    #[test]
    fn exit_is_terminal_across_many_ticks() {
        let (level, mut agent) = level_from("A...\n...E\n");
        let exit = CellCoord::new(3, 1);
        let mut nav = NavigationController::initialize(&level, AStarPathfinder).unwrap();
        for _ in 0..50 {
            tick(&mut nav, &level, &mut agent).unwrap();
            assert_eq!(nav.current_objective(), Some(Objective::Exit(exit)));
            assert_eq!(nav.objective_count(), 0);
        }
        assert_eq!(agent, exit);

        // Parked on the exit, the exit itself keeps coming back.
        let here = level.cell_to_world(exit);
        assert_eq!(nav.next_destination(&level, here).unwrap(), Some(here));
    }

    #[test]
    fn threat_appearing_after_exit_lock_is_ignored() {
        let mut world = ScriptedWorld::open(4, 1, CellCoord::new(3, 0));
        let mut agent = CellCoord::new(0, 0);
        let mut nav = NavigationController::initialize(&world, AStarPathfinder).unwrap();
        tick(&mut nav, &world, &mut agent).unwrap();
        assert!(nav.is_exit_locked());

        world.threats.insert(CellCoord::new(0, 0));
        tick(&mut nav, &world, &mut agent).unwrap();
        assert_eq!(nav.current_objective(), Some(Objective::Exit(CellCoord::new(3, 0))));
        assert_eq!(nav.objective_count(), 0);
    }

    #[test]
    fn vanished_threat_triggers_reselection() {
        let (mut level, mut agent) = level_from(
            "\
T...A...T
........E
",
        );
        let left = CellCoord::new(0, 0);
        let right = CellCoord::new(8, 0);
        let mut nav = NavigationController::initialize(&level, AStarPathfinder).unwrap();

        // Equidistant threats: the smaller (y, x) wins.
        tick(&mut nav, &level, &mut agent).unwrap();
        assert_eq!(nav.current_objective(), Some(Objective::Threat(left)));

        assert!(level.deactivate_threat(left));
        tick(&mut nav, &level, &mut agent).unwrap();
        assert_eq!(nav.current_objective(), Some(Objective::Threat(right)));
        assert!(!nav.objectives().is_live_threat(left));
        assert!(nav.objectives().is_live_threat(right));
        assert_eq!(nav.objective_count(), 1);
        assert!(nav.take_arrivals().is_empty());
    }

    #[test]
    fn returning_threat_is_not_readmitted() {
        let threat = CellCoord::new(2, 2);
        let mut world = ScriptedWorld::open(3, 3, CellCoord::new(2, 0));
        world.threats.insert(threat);
        let mut agent = CellCoord::new(0, 0);
        let mut nav = NavigationController::initialize(&world, AStarPathfinder).unwrap();
        assert_eq!(nav.objective_count(), 1);

        world.threats.clear();
        tick(&mut nav, &world, &mut agent).unwrap();
        assert_eq!(nav.objective_count(), 0);

        world.threats.insert(threat);
        tick(&mut nav, &world, &mut agent).unwrap();
        assert_eq!(nav.objective_count(), 0);
        assert_eq!(nav.current_objective(), Some(Objective::Exit(CellCoord::new(2, 0))));
    }

    #[test]
    fn unreachable_objective_yields_none_and_is_kept() {
        let (mut level, agent) = level_from("A#E\n");
        let exit = CellCoord::new(2, 0);
        let mut nav = NavigationController::initialize(&level, AStarPathfinder).unwrap();
        let here = level.cell_to_world(agent);

        assert_eq!(nav.next_destination(&level, here).unwrap(), None);
        assert_eq!(nav.current_objective(), Some(Objective::Exit(exit)));
        assert_eq!(nav.next_destination(&level, here).unwrap(), None);

        level.grid_mut().set_walkable(CellCoord::new(1, 0), true).unwrap();
        let dest = nav.next_destination(&level, here).unwrap();
        assert_eq!(dest, Some(level.cell_to_world(CellCoord::new(1, 0))));
    }

    #[test]
    fn divergence_discards_cached_path() {
        let (level, agent) = level_from(
            "\
A...E
.....
.....
",
        );
        let mut nav = NavigationController::initialize(&level, AStarPathfinder).unwrap();
        nav.next_destination(&level, level.cell_to_world(agent)).unwrap().unwrap();
        assert_eq!(nav.pending_steps(), 3);

        // Agent pushed somewhere it was not sent.
        let shoved = CellCoord::new(0, 2);
        let dest = nav
            .next_destination(&level, level.cell_to_world(shoved))
            .unwrap()
            .unwrap();
        let next = level.world_to_cell(dest).unwrap();
        assert_eq!(next.manhattan(shoved), 1);
        assert_eq!(nav.state().last_dispatched, Some(next));
        assert_eq!(nav.state().last_known_position, Some(level.cell_to_world(shoved)));
        // (0, 2) → (4, 0) is 6 steps, one handed out.
        assert_eq!(nav.pending_steps(), 5);
    }

    #[test]
    fn missing_exit_is_fatal() {
        let (level, _) = level_from("A.C\n");
        assert!(matches!(
            NavigationController::initialize(&level, AStarPathfinder),
            Err(NavError::MissingExit)
        ));
    }

    #[test]
    fn exit_off_grid_is_fatal() {
        let world = ScriptedWorld::open(2, 2, CellCoord::new(5, 5));
        assert!(matches!(
            NavigationController::initialize(&world, AStarPathfinder),
            Err(NavError::InvalidExit(c)) if c == CellCoord::new(5, 5)
        ));
    }

    #[test]
    fn position_outside_grid_is_fatal() {
        let (level, _) = level_from("A.E\n");
        let mut nav = NavigationController::initialize(&level, AStarPathfinder).unwrap();
        let result = nav.next_destination(&level, WorldPos::new(-3.0, 0.5));
        assert!(matches!(result, Err(NavError::Grid(GridError::OutsideGrid(_)))));
    }
}
