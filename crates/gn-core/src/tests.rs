//! Unit tests for gn-core primitives.

#[cfg(test)]
mod coords {
    use crate::{CellCoord, WorldPos};

    #[test]
    fn manhattan_is_symmetric() {
        let a = CellCoord::new(0, 0);
        let b = CellCoord::new(4, -3);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn distance_sq_widens_before_squaring() {
        let a = CellCoord::new(-100_000, 0);
        let b = CellCoord::new(100_000, 0);
        assert_eq!(a.distance_sq(b), 40_000_000_000);
    }

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let n = CellCoord::new(2, 2).neighbors4();
        assert_eq!(n[0], CellCoord::new(2, 1));
        assert_eq!(n[1], CellCoord::new(2, 3));
        assert_eq!(n[2], CellCoord::new(1, 2));
        assert_eq!(n[3], CellCoord::new(3, 2));
    }

    #[test]
    fn border_neighbors_go_negative() {
        let n = CellCoord::new(0, 0).neighbors4();
        assert_eq!(n[0], CellCoord::new(0, -1));
        assert_eq!(n[2], CellCoord::new(-1, 0));
    }

    #[test]
    fn display() {
        assert_eq!(CellCoord::new(3, 7).to_string(), "(3, 7)");
        assert_eq!(WorldPos::new(0.5, 1.25).to_string(), "(0.500, 1.250)");
    }
}

#[cfg(test)]
mod cell {
    use std::collections::HashSet;

    use crate::{Cell, CellCoord, CellKind};

    #[test]
    fn equality_is_by_coordinate() {
        let a = Cell::new(CellCoord::new(1, 1), true, CellKind::Empty);
        let b = Cell::new(CellCoord::new(1, 1), false, CellKind::Threat);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b), "same coordinate must hash identically");
    }

    #[test]
    fn kind_labels() {
        assert_eq!(CellKind::Threat.as_str(), "threat");
        assert_eq!(CellKind::Exit.to_string(), "exit");
        assert_eq!(CellKind::Collectible.to_string(), "collectible");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn next_and_display() {
        assert_eq!(Tick::ZERO.next(), Tick(1));
        assert!(Tick(1) < Tick(2));
        assert_eq!(Tick(12).to_string(), "T12");
    }
}

#[cfg(test)]
mod config {
    use crate::{EpisodeConfig, GridConfig, WorldPos};

    #[test]
    fn defaults_are_valid() {
        assert!(GridConfig::default().validate().is_ok());
        assert!(EpisodeConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_cell_size() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let cfg = GridConfig { cell_size: size, ..GridConfig::default() };
            assert!(cfg.validate().is_err(), "cell_size {size} accepted");
        }
    }

    #[test]
    fn rejects_non_finite_origin() {
        let cfg = GridConfig { origin: WorldPos::new(f32::NAN, 0.0), cell_size: 1.0 };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_limits() {
        let cfg = EpisodeConfig { max_ticks: 0, ..EpisodeConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = EpisodeConfig { max_idle_ticks: 0, ..EpisodeConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
