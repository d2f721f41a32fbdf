//! Tests for the caller-owned session applying controls

#[cfg(test)]
mod tests {
    use dominoes::io::command::{Action, RemoveRequest};
    use dominoes::io::configuration::SEED_TILES;
    use dominoes::io::session::Session;
    use dominoes::tiles::domino::Tile;
    use dominoes::tiles::engine::SortDirection;

    // Tests a default session starts from the built-in seed
    #[test]
    fn test_default_session() {
        let session = Session::default();
        assert_eq!(session.seed(), &SEED_TILES);
        assert_eq!(session.tiles(), &SEED_TILES);
        assert_eq!(session.doubles(), 1);
    }

    // Tests actions replace the current list but never the seed
    // Verified by sorting the seed in place
    #[test]
    fn test_actions_leave_seed_alone() {
        let mut session = Session::default();
        session.sort(SortDirection::Desc);
        session.flip();
        session.deduplicate();
        assert_eq!(session.seed(), &SEED_TILES);
        assert_eq!(
            session.tiles(),
            &[
                Tile::new(3, 4),
                Tile::new(1, 6),
                Tile::new(1, 5),
                Tile::new(2, 1),
                Tile::new(1, 1),
            ]
        );
    }

    // Tests reset restores the seed after any sequence of actions
    #[test]
    fn test_reset_restores_seed() {
        let mut session = Session::default();
        for action in [
            Action::Flip,
            Action::Remove("7".to_string()),
            Action::Deduplicate,
            Action::Sort(SortDirection::Asc),
            Action::Remove("1,1".to_string()),
        ] {
            session.apply(&action);
        }
        assert_ne!(session.tiles(), &SEED_TILES);

        session.apply(&Action::Reset);
        assert_eq!(session.tiles(), &SEED_TILES);
    }

    // Tests remove reports what it did and ignores garbage
    #[test]
    fn test_remove() {
        let mut session = Session::default();

        assert_eq!(session.remove("abc"), None);
        assert_eq!(session.tiles(), &SEED_TILES);

        assert_eq!(
            session.remove("3,4"),
            Some(RemoveRequest::Pair(Tile::new(3, 4)))
        );
        assert_eq!(session.tiles().len(), SEED_TILES.len() - 2);

        assert_eq!(session.remove("7"), Some(RemoveRequest::Total(7)));
        assert_eq!(
            session.tiles(),
            &[Tile::new(5, 1), Tile::new(1, 1), Tile::new(1, 2)]
        );
    }

    // Tests a custom seed becomes the reset target
    #[test]
    fn test_custom_seed() {
        let seed = vec![Tile::new(2, 2), Tile::new(0, 3)];
        let mut session = Session::new(seed.clone());
        session.flip();
        assert_eq!(session.tiles(), &[Tile::new(2, 2), Tile::new(3, 0)]);
        session.reset();
        assert_eq!(session.tiles(), seed.as_slice());
    }
}
