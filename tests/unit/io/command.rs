//! Tests for control parsing and the forgiving remove input

#[cfg(test)]
mod tests {
    use dominoes::DominoError;
    use dominoes::io::command::{Action, RemoveRequest};
    use dominoes::io::configuration::SEED_TILES;
    use dominoes::tiles::domino::Tile;
    use dominoes::tiles::engine::SortDirection;

    // Tests a comma-separated pair becomes a pair request
    #[test]
    fn test_parse_pair() {
        assert_eq!(
            RemoveRequest::parse("3,4"),
            Some(RemoveRequest::Pair(Tile::new(3, 4)))
        );
        assert_eq!(
            RemoveRequest::parse(" 6 , 1 "),
            Some(RemoveRequest::Pair(Tile::new(6, 1)))
        );
    }

    // Tests a single integer becomes a total request
    #[test]
    fn test_parse_total() {
        assert_eq!(RemoveRequest::parse("7"), Some(RemoveRequest::Total(7)));
        assert_eq!(RemoveRequest::parse("  12 "), Some(RemoveRequest::Total(12)));
    }

    // Tests malformed input is ignored rather than reported
    // Verified by treating partial numbers as valid
    #[test]
    fn test_parse_malformed_is_none() {
        for input in ["", "   ", "abc", "3,", ",4", "3,x", "1,2,3", "3,4,5", "-7", "7a", "3;4"] {
            assert_eq!(RemoveRequest::parse(input), None, "input {input:?}");
        }
    }

    // Tests requests dispatch to the matching removal
    #[test]
    fn test_apply() {
        let by_total = RemoveRequest::Total(7).apply(&SEED_TILES);
        assert_eq!(
            by_total,
            vec![Tile::new(5, 1), Tile::new(1, 1), Tile::new(1, 2)]
        );

        let by_pair = RemoveRequest::Pair(Tile::new(4, 3)).apply(&SEED_TILES);
        assert_eq!(by_pair.len(), SEED_TILES.len() - 1);
        assert!(!by_pair.contains(&Tile::new(4, 3)));
        assert!(by_pair.contains(&Tile::new(3, 4)));
    }

    // Tests every control name and alias
    #[test]
    fn test_action_names() {
        let cases = [
            ("sort-asc", Action::Sort(SortDirection::Asc)),
            ("asc", Action::Sort(SortDirection::Asc)),
            ("sort desc", Action::Sort(SortDirection::Desc)),
            ("SORT-DESC", Action::Sort(SortDirection::Desc)),
            ("flip", Action::Flip),
            ("dedup", Action::Deduplicate),
            ("remove-duplicates", Action::Deduplicate),
            ("  reset  ", Action::Reset),
            ("remove 3,4", Action::Remove("3,4".to_string())),
            ("remove   7 ", Action::Remove("7".to_string())),
            ("remove", Action::Remove(String::new())),
        ];

        for (text, expected) in cases {
            assert_eq!(text.parse::<Action>().ok(), Some(expected), "text {text:?}");
        }
    }

    // Tests unknown controls and bad sort directions fail loudly
    #[test]
    fn test_action_errors() {
        assert!(matches!(
            "shuffle".parse::<Action>(),
            Err(DominoError::UnknownAction { .. })
        ));
        assert!(matches!(
            "flip twice".parse::<Action>(),
            Err(DominoError::UnknownAction { .. })
        ));
        assert!(matches!(
            "sort sideways".parse::<Action>(),
            Err(DominoError::InvalidArgument { .. })
        ));
    }
}
