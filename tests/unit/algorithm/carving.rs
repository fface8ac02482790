//! Tests for wall carvability and the diagonal-adjacency check

#[cfg(test)]
mod tests {
    use cubemaze::algorithm::carving::{
        has_front_diagonal_passage, passage_direction, wall_can_become_passage, wall_neighbors,
    };
    use cubemaze::spatial::{CubeNet, Direction, MazeGrid};

    fn setup(side: usize) -> (CubeNet, MazeGrid) {
        let net = CubeNet::new(side).expect("valid side length");
        let grid = MazeGrid::new(&net);
        (net, grid)
    }

    #[test]
    fn test_wall_neighbors_in_direction_order() {
        let (net, mut grid) = setup(4);
        assert_eq!(
            wall_neighbors(&net, &grid, [6, 6]).expect("on net"),
            [[6, 5], [7, 6], [6, 7], [5, 6]]
        );

        grid.carve([6, 5]).expect("wall");
        assert_eq!(
            wall_neighbors(&net, &grid, [6, 6]).expect("on net"),
            [[7, 6], [6, 7], [5, 6]]
        );
        assert_eq!(
            passage_direction(&net, &grid, [6, 6]).expect("on net"),
            Some(Direction::Up)
        );
        assert_eq!(passage_direction(&net, &grid, [4, 4]).expect("on net"), None);
    }

    // Tests a wall touching one passage and nothing diagonal may be carved
    #[test]
    fn test_single_entry_is_carvable() {
        let (net, mut grid) = setup(4);
        grid.carve([6, 6]).expect("wall");

        for neighbor in [[6, 5], [7, 6], [6, 7], [5, 6]] {
            assert!(wall_can_become_passage(&net, &grid, neighbor).expect("on net"));
        }
        // Untouched walls and passages are not candidates
        assert!(!wall_can_become_passage(&net, &grid, [4, 4]).expect("on net"));
        assert!(!wall_can_become_passage(&net, &grid, [6, 6]).expect("on net"));
    }

    // Tests a wall between two passages is rejected
    // Verified by accepting any wall with a passage neighbor
    #[test]
    fn test_two_entries_rejected() {
        let (net, mut grid) = setup(4);
        grid.carve([6, 6]).expect("wall");
        grid.carve([6, 4]).expect("wall");
        assert!(!wall_can_become_passage(&net, &grid, [6, 5]).expect("on net"));
    }

    // Tests a passage diagonally ahead blocks carving
    // Verified by inspecting the cells beside the candidate instead of ahead of it
    #[test]
    fn test_front_diagonal_rejected() {
        let (net, mut grid) = setup(4);
        grid.carve([6, 6]).expect("wall");
        grid.carve([7, 4]).expect("wall");

        assert!(has_front_diagonal_passage(&net, &grid, [6, 5]).expect("on net"));
        assert!(!wall_can_become_passage(&net, &grid, [6, 5]).expect("on net"));
        assert!(!has_front_diagonal_passage(&net, &grid, [5, 6]).expect("on net"));
    }

    // Tests the sides are taken from the heading after crossing a rotated edge
    // Verified by using the pre-crossing direction for the sides
    #[test]
    fn test_front_diagonal_follows_heading() {
        let (net, mut grid) = setup(3);
        // Moving up from (1, 3) enters the top face at (3, 1) heading right
        grid.carve([1, 4]).expect("wall");
        grid.carve([3, 2]).expect("wall");

        assert_eq!(wall_neighbors(&net, &grid, [1, 3]).expect("on net").len(), 3);
        assert!(has_front_diagonal_passage(&net, &grid, [1, 3]).expect("on net"));
        assert!(!wall_can_become_passage(&net, &grid, [1, 3]).expect("on net"));
    }

    #[test]
    fn test_no_passage_means_no_diagonal() {
        let (net, grid) = setup(2);
        assert!(!has_front_diagonal_passage(&net, &grid, [3, 3]).expect("on net"));
    }
}
