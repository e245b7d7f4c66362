//! Destination generation per active role.
//!
//! All generators respect the current limits: a slide stops at the box
//! edge and a knight jump may not land outside it. Destination order is
//! fixed (the direction order written in each generator), which makes the
//! successor order of the whole engine deterministic.

use crate::board::position::{move_position, Position};
use crate::errors::ChameleonErrors;
use crate::game_state::game_state::GameState;
use crate::game_state::role::Role;

/// What a candidate destination cell holds.
enum Collision {
    Empty,
    Enemy,
}

/// All legal destination cells of the pawn at `pawn_index`, dispatched on
/// its active role. The pawn must belong to the player to move.
pub fn generate_pawn_destinations(
    game: &GameState,
    pawn_index: usize,
) -> Result<Vec<Position>, ChameleonErrors> {
    let pawn = game
        .pawns
        .get(pawn_index)
        .ok_or(ChameleonErrors::PawnIndexOutOfRange(pawn_index))?;
    let start = pawn.position;
    match pawn.active_role() {
        Role::Knight => generate_destinations_knight(game, &start),
        Role::Queen => generate_destinations_queen(game, &start),
        Role::Bishop => generate_destinations_bishop(game, &start),
        Role::Rook => generate_destinations_rook(game, &start),
    }
}

pub fn generate_destinations_rook(
    game: &GameState,
    start: &Position,
) -> Result<Vec<Position>, ChameleonErrors> {
    let mut result = Vec::new();
    // Check the start cell actually makes this pawn a rook
    verify_is_active_role_and_turn(game, start, Role::Rook)?;
    // Try all 4 rook directions until collision
    // Up
    follow_move_vector(game, start, -1, 0, &mut result);
    // Down
    follow_move_vector(game, start, 1, 0, &mut result);
    // Left
    follow_move_vector(game, start, 0, -1, &mut result);
    // Right
    follow_move_vector(game, start, 0, 1, &mut result);
    // Return
    Ok(result)
}

pub fn generate_destinations_bishop(
    game: &GameState,
    start: &Position,
) -> Result<Vec<Position>, ChameleonErrors> {
    let mut result = Vec::new();
    // Check the start cell actually makes this pawn a bishop
    verify_is_active_role_and_turn(game, start, Role::Bishop)?;
    // Try all 4 diagonals until collision
    // Up-left
    follow_move_vector(game, start, -1, -1, &mut result);
    // Up-right
    follow_move_vector(game, start, -1, 1, &mut result);
    // Down-left
    follow_move_vector(game, start, 1, -1, &mut result);
    // Down-right
    follow_move_vector(game, start, 1, 1, &mut result);
    // Return
    Ok(result)
}

pub fn generate_destinations_queen(
    game: &GameState,
    start: &Position,
) -> Result<Vec<Position>, ChameleonErrors> {
    let mut result = Vec::new();
    // Check the start cell actually makes this pawn a queen
    verify_is_active_role_and_turn(game, start, Role::Queen)?;
    // Try all 8 queen directions until collision
    // Up
    follow_move_vector(game, start, -1, 0, &mut result);
    // Down
    follow_move_vector(game, start, 1, 0, &mut result);
    // Left
    follow_move_vector(game, start, 0, -1, &mut result);
    // Right
    follow_move_vector(game, start, 0, 1, &mut result);
    // Up-left
    follow_move_vector(game, start, -1, -1, &mut result);
    // Up-right
    follow_move_vector(game, start, -1, 1, &mut result);
    // Down-left
    follow_move_vector(game, start, 1, -1, &mut result);
    // Down-right
    follow_move_vector(game, start, 1, 1, &mut result);
    // Return
    Ok(result)
}

pub fn generate_destinations_knight(
    game: &GameState,
    start: &Position,
) -> Result<Vec<Position>, ChameleonErrors> {
    let mut result = Vec::new();
    // Check the start cell actually makes this pawn a knight
    verify_is_active_role_and_turn(game, start, Role::Knight)?;
    // Try all 8 knight jumps
    const JUMPS: [(i8, i8); 8] = [
        (2, 1),
        (2, -1),
        (-2, 1),
        (-2, -1),
        (1, 2),
        (-1, 2),
        (1, -2),
        (-1, -2),
    ];
    for (d_row, d_col) in JUMPS {
        if let Ok(stop) = move_position(start, d_row, d_col) {
            if !game.limits.contains(&stop) {
                continue;
            }
            if check_move_collision(game, &stop).is_some() {
                result.push(stop);
            }
        }
    }
    Ok(result)
}

/// Walks one slide direction, collecting cells until the limits, a capture
/// or an own pawn end it.
fn follow_move_vector(
    game: &GameState,
    start: &Position,
    d_row: i8,
    d_col: i8,
    result: &mut Vec<Position>,
) {
    for distance in 1..8 {
        let stop = match move_position(start, d_row * distance, d_col * distance) {
            Ok(stop) => stop,
            Err(_) => break,
        };
        if !game.limits.contains(&stop) {
            break;
        }
        match check_move_collision(game, &stop) {
            Some(Collision::Empty) => result.push(stop),
            Some(Collision::Enemy) => {
                result.push(stop);
                break;
            }
            None => break,
        }
    }
}

fn check_move_collision(game: &GameState, stop: &Position) -> Option<Collision> {
    // Assume no collision occurs
    if let Some(target) = game.pawn_at(stop) {
        // Something was at the stop cell
        if game.turn == target.owner {
            return None; // Collide with an own pawn, not a move
        }
        return Some(Collision::Enemy);
    }
    Some(Collision::Empty)
}

fn verify_is_active_role_and_turn(
    game: &GameState,
    start: &Position,
    role: Role,
) -> Result<(), ChameleonErrors> {
    match game.pawn_at(start) {
        Some(pawn) => {
            if pawn.owner != game.turn || pawn.active_role() != role {
                Err(ChameleonErrors::InvalidMoveStartCondition(*start))
            } else {
                Ok(())
            }
        }
        None => Err(ChameleonErrors::NoPawnAtLocation(*start)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::game_state::limits::Limits;
    use crate::game_state::pawn::Pawn;
    use crate::game_state::players::PlayerType;

    fn bare_state(pawns: Vec<Pawn>, turn: Color) -> GameState {
        GameState {
            pawns,
            limits: Limits::start(),
            players: [PlayerType::Computer; 4],
            turn,
        }
    }

    fn pawn(owner: Color, position: Position, knight_color: Color) -> Pawn {
        Pawn {
            id: owner.index() as u8,
            owner,
            position,
            knight_color,
        }
    }

    // (4,4) is a blue cell, so the knight color picks the role there:
    // red -> rook, green -> bishop, yellow -> queen, blue -> knight.

    #[test]
    fn lone_rook_reaches_fourteen_cells() -> Result<(), ChameleonErrors> {
        let game = bare_state(vec![pawn(Color::Red, (4, 4), Color::Red)], Color::Red);
        let destinations = generate_pawn_destinations(&game, 0)?;
        assert_eq!(destinations.len(), 14);
        Ok(())
    }

    #[test]
    fn lone_bishop_reaches_thirteen_cells() -> Result<(), ChameleonErrors> {
        let game = bare_state(vec![pawn(Color::Red, (4, 4), Color::Green)], Color::Red);
        let destinations = generate_pawn_destinations(&game, 0)?;
        assert_eq!(destinations.len(), 13);
        Ok(())
    }

    #[test]
    fn lone_queen_reaches_twenty_seven_cells() -> Result<(), ChameleonErrors> {
        let game = bare_state(vec![pawn(Color::Red, (4, 4), Color::Yellow)], Color::Red);
        let destinations = generate_pawn_destinations(&game, 0)?;
        assert_eq!(destinations.len(), 27);
        Ok(())
    }

    #[test]
    fn lone_knight_reaches_eight_cells() -> Result<(), ChameleonErrors> {
        let game = bare_state(vec![pawn(Color::Red, (4, 4), Color::Blue)], Color::Red);
        let destinations = generate_pawn_destinations(&game, 0)?;
        assert_eq!(destinations.len(), 8);
        Ok(())
    }

    #[test]
    fn own_pawn_blocks_and_enemy_pawn_ends_the_slide() -> Result<(), ChameleonErrors> {
        let game = bare_state(
            vec![
                pawn(Color::Red, (4, 4), Color::Red),
                pawn(Color::Red, (4, 6), Color::Red),
                pawn(Color::Green, (2, 4), Color::Green),
            ],
            Color::Red,
        );
        let destinations = generate_pawn_destinations(&game, 0)?;
        // Right ray: only (4,5), own pawn at (4,6) blocks.
        assert!(destinations.contains(&(4, 5)));
        assert!(!destinations.contains(&(4, 6)));
        // Up ray: (3,4) then the capture at (2,4), nothing beyond.
        assert!(destinations.contains(&(3, 4)));
        assert!(destinations.contains(&(2, 4)));
        assert!(!destinations.contains(&(1, 4)));
        Ok(())
    }

    #[test]
    fn slides_stop_at_the_limits() -> Result<(), ChameleonErrors> {
        let mut game = bare_state(vec![pawn(Color::Red, (4, 4), Color::Red)], Color::Red);
        game.limits = Limits {
            min_row: 3,
            max_row: 5,
            min_col: 3,
            max_col: 6,
        };
        let destinations = generate_pawn_destinations(&game, 0)?;
        assert!(destinations.contains(&(3, 4)));
        assert!(!destinations.contains(&(2, 4)));
        assert!(destinations.contains(&(4, 6)));
        assert!(!destinations.contains(&(4, 7)));
        assert_eq!(destinations.len(), 5);
        Ok(())
    }

    #[test]
    fn knight_in_the_smallest_box_center_is_stuck() -> Result<(), ChameleonErrors> {
        let mut game = bare_state(vec![pawn(Color::Red, (4, 4), Color::Blue)], Color::Red);
        game.limits = Limits {
            min_row: 3,
            max_row: 5,
            min_col: 3,
            max_col: 5,
        };
        let destinations = generate_pawn_destinations(&game, 0)?;
        assert!(destinations.is_empty());
        Ok(())
    }

    #[test]
    fn role_changes_with_the_cell_under_the_pawn() -> Result<(), ChameleonErrors> {
        // A red-knight-color pawn is a rook on (4,4) but a knight on a red
        // cell like (7,0).
        let on_blue = bare_state(vec![pawn(Color::Red, (4, 4), Color::Red)], Color::Red);
        let on_red = bare_state(vec![pawn(Color::Red, (7, 0), Color::Red)], Color::Red);
        assert_eq!(generate_pawn_destinations(&on_blue, 0)?.len(), 14);
        // From the corner only (5,1) and (6,2) are knight jumps on the board.
        let corner_jumps = generate_pawn_destinations(&on_red, 0)?;
        assert_eq!(corner_jumps.len(), 2);
        assert!(corner_jumps.contains(&(5, 1)));
        assert!(corner_jumps.contains(&(6, 2)));
        Ok(())
    }

    #[test]
    fn generators_reject_the_wrong_role_or_turn() {
        let game = bare_state(vec![pawn(Color::Red, (4, 4), Color::Red)], Color::Red);
        // The pawn is a rook on (4,4), not a knight.
        assert!(generate_destinations_knight(&game, &(4, 4)).is_err());
        // Green to move, the red pawn may not be queried.
        let green_turn = bare_state(vec![pawn(Color::Red, (4, 4), Color::Red)], Color::Green);
        assert!(generate_destinations_rook(&green_turn, &(4, 4)).is_err());
        // Empty cell.
        assert!(generate_destinations_rook(&game, &(0, 0)).is_err());
    }
}
