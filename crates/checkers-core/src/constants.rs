//! Global constants

/// Number of files and ranks on the board.
pub const BOARD_SIZE: usize = 8;

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of ranks each side fills in the starting position.
pub const STARTING_ROWS: usize = 3;

/// Maximum number of destinations a single piece can have in one position.
///
/// Each of the four diagonals yields at most one destination: a step when
/// the neighbour is empty, a jump when it holds an enemy piece.
pub const MAX_DESTINATIONS: usize = 4;

/// Number of occurrences of the same position that draws the game.
pub const REPETITION_DRAW: usize = 3;

/// Number of consecutive completed turns without a capture that draws the game.
pub const NO_CAPTURE_DRAW: usize = 100;
