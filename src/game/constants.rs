pub const CELL_SIZE: i32 = 20;
pub const TILE_COUNT: i32 = 30;
pub const BOARD_EXTENT: i32 = CELL_SIZE * TILE_COUNT;
pub const INITIAL_SNAKE_LENGTH: usize = 4;
pub const INITIAL_APPLE_COUNT: usize = 3;
pub const APPLE_REWARD: u32 = 10;
pub const TICK_MS: u64 = 150;
pub const MAX_PLACE_ATTEMPTS: usize = 256;
