pub mod follow;
pub mod game;
pub mod pool;
pub mod review;
pub mod user;
