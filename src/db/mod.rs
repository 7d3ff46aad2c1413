pub mod locate;
pub mod pool;
pub mod queries;
