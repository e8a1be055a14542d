pub mod micros;
pub mod row;

pub use micros::*;
pub use row::*;
