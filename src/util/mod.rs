pub mod share;
pub mod testing;
