pub mod art;
pub mod codes;
pub mod convert;
pub mod list;
pub mod scroll;
pub mod stats;
