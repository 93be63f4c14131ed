pub mod book;
pub mod completion;
pub mod portal;
pub mod times;
