pub mod go;
pub mod rand;
pub mod ssh;
