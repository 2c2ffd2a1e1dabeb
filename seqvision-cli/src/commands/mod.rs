pub mod files;
pub mod sequence;
