//! JSON file formats read and written by the commands.

pub mod report;
pub mod scene_file;
