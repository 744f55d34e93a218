pub mod root;
pub mod samples;
