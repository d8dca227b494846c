pub mod options;
pub mod rank;
