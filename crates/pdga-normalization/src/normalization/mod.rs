pub mod dates;
pub mod names;
pub mod options;
pub mod status;
pub mod website;
