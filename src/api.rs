mod client;
pub mod fixture;
pub mod indicator;
pub mod source;
