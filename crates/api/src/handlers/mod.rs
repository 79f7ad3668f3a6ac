pub mod category;
pub mod common;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;
