pub mod inspect;
pub mod score;
