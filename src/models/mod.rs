pub mod banlist;
pub mod binder;
pub mod card;
pub mod deck;

pub use banlist::*;
pub use binder::*;
pub use card::*;
pub use deck::*;
