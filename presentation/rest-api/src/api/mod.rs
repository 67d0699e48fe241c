pub mod error;
pub mod health;
pub mod page;
pub mod security;
pub mod tags;
pub mod webhooks;
pub mod wishlist;
