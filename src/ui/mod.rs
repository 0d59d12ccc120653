pub mod alert;
pub mod basic;
pub mod counter;
pub mod history_list;
pub mod icon;
pub mod input;
pub mod live;
pub mod result;

pub use icon::*;
