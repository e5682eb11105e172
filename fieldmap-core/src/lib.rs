pub mod filter;
pub mod model;
pub mod recommend;
pub mod util;
