pub mod assistant;
pub mod config;
pub mod conversation;
pub mod dashboard;
pub mod sentiment;
pub mod services;
pub mod session;

pub use assistant::*;
pub use config::*;
pub use conversation::*;
pub use dashboard::*;
pub use sentiment::*;
pub use services::*;
pub use session::*;
