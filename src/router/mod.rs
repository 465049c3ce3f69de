pub mod client;
pub mod digest;
pub mod session;
pub mod transport;

pub use client::RouterClient;
pub use session::SessionStore;
pub use transport::{HttpTransport, LoginReply, RouterTransport};
