mod fetch;
mod transport;

pub use fetch::FetchTransport;
pub use transport::{HttpResponse, HttpTransport};
