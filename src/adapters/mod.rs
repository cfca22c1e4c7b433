// Adapters layer: concrete implementations for external systems (http server, page)

pub mod http;
pub mod page;
