// Adapters layer: concrete implementations of the domain ports (http, views).

pub mod http;
pub mod view;
