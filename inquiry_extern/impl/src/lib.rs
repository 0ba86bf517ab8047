pub mod http;
pub mod inquiry;
