pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;

pub use response::JsonResponse;
pub use server::{ApiState, build_router, serve};
