// src/utils/app_time.rs
// std::time::Instant panics in the browser; web_time provides the same API there.

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

pub fn now() -> AppInstant {
    AppInstant::now()
}
