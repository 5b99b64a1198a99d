/// HTTP surface exposing the template context and health probes
pub mod context;
/// Dual-timezone resolution with remote fetch and local fallback
pub mod world_time;
