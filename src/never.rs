/// Rust's `!` is unstable.  This empty enum is a locally-defined equivalent
/// which is stable, used by entry points that only return on failure.
#[derive(Debug)]
pub enum Never {}
