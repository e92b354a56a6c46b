//! Internal logging helpers.
//!
//! With the `log` feature disabled these expand to nothing, so the engine carries no
//! formatting cost in the hot loop.

#[cfg(feature = "log")]
macro_rules! engine_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "stepwise_pathfinding", $($arg)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! engine_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! engine_trace {
    ($($arg:tt)*) => {
        log::trace!(target: "stepwise_pathfinding", $($arg)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! engine_trace {
    ($($arg:tt)*) => {};
}
