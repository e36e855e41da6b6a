//! Call-site trace capture.
//!
//! A trace is a short arrow chain of the application frames that led to an
//! error, outermost caller first:
//!
//! ```text
//! api/handlers.rs:create_user():88 -> users/service.rs:register():41 -> users/repo.rs:insert():17
//! ```
//!
//! [`capture`] walks the live stack with the `backtrace` crate and hands the
//! resolved frames to [`render`], which is a pure function and can be fed
//! synthetic frames.

use core::fmt::Write;

mod config;
mod frame;

pub use config::{
    max_depth, set_frame_filter, set_max_depth, FrameFilter, FrameScope, TraceConfig, DEFAULT_MAX_DEPTH,
};
pub use frame::{crate_name, Frame};

/// Separator between rendered frames.
pub const SEPARATOR: &str = " -> ";

/// Captures the current call stack as a trace string.
///
/// Frames belonging to the `backtrace` crate are dropped first. After that
/// `skip` frames are dropped, counting the frame of `capture` itself, so
/// `capture(1, ..)` starts at the caller of `capture`. At most
/// `config.depth() + 1` frames are kept and the walk stops at the first frame
/// rejected by the configured [`FrameFilter`] through a [`FrameScope`].
#[inline(never)]
pub fn capture(skip: usize, config: &TraceConfig) -> String {
    let limit = config.frame_limit();
    let mut frames: Vec<Frame> = Vec::with_capacity(limit);
    let mut skipped = 0;
    let mut in_backtrace = true;
    let mut done = false;
    let mut scope = FrameScope::new(&config.filter);

    backtrace::trace(|raw| {
        backtrace::resolve_frame(raw, |symbol| {
            if done {
                return;
            }
            let function = symbol.name().map(|name| format!("{name:#}")).unwrap_or_default();
            if in_backtrace {
                if function.starts_with("backtrace::") {
                    return;
                }
                in_backtrace = false;
            }
            if skipped < skip {
                skipped += 1;
                return;
            }
            if !scope.admit(&function) {
                done = true;
                return;
            }
            frames.push(Frame {
                function,
                file: symbol.filename().map(Into::into),
                line: symbol.lineno(),
            });
            done = frames.len() >= limit;
        });
        !done
    });

    render(frames, config)
}

/// Formats frames given innermost first into an outermost-first chain.
///
/// Frames after the first one rejected by the filter are ignored, as are
/// frames beyond `config.depth() + 1`. With the default filter a frame from a
/// different crate than the first kept frame counts as rejected.
///
/// # Examples
///
/// ```
/// use error_trail::trace::{render, Frame, TraceConfig};
///
/// let frames = vec![
///     Frame::new("shop::repo::insert", Some("src/repo/mod.rs"), Some(17)),
///     Frame::new("shop::service::register", Some("src/service/mod.rs"), Some(41)),
///     Frame::new("std::rt::lang_start", None::<&str>, None),
/// ];
///
/// assert_eq!(
///     render(frames, &TraceConfig::default()),
///     "service/mod.rs:register():41 -> repo/mod.rs:insert():17"
/// );
/// ```
pub fn render<I>(frames: I, config: &TraceConfig) -> String
where
    I: IntoIterator<Item = Frame>,
{
    let mut scope = FrameScope::new(&config.filter);
    let kept: Vec<Frame> = frames
        .into_iter()
        .take_while(|frame| scope.admit(&frame.function))
        .take(config.frame_limit())
        .collect();

    if kept.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::trace!("no application frames in captured stack");
        return String::new();
    }

    let mut trace = String::with_capacity(kept.len() * 48);
    for (i, frame) in kept.iter().rev().enumerate() {
        if i > 0 {
            trace.push_str(SEPARATOR);
        }
        let _ = write!(trace, "{frame}");
    }
    trace
}
