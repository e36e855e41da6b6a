//! Trace capture configuration.
//!
//! A [`TraceConfig`] bounds how many frames are kept and decides, through a
//! [`FrameFilter`], which frames belong to the application. Captures stop at
//! the first frame the filter rejects.
//!
//! The free construction functions ([`StructuredError::new`],
//! [`wrap`](crate::wrap)) read the process defaults through
//! [`TraceConfig::global`]. Configure those once during start-up, or hand an
//! explicit configuration to a [`Tracer`](crate::Tracer) instead.
//!
//! [`StructuredError::new`]: crate::StructuredError::new

use core::fmt;
use std::borrow::Cow;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use super::frame::crate_name;

/// Default number of frames kept beyond the first one.
pub const DEFAULT_MAX_DEPTH: usize = 5;

static MAX_DEPTH: AtomicUsize = AtomicUsize::new(DEFAULT_MAX_DEPTH);
static FRAME_FILTER: OnceLock<FrameFilter> = OnceLock::new();

/// Function path prefixes never taken as the start of an application trace.
const RUNTIME_PREFIXES: &[&str] = &[
    "std::",
    "core::",
    "alloc::",
    "test::",
    "backtrace::",
    "tokio::",
    "futures",
    "<std::",
    "<core::",
    "<alloc::",
    "<tokio::",
    "<futures",
    "tower::",
    "<tower::",
    "hyper::",
    "<hyper::",
    "__rust",
];

/// Sets the process-wide default depth. Affects only later captures.
pub fn set_max_depth(depth: usize) {
    MAX_DEPTH.store(depth, Ordering::Relaxed);
}

/// Current process-wide default depth.
pub fn max_depth() -> usize {
    MAX_DEPTH.load(Ordering::Relaxed)
}

/// Installs the process-wide frame filter.
///
/// The filter can be installed once; later calls hand the rejected filter back.
pub fn set_frame_filter(filter: FrameFilter) -> Result<(), FrameFilter> {
    FRAME_FILTER.set(filter)
}

/// Decides whether a frame belongs to the application.
///
/// The predicate receives the demangled function path of the frame.
#[derive(Clone, Default)]
pub enum FrameFilter {
    /// Infers the application from the first frame of a walk.
    ///
    /// The first frame must not be standard library, runtime, generic glue
    /// (`<F as core::ops::FnOnce>::call_once`) or unresolved; its crate becomes
    /// the application namespace and the walk stops at the first frame of any
    /// other crate.
    #[default]
    Application,
    /// Accepts frames whose function path contains the marker.
    Contains(Cow<'static, str>),
    /// Accepts every frame.
    Any,
    Custom(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl FrameFilter {
    #[inline]
    pub fn contains(marker: impl Into<Cow<'static, str>>) -> Self {
        Self::Contains(marker.into())
    }

    #[inline]
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    /// Whether `function` may be kept on its own.
    ///
    /// For [`Application`](Self::Application) this is the check applied to the
    /// first frame; later frames must also share its crate, see
    /// [`FrameScope`].
    pub fn accepts(&self, function: &str) -> bool {
        match self {
            Self::Application => {
                let name = crate_name(function);
                !name.is_empty()
                    && name.starts_with(|c: char| c.is_ascii_lowercase() || c == '_')
                    && !RUNTIME_PREFIXES.iter().any(|prefix| function.starts_with(prefix))
            },
            Self::Contains(marker) => function.contains(marker.as_ref()),
            Self::Any => true,
            Self::Custom(predicate) => predicate(function),
        }
    }
}

impl fmt::Debug for FrameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Application => f.write_str("Application"),
            Self::Contains(marker) => f.debug_tuple("Contains").field(marker).finish(),
            Self::Any => f.write_str("Any"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A [`FrameFilter`] applied along one walk, innermost frame first.
///
/// # Examples
///
/// ```
/// use error_trail::trace::{FrameFilter, FrameScope};
///
/// let mut scope = FrameScope::new(&FrameFilter::Application);
/// assert!(scope.admit("shop::repo::insert"));
/// assert!(scope.admit("<shop::Repo as serde::Serialize>::serialize"));
/// assert!(!scope.admit("hyper::proto::h1::dispatch::Dispatcher::poll_inner"));
/// ```
#[derive(Debug)]
pub struct FrameScope<'a> {
    filter: &'a FrameFilter,
    namespace: Option<String>,
}

impl<'a> FrameScope<'a> {
    #[inline]
    pub fn new(filter: &'a FrameFilter) -> Self {
        Self { filter, namespace: None }
    }

    /// Whether the next frame outward belongs to the trace.
    pub fn admit(&mut self, function: &str) -> bool {
        if !matches!(self.filter, FrameFilter::Application) {
            return self.filter.accepts(function);
        }
        if let Some(namespace) = &self.namespace {
            return crate_name(function) == namespace.as_str();
        }
        if !self.filter.accepts(function) {
            return false;
        }
        self.namespace = Some(crate_name(function).to_owned());
        true
    }
}

/// Depth bound and namespace filter for one capture.
///
/// # Examples
///
/// ```
/// use error_trail::trace::{FrameFilter, TraceConfig};
///
/// let config = TraceConfig::default().max_depth(3).namespace("billing");
/// assert_eq!(config.depth(), 3);
/// assert!(config.frame_filter().accepts("billing::invoice::issue"));
/// assert!(!config.frame_filter().accepts("std::rt::lang_start"));
/// ```
#[derive(Debug, Clone)]
pub struct TraceConfig {
    pub(crate) max_depth: usize,
    pub(crate) filter: FrameFilter,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, filter: FrameFilter::default() }
    }
}

impl TraceConfig {
    #[inline]
    pub fn new(max_depth: usize, filter: FrameFilter) -> Self {
        Self { max_depth, filter }
    }

    /// Snapshot of the process-wide defaults.
    pub fn global() -> Self {
        Self {
            max_depth: max_depth(),
            filter: FRAME_FILTER.get().cloned().unwrap_or_default(),
        }
    }

    #[must_use]
    #[inline]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    #[inline]
    pub fn filter(mut self, filter: FrameFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Shorthand for `filter(FrameFilter::contains(marker))`.
    #[must_use]
    #[inline]
    pub fn namespace(self, marker: impl Into<Cow<'static, str>>) -> Self {
        self.filter(FrameFilter::contains(marker))
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    pub fn frame_filter(&self) -> &FrameFilter {
        &self.filter
    }

    /// Maximum number of frames a capture keeps.
    #[inline]
    pub(crate) fn frame_limit(&self) -> usize {
        self.max_depth.saturating_add(1)
    }
}
