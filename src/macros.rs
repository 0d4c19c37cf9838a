//! Utility macros for the parser.
//!
//! - `MK_POSITION!` - Creates a Position from a byte offset
//! - `MK_SPAN!` - Creates a Span covering a byte range
//!
//! Offsets are `usize` byte indices into the source; the macros narrow them
//! to the `u32` stored in `Position`.

/// Creates a Position instance.
///
/// # Arguments
///
/// * `$offset` - Byte offset into the source
/// * `$file` - `Rc<String>` file label (cloned)
///
/// # Example
///
/// ```ignore
/// let position = MK_POSITION!(6, parser.file());
/// ```
#[macro_export]
macro_rules! MK_POSITION {
    ($offset:expr, $file:expr) => {
        $crate::Position(($offset) as u32, ::std::rc::Rc::clone($file))
    };
}

/// Creates a Span instance covering `$start..$end`.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(offset, offset + raw.len(), parser.file());
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        $crate::Span {
            start: $crate::MK_POSITION!($start, $file),
            end: $crate::MK_POSITION!($end, $file),
        }
    };
}
