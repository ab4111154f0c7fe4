//! Variadic reductions over call-site argument lists.
//!
//! These macros fold an arbitrary number of arguments with a single binary
//! operation, the way iterator adapters fold a sequence — but over a
//! heterogeneous-arity argument list fixed at the call site. The boolean
//! folds short-circuit left to right, and the empty invocations yield the
//! usual identities: `0` for [`sum_of!`], `true` for [`all_of!`], `false`
//! for [`any_of!`]. [`min_of!`] requires at least one argument since `Ord`
//! has no universal maximum.

/// Folds its arguments with `+`.
///
/// The empty invocation yields `0`.
///
/// # Examples
///
/// ```
/// assert_eq!(caliper::sum_of!(1, 2, 3, 4, 5), 15);
/// assert_eq!(caliper::sum_of!(), 0);
/// ```
#[macro_export]
macro_rules! sum_of {
    () => {
        0
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $first $(+ $rest)*
    };
}

/// Folds its arguments with [`std::cmp::min`].
///
/// Requires at least one argument; all arguments must share one `Ord` type.
///
/// # Examples
///
/// ```
/// assert_eq!(caliper::min_of!(10, 2, 3, 4, 5), 2);
/// assert_eq!(caliper::min_of!(7), 7);
/// ```
#[macro_export]
macro_rules! min_of {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        ::std::cmp::min($first, $crate::min_of!($($rest),+))
    };
}

/// Folds its arguments with `&&`, short-circuiting left to right.
///
/// The empty invocation yields `true`.
///
/// # Examples
///
/// ```
/// assert!(caliper::all_of!(true, true, true));
/// assert!(!caliper::all_of!(true, false, true));
/// assert!(caliper::all_of!());
/// ```
#[macro_export]
macro_rules! all_of {
    () => {
        true
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $first $(&& $rest)*
    };
}

/// Folds its arguments with `||`, short-circuiting left to right.
///
/// The empty invocation yields `false`.
///
/// # Examples
///
/// ```
/// assert!(caliper::any_of!(true, false, true));
/// assert!(!caliper::any_of!(false, false, false));
/// assert!(!caliper::any_of!());
/// ```
#[macro_export]
macro_rules! any_of {
    () => {
        false
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $first $(|| $rest)*
    };
}
