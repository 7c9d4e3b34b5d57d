/// Logs a message at `level` when `cond` does not hold, then evaluates to
/// `cond`.
///
/// ```
/// let words = wordtrie::Trie::from_iter(["apple"]);
/// assert!(wordtrie::debug_check!(
///     words.contains("Apple"),
///     log::Level::Error,
///     "stored word is missing",
/// ));
/// ```
#[macro_export]
macro_rules! debug_check {
    ($cond:expr, $level:expr, $($arg:tt)+) => {{
        let holds: bool = $cond;
        if !holds {
            $crate::__log::log!($level, condition = stringify!($cond); $($arg)+);
        }
        holds
    }};
}
