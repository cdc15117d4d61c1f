/// Build a [`View`](crate::View) from a literal, like `vec!`.
///
/// ```
/// use sliver_core::view;
///
/// let q = view![2, 3, 5, 7, 11, 13];
/// assert_eq!((q.len(), q.capacity()), (6, 6));
///
/// let board = view![view!["_"; 3], view!["_"; 3]];
/// assert_eq!(board.cell(1, 2), Ok("_"));
/// ```
#[macro_export]
macro_rules! view {
    () => {
        $crate::View::from_literal([])
    };
    ($elem:expr; $n:expr) => {
        $crate::View::from_literal(::core::iter::repeat_n($elem, $n))
    };
    ($($x:expr),+ $(,)?) => {
        $crate::View::from_literal([$($x),+])
    };
}
