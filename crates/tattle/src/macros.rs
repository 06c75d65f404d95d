/// Report an internal error with variadic arguments.
///
/// ```rust
/// use tattle::internal_error;
///
/// let err = std::io::Error::other("pipe closed");
/// internal_error!("writer stopped");
/// internal_error!("writer {0} stopped after {1} entries", "file", 12);
/// internal_error!(cause: &err);
/// internal_error!(cause: &err, "cannot flush {0}", "log.txt");
/// ```
///
/// The `in reporter;` form targets an explicit [`InternalReporter`] instead
/// of standard error:
///
/// ```rust
/// use tattle::{internal_error, CaptureSink, InternalReporter};
///
/// let reporter = InternalReporter::new(CaptureSink::new());
/// internal_error!(in reporter; "value={0}", 42);
/// assert_eq!(reporter.sink().lines(), vec!["LOGGING ERROR: value=42"]);
/// ```
///
/// A message without arguments is reported verbatim, without template
/// processing.
///
/// [`InternalReporter`]: crate::InternalReporter
#[macro_export]
macro_rules! internal_error {
    (in $reporter:expr; cause: $cause:expr $(,)?) => {
        $reporter.error_cause(&$crate::Cause::of($cause))
    };
    (in $reporter:expr; cause: $cause:expr, $message:expr $(,)?) => {
        $reporter.error_with(&$crate::Cause::of($cause), $message)
    };
    (in $reporter:expr; cause: $cause:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $reporter.error_with_fmt(
            &$crate::Cause::of($cause),
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),+],
        )
    };
    (in $reporter:expr; $message:expr $(,)?) => {
        $reporter.error($message)
    };
    (in $reporter:expr; $template:expr, $($arg:expr),+ $(,)?) => {
        $reporter.error_fmt($template, &[$(&$arg as &dyn ::std::fmt::Display),+])
    };
    ($($rest:tt)+) => {
        $crate::internal_error!(in $crate::stderr(); $($rest)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::{CaptureSink, InternalReporter};
    use std::io;

    #[test]
    fn macro_forms() {
        let r = InternalReporter::new(CaptureSink::new());
        let err = io::Error::other("pipe closed");
        let ty = crate::Cause::of(&err).type_name().to_string();

        internal_error!(in r; "plain {0}");
        internal_error!(in r; "n={0} m={1}", 1, "two");
        internal_error!(in r; cause: &err);
        internal_error!(in r; cause: &err, "outer");
        internal_error!(in r; cause: &err, "flush {0}", "log.txt",);

        assert_eq!(
            r.sink().lines(),
            vec![
                "LOGGING ERROR: plain {0}".to_string(),
                "LOGGING ERROR: n=1 m=two".to_string(),
                format!("LOGGING ERROR: pipe closed ({})", ty),
                format!("LOGGING ERROR: outer ({}: pipe closed)", ty),
                format!("LOGGING ERROR: flush log.txt ({}: pipe closed)", ty),
            ]
        );
    }

    #[test]
    fn macro_to_stderr() {
        internal_error!("macro stderr test {0}", 1);
    }
}
