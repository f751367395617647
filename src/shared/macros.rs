/***************************************/
/*               Macros                */
/***************************************/
/**
 * Start-up guard for `main`. Yields the `Ok` value, or logs the error and
 * exits with status 1.
 *
 * The optional second argument names the step that failed, so the log line
 * reads `<step>: <error>`.
 */
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr, $step:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}: {}", $step, e);
                std::process::exit(1);
            }
        }
    };
    ($expr:expr) => {
        $crate::unwrap_or_exit!($expr, "start-up failed")
    };
}

/***************************************/
/*             Unit tests              */
/***************************************/
