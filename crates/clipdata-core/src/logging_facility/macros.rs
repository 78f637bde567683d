//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log stage runs.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use clipdata_core::log_op_start;
/// log_op_start!("dedup");
/// log_op_start!("dedup", dataset_kind = "kaomoji");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = clipdata_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = clipdata_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use clipdata_core::log_op_end;
/// log_op_end!("dedup", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = clipdata_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = clipdata_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use clipdata_core::log_op_error;
/// # use clipdata_core::errors::{ExError, ExErrorKind};
/// let err = ExError::new(ExErrorKind::InputNotFound);
/// log_op_error!("export", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = clipdata_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = clipdata_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}

/// Log an item skipped by a stage (schema mismatch, unresolvable lookup)
///
/// # Example
///
/// ```
/// # use clipdata_core::log_skip;
/// log_skip!("enrich", "no Unicode name", location = "Math Symbols");
/// ```
#[macro_export]
macro_rules! log_skip {
    ($op:expr, $reason:expr) => {
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = clipdata_core_types::schema::EVENT_SKIPPED,
            reason = %$reason,
        );
    };
    ($op:expr, $reason:expr, $($field:tt)*) => {
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = clipdata_core_types::schema::EVENT_SKIPPED,
            reason = %$reason,
            $($field)*
        );
    };
}
