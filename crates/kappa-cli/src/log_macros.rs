/// Domain-aware logging macros.
///
/// Each macro injects a `domain` field so every event says which stage it
/// came from. Domains in use: `sys`, `conf`, `parse`, `agg`, `out`.
///
/// ```ignore
/// kappa_info!(parse, records = 120, "loaded chat log");
/// kappa_debug!(conf, window = 60, "resolved options");
/// ```
///
/// The domain is a bare identifier, not a string literal.

#[doc(hidden)]
macro_rules! kappa_log {
    ($level:ident, $domain:ident, $($field:tt)*) => {
        tracing::$level!(domain = stringify!($domain), $($field)*)
    };
}

macro_rules! kappa_warn {
    ($domain:ident, $($rest:tt)*) => {
        kappa_log!(warn, $domain, $($rest)*)
    };
}

macro_rules! kappa_info {
    ($domain:ident, $($rest:tt)*) => {
        kappa_log!(info, $domain, $($rest)*)
    };
}

macro_rules! kappa_debug {
    ($domain:ident, $($rest:tt)*) => {
        kappa_log!(debug, $domain, $($rest)*)
    };
}
