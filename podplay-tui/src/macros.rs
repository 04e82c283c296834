// Key bindings for the event loop

/// Build the key dispatch for `handle_global_keys`.
///
/// ```ignore
/// handlers!(state, key => {
///     fn quit(KeyCode::Char('q')) { return Ok(true); }
///     fn clear(KeyCode::Char('c'), has_playlist) { store.clear_player_state(); }
/// } else {
///     Ok(false)
/// });
/// ```
///
/// Every binding becomes one match arm on `key`. The `fn` name only labels
/// the binding. A guard, when given, is a predicate over `&AppState` and a
/// key whose guard fails falls through to the `else` block like an unbound
/// key. Bodies that do not return yield `Ok(false)`, meaning keep running.
#[macro_export]
macro_rules! handlers {
    (
        $state:ident, $key:ident => {
            $(
                fn $name:ident ( $pat:pat $(, $cond:expr)? ) $body:block
            )*
        } else $fallback:block
    ) => {
        match $key {
            $(
                $pat $(if $cond(&*$state))? => {
                    $body
                    Ok(false)
                },
            )*
            _ => $fallback,
        }
    }
}
