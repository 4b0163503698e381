//! Selectors - pure read projections over composite state
//!
//! A selector derives a value from the state tree without mutating it.
//! Lookups that miss report absence with `Option`, never an error: reads
//! are total functions over the state space and the caller decides what
//! absence means.

/// A pure projection from state to a derived value.
///
/// Blanket-implemented for any `Fn(&S) -> T`, so plain functions and
/// non-capturing closures are selectors as-is:
///
/// ```
/// use uniflow_core::Selector;
///
/// struct AppState {
///     names: Vec<String>,
/// }
///
/// fn select_first_name(state: &AppState) -> Option<String> {
///     state.names.first().cloned()
/// }
///
/// let state = AppState { names: vec![] };
/// // Missing data is `None`, not a panic.
/// assert_eq!(select_first_name.select(&state), None);
/// ```
pub trait Selector<S> {
    /// The derived value this selector produces.
    type Output;

    /// Project a derived value out of the state. Must not mutate `state`
    /// and must not perform I/O.
    fn select(&self, state: &S) -> Self::Output;
}

impl<S, T, F> Selector<S> for F
where
    F: Fn(&S) -> T,
{
    type Output = T;

    fn select(&self, state: &S) -> T {
        self(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Todos {
        items: Vec<(u64, String)>,
    }

    fn description(id: u64) -> impl Selector<Todos, Output = Option<String>> {
        move |state: &Todos| {
            state
                .items
                .iter()
                .find(|(item_id, _)| *item_id == id)
                .map(|(_, text)| text.clone())
        }
    }

    #[test]
    fn closure_is_a_selector() {
        let state = Todos {
            items: vec![(1, "Buy rice".to_string())],
        };
        assert_eq!(description(1).select(&state), Some("Buy rice".to_string()));
    }

    #[test]
    fn miss_is_none_not_an_error() {
        let state = Todos { items: vec![] };
        assert_eq!(description(42).select(&state), None);
    }
}
