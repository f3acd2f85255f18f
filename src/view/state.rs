// src/view/state.rs
// =============================================================================
// The three-state lifecycle shared by the list view and the tree view.
//
//   Loading --ok--> Success(data)
//      \----err---> Error(message)
//
// Success and Error stay put until the next fetch begins. Every fetch is
// stamped with a Ticket; completing with an outdated ticket is ignored, so
// a slow response from an earlier navigation cannot overwrite newer state.
// =============================================================================

use crate::error::{FetchError, FetchErrorKind};

use super::messages::{MessagePicker, ERROR_MESSAGES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Success(T),
    Error(&'static str),
}

/// Identifies one fetch started by [`View::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct View<T> {
    loading_message: &'static str,
    error_message: &'static str,
    generation: u64,
    state: ViewState<T>,
    last_error: Option<FetchErrorKind>,
}

impl<T> View<T> {
    /// Creates a view in the Loading state. The loading message is drawn
    /// from `loading_messages` and the error message from the shared list,
    /// both once, here.
    pub fn new(loading_messages: &[&'static str], picker: &mut impl MessagePicker) -> Self {
        Self {
            loading_message: picker.choose(loading_messages),
            error_message: picker.choose(ERROR_MESSAGES),
            generation: 0,
            state: ViewState::Loading,
            last_error: None,
        }
    }

    /// Starts a new fetch: back to Loading, and earlier tickets go stale.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = ViewState::Loading;
        self.last_error = None;
        Ticket(self.generation)
    }

    /// Applies the outcome of the fetch behind `ticket`.
    ///
    /// Returns `false` (and changes nothing) if a newer fetch has begun.
    pub fn complete(&mut self, ticket: Ticket, result: Result<T, FetchError>) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "discarding stale response"
            );
            return false;
        }

        self.state = match result {
            Ok(data) => ViewState::Success(data),
            Err(err) => {
                tracing::warn!(kind = err.kind().as_str(), error = %err, "fetch failed");
                self.last_error = Some(err.kind());
                ViewState::Error(self.error_message)
            }
        };
        true
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn loading_message(&self) -> &'static str {
        self.loading_message
    }

    /// Cause of the current Error state, for logs and machine output.
    pub fn error_kind(&self) -> Option<FetchErrorKind> {
        self.last_error
    }

    /// Takes the data out of a Success state.
    pub fn into_success(self) -> Option<T> {
        match self.state {
            ViewState::Success(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::messages::{FixedPicker, TREE_LOADING_MESSAGES};

    fn failure() -> FetchError {
        FetchError::NotFound {
            url: "https://api.github.com/repos/o/r/contents".to_string(),
        }
    }

    #[test]
    fn test_starts_loading_with_fixed_messages() {
        let view: View<u32> = View::new(TREE_LOADING_MESSAGES, &mut FixedPicker(3));
        assert_eq!(view.state(), &ViewState::Loading);
        assert_eq!(view.loading_message(), TREE_LOADING_MESSAGES[3]);
    }

    #[test]
    fn test_success_and_error() {
        let mut view = View::new(TREE_LOADING_MESSAGES, &mut FixedPicker(0));
        let ticket = view.begin();
        assert!(view.complete(ticket, Ok("tree")));
        assert_eq!(view.state(), &ViewState::Success("tree"));

        let ticket = view.begin();
        assert_eq!(view.state(), &ViewState::Loading);
        assert!(view.complete(ticket, Err(failure())));
        assert_eq!(view.state(), &ViewState::Error(ERROR_MESSAGES[0]));
        assert_eq!(view.error_kind(), Some(FetchErrorKind::NotFound));
    }

    #[test]
    fn test_error_message_is_fixed_for_the_view() {
        let mut view: View<()> = View::new(TREE_LOADING_MESSAGES, &mut FixedPicker(4));
        for _ in 0..3 {
            let ticket = view.begin();
            view.complete(ticket, Err(failure()));
            assert_eq!(view.state(), &ViewState::Error(ERROR_MESSAGES[4]));
        }
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut view = View::new(TREE_LOADING_MESSAGES, &mut FixedPicker(0));
        let first = view.begin();
        let second = view.begin();

        assert!(view.complete(second, Ok("new")));
        // The earlier fetch finishes last and must not win.
        assert!(!view.complete(first, Ok("old")));
        assert_eq!(view.state(), &ViewState::Success("new"));
        assert_eq!(view.into_success(), Some("new"));
    }
}
