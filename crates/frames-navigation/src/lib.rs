//! Route definitions and a minimal back-stack for Frames.
//!
//! Screens never talk to the stack directly; they receive a `dyn Navigator`
//! and request routes by name. That keeps view code testable with a recording
//! stub and leaves stack policy (guards, persistence) in one place.

use std::cell::RefCell;
use std::rc::Rc;

use frames_core::{Signal, signal};
use serde::{Deserialize, Serialize};

/// Addressable destinations in the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Landing,
    SignUp,
    SignIn,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Landing => write!(f, "landing"),
            Route::SignUp => write!(f, "signup"),
            Route::SignIn => write!(f, "signin"),
        }
    }
}

/// Capability handed to screens for requesting navigation.
///
/// Object-safe so composition code can hold an `Rc<dyn Navigator>` without
/// caring whether the other end is a real stack or a test double.
pub trait Navigator {
    fn navigate_to(&self, route: Route);
}

/// Linear history of visited routes. Always holds at least one entry.
///
/// Cloning shares the underlying stack; `current` is a [`Signal`] so the
/// app shell can recompose when the top route changes.
#[derive(Clone)]
pub struct NavStack {
    inner: Rc<RefCell<Vec<Route>>>,
    pub current: Signal<Route>,
}

impl NavStack {
    pub fn new(start: Route) -> Self {
        Self {
            inner: Rc::new(RefCell::new(vec![start])),
            current: signal(start),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn navigate(&self, route: Route) {
        let from = self.current.get();
        self.inner.borrow_mut().push(route);
        log::debug!("navigate: {from} -> {route}");
        self.current.set(route);
    }

    /// Pop the top entry. The root entry is never popped.
    pub fn pop(&self) -> bool {
        let top = {
            let mut stack = self.inner.borrow_mut();
            if stack.len() <= 1 {
                return false;
            }
            stack.pop();
            stack[stack.len() - 1]
        };
        self.current.set(top);
        true
    }

    pub fn to_json(&self) -> String {
        let stack = self.inner.borrow();
        serde_json::to_string(&*stack).unwrap_or("[]".into())
    }

    /// Restore history from [`to_json`] output. Invalid or empty input
    /// leaves the stack untouched.
    pub fn from_json(&self, json: &str) {
        if let Ok(routes) = serde_json::from_str::<Vec<Route>>(json)
            && let Some(&top) = routes.last()
        {
            *self.inner.borrow_mut() = routes;
            self.current.set(top);
        }
    }
}

impl Navigator for NavStack {
    fn navigate_to(&self, route: Route) {
        self.navigate(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_starts_with_root() {
        let stack = NavStack::new(Route::Landing);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.current.get(), Route::Landing);
    }

    #[test]
    fn test_navigate_pushes_and_updates_current() {
        let stack = NavStack::new(Route::Landing);
        stack.navigate(Route::SignUp);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.current.get(), Route::SignUp);

        stack.navigate(Route::SignIn);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.current.get(), Route::SignIn);
    }

    #[test]
    fn test_pop_never_removes_root() {
        let stack = NavStack::new(Route::Landing);
        assert!(!stack.pop());
        assert_eq!(stack.len(), 1);

        stack.navigate(Route::SignUp);
        assert!(stack.pop());
        assert_eq!(stack.current.get(), Route::Landing);
        assert!(!stack.pop());
    }

    #[test]
    fn test_json_round_trip() {
        let stack = NavStack::new(Route::Landing);
        stack.navigate(Route::SignUp);
        assert_eq!(stack.to_json(), r#"["landing","signup"]"#);

        let restored = NavStack::new(Route::Landing);
        restored.from_json(&stack.to_json());
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.current.get(), Route::SignUp);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let stack = NavStack::new(Route::Landing);
        stack.from_json("not json");
        stack.from_json("[]");
        stack.from_json(r#"["warp"]"#);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.current.get(), Route::Landing);
    }

    #[test]
    fn test_trait_object_dispatch() {
        let stack = NavStack::new(Route::Landing);
        let nav: Rc<dyn Navigator> = Rc::new(stack.clone());
        nav.navigate_to(Route::SignIn);
        assert_eq!(stack.current.get(), Route::SignIn);
    }
}
