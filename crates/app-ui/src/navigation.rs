//! Navigation system for SkillSwap
//!
//! This module provides a type-safe navigation framework with:
//! - Route definitions for every screen in the app
//! - Navigation stack management (push, replace, pop)
//! - Bottom tab definitions for the main tab host
//! - A [`Navigator`] trait screens use to request transitions

use serde::{Deserialize, Serialize};

// =============================================================================
// Route Definitions
// =============================================================================

/// All possible routes in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Route {
    /// Login screen (entry point)
    #[default]
    Login,
    /// Account creation screen
    Signup,
    /// Bottom tab host for the four main screens
    MainTabs,
    /// Skill posting form
    PostSkill,
}

impl Route {
    /// Get the registered screen name for this route
    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Signup => "Signup",
            Route::MainTabs => "MainTabs",
            Route::PostSkill => "PostSkill",
        }
    }

    /// Get the header configuration for this route
    ///
    /// Only the skill posting form shows a navigation header. The auth
    /// screens and the tab host draw their own chrome full-bleed.
    pub fn header(&self) -> HeaderConfig {
        match self {
            Route::PostSkill => HeaderConfig {
                shown: true,
                title: Some("Offer a Skill Swap"),
            },
            _ => HeaderConfig::hidden(),
        }
    }
}

/// Header bar configuration for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderConfig {
    /// Whether the navigation header is drawn
    pub shown: bool,
    /// Title displayed when the header is shown
    pub title: Option<&'static str>,
}

impl HeaderConfig {
    /// Configuration for a route that draws no header
    pub fn hidden() -> Self {
        Self {
            shown: false,
            title: None,
        }
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MainTab {
    /// Skill feed tab
    #[default]
    Feed,
    /// Active swaps tab
    Swaps,
    /// Inbox tab
    Messages,
    /// Local profile tab
    Profile,
}

impl MainTab {
    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Feed => "Feed",
            MainTab::Swaps => "Swaps",
            MainTab::Messages => "Messages",
            MainTab::Profile => "Profile",
        }
    }

    /// Get icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            MainTab::Feed => "search-circle-outline",
            MainTab::Swaps => "swap-horizontal-outline",
            MainTab::Messages => "mail-outline",
            MainTab::Profile => "person-outline",
        }
    }

    /// Get all tabs in display order
    pub fn all() -> [MainTab; 4] {
        [
            MainTab::Feed,
            MainTab::Swaps,
            MainTab::Messages,
            MainTab::Profile,
        ]
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry with a fresh key
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack for the root navigator
///
/// The stack always holds at least one entry; popping at the root is a
/// no-op rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root)],
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Replace the top route
    ///
    /// The replaced entry is discarded entirely, so a later pop lands on
    /// whatever sat beneath it rather than on the replaced route.
    pub fn replace(&mut self, route: Route) {
        if let Some(last) = self.entries.last_mut() {
            *last = StackEntry::new(route);
        }
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self
            .entries
            .last()
            .expect("Stack should never be empty")
            .route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.entries.last().expect("Stack should never be empty")
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Capability handed to screens for requesting navigation
///
/// Screens never mutate the stack directly. They record intent through
/// this trait and the app shell applies it after the originating event
/// handler returns.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Push a new route on top of the current one
    fn push(&mut self, route: Route);

    /// Replace the current route, discarding it from history
    fn replace(&mut self, route: Route);

    /// Go back one entry
    fn pop(&mut self);
}

/// A navigation request recorded by a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavRequest {
    /// Push a new route
    Push(Route),
    /// Replace the current route
    Replace(Route),
    /// Pop back one entry
    Pop,
}

/// Pending navigation action
///
/// Implements [`Navigator`] by recording the most recent request. Event
/// handlers issue at most one transition, so a later call overwrites an
/// earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingNavigation {
    request: Option<NavRequest>,
}

impl PendingNavigation {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded request, leaving the recorder empty
    pub fn take(&mut self) -> Option<NavRequest> {
        self.request.take()
    }

    /// Check whether no request has been recorded
    pub fn is_empty(&self) -> bool {
        self.request.is_none()
    }
}

impl Navigator for PendingNavigation {
    fn push(&mut self, route: Route) {
        self.request = Some(NavRequest::Push(route));
    }

    fn replace(&mut self, route: Route) {
        self.request = Some(NavRequest::Replace(route));
    }

    fn pop(&mut self) {
        self.request = Some(NavRequest::Pop);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_default() {
        assert_eq!(Route::default(), Route::Login);
    }

    #[test]
    fn test_route_names() {
        assert_eq!(Route::Login.name(), "Login");
        assert_eq!(Route::Signup.name(), "Signup");
        assert_eq!(Route::MainTabs.name(), "MainTabs");
        assert_eq!(Route::PostSkill.name(), "PostSkill");
    }

    #[test]
    fn test_header_only_on_post_skill() {
        assert!(!Route::Login.header().shown);
        assert!(!Route::Signup.header().shown);
        assert!(!Route::MainTabs.header().shown);

        let header = Route::PostSkill.header();
        assert!(header.shown);
        assert_eq!(header.title, Some("Offer a Skill Swap"));
    }

    #[test]
    fn test_tab_default() {
        assert_eq!(MainTab::default(), MainTab::Feed);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(MainTab::Feed.label(), "Feed");
        assert_eq!(MainTab::Swaps.label(), "Swaps");
        assert_eq!(MainTab::Messages.label(), "Messages");
        assert_eq!(MainTab::Profile.label(), "Profile");
    }

    #[test]
    fn test_tab_icons() {
        assert_eq!(MainTab::Feed.icon(), "search-circle-outline");
        assert_eq!(MainTab::Swaps.icon(), "swap-horizontal-outline");
        assert_eq!(MainTab::Messages.icon(), "mail-outline");
        assert_eq!(MainTab::Profile.icon(), "person-outline");
    }

    #[test]
    fn test_tab_order() {
        assert_eq!(
            MainTab::all(),
            [
                MainTab::Feed,
                MainTab::Swaps,
                MainTab::Messages,
                MainTab::Profile
            ]
        );
    }

    #[test]
    fn test_stack_starts_at_root() {
        let stack = NavigationStack::new(Route::Login);
        assert_eq!(stack.depth(), 1);
        assert!(!stack.can_go_back());
        assert_eq!(*stack.current(), Route::Login);
    }

    #[test]
    fn test_stack_push_pop() {
        let mut stack = NavigationStack::new(Route::Login);
        stack.push(Route::Signup);
        assert_eq!(stack.depth(), 2);
        assert!(stack.can_go_back());
        assert_eq!(*stack.current(), Route::Signup);

        assert!(stack.pop());
        assert_eq!(stack.depth(), 1);
        assert_eq!(*stack.current(), Route::Login);
    }

    #[test]
    fn test_stack_pop_at_root_is_noop() {
        let mut stack = NavigationStack::new(Route::Login);
        assert!(!stack.pop());
        assert_eq!(stack.depth(), 1);
        assert_eq!(*stack.current(), Route::Login);
    }

    #[test]
    fn test_stack_replace_swaps_top() {
        let mut stack = NavigationStack::new(Route::Login);
        stack.replace(Route::MainTabs);
        assert_eq!(stack.depth(), 1);
        assert_eq!(*stack.current(), Route::MainTabs);
    }

    #[test]
    fn test_stack_replace_leaves_no_history() {
        let mut stack = NavigationStack::new(Route::Login);
        stack.replace(Route::MainTabs);

        // The login entry is gone, so back stays on the tab host
        assert!(!stack.can_go_back());
        assert!(!stack.pop());
        assert_eq!(*stack.current(), Route::MainTabs);
    }

    #[test]
    fn test_stack_entry_keys_unique() {
        let mut stack = NavigationStack::new(Route::MainTabs);
        stack.push(Route::PostSkill);
        stack.push(Route::PostSkill);

        let keys: Vec<&str> = stack.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys.len(), 3);
        assert_ne!(keys[1], keys[2]);
    }

    #[test]
    fn test_replace_assigns_new_key() {
        let mut stack = NavigationStack::new(Route::MainTabs);
        let old_key = stack.current_entry().key.clone();
        stack.replace(Route::MainTabs);
        assert_ne!(stack.current_entry().key, old_key);
    }

    #[test]
    fn test_pending_records_push() {
        let mut pending = PendingNavigation::new();
        assert!(pending.is_empty());

        pending.push(Route::Signup);
        assert_eq!(pending.take(), Some(NavRequest::Push(Route::Signup)));
    }

    #[test]
    fn test_pending_records_replace() {
        let mut pending = PendingNavigation::new();
        pending.replace(Route::MainTabs);
        assert_eq!(pending.take(), Some(NavRequest::Replace(Route::MainTabs)));
    }

    #[test]
    fn test_pending_records_pop() {
        let mut pending = PendingNavigation::new();
        pending.pop();
        assert_eq!(pending.take(), Some(NavRequest::Pop));
    }

    #[test]
    fn test_pending_latest_request_wins() {
        let mut pending = PendingNavigation::new();
        pending.push(Route::Signup);
        pending.replace(Route::MainTabs);
        assert_eq!(pending.take(), Some(NavRequest::Replace(Route::MainTabs)));
    }

    #[test]
    fn test_pending_take_clears() {
        let mut pending = PendingNavigation::new();
        pending.pop();
        assert!(pending.take().is_some());
        assert!(pending.is_empty());
        assert_eq!(pending.take(), None);
    }

    #[test]
    fn test_route_serialization() {
        let route = Route::PostSkill;
        let json = serde_json::to_string(&route).unwrap();
        let parsed: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(route, parsed);
    }

    #[test]
    fn test_stack_serialization() {
        let mut stack = NavigationStack::new(Route::Login);
        stack.push(Route::Signup);

        let json = serde_json::to_string(&stack).unwrap();
        let parsed: NavigationStack = serde_json::from_str(&json).unwrap();
        assert_eq!(stack, parsed);
    }
}
