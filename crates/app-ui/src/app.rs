//! Application shell for SkillSwap
//!
//! The [`App`] ties the pieces together: it owns the theme, the
//! navigation stack, the screen state behind each stack entry, and the
//! notice queue. A rendering host drives it with [`AppEvent`]s and
//! reads back an [`AppView`] of the visible screen, draining notices
//! as they appear.
//!
//! Events address the visible screen only. An event meant for a screen
//! that is not on top of the stack is dropped, which matches what a
//! host can physically emit: there is nothing to press on a covered
//! screen.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::components::HeaderBar;
use crate::navigation::{MainTab, NavRequest, NavigationStack, Navigator, PendingNavigation, Route};
use crate::notices::{Notice, NoticeCenter};
use crate::screens::{
    LoginScreen, LoginView, MainTabsScreen, MainTabsView, PostSkillScreen, PostSkillView,
    SignupScreen, SignupView,
};
use crate::theme::{light_theme, Theme};

// =============================================================================
// Events
// =============================================================================

/// An input event for the visible screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppEvent {
    /// Login email field edited
    LoginEmailChanged(String),
    /// Login password field edited
    LoginPasswordChanged(String),
    /// Login form submitted
    LoginSubmitted,
    /// "Sign up" link pressed on the login screen
    SignupLinkPressed,

    /// Signup full name field edited
    SignupFullNameChanged(String),
    /// Signup email field edited
    SignupEmailChanged(String),
    /// Signup password field edited
    SignupPasswordChanged(String),
    /// Signup form submitted
    SignupSubmitted,
    /// "Log in" link pressed on the signup screen
    LoginLinkPressed,

    /// Bottom tab selected
    TabSelected(MainTab),
    /// Feed search field edited
    SearchChanged(String),
    /// "View Offer" pressed on the offer with this id
    OfferViewed(String),
    /// Floating compose button pressed
    ComposePressed,

    /// Draft title field edited
    DraftTitleChanged(String),
    /// Draft description field edited
    DraftDescriptionChanged(String),
    /// Draft category field edited
    DraftCategoryChanged(String),
    /// Draft submitted
    DraftSubmitted,

    /// "Cancel Session" pressed on the bookings tab
    CancelSessionPressed,
    /// "Edit Profile" pressed on the profile tab
    EditProfilePressed,
    /// "Log Out" pressed on the profile tab
    LogOutPressed,

    /// Hardware or header back
    Back,
}

// =============================================================================
// Screen State
// =============================================================================

/// The state behind one stack entry
#[derive(Debug, Clone, PartialEq)]
enum ScreenState {
    Login(LoginScreen),
    Signup(SignupScreen),
    MainTabs(Box<MainTabsScreen>),
    PostSkill(PostSkillScreen),
}

impl ScreenState {
    /// Fresh state for a newly mounted route
    fn mount(route: Route) -> Self {
        match route {
            Route::Login => Self::Login(LoginScreen::new()),
            Route::Signup => Self::Signup(SignupScreen::new()),
            Route::MainTabs => Self::MainTabs(Box::new(MainTabsScreen::new())),
            Route::PostSkill => Self::PostSkill(PostSkillScreen::new()),
        }
    }
}

// =============================================================================
// App Shell
// =============================================================================

/// The SkillSwap application shell
///
/// Starts on the login screen. Screen state is keyed by stack entry, so
/// pushing the same route twice mounts fresh state, and popping an
/// entry drops its state for good.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    theme: Theme,
    stack: NavigationStack,
    screens: HashMap<String, ScreenState>,
    notices: NoticeCenter,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create the app at the login screen
    pub fn new() -> Self {
        let stack = NavigationStack::new(Route::Login);
        let mut screens = HashMap::new();
        screens.insert(
            stack.current_entry().key.clone(),
            ScreenState::mount(Route::Login),
        );
        Self {
            theme: light_theme(),
            stack,
            screens,
            notices: NoticeCenter::new(),
        }
    }

    /// The active theme
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The route on top of the stack
    pub fn current_route(&self) -> Route {
        *self.stack.current()
    }

    /// Stack depth
    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    /// Whether back has anywhere to go
    pub fn can_go_back(&self) -> bool {
        self.stack.can_go_back()
    }

    /// The active tab, when the tab shell is the visible screen
    pub fn active_tab(&self) -> Option<MainTab> {
        match self.current_screen() {
            ScreenState::MainTabs(tabs) => Some(tabs.active_tab()),
            _ => None,
        }
    }

    /// The pending notices without draining them
    pub fn notices(&self) -> &NoticeCenter {
        &self.notices
    }

    /// Drain all pending notices in post order
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.take()
    }

    fn current_screen(&self) -> &ScreenState {
        self.screens
            .get(&self.stack.current_entry().key)
            .expect("Screen state missing for stack entry")
    }

    /// Apply one event to the visible screen
    ///
    /// Navigation requested by the screen is applied after its handler
    /// returns. Events that do not belong to the visible screen are
    /// dropped.
    pub fn handle(&mut self, event: AppEvent) {
        let mut pending = PendingNavigation::new();

        let key = self.stack.current_entry().key.clone();
        let state = self
            .screens
            .get_mut(&key)
            .expect("Screen state missing for stack entry");

        match (state, event) {
            (ScreenState::Login(screen), AppEvent::LoginEmailChanged(email)) => {
                screen.set_email(email);
            }
            (ScreenState::Login(screen), AppEvent::LoginPasswordChanged(password)) => {
                screen.set_password(password);
            }
            (ScreenState::Login(screen), AppEvent::LoginSubmitted) => {
                screen.submit(&mut pending);
            }
            (ScreenState::Login(screen), AppEvent::SignupLinkPressed) => {
                screen.go_to_signup(&mut pending);
            }

            (ScreenState::Signup(screen), AppEvent::SignupFullNameChanged(full_name)) => {
                screen.set_full_name(full_name);
            }
            (ScreenState::Signup(screen), AppEvent::SignupEmailChanged(email)) => {
                screen.set_email(email);
            }
            (ScreenState::Signup(screen), AppEvent::SignupPasswordChanged(password)) => {
                screen.set_password(password);
            }
            (ScreenState::Signup(screen), AppEvent::SignupSubmitted) => {
                screen.submit(&mut pending);
            }
            (ScreenState::Signup(screen), AppEvent::LoginLinkPressed) => {
                screen.go_to_login(&mut pending);
            }

            (ScreenState::MainTabs(tabs), AppEvent::TabSelected(tab)) => {
                tabs.select_tab(tab);
            }
            (ScreenState::MainTabs(tabs), AppEvent::SearchChanged(query))
                if tabs.active_tab() == MainTab::Feed =>
            {
                tabs.feed_mut().set_query(query);
            }
            (ScreenState::MainTabs(tabs), AppEvent::OfferViewed(offer_id))
                if tabs.active_tab() == MainTab::Feed =>
            {
                tabs.feed().view_offer(&offer_id, &mut self.notices);
            }
            (ScreenState::MainTabs(tabs), AppEvent::ComposePressed)
                if tabs.active_tab() == MainTab::Feed =>
            {
                tabs.feed().new_offer(&mut pending);
            }
            (ScreenState::MainTabs(tabs), AppEvent::CancelSessionPressed)
                if tabs.active_tab() == MainTab::Swaps =>
            {
                tabs.swaps_mut().cancel_session();
            }
            (ScreenState::MainTabs(tabs), AppEvent::EditProfilePressed)
                if tabs.active_tab() == MainTab::Profile =>
            {
                tabs.profile_mut().edit_profile();
            }
            (ScreenState::MainTabs(tabs), AppEvent::LogOutPressed)
                if tabs.active_tab() == MainTab::Profile =>
            {
                tabs.profile_mut().log_out();
            }

            (ScreenState::PostSkill(screen), AppEvent::DraftTitleChanged(title)) => {
                screen.set_title(title);
            }
            (ScreenState::PostSkill(screen), AppEvent::DraftDescriptionChanged(description)) => {
                screen.set_description(description);
            }
            (ScreenState::PostSkill(screen), AppEvent::DraftCategoryChanged(category)) => {
                screen.set_category(category);
            }
            (ScreenState::PostSkill(screen), AppEvent::DraftSubmitted) => {
                screen.submit(&mut pending, &mut self.notices);
            }

            (_, AppEvent::Back) => {
                pending.pop();
            }

            // Event for a screen that is not visible
            _ => {}
        }

        if let Some(request) = pending.take() {
            self.apply(request);
        }
    }

    /// Apply a navigation request, mounting and unmounting screen state
    fn apply(&mut self, request: NavRequest) {
        match request {
            NavRequest::Push(route) => {
                self.stack.push(route);
                self.screens.insert(
                    self.stack.current_entry().key.clone(),
                    ScreenState::mount(route),
                );
            }
            NavRequest::Replace(route) => {
                let replaced_key = self.stack.current_entry().key.clone();
                self.stack.replace(route);
                self.screens.remove(&replaced_key);
                self.screens.insert(
                    self.stack.current_entry().key.clone(),
                    ScreenState::mount(route),
                );
            }
            NavRequest::Pop => {
                let popped_key = self.stack.current_entry().key.clone();
                if self.stack.pop() {
                    // Unmounted state is gone for good, drafts included
                    self.screens.remove(&popped_key);
                }
            }
        }
    }

    /// Build the view of the visible screen
    pub fn view(&self) -> AppView {
        let route = self.current_route();
        let config = route.header();
        let header = config.shown.then(|| {
            let bar = HeaderBar::new(config.title.unwrap_or(route.name()));
            if self.stack.can_go_back() {
                bar.with_back()
            } else {
                bar
            }
        });

        let screen = match self.current_screen() {
            ScreenState::Login(screen) => ScreenView::Login(screen.view(&self.theme)),
            ScreenState::Signup(screen) => ScreenView::Signup(screen.view(&self.theme)),
            ScreenState::MainTabs(tabs) => ScreenView::MainTabs(tabs.view(&self.theme)),
            ScreenState::PostSkill(screen) => ScreenView::PostSkill(screen.view(&self.theme)),
        };

        AppView {
            route,
            header,
            screen,
        }
    }
}

// =============================================================================
// Views
// =============================================================================

/// Rendered state of the visible screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppView {
    /// The route the view belongs to
    pub route: Route,
    /// Stack header, present only on routes that show one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderBar>,
    /// The screen content
    pub screen: ScreenView,
}

/// The visible screen's view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum ScreenView {
    /// Login form
    Login(LoginView),
    /// Signup form
    Signup(SignupView),
    /// Tab shell
    MainTabs(MainTabsView),
    /// Skill offer composer
    PostSkill(PostSkillView),
}
