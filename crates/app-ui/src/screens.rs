//! Screen state and view assembly for SkillSwap
//!
//! Each screen owns its form state and builds a serializable view tree
//! out of the component library. Screens never touch the stack
//! directly: handlers that navigate receive a [`Navigator`] and request
//! the transition through it, which keeps every handler testable
//! against a mock.
//!
//! # Screens
//!
//! - [`LoginScreen`] / [`SignupScreen`] - auth forms outside the tabs
//! - [`MainTabsScreen`] - tab shell over the four main sections
//! - [`FeedScreen`] - offer catalog with search and compose affordances
//! - [`PostSkillScreen`] - skill offer composer
//! - [`SwapsScreen`] - active bookings
//! - [`MessagesScreen`] - inbox previews
//! - [`ProfileScreen`] - local profile summary

use app_core::auth::{validate_credentials, SignupDetails};
use app_core::composer::SkillDraft;
use app_core::messages::{inbox, InboxEntry};
use app_core::offers::{sample_offers, SkillOffer};
use app_core::profiles::{local_profile, ProfileSummary};
use app_core::swaps::{active_swaps, SwapBooking};
use serde::Serialize;

use crate::components::{Button, ButtonAccent, Card, Fab, Icon, Input, TabBar, Tag, Text};
use crate::navigation::{MainTab, Navigator, Route};
use crate::notices::{Notice, NoticeCenter};
use crate::theme::Theme;
use crate::tokens::sizing;
use crate::typography::TypographyVariant;

// =============================================================================
// Login Screen
// =============================================================================

/// Login form state
///
/// Submit applies the presence rule to both fields. On success the stack
/// top is replaced with the tab shell, so back never returns here. On
/// failure the fixed error line is shown and nothing navigates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginScreen {
    email: String,
    password: String,
    error: Option<String>,
}

impl LoginScreen {
    /// Create an empty login form
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the email field
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Update the password field
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// The email field contents
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The password field contents
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The current validation error, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Attempt login
    ///
    /// Replaces the stack top with the tab shell when both fields pass
    /// the presence check, otherwise records the error line and stays.
    pub fn submit(&mut self, nav: &mut dyn Navigator) {
        match validate_credentials(&self.email, &self.password) {
            Ok(_) => {
                self.error = None;
                nav.replace(Route::MainTabs);
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }

    /// Open the signup form
    pub fn go_to_signup(&self, nav: &mut dyn Navigator) {
        nav.push(Route::Signup);
    }

    /// Build the view for this screen
    pub fn view(&self, theme: &Theme) -> LoginView {
        LoginView {
            title: Text::new("SkillSwap", TypographyVariant::BrandTitle).centered(),
            tagline: Text::new("Peer-to-Peer Skill Exchange", TypographyVariant::Tagline)
                .centered(),
            email: Input::email("Enter Your Email").with_value(self.email.clone()),
            password: Input::password("Password").with_value(self.password.clone()),
            error: self.error.as_ref().map(|message| {
                Text::new(message.clone(), TypographyVariant::Body)
                    .with_color(theme.palette.error.clone())
                    .centered()
            }),
            submit: Button::new("LOG IN"),
            signup_link: Text::new(
                "Don’t have an account? Sign up",
                TypographyVariant::Link,
            )
            .centered(),
        }
    }
}

/// Rendered login screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginView {
    /// Brand title
    pub title: Text,
    /// Brand tagline
    pub tagline: Text,
    /// Email field
    pub email: Input,
    /// Password field
    pub password: Input,
    /// Validation error line, present only after a rejected submit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Text>,
    /// Submit button
    pub submit: Button,
    /// Link into the signup form
    pub signup_link: Text,
}

// =============================================================================
// Signup Screen
// =============================================================================

/// Signup form state
///
/// The fields are held while the screen is mounted but never validated;
/// submit always succeeds and replaces the stack top with the tab shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupScreen {
    details: SignupDetails,
}

impl SignupScreen {
    /// Create an empty signup form
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the full name field
    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.details.full_name = full_name.into();
    }

    /// Update the email field
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.details.email = email.into();
    }

    /// Update the password field
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.details.password = password.into();
    }

    /// The form payload as typed
    pub fn details(&self) -> &SignupDetails {
        &self.details
    }

    /// Create the account
    ///
    /// Always succeeds and replaces the stack top with the tab shell,
    /// regardless of what the fields contain.
    pub fn submit(&self, nav: &mut dyn Navigator) {
        nav.replace(Route::MainTabs);
    }

    /// Return to the login form
    pub fn go_to_login(&self, nav: &mut dyn Navigator) {
        nav.pop();
    }

    /// Build the view for this screen
    pub fn view(&self, _theme: &Theme) -> SignupView {
        SignupView {
            title: Text::new("SkillSwap", TypographyVariant::BrandTitle).centered(),
            tagline: Text::new("Create your account", TypographyVariant::Tagline).centered(),
            full_name: Input::new("Full Name").with_value(self.details.full_name.clone()),
            email: Input::email("Enter Your Email").with_value(self.details.email.clone()),
            password: Input::password("Password").with_value(self.details.password.clone()),
            submit: Button::new("SIGN UP"),
            login_link: Text::new("Already a member? Log in", TypographyVariant::Link).centered(),
        }
    }
}

/// Rendered signup screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupView {
    /// Brand title
    pub title: Text,
    /// Screen tagline
    pub tagline: Text,
    /// Full name field
    pub full_name: Input,
    /// Email field
    pub email: Input,
    /// Password field
    pub password: Input,
    /// Submit button
    pub submit: Button,
    /// Link back to the login form
    pub login_link: Text,
}

// =============================================================================
// Feed Screen
// =============================================================================

/// Offer catalog state
///
/// The catalog is the fixed sample set. The search field stores what is
/// typed but never filters the list.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedScreen {
    query: String,
    offers: Vec<SkillOffer>,
}

impl Default for FeedScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedScreen {
    /// Create the feed over the sample catalog
    pub fn new() -> Self {
        Self {
            query: String::new(),
            offers: sample_offers(),
        }
    }

    /// Update the search field
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The search field contents
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The offers in display order
    pub fn offers(&self) -> &[SkillOffer] {
        &self.offers
    }

    /// Surface the detail stub for an offer
    ///
    /// Posts an informational notice naming the offer. Unknown ids do
    /// nothing.
    pub fn view_offer(&self, offer_id: &str, notices: &mut NoticeCenter) {
        if let Some(offer) = self.offers.iter().find(|offer| offer.id == offer_id) {
            notices.post(Notice::info(format!("View details for {}", offer.title)));
        }
    }

    /// Open the skill offer composer
    pub fn new_offer(&self, nav: &mut dyn Navigator) {
        nav.push(Route::PostSkill);
    }

    /// Build the view for this screen
    pub fn view(&self, _theme: &Theme) -> FeedView {
        FeedView {
            title: Text::new("Explore Available Skills", TypographyVariant::PageTitle),
            search: Input::search("Search for Python, Design, Music...")
                .with_value(self.query.clone()),
            offers: self
                .offers
                .iter()
                .map(|offer| OfferCardView {
                    id: offer.id.clone(),
                    card: Card::new(),
                    title: Text::new(offer.title.clone(), TypographyVariant::CardTitle),
                    rating: Text::new(offer.rating_line(), TypographyVariant::Rating),
                    tutor: Text::new(offer.tutor_line(), TypographyVariant::Body),
                    category: Tag::category(offer.category.clone()),
                    action: Button::contained("View Offer"),
                })
                .collect(),
            compose: Fab::new(),
        }
    }
}

/// Rendered feed screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedView {
    /// Page title
    pub title: Text,
    /// Search field
    pub search: Input,
    /// Offer cards in display order
    pub offers: Vec<OfferCardView>,
    /// Floating compose button
    pub compose: Fab,
}

/// A single offer card in the feed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferCardView {
    /// Offer id the card's action refers to
    pub id: String,
    /// Card chrome
    pub card: Card,
    /// Offer title
    pub title: Text,
    /// Rating line beside the title
    pub rating: Text,
    /// Tutor attribution line
    pub tutor: Text,
    /// Category chip
    pub category: Tag,
    /// Detail action
    pub action: Button,
}

// =============================================================================
// Post Skill Screen
// =============================================================================

/// Skill offer composer state
///
/// Wraps a draft that lives only while this screen is mounted. A
/// successful submit pops back to the tab shell and the draft is
/// dropped with the screen; the catalog never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostSkillScreen {
    draft: SkillDraft,
}

impl PostSkillScreen {
    /// Create an empty composer
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the title field
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.set_title(title);
    }

    /// Update the description field
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.set_description(description);
    }

    /// Update the category field
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.draft.set_category(category);
    }

    /// The draft as typed
    pub fn draft(&self) -> &SkillDraft {
        &self.draft
    }

    /// Submit the draft
    ///
    /// On success posts the confirmation notice and pops back. On a
    /// rejected draft posts the error notice and stays put.
    pub fn submit(&self, nav: &mut dyn Navigator, notices: &mut NoticeCenter) {
        match self.draft.submit() {
            Ok(()) => {
                notices.post(Notice::success("Skill posted successfully!"));
                nav.pop();
            }
            Err(err) => {
                notices.post(Notice::error(err.to_string()));
            }
        }
    }

    /// Build the view for this screen
    pub fn view(&self, _theme: &Theme) -> PostSkillView {
        PostSkillView {
            title: Text::new("Offer Your Skill", TypographyVariant::PageTitle),
            skill_title: Input::new("Skill Title (e.g., Python Basics)")
                .with_value(self.draft.title().to_string()),
            description: Input::text_area(
                "Detailed Description (what you offer and what you seek in return)",
            )
            .with_value(self.draft.description().to_string()),
            category: Input::new("Category (e.g., Coding, Design, Music)")
                .with_value(self.draft.category().to_string()),
            submit: Button::new("CREATE SWAP OFFER"),
        }
    }
}

/// Rendered composer screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSkillView {
    /// Page title
    pub title: Text,
    /// Skill title field
    pub skill_title: Input,
    /// Description field
    pub description: Input,
    /// Category field
    pub category: Input,
    /// Submit button
    pub submit: Button,
}

// =============================================================================
// Swaps Screen
// =============================================================================

/// Active bookings state
#[derive(Debug, Clone, PartialEq)]
pub struct SwapsScreen {
    swaps: Vec<SwapBooking>,
}

impl Default for SwapsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapsScreen {
    /// Create the bookings list over the fixed sessions
    pub fn new() -> Self {
        Self {
            swaps: active_swaps(),
        }
    }

    /// The bookings in display order
    pub fn swaps(&self) -> &[SwapBooking] {
        &self.swaps
    }

    /// Cancel affordance for the booked session
    ///
    /// Rendered but not wired up; the booking is left untouched.
    pub fn cancel_session(&mut self) {}

    /// Build the view for this screen
    pub fn view(&self, _theme: &Theme) -> SwapsView {
        SwapsView {
            title: Text::new("My Active Swaps", TypographyVariant::PageTitle),
            sessions: self
                .swaps
                .iter()
                .map(|booking| SwapCardView {
                    card: Card::new(),
                    title: Text::new(booking.title.clone(), TypographyVariant::CardTitle),
                    status: Text::new(booking.status.status_line(), TypographyVariant::Body),
                    exchange: Text::new(booking.exchange_line(), TypographyVariant::Body),
                    cancel: booking
                        .cancellable
                        .then(|| Button::outlined("Cancel Session")),
                })
                .collect(),
        }
    }
}

/// Rendered bookings screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapsView {
    /// Page title
    pub title: Text,
    /// Session cards in display order
    pub sessions: Vec<SwapCardView>,
}

/// A single session card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapCardView {
    /// Card chrome
    pub card: Card,
    /// Session title
    pub title: Text,
    /// Status line
    pub status: Text,
    /// Exchange line
    pub exchange: Text,
    /// Cancel action, present only on cancellable sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel: Option<Button>,
}

// =============================================================================
// Messages Screen
// =============================================================================

/// Inbox state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagesScreen {
    entries: Vec<InboxEntry>,
}

impl Default for MessagesScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MessagesScreen {
    /// Create the inbox over the fixed entries
    pub fn new() -> Self {
        Self { entries: inbox() }
    }

    /// The entries in display order
    pub fn entries(&self) -> &[InboxEntry] {
        &self.entries
    }

    /// Build the view for this screen
    pub fn view(&self, _theme: &Theme) -> MessagesView {
        MessagesView {
            title: Text::new("Messages", TypographyVariant::PageTitle),
            entries: self
                .entries
                .iter()
                .map(|entry| MessageCardView {
                    card: Card::new(),
                    sender: Text::new(entry.sender.clone(), TypographyVariant::CardTitle),
                    preview: Text::new(entry.preview.clone(), TypographyVariant::Body),
                })
                .collect(),
        }
    }
}

/// Rendered inbox screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessagesView {
    /// Page title
    pub title: Text,
    /// Message cards in display order
    pub entries: Vec<MessageCardView>,
}

/// A single inbox card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageCardView {
    /// Card chrome
    pub card: Card,
    /// Sender name
    pub sender: Text,
    /// Quoted message preview
    pub preview: Text,
}

// =============================================================================
// Profile Screen
// =============================================================================

/// Local profile state
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileScreen {
    profile: ProfileSummary,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileScreen {
    /// Create the profile section over the local summary
    pub fn new() -> Self {
        Self {
            profile: local_profile(),
        }
    }

    /// The profile summary
    pub fn profile(&self) -> &ProfileSummary {
        &self.profile
    }

    /// Edit affordance
    ///
    /// Rendered but not wired up; the profile is left untouched.
    pub fn edit_profile(&mut self) {}

    /// Log out affordance
    ///
    /// Rendered but not wired up; the session stays where it is.
    pub fn log_out(&mut self) {}

    /// Build the view for this screen
    pub fn view(&self, theme: &Theme) -> ProfileView {
        ProfileView {
            avatar: Icon::new("person-circle-outline")
                .with_size(sizing::icon::AVATAR)
                .with_color(theme.palette.primary.clone()),
            name: Text::new(self.profile.display_name.clone(), TypographyVariant::PageTitle),
            contact: Text::new(self.profile.contact_line(), TypographyVariant::Body),
            offered_header: Text::new("Skills Offered (Tutor)", TypographyVariant::SectionHeader),
            offered: self
                .profile
                .skills_offered
                .iter()
                .map(Tag::teach)
                .collect(),
            wanted_header: Text::new("Skills I Want (Learner)", TypographyVariant::SectionHeader),
            wanted: self.profile.skills_wanted.iter().map(Tag::learn).collect(),
            edit: Button::contained("Edit Profile").with_accent(ButtonAccent::Secondary),
            log_out: Button::plain("Log Out"),
        }
    }
}

/// Rendered profile screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    /// Profile avatar glyph
    pub avatar: Icon,
    /// Display name
    pub name: Text,
    /// Contact and rating line
    pub contact: Text,
    /// Header over the offered skills
    pub offered_header: Text,
    /// Offered skill chips
    pub offered: Vec<Tag>,
    /// Header over the wanted skills
    pub wanted_header: Text,
    /// Wanted skill chips
    pub wanted: Vec<Tag>,
    /// Edit action
    pub edit: Button,
    /// Log out action
    pub log_out: Button,
}

// =============================================================================
// Main Tabs Screen
// =============================================================================

/// Tab shell over the four main sections
///
/// All four sections stay mounted while the shell is on the stack;
/// switching tabs changes only which one is visible, so section state
/// such as the feed query survives a round trip through another tab.
#[derive(Debug, Clone, PartialEq)]
pub struct MainTabsScreen {
    active: MainTab,
    feed: FeedScreen,
    swaps: SwapsScreen,
    messages: MessagesScreen,
    profile: ProfileScreen,
}

impl Default for MainTabsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MainTabsScreen {
    /// Create the shell with the feed tab active
    pub fn new() -> Self {
        Self {
            active: MainTab::default(),
            feed: FeedScreen::new(),
            swaps: SwapsScreen::new(),
            messages: MessagesScreen::new(),
            profile: ProfileScreen::new(),
        }
    }

    /// The active tab
    pub fn active_tab(&self) -> MainTab {
        self.active
    }

    /// Switch the visible tab
    pub fn select_tab(&mut self, tab: MainTab) {
        self.active = tab;
    }

    /// The feed section
    pub fn feed(&self) -> &FeedScreen {
        &self.feed
    }

    /// The feed section, mutably
    pub fn feed_mut(&mut self) -> &mut FeedScreen {
        &mut self.feed
    }

    /// The bookings section
    pub fn swaps(&self) -> &SwapsScreen {
        &self.swaps
    }

    /// The bookings section, mutably
    pub fn swaps_mut(&mut self) -> &mut SwapsScreen {
        &mut self.swaps
    }

    /// The inbox section
    pub fn messages(&self) -> &MessagesScreen {
        &self.messages
    }

    /// The profile section
    pub fn profile(&self) -> &ProfileScreen {
        &self.profile
    }

    /// The profile section, mutably
    pub fn profile_mut(&mut self) -> &mut ProfileScreen {
        &mut self.profile
    }

    /// Build the view for the shell and its visible section
    pub fn view(&self, theme: &Theme) -> MainTabsView {
        let content = match self.active {
            MainTab::Feed => TabContentView::Feed(self.feed.view(theme)),
            MainTab::Swaps => TabContentView::Swaps(self.swaps.view(theme)),
            MainTab::Messages => TabContentView::Messages(self.messages.view(theme)),
            MainTab::Profile => TabContentView::Profile(self.profile.view(theme)),
        };
        MainTabsView {
            tab_bar: TabBar::new(self.active),
            content,
        }
    }
}

/// Rendered tab shell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainTabsView {
    /// Bottom tab bar
    pub tab_bar: TabBar,
    /// The visible section
    pub content: TabContentView,
}

/// The visible section inside the tab shell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum TabContentView {
    /// Offer catalog
    Feed(FeedView),
    /// Active bookings
    Swaps(SwapsView),
    /// Inbox previews
    Messages(MessagesView),
    /// Local profile
    Profile(ProfileView),
}
