#![forbid(unsafe_code)]

//! Page wiring: discovery of interactive markup and event/timer routing.
//!
//! [`Page`] owns the document, the scheduler, and every behavior. Features
//! are discovered from the markup contract below; a feature whose markup is
//! absent is logged and skipped, and the rest of the page still comes up.
//!
//! # Markup contract
//!
//! | Feature      | Hook                                              |
//! |--------------|---------------------------------------------------|
//! | Nav          | `#menu-toggle`, `#nav-menu`, `.nav-link`          |
//! | Cards/modals | `.service-card` headings → `#<slug>-modal`        |
//! | Carousel     | `#quote-carousel` containing `.quote` items       |
//! | Accordion    | `.accordion-item` with header and content classes |
//! | Form         | `#contact-form`                                   |
//! | Back-to-top  | `#back-to-top`                                    |

use std::time::Duration;

use pagelet_a11y::FocusManager;
use pagelet_core::{Document, Event, NodeId, PointerKind};
use pagelet_runtime::{
    Enhancements, FeatureError, InitReport, Initializer, PreferenceStore, Scheduler, Theme,
    ThemeManager, TimerHandle,
};
use pagelet_widgets::modal::{modal_for_card, prepare_card};
use pagelet_widgets::{
    Accordion, BackToTop, Carousel, ContactForm, FieldError, FieldKind, FormValues,
    ModalController, NavMenu, NoticeCenter, NoticeKind, Section,
};

/// Interval between quote rotations.
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(5);

/// Class mirrored onto the root while the dark theme is active.
pub const DARK_CLASS: &str = "dark-theme";

pub const NAV_TOGGLE_ID: &str = "menu-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAV_LINK_CLASS: &str = "nav-link";
pub const CARD_CLASS: &str = "service-card";
pub const MODAL_CLASS: &str = "modal";
pub const CAROUSEL_ID: &str = "quote-carousel";
pub const QUOTE_CLASS: &str = "quote";
pub const ACCORDION_ITEM_CLASS: &str = "accordion-item";
pub const ACCORDION_HEADER_CLASS: &str = "accordion-header";
pub const ACCORDION_PANEL_CLASS: &str = "accordion-content";
pub const FORM_ID: &str = "contact-form";
pub const BACK_TO_TOP_ID: &str = "back-to-top";

/// Decorative libraries the host may have loaded. Their absence is never an
/// error; each is an expected skip.
pub const ENHANCEMENTS: [&str; 4] = ["gsap", "vanilla-tilt", "particles", "lottie"];

/// One interactive page: document, scheduler, and every wired behavior.
pub struct Page {
    doc: Document,
    focus: FocusManager,
    sched: Scheduler,
    themes: ThemeManager,
    enhancements: Enhancements,
    modals: ModalController,
    /// Card → the modal its heading slug resolves to.
    cards: Vec<(NodeId, NodeId)>,
    nav: Option<NavMenu>,
    accordion: Option<Accordion>,
    carousel: Option<Carousel>,
    carousel_region: Option<NodeId>,
    form: Option<ContactForm>,
    notices: NoticeCenter,
    back_to_top: Option<BackToTop>,
}

impl Page {
    /// Build a page over `doc`. The theme preference is read immediately;
    /// features are discovered by [`Page::init`].
    pub fn new(
        doc: Document,
        store: Box<dyn PreferenceStore>,
        system_hint: Option<Theme>,
    ) -> Self {
        let themes = ThemeManager::load(store, system_hint);
        let mut page = Self {
            doc,
            focus: FocusManager::new(),
            sched: Scheduler::new(),
            themes,
            enhancements: Enhancements::new(),
            modals: ModalController::new(),
            cards: Vec::new(),
            nav: None,
            accordion: None,
            carousel: None,
            carousel_region: None,
            form: None,
            notices: NoticeCenter::new(),
            back_to_top: None,
        };
        page.mirror_theme();
        page
    }

    /// Mark a decorative library as loaded by the host. Call before
    /// [`Page::init`].
    pub fn register_enhancement(&mut self, name: &'static str) {
        self.enhancements.register(name);
    }

    /// Discover and wire every feature the markup carries.
    ///
    /// Each feature initializes independently; missing markup and absent
    /// decorative libraries are logged and skipped, panics are contained,
    /// and the report says what came up. Unexpected failures additionally
    /// surface to the user as transient error notices.
    pub fn init(&mut self) -> InitReport {
        let mut init = Initializer::new();

        init.run("nav", || {
            let toggle = require_id(&self.doc, NAV_TOGGLE_ID)?;
            let menu = require_id(&self.doc, NAV_MENU_ID)?;
            let links = with_class(&self.doc, NAV_LINK_CLASS);
            self.nav = Some(NavMenu::new(&mut self.doc, toggle, menu, links));
            Ok(())
        });

        init.run("modals", || {
            let modals = with_class(&self.doc, MODAL_CLASS);
            if modals.is_empty() {
                return Err(FeatureError::MissingElement(MODAL_CLASS.to_owned()));
            }
            for modal in modals {
                self.modals.register(&mut self.doc, modal);
            }
            for card in with_class(&self.doc, CARD_CLASS) {
                prepare_card(&mut self.doc, card);
                if let Some(modal) = modal_for_card(&self.doc, card) {
                    self.cards.push((card, modal));
                }
            }
            Ok(())
        });

        init.run("carousel", || {
            let region = require_id(&self.doc, CAROUSEL_ID)?;
            let quotes: Vec<NodeId> = self
                .doc
                .descendants(region)
                .filter(|&id| self.doc.has_class(id, QUOTE_CLASS))
                .collect();
            let mut carousel = Carousel::new(quotes, ROTATION_INTERVAL)
                .map_err(|err| FeatureError::Failed(err.to_string()))?;
            carousel.start(&mut self.doc, &mut self.sched);
            self.carousel = Some(carousel);
            self.carousel_region = Some(region);
            Ok(())
        });

        init.run("accordion", || {
            let mut sections = Vec::new();
            for item in with_class(&self.doc, ACCORDION_ITEM_CLASS) {
                let header = self
                    .doc
                    .descendants(item)
                    .find(|&id| self.doc.has_class(id, ACCORDION_HEADER_CLASS));
                let panel = self
                    .doc
                    .descendants(item)
                    .find(|&id| self.doc.has_class(id, ACCORDION_PANEL_CLASS));
                if let (Some(header), Some(panel)) = (header, panel) {
                    sections.push(Section { header, panel });
                }
            }
            if sections.is_empty() {
                return Err(FeatureError::MissingElement(ACCORDION_ITEM_CLASS.to_owned()));
            }
            self.accordion = Some(Accordion::new(&mut self.doc, sections));
            Ok(())
        });

        init.run("form", || {
            require_id(&self.doc, FORM_ID)?;
            self.form = Some(ContactForm::new());
            Ok(())
        });

        init.run("back-to-top", || {
            let button = require_id(&self.doc, BACK_TO_TOP_ID)?;
            self.back_to_top = Some(BackToTop::new(&mut self.doc, button));
            Ok(())
        });

        for name in ENHANCEMENTS {
            init.run(name, || self.enhancements.require(name));
        }

        let report = init.finish();
        for (name, _) in report.unexpected() {
            self.notices.post(
                &mut self.sched,
                format!("Something went wrong setting up {name}."),
                NoticeKind::Error,
            );
        }
        report
    }

    // --- Event routing ---

    /// Deliver one interaction event.
    ///
    /// Modals claim events first (an open modal owns Escape, Tab, and its
    /// own surface); then card activation, nav, accordion, carousel hover,
    /// and the back-to-top button, in that order. The first behavior that
    /// claims the event wins.
    pub fn dispatch(&mut self, event: &Event) {
        if self
            .modals
            .handle_event(&mut self.doc, &mut self.focus, event)
            .is_some()
        {
            return;
        }

        if let Some((card, modal)) = self.activated_card(event) {
            if let Err(err) = self.modals.open(&mut self.doc, &mut self.focus, modal, card) {
                tracing::warn!(%err, "could not open modal");
            }
            return;
        }

        if let Some(nav) = &mut self.nav
            && nav.handle_event(&mut self.doc, event)
        {
            return;
        }

        let focused = self.focus.current();
        if let Some(accordion) = &mut self.accordion
            && accordion.handle_event(&mut self.doc, event, focused)
        {
            return;
        }

        if let Some(region) = self.carousel_region
            && let Event::Pointer(pointer) = event
            && self.doc.contains(region, pointer.target)
            && let Some(carousel) = &mut self.carousel
        {
            carousel.handle_pointer(&mut self.sched, pointer.kind);
            return;
        }

        if let Some(back_to_top) = &mut self.back_to_top {
            back_to_top.handle_event(&mut self.sched, event);
        }
    }

    /// The card (and its modal) an event activates: a click inside the card
    /// or an activation key while the card holds focus.
    fn activated_card(&self, event: &Event) -> Option<(NodeId, NodeId)> {
        let target = match event {
            Event::Pointer(pointer) if pointer.kind == PointerKind::Click => pointer.target,
            Event::Key(key) if key.is_activate() => self.focus.current()?,
            _ => return None,
        };
        self.cards
            .iter()
            .copied()
            .find(|&(card, _)| self.doc.contains(card, target))
    }

    // --- Timers ---

    /// Advance the virtual clock, routing every fired timer to its owner.
    pub fn advance(&mut self, dt: Duration) {
        for fired in self.sched.advance(dt) {
            self.route_timer(fired);
        }
    }

    /// Advance by the wall-clock time elapsed since the last poll.
    pub fn poll(&mut self) {
        for fired in self.sched.poll() {
            self.route_timer(fired);
        }
    }

    fn route_timer(&mut self, fired: TimerHandle) {
        if let Some(carousel) = &mut self.carousel
            && carousel.on_timer(&mut self.doc, fired)
        {
            return;
        }
        if let Some(form) = &mut self.form
            && form.on_timer(fired, &mut self.sched, &mut self.notices)
        {
            return;
        }
        if self.notices.on_timer(fired) {
            return;
        }
        if let Some(back_to_top) = &mut self.back_to_top {
            back_to_top.on_timer(&mut self.doc, fired);
        }
    }

    // --- Theme ---

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.themes.current()
    }

    /// Flip the theme, persist it, and mirror the class onto the root.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.themes.toggle();
        self.mirror_theme();
        next
    }

    fn mirror_theme(&mut self) {
        let root = self.doc.root();
        match self.themes.current() {
            Theme::Dark => self.doc.add_class(root, DARK_CLASS),
            Theme::Light => self.doc.remove_class(root, DARK_CLASS),
        }
    }

    // --- Form ---

    /// Set a form field. A warn-and-drop when the page has no form.
    pub fn set_field(&mut self, kind: FieldKind, value: impl Into<String>) {
        match &mut self.form {
            Some(form) => form.values_mut().set(kind, value),
            None => tracing::warn!(?kind, "no contact form on this page"),
        }
    }

    /// Submit the form. Validation errors come back per field; a page
    /// without a form accepts and drops the submission with a warning.
    pub fn submit_form(&mut self) -> Result<(), Vec<FieldError>> {
        match &mut self.form {
            Some(form) => form.submit(&mut self.sched),
            None => {
                tracing::warn!("no contact form on this page");
                Ok(())
            }
        }
    }

    /// Current form values, when the page has a form.
    pub fn form_values(&self) -> Option<&FormValues> {
        self.form.as_ref().map(ContactForm::values)
    }

    // --- Accessors ---

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focus.current()
    }

    pub fn notices(&self) -> &NoticeCenter {
        &self.notices
    }

    /// Dismiss a notice early, before its auto-dismissal fires. Unknown ids
    /// are a quiet no-op.
    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.dismiss(&mut self.sched, id);
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    /// The topmost open modal, if any.
    pub fn open_modal(&self) -> Option<NodeId> {
        self.modals.top()
    }

    /// Live timers across every behavior.
    pub fn live_timers(&self) -> usize {
        self.sched.live_count()
    }

    /// Take the pending scroll-to-top request, if one was recorded.
    pub fn take_scroll_request(&mut self) -> bool {
        self.back_to_top
            .as_mut()
            .is_some_and(BackToTop::take_scroll_request)
    }
}

fn require_id(doc: &Document, element_id: &str) -> Result<NodeId, FeatureError> {
    doc.by_element_id(element_id)
        .ok_or_else(|| FeatureError::MissingElement(element_id.to_owned()))
}

fn with_class(doc: &Document, class: &str) -> Vec<NodeId> {
    doc.descendants(doc.root())
        .filter(|&id| doc.has_class(id, class))
        .collect()
}
