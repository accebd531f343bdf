#![forbid(unsafe_code)]

//! Interactive behaviors for Pagelet.
//!
//! Each behavior owns its own state and mutates only the document nodes it
//! was wired to; the modal controller never touches rotation state and vice
//! versa. Events come in typed (`pagelet_core::Event`), side effects go out
//! as class/attribute mutations and timer operations.

pub mod accordion;
pub mod back_to_top;
pub mod carousel;
pub mod form;
pub mod modal;
pub mod nav;
pub mod notice;

pub use accordion::{Accordion, Section};
pub use back_to_top::BackToTop;
pub use carousel::{Carousel, CarouselError, Phase};
pub use form::{ContactForm, FieldError, FieldKind, FormValues, validate};
pub use modal::{ModalAction, ModalController, ModalError, modal_for_card};
pub use nav::NavMenu;
pub use notice::{Notice, NoticeCenter, NoticeKind};

/// Class toggled on nodes that are currently shown/engaged (`active` in the
/// host stylesheet).
pub const ACTIVE_CLASS: &str = "active";
