//! # Marquee Core
//!
//! Interaction logic for a marketing landing page, independent of any
//! rendering technology.
//!
//! ## Overview
//!
//! The centrepiece is the [`card_stack`] carousel: a wrap-around stack of
//! cards with keyboard, swipe, indicator and hover control, a periodic
//! auto-advance and a fixed transition lock that drops navigation requests
//! arriving mid-transition. Around it sit the page's smaller widgets:
//!
//! - [`slider`]: plain image slider with dots
//! - [`toast`]: single transient notification
//! - [`theme`]: persisted light/dark toggle
//! - [`nav`] and [`scroll`]: sticky navigation, anchors, progress bar
//! - [`reveal`] and [`counters`]: one-shot visibility effects
//! - [`tabs`], [`newsletter`], [`loading`], [`particles`]
//!
//! [`page::LandingPage`] owns all of them and is the usual entry point.
//!
//! ## Hosts
//!
//! Components never touch a clock or a display. Time goes through the
//! [`timers::Scheduler`] trait and rendering through [`host::CardSurface`];
//! hosts feed input and fired timers back as messages. Tests drive
//! everything deterministically with [`timers::SharedScheduler`].
//!
//! ## Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use marquee_core::{
//!     card_stack::{CardBoard, CardRole, CardStack, CardStackConfig, CardStackMessage},
//!     host::FixedViewport,
//!     timers::{SharedScheduler, TimerEvent},
//! };
//!
//! let clock = SharedScheduler::new();
//! let mut stack = CardStack::new(
//!     CardBoard::new(3),
//!     clock.clone(),
//!     &FixedViewport(1280.0),
//!     CardStackConfig::default(),
//! );
//! stack.next_card();
//! assert_eq!(stack.surface().role(1), Some(CardRole::Active));
//!
//! clock.advance(Duration::from_millis(600), |event| {
//!     if let TimerEvent::CardStack(timer) = event {
//!         stack.update(CardStackMessage::Timer(timer));
//!     }
//! });
//! assert!(!stack.is_animating());
//! ```

pub mod card_stack;
pub mod config;
pub mod constants;
pub mod counters;
pub mod error;
pub mod host;
pub mod input;
pub mod loading;
pub mod nav;
pub mod newsletter;
pub mod page;
pub mod particles;
pub mod prefs;
pub mod reveal;
pub mod scroll;
pub mod slider;
pub mod tabs;
pub mod theme;
pub mod timers;
pub mod toast;

pub use config::{ConfigSource, PageConfig};
pub use error::{ConfigError, MarqueeError, Result, StoreError};
pub use page::{LandingPage, PageLayout, PageMessage};
