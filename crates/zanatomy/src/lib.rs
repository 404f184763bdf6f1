//! Z-Anatomy visibility subsystem
//!
//! Ties the operators of the [`visibility`] crate to a running scene: an
//! [`EventBus`] delivers active-object changes and timer ticks, and a
//! [`Session`] keeps the labels in step with the selection and the
//! viewport for as long as it runs.
//!
//! # Example
//!
//! ```
//! use std::{cell::RefCell, rc::Rc, time::Duration};
//! use scene_tree::prelude::*;
//! use zanatomy::{Config, EventBus, Session};
//!
//! let mut scene = SceneGraph::new();
//! let femur = scene.add("Femur", NodeKind::Regular);
//!
//! let bus = Rc::new(RefCell::new(EventBus::new()));
//! let mut session = Session::new(bus.clone(), Config::default());
//! session.start().unwrap();
//!
//! scene.set_active(Some(femur));
//! bus.borrow_mut().dispatch(&mut scene);
//! bus.borrow_mut().advance(&mut scene, Duration::from_millis(20));
//! ```

mod config;
mod error;
mod events;
mod refresh;
mod session;

pub use config::{Config, DEFAULT_REFRESH_INTERVAL};
pub use error::SessionError;
pub use events::{ActiveChange, EventBus, EventSource, Owner, SubscriptionId, TimerId};
pub use refresh::{refresh_labels, RefreshReport};
pub use session::Session;
