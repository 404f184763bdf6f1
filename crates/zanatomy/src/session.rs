//! Subsystem lifecycle
//!
//! A [`Session`] wires the visibility reactor and the label refresh into a
//! shared [`EventBus`]. Starting it subscribes both, stopping it (or
//! dropping it) removes every handle it registered, so nothing keeps firing
//! once the subsystem is gone.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Quat;
use log::{debug, info, warn};
use scene_tree::SceneHost;
use visibility::{on_active_changed, set_group_labels, Applied, VisibilitySettings};

use crate::config::Config;
use crate::error::SessionError;
use crate::events::{EventBus, EventSource, Owner};
use crate::refresh::refresh_labels;

/// State the session's callbacks read at the time they run
#[derive(Debug)]
struct Shared {
    settings: VisibilitySettings,
    viewport_rotation: Quat,
}

/// The running visibility subsystem
pub struct Session<H> {
    bus: Rc<RefCell<EventBus<H>>>,
    config: Config,
    shared: Rc<RefCell<Shared>>,
    owner: Option<Owner>,
}

impl<H> Session<H>
where
    H: SceneHost + EventSource + 'static,
{
    /// Create a stopped session on `bus`
    pub fn new(bus: Rc<RefCell<EventBus<H>>>, config: Config) -> Self {
        let shared = Shared {
            settings: config.settings(),
            viewport_rotation: config.viewport_rotation,
        };
        Self {
            bus,
            config,
            shared: Rc::new(RefCell::new(shared)),
            owner: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.owner.is_some()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current operator settings
    pub fn settings(&self) -> VisibilitySettings {
        self.shared.borrow().settings.clone()
    }

    /// Subscribe the reactor and register the refresh timer
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.is_running() {
            warn!("Session start: already running");
            return Err(SessionError::AlreadyRunning);
        }
        let mut bus = self.bus.try_borrow_mut().map_err(|_| SessionError::BusBusy)?;
        let owner = bus.owner();

        let shared = self.shared.clone();
        bus.subscribe_active(owner, move |host: &mut H, _change| {
            let shared = shared.borrow();
            on_active_changed(host, &shared.settings);
        });

        let shared = self.shared.clone();
        bus.register_timer(owner, self.config.refresh_interval, move |host: &mut H| {
            let rotation = shared.borrow().viewport_rotation;
            refresh_labels(host, rotation);
            true
        });

        self.owner = Some(owner);
        info!(
            "Session started as {} (refresh every {:?})",
            owner, self.config.refresh_interval
        );
        Ok(())
    }

    /// Release every handle the session registered
    ///
    /// Returns false if the session was not running.
    pub fn stop(&mut self) -> Result<bool, SessionError> {
        let Some(owner) = self.owner else {
            return Ok(false);
        };
        let mut bus = self.bus.try_borrow_mut().map_err(|_| SessionError::BusBusy)?;
        let removed = bus.clear_by_owner(owner);
        self.owner = None;
        info!("Session {} stopped, {} handles released", owner, removed);
        Ok(true)
    }

    /// Turn the viewport; labels follow on the next refresh tick
    pub fn set_viewport_rotation(&self, rotation: Quat) {
        self.shared.borrow_mut().viewport_rotation = rotation;
    }

    /// Toggle group labels and update the scene right away
    pub fn set_group_labels(&self, host: &mut H, enabled: bool) -> Applied {
        let mut shared = self.shared.borrow_mut();
        let applied = set_group_labels(host, &mut shared.settings, enabled);
        debug!("Group labels set to {} by session", enabled);
        applied
    }
}

impl<H> Drop for Session<H> {
    fn drop(&mut self) {
        let Some(owner) = self.owner.take() else {
            return;
        };
        match self.bus.try_borrow_mut() {
            Ok(mut bus) => {
                bus.clear_by_owner(owner);
                debug!("Session {} stopped on drop", owner);
            }
            Err(_) => warn!("Session {} dropped while its event bus was busy", owner),
        }
    }
}
