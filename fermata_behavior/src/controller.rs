// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Priority-ordered behavior registry and dispatcher.
//!
//! ## Semantics
//!
//! - Behaviors are kept sorted by priority, highest first. Equal priorities
//!   keep registration order.
//! - A behavior is attached while a surface is bound and the behavior is
//!   enabled. Only attached behaviors receive input. Unbinding detaches the
//!   most recently attached behavior first.
//! - Events outside the bound surface are dropped, except that moves and
//!   releases still reach behaviors with a gesture in progress.
//! - The dispatch order is rebuilt whenever registration, binding or the
//!   enabled set changes, never while an event is being dispatched.
//! - [`Outcome::Stop`] ends propagation. [`Outcome::StopAndConsume`] ends it
//!   and makes [`BehaviorController::dispatch`] return `true`.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::any::Any;

use fermata_geometry::contains_point;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::behavior::{Behavior, EditorHost, Outcome};
use crate::error::BehaviorError;
use crate::input::{InputSurface, PointerInput};

struct Registration<H: EditorHost> {
    name: String,
    priority: i32,
    enabled: bool,
    /// Attach sequence number while attached.
    attached: Option<u64>,
    behavior: Box<dyn Behavior<H>>,
}

/// Read-only summary of one registered behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BehaviorInfo<'a> {
    /// Registered name.
    pub name: &'a str,
    /// Dispatch priority; higher runs first.
    pub priority: i32,
    /// Whether the caller wants the behavior active.
    pub enabled: bool,
    /// Whether the behavior currently receives input.
    pub attached: bool,
}

/// Owns the registered behaviors and routes input through them.
///
/// `S` is the bound surface type. A plain [`Rect`] works when client and
/// surface coordinates differ only by an offset.
pub struct BehaviorController<H: EditorHost, S = Rect> {
    registrations: Vec<Registration<H>>,
    order: SmallVec<[usize; 8]>,
    surface: Option<S>,
    attach_count: u64,
}

impl<H: EditorHost, S> Default for BehaviorController<H, S> {
    fn default() -> Self {
        Self {
            registrations: Vec::new(),
            order: SmallVec::new(),
            surface: None,
            attach_count: 0,
        }
    }
}

impl<H: EditorHost, S> core::fmt::Debug for BehaviorController<H, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BehaviorController")
            .field(
                "behaviors",
                &self.registrations.iter().map(|r| &r.name).collect::<Vec<_>>(),
            )
            .field("order", &self.order)
            .field("bound", &self.surface.is_some())
            .finish_non_exhaustive()
    }
}

impl<H: EditorHost, S: InputSurface> BehaviorController<H, S> {
    /// Creates an empty, unbound controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `behavior` under `name`, enabled.
    ///
    /// If a surface is bound the behavior is attached immediately.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::DuplicateName`] if `name` is taken.
    pub fn add_behavior<B: Behavior<H>>(
        &mut self,
        name: &str,
        behavior: B,
        priority: i32,
        host: &mut H,
    ) -> Result<(), BehaviorError> {
        if self.index_of(name).is_some() {
            return Err(BehaviorError::DuplicateName(name.to_string()));
        }
        let at = self
            .registrations
            .iter()
            .position(|r| r.priority < priority)
            .unwrap_or(self.registrations.len());
        self.registrations.insert(
            at,
            Registration {
                name: name.to_string(),
                priority,
                enabled: true,
                attached: None,
                behavior: Box::new(behavior),
            },
        );
        #[cfg(feature = "tracing")]
        tracing::debug!(name, priority, "behavior registered");
        if self.surface.is_some() {
            self.attach_at(at, host);
        }
        self.rebuild_order();
        Ok(())
    }

    /// Unregisters `name`, detaching it first, and returns the behavior.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::UnknownBehavior`] if `name` is not registered.
    pub fn remove_behavior(
        &mut self,
        name: &str,
        host: &mut H,
    ) -> Result<Box<dyn Behavior<H>>, BehaviorError> {
        let index = self.require(name)?;
        self.detach_at(index, host);
        let removed = self.registrations.remove(index);
        self.rebuild_order();
        #[cfg(feature = "tracing")]
        tracing::debug!(name, "behavior removed");
        Ok(removed.behavior)
    }

    /// Binds input to `surface` and attaches every enabled behavior.
    ///
    /// A previously bound surface is unbound first and returned.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::InvalidSurface`] if the bounds are not finite
    /// or have a negative size. The current binding is left untouched.
    pub fn bind(&mut self, surface: S, host: &mut H) -> Result<Option<S>, BehaviorError> {
        let bounds = surface.bounds();
        if !bounds.is_finite() || bounds.width() < 0.0 || bounds.height() < 0.0 {
            return Err(BehaviorError::InvalidSurface(bounds));
        }
        let previous = self.unbind(host);
        self.surface = Some(surface);
        #[cfg(feature = "tracing")]
        tracing::debug!(?bounds, "surface bound");
        for index in 0..self.registrations.len() {
            if self.registrations[index].enabled {
                self.attach_at(index, host);
            }
        }
        self.rebuild_order();
        Ok(previous)
    }

    /// Detaches every behavior, last attached first, and releases the
    /// surface.
    pub fn unbind(&mut self, host: &mut H) -> Option<S> {
        let surface = self.surface.take()?;
        let mut attached: SmallVec<[(u64, usize); 8]> = self
            .registrations
            .iter()
            .enumerate()
            .filter_map(|(index, r)| r.attached.map(|seq| (seq, index)))
            .collect();
        attached.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        for (_, index) in attached {
            self.detach_at(index, host);
        }
        self.rebuild_order();
        #[cfg(feature = "tracing")]
        tracing::debug!("surface unbound");
        Some(surface)
    }

    /// Returns `true` if a surface is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.surface.is_some()
    }

    /// Returns the bound surface.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Enables or disables `name`.
    ///
    /// Only an actual change has an effect. Disabling a behavior in the
    /// middle of a gesture cancels the gesture.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::UnknownBehavior`] if `name` is not registered.
    pub fn set_enabled(
        &mut self,
        name: &str,
        enabled: bool,
        host: &mut H,
    ) -> Result<(), BehaviorError> {
        let index = self.require(name)?;
        self.set_enabled_at(index, enabled, host);
        self.rebuild_order();
        Ok(())
    }

    /// Applies a whole enabled map at once.
    ///
    /// Every name is checked before anything changes.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::UnknownBehavior`] for the first unknown name;
    /// no behavior is touched in that case.
    pub fn update_enabled<'n>(
        &mut self,
        enabled: impl IntoIterator<Item = (&'n str, bool)>,
        host: &mut H,
    ) -> Result<(), BehaviorError> {
        let updates = enabled
            .into_iter()
            .map(|(name, on)| self.require(name).map(|index| (index, on)))
            .collect::<Result<SmallVec<[(usize, bool); 8]>, _>>()?;
        for (index, on) in updates {
            self.set_enabled_at(index, on, host);
        }
        self.rebuild_order();
        Ok(())
    }

    /// Returns whether `name` is enabled, or `None` if it is not registered.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.index_of(name).map(|i| self.registrations[i].enabled)
    }

    /// Returns `true` if any attached behavior is mid-gesture.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.order
            .iter()
            .any(|&i| self.registrations[i].behavior.is_active())
    }

    /// Borrows the behavior registered as `name`, if it has type `B`.
    #[must_use]
    pub fn behavior<B: Behavior<H>>(&self, name: &str) -> Option<&B> {
        let index = self.index_of(name)?;
        let any: &dyn Any = self.registrations[index].behavior.as_ref();
        any.downcast_ref::<B>()
    }

    /// Mutably borrows the behavior registered as `name`, if it has type `B`.
    ///
    /// Props changed this way take effect on the next event; the behavior
    /// stays attached.
    pub fn behavior_mut<B: Behavior<H>>(&mut self, name: &str) -> Option<&mut B> {
        let index = self.index_of(name)?;
        let any: &mut dyn Any = self.registrations[index].behavior.as_mut();
        any.downcast_mut::<B>()
    }

    /// Lists registrations in priority order.
    pub fn behaviors(&self) -> impl Iterator<Item = BehaviorInfo<'_>> + '_ {
        self.registrations.iter().map(|r| BehaviorInfo {
            name: &r.name,
            priority: r.priority,
            enabled: r.enabled,
            attached: r.attached.is_some(),
        })
    }

    /// Routes one client-space event through the attached behaviors.
    ///
    /// Returns `true` if a behavior consumed it. Input is ignored while no
    /// surface is bound, and events with non-finite coordinates are dropped.
    ///
    /// The local area spans from the origin to the size of the surface
    /// bounds. Presses and wheel events outside it are dropped. Moves and
    /// releases outside it only reach behaviors that report
    /// [`Behavior::is_active`], so a captured gesture can still finish.
    pub fn dispatch(&mut self, input: &PointerInput, host: &mut H) -> bool {
        let Some(surface) = &self.surface else {
            return false;
        };
        let local = input.map_position(|p| surface.to_local(p));
        if !local.is_finite() {
            #[cfg(feature = "tracing")]
            tracing::trace!(?input, "dropping non-finite input");
            return false;
        }
        let area = Rect::from_origin_size(Point::ORIGIN, surface.bounds().size());
        let inside = local.position().is_none_or(|p| contains_point(area, p));
        if !inside && !matches!(local, PointerInput::Move { .. } | PointerInput::Up { .. }) {
            #[cfg(feature = "tracing")]
            tracing::trace!(?input, "dropping input outside the surface");
            return false;
        }
        for &index in &self.order {
            let behavior = &mut self.registrations[index].behavior;
            if !inside && !behavior.is_active() {
                continue;
            }
            match behavior.handle(&local, host) {
                Outcome::Continue => {}
                Outcome::Stop => return false,
                Outcome::StopAndConsume => return true,
            }
        }
        false
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.registrations.iter().position(|r| r.name == name)
    }

    fn require(&self, name: &str) -> Result<usize, BehaviorError> {
        self.index_of(name)
            .ok_or_else(|| BehaviorError::UnknownBehavior(name.to_string()))
    }

    fn set_enabled_at(&mut self, index: usize, enabled: bool, host: &mut H) {
        let registration = &mut self.registrations[index];
        if registration.enabled == enabled {
            return;
        }
        registration.enabled = enabled;
        #[cfg(feature = "tracing")]
        tracing::debug!(name = %registration.name, enabled, "behavior toggled");
        if self.surface.is_none() {
            return;
        }
        if enabled {
            self.attach_at(index, host);
        } else {
            self.detach_at(index, host);
        }
    }

    fn attach_at(&mut self, index: usize, host: &mut H) {
        let registration = &mut self.registrations[index];
        if registration.attached.is_none() {
            registration.attached = Some(self.attach_count);
            self.attach_count += 1;
            registration.behavior.attach(host);
        }
    }

    fn detach_at(&mut self, index: usize, host: &mut H) {
        let registration = &mut self.registrations[index];
        if registration.attached.is_some() {
            #[cfg(feature = "tracing")]
            {
                if registration.behavior.is_active() {
                    tracing::debug!(name = %registration.name, "cancelling gesture on detach");
                }
            }
            registration.attached = None;
            registration.behavior.detach(host);
        }
    }

    fn rebuild_order(&mut self) {
        self.order = self
            .registrations
            .iter()
            .enumerate()
            .filter(|(_, r)| r.attached.is_some())
            .map(|(i, _)| i)
            .collect();
    }
}
