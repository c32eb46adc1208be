//! Shared-element layout transitions for Dioxus elements.
//!
//! Sources (e.g. grid cards) register their mounted handle under a key. When
//! a key is opened, the target element mounts hidden, both boxes are
//! measured, and the target is drawn over the source before springing into
//! its own box. Closing runs the same animation in reverse and unmounts the
//! target once the spring settles.
//!
//! ```rust,ignore
//! let mut layout = use_shared_layout::<u32>(SpringConfig::default());
//!
//! rsx! {
//!     div { onmounted: move |e: Event<MountedData>| layout.register_source(7, e.data()) }
//!     if let Some(active) = layout.active() {
//!         div {
//!             style: "{layout.style()}",
//!             onmounted: move |e: Event<MountedData>| layout.target_mounted(e.data()),
//!         }
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{LayoutPhase, Rect, SpringConfig, Transform, TransitionGate, TransitionTicket};

/// Delay between committing the inverted style and starting the animation.
const FRAME: Duration = Duration::from_millis(16);

/// The element currently morphing in or out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveLayout<K> {
    pub key: K,
    /// Identifies one mount of the target; use it as the element key.
    pub instance: TransitionTicket,
    ticket: TransitionTicket,
    pub phase: LayoutPhase,
    /// Target box measured before any transform was applied.
    layout_box: Option<Rect>,
}

/// Handle returned by [`use_shared_layout`]; cheap to copy into handlers.
#[derive(Clone, Copy)]
pub struct SharedLayout<K: 'static> {
    sources: Signal<HashMap<K, Rc<MountedData>>>,
    active: Signal<Option<ActiveLayout<K>>>,
    gate: Signal<TransitionGate>,
    transition: Signal<String>,
    settle: Duration,
}

pub fn use_shared_layout<K>(spring: SpringConfig) -> SharedLayout<K>
where
    K: Copy + Eq + Hash + std::fmt::Debug + 'static,
{
    SharedLayout {
        sources: use_signal(HashMap::new),
        active: use_signal(|| None),
        gate: use_signal(TransitionGate::new),
        transition: use_signal(|| spring.css_transition()),
        settle: use_hook(|| spring.settle_duration()),
    }
}

impl<K> SharedLayout<K>
where
    K: Copy + Eq + Hash + std::fmt::Debug + 'static,
{
    pub fn register_source(&mut self, key: K, element: Rc<MountedData>) {
        self.sources.write().insert(key, element);
    }

    /// Reactive read of the active element.
    pub fn active(&self) -> Option<ActiveLayout<K>> {
        *self.active.read()
    }

    /// Non-subscribing read of the active key.
    pub fn active_key(&self) -> Option<K> {
        let active = *self.active.peek();
        active.map(|a| a.key)
    }

    /// Inline style for the target element.
    pub fn style(&self) -> String {
        let active = *self.active.read();
        active
            .map(|a| a.phase.style(&self.transition.peek()))
            .unwrap_or_default()
    }

    /// Start showing the target for `key`. Supersedes anything in flight.
    pub fn open(&mut self, key: K) {
        let ticket = self.gate.write().begin();
        self.active.set(Some(ActiveLayout {
            key,
            instance: ticket,
            ticket,
            phase: LayoutPhase::Measuring,
            layout_box: None,
        }));
    }

    /// Called from the target's `onmounted`; measures and plays the enter animation.
    pub fn target_mounted(&mut self, element: Rc<MountedData>) {
        let Some(active) = *self.active.peek() else {
            return;
        };
        let source = self.sources.peek().get(&active.key).cloned();
        let mut this = *self;

        spawn(async move {
            // Still hidden and untransformed, so this is the real layout box.
            let layout_box = measure(&element).await;
            let source_box = match source {
                Some(source) => measure(&source).await,
                None => None,
            };
            let transform = flip_transform(source_box, layout_box);
            if !this.set_phase(active.ticket, LayoutPhase::Inverted(transform)) {
                return;
            }
            if let Some(a) = this.active.write().as_mut() {
                a.layout_box = layout_box;
            }
            if !transform.is_identity() {
                tokio::time::sleep(FRAME).await;
            }
            this.set_phase(active.ticket, LayoutPhase::Playing);
        });
    }

    /// Animate the target back into its source, then unmount it.
    pub fn close(&mut self) {
        let Some(active) = *self.active.peek() else {
            return;
        };
        if active.phase.is_leaving() {
            return;
        }

        let ticket = self.gate.write().begin();
        // Stop taking input right away; the real transform follows once measured.
        if let Some(a) = self.active.write().as_mut() {
            a.ticket = ticket;
            a.phase = LayoutPhase::Leaving(Transform::IDENTITY);
        }

        let source = self.sources.peek().get(&active.key).cloned();
        let mut this = *self;

        spawn(async move {
            // The target may be mid-spring; only the source is measured again.
            let source_box = match source {
                Some(source) => measure(&source).await,
                None => None,
            };
            let transform = flip_transform(source_box, active.layout_box);
            if transform.is_identity() {
                this.finish(ticket);
                return;
            }
            if !this.set_phase(ticket, LayoutPhase::Leaving(transform)) {
                return;
            }
            tokio::time::sleep(this.settle).await;
            this.finish(ticket);
        });
    }

    /// Drop the target immediately, cancelling any animation.
    pub fn dismiss(&mut self) {
        self.gate.write().begin();
        self.active.set(None);
    }

    fn set_phase(&mut self, ticket: TransitionTicket, phase: LayoutPhase) -> bool {
        if !self.gate.peek().is_current(ticket) {
            return false;
        }
        if let Some(active) = self.active.write().as_mut() {
            active.phase = phase;
        }
        true
    }

    fn finish(&mut self, ticket: TransitionTicket) {
        if self.gate.peek().is_current(ticket) {
            tracing::trace!(?ticket, "Shared layout transition finished");
            self.active.set(None);
        }
    }
}

/// Transform drawing a target laid out at `layout_box` over `source`, or
/// identity if either box is unknown.
fn flip_transform(source: Option<Rect>, layout_box: Option<Rect>) -> Transform {
    match (source, layout_box) {
        (Some(from), Some(to)) => Transform::between(from, to),
        _ => Transform::IDENTITY,
    }
}

async fn measure(element: &MountedData) -> Option<Rect> {
    match element.get_client_rect().await {
        Ok(r) => Some(Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height)),
        Err(err) => {
            tracing::debug!("Layout measurement failed: {:?}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_from_stored_layout_box_lands_on_the_source() {
        let card = Rect::new(40.0, 100.0, 320.0, 300.0);
        let modal = Rect::new(200.0, 50.0, 640.0, 600.0);
        let exit = flip_transform(Some(card), Some(modal));
        assert_eq!(exit.apply(modal), card);
    }

    #[test]
    fn unknown_boxes_cut_without_animating() {
        let card = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(flip_transform(None, Some(card)).is_identity());
        assert!(flip_transform(Some(card), None).is_identity());
    }
}
