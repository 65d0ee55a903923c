// ZoomView -- Zoom and layout engine for embeddable image viewports
//
// Copyright (c) 2024-2025 Martin van der Werff <github (at) newinnovations.nl>
//
// This file is part of ZoomView.
//
// ZoomView is free software: you can redistribute it and/or modify it under the terms of
// the GNU Affero General Public License as published by the Free Software Foundation, either
// version 3 of the License, or (at your option) any later version.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR
// IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND
// FITNESS FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
// LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR
// BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
// STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::rc::{Rc, Weak};

use crate::{
    config::ViewerConfig,
    image::ImageSpec,
    rect::{PointD, RectD, SizeD},
};

use super::{
    geometry::{
        clamp_offset, double_tap_zoom_target, fit_rect, recenter_after_zoom_end, zoom_bounds,
    },
    transition::{TransitionHandle, Transitions},
    zoom::{ZoomBounds, ZoomState},
};

/// Receives zoom state changes of a viewer.
///
/// Called once per completed transition, after its animation (if any)
/// finished. Implementations must not call back into the controller.
pub trait ZoomObserver {
    fn zoom_state_changed(&self, is_zooming: bool);
}

/// Zoom state machine of a single image viewer.
///
/// The controller owns the [`ZoomState`] and sequences the layout math of
/// [`super::geometry`] in response to host events. Every state change is
/// returned as a [`TransitionHandle`] for the host to apply to its scrollable
/// surface.
pub struct ZoomController {
    config: ViewerConfig,
    image: Option<ImageSpec>,
    viewport: SizeD,
    bounds: ZoomBounds,
    state: ZoomState,
    transitions: Transitions,
    observer: Option<Weak<dyn ZoomObserver>>,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl ZoomController {
    pub fn new(config: ViewerConfig) -> Self {
        let viewport = SizeD::default();
        let bounds = zoom_bounds(viewport, ImageSpec::layout_size(None), &config);
        Self {
            config,
            image: None,
            viewport,
            bounds,
            state: ZoomState::at_rest(viewport, &bounds),
            transitions: Transitions::default(),
            observer: None,
        }
    }

    /// Registers the observer. Only a weak reference is kept, the caller stays
    /// responsible for keeping the observer alive.
    pub fn set_observer<O: ZoomObserver + 'static>(&mut self, observer: &Rc<O>) {
        let observer: Weak<O> = Rc::downgrade(observer);
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn image(&self) -> Option<&ImageSpec> {
        self.image.as_ref()
    }

    pub fn viewport(&self) -> SizeD {
        self.viewport
    }

    pub fn bounds(&self) -> &ZoomBounds {
        &self.bounds
    }

    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    /// True when the current scale is above the minimum scale
    pub fn is_zoomed(&self) -> bool {
        self.bounds.is_zoomed(self.state.scale)
    }

    /// At-rest placement of the current image in the current viewport
    pub fn fit_rect(&self) -> RectD {
        fit_rect(self.viewport, ImageSpec::layout_size(self.image.as_ref()))
    }

    /// The animated transition the host is still expected to complete
    pub fn pending_transition(&self) -> Option<&TransitionHandle> {
        self.transitions.pending()
    }

    fn update_bounds(&mut self) {
        self.bounds = zoom_bounds(
            self.viewport,
            ImageSpec::layout_size(self.image.as_ref()),
            &self.config,
        );
        log::trace!("zoom bounds {:?}", self.bounds);
    }

    /// Brings the state back in line after the bounds or the viewport changed.
    ///
    /// An idle viewer takes the at-rest layout of the current viewport. This is
    /// silent, unless an animated transition towards a stale layout is still
    /// pending; that one is superseded by a non-animated reset. A zoomed viewer
    /// whose scale left the bounds settles at the nearest allowed scale.
    fn conform_to_bounds(&mut self) -> Option<TransitionHandle> {
        if !self.state.is_zooming {
            let at_rest = ZoomState::at_rest(self.viewport, &self.bounds);
            if at_rest == self.state {
                None
            } else if self.transitions.pending().is_some() {
                Some(self.reset_zoom(false))
            } else {
                self.state = at_rest;
                None
            }
        } else {
            let scale = self.bounds.clamp(self.state.scale);
            if scale == self.state.scale {
                None
            } else {
                log::debug!("scale {} outside {:?}", self.state.scale, self.bounds);
                Some(self.settle_at(scale, false))
            }
        }
    }

    /// Shows `image`, or nothing. Switching to a different image resets the
    /// zoom without animation.
    pub fn set_image(&mut self, image: Option<ImageSpec>) -> Option<TransitionHandle> {
        let changed = self.image.map(|i| i.id) != image.map(|i| i.id);
        self.image = image;
        self.update_bounds();
        if changed {
            log::debug!("image changed to {:?}", image.map(|i| i.id));
            Some(self.reset_zoom(false))
        } else {
            self.conform_to_bounds()
        }
    }

    pub fn load_image(&mut self, image: ImageSpec) -> Option<TransitionHandle> {
        self.set_image(Some(image))
    }

    /// Removes the image; layout falls back to a 1x1 unit image
    pub fn clear(&mut self) -> Option<TransitionHandle> {
        self.set_image(None)
    }

    /// Resizes the viewport and recomputes the zoom bounds.
    ///
    /// An idle viewer follows the new size right away, normally without a
    /// transition. A zoomed viewer keeps its layout as long as its scale stays
    /// within the new bounds.
    pub fn set_viewport(&mut self, viewport: SizeD) -> Option<TransitionHandle> {
        if viewport == self.viewport {
            return None;
        }
        log::debug!("viewport {:?} -> {:?}", self.viewport, viewport);
        self.viewport = viewport;
        self.update_bounds();
        self.conform_to_bounds()
    }

    /// Records what the scroll surface did on its own, e.g. while the user
    /// pans or pinches.
    pub fn sync_surface(&mut self, content_size: SizeD, offset: PointD) {
        self.state.content_size = content_size;
        self.state.content_offset = offset;
    }

    pub fn scroll_to(&mut self, offset: PointD) {
        self.state.content_offset = offset;
    }

    /// Returns to the at-rest layout.
    pub fn reset_zoom(&mut self, animated: bool) -> TransitionHandle {
        let target = ZoomState::at_rest(self.viewport, &self.bounds);
        self.begin_transition(target, animated)
    }

    /// Double tap at `point` (viewport coordinates).
    ///
    /// A zoomed viewer always zooms out. An idle viewer zooms in on the tapped
    /// spot, unless zoom-in is disabled or the tap missed the image.
    pub fn handle_double_tap(&mut self, point: PointD) -> Option<TransitionHandle> {
        if self.state.content_size.exceeds_either_axis(&self.viewport) {
            return Some(self.reset_zoom(true));
        }
        if !self.config.double_tap_to_zoom_enabled {
            return None;
        }

        // The bounds already hold the cover scale, the floor and the minimum
        let target = double_tap_zoom_target(
            self.viewport,
            &self.fit_rect(),
            point,
            self.bounds.max_scale,
        )?;
        if !self.bounds.is_zoomed(target.scale) {
            return None;
        }

        let content_size = target.target_rect.size();
        let state = ZoomState {
            scale: target.scale,
            image_frame: target.target_rect,
            content_size,
            content_offset: clamp_offset(
                target.visible_rect.origin(),
                content_size,
                self.viewport,
            ),
            is_zooming: true,
        };
        Some(self.begin_transition(state, true))
    }

    /// A pinch gesture ended at `scale`. The scale is clamped to the zoom
    /// bounds before the layout is recomputed.
    pub fn handle_zoom_gesture_ended(&mut self, scale: f64) -> TransitionHandle {
        self.settle_at(self.bounds.clamp(scale), true)
    }

    /// Re-lays out the current content at `scale`, which must be within bounds
    fn settle_at(&mut self, scale: f64, animated: bool) -> TransitionHandle {
        let result = recenter_after_zoom_end(
            self.viewport,
            &self.fit_rect(),
            scale,
            self.state.content_size,
            self.state.content_offset,
        );
        let state = ZoomState {
            scale,
            image_frame: result.frame,
            content_size: result.content_size,
            content_offset: result.offset,
            is_zooming: self.bounds.is_zoomed(scale),
        };
        self.begin_transition(state, animated)
    }

    /// Tear-down: resets without animation and forgets the image.
    pub fn dismantle(&mut self) -> TransitionHandle {
        self.image = None;
        self.update_bounds();
        self.reset_zoom(false)
    }

    /// Applies `target` and starts a transition towards it. Non-animated
    /// transitions notify the observer before returning.
    fn begin_transition(&mut self, target: ZoomState, animated: bool) -> TransitionHandle {
        self.state = target;
        let handle = self
            .transitions
            .begin(target, animated, self.config.animation_duration());
        log::debug!(
            "transition {} to scale {} (animated: {animated})",
            handle.id(),
            target.scale
        );
        if !animated {
            self.notify(handle.is_zooming());
        }
        handle
    }

    /// Signals that the host finished animating transition `id`. Returns false
    /// for transitions that were superseded or already completed; their
    /// observer notification is dropped.
    pub fn complete_transition(&mut self, id: u64) -> bool {
        match self.transitions.complete(id) {
            Some(handle) => {
                log::debug!("transition {id} completed");
                self.notify(handle.is_zooming());
                true
            }
            None => false,
        }
    }

    fn notify(&self, is_zooming: bool) {
        if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
            observer.zoom_state_changed(is_zooming);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<bool>>,
    }

    impl ZoomObserver for Recorder {
        fn zoom_state_changed(&self, is_zooming: bool) {
            self.events.borrow_mut().push(is_zooming);
        }
    }

    impl Recorder {
        fn events(&self) -> Vec<bool> {
            self.events.borrow().clone()
        }
    }

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    /// 300x600 viewport showing a square 600x600 image, observer attached
    fn create_test_controller() -> (ZoomController, Rc<Recorder>) {
        let recorder = Rc::new(Recorder::default());
        let mut controller = ZoomController::default();
        controller.set_observer(&recorder);
        controller.set_viewport(SizeD::new(300.0, 600.0));
        controller.load_image(ImageSpec::new(600.0, 600.0));
        recorder.events.borrow_mut().clear();
        (controller, recorder)
    }

    #[test]
    fn test_new_controller_is_idle() {
        let controller = ZoomController::default();
        assert!(controller.image().is_none());
        assert!(!controller.is_zoomed());
        assert_eq!(controller.state().scale, 1.0);
        assert_eq!(controller.bounds().max_scale, 4.0);
        assert!(controller.pending_transition().is_none());
    }

    #[test]
    fn test_load_image_resets_and_notifies() {
        let recorder = Rc::new(Recorder::default());
        let mut controller = ZoomController::default();
        controller.set_observer(&recorder);
        controller.set_viewport(SizeD::new(300.0, 600.0));

        let handle = controller.load_image(ImageSpec::new(600.0, 600.0)).unwrap();
        assert!(!handle.is_animated());
        assert_eq!(recorder.events(), vec![false]);
        assert_eq!(controller.fit_rect(), RectD::new(0.0, 150.0, 300.0, 450.0));
        assert_eq!(controller.bounds().max_scale, 4.0);
    }

    #[test]
    fn test_same_image_does_not_reset() {
        let (mut controller, recorder) = create_test_controller();
        let image = *controller.image().unwrap();

        assert!(controller.set_image(Some(image)).is_none());
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_clear_image_falls_back_to_unit_image() {
        let (mut controller, _recorder) = create_test_controller();

        assert!(controller.clear().is_some());
        assert!(controller.image().is_none());
        assert_eq!(controller.fit_rect(), RectD::new(0.0, 150.0, 300.0, 450.0));
    }

    #[test]
    fn test_reset_zoom_state() {
        let (mut controller, recorder) = create_test_controller();

        let handle = controller.reset_zoom(false);
        assert_eq!(handle.target(), controller.state());
        let state = controller.state();
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.image_frame, RectD::new(0.0, 0.0, 300.0, 600.0));
        assert_eq!(state.content_size, SizeD::new(300.0, 600.0));
        assert_eq!(state.content_offset, PointD::new(0.0, 0.0));
        assert!(!state.is_zooming);
        assert_eq!(recorder.events(), vec![false]);
    }

    #[test]
    fn test_reset_zoom_is_idempotent() {
        let (mut controller, _recorder) = create_test_controller();
        controller.handle_double_tap(PointD::new(150.0, 300.0));

        controller.reset_zoom(false);
        let once = *controller.state();
        controller.reset_zoom(false);
        assert_eq!(*controller.state(), once);
    }

    #[test]
    fn test_animated_reset_notifies_on_completion() {
        let (mut controller, recorder) = create_test_controller();

        let handle = controller.reset_zoom(true);
        assert!(handle.is_animated());
        assert_eq!(handle.duration().as_secs_f64(), 0.25);
        assert!(recorder.events().is_empty());

        assert!(controller.complete_transition(handle.id()));
        assert_eq!(recorder.events(), vec![false]);
        assert!(!controller.complete_transition(handle.id()));
        assert_eq!(recorder.events(), vec![false]);
    }

    #[test]
    fn test_double_tap_zooms_in() {
        let (mut controller, recorder) = create_test_controller();

        let handle = controller.handle_double_tap(PointD::new(150.0, 300.0)).unwrap();
        let state = *controller.state();
        assert_eq!(state.scale, 4.0);
        assert_eq!(state.image_frame, RectD::new(0.0, 0.0, 1200.0, 1200.0));
        assert_eq!(state.content_size, SizeD::new(1200.0, 1200.0));
        assert_eq!(state.content_offset, PointD::new(450.0, 300.0));
        assert!(state.is_zooming);
        assert!(controller.is_zoomed());

        // Observer waits for the animation
        assert!(recorder.events().is_empty());
        assert!(controller.complete_transition(handle.id()));
        assert_eq!(recorder.events(), vec![true]);
    }

    #[test]
    fn test_double_tap_near_edge_clamps_offset() {
        let (mut controller, _recorder) = create_test_controller();

        controller.handle_double_tap(PointD::new(299.0, 449.0)).unwrap();
        assert_eq!(controller.state().content_offset, PointD::new(900.0, 600.0));
    }

    #[test]
    fn test_double_tap_outside_image_is_ignored() {
        let (mut controller, recorder) = create_test_controller();
        let before = *controller.state();

        assert!(controller.handle_double_tap(PointD::new(150.0, 50.0)).is_none());
        assert_eq!(*controller.state(), before);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_double_tap_while_zoomed_zooms_out() {
        let (mut controller, recorder) = create_test_controller();
        let zoom_in = controller.handle_double_tap(PointD::new(150.0, 300.0)).unwrap();
        controller.complete_transition(zoom_in.id());

        // Position does not matter, even outside the at-rest image
        let zoom_out = controller.handle_double_tap(PointD::new(5.0, 5.0)).unwrap();
        assert!(zoom_out.is_animated());
        assert!(!zoom_out.is_zooming());
        assert_eq!(controller.state().scale, 1.0);

        controller.complete_transition(zoom_out.id());
        assert_eq!(recorder.events(), vec![true, false]);
    }

    #[test]
    fn test_double_tap_zoom_in_disabled() {
        let recorder = Rc::new(Recorder::default());
        let config = ViewerConfig::default().with_double_tap_to_zoom(false);
        let mut controller = ZoomController::new(config);
        controller.set_observer(&recorder);
        controller.set_viewport(SizeD::new(300.0, 600.0));
        controller.load_image(ImageSpec::new(600.0, 600.0));

        assert!(controller.handle_double_tap(PointD::new(150.0, 300.0)).is_none());
        assert!(!controller.is_zoomed());

        // Zooming out still works after a pinch
        controller.sync_surface(SizeD::new(600.0, 600.0), PointD::new(0.0, 0.0));
        controller.handle_zoom_gesture_ended(2.0);
        assert!(controller.is_zoomed());
        assert!(controller.handle_double_tap(PointD::new(150.0, 300.0)).is_some());
        assert!(!controller.is_zoomed());
    }

    #[test]
    fn test_gesture_end_short_image_pins_top() {
        let (mut controller, recorder) = create_test_controller();
        controller.sync_surface(SizeD::new(450.0, 900.0), PointD::new(60.0, 140.0));

        let handle = controller.handle_zoom_gesture_ended(1.5);
        let state = *controller.state();
        assert_eq!(state.scale, 1.5);
        assert_eq!(state.image_frame, RectD::new(0.0, 0.0, 450.0, 600.0));
        assert_eq!(state.content_size, SizeD::new(450.0, 600.0));
        assert_eq!(state.content_offset, PointD::new(60.0, 0.0));
        assert!(state.is_zooming);

        controller.complete_transition(handle.id());
        assert_eq!(recorder.events(), vec![true]);
    }

    #[test]
    fn test_gesture_end_clamps_scale() {
        let (mut controller, recorder) = create_test_controller();

        let handle = controller.handle_zoom_gesture_ended(9.0);
        assert_eq!(controller.state().scale, 4.0);
        assert_eq!(controller.state().content_size, SizeD::new(1200.0, 1200.0));
        controller.complete_transition(handle.id());

        let handle = controller.handle_zoom_gesture_ended(0.5);
        assert_eq!(controller.state().scale, 1.0);
        assert!(!handle.is_zooming());
        controller.complete_transition(handle.id());

        assert_eq!(recorder.events(), vec![true, false]);
    }

    #[test]
    fn test_superseded_transition_is_not_reported() {
        let (mut controller, recorder) = create_test_controller();

        let zoom_in = controller.handle_double_tap(PointD::new(150.0, 300.0)).unwrap();
        let reset = controller.reset_zoom(false);
        assert!(!reset.is_animated());
        assert_eq!(recorder.events(), vec![false]);

        assert!(!controller.complete_transition(zoom_in.id()));
        assert_eq!(recorder.events(), vec![false]);
        assert!(!controller.is_zoomed());
    }

    #[test]
    fn test_viewport_resize_while_idle() {
        let (mut controller, recorder) = create_test_controller();

        controller.set_viewport(SizeD::new(600.0, 300.0));
        assert_eq!(controller.state().content_size, SizeD::new(600.0, 300.0));
        assert_eq!(controller.fit_rect(), RectD::new(150.0, 0.0, 450.0, 300.0));
        assert_eq!(controller.bounds().max_scale, 4.0);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_viewport_resize_while_zoomed_keeps_state() {
        let (mut controller, _recorder) = create_test_controller();
        let handle = controller.handle_double_tap(PointD::new(150.0, 300.0)).unwrap();
        controller.complete_transition(handle.id());
        let zoomed = *controller.state();

        controller.set_viewport(SizeD::new(320.0, 640.0));
        assert_eq!(*controller.state(), zoomed);
    }

    #[test]
    fn test_bounds_follow_image() {
        let (mut controller, _recorder) = create_test_controller();

        // 3000x600 becomes a 300x60 strip, covering needs 10x
        controller.load_image(ImageSpec::new(3000.0, 600.0));
        assert!(approx_eq(controller.bounds().max_scale, 10.0, 1.0e-9));
    }

    #[test]
    fn test_viewport_shrink_clamps_zoomed_scale() {
        let (mut controller, recorder) = create_test_controller();
        controller.load_image(ImageSpec::new(3000.0, 600.0));
        let handle = controller.handle_zoom_gesture_ended(9.0);
        controller.complete_transition(handle.id());
        assert_eq!(controller.state().scale, 9.0);
        recorder.events.borrow_mut().clear();

        // The image covers a 300x60 viewport at rest, only the 4x floor remains
        let handle = controller.set_viewport(SizeD::new(300.0, 60.0)).unwrap();
        assert!(!handle.is_animated());
        let state = *controller.state();
        assert_eq!(controller.bounds().max_scale, 4.0);
        assert_eq!(state.scale, 4.0);
        assert_eq!(state.image_frame, RectD::new(0.0, 0.0, 1200.0, 240.0));
        assert_eq!(state.content_size, SizeD::new(1200.0, 240.0));
        assert!(state.is_zooming);
        assert_eq!(recorder.events(), vec![true]);
    }

    #[test]
    fn test_same_image_new_size_clamps_zoomed_scale() {
        let (mut controller, _recorder) = create_test_controller();
        let strip = ImageSpec::new(3000.0, 600.0);
        controller.load_image(strip);
        let handle = controller.handle_zoom_gesture_ended(9.0);
        controller.complete_transition(handle.id());

        // Same image reported with its real, square size
        let handle = controller
            .set_image(Some(ImageSpec::with_id(strip.id, 600.0, 600.0)))
            .unwrap();
        assert!(!handle.is_animated());
        assert_eq!(controller.state().scale, 4.0);
        assert_eq!(controller.state().content_size, SizeD::new(1200.0, 1200.0));
        assert!(controller.state().scale <= controller.bounds().max_scale);
    }

    #[test]
    fn test_viewport_resize_during_animated_reset() {
        let (mut controller, recorder) = create_test_controller();
        let zoom_in = controller.handle_double_tap(PointD::new(150.0, 300.0)).unwrap();
        controller.complete_transition(zoom_in.id());
        let zoom_out = controller.handle_double_tap(PointD::new(150.0, 300.0)).unwrap();
        assert!(zoom_out.is_animated());

        let resized = controller.set_viewport(SizeD::new(200.0, 400.0)).unwrap();
        assert!(!resized.is_animated());
        assert_eq!(controller.state().image_frame, RectD::new(0.0, 0.0, 200.0, 400.0));
        assert_eq!(controller.state().content_size, SizeD::new(200.0, 400.0));
        assert!(!controller.complete_transition(zoom_out.id()));

        // The next double tap zooms in again
        let zoom_in = controller.handle_double_tap(PointD::new(100.0, 200.0)).unwrap();
        assert!(zoom_in.is_zooming());
        assert_eq!(recorder.events(), vec![true, false]);
    }

    #[test]
    fn test_double_tap_without_zoom_range_is_ignored() {
        let config = ViewerConfig::default()
            .with_min_zoom_level(5.0)
            .with_max_zoom_floor(4.0);
        let mut controller = ZoomController::new(config);
        controller.set_viewport(SizeD::new(300.0, 600.0));
        controller.load_image(ImageSpec::new(600.0, 600.0));
        assert_eq!(controller.bounds().max_scale, 5.0);

        assert!(controller.handle_double_tap(PointD::new(150.0, 300.0)).is_none());
        assert!(!controller.is_zoomed());
        assert_eq!(controller.state().scale, 5.0);
    }

    #[test]
    fn test_dropped_observer_is_skipped() {
        let (mut controller, recorder) = create_test_controller();
        drop(recorder);

        // Must not panic
        controller.reset_zoom(false);
        controller.clear_observer();
        controller.reset_zoom(false);
    }

    #[test]
    fn test_dismantle() {
        let (mut controller, recorder) = create_test_controller();
        controller.handle_double_tap(PointD::new(150.0, 300.0));

        let handle = controller.dismantle();
        assert!(!handle.is_animated());
        assert!(controller.image().is_none());
        assert!(!controller.is_zoomed());
        assert!(controller.pending_transition().is_none());
        assert_eq!(recorder.events(), vec![false]);
    }

    #[test]
    fn test_scroll_to_updates_offset() {
        let (mut controller, _recorder) = create_test_controller();
        controller.scroll_to(PointD::new(10.0, 20.0));
        assert_eq!(controller.state().content_offset, PointD::new(10.0, 20.0));
    }
}
