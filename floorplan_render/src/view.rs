// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floorplan_imaging::ImagingBackend;
use floorplan_model::FloorPlanData;
use floorplan_view2d::PlanViewport;
use kurbo::Size;

use crate::Renderer;

/// Caller-side observer that repaints a floor plan when its inputs change.
///
/// The surrounding UI owns one `FloorPlanView` per canvas. It forwards new
/// plan data through [`FloorPlanView::set_plan`] and container size changes
/// through [`FloorPlanView::on_resize`]; both repaint into the backend the
/// caller hands in once a plan and a size are known. A resize to the
/// current size repaints nothing.
///
/// ```
/// use floorplan_imaging_ref::RefBackend;
/// use floorplan_model::{Dimensions, FloorPlanData};
/// use floorplan_render::{FloorPlanView, Renderer};
///
/// let mut view = FloorPlanView::new(Renderer::default());
/// let mut frame = RefBackend::default();
///
/// // No size yet, so nothing to paint.
/// assert!(!view.set_plan(&mut frame, FloorPlanData::new(Dimensions::new(100.0, 50.0))));
/// assert!(view.on_resize(&mut frame, 200, 100));
/// assert!(!view.on_resize(&mut RefBackend::default(), 200, 100));
/// assert_eq!(view.frames(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct FloorPlanView {
    renderer: Renderer,
    plan: Option<FloorPlanData>,
    size: Option<(u32, u32)>,
    frames: u64,
}

impl FloorPlanView {
    /// Creates a view with no plan and no size.
    #[must_use]
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            plan: None,
            size: None,
            frames: 0,
        }
    }

    /// The plan currently shown.
    #[must_use]
    pub fn plan(&self) -> Option<&FloorPlanData> {
        self.plan.as_ref()
    }

    /// The last surface size reported through [`FloorPlanView::on_resize`].
    #[must_use]
    pub fn surface_size(&self) -> Option<(u32, u32)> {
        self.size
    }

    /// Number of times the view has painted.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The current plan-to-surface mapping, for hit testing pointer input.
    #[must_use]
    pub fn viewport(&self) -> Option<PlanViewport> {
        let plan = self.plan.as_ref()?;
        let (w, h) = self.size?;
        Some(PlanViewport::new(
            plan.dimensions.into(),
            Size::new(f64::from(w), f64::from(h)),
        ))
    }

    /// Replaces the plan and repaints if a surface size is known.
    ///
    /// Returns `true` if a frame was painted.
    pub fn set_plan<B: ImagingBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        plan: FloorPlanData,
    ) -> bool {
        self.plan = Some(plan);
        self.repaint(backend)
    }

    /// Records a new surface size and repaints if it changed.
    ///
    /// Returns `true` if a frame was painted.
    pub fn on_resize<B: ImagingBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        width: u32,
        height: u32,
    ) -> bool {
        if self.size == Some((width, height)) {
            return false;
        }
        self.size = Some((width, height));
        self.repaint(backend)
    }

    /// Paints the current plan at the current size.
    ///
    /// Returns `false` if either is still unknown.
    pub fn repaint<B: ImagingBackend + ?Sized>(&mut self, backend: &mut B) -> bool {
        let (Some(plan), Some((width, height))) = (self.plan.as_ref(), self.size) else {
            return false;
        };
        self.renderer.render(backend, plan, width, height);
        self.frames += 1;
        true
    }
}
