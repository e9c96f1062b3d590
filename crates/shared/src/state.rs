//! View state and its transitions.
//!
//! One `ViewState` value describes everything the render layer needs to
//! recompute the visible map. Handlers never mutate it in place: each
//! transition takes the old state plus its triggering context and returns a
//! `Transition` holding the new state and any directives for the render
//! sink. Missing data degrades to a notice or an inert view, never a panic.

use crate::camera;
use crate::era::DEFAULT_ERA_INDEX;
use crate::filter::CategoryFilter;
use crate::models::{Camera, Era};
use crate::regions::{self, RegionId};

/// Which top-level view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Tour,
    History,
}

/// Geographic granularity currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    Local,
    Parent,
}

/// Feature switches distinguishing deployment variants. Everything else in
/// the engine is shared across variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasConfig {
    pub scope_toggle: bool,
    pub search: bool,
    pub auto_fit: bool,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            scope_toggle: true,
            search: true,
            auto_fit: false,
        }
    }
}

/// Camera directive produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMove {
    Jump(Camera),
    /// Fit the camera around the currently visible spots (auto-fit variants).
    FitVisible,
}

/// Result of a transition: the next state plus render-sink directives.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ViewState,
    pub camera: Option<CameraMove>,
    pub notice: Option<String>,
}

impl Transition {
    fn keep(state: &ViewState) -> Self {
        Self {
            state: state.clone(),
            camera: None,
            notice: None,
        }
    }

    fn to(state: ViewState) -> Self {
        Self {
            state,
            camera: None,
            notice: None,
        }
    }

    fn with_camera(mut self, camera: CameraMove) -> Self {
        self.camera = Some(camera);
        self
    }

    fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub mode: Mode,
    pub scope: Scope,
    pub filter: CategoryFilter,
    pub search: String,
    pub era_index: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Tour,
            scope: Scope::Local,
            filter: CategoryFilter::All,
            search: String::new(),
            era_index: DEFAULT_ERA_INDEX,
        }
    }

    /// Switch between tour and history. Entering tour clears any parent-scope
    /// override and restores the remembered filter and search term; entering
    /// history loads the default era and flies to its camera.
    pub fn set_mode(&self, mode: Mode, eras: &[Era], config: &AtlasConfig) -> Transition {
        match mode {
            Mode::Tour => {
                let next = ViewState {
                    mode: Mode::Tour,
                    scope: Scope::Local,
                    ..self.clone()
                };
                let mut t = Transition::to(next);
                t.camera = if config.auto_fit {
                    Some(CameraMove::FitVisible)
                } else {
                    camera_for_filter(&t.state.filter)
                };
                t
            }
            Mode::History => {
                let era_index = if eras.is_empty() {
                    0
                } else {
                    DEFAULT_ERA_INDEX.min(eras.len() - 1)
                };
                let next = ViewState {
                    mode: Mode::History,
                    era_index,
                    ..self.clone()
                };
                match eras.get(era_index) {
                    Some(era) => Transition::to(next).with_camera(CameraMove::Jump(Camera {
                        center: era.center,
                        zoom: era.zoom,
                    })),
                    // Era data missing entirely: inert history view.
                    None => Transition::to(next),
                }
            }
        }
    }

    /// Select an era on the timeline. Out-of-range indices and calls outside
    /// history mode leave the displayed state unchanged.
    pub fn set_era(&self, index: usize, eras: &[Era]) -> Transition {
        if self.mode != Mode::History {
            return Transition::keep(self);
        }
        let Some(era) = eras.get(index) else {
            return Transition::keep(self);
        };
        let next = ViewState {
            era_index: index,
            ..self.clone()
        };
        Transition::to(next).with_camera(CameraMove::Jump(Camera {
            center: era.center,
            zoom: era.zoom,
        }))
    }

    /// Replace the category filter. Without auto-fit, tag filters and the
    /// all-filter reset to the default regional view while area filters leave
    /// the camera where the user put it.
    pub fn set_filter(&self, filter: CategoryFilter, config: &AtlasConfig) -> Transition {
        let next = ViewState {
            filter,
            ..self.clone()
        };
        let mut t = Transition::to(next);
        t.camera = if config.auto_fit {
            Some(CameraMove::FitVisible)
        } else {
            camera_for_filter(&t.state.filter)
        };
        t
    }

    /// Replace the free-text search term. Ignored in variants without search.
    pub fn set_search(&self, term: impl Into<String>, config: &AtlasConfig) -> Transition {
        if !config.search {
            return Transition::keep(self);
        }
        let next = ViewState {
            search: term.into(),
            ..self.clone()
        };
        if config.auto_fit {
            Transition::to(next).with_camera(CameraMove::FitVisible)
        } else {
            Transition::to(next)
        }
    }

    /// Flip between local and parent scope. Requires the parent dataset;
    /// toggling before it has loaded emits a notice and changes nothing.
    pub fn toggle_scope(&self, parent_loaded: bool, config: &AtlasConfig) -> Transition {
        if !config.scope_toggle {
            return Transition::keep(self);
        }
        if !parent_loaded {
            return Transition::keep(self)
                .with_notice("湖南省边界数据尚未加载，请稍后再试");
        }
        match self.scope {
            Scope::Local => {
                let next = ViewState {
                    scope: Scope::Parent,
                    ..self.clone()
                };
                Transition::to(next)
                    .with_camera(CameraMove::Jump(regions::camera(RegionId::Hunan)))
            }
            Scope::Parent => {
                let next = ViewState {
                    scope: Scope::Local,
                    ..self.clone()
                };
                Transition::to(next)
                    .with_camera(CameraMove::Jump(camera::default_camera()))
            }
        }
    }

    /// Parent-scope polygon click: drill back down into the local region.
    /// Navigational only, the remembered category filter is untouched.
    /// Clicking a polygon outside the local region's hierarchy does nothing.
    pub fn drill_down(&self, polygon_name: &str) -> Transition {
        if self.scope != Scope::Parent {
            return Transition::keep(self);
        }
        let target = match regions::resolve_region(polygon_name) {
            Some(RegionId::Hunan) | None => return Transition::keep(self),
            Some(id) => id,
        };
        let next = ViewState {
            scope: Scope::Local,
            ..self.clone()
        };
        Transition::to(next).with_camera(CameraMove::Jump(regions::camera(target)))
    }
}

/// Camera behavior without auto-fit: non-area filters reset to the default
/// regional view, area filters keep the current viewport.
fn camera_for_filter(filter: &CategoryFilter) -> Option<CameraMove> {
    match filter {
        CategoryFilter::All | CategoryFilter::Tag(_) => {
            Some(CameraMove::Jump(camera::default_camera()))
        }
        CategoryFilter::Area(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EraGroup, LatLng};

    fn eras(n: usize) -> Vec<Era> {
        (0..n)
            .map(|i| Era {
                title: format!("era {i}"),
                year: format!("{i}"),
                desc: String::new(),
                center: LatLng::new(27.0 + i as f64, 111.0),
                zoom: 8.0 + i as f64,
                groups: vec![EraGroup {
                    name: "g".to_string(),
                    color: "#8b5cf6".to_string(),
                    members: vec!["新化".to_string()],
                    center: LatLng::new(27.7, 111.3),
                    zoom: 10.0,
                }],
            })
            .collect()
    }

    fn history_state() -> ViewState {
        ViewState {
            mode: Mode::History,
            ..ViewState::new()
        }
    }

    #[test]
    fn test_initial_state_defaults() {
        let state = ViewState::new();
        assert_eq!(state.mode, Mode::Tour);
        assert_eq!(state.scope, Scope::Local);
        assert_eq!(state.filter, CategoryFilter::All);
        assert!(state.search.is_empty());
    }

    #[test]
    fn test_enter_history_loads_default_era_and_flies() {
        let eras = eras(8);
        let t = ViewState::new().set_mode(Mode::History, &eras, &AtlasConfig::default());
        assert_eq!(t.state.mode, Mode::History);
        assert_eq!(t.state.era_index, DEFAULT_ERA_INDEX);
        let expected = Camera {
            center: eras[DEFAULT_ERA_INDEX].center,
            zoom: eras[DEFAULT_ERA_INDEX].zoom,
        };
        assert_eq!(t.camera, Some(CameraMove::Jump(expected)));
    }

    #[test]
    fn test_enter_history_with_short_era_list_clamps() {
        let eras = eras(2);
        let t = ViewState::new().set_mode(Mode::History, &eras, &AtlasConfig::default());
        assert_eq!(t.state.era_index, 1);
    }

    #[test]
    fn test_enter_history_with_no_eras_is_inert() {
        let t = ViewState::new().set_mode(Mode::History, &[], &AtlasConfig::default());
        assert_eq!(t.state.mode, Mode::History);
        assert_eq!(t.camera, None);
        assert_eq!(t.notice, None);
    }

    #[test]
    fn test_enter_tour_clears_parent_scope_and_keeps_filter() {
        let state = ViewState {
            mode: Mode::History,
            scope: Scope::Parent,
            filter: CategoryFilter::Tag("高校".to_string()),
            search: "书院".to_string(),
            era_index: 3,
        };
        let t = state.set_mode(Mode::Tour, &eras(8), &AtlasConfig::default());
        assert_eq!(t.state.mode, Mode::Tour);
        assert_eq!(t.state.scope, Scope::Local);
        assert_eq!(t.state.filter, CategoryFilter::Tag("高校".to_string()));
        assert_eq!(t.state.search, "书院");
        assert_eq!(
            t.camera,
            Some(CameraMove::Jump(camera::default_camera()))
        );
    }

    #[test]
    fn test_set_era_out_of_bounds_is_silent_noop() {
        let eras = eras(8);
        let state = history_state();
        let t = state.set_era(99, &eras);
        assert_eq!(t.state, state);
        assert_eq!(t.camera, None);
        assert_eq!(t.notice, None);
    }

    #[test]
    fn test_set_era_in_bounds_updates_and_flies() {
        let eras = eras(8);
        let t = history_state().set_era(2, &eras);
        assert_eq!(t.state.era_index, 2);
        let expected = Camera {
            center: eras[2].center,
            zoom: eras[2].zoom,
        };
        assert_eq!(t.camera, Some(CameraMove::Jump(expected)));
    }

    #[test]
    fn test_set_era_outside_history_mode_is_noop() {
        let eras = eras(8);
        let state = ViewState::new();
        let t = state.set_era(2, &eras);
        assert_eq!(t.state, state);
        assert_eq!(t.camera, None);
    }

    #[test]
    fn test_set_filter_tag_resets_camera_without_auto_fit() {
        let config = AtlasConfig::default();
        let t = ViewState::new().set_filter(CategoryFilter::Tag("学府".to_string()), &config);
        assert_eq!(t.state.filter, CategoryFilter::Tag("学府".to_string()));
        assert_eq!(
            t.camera,
            Some(CameraMove::Jump(camera::default_camera()))
        );
    }

    #[test]
    fn test_set_filter_area_keeps_camera() {
        let config = AtlasConfig::default();
        let t = ViewState::new().set_filter(CategoryFilter::Area("新化".to_string()), &config);
        assert_eq!(t.state.filter, CategoryFilter::Area("新化".to_string()));
        assert_eq!(t.camera, None);
    }

    #[test]
    fn test_set_filter_with_auto_fit_always_fits() {
        let config = AtlasConfig {
            auto_fit: true,
            ..AtlasConfig::default()
        };
        let t = ViewState::new().set_filter(CategoryFilter::All, &config);
        assert_eq!(t.camera, Some(CameraMove::FitVisible));
    }

    #[test]
    fn test_set_search_updates_term() {
        let t = ViewState::new().set_search("温泉", &AtlasConfig::default());
        assert_eq!(t.state.search, "温泉");
        assert_eq!(t.camera, None);
    }

    #[test]
    fn test_set_search_ignored_when_variant_lacks_search() {
        let config = AtlasConfig {
            search: false,
            ..AtlasConfig::default()
        };
        let state = ViewState::new();
        let t = state.set_search("温泉", &config);
        assert_eq!(t.state, state);
    }

    #[test]
    fn test_toggle_scope_before_parent_loaded_notices_and_keeps_state() {
        let state = ViewState::new();
        let t = state.toggle_scope(false, &AtlasConfig::default());
        assert_eq!(t.state, state);
        assert!(t.notice.is_some());
        assert_eq!(t.camera, None);
    }

    #[test]
    fn test_toggle_scope_flips_and_flies() {
        let config = AtlasConfig::default();
        let t = ViewState::new().toggle_scope(true, &config);
        assert_eq!(t.state.scope, Scope::Parent);
        assert!(matches!(t.camera, Some(CameraMove::Jump(_))));

        let back = t.state.toggle_scope(true, &config);
        assert_eq!(back.state.scope, Scope::Local);
        assert_eq!(
            back.camera,
            Some(CameraMove::Jump(camera::default_camera()))
        );
    }

    #[test]
    fn test_toggle_scope_disabled_variant_is_noop() {
        let config = AtlasConfig {
            scope_toggle: false,
            ..AtlasConfig::default()
        };
        let state = ViewState::new();
        let t = state.toggle_scope(true, &config);
        assert_eq!(t.state, state);
        assert_eq!(t.notice, None);
    }

    #[test]
    fn test_drill_down_enters_local_scope() {
        let state = ViewState {
            scope: Scope::Parent,
            ..ViewState::new()
        };
        let t = state.drill_down("娄底市");
        assert_eq!(t.state.scope, Scope::Local);
        assert!(matches!(t.camera, Some(CameraMove::Jump(_))));
        // The remembered filter is untouched: navigation, not filtering.
        assert_eq!(t.state.filter, state.filter);
    }

    #[test]
    fn test_drill_down_unknown_polygon_is_noop() {
        let state = ViewState {
            scope: Scope::Parent,
            ..ViewState::new()
        };
        let t = state.drill_down("长沙市");
        assert_eq!(t.state, state);
        assert_eq!(t.camera, None);
    }

    #[test]
    fn test_drill_down_outside_parent_scope_is_noop() {
        let state = ViewState::new();
        let t = state.drill_down("娄底市");
        assert_eq!(t.state, state);
    }
}
