use crate::{
    app::map_scene::MapScene,
    form::form_state::FormState,
    response::{
        response_mapper::{MapOverlay, ResponseMapper},
        routing_response::RoutingResponse,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Editing,
    /// A request is in flight; the map keeps showing the form's points.
    Submitting,
    ShowingResult,
}

/// Everything the application holds between two events: the form, the
/// display mode and the last result.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    form: FormState,
    mode: DisplayMode,
    last_response: Option<RoutingResponse>,
    last_overlay: Option<MapOverlay>,
}

impl AppState {
    pub fn new(form: FormState) -> Self {
        AppState {
            form,
            mode: DisplayMode::Editing,
            last_response: None,
            last_overlay: None,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn last_response(&self) -> Option<&RoutingResponse> {
        self.last_response.as_ref()
    }

    pub fn last_overlay(&self) -> Option<&MapOverlay> {
        self.last_overlay.as_ref()
    }

    /// A result only lives until the next submission.
    pub(crate) fn start_submitting(&mut self) {
        self.last_response = None;
        self.last_overlay = None;
        self.mode = DisplayMode::Submitting;
    }

    pub(crate) fn cancel_submitting(&mut self) {
        self.mode = DisplayMode::Editing;
    }

    pub(crate) fn show_result(
        &mut self,
        response: RoutingResponse,
        overlay: MapOverlay,
    ) -> &MapOverlay {
        self.last_response = Some(response);
        self.mode = DisplayMode::ShowingResult;
        self.last_overlay.insert(overlay)
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.last_response = None;
        self.last_overlay = None;
        self.mode = DisplayMode::Editing;
    }

    pub fn scene(&self, mapper: &ResponseMapper) -> MapScene {
        match (self.mode, &self.last_overlay) {
            (DisplayMode::ShowingResult, Some(overlay)) => MapScene::Result(overlay.clone()),
            _ => MapScene::Points(mapper.input_markers(self.form.points())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        delivery_point::DeliveryPoint,
        response::routing_response::CourierRoute,
        test_utils::point,
    };

    fn response() -> RoutingResponse {
        RoutingResponse::new(
            vec![CourierRoute::new(vec![point(1.0, 1.0), point(2.0, 2.0)], vec![]).unwrap()],
            vec![point(9.0, 9.0)],
        )
    }

    #[test]
    fn test_scene_follows_mode() {
        let mapper = ResponseMapper::default();
        let mut state = AppState::default();
        state.form_mut().push_point(DeliveryPoint::new(point(50.1, 30.1)));

        let MapScene::Points(points) = state.scene(&mapper) else {
            panic!("expected the form's points");
        };
        assert_eq!(points.len(), 2);

        state.start_submitting();
        assert!(matches!(state.scene(&mapper), MapScene::Points(_)));

        let response = response();
        let overlay = mapper.to_markers(&response);
        state.show_result(response, overlay.clone());
        assert_eq!(state.mode(), DisplayMode::ShowingResult);
        assert_eq!(state.scene(&mapper), MapScene::Result(overlay));
    }

    #[test]
    fn test_new_submission_drops_previous_result() {
        let mapper = ResponseMapper::default();
        let mut state = AppState::default();

        let response = response();
        let overlay = mapper.to_markers(&response);
        state.start_submitting();
        state.show_result(response, overlay);
        assert!(state.last_response().is_some());

        state.start_submitting();
        assert!(state.last_response().is_none());
        assert!(state.last_overlay().is_none());

        state.cancel_submitting();
        assert_eq!(state.mode(), DisplayMode::Editing);
        assert!(matches!(state.scene(&mapper), MapScene::Points(_)));
    }

    #[test]
    fn test_reset_drops_result() {
        let mapper = ResponseMapper::default();
        let mut state = AppState::default();
        state.form_mut().push_point(DeliveryPoint::new(point(50.1, 30.1)));

        let response = response();
        let overlay = mapper.to_markers(&response);
        state.show_result(response, overlay);
        state.reset();

        assert_eq!(state.mode(), DisplayMode::Editing);
        assert!(state.last_response().is_none());
        assert!(state.last_overlay().is_none());
        assert_eq!(state.form().points().len(), 1);
    }
}
