// Application state for HTTP handlers
use crate::application::demo_data::DemoDataService;
use crate::application::fleet_service::FleetService;

#[derive(Clone)]
pub struct AppState {
    pub fleet_service: FleetService,
    pub demo_data: DemoDataService,
    pub placeholder_image: String,
}
