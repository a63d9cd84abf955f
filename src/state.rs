use std::sync::Arc;

use crate::config::Config;
use crate::lorem::LoremSource;
use crate::store::RecordStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub config: Config,
    pub lorem: LoremSource,
}
