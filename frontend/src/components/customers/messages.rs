use common::config::ApiConfig;
use common::store::Action;

#[derive(Clone)]
pub enum Msg {
    Configured(Result<ApiConfig, String>),
    Store(Action),
}
